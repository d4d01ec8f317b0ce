/// Failure outcome of a driver operation.
///
/// Carries no detail: the only thing a caller learns is *which* operation
/// failed. After a failed bit update the register value must be treated as
/// unknown, not as unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error;

/// Two-valued outcome returned by every transport and driver operation.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rtc bus transaction failed")
    }
}

impl core::error::Error for Error {}
