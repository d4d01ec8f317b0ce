use core::marker::PhantomData;

use crate::rtc::{
    Result,
    transport::{FnTransport, PowerOnFn},
};

// Builder states
pub struct NeedRead;
pub struct NeedWrite;
pub struct Ready;

/// Typestate builder for [`FnTransport`].
///
/// Read and write functions are mandatory and must be supplied in that
/// order; the power-on hook is optional.
///
/// ```
/// use pcf8523::prelude::*;
///
/// let transport = TransportBuilder::new()
///     .read(|_addr, buf: &mut [u8]| {
///         buf.fill(0);
///         Ok(())
///     })
///     .write(|_addr, _data: &[u8]| Ok(()))
///     .power_on(|_addr| Ok(()))
///     .build();
///
/// let mut rtc = Pcf8523::new(transport);
/// assert!(rtc.init().is_ok());
/// ```
pub struct TransportBuilder<R, W, P, State> {
    read: R,
    write: W,
    power_on: Option<P>,
    _state: PhantomData<State>,
}

// Start the builder
impl TransportBuilder<(), (), PowerOnFn, NeedRead> {
    pub fn new() -> Self {
        TransportBuilder {
            read: (),
            write: (),
            power_on: None,
            _state: PhantomData,
        }
    }
}

impl Default for TransportBuilder<(), (), PowerOnFn, NeedRead> {
    fn default() -> Self {
        Self::new()
    }
}

// Set read function
impl TransportBuilder<(), (), PowerOnFn, NeedRead> {
    pub fn read<R>(self, read: R) -> TransportBuilder<R, (), PowerOnFn, NeedWrite>
    where
        R: FnMut(u8, &mut [u8]) -> Result<()>,
    {
        TransportBuilder {
            read,
            write: (),
            power_on: None,
            _state: PhantomData,
        }
    }
}

// Set write function
impl<R> TransportBuilder<R, (), PowerOnFn, NeedWrite> {
    pub fn write<W>(self, write: W) -> TransportBuilder<R, W, PowerOnFn, Ready>
    where
        W: FnMut(u8, &[u8]) -> Result<()>,
    {
        TransportBuilder {
            read: self.read,
            write,
            power_on: None,
            _state: PhantomData,
        }
    }
}

impl<R, W, P> TransportBuilder<R, W, P, Ready>
where
    R: FnMut(u8, &mut [u8]) -> Result<()>,
    W: FnMut(u8, &[u8]) -> Result<()>,
    P: FnMut(u8) -> Result<()>,
{
    /// Supply a power-on hook; it runs first during initialization and
    /// gates the rest of the sequence.
    pub fn power_on<P2>(self, power_on: P2) -> TransportBuilder<R, W, P2, Ready>
    where
        P2: FnMut(u8) -> Result<()>,
    {
        TransportBuilder {
            read: self.read,
            write: self.write,
            power_on: Some(power_on),
            _state: PhantomData,
        }
    }

    pub fn build(self) -> FnTransport<R, W, P> {
        FnTransport {
            read: self.read,
            write: self.write,
            power_on: self.power_on,
        }
    }
}
