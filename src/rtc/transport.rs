use crate::rtc::Result;

/// Byte-oriented bus port the driver talks through.
///
/// Every method receives the left-shifted device address
/// ([`ADDRESS`](crate::rtc::registers::ADDRESS)); buffer lengths are the
/// transaction lengths. Implementations block until the transfer is done
/// and report plain success or failure.
pub trait Transport {
    /// Power-on hook, called once by [`Pcf8523::init`](crate::rtc::Pcf8523::init).
    ///
    /// The default assumes the device is already powered and reachable.
    fn init(&mut self, address: u8) -> Result<()> {
        let _ = address;
        Ok(())
    }

    /// Burst-reads `buf.len()` bytes from the currently selected register.
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<()>;

    /// Burst-writes `data`; the first byte selects the register.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn init(&mut self, address: u8) -> Result<()> {
        (**self).init(address)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<()> {
        (**self).read(address, buf)
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }
}

/// Signature of an optional power-on hook.
pub type PowerOnFn = fn(u8) -> Result<()>;

/// Transport assembled from plain functions or closures.
///
/// Usually built with [`TransportBuilder`](crate::rtc::TransportBuilder).
/// A missing power-on hook means the device is assumed ready.
pub struct FnTransport<R, W, P = PowerOnFn> {
    pub(crate) read: R,
    pub(crate) write: W,
    pub(crate) power_on: Option<P>,
}

impl<R, W> FnTransport<R, W, PowerOnFn>
where
    R: FnMut(u8, &mut [u8]) -> Result<()>,
    W: FnMut(u8, &[u8]) -> Result<()>,
{
    pub fn new(read: R, write: W) -> Self {
        Self {
            read,
            write,
            power_on: None,
        }
    }
}

impl<R, W, P> FnTransport<R, W, P> {
    /// Returns true if a power-on hook was supplied.
    pub fn has_power_on(&self) -> bool {
        self.power_on.is_some()
    }
}

impl<R, W, P> core::fmt::Debug for FnTransport<R, W, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnTransport")
            .field("power_on", &self.power_on.is_some())
            .finish_non_exhaustive()
    }
}

impl<R, W, P> Transport for FnTransport<R, W, P>
where
    R: FnMut(u8, &mut [u8]) -> Result<()>,
    W: FnMut(u8, &[u8]) -> Result<()>,
    P: FnMut(u8) -> Result<()>,
{
    fn init(&mut self, address: u8) -> Result<()> {
        match self.power_on.as_mut() {
            Some(power_on) => power_on(address),
            None => Ok(()),
        }
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<()> {
        (self.read)(address, buf)
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (self.write)(address, data)
    }
}
