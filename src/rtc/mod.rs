pub mod access;
pub mod builder;
pub mod codec;
pub mod driver;
pub mod error;
pub mod i2c;
pub mod interrupt;
pub mod registers;
pub mod shared;
pub mod snapshot;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use access::{BitOp, RegisterAccess};
pub use builder::TransportBuilder;
pub use codec::{Alarm, DateTime};
pub use driver::Pcf8523;
pub use error::{Error, Result};
pub use i2c::I2cTransport;
pub use interrupt::{InterruptSource, StatusFlags, classify};
pub use shared::SharedPcf8523;
pub use snapshot::RegisterSnapshot;
pub use transport::{FnTransport, Transport};

pub mod prelude {
    pub use super::{
        Alarm, BitOp, DateTime, Error, FnTransport, I2cTransport, InterruptSource, Pcf8523,
        RegisterAccess, RegisterSnapshot, SharedPcf8523, Transport, TransportBuilder,
    };
}
