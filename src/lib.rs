//! A `no_std`, no-alloc driver for the NXP PCF8523 real-time clock.
//!
//! The driver turns logical operations (read the date, set the alarm,
//! toggle a control bit, classify an interrupt) into short, fixed sequences
//! of register transactions over a caller-supplied byte bus.
//!
//! # Features
//!
//! - **Injectable transport** - any [`Transport`](rtc::Transport), plain
//!   closures via [`TransportBuilder`](rtc::TransportBuilder), or an
//!   `embedded-hal` I2C bus via [`I2cTransport`](rtc::I2cTransport)
//! - **Bit-exact register map** - every register and named bit of the chip
//! - **Read-modify-write bit access** - change masked bits only
//! - **Interrupt classification** - fixed-priority dispatch with flag
//!   acknowledgement
//! - **Two-valued outcome** - every operation returns success or a bare
//!   [`Error`](rtc::Error)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │  Pcf8523         │   │  RegisterAccess  │   │  Transport       │
//! │                  │   │                  │   │                  │
//! │  date()          │──▶│  read_registers  │──▶│  init(addr)      │
//! │  set_alarm()     │   │  write_registers │   │  read(addr, buf) │
//! │  handle_irq()    │   │  modify_register │   │  write(addr, buf)│
//! └──────────────────┘   └──────────────────┘   └──────────────────┘
//!          │
//!          ▼
//!   codec / interrupt
//! ```
//!
//! The driver holds no register state and does no locking. Access from
//! more than one context must be serialized by the caller, for example with
//! [`SharedPcf8523`](rtc::SharedPcf8523).
//!
//! # Example
//!
//! ```rust,no_run
//! use pcf8523::prelude::*;
//! use pcf8523::rtc::Result;
//!
//! fn bus_read(_addr: u8, buf: &mut [u8]) -> Result<()> {
//!     // Hand the buffer to the I2C peripheral here...
//!     buf.fill(0);
//!     Ok(())
//! }
//!
//! fn bus_write(_addr: u8, _data: &[u8]) -> Result<()> {
//!     Ok(())
//! }
//!
//! let transport = TransportBuilder::new()
//!     .read(bus_read)
//!     .write(bus_write)
//!     .build();
//!
//! let mut rtc = Pcf8523::new(transport);
//! rtc.init().unwrap();
//!
//! let now = rtc.date().unwrap();
//! rtc.set_alarm(&Alarm { minute: 0x30, hour: 0x07, day: 0x80 }).unwrap();
//!
//! if let Some(source) = rtc.handle_interrupt() {
//!     // React to the interrupt; its flag is already acknowledged.
//!     let _ = (now, source);
//! }
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod rtc;

pub mod prelude {
    pub use crate::rtc::prelude::*;
}
