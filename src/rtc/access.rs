//! Register access protocol.
//!
//! Two micro-protocols built on a [`Transport`]: select a register then
//! burst-read, and select a register then read-modify-write a single byte.
//! Every driver operation is one or two invocations of these.
//!
//! Neither protocol is atomic. A read-modify-write spans three bus
//! transactions and another bus master touching the same register in
//! between loses its update; serialize access to the device externally
//! (see [`SharedPcf8523`](crate::rtc::SharedPcf8523)).

use heapless::Vec;
use log::{trace, warn};

use crate::rtc::{
    Error, Result,
    registers::{ADDRESS, REGISTER_COUNT},
    transport::Transport,
};

/// Longest write frame: the selector byte plus the whole register map.
pub const FRAME_CAPACITY: usize = REGISTER_COUNT + 1;

/// Operation applied to the masked bits of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOp {
    /// `value | mask`
    Set,
    /// `value & !mask`
    Clear,
}

impl BitOp {
    #[inline]
    pub fn apply(self, value: u8, mask: u8) -> u8 {
        match self {
            BitOp::Set => value | mask,
            BitOp::Clear => value & !mask,
        }
    }
}

/// Register-level operations available on every [`Transport`].
pub trait RegisterAccess {
    /// Selects `start` and burst-reads `buf.len()` consecutive registers.
    ///
    /// A failed select short-circuits: the read is never attempted.
    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<()>;

    /// Writes `data` to consecutive registers starting at `start` in one
    /// frame.
    fn write_registers(&mut self, start: u8, data: &[u8]) -> Result<()>;

    /// Read-modify-write of a single register, returning the value written.
    ///
    /// Any failure leaves the register in an unknown state.
    fn modify_register(&mut self, reg: u8, mask: u8, op: BitOp) -> Result<u8>;

    /// Sets the `mask` bits of `reg`, leaving all other bits untouched.
    fn set_bits(&mut self, reg: u8, mask: u8) -> Result<()> {
        self.modify_register(reg, mask, BitOp::Set).map(|_| ())
    }

    /// Clears the `mask` bits of `reg`, leaving all other bits untouched.
    fn clear_bits(&mut self, reg: u8, mask: u8) -> Result<()> {
        self.modify_register(reg, mask, BitOp::Clear).map(|_| ())
    }
}

impl<T: Transport + ?Sized> RegisterAccess for T {
    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<()> {
        trace!("select 0x{:02X}, read {} byte(s)", start, buf.len());
        self.write(ADDRESS, &[start]).inspect_err(|_| {
            warn!("select of register 0x{:02X} failed", start);
        })?;
        self.read(ADDRESS, buf).inspect_err(|_| {
            warn!("read of {} byte(s) from 0x{:02X} failed", buf.len(), start);
        })
    }

    fn write_registers(&mut self, start: u8, data: &[u8]) -> Result<()> {
        let mut frame: Vec<u8, FRAME_CAPACITY> = Vec::new();
        frame.push(start).map_err(|_| Error)?;
        frame.extend_from_slice(data).map_err(|_| {
            warn!("write of {} byte(s) exceeds the register map", data.len());
            Error
        })?;

        trace!("write {} byte(s) at 0x{:02X}", data.len(), start);
        self.write(ADDRESS, &frame).inspect_err(|_| {
            warn!("write of {} byte(s) at 0x{:02X} failed", data.len(), start);
        })
    }

    fn modify_register(&mut self, reg: u8, mask: u8, op: BitOp) -> Result<u8> {
        let mut current = [0u8; 1];
        self.read_registers(reg, &mut current)?;

        let value = op.apply(current[0], mask);
        trace!(
            "0x{:02X}: 0x{:02X} -> 0x{:02X} ({:?} 0x{:02X})",
            reg, current[0], value, op, mask
        );
        self.write(ADDRESS, &[reg, value]).inspect_err(|_| {
            warn!("write-back of register 0x{:02X} failed, value unknown", reg);
        })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtc::test_support::{BusOp, MockBus};

    #[test]
    fn bit_op_apply() {
        assert_eq!(BitOp::Set.apply(0b1000_0001, 0b0000_0110), 0b1000_0111);
        assert_eq!(BitOp::Clear.apply(0b1111_1111, 0b0000_0110), 0b1111_1001);
        assert_eq!(BitOp::Clear.apply(0x00, 0xFF), 0x00);
    }

    #[test]
    fn read_registers_selects_then_reads() {
        let mut bus = MockBus::with_registers(&[0x10, 0x11, 0x12, 0x13]);
        let mut buf = [0u8; 3];
        bus.read_registers(0x01, &mut buf).unwrap();

        assert_eq!(buf, [0x11, 0x12, 0x13]);
        assert_eq!(bus.ops(), &[BusOp::Write(1), BusOp::Read(3)]);
        assert_eq!(bus.frame(0), &[0x01]);
    }

    #[test]
    fn failed_select_never_reads() {
        let mut bus = MockBus::new();
        bus.fail_write(0);

        let mut buf = [0u8; 7];
        assert_eq!(bus.read_registers(0x03, &mut buf), Err(Error));
        assert_eq!(bus.read_count(), 0);
    }

    #[test]
    fn write_registers_prefixes_start() {
        let mut bus = MockBus::new();
        bus.write_registers(0x0A, &[0x15, 0x07, 0x21]).unwrap();

        assert_eq!(bus.frame(0), &[0x0A, 0x15, 0x07, 0x21]);
        assert_eq!(bus.register(0x0A), 0x15);
        assert_eq!(bus.register(0x0C), 0x21);
    }

    #[test]
    fn write_registers_rejects_oversized_frame() {
        let mut bus = MockBus::new();
        let data = [0u8; FRAME_CAPACITY];
        assert_eq!(bus.write_registers(0x00, &data), Err(Error));
        assert_eq!(bus.write_count(), 0);
    }

    #[test]
    fn set_bits_preserves_unmasked_bits() {
        for initial in [0x00u8, 0x5A, 0xA5, 0xFF] {
            for mask in [0x00u8, 0x01, 0x38, 0xE0, 0xFF] {
                let mut bus = MockBus::new();
                bus.set_register(0x0F, initial);
                bus.set_bits(0x0F, mask).unwrap();

                let after = bus.register(0x0F);
                assert_eq!(after & mask, mask);
                assert_eq!(after & !mask, initial & !mask);
            }
        }
    }

    #[test]
    fn clear_bits_preserves_unmasked_bits() {
        for initial in [0x00u8, 0x5A, 0xA5, 0xFF] {
            for mask in [0x00u8, 0x04, 0xE0, 0xFF] {
                let mut bus = MockBus::new();
                bus.set_register(0x02, initial);
                bus.clear_bits(0x02, mask).unwrap();

                let after = bus.register(0x02);
                assert_eq!(after & mask, 0);
                assert_eq!(after & !mask, initial & !mask);
            }
        }
    }

    #[test]
    fn modify_issues_select_read_write_back() {
        let mut bus = MockBus::new();
        bus.set_register(0x01, 0b0100_1000);
        let value = bus.modify_register(0x01, 0b0100_0000, BitOp::Clear).unwrap();

        assert_eq!(value, 0b0000_1000);
        assert_eq!(
            bus.ops(),
            &[BusOp::Write(1), BusOp::Read(1), BusOp::Write(2)]
        );
        assert_eq!(bus.frame(1), &[0x01, 0b0000_1000]);
    }

    #[test]
    fn failed_select_skips_modify() {
        let mut bus = MockBus::new();
        bus.set_register(0x0F, 0x00);
        bus.fail_write(0);

        assert_eq!(bus.set_bits(0x0F, 0x38), Err(Error));
        assert_eq!(bus.read_count(), 0);
        assert_eq!(bus.write_count(), 1);
        assert_eq!(bus.register(0x0F), 0x00);
    }

    #[test]
    fn failed_read_skips_write_back() {
        let mut bus = MockBus::new();
        bus.fail_reads(true);

        assert_eq!(bus.set_bits(0x0F, 0x38), Err(Error));
        assert_eq!(bus.write_count(), 1);
    }

    #[test]
    fn failed_write_back_reports_failure() {
        let mut bus = MockBus::new();
        bus.set_register(0x02, 0xE0);
        bus.fail_write(1);

        assert_eq!(bus.clear_bits(0x02, 0xE0), Err(Error));
        assert_eq!(bus.read_count(), 1);
        assert_eq!(bus.register(0x02), 0xE0);
    }
}
