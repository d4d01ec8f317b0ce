//! Interrupt classification.
//!
//! The pending-interrupt flags live in Control_2 and Control_3. They are
//! evaluated in a fixed priority order and only the first pending flag is
//! reported. Latched event flags are acknowledged by clearing them; the
//! watchdog flag is left to the caller and battery-low is a level, not an
//! event.

use bitmaps::Bitmap;

use crate::rtc::{
    registers::{CONTROL_2, CONTROL_3, control_2, control_3},
    snapshot::RegisterSnapshot,
};

/// Source of a pending interrupt, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptSource {
    Watchdog,
    CountdownA,
    CountdownB,
    Second,
    Alarm,
    BatterySwitchOver,
    BatteryLow,
}

/// Evaluation order of [`classify`], highest priority first.
pub const PRIORITY: [InterruptSource; 7] = [
    InterruptSource::Watchdog,
    InterruptSource::CountdownA,
    InterruptSource::CountdownB,
    InterruptSource::Second,
    InterruptSource::Alarm,
    InterruptSource::BatterySwitchOver,
    InterruptSource::BatteryLow,
];

impl InterruptSource {
    /// Register holding this source's flag.
    pub const fn flag_register(self) -> u8 {
        match self {
            InterruptSource::BatterySwitchOver | InterruptSource::BatteryLow => CONTROL_3,
            _ => CONTROL_2,
        }
    }

    pub const fn flag_bit(self) -> u8 {
        match self {
            InterruptSource::Watchdog => control_2::WTAF,
            InterruptSource::CountdownA => control_2::CTAF,
            InterruptSource::CountdownB => control_2::CTBF,
            InterruptSource::Second => control_2::SF,
            InterruptSource::Alarm => control_2::AF,
            InterruptSource::BatterySwitchOver => control_3::BSF,
            InterruptSource::BatteryLow => control_3::BLF,
        }
    }

    pub const fn flag_mask(self) -> u8 {
        1 << self.flag_bit()
    }

    /// Register and mask the driver clears to acknowledge this source, or
    /// `None` when it is only classified.
    pub const fn acknowledgement(self) -> Option<(u8, u8)> {
        match self {
            InterruptSource::Watchdog | InterruptSource::BatteryLow => None,
            _ => Some((self.flag_register(), self.flag_mask())),
        }
    }

    // Control_2 occupies bits 0..8 of the status bitmap, Control_3 bits 8..16.
    const fn status_index(self) -> usize {
        let base = if self.flag_register() == CONTROL_3 { 8 } else { 0 };
        base + self.flag_bit() as usize
    }
}

/// Interrupt flags captured from Control_2 and Control_3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags(Bitmap<16>);

impl StatusFlags {
    pub fn new(control_2: u8, control_3: u8) -> Self {
        Self(Bitmap::from_value(u16::from_le_bytes([control_2, control_3])))
    }

    pub fn from_snapshot(snapshot: &RegisterSnapshot) -> Self {
        Self::new(snapshot.control_2(), snapshot.control_3())
    }

    pub fn is_pending(&self, source: InterruptSource) -> bool {
        self.0.get(source.status_index())
    }

    /// Highest-priority pending source.
    pub fn highest(&self) -> Option<InterruptSource> {
        PRIORITY.into_iter().find(|&source| self.is_pending(source))
    }
}

/// Classifies the pending interrupt in a register snapshot.
pub fn classify(snapshot: &RegisterSnapshot) -> Option<InterruptSource> {
    StatusFlags::from_snapshot(snapshot).highest()
}
