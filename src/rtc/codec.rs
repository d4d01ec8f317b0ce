//! Field codec between the date/alarm structs and their register bytes.
//!
//! Decoding a date masks each byte down to its field width, discarding the
//! status bits the chip keeps in the same byte (the oscillator-stop flag
//! shares the seconds register, for example). Encoding is a direct copy: the
//! caller supplies values already within each field's width.
//!
//! The alarm codec applies no masking in either direction, so the
//! alarm-enable bit in position 7 of each alarm register travels with the
//! value.

use crate::rtc::registers::{MINUTE_ALARM, SECONDS};

/// Number of date/time registers, starting at [`DATE_START`].
pub const DATE_LEN: usize = 7;
/// Number of alarm registers handled, starting at [`ALARM_START`].
pub const ALARM_LEN: usize = 3;

/// First register of a date transaction.
pub const DATE_START: u8 = SECONDS;
/// First register of an alarm transaction.
pub const ALARM_START: u8 = MINUTE_ALARM;

pub const SECOND_MASK: u8 = 0x7F;
pub const MINUTE_MASK: u8 = 0x7F;
pub const HOUR_MASK: u8 = 0x3F;
pub const DAY_MASK: u8 = 0x3F;
pub const WEEKDAY_MASK: u8 = 0x07;
pub const MONTH_MASK: u8 = 0x1F;

/// Raw date and time as stored by the chip.
///
/// Values are moved as-is; no calendar validation happens anywhere in the
/// driver. The PCF8523 keeps these fields in BCD, so `0x45` seconds reads
/// as 45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    pub day: u8,
    pub weekday: u8,
    pub month: u8,
    /// Last two digits of the year.
    pub year: u8,
}

/// Raw alarm setting: minute, hour and day alarm registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    pub minute: u8,
    pub hour: u8,
    pub day: u8,
}

pub fn decode_date(bytes: &[u8; DATE_LEN]) -> DateTime {
    DateTime {
        second: bytes[0] & SECOND_MASK,
        minute: bytes[1] & MINUTE_MASK,
        hour: bytes[2] & HOUR_MASK,
        day: bytes[3] & DAY_MASK,
        weekday: bytes[4] & WEEKDAY_MASK,
        month: bytes[5] & MONTH_MASK,
        year: bytes[6],
    }
}

pub fn encode_date(date: &DateTime) -> [u8; DATE_LEN] {
    [
        date.second,
        date.minute,
        date.hour,
        date.day,
        date.weekday,
        date.month,
        date.year,
    ]
}

pub fn decode_alarm(bytes: &[u8; ALARM_LEN]) -> Alarm {
    Alarm {
        minute: bytes[0],
        hour: bytes[1],
        day: bytes[2],
    }
}

pub fn encode_alarm(alarm: &Alarm) -> [u8; ALARM_LEN] {
    [alarm.minute, alarm.hour, alarm.day]
}

impl DateTime {
    /// Returns a copy with every field masked to its register width.
    pub fn masked(&self) -> Self {
        decode_date(&encode_date(self))
    }
}

/// Formats as `YY-MM-DD hh:mm:ss` using the raw BCD digits.
impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:02x}-{:02x}-{:02x} {:02x}:{:02x}:{:02x}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Formats as `DD hh:mm` using the raw register bytes.
impl core::fmt::Display for Alarm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02x} {:02x}:{:02x}", self.day, self.hour, self.minute)
    }
}
