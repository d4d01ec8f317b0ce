//! PCF8523 register map.
//!
//! Register addresses live at the top level of this module. Named bit
//! positions for each register live in a sub-module named after the
//! register; every position `X` has a companion `X_MASK` covering the whole
//! field (one bit for flags, several for multi-bit selectors).
//!
//! ```
//! use pcf8523::rtc::registers::{control_2, control_3, CONTROL_2};
//!
//! assert_eq!(CONTROL_2, 0x01);
//! assert_eq!(control_2::CTAF_MASK, 0x40);
//! assert_eq!(control_3::PM_MASK, 0xE0);
//! ```

/// 7-bit bus address `0x68`, left-shifted by one as the transport expects.
pub const ADDRESS: u8 = 0x68 << 1;

/// Number of addressable registers (`0x00..=0x13`).
pub const REGISTER_COUNT: usize = 0x14;

/// Length of a full register dump starting at [`CONTROL_1`].
///
/// One byte longer than the map: the register pointer wraps after
/// [`TMR_B`] so the last byte is whatever the device returns after
/// wrap-around.
pub const SNAPSHOT_LEN: usize = 21;

/// Value written to [`CONTROL_1`] to trigger a software reset.
pub const SOFT_RESET: u8 = 0x58;

pub const CONTROL_1: u8 = 0x00;
pub const CONTROL_2: u8 = 0x01;
pub const CONTROL_3: u8 = 0x02;
pub const SECONDS: u8 = 0x03;
pub const MINUTES: u8 = 0x04;
pub const HOURS: u8 = 0x05;
pub const DAYS: u8 = 0x06;
pub const WEEKDAYS: u8 = 0x07;
pub const MONTHS: u8 = 0x08;
pub const YEARS: u8 = 0x09;
pub const MINUTE_ALARM: u8 = 0x0A;
pub const HOUR_ALARM: u8 = 0x0B;
pub const DAY_ALARM: u8 = 0x0C;
pub const WEEKDAY_ALARM: u8 = 0x0D;
pub const OFFSET: u8 = 0x0E;
pub const TMR_CLKOUT_CTRL: u8 = 0x0F;
pub const TMR_A_FREQ_CTRL: u8 = 0x10;
pub const TMR_A: u8 = 0x11;
pub const TMR_B_FREQ_CTRL: u8 = 0x12;
pub const TMR_B: u8 = 0x13;

/// Datasheet names, indexed by register address.
pub const REGISTER_NAMES: [&str; REGISTER_COUNT] = [
    "Control_1",
    "Control_2",
    "Control_3",
    "Seconds",
    "Minutes",
    "Hours",
    "Days",
    "Weekdays",
    "Months",
    "Years",
    "Minute_alarm",
    "Hour_alarm",
    "Day_alarm",
    "Weekday_alarm",
    "Offset",
    "Tmr_CLKOUT_ctrl",
    "Tmr_A_freq_ctrl",
    "Tmr_A_reg",
    "Tmr_B_freq_ctrl",
    "Tmr_B_reg",
];

/// Returns the datasheet name of `reg`, or `None` past the end of the map.
pub fn register_name(reg: u8) -> Option<&'static str> {
    REGISTER_NAMES.get(reg as usize).copied()
}

/// Mask of `width` consecutive bits starting at bit `pos`.
pub const fn field_mask(pos: u8, width: u8) -> u8 {
    (((1u16 << width) - 1) << pos) as u8
}

/// Generates a bit position constant and its `_MASK` companion.
///
/// `NAME = pos` declares a single-bit flag; `NAME = pos; width` declares a
/// multi-bit field whose lowest bit is `pos`.
macro_rules! register_bits {
    (@width) => { 1 };
    (@width $width:literal) => { $width };
    ($( $(#[$meta:meta])* $name:ident = $pos:literal $(; $width:literal)? ),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                pub const $name: u8 = $pos;
                #[doc = "Mask covering [`" $name "`]."]
                pub const [<$name _MASK>]: u8 =
                    super::field_mask($pos, register_bits!(@width $($width)?));
            )*
        }
    };
}

pub mod control_1 {
    register_bits! {
        /// Oscillator load capacitance select.
        CAP_SEL = 7,
        T = 6,
        STOP = 5,
        /// Software reset.
        SR = 4,
        /// 12/24 hour mode.
        MODE_12_24 = 3,
        /// Second interrupt enable.
        SIE = 2,
        /// Alarm interrupt enable.
        AIE = 1,
        /// Correction interrupt enable.
        CIE = 0,
    }
}

pub mod control_2 {
    register_bits! {
        /// Watchdog timer A interrupt flag.
        WTAF = 7,
        /// Countdown timer A interrupt flag.
        CTAF = 6,
        /// Countdown timer B interrupt flag.
        CTBF = 5,
        /// Second interrupt flag.
        SF = 4,
        /// Alarm interrupt flag.
        AF = 3,
        WTAIE = 2,
        CTAIE = 1,
        CTBIE = 0,
    }
}

pub mod control_3 {
    register_bits! {
        /// Power management function, three bits.
        PM = 5; 3,
        /// Battery switch-over flag.
        BSF = 3,
        /// Battery low flag.
        BLF = 2,
        BSIE = 1,
        BLIE = 0,
    }
}

pub mod seconds {
    register_bits! {
        /// Oscillator stopped.
        OS = 7,
    }
}

pub mod hours {
    register_bits! {
        /// AM/PM indicator in 12 hour mode.
        AMPM = 5,
    }
}

pub mod alarm {
    register_bits! {
        /// Alarm enable, shared position in all four alarm registers.
        /// Active low: a set bit disables the alarm field.
        AEN = 7,
    }
}

pub mod offset {
    register_bits! {
        MODE = 7,
        OFFSET = 0; 7,
    }
}

pub mod tmr_clkout_ctrl {
    register_bits! {
        /// Timer A interrupt mode.
        TAM = 7,
        /// Timer B interrupt mode.
        TBM = 6,
        /// CLKOUT frequency select; all ones disables the pin.
        COF = 3; 3,
        /// Timer A control.
        TAC = 1; 2,
        /// Timer B control.
        TBC = 0,
    }
}

pub mod tmr_a_freq_ctrl {
    register_bits! {
        /// Timer A source clock.
        TAQ = 0; 3,
    }
}

pub mod tmr_b_freq_ctrl {
    register_bits! {
        /// Timer B pulse width.
        TBW = 4; 3,
        /// Timer B source clock.
        TBQ = 0; 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_address_is_left_shifted() {
        assert_eq!(ADDRESS, 0xD0);
    }

    #[test]
    fn single_bit_masks() {
        assert_eq!(control_2::WTAF_MASK, 0x80);
        assert_eq!(control_2::AF_MASK, 0x08);
        assert_eq!(control_3::BSF_MASK, 0x08);
        assert_eq!(control_3::BLF_MASK, 0x04);
        assert_eq!(seconds::OS_MASK, 0x80);
    }

    #[test]
    fn multi_bit_field_masks() {
        assert_eq!(control_3::PM_MASK, 0b1110_0000);
        assert_eq!(tmr_clkout_ctrl::COF_MASK, 0b0011_1000);
        assert_eq!(tmr_clkout_ctrl::TAC_MASK, 0b0000_0110);
        assert_eq!(tmr_b_freq_ctrl::TBW_MASK, 0b0111_0000);
        assert_eq!(offset::OFFSET_MASK, 0x7F);
    }

    #[test]
    fn names_cover_the_whole_map() {
        assert_eq!(register_name(CONTROL_1), Some("Control_1"));
        assert_eq!(register_name(TMR_CLKOUT_CTRL), Some("Tmr_CLKOUT_ctrl"));
        assert_eq!(register_name(TMR_B), Some("Tmr_B_reg"));
        assert_eq!(register_name(0x14), None);
    }
}
