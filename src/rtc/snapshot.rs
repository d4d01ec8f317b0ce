use crate::rtc::registers::{CONTROL_2, CONTROL_3, REGISTER_COUNT, SNAPSHOT_LEN, register_name};

/// Raw dump of the register file as read in one burst from [`CONTROL_1`](crate::rtc::registers::CONTROL_1).
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterSnapshot([u8; SNAPSHOT_LEN]);

impl RegisterSnapshot {
    #[inline]
    pub fn new(bytes: [u8; SNAPSHOT_LEN]) -> Self {
        Self(bytes)
    }

    /// Value of register `reg`, or `None` past the end of the dump.
    #[inline]
    pub fn register(&self, reg: u8) -> Option<u8> {
        self.0.get(reg as usize).copied()
    }

    #[inline]
    pub fn control_2(&self) -> u8 {
        self.0[CONTROL_2 as usize]
    }

    #[inline]
    pub fn control_3(&self) -> u8 {
        self.0[CONTROL_3 as usize]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SNAPSHOT_LEN] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> [u8; SNAPSHOT_LEN] {
        self.0
    }
}

impl From<[u8; SNAPSHOT_LEN]> for RegisterSnapshot {
    fn from(bytes: [u8; SNAPSHOT_LEN]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Debug for RegisterSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RegisterSnapshot").field(&self.0).finish()
    }
}

/// One `name = 0xNN` line per register; the trailing wrap-around byte is
/// printed as `wrap`.
impl core::fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (reg, value) in self.0.iter().enumerate() {
            let name = if reg < REGISTER_COUNT {
                register_name(reg as u8).unwrap_or("?")
            } else {
                "wrap"
            };
            writeln!(f, "{:02X} {:<16}= 0x{:02X}", reg, name, value)?;
        }
        Ok(())
    }
}
