use log::{debug, warn};

use crate::rtc::{
    Result,
    access::RegisterAccess,
    codec::{
        ALARM_LEN, ALARM_START, Alarm, DATE_LEN, DATE_START, DateTime, decode_alarm, decode_date,
        encode_alarm, encode_date,
    },
    interrupt::{InterruptSource, classify},
    registers::{
        ADDRESS, CONTROL_1, CONTROL_3, SNAPSHOT_LEN, SOFT_RESET, TMR_CLKOUT_CTRL, control_3,
        tmr_clkout_ctrl,
    },
    snapshot::RegisterSnapshot,
    transport::Transport,
};

/// PCF8523 real-time clock driver.
///
/// Owns its transport for the device's whole operational life. Every
/// operation is a short, blocking sequence of bus transactions; the first
/// failing transaction aborts it and nothing is retried or cached.
///
/// The driver does no locking. Wrap it in a
/// [`SharedPcf8523`](crate::rtc::SharedPcf8523) (or otherwise serialize
/// access) when more than one context drives the same device.
#[derive(Debug)]
pub struct Pcf8523<T> {
    transport: T,
}

impl<T: Transport> Pcf8523<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Brings the device up.
    ///
    /// Runs the transport's power-on hook, disables the CLKOUT pin, then
    /// enables battery switch-over. A failing step skips the ones after it.
    pub fn init(&mut self) -> Result<()> {
        debug!("initializing PCF8523 at 0x{:02X}", ADDRESS);
        self.transport.init(ADDRESS).inspect_err(|_| {
            warn!("power-on hook failed");
        })?;

        self.transport
            .set_bits(TMR_CLKOUT_CTRL, tmr_clkout_ctrl::COF_MASK)
            .inspect_err(|_| warn!("CLKOUT disable failed"))?;

        self.transport
            .clear_bits(CONTROL_3, control_3::PM_MASK)
            .inspect_err(|_| warn!("battery switch-over enable failed"))
    }

    pub fn date(&mut self) -> Result<DateTime> {
        let mut bytes = [0u8; DATE_LEN];
        self.transport.read_registers(DATE_START, &mut bytes)?;
        Ok(decode_date(&bytes))
    }

    /// Writes all seven date registers in one frame. Values are not masked.
    pub fn set_date(&mut self, date: &DateTime) -> Result<()> {
        self.transport
            .write_registers(DATE_START, &encode_date(date))
    }

    pub fn alarm(&mut self) -> Result<Alarm> {
        let mut bytes = [0u8; ALARM_LEN];
        self.transport.read_registers(ALARM_START, &mut bytes)?;
        Ok(decode_alarm(&bytes))
    }

    /// Writes the minute, hour and day alarm registers in one frame,
    /// enable bits included.
    pub fn set_alarm(&mut self, alarm: &Alarm) -> Result<()> {
        self.transport
            .write_registers(ALARM_START, &encode_alarm(alarm))
    }

    /// Sets the `mask` bits of `reg` without disturbing the others.
    pub fn set_register_bits(&mut self, reg: u8, mask: u8) -> Result<()> {
        self.transport.set_bits(reg, mask)
    }

    /// Clears the `mask` bits of `reg` without disturbing the others.
    pub fn clear_register_bits(&mut self, reg: u8, mask: u8) -> Result<()> {
        self.transport.clear_bits(reg, mask)
    }

    /// Reads the whole register file in one burst starting at Control_1.
    pub fn registers(&mut self) -> Result<RegisterSnapshot> {
        let mut bytes = [0u8; SNAPSHOT_LEN];
        self.transport.read_registers(CONTROL_1, &mut bytes)?;
        Ok(RegisterSnapshot::new(bytes))
    }

    /// Classifies the pending interrupt and acknowledges it where the
    /// protocol requires.
    ///
    /// The register snapshot is read on every call. A failed snapshot yields
    /// `None` with no further bus traffic. A failed acknowledgement is logged
    /// and the source is still returned; its flag must then be considered
    /// still pending.
    pub fn handle_interrupt(&mut self) -> Option<InterruptSource> {
        let snapshot = self.registers().ok()?;
        let source = classify(&snapshot)?;
        debug!("interrupt: {:?}", source);

        if let Some((reg, mask)) = source.acknowledgement() {
            if self.transport.clear_bits(reg, mask).is_err() {
                warn!("acknowledging {:?} failed", source);
            }
        }
        Some(source)
    }

    /// Issues the software reset sequence.
    pub fn soft_reset(&mut self) -> Result<()> {
        debug!("software reset");
        self.transport.write(ADDRESS, &[CONTROL_1, SOFT_RESET])
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Releases the transport.
    pub fn release(self) -> T {
        self.transport
    }
}
