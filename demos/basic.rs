//! Basic example: driving a PCF8523 over a simulated bus
//!
//! This example demonstrates:
//! - Implementing `Transport` for a bus (here a simulated register file)
//! - Bringing the chip up with `init`
//! - Setting and reading the date and the alarm
//! - Toggling individual control bits
//! - Classifying and acknowledging a pending interrupt
//! - Sharing the driver between contexts with `SharedPcf8523`

use pcf8523::prelude::*;
use pcf8523::rtc::{
    Result,
    registers::{ADDRESS, CONTROL_1, CONTROL_2, REGISTER_COUNT, control_1, control_2},
};

/// Register file with an auto-incrementing pointer, like the real chip.
struct SimulatedBus {
    regs: [u8; REGISTER_COUNT],
    pointer: usize,
}

impl SimulatedBus {
    fn new() -> Self {
        let mut regs = [0u8; REGISTER_COUNT];
        // Power-on defaults: oscillator-stop flag set, CLKOUT at 32 kHz,
        // battery switch-over disabled.
        regs[0x02] = 0xE0;
        regs[0x03] = 0x80;
        Self { regs, pointer: 0 }
    }

    /// Hardware side: latch an interrupt flag.
    fn raise(&mut self, reg: u8, mask: u8) {
        self.regs[reg as usize] |= mask;
    }
}

impl Transport for SimulatedBus {
    fn init(&mut self, address: u8) -> Result<()> {
        println!("power-on hook for device 0x{address:02X}");
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<()> {
        if address != ADDRESS {
            return Err(Error);
        }
        for byte in buf.iter_mut() {
            *byte = self.regs[self.pointer];
            self.pointer = (self.pointer + 1) % REGISTER_COUNT;
        }
        Ok(())
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        if address != ADDRESS {
            return Err(Error);
        }
        let Some((&select, values)) = data.split_first() else {
            return Err(Error);
        };
        self.pointer = select as usize % REGISTER_COUNT;
        for value in values {
            self.regs[self.pointer] = *value;
            self.pointer = (self.pointer + 1) % REGISTER_COUNT;
        }
        Ok(())
    }
}

fn main() {
    println!("=== PCF8523 Basic Example ===\n");

    let mut rtc = Pcf8523::new(SimulatedBus::new());

    // ========== Bring-up ==========
    rtc.init().expect("init");
    println!("initialized");

    // ========== Date and time ==========
    // Fields are BCD, as stored by the chip: 2024-05-17 09:15:00, a Friday.
    let start = DateTime {
        second: 0x00,
        minute: 0x15,
        hour: 0x09,
        day: 0x17,
        weekday: 0x05,
        month: 0x05,
        year: 0x24,
    };
    rtc.set_date(&start).expect("set date");
    let now = rtc.date().expect("read date");
    println!("date: {now}");
    assert_eq!(now, start);

    // ========== Alarm ==========
    // Bit 7 set disables a field: match on minute and hour only.
    let alarm = Alarm {
        minute: 0x30,
        hour: 0x07,
        day: 0x80,
    };
    rtc.set_alarm(&alarm).expect("set alarm");
    println!("alarm: {}", rtc.alarm().expect("read alarm"));

    // ========== Control bits ==========
    rtc.set_register_bits(CONTROL_1, control_1::AIE_MASK)
        .expect("enable alarm interrupt");
    rtc.clear_register_bits(CONTROL_1, control_1::CAP_SEL_MASK)
        .expect("select 7 pF load");

    // ========== Interrupts ==========
    rtc.transport_mut()
        .raise(CONTROL_2, control_2::AF_MASK | control_2::SF_MASK);
    while let Some(source) = rtc.handle_interrupt() {
        println!("interrupt: {source:?}");
    }

    println!("\nregister dump:");
    print!("{}", rtc.registers().expect("dump"));

    // ========== Shared access ==========
    // One owner for main loop and interrupt handler alike.
    let shared = SharedPcf8523::new(rtc);
    let date = shared.with(|rtc| rtc.date()).expect("shared read");
    println!("\nshared read: {date}");

    shared.with(|rtc| rtc.soft_reset()).expect("soft reset");
    println!("soft reset issued");
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_example() {
        super::main();
    }
}
