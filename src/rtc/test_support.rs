//! Test support utilities - only compiled in test builds.

use heapless::Vec;

use crate::rtc::{
    Error, Result,
    access::FRAME_CAPACITY,
    registers::{ADDRESS, REGISTER_COUNT},
    transport::Transport,
};

const LOG_CAPACITY: usize = 64;

/// One transport call, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    PowerOn,
    Write(usize),
    Read(usize),
}

/// Simulated PCF8523 register file behind a [`Transport`].
///
/// The first byte of every write selects the register pointer; further
/// bytes are stored with auto-increment. Reads continue from the pointer.
/// The pointer wraps after the last register. Every call is logged, and a
/// failing call leaves the register file untouched.
pub struct MockBus {
    regs: [u8; REGISTER_COUNT],
    pointer: usize,
    ops: Vec<BusOp, LOG_CAPACITY>,
    frames: Vec<Vec<u8, FRAME_CAPACITY>, LOG_CAPACITY>,
    writes: usize,
    fail_write_at: Option<usize>,
    fail_all_writes: bool,
    fail_reads: bool,
    fail_power_on: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
            pointer: 0,
            ops: Vec::new(),
            frames: Vec::new(),
            writes: 0,
            fail_write_at: None,
            fail_all_writes: false,
            fail_reads: false,
            fail_power_on: false,
        }
    }

    /// Register file preloaded from address 0.
    pub fn with_registers(values: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.load(0, values);
        bus
    }

    /// Stores `values` at consecutive registers starting at `start`.
    pub fn load(&mut self, start: u8, values: &[u8]) {
        for (i, value) in values.iter().enumerate() {
            self.regs[(start as usize + i) % REGISTER_COUNT] = *value;
        }
    }

    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    /// Makes the `n`th write call (0-based) fail.
    pub fn fail_write(&mut self, n: usize) {
        self.fail_write_at = Some(n);
    }

    pub fn fail_all_writes(&mut self, fail: bool) {
        self.fail_all_writes = fail;
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn fail_power_on(&mut self, fail: bool) {
        self.fail_power_on = fail;
    }

    pub fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    /// Bytes of the `n`th write call.
    pub fn frame(&self, n: usize) -> &[u8] {
        &self.frames[n]
    }

    pub fn frames(&self) -> impl Iterator<Item = &[u8]> {
        self.frames.iter().map(|frame| frame.as_slice())
    }

    pub fn write_count(&self) -> usize {
        self.count(|op| matches!(op, BusOp::Write(_)))
    }

    pub fn read_count(&self) -> usize {
        self.count(|op| matches!(op, BusOp::Read(_)))
    }

    pub fn power_on_count(&self) -> usize {
        self.count(|op| matches!(op, BusOp::PowerOn))
    }

    fn count(&self, f: impl Fn(&BusOp) -> bool) -> usize {
        self.ops.iter().filter(|&op| f(op)).count()
    }

    fn log(&mut self, op: BusOp) {
        let _ = self.ops.push(op);
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockBus {
    fn init(&mut self, address: u8) -> Result<()> {
        self.log(BusOp::PowerOn);
        if self.fail_power_on || address != ADDRESS {
            return Err(Error);
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<()> {
        self.log(BusOp::Read(buf.len()));
        if self.fail_reads || address != ADDRESS {
            return Err(Error);
        }
        for byte in buf.iter_mut() {
            *byte = self.regs[self.pointer];
            self.pointer = (self.pointer + 1) % REGISTER_COUNT;
        }
        Ok(())
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        let n = self.writes;
        self.writes += 1;
        self.log(BusOp::Write(data.len()));
        let _ = self
            .frames
            .push(Vec::from_slice(data).unwrap_or_default());

        if self.fail_all_writes || self.fail_write_at == Some(n) || address != ADDRESS {
            return Err(Error);
        }
        let Some((&select, values)) = data.split_first() else {
            return Ok(());
        };
        self.pointer = select as usize % REGISTER_COUNT;
        for value in values {
            self.regs[self.pointer] = *value;
            self.pointer = (self.pointer + 1) % REGISTER_COUNT;
        }
        Ok(())
    }
}

#[test]
fn mock_bus_pointer_wraps() {
    let mut bus = MockBus::new();
    bus.write(ADDRESS, &[0x13, 0xAA, 0xBB]).unwrap();
    assert_eq!(bus.register(0x13), 0xAA);
    assert_eq!(bus.register(0x00), 0xBB);

    let mut buf = [0u8; 2];
    bus.write(ADDRESS, &[0x13]).unwrap();
    bus.read(ADDRESS, &mut buf).unwrap();
    assert_eq!(buf, [0xAA, 0xBB]);
}

#[test]
fn mock_bus_rejects_foreign_address() {
    let mut bus = MockBus::new();
    assert_eq!(bus.write(0x68, &[0x00]), Err(Error));
    assert_eq!(bus.read(0x68, &mut [0u8; 1]), Err(Error));
}
