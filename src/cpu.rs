//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct that owns the register file, the
//! cycle counter, the wait-state flags and the [`Bus`].
//!
//! ## Execution Model
//!
//! [`Cpu::step`] performs one unit of work:
//!
//! 1. Interrupt arbitration (see [`crate::interrupts`]). A serviced interrupt or
//!    an idle wait cycle ends the step.
//! 2. Fetch the opcode, charge its documented cycles, and execute it. The 0x10
//!    and 0x11 prefixes select the page-2 and page-3 tables.
//!
//! [`Cpu::run`] repeats `step` until the requested number of cycles has been
//! consumed or a fault stops it.
//!
//! ## Faults
//!
//! A bus fault (unmapped page) rolls the registers, clock and wait states back
//! to where they were before the step, so the host can map the page and retry.
//! Bus writes the step already made are not undone. Decode faults keep the PC
//! past the bytes consumed and the cycles charged.

use crate::instructions;
use crate::interrupts::{Arbitration, InterruptLines};
use crate::memory::Bus;
use crate::periodic::PeriodicCallback;
use crate::registers::{ConditionCodes, IndexRegister, Register, Registers};
use crate::Fault;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Interrupt and reset vector addresses.
///
/// Each vector holds a big-endian 16-bit handler address.
pub mod vectors {
    /// Reserved by Motorola
    pub const RESERVED: u16 = 0xFFF0;
    pub const SWI3: u16 = 0xFFF2;
    pub const SWI2: u16 = 0xFFF4;
    pub const FIRQ: u16 = 0xFFF6;
    pub const IRQ: u16 = 0xFFF8;
    pub const SWI: u16 = 0xFFFA;
    pub const NMI: u16 = 0xFFFC;
    pub const RESET: u16 = 0xFFFE;
}

/// A serializable copy of the CPU state, excluding the bus.
///
/// Snapshots are plain data (`Copy + Send`) so a host can hand them to another
/// thread (a debugger view, a save-state writer) while the CPU keeps running.
///
/// # Examples
///
/// ```
/// use lib6809::{Bus, Cpu};
///
/// let mut cpu = Cpu::new(Bus::new());
/// cpu.set_x(0x1234);
/// let snapshot = cpu.snapshot();
///
/// cpu.set_x(0);
/// cpu.restore(&snapshot);
/// assert_eq!(cpu.x(), 0x1234);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub registers: Registers,
    pub clock: u64,
    pub lines: InterruptLines,
    pub nmi_armed: bool,
    pub cwai: bool,
    pub sync: bool,
}

/// State restored when a step hits a bus fault.
#[derive(Clone, Copy)]
struct Checkpoint {
    regs: Registers,
    clock: u64,
    nmi_armed: bool,
    cwai: bool,
    sync: bool,
}

/// 6809E CPU state and execution context.
///
/// The CPU owns its [`Bus`]. Hardware modules are attached by installing page
/// buffers and handlers on the bus before (or while) running.
///
/// # Examples
///
/// ```
/// use lib6809::{Access, Bus, Cpu, MemoryBlock};
///
/// let ram = MemoryBlock::new(0x10000);
/// ram.load(0xFFFE, &[0x40, 0x00]).unwrap(); // reset vector -> 0x4000
/// ram.load(0x4000, &[0x86, 0x42]).unwrap(); // LDA #$42
///
/// let mut bus = Bus::new();
/// bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
///
/// let mut cpu = Cpu::new(bus);
/// cpu.reset().unwrap();
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x4002);
/// assert_eq!(cpu.clock(), 2);
/// ```
#[derive(Debug)]
pub struct Cpu {
    /// Register file
    pub(crate) regs: Registers,

    /// Total cycles consumed since reset
    pub(crate) clock: u64,

    /// Page table and interrupt lines
    pub(crate) bus: Bus,

    /// Set once the program loads S; NMI is ignored until then
    pub(crate) nmi_armed: bool,

    /// Registers stacked by CWAI, waiting for an interrupt
    pub(crate) cwai: bool,

    /// Waiting in SYNC for any interrupt line
    pub(crate) sync: bool,

    /// Outcome of the most recent step
    pub(crate) fault: Option<Fault>,

    /// Optional cycle-cadence callback driven by `run`
    pub(crate) periodic: Option<PeriodicCallback>,
}

impl Cpu {
    /// Creates a CPU attached to `bus`.
    ///
    /// Registers start zeroed with both interrupt masks set. The reset vector
    /// is not read until [`Cpu::reset`] is called, so the bus can be fully
    /// populated first.
    pub fn new(bus: Bus) -> Self {
        Self {
            regs: Registers {
                cc: ConditionCodes::reset_state(),
                ..Registers::default()
            },
            clock: 0,
            bus,
            nmi_armed: false,
            cwai: false,
            sync: false,
            fault: None,
            periodic: None,
        }
    }

    /// Performs a hardware reset.
    ///
    /// - Sets I and F, clears every other flag
    /// - Clears DP, the NMI-armed latch, both wait states and all three lines
    /// - Loads PC from the reset vector at 0xFFFE
    /// - Zeroes the clock and the recorded fault
    ///
    /// # Errors
    ///
    /// Returns the bus fault if the reset vector page is unmapped.
    pub fn reset(&mut self) -> Result<(), Fault> {
        self.clock = 0;
        self.fault = None;
        self.nmi_armed = false;
        self.cwai = false;
        self.sync = false;
        *self.bus.lines_mut() = InterruptLines::default();
        self.regs.dp = 0;
        self.regs.cc = ConditionCodes::reset_state();
        if let Some(periodic) = self.periodic.as_mut() {
            periodic.restart();
        }

        match self.read_word(vectors::RESET) {
            Ok(pc) => {
                self.regs.pc = pc;
                debug!(pc, "reset");
                Ok(())
            }
            Err(fault) => {
                warn!(code = fault.code(), %fault, "reset vector unreadable");
                self.fault = Some(fault);
                Err(fault)
            }
        }
    }

    /// Executes one step: services an interrupt, idles one wait cycle, or
    /// executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] that stopped the step. The same fault is
    /// available from [`Cpu::fault`] until the next step.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.fault = None;
        let checkpoint = self.checkpoint();

        match self.execute_step() {
            Ok(()) => Ok(()),
            Err(fault) => {
                if fault.is_bus_fault() {
                    self.rollback(checkpoint);
                }
                warn!(pc = self.regs.pc, code = fault.code(), %fault, "step faulted");
                self.fault = Some(fault);
                Err(fault)
            }
        }
    }

    fn execute_step(&mut self) -> Result<(), Fault> {
        match self.arbitrate_interrupts()? {
            Arbitration::Serviced | Arbitration::Idle => Ok(()),
            Arbitration::Execute => {
                let opcode = self.fetch_byte()?;
                instructions::execute_page1(self, opcode)
            }
        }
    }

    /// Runs until at least `cycles` cycles have elapsed or a fault occurs.
    ///
    /// Always executes at least one step. Returns the number of cycles actually
    /// consumed, which may overshoot the request by part of an instruction.
    ///
    /// If a periodic callback is installed it is advanced after every step,
    /// including a step that ends in a decode fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6809::{Access, Bus, Cpu, MemoryBlock};
    ///
    /// let ram = MemoryBlock::new(0x10000);
    /// ram.load(0xFFFE, &[0x40, 0x00]).unwrap();
    /// ram.load(0x4000, &[0x20, 0xFE]).unwrap(); // BRA *
    ///
    /// let mut bus = Bus::new();
    /// bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
    /// let mut cpu = Cpu::new(bus);
    /// cpu.reset().unwrap();
    ///
    /// let consumed = cpu.run(100).unwrap();
    /// assert_eq!(consumed, 102); // 34 branches of 3 cycles
    /// ```
    pub fn run(&mut self, cycles: u64) -> Result<u64, Fault> {
        let start = self.clock;

        loop {
            let before = self.clock;
            let result = self.step();
            // Decode faults keep the cycles they charged
            if let Some(periodic) = self.periodic.as_mut() {
                periodic.advance(self.clock.wrapping_sub(before), &mut self.bus);
            }
            result?;
            if self.clock.wrapping_sub(start) >= cycles {
                break;
            }
        }

        Ok(self.clock.wrapping_sub(start))
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            regs: self.regs,
            clock: self.clock,
            nmi_armed: self.nmi_armed,
            cwai: self.cwai,
            sync: self.sync,
        }
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        self.regs = checkpoint.regs;
        self.clock = checkpoint.clock;
        self.nmi_armed = checkpoint.nmi_armed;
        self.cwai = checkpoint.cwai;
        self.sync = checkpoint.sync;
    }

    // ========== Snapshots ==========

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.regs,
            clock: self.clock,
            lines: self.bus.lines(),
            nmi_armed: self.nmi_armed,
            cwai: self.cwai,
            sync: self.sync,
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.regs = snapshot.registers;
        self.clock = snapshot.clock;
        *self.bus.lines_mut() = snapshot.lines;
        self.nmi_armed = snapshot.nmi_armed;
        self.cwai = snapshot.cwai;
        self.sync = snapshot.sync;
        self.fault = None;
    }

    // ========== Periodic callback ==========

    /// Installs a callback that `run` invokes every `interval` cycles.
    pub fn set_periodic_callback(&mut self, periodic: PeriodicCallback) {
        self.periodic = Some(periodic);
    }

    pub fn clear_periodic_callback(&mut self) {
        self.periodic = None;
    }

    // ========== Bus access ==========

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn into_bus(self) -> Bus {
        self.bus
    }

    pub(crate) fn read(&mut self, address: u16) -> Result<u8, Fault> {
        self.bus.read(address)
    }

    pub(crate) fn write(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        self.bus.write(address, value)
    }

    /// Big-endian read; the second byte wraps at 0xFFFF.
    pub(crate) fn read_word(&mut self, address: u16) -> Result<u16, Fault> {
        let high = self.read(address)?;
        let low = self.read(address.wrapping_add(1))?;
        Ok(u16::from_be_bytes([high, low]))
    }

    pub(crate) fn write_word(&mut self, address: u16, value: u16) -> Result<(), Fault> {
        let [high, low] = value.to_be_bytes();
        self.write(address, high)?;
        self.write(address.wrapping_add(1), low)
    }

    pub(crate) fn fetch_byte(&mut self) -> Result<u8, Fault> {
        let value = self.read(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    pub(crate) fn fetch_word(&mut self) -> Result<u16, Fault> {
        let high = self.fetch_byte()?;
        let low = self.fetch_byte()?;
        Ok(u16::from_be_bytes([high, low]))
    }

    // ========== Stacks ==========

    /// Pre-decrements `stack` and stores `value`.
    pub(crate) fn push_byte(&mut self, stack: IndexRegister, value: u8) -> Result<(), Fault> {
        let sp = self.regs.index(stack).wrapping_sub(1);
        self.regs.set_index(stack, sp);
        self.write(sp, value)
    }

    /// Pushes low byte first so the word sits big-endian in memory.
    pub(crate) fn push_word(&mut self, stack: IndexRegister, value: u16) -> Result<(), Fault> {
        let [high, low] = value.to_be_bytes();
        self.push_byte(stack, low)?;
        self.push_byte(stack, high)
    }

    pub(crate) fn pull_byte(&mut self, stack: IndexRegister) -> Result<u8, Fault> {
        let sp = self.regs.index(stack);
        let value = self.read(sp)?;
        self.regs.set_index(stack, sp.wrapping_add(1));
        Ok(value)
    }

    pub(crate) fn pull_word(&mut self, stack: IndexRegister) -> Result<u16, Fault> {
        let high = self.pull_byte(stack)?;
        let low = self.pull_byte(stack)?;
        Ok(u16::from_be_bytes([high, low]))
    }

    pub(crate) fn push_byte_s(&mut self, value: u8) -> Result<(), Fault> {
        self.push_byte(IndexRegister::S, value)
    }

    pub(crate) fn push_word_s(&mut self, value: u16) -> Result<(), Fault> {
        self.push_word(IndexRegister::S, value)
    }

    pub(crate) fn pull_byte_s(&mut self) -> Result<u8, Fault> {
        self.pull_byte(IndexRegister::S)
    }

    pub(crate) fn pull_word_s(&mut self) -> Result<u16, Fault> {
        self.pull_word(IndexRegister::S)
    }

    /// Writes a register on behalf of the program. Loading S arms NMI.
    pub(crate) fn load_register(&mut self, reg: Register, value: u16) {
        self.regs.set(reg, value);
        if reg == Register::S {
            self.nmi_armed = true;
        }
    }

    // ========== Register accessors ==========

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn b(&self) -> u8 {
        self.regs.b
    }

    /// D register (A:B)
    pub fn d(&self) -> u16 {
        self.regs.d()
    }

    pub fn x(&self) -> u16 {
        self.regs.x
    }

    pub fn y(&self) -> u16 {
        self.regs.y
    }

    pub fn u(&self) -> u16 {
        self.regs.u
    }

    pub fn s(&self) -> u16 {
        self.regs.s
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn dp(&self) -> u8 {
        self.regs.dp
    }

    /// Packed condition-code byte
    pub fn cc(&self) -> u8 {
        self.regs.cc.to_byte()
    }

    pub fn condition_codes(&self) -> ConditionCodes {
        self.regs.cc
    }

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_b(&mut self, value: u8) {
        self.regs.b = value;
    }

    pub fn set_d(&mut self, value: u16) {
        self.regs.set_d(value);
    }

    pub fn set_x(&mut self, value: u16) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u16) {
        self.regs.y = value;
    }

    pub fn set_u(&mut self, value: u16) {
        self.regs.u = value;
    }

    /// Sets S from the host. Unlike a program load, this does not arm NMI.
    pub fn set_s(&mut self, value: u16) {
        self.regs.s = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_dp(&mut self, value: u8) {
        self.regs.dp = value;
    }

    pub fn set_cc(&mut self, value: u8) {
        self.regs.cc = ConditionCodes::from_byte(value);
    }

    // ========== Clock, lines and status ==========

    /// Total cycles consumed since reset.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Sets the cycle counter. The counter wraps at `u64::MAX`.
    pub fn set_clock(&mut self, clock: u64) {
        self.clock = clock;
    }

    pub fn nmi(&self) -> bool {
        self.bus.lines().nmi
    }

    pub fn firq(&self) -> bool {
        self.bus.lines().firq
    }

    pub fn irq(&self) -> bool {
        self.bus.lines().irq
    }

    pub fn set_nmi(&mut self, asserted: bool) {
        self.bus.set_nmi(asserted);
    }

    pub fn set_firq(&mut self, asserted: bool) {
        self.bus.set_firq(asserted);
    }

    pub fn set_irq(&mut self, asserted: bool) {
        self.bus.set_irq(asserted);
    }

    pub fn nmi_armed(&self) -> bool {
        self.nmi_armed
    }

    /// True while waiting in CWAI with the registers stacked.
    pub fn in_cwai(&self) -> bool {
        self.cwai
    }

    /// True while waiting in SYNC.
    pub fn in_sync(&self) -> bool {
        self.sync
    }

    /// Fault raised by the most recent step, if any.
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }
}
