//! WASM API for the 6809 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and memory access over a flat 64KB RAM machine.

use crate::{Access, Bus, Cpu, Fault, MemoryBlock, PeriodicCallback};
use wasm_bindgen::prelude::*;

/// Address the default reset vector points to
const DEFAULT_START: u16 = 0x4000;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
    code: u8,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
            code: 0,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Numeric fault code (0 when the error is not a CPU fault)
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> u8 {
        self.code
    }
}

impl From<Fault> for JsError {
    fn from(fault: Fault) -> Self {
        JsError {
            message: fault.to_string(),
            code: fault.code(),
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6809 {
    cpu: Cpu,
    ram: MemoryBlock,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6809 {
    /// Create a 6809 with 64KB of RAM and the reset vector pointing to 0x4000
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Emulator6809, JsError> {
        let ram = MemoryBlock::new(0x10000);
        let mut bus = Bus::new();
        bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite)
            .map_err(|e| JsError::new(&e.to_string()))?;

        let [high, low] = DEFAULT_START.to_be_bytes();
        ram.set(0xFFFE, high);
        ram.set(0xFFFF, low);

        let mut cpu = Cpu::new(bus);
        cpu.reset()?;

        Ok(Emulator6809 {
            cpu,
            ram,
            program_start: DEFAULT_START,
            program_end: DEFAULT_START,
        })
    }

    /// Execute a single step (instruction, interrupt entry or wait cycle)
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(JsError::from)
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        self.cpu
            .run(cycles as u64)
            .map(|c| c as u32)
            .map_err(JsError::from)
    }

    /// Hardware reset; RAM contents are kept
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.cpu.reset().map_err(JsError::from)
    }

    /// Call `callback` every `interval` cycles while running. Returning
    /// `true` from the callback asserts IRQ.
    pub fn set_periodic_callback(&mut self, interval: f64, callback: js_sys::Function) {
        self.cpu
            .set_periodic_callback(PeriodicCallback::new(interval, move |bus: &mut Bus| {
                let raised = callback
                    .call0(&JsValue::NULL)
                    .ok()
                    .and_then(|value| value.as_bool())
                    .unwrap_or(false);
                if raised {
                    bus.set_irq(true);
                }
            }));
    }

    pub fn clear_periodic_callback(&mut self) {
        self.cpu.clear_periodic_callback();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> u8 {
        self.cpu.b()
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> u16 {
        self.cpu.d()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u16 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u16 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn u(&self) -> u16 {
        self.cpu.u()
    }

    #[wasm_bindgen(getter)]
    pub fn s(&self) -> u16 {
        self.cpu.s()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn dp(&self) -> u8 {
        self.cpu.dp()
    }

    #[wasm_bindgen(getter)]
    pub fn cc(&self) -> u8 {
        self.cpu.cc()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.clock() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Code of the fault raised by the last step, 0 if none
    #[wasm_bindgen(getter)]
    pub fn fault_code(&self) -> u8 {
        self.cpu.fault().map_or(0, |fault| fault.code())
    }

    // Register setters

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    pub fn set_s(&mut self, addr: u16) {
        self.cpu.set_s(addr);
    }

    // Interrupt lines

    pub fn set_irq(&mut self, asserted: bool) {
        self.cpu.set_irq(asserted);
    }

    pub fn set_firq(&mut self, asserted: bool) {
        self.cpu.set_firq(asserted);
    }

    pub fn set_nmi(&mut self, asserted: bool) {
        self.cpu.set_nmi(asserted);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.ram.get(addr as usize).unwrap_or(0)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.ram.set(addr as usize, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        (start..start + 256)
            .map(|addr| self.ram.get(addr).unwrap_or(0))
            .collect()
    }

    /// Load a program, point the reset vector at it and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        for (i, &byte) in program.iter().enumerate() {
            let addr = start_addr.wrapping_add(i as u16);
            self.ram.set(addr as usize, byte);
        }
        let [high, low] = start_addr.to_be_bytes();
        self.ram.set(0xFFFE, high);
        self.ram.set(0xFFFF, low);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}
