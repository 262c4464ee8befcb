//! # 6809E CPU Emulator Core
//!
//! A cycle-accurate Motorola 6809E CPU emulator with a page-mapped memory bus,
//! designed for arcade-board emulation where hardware modules remap memory at
//! runtime.
//!
//! This crate provides the CPU register file, the addressing-mode resolver, the
//! flag/ALU operation library, the interrupt and wait-state controller, the
//! three-table instruction dispatcher, and the 256-entry page table that routes
//! every bus access either to a raw 256-byte buffer or to a handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib6809::{Access, Bus, Cpu, MemoryBlock};
//!
//! // 64KB of RAM mapped over the whole address space
//! let ram = MemoryBlock::new(0x10000);
//! let mut bus = Bus::new();
//! bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
//!
//! // Reset vector at 0xFFFE points to 0x4000
//! ram.set(0xFFFE, 0x40);
//! ram.set(0xFFFF, 0x00);
//!
//! let mut cpu = Cpu::new(bus);
//! cpu.reset().unwrap();
//!
//! assert_eq!(cpu.pc(), 0x4000);
//! assert!(cpu.condition_codes().irq_mask);
//! assert!(cpu.condition_codes().firq_mask);
//! assert_eq!(cpu.clock(), 0);
//! ```
//!
//! ## Architecture
//!
//! - **Single owner**: all CPU state lives in one [`Cpu`]; bus handlers receive
//!   `&mut Bus` and keep their own state behind `Rc`/`Cell`
//! - **Page table**: a buffer entry wins over a handler entry for the same page
//!   and direction; a page with neither faults
//! - **Cycle accuracy**: every opcode charges its documented cycle count, indexed
//!   post-bytes add their documented extra cycles
//! - **Table-driven metadata**: mnemonic, addressing mode, cycles and size for
//!   all three opcode pages live in [`opcodes`]
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset, step and run
//! - `registers` - register file and condition codes
//! - `addressing` - addressing modes and indexed post-byte decoding
//! - `interrupts` - interrupt arbitration and wait states
//! - `memory` - page table, memory blocks and bus handlers
//! - `banking` - bank-switched regions driven by control-register writes
//! - `opcodes` - opcode metadata tables
//! - `periodic` - cycle-cadence callbacks used by scanline schedulers

pub mod addressing;
pub mod banking;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod periodic;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, IndexedMode, IndexedPostbyte};
pub use banking::{BankSwitch, BankedRegion};
pub use cpu::{vectors, Cpu, Snapshot};
pub use interrupts::InterruptLines;
pub use memory::{Access, Bus, MemoryBlock, PageRef, ReadHandler, Route, WriteHandler};
pub use opcodes::{OpcodeMetadata, OpcodePage, PAGE1_TABLE, PAGE2_TABLE, PAGE3_TABLE};
pub use periodic::PeriodicCallback;
pub use registers::{Accumulator, ConditionCodes, IndexRegister, Register, Registers};

use thiserror::Error;

/// Faults raised by the interpreter.
///
/// Every fault stops the current [`Cpu::step`] immediately and is returned from
/// [`Cpu::run`] without completing the requested cycle budget. Bus faults
/// (`UndefinedRead`/`UndefinedWrite`) mean the emulated address space is not
/// fully wired up; the other kinds mean the program did something the silicon
/// does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The dispatcher reached a state that its tables claim is impossible.
    #[error("internal dispatcher error at PC 0x{pc:04X}")]
    Internal {
        /// Program counter when the inconsistency was detected
        pc: u16,
    },

    /// Opcode byte with no defined behavior in its table.
    #[error("undefined opcode 0x{opcode:02X} in {page} table")]
    Instruction {
        /// Table the opcode was looked up in
        page: OpcodePage,
        /// The offending opcode byte
        opcode: u8,
    },

    /// Indexed post-byte encoding an undefined sub-mode or indirection.
    #[error("undefined indexed post-byte 0x{postbyte:02X}")]
    AddressMode {
        /// The offending post-byte
        postbyte: u8,
    },

    /// EXG/TFR post-byte naming an undefined register or mixing widths.
    #[error("invalid register selection 0x{postbyte:02X}")]
    RegisterSelection {
        /// The offending post-byte
        postbyte: u8,
    },

    /// Read from a page with neither a buffer nor a handler.
    #[error("read from unmapped address 0x{address:04X}")]
    UndefinedRead {
        /// Address that was read
        address: u16,
    },

    /// Write to a page with neither a buffer nor a handler.
    #[error("write of 0x{value:02X} to unmapped address 0x{address:04X}")]
    UndefinedWrite {
        /// Address that was written
        address: u16,
        /// Value that was discarded
        value: u8,
    },
}

impl Fault {
    /// Stable numeric code for hosts that report faults as integers.
    ///
    /// Zero is reserved for a clean exit and never returned here.
    ///
    /// ```
    /// use lib6809::Fault;
    ///
    /// assert_eq!(Fault::UndefinedRead { address: 0x1234 }.code(), 5);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            Fault::Internal { .. } => 1,
            Fault::Instruction { .. } => 2,
            Fault::AddressMode { .. } => 3,
            Fault::RegisterSelection { .. } => 4,
            Fault::UndefinedRead { .. } => 5,
            Fault::UndefinedWrite { .. } => 6,
        }
    }

    /// Returns true for faults caused by an incompletely wired address space.
    pub fn is_bus_fault(&self) -> bool {
        matches!(
            self,
            Fault::UndefinedRead { .. } | Fault::UndefinedWrite { .. }
        )
    }
}

/// Errors returned while building page mappings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A page view would extend past the end of its memory block.
    #[error("page {index} lies outside a {len}-byte memory block")]
    PageOutOfRange {
        /// Page index within the block
        index: usize,
        /// Block length in bytes
        len: usize,
    },

    /// Bytes loaded into a block would run past its end.
    #[error("loading {count} bytes at offset 0x{offset:X} overflows a {len}-byte memory block")]
    LoadOutOfRange {
        /// Start offset of the load
        offset: usize,
        /// Number of bytes loaded
        count: usize,
        /// Block length in bytes
        len: usize,
    },

    /// Page range whose last page precedes its first.
    #[error("page range 0x{first:02X}..=0x{last:02X} is empty")]
    EmptyRange {
        /// First page of the range
        first: u8,
        /// Last page of the range
        last: u8,
    },

    /// Bank index past the end of a banked region.
    #[error("bank {bank} does not exist in a region of {count} banks")]
    NoSuchBank {
        /// Requested bank
        bank: usize,
        /// Number of banks in the region
        count: usize,
    },

    /// Memory block length that is not a whole number of banks.
    #[error("a {len}-byte block cannot be split into banks of {pages} pages")]
    BankGeometry {
        /// Block length in bytes
        len: usize,
        /// Pages per bank
        pages: usize,
    },
}
