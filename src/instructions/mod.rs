//! # 6809 Instruction Implementations
//!
//! This module contains the dispatchers for the three opcode tables and the
//! instruction implementations, organized by category. Each dispatcher looks
//! up the opcode's metadata, charges its base cycles, and calls the
//! implementation with the addressing mode from the table.
//!
//! ## Categories
//!
//! - **alu**: Flag/ALU operations and arithmetic (SUB, CMP, ADD, SUBD, MUL, DAA, ...)
//! - **read_modify_write**: NEG, COM, shifts, rotates, INC, DEC, TST, CLR
//! - **load_store**: LD/ST for every register, LEA
//! - **branches**: Bcc and LBcc
//! - **control**: JMP, JSR, BSR, RTS, NOP, SYNC
//! - **stack**: PSH/PUL, RTI, SWI, CWAI
//! - **flags**: ANDCC, ORCC
//! - **transfer**: TFR, EXG

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod load_store;
pub(crate) mod read_modify_write;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::opcodes::{OpcodeMetadata, OpcodePage, PAGE1_TABLE};
use crate::registers::{Accumulator, IndexRegister, Register};
use crate::Fault;
use stack::SoftwareInterrupt;
use tracing::trace;

/// Charges the cost of an undefined opcode and builds its fault.
fn undefined(cpu: &mut Cpu, page: OpcodePage, opcode: u8) -> Fault {
    cpu.clock = cpu.clock.wrapping_add(page.undefined_cost());
    Fault::Instruction { page, opcode }
}

fn begin(cpu: &mut Cpu, metadata: &OpcodeMetadata, prefix_len: u16) {
    trace!(
        pc = cpu.regs.pc.wrapping_sub(prefix_len + 1),
        mnemonic = metadata.mnemonic,
        "execute"
    );
    cpu.clock = cpu.clock.wrapping_add(metadata.base_cycles as u64);
}

/// Executes an opcode fetched from the page-1 table.
pub(crate) fn execute_page1(cpu: &mut Cpu, opcode: u8) -> Result<(), Fault> {
    let metadata = &PAGE1_TABLE[opcode as usize];
    if !metadata.defined {
        return Err(undefined(cpu, OpcodePage::Page1, opcode));
    }

    match opcode {
        0x10 => return execute_prefixed(cpu, OpcodePage::Page2),
        0x11 => return execute_prefixed(cpu, OpcodePage::Page3),
        _ => {}
    }

    begin(cpu, metadata, 0);
    let mode = metadata.addressing_mode;

    match opcode {
        // Memory read-modify-write, JMP
        0x00..=0x0F | 0x60..=0x7F => match opcode & 0x0F {
            0x0D => read_modify_write::execute_test_memory(cpu, mode),
            0x0E => control::execute_jmp(cpu, mode),
            low => match read_modify_write::unary_op(low) {
                Some(op) => read_modify_write::execute_memory(cpu, mode, op),
                None => Err(Fault::Internal { pc: cpu.regs.pc }),
            },
        },

        0x12 => control::execute_nop(cpu),
        0x13 => control::execute_sync(cpu),
        0x16 => branches::execute_long_branch_always(cpu),
        0x17 => control::execute_jsr(cpu, mode),
        0x19 => alu::execute_daa(cpu),
        0x1A => flags::execute_orcc(cpu),
        0x1C => flags::execute_andcc(cpu),
        0x1D => alu::execute_sex(cpu),
        0x1E => transfer::execute_exg(cpu),
        0x1F => transfer::execute_tfr(cpu),

        0x20..=0x2F => branches::execute_branch(cpu, opcode),

        0x30 => load_store::execute_lea(cpu, IndexRegister::X),
        0x31 => load_store::execute_lea(cpu, IndexRegister::Y),
        0x32 => load_store::execute_lea(cpu, IndexRegister::S),
        0x33 => load_store::execute_lea(cpu, IndexRegister::U),
        0x34 => stack::execute_push(cpu, IndexRegister::S),
        0x35 => stack::execute_pull(cpu, IndexRegister::S),
        0x36 => stack::execute_push(cpu, IndexRegister::U),
        0x37 => stack::execute_pull(cpu, IndexRegister::U),
        0x39 => control::execute_rts(cpu),
        0x3A => alu::execute_abx(cpu),
        0x3B => stack::execute_rti(cpu),
        0x3C => stack::execute_cwai(cpu),
        0x3D => alu::execute_mul(cpu),
        0x3F => stack::execute_swi(cpu, SoftwareInterrupt::Swi),

        // Accumulator read-modify-write
        0x40..=0x5F => {
            let acc = if opcode < 0x50 {
                Accumulator::A
            } else {
                Accumulator::B
            };
            match opcode & 0x0F {
                0x0D => read_modify_write::execute_test_accumulator(cpu, acc),
                low => match read_modify_write::unary_op(low) {
                    Some(op) => read_modify_write::execute_accumulator(cpu, acc, op),
                    None => Err(Fault::Internal { pc: cpu.regs.pc }),
                },
            }
        }

        0x80..=0xFF => execute_register_group(cpu, opcode, mode),

        _ => Err(Fault::Internal { pc: cpu.regs.pc }),
    }
}

/// Rows 0x8_-0xF_: A-side operations in the left half, B-side in the right.
fn execute_register_group(cpu: &mut Cpu, opcode: u8, mode: AddressingMode) -> Result<(), Fault> {
    use Accumulator::{A, B};

    let acc = if opcode < 0xC0 { A } else { B };
    match (opcode & 0x0F, acc) {
        (0x0, _) => alu::execute_binary8(cpu, acc, mode, alu::sub),
        (0x1, _) => alu::execute_test8(cpu, acc, mode, alu::cmp),
        (0x2, _) => alu::execute_binary8(cpu, acc, mode, alu::sbc),
        (0x3, A) => alu::execute_binary16(cpu, Register::D, mode, alu::sub16),
        (0x3, B) => alu::execute_binary16(cpu, Register::D, mode, alu::add16),
        (0x4, _) => alu::execute_binary8(cpu, acc, mode, alu::and),
        (0x5, _) => alu::execute_test8(cpu, acc, mode, alu::bit),
        (0x6, _) => load_store::execute_load8(cpu, acc, mode),
        (0x7, _) => load_store::execute_store8(cpu, acc, mode),
        (0x8, _) => alu::execute_binary8(cpu, acc, mode, alu::eor),
        (0x9, _) => alu::execute_binary8(cpu, acc, mode, alu::adc),
        (0xA, _) => alu::execute_binary8(cpu, acc, mode, alu::or),
        (0xB, _) => alu::execute_binary8(cpu, acc, mode, alu::add),
        (0xC, A) => alu::execute_compare16(cpu, Register::X, mode),
        (0xC, B) => load_store::execute_load16(cpu, Register::D, mode),
        // BSR (relative) and JSR share the push-and-jump path
        (0xD, A) => control::execute_jsr(cpu, mode),
        (0xD, B) => load_store::execute_store16(cpu, Register::D, mode),
        (0xE, A) => load_store::execute_load16(cpu, Register::X, mode),
        (0xE, B) => load_store::execute_load16(cpu, Register::U, mode),
        (0xF, A) => load_store::execute_store16(cpu, Register::X, mode),
        (0xF, B) => load_store::execute_store16(cpu, Register::U, mode),
        _ => Err(Fault::Internal { pc: cpu.regs.pc }),
    }
}

/// Fetches the opcode following a 0x10/0x11 prefix and executes it from the
/// selected table. Prefixes do not chain.
fn execute_prefixed(cpu: &mut Cpu, page: OpcodePage) -> Result<(), Fault> {
    let opcode = cpu.fetch_byte()?;
    let metadata = &page.table()[opcode as usize];
    if !metadata.defined {
        return Err(undefined(cpu, page, opcode));
    }

    begin(cpu, metadata, 1);
    let mode = metadata.addressing_mode;

    match page {
        OpcodePage::Page2 => execute_page2(cpu, opcode, mode),
        OpcodePage::Page3 => execute_page3(cpu, opcode, mode),
        OpcodePage::Page1 => Err(Fault::Internal { pc: cpu.regs.pc }),
    }
}

fn execute_page2(cpu: &mut Cpu, opcode: u8, mode: AddressingMode) -> Result<(), Fault> {
    match opcode {
        0x21..=0x2F => branches::execute_long_branch(cpu, opcode),
        0x3F => stack::execute_swi(cpu, SoftwareInterrupt::Swi2),
        0x83 | 0x93 | 0xA3 | 0xB3 => alu::execute_compare16(cpu, Register::D, mode),
        0x8C | 0x9C | 0xAC | 0xBC => alu::execute_compare16(cpu, Register::Y, mode),
        0x8E | 0x9E | 0xAE | 0xBE => load_store::execute_load16(cpu, Register::Y, mode),
        0x9F | 0xAF | 0xBF => load_store::execute_store16(cpu, Register::Y, mode),
        0xCE | 0xDE | 0xEE | 0xFE => load_store::execute_load16(cpu, Register::S, mode),
        0xDF | 0xEF | 0xFF => load_store::execute_store16(cpu, Register::S, mode),
        _ => Err(Fault::Internal { pc: cpu.regs.pc }),
    }
}

fn execute_page3(cpu: &mut Cpu, opcode: u8, mode: AddressingMode) -> Result<(), Fault> {
    match opcode {
        0x3F => stack::execute_swi(cpu, SoftwareInterrupt::Swi3),
        0x83 | 0x93 | 0xA3 | 0xB3 => alu::execute_compare16(cpu, Register::U, mode),
        0x8C | 0x9C | 0xAC | 0xBC => alu::execute_compare16(cpu, Register::S, mode),
        _ => Err(Fault::Internal { pc: cpu.regs.pc }),
    }
}
