//! # Read-Modify-Write Instructions
//!
//! NEG, COM, LSR, ROR, ASR, LSL, ROL, DEC, INC, TST and CLR, applied either to
//! memory (direct, indexed, extended) or to an accumulator (inherent).
//!
//! The memory forms read the operand before writing the result back, CLR
//! included. TST never writes.

use super::alu::{self, UnaryOp};
use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::registers::Accumulator;
use crate::Fault;

/// Maps the low nibble shared by the 0x00, 0x40, 0x50, 0x60 and 0x70 rows
/// to its operation. TST (0xD) and JMP (0xE) are handled by the caller.
pub(crate) fn unary_op(low_nibble: u8) -> Option<UnaryOp> {
    let op: UnaryOp = match low_nibble {
        0x0 => alu::neg,
        0x3 => alu::com,
        0x4 => alu::lsr,
        0x6 => alu::ror,
        0x7 => alu::asr,
        0x8 => alu::lsl,
        0x9 => alu::rol,
        0xA => alu::dec,
        0xC => alu::inc,
        0xF => alu::clr,
        _ => return None,
    };
    Some(op)
}

pub(crate) fn execute_memory(cpu: &mut Cpu, mode: AddressingMode, op: UnaryOp) -> Result<(), Fault> {
    let address = cpu.effective_address(mode)?;
    let value = cpu.read(address)?;
    let result = op(&mut cpu.regs.cc, value);
    cpu.write(address, result)
}

pub(crate) fn execute_accumulator(cpu: &mut Cpu, acc: Accumulator, op: UnaryOp) -> Result<(), Fault> {
    let value = cpu.regs.accumulator(acc);
    let result = op(&mut cpu.regs.cc, value);
    cpu.regs.set_accumulator(acc, result);
    Ok(())
}

pub(crate) fn execute_test_memory(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Fault> {
    let address = cpu.effective_address(mode)?;
    let value = cpu.read(address)?;
    alu::tst(&mut cpu.regs.cc, value);
    Ok(())
}

pub(crate) fn execute_test_accumulator(cpu: &mut Cpu, acc: Accumulator) -> Result<(), Fault> {
    let value = cpu.regs.accumulator(acc);
    alu::tst(&mut cpu.regs.cc, value);
    Ok(())
}
