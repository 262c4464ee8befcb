//! # Branch Instructions
//!
//! Short (8-bit offset) and long (16-bit offset) conditional branches. The
//! condition is selected by the low nibble of the opcode in both forms:
//!
//! | Nibble | Short | Condition |
//! |--------|-------|-----------|
//! | 0 | BRA | always |
//! | 1 | BRN | never |
//! | 2 | BHI | C=0 and Z=0 |
//! | 3 | BLS | C=1 or Z=1 |
//! | 4 | BHS/BCC | C=0 |
//! | 5 | BLO/BCS | C=1 |
//! | 6 | BNE | Z=0 |
//! | 7 | BEQ | Z=1 |
//! | 8 | BVC | V=0 |
//! | 9 | BVS | V=1 |
//! | A | BPL | N=0 |
//! | B | BMI | N=1 |
//! | C | BGE | N=V |
//! | D | BLT | N!=V |
//! | E | BGT | Z=0 and N=V |
//! | F | BLE | Z=1 or N!=V |
//!
//! Short branches cost the same taken or not; a taken long conditional branch
//! costs one extra cycle.

use crate::cpu::Cpu;
use crate::registers::ConditionCodes;
use crate::Fault;

/// Evaluates the branch condition selected by the low nibble of `opcode`.
pub(crate) fn condition(cc: &ConditionCodes, opcode: u8) -> bool {
    match opcode & 0x0F {
        0x0 => true,
        0x1 => false,
        0x2 => !cc.carry && !cc.zero,
        0x3 => cc.carry || cc.zero,
        0x4 => !cc.carry,
        0x5 => cc.carry,
        0x6 => !cc.zero,
        0x7 => cc.zero,
        0x8 => !cc.overflow,
        0x9 => cc.overflow,
        0xA => !cc.negative,
        0xB => cc.negative,
        0xC => cc.negative == cc.overflow,
        0xD => cc.negative != cc.overflow,
        0xE => !cc.zero && cc.negative == cc.overflow,
        _ => cc.zero || cc.negative != cc.overflow,
    }
}

/// Bcc with an 8-bit offset (page 1, 0x20-0x2F).
pub(crate) fn execute_branch(cpu: &mut Cpu, opcode: u8) -> Result<(), Fault> {
    let target = cpu.relative_address()?;
    if condition(&cpu.regs.cc, opcode) {
        cpu.regs.pc = target;
    }
    Ok(())
}

/// LBcc with a 16-bit offset (page 2, 0x21-0x2F).
pub(crate) fn execute_long_branch(cpu: &mut Cpu, opcode: u8) -> Result<(), Fault> {
    let target = cpu.long_relative_address()?;
    if condition(&cpu.regs.cc, opcode) {
        cpu.regs.pc = target;
        cpu.clock = cpu.clock.wrapping_add(1);
    }
    Ok(())
}

/// LBRA (page 1, 0x16).
pub(crate) fn execute_long_branch_always(cpu: &mut Cpu) -> Result<(), Fault> {
    cpu.regs.pc = cpu.long_relative_address()?;
    Ok(())
}
