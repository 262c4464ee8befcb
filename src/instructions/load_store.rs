//! # Load and Store Instructions
//!
//! LDA/LDB/LDD/LDX/LDY/LDU/LDS, the matching stores, and LEAX/LEAY/LEAS/LEAU.
//!
//! Loads and stores set N and Z from the value and clear V. Loading S, by LDS
//! or LEAS, arms NMI.

use super::alu;
use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::registers::{Accumulator, IndexRegister, Register};
use crate::Fault;

pub(crate) fn execute_load8(cpu: &mut Cpu, acc: Accumulator, mode: AddressingMode) -> Result<(), Fault> {
    let value = cpu.read_operand8(mode)?;
    alu::load8(&mut cpu.regs.cc, value);
    cpu.regs.set_accumulator(acc, value);
    Ok(())
}

pub(crate) fn execute_store8(cpu: &mut Cpu, acc: Accumulator, mode: AddressingMode) -> Result<(), Fault> {
    let address = cpu.effective_address(mode)?;
    let value = cpu.regs.accumulator(acc);
    alu::load8(&mut cpu.regs.cc, value);
    cpu.write(address, value)
}

pub(crate) fn execute_load16(cpu: &mut Cpu, reg: Register, mode: AddressingMode) -> Result<(), Fault> {
    let value = cpu.read_operand16(mode)?;
    alu::load16(&mut cpu.regs.cc, value);
    cpu.load_register(reg, value);
    Ok(())
}

pub(crate) fn execute_store16(cpu: &mut Cpu, reg: Register, mode: AddressingMode) -> Result<(), Fault> {
    let address = cpu.effective_address(mode)?;
    let value = cpu.regs.get(reg);
    alu::load16(&mut cpu.regs.cc, value);
    cpu.write_word(address, value)
}

/// Loads the effective address itself. LEAX/LEAY set Z; LEAS/LEAU leave the
/// flags alone.
pub(crate) fn execute_lea(cpu: &mut Cpu, target: IndexRegister) -> Result<(), Fault> {
    let address = cpu.indexed_address()?;
    match target {
        IndexRegister::X | IndexRegister::Y => {
            cpu.regs.set_index(target, address);
            cpu.regs.cc.zero = address == 0;
        }
        IndexRegister::U => cpu.regs.u = address,
        IndexRegister::S => cpu.load_register(Register::S, address),
    }
    Ok(())
}
