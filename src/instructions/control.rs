//! # Control Flow Instructions
//!
//! JMP, JSR, BSR, LBSR, RTS, NOP and SYNC.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::Fault;
use tracing::debug;

pub(crate) fn execute_jmp(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Fault> {
    cpu.regs.pc = cpu.effective_address(mode)?;
    Ok(())
}

/// JSR, BSR and LBSR: push the return address on S, then jump.
pub(crate) fn execute_jsr(cpu: &mut Cpu, mode: AddressingMode) -> Result<(), Fault> {
    let target = cpu.effective_address(mode)?;
    cpu.push_word_s(cpu.regs.pc)?;
    cpu.regs.pc = target;
    Ok(())
}

pub(crate) fn execute_rts(cpu: &mut Cpu) -> Result<(), Fault> {
    cpu.regs.pc = cpu.pull_word_s()?;
    Ok(())
}

pub(crate) fn execute_nop(_cpu: &mut Cpu) -> Result<(), Fault> {
    Ok(())
}

/// Halts fetching until any interrupt line is asserted.
pub(crate) fn execute_sync(cpu: &mut Cpu) -> Result<(), Fault> {
    cpu.sync = true;
    debug!(pc = cpu.regs.pc, "SYNC wait");
    Ok(())
}
