//! # Condition Code Instructions
//!
//! ANDCC and ORCC: mask or set CC bits with an immediate byte. These are the
//! only way a program changes I and F directly.

use crate::cpu::Cpu;
use crate::registers::ConditionCodes;
use crate::Fault;

pub(crate) fn execute_andcc(cpu: &mut Cpu) -> Result<(), Fault> {
    let mask = cpu.fetch_byte()?;
    cpu.regs.cc = ConditionCodes::from_byte(cpu.regs.cc.to_byte() & mask);
    Ok(())
}

pub(crate) fn execute_orcc(cpu: &mut Cpu) -> Result<(), Fault> {
    let bits = cpu.fetch_byte()?;
    cpu.regs.cc = ConditionCodes::from_byte(cpu.regs.cc.to_byte() | bits);
    Ok(())
}
