//! # Stack and Software Interrupt Instructions
//!
//! PSHS/PULS/PSHU/PULU, RTI, SWI/SWI2/SWI3 and CWAI.
//!
//! The push/pull post-byte selects registers by bit:
//!
//! | Bit | 7 | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
//! |-----|---|---|---|---|---|---|---|---|
//! | Reg | PC | U/S | Y | X | DP | B | A | CC |
//!
//! Bit 6 names the *other* stack pointer. Pushes go from bit 7 down to bit 0,
//! pulls from bit 0 up, and each byte moved costs one extra cycle.

use crate::cpu::{vectors, Cpu};
use crate::registers::{IndexRegister, Register};
use crate::Fault;
use tracing::debug;

/// Which software interrupt instruction is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SoftwareInterrupt {
    Swi,
    Swi2,
    Swi3,
}

/// Push order, highest bit first.
const PUSH_ORDER: [(u8, Register); 8] = [
    (0x80, Register::Pc),
    (0x40, Register::U), // other stack, resolved per instruction
    (0x20, Register::Y),
    (0x10, Register::X),
    (0x08, Register::Dp),
    (0x04, Register::B),
    (0x02, Register::A),
    (0x01, Register::Cc),
];

fn other_stack(stack: IndexRegister) -> Register {
    match stack {
        IndexRegister::U => Register::S,
        _ => Register::U,
    }
}

/// PSHS/PSHU
pub(crate) fn execute_push(cpu: &mut Cpu, stack: IndexRegister) -> Result<(), Fault> {
    let mask = cpu.fetch_byte()?;
    for &(bit, reg) in PUSH_ORDER.iter() {
        if mask & bit == 0 {
            continue;
        }
        let reg = if bit == 0x40 { other_stack(stack) } else { reg };
        let value = cpu.regs.get(reg);
        if reg.is_wide() {
            cpu.push_word(stack, value)?;
            cpu.clock = cpu.clock.wrapping_add(2);
        } else {
            cpu.push_byte(stack, value as u8)?;
            cpu.clock = cpu.clock.wrapping_add(1);
        }
    }
    Ok(())
}

/// PULS/PULU
pub(crate) fn execute_pull(cpu: &mut Cpu, stack: IndexRegister) -> Result<(), Fault> {
    let mask = cpu.fetch_byte()?;
    for &(bit, reg) in PUSH_ORDER.iter().rev() {
        if mask & bit == 0 {
            continue;
        }
        let reg = if bit == 0x40 { other_stack(stack) } else { reg };
        let value = if reg.is_wide() {
            cpu.clock = cpu.clock.wrapping_add(2);
            cpu.pull_word(stack)?
        } else {
            cpu.clock = cpu.clock.wrapping_add(1);
            cpu.pull_byte(stack)? as u16
        };
        cpu.load_register(reg, value);
    }
    Ok(())
}

/// Pulls CC, then the rest of the entire state if E is set, then PC.
pub(crate) fn execute_rti(cpu: &mut Cpu) -> Result<(), Fault> {
    let cc = cpu.pull_byte_s()?;
    cpu.regs.set(Register::Cc, cc as u16);
    if cpu.regs.cc.entire {
        cpu.regs.a = cpu.pull_byte_s()?;
        cpu.regs.b = cpu.pull_byte_s()?;
        cpu.regs.dp = cpu.pull_byte_s()?;
        cpu.regs.x = cpu.pull_word_s()?;
        cpu.regs.y = cpu.pull_word_s()?;
        cpu.regs.u = cpu.pull_word_s()?;
        cpu.clock = cpu.clock.wrapping_add(9);
    }
    cpu.regs.pc = cpu.pull_word_s()?;
    Ok(())
}

/// SWI masks both FIRQ and IRQ; SWI2 and SWI3 leave the masks alone.
pub(crate) fn execute_swi(cpu: &mut Cpu, kind: SoftwareInterrupt) -> Result<(), Fault> {
    cpu.stack_entire_state()?;
    let vector = match kind {
        SoftwareInterrupt::Swi => {
            cpu.regs.cc.firq_mask = true;
            cpu.regs.cc.irq_mask = true;
            vectors::SWI
        }
        SoftwareInterrupt::Swi2 => vectors::SWI2,
        SoftwareInterrupt::Swi3 => vectors::SWI3,
    };
    cpu.regs.pc = cpu.read_word(vector)?;
    debug!(?kind, pc = cpu.regs.pc, "software interrupt");
    Ok(())
}

/// ANDs CC with the immediate, stacks the entire state and waits.
pub(crate) fn execute_cwai(cpu: &mut Cpu) -> Result<(), Fault> {
    let mask = cpu.fetch_byte()?;
    cpu.regs.set(Register::Cc, (cpu.regs.cc.to_byte() & mask) as u16);
    cpu.stack_entire_state()?;
    cpu.cwai = true;
    debug!(pc = cpu.regs.pc, "CWAI wait");
    Ok(())
}
