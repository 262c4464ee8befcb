//! # Register Transfer Instructions
//!
//! TFR and EXG. The post-byte names the source register in the high nibble
//! and the destination in the low nibble:
//!
//! | Code | Register | Code | Register |
//! |------|----------|------|----------|
//! | 0 | D | 8 | A |
//! | 1 | X | 9 | B |
//! | 2 | Y | A | CC |
//! | 3 | U | B | DP |
//! | 4 | S | | |
//! | 5 | PC | | |
//!
//! Both registers must have the same width. Writing S arms NMI.

use crate::cpu::Cpu;
use crate::registers::Register;
use crate::Fault;

fn decode(postbyte: u8) -> Result<(Register, Register), Fault> {
    let source = Register::from_code(postbyte >> 4);
    let destination = Register::from_code(postbyte & 0x0F);
    match (source, destination) {
        (Some(source), Some(destination)) if source.is_wide() == destination.is_wide() => {
            Ok((source, destination))
        }
        _ => Err(Fault::RegisterSelection { postbyte }),
    }
}

pub(crate) fn execute_tfr(cpu: &mut Cpu) -> Result<(), Fault> {
    let postbyte = cpu.fetch_byte()?;
    let (source, destination) = decode(postbyte)?;
    let value = cpu.regs.get(source);
    cpu.load_register(destination, value);
    Ok(())
}

pub(crate) fn execute_exg(cpu: &mut Cpu) -> Result<(), Fault> {
    let postbyte = cpu.fetch_byte()?;
    let (first, second) = decode(postbyte)?;
    let first_value = cpu.regs.get(first);
    let second_value = cpu.regs.get(second);
    cpu.load_register(first, second_value);
    cpu.load_register(second, first_value);
    Ok(())
}
