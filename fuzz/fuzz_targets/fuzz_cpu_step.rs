//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states, memory contents and interrupt
//! lines, then executes a few steps to find panics and broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use lib6809::{Access, Bus, Cpu, MemoryBlock};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    b: u8,
    dp: u8,
    x: u16,
    y: u16,
    u: u16,
    s: u16,
    cc: u8,
    nmi: bool,
    firq: bool,
    irq: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (prefix + opcode + post-byte + operands)
    instruction_bytes: [u8; 5],
    /// Direct page contents
    direct_page: [u8; 256],
    /// Interrupt vector table (0xFFF0-0xFFFF)
    vectors: [u8; 16],
    /// Pages left unmapped to provoke bus faults (bit per 16-page group)
    unmapped_groups: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let ram = MemoryBlock::new(0x10000);
    let _ = ram.load(0xFFF0, &input.memory.vectors);
    let _ = ram.load(0x8000, &input.memory.instruction_bytes);
    let _ = ram.load((input.cpu_state.dp as usize) << 8, &input.memory.direct_page);

    let mut bus = Bus::new();
    for group in 0..16u8 {
        let first = group * 16;
        // Keep the vector and code pages mapped
        if input.memory.unmapped_groups & (1 << group) != 0 && group != 0x0F && group != 0x08 {
            continue;
        }
        let _ = bus.map_block(first..=first + 15, &ram, first as usize, Access::ReadWrite);
    }

    let mut cpu = Cpu::new(bus);
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_b(input.cpu_state.b);
    cpu.set_dp(input.cpu_state.dp);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_u(input.cpu_state.u);
    cpu.set_s(input.cpu_state.s);
    cpu.set_cc(input.cpu_state.cc);
    cpu.set_nmi(input.cpu_state.nmi);
    cpu.set_firq(input.cpu_state.firq);
    cpu.set_irq(input.cpu_state.irq);

    for _ in 0..(input.steps % 8) + 1 {
        let before = cpu.snapshot();
        match cpu.step() {
            Ok(()) => {
                // Servicing from CWAI is free; nothing else is
                assert!(cpu.clock() >= before.clock);
                if !before.cwai {
                    assert!(cpu.clock() > before.clock);
                }
            }
            Err(fault) => {
                assert_eq!(cpu.fault(), Some(fault));
                if fault.is_bus_fault() {
                    // Bus faults leave registers and clock untouched
                    assert_eq!(cpu.registers(), &before.registers);
                    assert_eq!(cpu.clock(), before.clock);
                }
                break;
            }
        }
    }
});
