//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that instructions maintain their
//! invariants across arbitrary register and operand values.

use lib6809::{Access, Bus, ConditionCodes, Cpu, MemoryBlock, PAGE1_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU over 64KB of RAM, reset vector at 0x4000
fn setup_cpu(program: &[u8]) -> (Cpu, MemoryBlock) {
    let ram = MemoryBlock::new(0x10000);
    ram.load(0xFFFE, &[0x40, 0x00]).unwrap();
    ram.load(0x4000, program).unwrap();
    let mut bus = Bus::new();
    bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.reset().unwrap();
    cpu.set_s(0x8000);
    cpu.set_u(0x7000);
    (cpu, ram)
}

/// Every defined, non-prefix page-1 opcode
fn defined_opcodes() -> Vec<u8> {
    PAGE1_TABLE
        .iter()
        .enumerate()
        .filter(|(opcode, m)| m.defined && *opcode != 0x10 && *opcode != 0x11)
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    /// Property: CC survives a byte round trip
    #[test]
    fn prop_condition_codes_byte_round_trip(byte in any::<u8>()) {
        prop_assert_eq!(ConditionCodes::from_byte(byte).to_byte(), byte);
    }

    /// Property: TST, CMP and BIT change only CC and PC
    #[test]
    fn prop_test_instructions_only_touch_flags(
        opcode in prop::sample::select(vec![0x4Du8, 0x5D, 0x81, 0xC1, 0x85, 0xC5]),
        a in any::<u8>(),
        b in any::<u8>(),
        operand in any::<u8>(),
    ) {
        let (mut cpu, _ram) = setup_cpu(&[opcode, operand]);
        cpu.set_a(a);
        cpu.set_b(b);
        let before = *cpu.registers();
        cpu.step().unwrap();
        let after = *cpu.registers();
        prop_assert_eq!(after.a, before.a);
        prop_assert_eq!(after.b, before.b);
        prop_assert_eq!(after.x, before.x);
        prop_assert_eq!(after.s, before.s);
    }

    /// Property: CMPA sets flags the same way SUBA does
    #[test]
    fn prop_cmp_matches_sub_flags(a in any::<u8>(), operand in any::<u8>(), cc in any::<u8>()) {
        let (mut cmp, _ram) = setup_cpu(&[0x81, operand]);
        let (mut sub, _ram2) = setup_cpu(&[0x80, operand]);
        for cpu in [&mut cmp, &mut sub] {
            cpu.set_a(a);
            cpu.set_cc(cc);
            cpu.step().unwrap();
        }
        prop_assert_eq!(cmp.cc() & 0x0F, sub.cc() & 0x0F);
        prop_assert_eq!(sub.a(), a.wrapping_sub(operand));
    }

    /// Property: ADDA computes the wrapping sum and the unsigned carry
    #[test]
    fn prop_adda_sum_and_carry(a in any::<u8>(), operand in any::<u8>()) {
        let (mut cpu, _ram) = setup_cpu(&[0x8B, operand]);
        cpu.set_a(a);
        cpu.step().unwrap();
        let wide = a as u16 + operand as u16;
        prop_assert_eq!(cpu.a(), wide as u8);
        prop_assert_eq!(cpu.condition_codes().carry, wide > 0xFF);
        prop_assert_eq!(cpu.condition_codes().zero, wide as u8 == 0);
        let signed = (a as i8 as i16) + (operand as i8 as i16);
        prop_assert_eq!(cpu.condition_codes().overflow, !(-128..=127).contains(&signed));
    }

    /// Property: PSHS followed by PULS with the same mask restores every register
    #[test]
    fn prop_push_pull_round_trip(
        mask in any::<u8>(),
        a in any::<u8>(),
        b in any::<u8>(),
        dp in any::<u8>(),
        x in any::<u16>(),
        y in any::<u16>(),
        u in any::<u16>(),
    ) {
        // PC is excluded so the pull does not jump
        let mask = mask & 0x7F;
        let (mut cpu, _ram) = setup_cpu(&[0x34, mask, 0x35, mask]);
        cpu.set_a(a);
        cpu.set_b(b);
        cpu.set_dp(dp);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_u(u);
        cpu.set_cc(0x50);
        let before = *cpu.registers();
        cpu.step().unwrap();
        cpu.step().unwrap();
        let after = *cpu.registers();
        prop_assert_eq!(after.a, before.a);
        prop_assert_eq!(after.b, before.b);
        prop_assert_eq!(after.dp, before.dp);
        prop_assert_eq!(after.x, before.x);
        prop_assert_eq!(after.y, before.y);
        prop_assert_eq!(after.u, before.u);
        prop_assert_eq!(after.s, 0x8000);
        prop_assert_eq!(after.cc, before.cc);
    }

    /// Property: EXG twice is the identity
    #[test]
    fn prop_exg_twice_is_identity(
        pair in prop::sample::select(vec![0x89u8, 0x12, 0x03, 0x8B, 0x9A, 0x23]),
        x in any::<u16>(),
        y in any::<u16>(),
        d in any::<u16>(),
    ) {
        let (mut cpu, _ram) = setup_cpu(&[0x1E, pair, 0x1E, pair]);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_d(d);
        let before = *cpu.registers();
        cpu.step().unwrap();
        cpu.step().unwrap();
        let mut after = *cpu.registers();
        after.pc = before.pc;
        prop_assert_eq!(after, before);
    }

    /// Property: the clock only moves forward, by at least one cycle per
    /// executed opcode, whatever the operand bytes
    #[test]
    fn prop_clock_monotonic(
        opcode in prop::sample::select(defined_opcodes()),
        operands in any::<[u8; 4]>(),
        cc in any::<u8>(),
    ) {
        let mut program = vec![opcode];
        program.extend_from_slice(&operands);
        let (mut cpu, _ram) = setup_cpu(&program);
        cpu.set_cc(cc);
        let before = cpu.clock();
        let _ = cpu.step();
        prop_assert!(cpu.clock() > before);
    }
}
