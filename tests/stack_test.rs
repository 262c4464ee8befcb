//! Tests for PSH/PUL, RTI and the software interrupts

use lib6809::{vectors, Access, Bus, Cpu, MemoryBlock};

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

#[test]
fn test_pshs_order_and_cycles() {
    // PSHS PC,U,Y,X,DP,B,A,CC
    let (mut cpu, ram) = setup_cpu(&[0x34, 0xFF]);
    cpu.set_cc(0x0F);
    cpu.set_a(0x11);
    cpu.set_b(0x22);
    cpu.set_dp(0x33);
    cpu.set_x(0x4444);
    cpu.set_y(0x5555);
    cpu.step().unwrap();

    assert_eq!(cpu.s(), 0x8000 - 12);
    assert_eq!(
        &ram.to_vec()[0x7FF4..0x8000],
        &[0x0F, 0x11, 0x22, 0x33, 0x44, 0x44, 0x55, 0x55, 0x70, 0x00, 0x40, 0x02],
        "CC at the lowest address, PC at the highest"
    );
    assert_eq!(cpu.clock(), 5 + 12);
}

#[test]
fn test_puls_restores_in_reverse() {
    let (mut cpu, _ram) = setup_cpu(&[
        0x34, 0x36, // PSHS Y,X,B,A
        0x4F, 0x5F, // CLRA, CLRB
        0x8E, 0x00, 0x00, // LDX #0
        0x35, 0x36, // PULS Y,X,B,A
    ]);
    cpu.set_a(0xAA);
    cpu.set_b(0xBB);
    cpu.set_x(0x1234);
    cpu.set_y(0x5678);
    for _ in 0..5 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.b(), 0xBB);
    assert_eq!(cpu.x(), 0x1234);
    assert_eq!(cpu.y(), 0x5678);
    assert_eq!(cpu.s(), 0x8000);
}

#[test]
fn test_pshu_pushes_s_in_place_of_u() {
    let (mut cpu, ram) = setup_cpu(&[0x36, 0x40]);
    cpu.step().unwrap();
    assert_eq!(cpu.u(), 0x6FFE);
    assert_eq!(ram.get(0x6FFE), Some(0x80));
    assert_eq!(ram.get(0x6FFF), Some(0x00));
    assert_eq!(cpu.clock(), 7);
}

#[test]
fn test_pulu_loading_s_arms_nmi() {
    let (mut cpu, ram) = setup_cpu(&[0x37, 0x40]);
    ram.load(0x7000, &[0x90, 0x00]).unwrap();
    assert!(!cpu.nmi_armed());
    cpu.step().unwrap();
    assert_eq!(cpu.s(), 0x9000);
    assert!(cpu.nmi_armed());
}

#[test]
fn test_puls_pc_is_a_return() {
    let (mut cpu, ram) = setup_cpu(&[0x35, 0x80]);
    ram.load(0x8000, &[0x12, 0x34]).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.clock(), 7);
}

#[test]
fn test_swi_stacks_entire_state() {
    let (mut cpu, ram) = setup_cpu(&[0x3F]);
    ram.load(vectors::SWI as usize, &[0x60, 0x00]).unwrap();
    cpu.set_cc(0x00);
    cpu.set_a(0x01);
    cpu.set_b(0x02);
    cpu.set_x(0x0304);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x6000);
    assert_eq!(cpu.s(), 0x8000 - 12);
    let cc = cpu.condition_codes();
    assert!(cc.irq_mask && cc.firq_mask, "SWI masks both");
    assert!(cc.entire);
    let stacked_cc = ram.get(0x7FF4).unwrap();
    assert_eq!(stacked_cc & 0x80, 0x80, "stacked CC has E set");
    assert_eq!(stacked_cc & 0x50, 0x00, "masks set after stacking");
    assert_eq!(ram.get(0x7FF5), Some(0x01));
    assert_eq!(ram.get(0x7FF6), Some(0x02));
    assert_eq!(cpu.clock(), 19);
}

#[test]
fn test_swi2_and_swi3_leave_masks() {
    for (prefix, vector) in [(0x10u8, vectors::SWI2), (0x11u8, vectors::SWI3)] {
        let (mut cpu, ram) = setup_cpu(&[prefix, 0x3F]);
        ram.load(vector as usize, &[0x61, 0x00]).unwrap();
        cpu.set_cc(0x00);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x6100);
        assert_eq!(cpu.cc() & 0x50, 0x00, "masks untouched");
        assert_eq!(cpu.clock(), 20);
    }
}

#[test]
fn test_swi_then_rti_round_trip() {
    let (mut cpu, ram) = setup_cpu(&[0x3F, 0x12]);
    ram.load(vectors::SWI as usize, &[0x60, 0x00]).unwrap();
    ram.set(0x6000, 0x3B); // RTI
    cpu.set_cc(0x01);
    cpu.set_a(0xA5);
    cpu.set_u(0x1357);
    cpu.step().unwrap();

    cpu.set_a(0x00);
    cpu.set_u(0x0000);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x4001);
    assert_eq!(cpu.a(), 0xA5, "A restored");
    assert_eq!(cpu.u(), 0x1357, "U restored");
    assert_eq!(cpu.s(), 0x8000);
    assert_eq!(cpu.cc(), 0x81, "C and E as stacked");
    assert_eq!(cpu.clock(), 19 + 15);
}

#[test]
fn test_rti_fast_frame() {
    // CC with E clear, then PC
    let (mut cpu, ram) = setup_cpu(&[0x3B]);
    cpu.set_s(0x7FFD);
    ram.load(0x7FFD, &[0x04, 0x12, 0x34]).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cc(), 0x04);
    assert_eq!(cpu.s(), 0x8000);
    assert_eq!(cpu.clock(), 6);
}
