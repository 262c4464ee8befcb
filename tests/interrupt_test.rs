//! Tests for hardware interrupts, CWAI and SYNC
//!
//! Interrupt lines are level-sensitive inputs sampled at the start of each
//! step. Priority is NMI, then FIRQ, then IRQ.

use lib6809::{vectors, Access, Bus, Cpu, MemoryBlock};

const NMI_HANDLER: u16 = 0x6000;
const FIRQ_HANDLER: u16 = 0x6100;
const IRQ_HANDLER: u16 = 0x6200;

fn setup_cpu(program: &[u8]) -> (Cpu, MemoryBlock) {
    let ram = MemoryBlock::new(0x10000);
    ram.load(0xFFFE, &[0x40, 0x00]).unwrap();
    ram.load(vectors::NMI as usize, &NMI_HANDLER.to_be_bytes()).unwrap();
    ram.load(vectors::FIRQ as usize, &FIRQ_HANDLER.to_be_bytes()).unwrap();
    ram.load(vectors::IRQ as usize, &IRQ_HANDLER.to_be_bytes()).unwrap();
    ram.load(0x4000, program).unwrap();
    let mut bus = Bus::new();
    bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.reset().unwrap();
    (cpu, ram)
}

/// CPU that has executed `LDS #$8000` and `ANDCC #$00`.
fn armed_cpu(program: &[u8]) -> (Cpu, MemoryBlock) {
    let mut full = vec![0x10, 0xCE, 0x80, 0x00, 0x1C, 0x00];
    full.extend_from_slice(program);
    let (mut cpu, ram) = setup_cpu(&full);
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(cpu.nmi_armed());
    assert_eq!(cpu.cc(), 0x00);
    cpu.set_clock(0);
    (cpu, ram)
}

// ========== Priority ==========

#[test]
fn test_nmi_wins_when_all_lines_asserted() {
    let (mut cpu, _ram) = armed_cpu(&[0x12]);
    cpu.set_nmi(true);
    cpu.set_firq(true);
    cpu.set_irq(true);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), NMI_HANDLER);
    assert_eq!(cpu.clock(), 19);
    assert!(!cpu.nmi(), "NMI line cleared once serviced");
    assert!(cpu.firq() && cpu.irq(), "other lines untouched");
    let cc = cpu.condition_codes();
    assert!(cc.firq_mask && cc.irq_mask, "NMI masks both");

    // Handler unmasks: FIRQ is next
    cpu.set_cc(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), FIRQ_HANDLER);

    // FIRQ deasserted: IRQ is last
    cpu.set_firq(false);
    cpu.set_cc(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), IRQ_HANDLER);
}

#[test]
fn test_nmi_stacks_entire_state() {
    let (mut cpu, ram) = armed_cpu(&[0x12]);
    cpu.set_a(0x11);
    cpu.set_x(0x2222);
    cpu.set_nmi(true);
    cpu.step().unwrap();

    assert_eq!(cpu.s(), 0x8000 - 12);
    assert_eq!(ram.get(0x7FF4), Some(0x80), "CC with E set");
    assert_eq!(ram.get(0x7FF5), Some(0x11), "A");
    assert_eq!(&ram.to_vec()[0x7FF8..0x7FFA], &[0x22, 0x22], "X");
    assert_eq!(&ram.to_vec()[0x7FFE..0x8000], &[0x40, 0x06], "return PC");
}

#[test]
fn test_nmi_ignored_until_s_loaded() {
    let (mut cpu, _ram) = setup_cpu(&[0x12, 0x10, 0xCE, 0x80, 0x00, 0x12]);
    cpu.set_s(0x8000);
    cpu.set_nmi(true);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x4001, "NOP executed, NMI held off");
    assert!(cpu.nmi(), "line stays asserted");

    cpu.step().unwrap(); // LDS arms
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), NMI_HANDLER);
}

#[test]
fn test_nmi_service_then_rti() {
    let (mut cpu, ram) = armed_cpu(&[0x12, 0x12]);
    ram.set(NMI_HANDLER as usize, 0x3B); // RTI
    cpu.set_b(0x42);
    cpu.set_nmi(true);
    cpu.step().unwrap();
    cpu.set_b(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x4006);
    assert_eq!(cpu.b(), 0x42);
    assert_eq!(cpu.s(), 0x8000);
    assert_eq!(cpu.clock(), 19 + 15);
}

// ========== FIRQ ==========

#[test]
fn test_firq_fast_frame() {
    let (mut cpu, ram) = armed_cpu(&[0x12]);
    cpu.set_cc(0x01);
    cpu.set_firq(true);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), FIRQ_HANDLER);
    assert_eq!(cpu.s(), 0x8000 - 3, "PC and CC only");
    assert_eq!(ram.get(0x7FFD), Some(0x01), "stacked CC has E clear");
    assert_eq!(&ram.to_vec()[0x7FFE..0x8000], &[0x40, 0x06]);
    assert_eq!(cpu.clock(), 10);
    let cc = cpu.condition_codes();
    assert!(cc.firq_mask);
    assert!(!cc.irq_mask, "FIRQ leaves I alone");
    assert!(!cc.entire);
}

#[test]
fn test_firq_then_rti_pulls_short_frame() {
    let (mut cpu, ram) = armed_cpu(&[0x12]);
    ram.set(FIRQ_HANDLER as usize, 0x3B);
    cpu.set_firq(true);
    cpu.step().unwrap();
    cpu.set_firq(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x4006);
    assert_eq!(cpu.s(), 0x8000);
    assert_eq!(cpu.clock(), 10 + 6);
}

#[test]
fn test_firq_masked() {
    let (mut cpu, _ram) = armed_cpu(&[0x12]);
    cpu.set_cc(0x40);
    cpu.set_firq(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x4007, "instruction executed instead");
}

// ========== IRQ ==========

#[test]
fn test_irq_service() {
    let (mut cpu, _ram) = armed_cpu(&[0x12]);
    cpu.set_irq(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert_eq!(cpu.clock(), 19);
    let cc = cpu.condition_codes();
    assert!(cc.irq_mask);
    assert!(!cc.firq_mask, "IRQ leaves F alone");
    assert!(cpu.irq(), "level-sensitive: the device releases the line");
}

#[test]
fn test_irq_masked() {
    let (mut cpu, _ram) = armed_cpu(&[0x12]);
    cpu.set_cc(0x10);
    cpu.set_irq(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x4007);
}

// ========== CWAI ==========

#[test]
fn test_cwai_stacks_then_waits() {
    // CWAI #$EF
    let (mut cpu, _ram) = armed_cpu(&[0x3C, 0xEF]);
    cpu.set_cc(0x10);
    cpu.step().unwrap();
    assert!(cpu.in_cwai());
    assert_eq!(cpu.s(), 0x8000 - 12, "state stacked up front");
    assert_eq!(cpu.clock(), 20);
    assert_eq!(cpu.cc() & 0x10, 0x00, "mask cleared by the immediate");

    for _ in 0..5 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.clock(), 25, "one cycle per idle step");
    assert_eq!(cpu.pc(), 0x4008);
}

#[test]
fn test_cwai_service_has_no_push_or_cost() {
    let (mut cpu, ram) = armed_cpu(&[0x3C, 0xFF, 0x12]);
    ram.set(IRQ_HANDLER as usize, 0x3B); // RTI
    cpu.set_a(0x5A);
    cpu.step().unwrap();
    cpu.step().unwrap();
    let before = cpu.clock();

    cpu.set_irq(true);
    cpu.step().unwrap();
    assert!(!cpu.in_cwai());
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    assert_eq!(cpu.clock(), before, "no stacking cost");
    assert_eq!(cpu.s(), 0x8000 - 12, "no second frame");

    cpu.set_irq(false);
    cpu.set_a(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x4008, "returns past CWAI");
    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.s(), 0x8000);
}

#[test]
fn test_cwai_firq_returns_entire_frame() {
    let (mut cpu, ram) = armed_cpu(&[0x3C, 0xFF]);
    ram.set(FIRQ_HANDLER as usize, 0x3B);
    cpu.set_y(0x1234);
    cpu.step().unwrap();
    cpu.set_firq(true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), FIRQ_HANDLER);
    cpu.set_firq(false);
    cpu.set_y(0);
    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x1234, "E was set by CWAI, so RTI pulls everything");
    assert_eq!(cpu.s(), 0x8000);
}

// ========== SYNC ==========

#[test]
fn test_sync_idles_until_a_line() {
    let (mut cpu, _ram) = armed_cpu(&[0x13, 0x12]);
    cpu.step().unwrap();
    assert!(cpu.in_sync());
    assert_eq!(cpu.clock(), 4);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.clock(), 6);
    assert_eq!(cpu.pc(), 0x4007);

    cpu.set_irq(true);
    cpu.step().unwrap();
    assert!(!cpu.in_sync());
    assert_eq!(cpu.pc(), IRQ_HANDLER);
}

#[test]
fn test_sync_with_masked_line_resumes() {
    let (mut cpu, _ram) = armed_cpu(&[0x13, 0x12]);
    cpu.set_cc(0x50);
    cpu.step().unwrap();
    cpu.set_irq(true);
    cpu.step().unwrap();
    assert!(!cpu.in_sync());
    assert_eq!(cpu.pc(), 0x4008, "NOP after SYNC executed");
}

#[test]
fn test_sync_cleared_by_unarmed_nmi() {
    let (mut cpu, _ram) = setup_cpu(&[0x13, 0x12]);
    cpu.step().unwrap();
    cpu.set_nmi(true);
    cpu.step().unwrap();
    assert!(!cpu.in_sync());
    assert_eq!(cpu.pc(), 0x4002);
}
