//! Tests for TFR and EXG

use lib6809::{Access, Bus, Cpu, Fault, MemoryBlock};

fn setup_cpu(program: &[u8]) -> Cpu {
    let ram = MemoryBlock::new(0x10000);
    ram.load(0xFFFE, &[0x40, 0x00]).unwrap();
    ram.load(0x4000, program).unwrap();
    let mut bus = Bus::new();
    bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_tfr_x_to_y() {
    let mut cpu = setup_cpu(&[0x1F, 0x12]);
    cpu.set_x(0xBEEF);
    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0xBEEF);
    assert_eq!(cpu.x(), 0xBEEF);
    assert_eq!(cpu.clock(), 6);
}

#[test]
fn test_tfr_a_to_dp() {
    let mut cpu = setup_cpu(&[0x1F, 0x8B]);
    cpu.set_a(0x20);
    cpu.step().unwrap();
    assert_eq!(cpu.dp(), 0x20);
}

#[test]
fn test_tfr_to_cc() {
    let mut cpu = setup_cpu(&[0x1F, 0x9A]);
    cpu.set_b(0x0F);
    cpu.step().unwrap();
    assert_eq!(cpu.cc(), 0x0F);
}

#[test]
fn test_tfr_to_pc_jumps() {
    let mut cpu = setup_cpu(&[0x1F, 0x15]);
    cpu.set_x(0x6000);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x6000);
}

#[test]
fn test_tfr_to_s_arms_nmi() {
    let mut cpu = setup_cpu(&[0x1F, 0x14]);
    cpu.set_x(0x8000);
    cpu.step().unwrap();
    assert_eq!(cpu.s(), 0x8000);
    assert!(cpu.nmi_armed());
}

#[test]
fn test_exg_a_b() {
    let mut cpu = setup_cpu(&[0x1E, 0x89]);
    cpu.set_a(0x12);
    cpu.set_b(0x34);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x34);
    assert_eq!(cpu.b(), 0x12);
    assert_eq!(cpu.clock(), 8);
}

#[test]
fn test_exg_d_u() {
    let mut cpu = setup_cpu(&[0x1E, 0x03]);
    cpu.set_d(0x1111);
    cpu.set_u(0x2222);
    cpu.step().unwrap();
    assert_eq!(cpu.d(), 0x2222);
    assert_eq!(cpu.u(), 0x1111);
}

#[test]
fn test_mixed_widths_fault() {
    let mut cpu = setup_cpu(&[0x1F, 0x18]);
    let result = cpu.step();
    assert_eq!(result, Err(Fault::RegisterSelection { postbyte: 0x18 }));
    assert_eq!(cpu.fault().map(|f| f.code()), Some(4));
    assert_eq!(cpu.pc(), 0x4002, "post-byte consumed");
    assert_eq!(cpu.clock(), 6, "base cycles charged");
}

#[test]
fn test_undefined_register_code_faults() {
    let mut cpu = setup_cpu(&[0x1E, 0x6C]);
    assert_eq!(cpu.step(), Err(Fault::RegisterSelection { postbyte: 0x6C }));
}
