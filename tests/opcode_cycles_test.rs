//! Cycle counts for every defined opcode
//!
//! The expected counts below are the MC6809E datasheet figures, written out
//! by hand rather than read back from the opcode tables. Each instruction is
//! executed once from a fresh CPU with CC cleared, so the conditional long
//! branches on even opcodes are taken (one extra cycle) and the rest are not.
//! Indexed operands use the `,X` post-byte, which adds no cycles.

use lib6809::{
    Access, AddressingMode, Bus, Cpu, Fault, MemoryBlock, OpcodePage, PAGE1_TABLE, PAGE2_TABLE,
    PAGE3_TABLE,
};

const PAGE1_CYCLES: &[(u8, u64)] = &[
    (0x00, 6), (0x03, 6), (0x04, 6), (0x06, 6), (0x07, 6), (0x08, 6), (0x09, 6), (0x0A, 6),
    (0x0C, 6), (0x0D, 6), (0x0E, 3), (0x0F, 6), (0x12, 2), (0x13, 4), (0x16, 5), (0x17, 9),
    (0x19, 2), (0x1A, 3), (0x1C, 3), (0x1D, 2), (0x1E, 8), (0x1F, 6), (0x20, 3), (0x21, 3),
    (0x22, 3), (0x23, 3), (0x24, 3), (0x25, 3), (0x26, 3), (0x27, 3), (0x28, 3), (0x29, 3),
    (0x2A, 3), (0x2B, 3), (0x2C, 3), (0x2D, 3), (0x2E, 3), (0x2F, 3), (0x30, 4), (0x31, 4),
    (0x32, 4), (0x33, 4), (0x34, 5), (0x35, 5), (0x36, 5), (0x37, 5), (0x39, 5), (0x3A, 3),
    (0x3B, 6), (0x3C, 20), (0x3D, 11), (0x3F, 19), (0x40, 2), (0x43, 2), (0x44, 2), (0x46, 2),
    (0x47, 2), (0x48, 2), (0x49, 2), (0x4A, 2), (0x4C, 2), (0x4D, 2), (0x4F, 2), (0x50, 2),
    (0x53, 2), (0x54, 2), (0x56, 2), (0x57, 2), (0x58, 2), (0x59, 2), (0x5A, 2), (0x5C, 2),
    (0x5D, 2), (0x5F, 2), (0x60, 6), (0x63, 6), (0x64, 6), (0x66, 6), (0x67, 6), (0x68, 6),
    (0x69, 6), (0x6A, 6), (0x6C, 6), (0x6D, 6), (0x6E, 3), (0x6F, 6), (0x70, 7), (0x73, 7),
    (0x74, 7), (0x76, 7), (0x77, 7), (0x78, 7), (0x79, 7), (0x7A, 7), (0x7C, 7), (0x7D, 7),
    (0x7E, 4), (0x7F, 7), (0x80, 2), (0x81, 2), (0x82, 2), (0x83, 4), (0x84, 2), (0x85, 2),
    (0x86, 2), (0x88, 2), (0x89, 2), (0x8A, 2), (0x8B, 2), (0x8C, 4), (0x8D, 7), (0x8E, 3),
    (0x90, 4), (0x91, 4), (0x92, 4), (0x93, 6), (0x94, 4), (0x95, 4), (0x96, 4), (0x97, 4),
    (0x98, 4), (0x99, 4), (0x9A, 4), (0x9B, 4), (0x9C, 6), (0x9D, 7), (0x9E, 5), (0x9F, 5),
    (0xA0, 4), (0xA1, 4), (0xA2, 4), (0xA3, 6), (0xA4, 4), (0xA5, 4), (0xA6, 4), (0xA7, 4),
    (0xA8, 4), (0xA9, 4), (0xAA, 4), (0xAB, 4), (0xAC, 6), (0xAD, 7), (0xAE, 5), (0xAF, 5),
    (0xB0, 5), (0xB1, 5), (0xB2, 5), (0xB3, 7), (0xB4, 5), (0xB5, 5), (0xB6, 5), (0xB7, 5),
    (0xB8, 5), (0xB9, 5), (0xBA, 5), (0xBB, 5), (0xBC, 7), (0xBD, 8), (0xBE, 6), (0xBF, 6),
    (0xC0, 2), (0xC1, 2), (0xC2, 2), (0xC3, 4), (0xC4, 2), (0xC5, 2), (0xC6, 2), (0xC8, 2),
    (0xC9, 2), (0xCA, 2), (0xCB, 2), (0xCC, 3), (0xCE, 3), (0xD0, 4), (0xD1, 4), (0xD2, 4),
    (0xD3, 6), (0xD4, 4), (0xD5, 4), (0xD6, 4), (0xD7, 4), (0xD8, 4), (0xD9, 4), (0xDA, 4),
    (0xDB, 4), (0xDC, 5), (0xDD, 5), (0xDE, 5), (0xDF, 5), (0xE0, 4), (0xE1, 4), (0xE2, 4),
    (0xE3, 6), (0xE4, 4), (0xE5, 4), (0xE6, 4), (0xE7, 4), (0xE8, 4), (0xE9, 4), (0xEA, 4),
    (0xEB, 4), (0xEC, 5), (0xED, 5), (0xEE, 5), (0xEF, 5), (0xF0, 5), (0xF1, 5), (0xF2, 5),
    (0xF3, 7), (0xF4, 5), (0xF5, 5), (0xF6, 5), (0xF7, 5), (0xF8, 5), (0xF9, 5), (0xFA, 5),
    (0xFB, 5), (0xFC, 6), (0xFD, 6), (0xFE, 6), (0xFF, 6),
];

const PAGE2_CYCLES: &[(u8, u64)] = &[
    (0x21, 5), (0x22, 6), (0x23, 5), (0x24, 6), (0x25, 5), (0x26, 6), (0x27, 5), (0x28, 6),
    (0x29, 5), (0x2A, 6), (0x2B, 5), (0x2C, 6), (0x2D, 5), (0x2E, 6), (0x2F, 5), (0x3F, 20),
    (0x83, 5), (0x8C, 5), (0x8E, 4), (0x93, 7), (0x9C, 7), (0x9E, 6), (0x9F, 6), (0xA3, 7),
    (0xAC, 7), (0xAE, 6), (0xAF, 6), (0xB3, 8), (0xBC, 8), (0xBE, 7), (0xBF, 7), (0xCE, 4),
    (0xDE, 6), (0xDF, 6), (0xEE, 6), (0xEF, 6), (0xFE, 7), (0xFF, 7),
];

const PAGE3_CYCLES: &[(u8, u64)] = &[
    (0x3F, 20), (0x83, 5), (0x8C, 5), (0x93, 7), (0x9C, 7), (0xA3, 7), (0xAC, 7), (0xB3, 8),
    (0xBC, 8),
];

fn setup_cpu() -> Cpu {
    let ram = MemoryBlock::new(0x10000);
    ram.load(0xFFFE, &[0x40, 0x00]).unwrap();
    let mut bus = Bus::new();
    bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.reset().unwrap();
    cpu.set_cc(0x00);
    cpu.set_x(0x3000);
    cpu.set_s(0x8000);
    cpu.set_u(0x7000);
    cpu
}

/// Assembles `prefix opcode operands` with zeroed operands shaped by the
/// table entry's addressing mode.
fn encode(page: OpcodePage, opcode: u8) -> Vec<u8> {
    let metadata = &page.table()[opcode as usize];
    let mut bytes = match page {
        OpcodePage::Page1 => vec![opcode],
        OpcodePage::Page2 => vec![0x10, opcode],
        OpcodePage::Page3 => vec![0x11, opcode],
    };
    match metadata.addressing_mode {
        AddressingMode::Inherent => {}
        AddressingMode::Immediate => {
            bytes.resize(metadata.size_bytes as usize, 0x00);
        }
        AddressingMode::Direct => bytes.push(0x10),
        AddressingMode::Extended => bytes.extend_from_slice(&[0x20, 0x00]),
        AddressingMode::Indexed => bytes.push(0x84),
        AddressingMode::Relative => bytes.push(0x00),
        AddressingMode::LongRelative => bytes.extend_from_slice(&[0x00, 0x00]),
    }
    bytes
}

fn measure(page: OpcodePage, opcode: u8) -> u64 {
    let mut cpu = setup_cpu();
    let bytes = encode(page, opcode);
    for (i, byte) in bytes.iter().enumerate() {
        cpu.bus_mut().write(0x4000 + i as u16, *byte).unwrap();
    }
    let start = cpu.clock();
    if let Err(fault) = cpu.step() {
        panic!("{page} opcode 0x{opcode:02X} faulted: {fault}");
    }
    cpu.clock() - start
}

fn check_page(page: OpcodePage, expected: &[(u8, u64)]) {
    for &(opcode, cycles) in expected {
        assert_eq!(
            measure(page, opcode),
            cycles,
            "{page} opcode 0x{opcode:02X} ({})",
            page.table()[opcode as usize].mnemonic
        );
    }
}

fn check_coverage(page: OpcodePage, expected: &[(u8, u64)], skip: &[u8]) {
    let listed: Vec<u8> = expected.iter().map(|&(opcode, _)| opcode).collect();
    for (opcode, metadata) in page.table().iter().enumerate() {
        let opcode = opcode as u8;
        if skip.contains(&opcode) {
            continue;
        }
        assert_eq!(
            metadata.defined,
            listed.contains(&opcode),
            "{page} opcode 0x{opcode:02X} coverage mismatch"
        );
    }
}

#[test]
fn test_page1_cycles() {
    check_page(OpcodePage::Page1, PAGE1_CYCLES);
}

#[test]
fn test_page2_cycles() {
    check_page(OpcodePage::Page2, PAGE2_CYCLES);
}

#[test]
fn test_page3_cycles() {
    check_page(OpcodePage::Page3, PAGE3_CYCLES);
}

#[test]
fn test_golden_lists_cover_every_defined_opcode() {
    check_coverage(OpcodePage::Page1, PAGE1_CYCLES, &[0x10, 0x11]);
    check_coverage(OpcodePage::Page2, PAGE2_CYCLES, &[]);
    check_coverage(OpcodePage::Page3, PAGE3_CYCLES, &[]);

    assert_eq!(PAGE1_TABLE.iter().filter(|m| m.defined).count(), 223);
    assert_eq!(PAGE2_TABLE.iter().filter(|m| m.defined).count(), 38);
    assert_eq!(PAGE3_TABLE.iter().filter(|m| m.defined).count(), 9);
}

#[test]
fn test_undefined_page1_opcodes_fault() {
    for opcode in 0..=0xFFu8 {
        if PAGE1_TABLE[opcode as usize].defined {
            continue;
        }
        let mut cpu = setup_cpu();
        cpu.bus_mut().write(0x4000, opcode).unwrap();
        let result = cpu.step();
        assert_eq!(
            result,
            Err(Fault::Instruction {
                page: OpcodePage::Page1,
                opcode
            }),
            "opcode 0x{opcode:02X}"
        );
        assert_eq!(cpu.clock(), 1, "opcode 0x{opcode:02X} should cost 1 cycle");
        assert_eq!(cpu.pc(), 0x4001);
        assert_eq!(cpu.fault().map(|f| f.code()), Some(2));
    }
}

#[test]
fn test_undefined_prefixed_opcodes_fault() {
    for (prefix, page) in [(0x10u8, OpcodePage::Page2), (0x11u8, OpcodePage::Page3)] {
        for opcode in 0..=0xFFu8 {
            if page.table()[opcode as usize].defined {
                continue;
            }
            let mut cpu = setup_cpu();
            cpu.bus_mut().write(0x4000, prefix).unwrap();
            cpu.bus_mut().write(0x4001, opcode).unwrap();
            assert_eq!(
                cpu.step(),
                Err(Fault::Instruction { page, opcode }),
                "{page} opcode 0x{opcode:02X}"
            );
            assert_eq!(cpu.clock(), 2, "{page} opcode 0x{opcode:02X} should cost 2 cycles");
            assert_eq!(cpu.pc(), 0x4002);
        }
    }
}

#[test]
fn test_prefixes_do_not_chain() {
    let mut cpu = setup_cpu();
    // 0x10 0x10 is undefined on page 2
    cpu.bus_mut().write(0x4000, 0x10).unwrap();
    cpu.bus_mut().write(0x4001, 0x10).unwrap();
    assert_eq!(
        cpu.step(),
        Err(Fault::Instruction {
            page: OpcodePage::Page2,
            opcode: 0x10
        })
    );
}

#[test]
fn test_instruction_sizes_advance_pc() {
    for &(opcode, _) in PAGE1_CYCLES {
        let metadata = &PAGE1_TABLE[opcode as usize];
        let non_flow = matches!(
            metadata.addressing_mode,
            AddressingMode::Immediate | AddressingMode::Direct | AddressingMode::Extended
        ) && !matches!(metadata.mnemonic, "JMP" | "JSR" | "CWAI" | "PSHS" | "PULS" | "PSHU" | "PULU");
        if !non_flow {
            continue;
        }
        let mut cpu = setup_cpu();
        for (i, byte) in encode(OpcodePage::Page1, opcode).iter().enumerate() {
            cpu.bus_mut().write(0x4000 + i as u16, *byte).unwrap();
        }
        cpu.step().unwrap();
        assert_eq!(
            cpu.pc(),
            0x4000 + metadata.size_bytes as u16,
            "opcode 0x{opcode:02X} ({})",
            metadata.mnemonic
        );
    }
}
