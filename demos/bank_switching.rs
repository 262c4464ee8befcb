//! Example: Bank-Switched Program ROM
//!
//! Many 6809 boards carry more program ROM than fits in the address space
//! and expose a window whose contents are chosen by a latch. This example
//! builds such a board:
//!
//! ```text
//! 0x0000-0x0FFF  RAM (4KB)
//! 0x1000         Bank latch (write-only, low 2 bits select the bank)
//! 0x6000-0x7FFF  Banked ROM window (four 8KB banks)
//! 0x8000-0xFFFF  Fixed ROM
//! ```
//!
//! The fixed ROM selects each bank in turn and calls the routine at the start
//! of the window. Every bank's routine stores its own signature byte into
//! RAM, so after the loop RAM holds one byte from each bank.

use lib6809::{Access, BankSwitch, BankedRegion, Bus, Cpu, MemoryBlock};

const BANK_SIZE: usize = 0x2000;

/// Fixed ROM program at 0x8000.
///
/// ```text
/// 8000  CLRB            ; bank number
/// 8001  LDX   #$0100    ; signature table
/// 8004  STB   $1000     ; select bank B
/// 8007  JSR   $6000     ; call the bank's routine
/// 800A  STA   ,X+       ; record its signature
/// 800C  INCB
/// 800D  CMPB  #4
/// 800F  BNE   $8004
/// 8011  BRA   *
/// ```
const FIXED_PROGRAM: &[u8] = &[
    0x5F, 0x8E, 0x01, 0x00, 0xF7, 0x10, 0x00, 0xBD, 0x60, 0x00, 0xA7, 0x80, 0x5C, 0xC1, 0x04,
    0x26, 0xF3, 0x20, 0xFE,
];

fn main() {
    println!("=== 6809 Bank Switching Demo ===\n");

    // Four banks; each routine is `LDA #sig / RTS`
    let banks = MemoryBlock::new(4 * BANK_SIZE);
    for bank in 0..4 {
        let signature = 0xB0 + bank as u8;
        banks
            .load(bank * BANK_SIZE, &[0x86, signature, 0x39])
            .expect("routine fits in the bank");
    }

    let fixed = MemoryBlock::new(0x8000);
    fixed.load(0, FIXED_PROGRAM).expect("program fits");
    fixed.load(0x7FFE, &[0x80, 0x00]).expect("reset vector");

    let ram = MemoryBlock::new(0x1000);

    let mut bus = Bus::new();
    bus.map_block(0x00..=0x0F, &ram, 0, Access::ReadWrite)
        .expect("RAM mapping");
    bus.map_block(0x80..=0xFF, &fixed, 0, Access::Read)
        .expect("fixed ROM mapping");

    let region = BankedRegion::new(banks, 0x60..=0x7F, Access::Read).expect("bank geometry");
    let latch = BankSwitch::new(region, 0x03);
    latch.select(&mut bus, 0).expect("initial bank");
    bus.set_write_handler(0x10, latch.clone());

    let mut cpu = Cpu::new(bus);
    cpu.reset().expect("reset vector is mapped");
    // Stack at the top of RAM
    cpu.set_s(0x1000);

    println!("Banks available: {}", latch.region().bank_count());
    println!("Running...\n");

    match cpu.run(500) {
        Ok(cycles) => println!("Ran {cycles} cycles"),
        Err(fault) => {
            println!("Stopped on fault: {fault}");
            return;
        }
    }

    println!("Last selected bank: {:?}", latch.selected());
    println!("Signatures recorded in RAM:");
    for bank in 0..4 {
        let value = ram.get(0x0100 + bank).unwrap_or(0);
        println!("  bank {bank}: 0x{value:02X}");
    }
    println!("\nFinal state: {}", cpu.registers());
}
