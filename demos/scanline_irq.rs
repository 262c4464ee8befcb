//! Example: Scanline-Driven IRQ
//!
//! Arcade hardware derives its interrupts from video timing. Here a 1.5MHz
//! 6809 drives a display with 256 scanlines at 60Hz, so one scanline lasts
//! 97.65625 CPU cycles. A periodic callback counts scanlines and raises IRQ
//! at the start of vertical blank (scanline 240). The program's IRQ handler
//! counts frames and acknowledges the interrupt through a write-only latch.
//!
//! ```text
//! 0x0000-0x7FFF  RAM
//! 0x8000         IRQ acknowledge latch (write-only)
//! 0x8100         Scanline counter (read-only)
//! 0xC000-0xFFFF  ROM
//! ```
//!
//! Run with `RUST_LOG=lib6809=debug` to see each interrupt being serviced.

use lib6809::{Access, Bus, Cpu, MemoryBlock, PeriodicCallback};
use std::cell::Cell;
use std::rc::Rc;

const CPU_HZ: f64 = 1_500_000.0;
const FRAME_HZ: f64 = 60.0;
const SCANLINES: u32 = 256;
const VBLANK_LINE: u32 = 240;

/// ROM program at 0xC000.
///
/// ```text
/// C000  LDS   #$8000
/// C004  ANDCC #$EF      ; enable IRQ
/// C006  BRA   *         ; main loop
///
/// C010  INC   <$00      ; IRQ: frame counter
/// C012  LDA   $8100     ; sample the scanline
/// C015  STA   <$01
/// C017  STA   $8000     ; acknowledge
/// C01A  RTI
/// ```
fn rom_image() -> MemoryBlock {
    let rom = MemoryBlock::new(0x4000);
    rom.load(0x0000, &[0x10, 0xCE, 0x80, 0x00, 0x1C, 0xEF, 0x20, 0xFE])
        .expect("main program");
    rom.load(
        0x0010,
        &[0x0C, 0x00, 0xB6, 0x81, 0x00, 0x97, 0x01, 0xB7, 0x80, 0x00, 0x3B],
    )
    .expect("IRQ handler");
    rom.load(0x3FF8, &[0xC0, 0x10]).expect("IRQ vector");
    rom.load(0x3FFE, &[0xC0, 0x00]).expect("reset vector");
    rom
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== 6809 Scanline IRQ Demo ===\n");

    let ram = MemoryBlock::new(0x8000);
    let rom = rom_image();
    let scanline = Rc::new(Cell::new(0u32));

    let mut bus = Bus::new();
    bus.map_block(0x00..=0x7F, &ram, 0, Access::ReadWrite)
        .expect("RAM mapping");
    bus.map_block(0xC0..=0xFF, &rom, 0, Access::Read)
        .expect("ROM mapping");
    bus.set_write_handler(0x80, |bus: &mut Bus, _address: u16, _value: u8| {
        bus.set_irq(false);
    });
    let beam = Rc::clone(&scanline);
    bus.set_read_handler(0x81, move |_bus: &mut Bus, _address: u16| beam.get() as u8);

    let mut cpu = Cpu::new(bus);
    cpu.reset().expect("reset vector is mapped");

    let cycles_per_line = CPU_HZ / (FRAME_HZ * SCANLINES as f64);
    let beam = Rc::clone(&scanline);
    cpu.set_periodic_callback(PeriodicCallback::new(cycles_per_line, move |bus: &mut Bus| {
        let line = (beam.get() + 1) % SCANLINES;
        beam.set(line);
        if line == VBLANK_LINE {
            bus.set_irq(true);
        }
    }));

    println!("Cycles per scanline: {cycles_per_line}");

    // One frame's worth of cycles per burst, the way a host scheduler would
    let frame_cycles = (CPU_HZ / FRAME_HZ) as u64;
    for frame in 1..=5 {
        if let Err(fault) = cpu.run(frame_cycles) {
            println!("Stopped on fault: {fault}");
            return;
        }
        println!(
            "burst {frame}: clock={} frames counted={} last IRQ scanline={}",
            cpu.clock(),
            ram.get(0x0000).unwrap_or(0),
            ram.get(0x0001).unwrap_or(0)
        );
    }
}
