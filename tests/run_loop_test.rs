//! Tests for `Cpu::run`, the periodic callback and snapshots

use lib6809::{Access, Bus, Cpu, Fault, MemoryBlock, PeriodicCallback, Snapshot};
use std::cell::Cell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup_cpu(program: &[u8]) -> (Cpu, MemoryBlock) {
    init_tracing();
    let ram = MemoryBlock::new(0x10000);
    ram.load(0xFFFE, &[0x40, 0x00]).unwrap();
    ram.load(0x4000, program).unwrap();
    let mut bus = Bus::new();
    bus.map_block(0x00..=0xFF, &ram, 0, Access::ReadWrite).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.reset().unwrap();
    (cpu, ram)
}

#[test]
fn test_jmp_into_unmapped_page() {
    init_tracing();
    let rom = MemoryBlock::new(0x100);
    rom.load(0x00, &[0x7E, 0x50, 0x00]).unwrap(); // JMP $5000
    let vectors = MemoryBlock::new(0x100);
    vectors.load(0xFE, &[0x40, 0x00]).unwrap();

    let mut bus = Bus::new();
    bus.map_block(0x40..=0x40, &rom, 0, Access::Read).unwrap();
    bus.map_block(0xFF..=0xFF, &vectors, 0, Access::Read).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.reset().unwrap();

    let result = cpu.run(10);
    assert_eq!(result, Err(Fault::UndefinedRead { address: 0x5000 }));
    assert_eq!(cpu.pc(), 0x5000);
    assert_eq!(cpu.clock(), 4, "exactly the cost of JMP extended");
}

#[test]
fn test_run_stops_at_or_past_target() {
    // BRA * (3 cycles)
    let (mut cpu, _ram) = setup_cpu(&[0x20, 0xFE]);
    assert_eq!(cpu.run(10).unwrap(), 12);
    assert_eq!(cpu.clock(), 12);
    assert_eq!(cpu.run(3).unwrap(), 3);
    assert_eq!(cpu.clock(), 15);
}

#[test]
fn test_run_zero_executes_one_step() {
    let (mut cpu, _ram) = setup_cpu(&[0x12, 0x12]);
    assert_eq!(cpu.run(0).unwrap(), 2);
    assert_eq!(cpu.pc(), 0x4001);
}

#[test]
fn test_run_returns_decode_fault() {
    // NOP, NOP, undefined 0x01
    let (mut cpu, _ram) = setup_cpu(&[0x12, 0x12, 0x01]);
    assert_eq!(
        cpu.run(100),
        Err(Fault::Instruction {
            page: lib6809::OpcodePage::Page1,
            opcode: 0x01
        })
    );
    assert_eq!(cpu.clock(), 5);
    assert_eq!(cpu.pc(), 0x4003);
}

#[test]
fn test_counting_loop() {
    let (mut cpu, ram) = setup_cpu(&[
        0x8E, 0x00, 0x0A, // LDX #10
        0x30, 0x1F, //       loop: LEAX -1,X
        0x26, 0xFC, //       BNE loop
        0x97, 0x80, //       STA <$80
        0x20, 0xFE, //       BRA *
    ]);
    cpu.set_a(0x5A);
    cpu.run(3 + 10 * (5 + 3) + 4).unwrap();
    assert_eq!(cpu.x(), 0);
    assert_eq!(ram.get(0x0080), Some(0x5A));
}

#[test]
fn test_periodic_callback_cadence() {
    let (mut cpu, _ram) = setup_cpu(&[0x20, 0xFE]);
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    cpu.set_periodic_callback(PeriodicCallback::new(10.0, move |_bus: &mut Bus| {
        counter.set(counter.get() + 1);
    }));

    // Independent of how the run is chopped up
    for _ in 0..10 {
        cpu.run(30).unwrap();
    }
    assert_eq!(cpu.clock(), 300);
    assert_eq!(calls.get(), 30);

    cpu.clear_periodic_callback();
    cpu.run(30).unwrap();
    assert_eq!(calls.get(), 30);
}

#[test]
fn test_periodic_callback_raises_irq() {
    // Main loop: BRA *. The IRQ handler at 0x5000 counts in $0100 and
    // acknowledges the device by writing 0x9000. B is stacked, so it can't
    // carry the count.
    let (mut cpu, ram) = setup_cpu(&[0x1C, 0xEF, 0x20, 0xFE]);
    ram.load(0xFFF8, &[0x50, 0x00]).unwrap();
    ram.load(0x5000, &[0x7C, 0x01, 0x00, 0x7F, 0x90, 0x00, 0x3B]).unwrap(); // INC $0100, CLR $9000, RTI
    cpu.set_s(0x8000);
    cpu.bus_mut().unmap(0x90..=0x90, Access::Write).unwrap();
    cpu.bus_mut()
        .set_write_handler(0x90, |bus: &mut Bus, _address: u16, _value: u8| {
            bus.set_irq(false);
        });
    cpu.set_periodic_callback(PeriodicCallback::new(100.0, |bus: &mut Bus| {
        bus.set_irq(true);
    }));

    cpu.run(1050).unwrap();
    assert_eq!(ram.get(0x0100), Some(10), "one handler run per interval");
    assert_eq!(cpu.b(), 0);
}

#[test]
fn test_periodic_callback_sees_decode_fault_cycles() {
    // NOP (2), then an undefined page-2 opcode (2)
    let (mut cpu, _ram) = setup_cpu(&[0x12, 0x10, 0x00]);
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    cpu.set_periodic_callback(PeriodicCallback::new(1.0, move |_bus: &mut Bus| {
        counter.set(counter.get() + 1);
    }));

    let result = cpu.run(10);
    assert!(matches!(result, Err(Fault::Instruction { opcode: 0x00, .. })));
    assert_eq!(cpu.clock(), 4);
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_clock_wraps_at_u64_max() {
    let (mut cpu, _ram) = setup_cpu(&[0x12, 0x12]); // NOP; NOP
    cpu.set_clock(u64::MAX - 1);
    cpu.step().unwrap();
    assert_eq!(cpu.clock(), 0);

    cpu.set_clock(u64::MAX);
    assert_eq!(cpu.run(1).unwrap(), 2);
    assert_eq!(cpu.clock(), 1);
}

#[test]
fn test_snapshot_round_trip() {
    let (mut cpu, _ram) = setup_cpu(&[0x13]);
    cpu.set_a(0x12);
    cpu.set_y(0xABCD);
    cpu.set_irq(true);
    cpu.set_cc(0x50);
    cpu.step().unwrap();

    let snapshot = cpu.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let (mut other, _ram) = setup_cpu(&[]);
    other.restore(&decoded);
    assert_eq!(other.a(), 0x12);
    assert_eq!(other.y(), 0xABCD);
    assert_eq!(other.pc(), cpu.pc());
    assert_eq!(other.clock(), cpu.clock());
    assert!(other.irq(), "lines travel with the snapshot");
    assert_eq!(other.in_sync(), cpu.in_sync());
}

#[test]
fn test_snapshot_is_send() {
    fn assert_send<T: Send + 'static>(_: T) {}
    let (cpu, _ram) = setup_cpu(&[]);
    let snapshot = cpu.snapshot();
    assert_send(snapshot);
    let handle = std::thread::spawn(move || snapshot.registers.pc);
    assert_eq!(handle.join().unwrap(), 0x4000);
}
