//! Fuzz target for page-table mapping operations.
//!
//! Applies an arbitrary sequence of map/unmap operations and checks that
//! every access routes the way the page table says it should.

#![no_main]

use arbitrary::Arbitrary;
use lib6809::{Access, Bus, MemoryBlock, Route};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Operation {
    MapBlock { first: u8, last: u8, block_page: u8 },
    MapNull { first: u8, last: u8 },
    Unmap { first: u8, last: u8 },
    Write { address: u16, value: u8 },
}

fuzz_target!(|ops: Vec<Operation>| {
    let block = MemoryBlock::new(0x4000);
    let mut bus = Bus::new();

    for op in ops.iter().take(64) {
        match *op {
            Operation::MapBlock {
                first,
                last,
                block_page,
            } => {
                let _ = bus.map_block(first..=last, &block, block_page as usize, Access::ReadWrite);
            }
            Operation::MapNull { first, last } => {
                let _ = bus.map_null(first..=last);
            }
            Operation::Unmap { first, last } => {
                let _ = bus.unmap(first..=last, Access::ReadWrite);
            }
            Operation::Write { address, value } => {
                let page = (address >> 8) as u8;
                let result = bus.write(address, value);
                assert_eq!(result.is_err(), bus.write_route(page) == Route::Unmapped);
                if bus.write_route(page) == Route::Buffer {
                    assert_eq!(bus.read(address).ok(), Some(value));
                }
            }
        }
    }
});
