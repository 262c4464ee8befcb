//! # Bank Switching
//!
//! Boards with more memory than address space expose a window of pages whose
//! contents are selected by writing a bank number to a control register. On
//! the 6809 bus this is a write handler that repoints the window's page
//! buffers; the next access sees the new bank.
//!
//! - [`BankedRegion`] describes the window: a memory block split into equal
//!   banks and the page range they appear at
//! - [`BankSwitch`] is the control register, a [`WriteHandler`] that selects a
//!   bank from the written value
//!
//! # Examples
//!
//! ```
//! use lib6809::{Access, BankSwitch, BankedRegion, Bus, MemoryBlock};
//!
//! // Three 2KB banks appearing at 0x0800-0x0FFF
//! let banks = MemoryBlock::new(3 * 0x800);
//! banks.set(0x0800, 0xB1); // first byte of bank 1
//! let region = BankedRegion::new(banks, 0x08..=0x0F, Access::ReadWrite).unwrap();
//!
//! let mut bus = Bus::new();
//! let switch = BankSwitch::new(region, 0x03);
//! switch.select(&mut bus, 0).unwrap();
//! bus.set_write_handler(0x14, switch.clone());
//!
//! assert_eq!(bus.read(0x0800).unwrap(), 0x00);
//! bus.write(0x1400, 0x01).unwrap();
//! assert_eq!(bus.read(0x0800).unwrap(), 0xB1);
//! assert_eq!(switch.selected(), Some(1));
//! ```

use crate::memory::{Access, Bus, MemoryBlock, WriteHandler, PAGE_SIZE};
use crate::MapError;
use std::cell::Cell;
use std::ops::RangeInclusive;
use std::rc::Rc;
use tracing::debug;

/// A page window backed by one of several equally sized banks.
#[derive(Debug, Clone)]
pub struct BankedRegion {
    block: MemoryBlock,
    pages: RangeInclusive<u8>,
    access: Access,
}

impl BankedRegion {
    /// Splits `block` into banks the size of `pages`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or the block is not a whole,
    /// non-zero number of banks.
    pub fn new(block: MemoryBlock, pages: RangeInclusive<u8>, access: Access) -> Result<Self, MapError> {
        if pages.is_empty() {
            return Err(MapError::EmptyRange {
                first: *pages.start(),
                last: *pages.end(),
            });
        }
        let pages_per_bank = (*pages.end() - *pages.start()) as usize + 1;
        let bank_len = pages_per_bank * PAGE_SIZE;
        if block.is_empty() || block.len() % bank_len != 0 {
            return Err(MapError::BankGeometry {
                len: block.len(),
                pages: pages_per_bank,
            });
        }
        Ok(Self {
            block,
            pages,
            access,
        })
    }

    pub fn pages_per_bank(&self) -> usize {
        (*self.pages.end() - *self.pages.start()) as usize + 1
    }

    pub fn bank_count(&self) -> usize {
        self.block.page_count() / self.pages_per_bank()
    }

    pub fn block(&self) -> &MemoryBlock {
        &self.block
    }

    pub fn pages(&self) -> RangeInclusive<u8> {
        self.pages.clone()
    }

    /// Maps `bank` into the window.
    pub fn map(&self, bus: &mut Bus, bank: usize) -> Result<(), MapError> {
        if bank >= self.bank_count() {
            return Err(MapError::NoSuchBank {
                bank,
                count: self.bank_count(),
            });
        }
        bus.map_block(
            self.pages.clone(),
            &self.block,
            bank * self.pages_per_bank(),
            self.access,
        )
    }

    /// Points the window at the null page: reads zero, writes are dropped.
    pub fn map_null(&self, bus: &mut Bus) -> Result<(), MapError> {
        bus.map_null(self.pages.clone())
    }
}

/// A bank-select control register.
///
/// Written values are masked, and a value naming a bank past the end of the
/// region maps the null page. Writing the bank that is already selected does
/// nothing. Clones share the selection state.
#[derive(Debug, Clone)]
pub struct BankSwitch {
    region: Rc<BankedRegion>,
    mask: u8,
    selected: Rc<Cell<Option<usize>>>,
}

impl BankSwitch {
    pub fn new(region: BankedRegion, mask: u8) -> Self {
        Self {
            region: Rc::new(region),
            mask,
            selected: Rc::new(Cell::new(None)),
        }
    }

    /// Bank currently mapped, or `None` before the first selection or while
    /// the null page is mapped.
    pub fn selected(&self) -> Option<usize> {
        self.selected.get()
    }

    pub fn region(&self) -> &BankedRegion {
        &self.region
    }

    /// Maps `bank`, or the null page if the region has no such bank.
    pub fn select(&self, bus: &mut Bus, bank: usize) -> Result<(), MapError> {
        if bank < self.region.bank_count() {
            self.region.map(bus, bank)?;
            self.selected.set(Some(bank));
        } else {
            self.region.map_null(bus)?;
            self.selected.set(None);
        }
        debug!(bank, pages = ?self.region.pages, "bank switched");
        Ok(())
    }
}

impl WriteHandler for BankSwitch {
    fn write(&self, bus: &mut Bus, _address: u16, value: u8) {
        let bank = (value & self.mask) as usize;
        if self.selected.get() == Some(bank) {
            return;
        }
        // Geometry is checked in BankedRegion::new
        if let Err(err) = self.select(bus, bank) {
            debug!(%err, "bank switch rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_banks() -> BankedRegion {
        let block = MemoryBlock::new(3 * 0x800);
        for bank in 0..3 {
            block.set(bank * 0x800 + 5, 0xA0 + bank as u8);
        }
        BankedRegion::new(block, 0x08..=0x0F, Access::ReadWrite).unwrap()
    }

    #[test]
    fn test_geometry() {
        let region = three_banks();
        assert_eq!(region.pages_per_bank(), 8);
        assert_eq!(region.bank_count(), 3);

        let odd = MemoryBlock::new(0x900);
        assert_eq!(
            BankedRegion::new(odd, 0x08..=0x0F, Access::Read).unwrap_err(),
            MapError::BankGeometry {
                len: 0x900,
                pages: 8
            }
        );
    }

    #[test]
    fn test_map_rejects_missing_bank() {
        let region = three_banks();
        let mut bus = Bus::new();
        assert_eq!(
            region.map(&mut bus, 3),
            Err(MapError::NoSuchBank { bank: 3, count: 3 })
        );
    }

    #[test]
    fn test_control_write_switches_banks() {
        let switch = BankSwitch::new(three_banks(), 0x03);
        let mut bus = Bus::new();
        switch.select(&mut bus, 0).unwrap();
        bus.set_write_handler(0x14, switch.clone());

        assert_eq!(bus.read(0x0805).unwrap(), 0xA0);
        bus.write(0x1400, 0x02).unwrap();
        assert_eq!(bus.read(0x0805).unwrap(), 0xA2);

        // Upper bits are masked off
        bus.write(0x1400, 0xFD).unwrap();
        assert_eq!(bus.read(0x0805).unwrap(), 0xA1);
    }

    #[test]
    fn test_out_of_range_bank_maps_null_page() {
        let switch = BankSwitch::new(three_banks(), 0x03);
        let mut bus = Bus::new();
        switch.select(&mut bus, 1).unwrap();
        bus.set_write_handler(0x14, switch.clone());

        bus.write(0x1400, 0x03).unwrap();
        assert_eq!(switch.selected(), None);
        bus.write(0x0805, 0x77).unwrap();
        assert_eq!(bus.read(0x0805).unwrap(), 0x00);

        // Writes to the null page did not land in any bank
        bus.write(0x1400, 0x01).unwrap();
        assert_eq!(bus.read(0x0805).unwrap(), 0xA1);
    }

    #[test]
    fn test_writes_land_in_selected_bank() {
        let switch = BankSwitch::new(three_banks(), 0x03);
        let mut bus = Bus::new();
        switch.select(&mut bus, 2).unwrap();
        bus.write(0x0F00, 0x42).unwrap();
        assert_eq!(switch.region().block().get(2 * 0x800 + 0x700), Some(0x42));
    }
}
