//! # Page-Mapped Memory Bus
//!
//! The 64KB address space is split into 256 pages of 256 bytes. For each page
//! and each direction (read/write) the bus holds two optional entries:
//!
//! - a **buffer** ([`PageRef`]): a 256-byte window into a [`MemoryBlock`]
//! - a **handler** ([`ReadHandler`]/[`WriteHandler`]): a callable that sees the
//!   full 16-bit address
//!
//! ## Routing Rules
//!
//! - If the page has a buffer for that direction, the access goes to the buffer
//!   at the low 8 bits of the address
//! - Otherwise, if it has a handler, the handler is called
//! - Otherwise the access faults with `UndefinedRead`/`UndefinedWrite`
//!
//! A buffer always wins over a handler for the same page and direction.
//!
//! ## Remapping
//!
//! Handlers receive `&mut Bus`, so a write handler on a control register can
//! repoint other pages. The change is visible to the very next bus access,
//! which is how bank switching works (see [`crate::banking`]).
//!
//! Memory blocks are shared (`Rc<[Cell<u8>]>`): the same block can be mapped at
//! several pages and inspected by the host at any time without borrowing the
//! bus.

use crate::interrupts::InterruptLines;
use crate::{Fault, MapError};
use std::cell::Cell;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Bytes per page.
pub const PAGE_SIZE: usize = 0x100;

/// Number of pages in the address space.
pub const PAGE_COUNT: usize = 0x100;

/// Read callback for a page.
///
/// Any `Fn(&mut Bus, u16) -> u8` closure is a `ReadHandler`. Handlers keep
/// their own state behind `Cell`/`RefCell` since they are called through a
/// shared reference.
///
/// # Examples
///
/// ```
/// use lib6809::{Bus, ReadHandler};
///
/// let mut bus = Bus::new();
/// bus.set_read_handler(0x40, |_bus: &mut Bus, address: u16| (address & 0xFF) as u8);
/// assert_eq!(bus.read(0x4012).unwrap(), 0x12);
/// ```
pub trait ReadHandler {
    fn read(&self, bus: &mut Bus, address: u16) -> u8;
}

/// Write callback for a page.
///
/// Any `Fn(&mut Bus, u16, u8)` closure is a `WriteHandler`.
pub trait WriteHandler {
    fn write(&self, bus: &mut Bus, address: u16, value: u8);
}

impl<F> ReadHandler for F
where
    F: Fn(&mut Bus, u16) -> u8,
{
    fn read(&self, bus: &mut Bus, address: u16) -> u8 {
        self(bus, address)
    }
}

impl<F> WriteHandler for F
where
    F: Fn(&mut Bus, u16, u8),
{
    fn write(&self, bus: &mut Bus, address: u16, value: u8) {
        self(bus, address, value)
    }
}

/// A shared, interior-mutable byte buffer.
///
/// Cloning a `MemoryBlock` clones the handle, not the bytes. This is how a ROM
/// image or a RAM bank is mapped into the bus and still inspected by the host.
///
/// # Examples
///
/// ```
/// use lib6809::MemoryBlock;
///
/// let ram = MemoryBlock::new(0x800);
/// let alias = ram.clone();
/// ram.set(0x10, 0xAB);
/// assert_eq!(alias.get(0x10), Some(0xAB));
/// ```
#[derive(Clone)]
pub struct MemoryBlock {
    cells: Rc<[Cell<u8>]>,
}

impl MemoryBlock {
    /// Creates a zero-filled block of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self {
            cells: (0..len).map(|_| Cell::new(0)).collect(),
        }
    }

    /// Creates a block holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            cells: bytes.iter().copied().map(Cell::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of whole 256-byte pages in the block.
    pub fn page_count(&self) -> usize {
        self.cells.len() / PAGE_SIZE
    }

    /// Reads a byte, or `None` past the end of the block.
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.cells.get(offset).map(Cell::get)
    }

    /// Writes a byte. Writes past the end of the block are ignored.
    pub fn set(&self, offset: usize, value: u8) {
        if let Some(cell) = self.cells.get(offset) {
            cell.set(value);
        }
    }

    /// Copies `bytes` into the block starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::LoadOutOfRange`] if the bytes do not fit; the block
    /// is left untouched in that case.
    pub fn load(&self, offset: usize, bytes: &[u8]) -> Result<(), MapError> {
        let end = offset
            .checked_add(bytes.len())
            .filter(|&end| end <= self.len())
            .ok_or(MapError::LoadOutOfRange {
                offset,
                count: bytes.len(),
                len: self.len(),
            })?;
        for (cell, &byte) in self.cells[offset..end].iter().zip(bytes) {
            cell.set(byte);
        }
        Ok(())
    }

    /// Returns a 256-byte view of page `index` of the block.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::PageOutOfRange`] if the page does not lie wholly
    /// inside the block.
    pub fn page(&self, index: usize) -> Result<PageRef, MapError> {
        if index >= self.page_count() {
            return Err(MapError::PageOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(PageRef {
            block: self.clone(),
            base: index * PAGE_SIZE,
        })
    }

    /// Copies the contents out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::get).collect()
    }

    /// Returns true if both handles refer to the same storage.
    pub fn same_block(&self, other: &MemoryBlock) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}

impl fmt::Debug for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBlock")
            .field("len", &self.len())
            .finish()
    }
}

/// A 256-byte window into a [`MemoryBlock`].
#[derive(Clone)]
pub struct PageRef {
    block: MemoryBlock,
    base: usize,
}

impl PageRef {
    /// Reads the byte at `offset` within the page.
    pub fn read(&self, offset: u8) -> u8 {
        self.block.cells[self.base + offset as usize].get()
    }

    /// Writes the byte at `offset` within the page.
    pub fn write(&self, offset: u8, value: u8) {
        self.block.cells[self.base + offset as usize].set(value)
    }

    /// Offset of the page within its block.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Returns true if both views cover the same bytes.
    pub fn same_region(&self, other: &PageRef) -> bool {
        self.base == other.base && self.block.same_block(&other.block)
    }
}

impl fmt::Debug for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageRef({:#06X})", self.base)
    }
}

/// Which direction(s) a range mapping installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
    ReadWrite,
}

impl Access {
    fn reads(self) -> bool {
        matches!(self, Access::Read | Access::ReadWrite)
    }

    fn writes(self) -> bool {
        matches!(self, Access::Write | Access::ReadWrite)
    }
}

/// Where an access to a page is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Buffer,
    Handler,
    Unmapped,
}

/// The page table plus the three interrupt input lines.
///
/// # Examples
///
/// ```
/// use lib6809::{Access, Bus, Fault, MemoryBlock};
///
/// let rom = MemoryBlock::from_bytes(&[0xAA; 0x200]);
/// let mut bus = Bus::new();
/// bus.map_block(0xFE..=0xFF, &rom, 0, Access::Read).unwrap();
///
/// assert_eq!(bus.read(0xFE00).unwrap(), 0xAA);
/// // No write path into ROM pages
/// assert_eq!(
///     bus.write(0xFE00, 0x01),
///     Err(Fault::UndefinedWrite { address: 0xFE00, value: 0x01 })
/// );
/// ```
pub struct Bus {
    read_pages: [Option<PageRef>; PAGE_COUNT],
    write_pages: [Option<PageRef>; PAGE_COUNT],
    read_handlers: [Option<Rc<dyn ReadHandler>>; PAGE_COUNT],
    write_handlers: [Option<Rc<dyn WriteHandler>>; PAGE_COUNT],
    lines: InterruptLines,
}

impl Bus {
    /// Creates a bus with every page unmapped and all lines deasserted.
    pub fn new() -> Self {
        Self {
            read_pages: std::array::from_fn(|_| None),
            write_pages: std::array::from_fn(|_| None),
            read_handlers: std::array::from_fn(|_| None),
            write_handlers: std::array::from_fn(|_| None),
            lines: InterruptLines::default(),
        }
    }

    /// Reads one byte through the page table.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UndefinedRead`] if the page has neither a read buffer
    /// nor a read handler.
    pub fn read(&mut self, address: u16) -> Result<u8, Fault> {
        let page = (address >> 8) as usize;
        if let Some(view) = &self.read_pages[page] {
            return Ok(view.read(address as u8));
        }
        match self.read_handlers[page].clone() {
            Some(handler) => Ok(handler.read(self, address)),
            None => Err(Fault::UndefinedRead { address }),
        }
    }

    /// Writes one byte through the page table.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UndefinedWrite`] if the page has neither a write
    /// buffer nor a write handler.
    pub fn write(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        let page = (address >> 8) as usize;
        if let Some(view) = &self.write_pages[page] {
            view.write(address as u8, value);
            return Ok(());
        }
        match self.write_handlers[page].clone() {
            Some(handler) => {
                handler.write(self, address, value);
                Ok(())
            }
            None => Err(Fault::UndefinedWrite { address, value }),
        }
    }

    /// Reads a byte from a read buffer without invoking any handler.
    ///
    /// Returns `None` for pages that are not buffer-backed. Used by debuggers
    /// and hosts that must not trigger I/O side effects.
    pub fn peek(&self, address: u16) -> Option<u8> {
        self.read_pages[(address >> 8) as usize]
            .as_ref()
            .map(|view| view.read(address as u8))
    }

    pub fn read_route(&self, page: u8) -> Route {
        let page = page as usize;
        if self.read_pages[page].is_some() {
            Route::Buffer
        } else if self.read_handlers[page].is_some() {
            Route::Handler
        } else {
            Route::Unmapped
        }
    }

    pub fn write_route(&self, page: u8) -> Route {
        let page = page as usize;
        if self.write_pages[page].is_some() {
            Route::Buffer
        } else if self.write_handlers[page].is_some() {
            Route::Handler
        } else {
            Route::Unmapped
        }
    }

    pub fn read_pointer(&self, page: u8) -> Option<&PageRef> {
        self.read_pages[page as usize].as_ref()
    }

    pub fn write_pointer(&self, page: u8) -> Option<&PageRef> {
        self.write_pages[page as usize].as_ref()
    }

    /// Installs or clears the read buffer for one page.
    pub fn set_read_pointer(&mut self, page: u8, view: Option<PageRef>) {
        self.read_pages[page as usize] = view;
    }

    /// Installs or clears the write buffer for one page.
    pub fn set_write_pointer(&mut self, page: u8, view: Option<PageRef>) {
        self.write_pages[page as usize] = view;
    }

    /// Installs the read handler for one page.
    ///
    /// The handler only runs while the page has no read buffer.
    pub fn set_read_handler<H>(&mut self, page: u8, handler: H)
    where
        H: ReadHandler + 'static,
    {
        self.read_handlers[page as usize] = Some(Rc::new(handler));
    }

    /// Installs the write handler for one page.
    ///
    /// The handler only runs while the page has no write buffer.
    pub fn set_write_handler<H>(&mut self, page: u8, handler: H)
    where
        H: WriteHandler + 'static,
    {
        self.write_handlers[page as usize] = Some(Rc::new(handler));
    }

    pub fn clear_read_handler(&mut self, page: u8) {
        self.read_handlers[page as usize] = None;
    }

    pub fn clear_write_handler(&mut self, page: u8) {
        self.write_handlers[page as usize] = None;
    }

    /// Maps consecutive pages of `block` onto a page range.
    ///
    /// Page `pages.start()` gets block page `first_block_page`, the next page
    /// gets the next block page, and so on. Handlers for the mapped direction(s)
    /// are cleared so the pages are purely buffer-backed.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the bus unchanged, if the range is empty or
    /// runs past the end of the block.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib6809::{Access, Bus, MemoryBlock};
    ///
    /// let ram = MemoryBlock::new(0x800);
    /// let mut bus = Bus::new();
    /// // 2KB of RAM at 0x0000-0x07FF
    /// bus.map_block(0x00..=0x07, &ram, 0, Access::ReadWrite).unwrap();
    ///
    /// bus.write(0x0734, 0x5A).unwrap();
    /// assert_eq!(ram.get(0x0734), Some(0x5A));
    ///
    /// // Only 8 pages in the block
    /// assert!(bus.map_block(0x08..=0x10, &ram, 0, Access::Read).is_err());
    /// ```
    pub fn map_block(
        &mut self,
        pages: RangeInclusive<u8>,
        block: &MemoryBlock,
        first_block_page: usize,
        access: Access,
    ) -> Result<(), MapError> {
        check_range(&pages)?;
        let views = pages
            .clone()
            .enumerate()
            .map(|(i, _)| block.page(first_block_page + i))
            .collect::<Result<Vec<_>, _>>()?;

        for (page, view) in pages.zip(views) {
            let page = page as usize;
            if access.reads() {
                self.read_pages[page] = Some(view.clone());
                self.read_handlers[page] = None;
            }
            if access.writes() {
                self.write_pages[page] = Some(view);
                self.write_handlers[page] = None;
            }
        }
        Ok(())
    }

    /// Installs one read handler across a page range, clearing read buffers.
    pub fn map_read_handler<H>(
        &mut self,
        pages: RangeInclusive<u8>,
        handler: H,
    ) -> Result<(), MapError>
    where
        H: ReadHandler + 'static,
    {
        check_range(&pages)?;
        let shared: Rc<dyn ReadHandler> = Rc::new(handler);
        for page in pages {
            self.read_pages[page as usize] = None;
            self.read_handlers[page as usize] = Some(Rc::clone(&shared));
        }
        Ok(())
    }

    /// Installs one write handler across a page range, clearing write buffers.
    pub fn map_write_handler<H>(
        &mut self,
        pages: RangeInclusive<u8>,
        handler: H,
    ) -> Result<(), MapError>
    where
        H: WriteHandler + 'static,
    {
        check_range(&pages)?;
        let shared: Rc<dyn WriteHandler> = Rc::new(handler);
        for page in pages {
            self.write_pages[page as usize] = None;
            self.write_handlers[page as usize] = Some(Rc::clone(&shared));
        }
        Ok(())
    }

    /// Makes a page range read as zero and silently drop writes.
    ///
    /// Useful for address space the board leaves open, or for a bank slot
    /// with no bank selected.
    pub fn map_null(&mut self, pages: RangeInclusive<u8>) -> Result<(), MapError> {
        self.map_read_handler(pages.clone(), |_bus: &mut Bus, _address: u16| 0u8)?;
        self.map_write_handler(pages, |_bus: &mut Bus, _address: u16, _value: u8| {})
    }

    /// Removes buffers and handlers from a page range so accesses fault.
    pub fn unmap(&mut self, pages: RangeInclusive<u8>, access: Access) -> Result<(), MapError> {
        check_range(&pages)?;
        for page in pages {
            let page = page as usize;
            if access.reads() {
                self.read_pages[page] = None;
                self.read_handlers[page] = None;
            }
            if access.writes() {
                self.write_pages[page] = None;
                self.write_handlers[page] = None;
            }
        }
        Ok(())
    }

    /// Current state of the interrupt input lines.
    pub fn lines(&self) -> InterruptLines {
        self.lines
    }

    pub fn lines_mut(&mut self) -> &mut InterruptLines {
        &mut self.lines
    }

    pub fn set_nmi(&mut self, asserted: bool) {
        self.lines.nmi = asserted;
    }

    pub fn set_firq(&mut self, asserted: bool) {
        self.lines.firq = asserted;
    }

    pub fn set_irq(&mut self, asserted: bool) {
        self.lines.irq = asserted;
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |pages: &[Option<PageRef>]| pages.iter().filter(|p| p.is_some()).count();
        f.debug_struct("Bus")
            .field("read_buffers", &count(&self.read_pages))
            .field("write_buffers", &count(&self.write_pages))
            .field(
                "read_handlers",
                &self.read_handlers.iter().filter(|h| h.is_some()).count(),
            )
            .field(
                "write_handlers",
                &self.write_handlers.iter().filter(|h| h.is_some()).count(),
            )
            .field("lines", &self.lines)
            .finish()
    }
}

fn check_range(pages: &RangeInclusive<u8>) -> Result<(), MapError> {
    if pages.is_empty() {
        return Err(MapError::EmptyRange {
            first: *pages.start(),
            last: *pages.end(),
        });
    }
    Ok(())
}
