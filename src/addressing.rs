//! # Addressing Modes
//!
//! This module defines the 6809 addressing modes, the pure decoder for indexed
//! post-bytes, and the effective-address resolvers the instructions use.
//!
//! Resolvers advance PC past the operand bytes they consume and charge the
//! extra cycles an indexed post-byte calls for. The base cost of each opcode
//! is charged by the dispatcher from the opcode tables.

use crate::cpu::Cpu;
use crate::registers::IndexRegister;
use crate::Fault;

/// 6809 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Inherent
/// - **1 byte**: Direct, Relative, Immediate (8-bit and post-byte forms)
/// - **2 bytes**: Extended, LongRelative, Immediate (16-bit forms)
/// - **1-3 bytes**: Indexed (post-byte plus optional offset or address)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, or operand implied by the opcode.
    ///
    /// Examples: NOP, MUL, INCA
    Inherent,

    /// Constant operand in the instruction stream. Also used for the post-byte
    /// of PSH/PUL, EXG/TFR, ANDCC/ORCC and CWAI.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Low 8 bits of the address; the high 8 bits come from DP.
    ///
    /// Example: LDA <$80 (reads from DP:80)
    Direct,

    /// Full 16-bit address, high byte first.
    ///
    /// Example: JMP $5000
    Extended,

    /// Post-byte selected register-relative addressing.
    ///
    /// Example: LDA 5,X
    Indexed,

    /// Signed 8-bit offset from the PC following the instruction.
    ///
    /// Example: BNE loop
    Relative,

    /// 16-bit offset from the PC following the instruction.
    ///
    /// Example: LBRA far_label
    LongRelative,
}

/// Sub-mode selected by an indexed post-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexedMode {
    /// `n,R` with a 5-bit signed offset embedded in the post-byte.
    Offset5(i8),
    /// `,R+`
    PostIncrement1,
    /// `,R++`
    PostIncrement2,
    /// `,-R`
    PreDecrement1,
    /// `,--R`
    PreDecrement2,
    /// `,R`
    NoOffset,
    /// `B,R`
    AccumulatorB,
    /// `A,R`
    AccumulatorA,
    /// `n8,R`
    Offset8,
    /// `n16,R`
    Offset16,
    /// `D,R`
    AccumulatorD,
    /// `n8,PCR`
    PcOffset8,
    /// `n16,PCR`
    PcOffset16,
    /// `[n16]`
    ExtendedIndirect,
}

/// A decoded indexed post-byte.
///
/// # Examples
///
/// ```
/// use lib6809::{IndexRegister, IndexedMode, IndexedPostbyte};
///
/// // ,Y++ indirect
/// let decoded = IndexedPostbyte::decode(0xB1).unwrap();
/// assert_eq!(decoded.register, IndexRegister::Y);
/// assert_eq!(decoded.mode, IndexedMode::PostIncrement2);
/// assert!(decoded.indirect);
/// assert_eq!(decoded.extra_cycles(), 6);
///
/// // -16,X
/// let decoded = IndexedPostbyte::decode(0x10).unwrap();
/// assert_eq!(decoded.mode, IndexedMode::Offset5(-16));
///
/// // ,R+ has no indirect form
/// assert!(IndexedPostbyte::decode(0x90).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedPostbyte {
    pub register: IndexRegister,
    pub mode: IndexedMode,
    pub indirect: bool,
}

impl IndexedPostbyte {
    /// Decodes a post-byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressMode`] for the undefined sub-modes (low nibble
    /// 0x7, 0xA, 0xE, 0xF), for indirect `,R+`/`,-R`, and for `[n16]` with
    /// register bits other than X.
    pub fn decode(postbyte: u8) -> Result<Self, Fault> {
        let register = IndexRegister::from_postbyte(postbyte);

        if postbyte & 0x80 == 0 {
            let raw = (postbyte & 0x1F) as i8;
            let offset = if raw & 0x10 != 0 { raw - 0x20 } else { raw };
            return Ok(Self {
                register,
                mode: IndexedMode::Offset5(offset),
                indirect: false,
            });
        }

        let indirect = postbyte & 0x10 != 0;
        let mode = match postbyte & 0x0F {
            0x0 if !indirect => IndexedMode::PostIncrement1,
            0x1 => IndexedMode::PostIncrement2,
            0x2 if !indirect => IndexedMode::PreDecrement1,
            0x3 => IndexedMode::PreDecrement2,
            0x4 => IndexedMode::NoOffset,
            0x5 => IndexedMode::AccumulatorB,
            0x6 => IndexedMode::AccumulatorA,
            0x8 => IndexedMode::Offset8,
            0x9 => IndexedMode::Offset16,
            0xB => IndexedMode::AccumulatorD,
            0xC => IndexedMode::PcOffset8,
            0xD => IndexedMode::PcOffset16,
            0xF if indirect && register == IndexRegister::X => IndexedMode::ExtendedIndirect,
            _ => return Err(Fault::AddressMode { postbyte }),
        };

        Ok(Self {
            register,
            mode,
            indirect,
        })
    }

    /// Cycles added on top of the opcode's base cost.
    pub fn extra_cycles(&self) -> u8 {
        let direct = match self.mode {
            IndexedMode::NoOffset => 0,
            IndexedMode::Offset5(_)
            | IndexedMode::AccumulatorB
            | IndexedMode::AccumulatorA
            | IndexedMode::Offset8
            | IndexedMode::PcOffset8 => 1,
            IndexedMode::PostIncrement1 | IndexedMode::PreDecrement1 => 2,
            IndexedMode::PostIncrement2 | IndexedMode::PreDecrement2 => 3,
            IndexedMode::Offset16 | IndexedMode::AccumulatorD => 4,
            IndexedMode::PcOffset16 => 5,
            IndexedMode::ExtendedIndirect => return 5,
        };
        if self.indirect {
            direct + 3
        } else {
            direct
        }
    }

    /// Number of offset/address bytes following the post-byte.
    pub fn extension_bytes(&self) -> u8 {
        match self.mode {
            IndexedMode::Offset8 | IndexedMode::PcOffset8 => 1,
            IndexedMode::Offset16 | IndexedMode::PcOffset16 | IndexedMode::ExtendedIndirect => 2,
            _ => 0,
        }
    }
}

impl Cpu {
    /// `DP:nn`
    pub(crate) fn direct_address(&mut self) -> Result<u16, Fault> {
        let low = self.fetch_byte()?;
        Ok(u16::from_be_bytes([self.regs.dp, low]))
    }

    pub(crate) fn extended_address(&mut self) -> Result<u16, Fault> {
        self.fetch_word()
    }

    /// Branch target for an 8-bit signed offset.
    pub(crate) fn relative_address(&mut self) -> Result<u16, Fault> {
        let offset = self.fetch_byte()? as i8;
        Ok(self.regs.pc.wrapping_add_signed(offset as i16))
    }

    /// Branch target for a 16-bit offset.
    pub(crate) fn long_relative_address(&mut self) -> Result<u16, Fault> {
        let offset = self.fetch_word()?;
        Ok(self.regs.pc.wrapping_add(offset))
    }

    /// Decodes a post-byte, applies any auto-increment/decrement, and follows
    /// the indirection if requested.
    pub(crate) fn indexed_address(&mut self) -> Result<u16, Fault> {
        let postbyte = self.fetch_byte()?;
        let decoded = IndexedPostbyte::decode(postbyte)?;
        self.clock = self.clock.wrapping_add(decoded.extra_cycles() as u64);

        let reg = decoded.register;
        let base = self.regs.index(reg);
        let address = match decoded.mode {
            IndexedMode::Offset5(offset) => base.wrapping_add_signed(offset as i16),
            IndexedMode::PostIncrement1 => {
                self.regs.set_index(reg, base.wrapping_add(1));
                base
            }
            IndexedMode::PostIncrement2 => {
                self.regs.set_index(reg, base.wrapping_add(2));
                base
            }
            IndexedMode::PreDecrement1 => {
                let address = base.wrapping_sub(1);
                self.regs.set_index(reg, address);
                address
            }
            IndexedMode::PreDecrement2 => {
                let address = base.wrapping_sub(2);
                self.regs.set_index(reg, address);
                address
            }
            IndexedMode::NoOffset => base,
            IndexedMode::AccumulatorB => base.wrapping_add_signed(self.regs.b as i8 as i16),
            IndexedMode::AccumulatorA => base.wrapping_add_signed(self.regs.a as i8 as i16),
            IndexedMode::Offset8 => {
                let offset = self.fetch_byte()? as i8;
                base.wrapping_add_signed(offset as i16)
            }
            IndexedMode::Offset16 => {
                let offset = self.fetch_word()?;
                base.wrapping_add(offset)
            }
            IndexedMode::AccumulatorD => base.wrapping_add(self.regs.d()),
            IndexedMode::PcOffset8 => {
                let offset = self.fetch_byte()? as i8;
                self.regs.pc.wrapping_add_signed(offset as i16)
            }
            IndexedMode::PcOffset16 => {
                let offset = self.fetch_word()?;
                self.regs.pc.wrapping_add(offset)
            }
            IndexedMode::ExtendedIndirect => self.fetch_word()?,
        };

        if decoded.indirect {
            self.read_word(address)
        } else {
            Ok(address)
        }
    }

    /// Resolves the effective address for a memory-referencing mode.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> Result<u16, Fault> {
        match mode {
            AddressingMode::Direct => self.direct_address(),
            AddressingMode::Extended => self.extended_address(),
            AddressingMode::Indexed => self.indexed_address(),
            AddressingMode::Relative => self.relative_address(),
            AddressingMode::LongRelative => self.long_relative_address(),
            AddressingMode::Inherent | AddressingMode::Immediate => {
                Err(Fault::Internal { pc: self.regs.pc })
            }
        }
    }

    /// Reads an 8-bit operand: immediate from the instruction stream, anything
    /// else through the effective address.
    pub(crate) fn read_operand8(&mut self, mode: AddressingMode) -> Result<u8, Fault> {
        match mode {
            AddressingMode::Immediate => self.fetch_byte(),
            _ => {
                let address = self.effective_address(mode)?;
                self.read(address)
            }
        }
    }

    pub(crate) fn read_operand16(&mut self, mode: AddressingMode) -> Result<u16, Fault> {
        match mode {
            AddressingMode::Immediate => self.fetch_word(),
            _ => {
                let address = self.effective_address(mode)?;
                self.read_word(address)
            }
        }
    }
}
