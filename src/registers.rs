//! # Register File
//!
//! CPU-visible register state for the 6809:
//!
//! - **Accumulators**: A and B, jointly addressable as the 16-bit D register
//!   (A is the high byte)
//! - **Index registers**: X and Y
//! - **Stack pointers**: U (user) and S (hardware)
//! - **Program counter**: PC
//! - **Direct page**: DP, the high byte used by direct addressing
//! - **Condition codes**: CC, eight independent flags
//!
//! The register file is plain data. Behavior lives in the CPU and the
//! instruction modules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight condition-code flags.
///
/// Packed bit layout (bit 7 to bit 0): `E F H I N Z V C`.
///
/// # Examples
///
/// ```
/// use lib6809::ConditionCodes;
///
/// let cc = ConditionCodes::from_byte(0x50);
/// assert!(cc.irq_mask);
/// assert!(cc.firq_mask);
/// assert!(!cc.carry);
/// assert_eq!(cc.to_byte(), 0x50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionCodes {
    /// C: unsigned carry or borrow out of the result
    pub carry: bool,
    /// V: signed overflow
    pub overflow: bool,
    /// Z: result is zero
    pub zero: bool,
    /// N: result sign bit
    pub negative: bool,
    /// I: IRQ masked
    pub irq_mask: bool,
    /// H: carry out of bit 3 (8-bit ADD/ADC only)
    pub half_carry: bool,
    /// F: FIRQ masked
    pub firq_mask: bool,
    /// E: the entire register set was stacked
    pub entire: bool,
}

impl ConditionCodes {
    pub const CARRY: u8 = 0x01;
    pub const OVERFLOW: u8 = 0x02;
    pub const ZERO: u8 = 0x04;
    pub const NEGATIVE: u8 = 0x08;
    pub const IRQ_MASK: u8 = 0x10;
    pub const HALF_CARRY: u8 = 0x20;
    pub const FIRQ_MASK: u8 = 0x40;
    pub const ENTIRE: u8 = 0x80;

    /// Power-up state: both interrupt masks set, everything else clear.
    pub fn reset_state() -> Self {
        Self {
            irq_mask: true,
            firq_mask: true,
            ..Self::default()
        }
    }

    /// Packs the flags into the CC byte.
    pub fn to_byte(self) -> u8 {
        let mut cc = 0;
        if self.carry {
            cc |= Self::CARRY;
        }
        if self.overflow {
            cc |= Self::OVERFLOW;
        }
        if self.zero {
            cc |= Self::ZERO;
        }
        if self.negative {
            cc |= Self::NEGATIVE;
        }
        if self.irq_mask {
            cc |= Self::IRQ_MASK;
        }
        if self.half_carry {
            cc |= Self::HALF_CARRY;
        }
        if self.firq_mask {
            cc |= Self::FIRQ_MASK;
        }
        if self.entire {
            cc |= Self::ENTIRE;
        }
        cc
    }

    /// Unpacks a CC byte.
    pub fn from_byte(cc: u8) -> Self {
        Self {
            carry: cc & Self::CARRY != 0,
            overflow: cc & Self::OVERFLOW != 0,
            zero: cc & Self::ZERO != 0,
            negative: cc & Self::NEGATIVE != 0,
            irq_mask: cc & Self::IRQ_MASK != 0,
            half_carry: cc & Self::HALF_CARRY != 0,
            firq_mask: cc & Self::FIRQ_MASK != 0,
            entire: cc & Self::ENTIRE != 0,
        }
    }

    pub(crate) fn set_nz8(&mut self, value: u8) {
        self.negative = value & 0x80 != 0;
        self.zero = value == 0;
    }

    pub(crate) fn set_nz16(&mut self, value: u16) {
        self.negative = value & 0x8000 != 0;
        self.zero = value == 0;
    }
}

impl From<u8> for ConditionCodes {
    fn from(cc: u8) -> Self {
        Self::from_byte(cc)
    }
}

impl From<ConditionCodes> for u8 {
    fn from(cc: ConditionCodes) -> Self {
        cc.to_byte()
    }
}

/// The two 8-bit accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulator {
    A,
    B,
}

/// Registers selectable by bits 6-5 of an indexed post-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRegister {
    X,
    Y,
    U,
    S,
}

impl IndexRegister {
    /// Decodes bits 6-5 of an indexed post-byte.
    pub fn from_postbyte(postbyte: u8) -> Self {
        match (postbyte >> 5) & 0x03 {
            0 => IndexRegister::X,
            1 => IndexRegister::Y,
            2 => IndexRegister::U,
            _ => IndexRegister::S,
        }
    }
}

/// Register codes used by the EXG and TFR post-byte nibbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    D,
    X,
    Y,
    U,
    S,
    Pc,
    A,
    B,
    Cc,
    Dp,
}

impl Register {
    /// Decodes a 4-bit register code. Codes 6, 7 and 0xC-0xF are undefined.
    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x0 => Some(Register::D),
            0x1 => Some(Register::X),
            0x2 => Some(Register::Y),
            0x3 => Some(Register::U),
            0x4 => Some(Register::S),
            0x5 => Some(Register::Pc),
            0x8 => Some(Register::A),
            0x9 => Some(Register::B),
            0xA => Some(Register::Cc),
            0xB => Some(Register::Dp),
            _ => None,
        }
    }

    /// Returns true for the 16-bit registers.
    pub fn is_wide(self) -> bool {
        matches!(
            self,
            Register::D | Register::X | Register::Y | Register::U | Register::S | Register::Pc
        )
    }
}

/// Complete CPU register file.
///
/// # Examples
///
/// ```
/// use lib6809::Registers;
///
/// let mut regs = Registers::default();
/// regs.set_d(0x1234);
/// assert_eq!(regs.a, 0x12);
/// assert_eq!(regs.b, 0x34);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub dp: u8,
    pub x: u16,
    pub y: u16,
    pub u: u16,
    pub s: u16,
    pub pc: u16,
    pub cc: ConditionCodes,
}

impl Registers {
    /// Returns the D register (A:B).
    pub fn d(&self) -> u16 {
        u16::from_be_bytes([self.a, self.b])
    }

    /// Sets the D register (A:B).
    pub fn set_d(&mut self, value: u16) {
        let [a, b] = value.to_be_bytes();
        self.a = a;
        self.b = b;
    }

    pub fn accumulator(&self, acc: Accumulator) -> u8 {
        match acc {
            Accumulator::A => self.a,
            Accumulator::B => self.b,
        }
    }

    pub fn set_accumulator(&mut self, acc: Accumulator, value: u8) {
        match acc {
            Accumulator::A => self.a = value,
            Accumulator::B => self.b = value,
        }
    }

    pub fn index(&self, reg: IndexRegister) -> u16 {
        match reg {
            IndexRegister::X => self.x,
            IndexRegister::Y => self.y,
            IndexRegister::U => self.u,
            IndexRegister::S => self.s,
        }
    }

    pub fn set_index(&mut self, reg: IndexRegister, value: u16) {
        match reg {
            IndexRegister::X => self.x = value,
            IndexRegister::Y => self.y = value,
            IndexRegister::U => self.u = value,
            IndexRegister::S => self.s = value,
        }
    }

    /// Reads any register; 8-bit registers are zero-extended.
    pub fn get(&self, reg: Register) -> u16 {
        match reg {
            Register::D => self.d(),
            Register::X => self.x,
            Register::Y => self.y,
            Register::U => self.u,
            Register::S => self.s,
            Register::Pc => self.pc,
            Register::A => self.a as u16,
            Register::B => self.b as u16,
            Register::Cc => self.cc.to_byte() as u16,
            Register::Dp => self.dp as u16,
        }
    }

    /// Writes any register; 8-bit registers take the low byte.
    pub fn set(&mut self, reg: Register, value: u16) {
        match reg {
            Register::D => self.set_d(value),
            Register::X => self.x = value,
            Register::Y => self.y = value,
            Register::U => self.u = value,
            Register::S => self.s = value,
            Register::Pc => self.pc = value,
            Register::A => self.a = value as u8,
            Register::B => self.b = value as u8,
            Register::Cc => self.cc = ConditionCodes::from_byte(value as u8),
            Register::Dp => self.dp = value as u8,
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:02X} B={:02X} X={:04X} Y={:04X} U={:04X} DP={:02X} CC={:02X} S={:04X} PC={:04X}",
            self.a,
            self.b,
            self.x,
            self.y,
            self.u,
            self.dp,
            self.cc.to_byte(),
            self.s,
            self.pc
        )
    }
}
