//! # Opcode Metadata Tables
//!
//! The 6809 decodes through three 256-entry tables:
//!
//! - **Page 1**: single-byte opcodes, including the 0x10/0x11 prefixes
//! - **Page 2**: opcodes following a 0x10 prefix (long branches, SWI2, D/Y/S forms)
//! - **Page 3**: opcodes following a 0x11 prefix (SWI3, CMPU, CMPS)
//!
//! Each entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost (indexed post-byte, stack and branch extras are added at
//!   execution time)
//! - Instruction size in bytes, counting the prefix and excluding indexed
//!   extension bytes
//! - Whether the opcode is defined
//!
//! Prefixed entries carry the total cost including the prefix byte.

use crate::addressing::AddressingMode;
use std::fmt;

/// Metadata for a single 6809 opcode.
///
/// # Examples
///
/// ```
/// use lib6809::{AddressingMode, PAGE1_TABLE, PAGE2_TABLE};
///
/// let lda_imm = &PAGE1_TABLE[0x86];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// let ldy_ext = &PAGE2_TABLE[0xBE];
/// assert_eq!(ldy_ext.mnemonic, "LDY");
/// assert_eq!(ldy_ext.base_cycles, 7);
/// assert_eq!(ldy_ext.size_bytes, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("???" for undefined opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Documented cycle cost before execution-time extras.
    pub base_cycles: u8,

    /// Instruction size in bytes (prefix + opcode + operands).
    pub size_bytes: u8,

    /// False for opcodes with no defined behavior.
    pub defined: bool,
}

/// Opcode table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodePage {
    Page1,
    Page2,
    Page3,
}

impl OpcodePage {
    /// Returns the metadata table for this page.
    pub fn table(self) -> &'static [OpcodeMetadata; 256] {
        match self {
            OpcodePage::Page1 => &PAGE1_TABLE,
            OpcodePage::Page2 => &PAGE2_TABLE,
            OpcodePage::Page3 => &PAGE3_TABLE,
        }
    }

    /// Cycles charged when an undefined opcode is fetched from this page.
    pub fn undefined_cost(self) -> u64 {
        match self {
            OpcodePage::Page1 => 1,
            OpcodePage::Page2 | OpcodePage::Page3 => 2,
        }
    }
}

impl fmt::Display for OpcodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodePage::Page1 => write!(f, "page-1"),
            OpcodePage::Page2 => write!(f, "page-2"),
            OpcodePage::Page3 => write!(f, "page-3"),
        }
    }
}

const UNDEFINED: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    addressing_mode: AddressingMode::Inherent,
    base_cycles: 0,
    size_bytes: 1,
    defined: false,
};

const UNDEFINED_PREFIXED: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    addressing_mode: AddressingMode::Inherent,
    base_cycles: 0,
    size_bytes: 2,
    defined: false,
};

/// Page-1 opcode table, indexed by the first opcode byte.
///
/// Entries 0x10 and 0x11 are the prefixes; their cost is carried by the page-2
/// and page-3 entries they select.
pub const PAGE1_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: "NEG",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x01
    UNDEFINED,
    // 0x02
    UNDEFINED,
    // 0x03
    OpcodeMetadata {
        mnemonic: "COM",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x04
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x05
    UNDEFINED,
    // 0x06
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x07
    OpcodeMetadata {
        mnemonic: "ASR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x08
    OpcodeMetadata {
        mnemonic: "LSL",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x0B
    UNDEFINED,
    // 0x0C
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: "TST",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x0F
    OpcodeMetadata {
        mnemonic: "CLR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x10
    OpcodeMetadata {
        mnemonic: "PAGE2",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 0,
        size_bytes: 1,
        defined: true,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: "PAGE3",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 0,
        size_bytes: 1,
        defined: true,
    },
    // 0x12
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x13
    OpcodeMetadata {
        mnemonic: "SYNC",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 4,
        size_bytes: 1,
        defined: true,
    },
    // 0x14
    UNDEFINED,
    // 0x15
    UNDEFINED,
    // 0x16
    OpcodeMetadata {
        mnemonic: "LBRA",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0x17
    OpcodeMetadata {
        mnemonic: "LBSR",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 9,
        size_bytes: 3,
        defined: true,
    },
    // 0x18
    UNDEFINED,
    // 0x19
    OpcodeMetadata {
        mnemonic: "DAA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x1A
    OpcodeMetadata {
        mnemonic: "ORCC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x1B
    UNDEFINED,
    // 0x1C
    OpcodeMetadata {
        mnemonic: "ANDCC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: "SEX",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: "EXG",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 8,
        size_bytes: 2,
        defined: true,
    },
    // 0x1F
    OpcodeMetadata {
        mnemonic: "TFR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x20
    OpcodeMetadata {
        mnemonic: "BRA",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: "BRN",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x22
    OpcodeMetadata {
        mnemonic: "BHI",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x23
    OpcodeMetadata {
        mnemonic: "BLS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "BHS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "BLO",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x27
    OpcodeMetadata {
        mnemonic: "BEQ",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: "BVC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "BVS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "BPL",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x2B
    OpcodeMetadata {
        mnemonic: "BMI",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "BGE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "BLT",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "BGT",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x2F
    OpcodeMetadata {
        mnemonic: "BLE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x30
    OpcodeMetadata {
        mnemonic: "LEAX",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: "LEAY",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x32
    OpcodeMetadata {
        mnemonic: "LEAS",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x33
    OpcodeMetadata {
        mnemonic: "LEAU",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x34
    OpcodeMetadata {
        mnemonic: "PSHS",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: "PULS",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: "PSHU",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0x37
    OpcodeMetadata {
        mnemonic: "PULU",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0x38
    UNDEFINED,
    // 0x39
    OpcodeMetadata {
        mnemonic: "RTS",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 5,
        size_bytes: 1,
        defined: true,
    },
    // 0x3A
    OpcodeMetadata {
        mnemonic: "ABX",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 3,
        size_bytes: 1,
        defined: true,
    },
    // 0x3B
    OpcodeMetadata {
        mnemonic: "RTI",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 6,
        size_bytes: 1,
        defined: true,
    },
    // 0x3C
    OpcodeMetadata {
        mnemonic: "CWAI",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 20,
        size_bytes: 2,
        defined: true,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: "MUL",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 11,
        size_bytes: 1,
        defined: true,
    },
    // 0x3E
    UNDEFINED,
    // 0x3F
    OpcodeMetadata {
        mnemonic: "SWI",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 19,
        size_bytes: 1,
        defined: true,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: "NEGA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x41
    UNDEFINED,
    // 0x42
    UNDEFINED,
    // 0x43
    OpcodeMetadata {
        mnemonic: "COMA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x44
    OpcodeMetadata {
        mnemonic: "LSRA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x45
    UNDEFINED,
    // 0x46
    OpcodeMetadata {
        mnemonic: "RORA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x47
    OpcodeMetadata {
        mnemonic: "ASRA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: "LSLA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: "ROLA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: "DECA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x4B
    UNDEFINED,
    // 0x4C
    OpcodeMetadata {
        mnemonic: "INCA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: "TSTA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x4E
    UNDEFINED,
    // 0x4F
    OpcodeMetadata {
        mnemonic: "CLRA",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: "NEGB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x51
    UNDEFINED,
    // 0x52
    UNDEFINED,
    // 0x53
    OpcodeMetadata {
        mnemonic: "COMB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x54
    OpcodeMetadata {
        mnemonic: "LSRB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x55
    UNDEFINED,
    // 0x56
    OpcodeMetadata {
        mnemonic: "RORB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x57
    OpcodeMetadata {
        mnemonic: "ASRB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: "LSLB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: "ROLB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x5A
    OpcodeMetadata {
        mnemonic: "DECB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x5B
    UNDEFINED,
    // 0x5C
    OpcodeMetadata {
        mnemonic: "INCB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: "TSTB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x5E
    UNDEFINED,
    // 0x5F
    OpcodeMetadata {
        mnemonic: "CLRB",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 2,
        size_bytes: 1,
        defined: true,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: "NEG",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x61
    UNDEFINED,
    // 0x62
    UNDEFINED,
    // 0x63
    OpcodeMetadata {
        mnemonic: "COM",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x64
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x65
    UNDEFINED,
    // 0x66
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x67
    OpcodeMetadata {
        mnemonic: "ASR",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: "LSL",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x6B
    UNDEFINED,
    // 0x6C
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: "TST",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 3,
        size_bytes: 2,
        defined: true,
    },
    // 0x6F
    OpcodeMetadata {
        mnemonic: "CLR",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: "NEG",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x71
    UNDEFINED,
    // 0x72
    UNDEFINED,
    // 0x73
    OpcodeMetadata {
        mnemonic: "COM",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x74
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x75
    UNDEFINED,
    // 0x76
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x77
    OpcodeMetadata {
        mnemonic: "ASR",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: "LSL",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x7A
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x7B
    UNDEFINED,
    // 0x7C
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: "TST",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 4,
        size_bytes: 3,
        defined: true,
    },
    // 0x7F
    OpcodeMetadata {
        mnemonic: "CLR",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x80
    OpcodeMetadata {
        mnemonic: "SUBA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: "CMPA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x82
    OpcodeMetadata {
        mnemonic: "SBCA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x83
    OpcodeMetadata {
        mnemonic: "SUBD",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 4,
        size_bytes: 3,
        defined: true,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: "ANDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: "BITA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x87
    UNDEFINED,
    // 0x88
    OpcodeMetadata {
        mnemonic: "EORA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x89
    OpcodeMetadata {
        mnemonic: "ADCA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x8B
    OpcodeMetadata {
        mnemonic: "ADDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: "CMPX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 4,
        size_bytes: 3,
        defined: true,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: "BSR",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 7,
        size_bytes: 2,
        defined: true,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 3,
        defined: true,
    },
    // 0x8F
    UNDEFINED,
    // 0x90
    OpcodeMetadata {
        mnemonic: "SUBA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: "CMPA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x92
    OpcodeMetadata {
        mnemonic: "SBCA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x93
    OpcodeMetadata {
        mnemonic: "SUBD",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: "ANDA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: "BITA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x97
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: "EORA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: "ADCA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x9B
    OpcodeMetadata {
        mnemonic: "ADDA",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0x9C
    OpcodeMetadata {
        mnemonic: "CMPX",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 7,
        size_bytes: 2,
        defined: true,
    },
    // 0x9E
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0x9F
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: "SUBA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: "CMPA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: "SBCA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA3
    OpcodeMetadata {
        mnemonic: "SUBD",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: "ANDA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: "BITA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA7
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: "EORA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: "ADCA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xAB
    OpcodeMetadata {
        mnemonic: "ADDA",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: "CMPX",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 7,
        size_bytes: 2,
        defined: true,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xAF
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: "SUBA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: "CMPA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB2
    OpcodeMetadata {
        mnemonic: "SBCA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB3
    OpcodeMetadata {
        mnemonic: "SUBD",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: "ANDA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: "BITA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB7
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: "EORA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: "ADCA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xBB
    OpcodeMetadata {
        mnemonic: "ADDA",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: "CMPX",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 8,
        size_bytes: 3,
        defined: true,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xBF
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: "SUBB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: "CMPB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC2
    OpcodeMetadata {
        mnemonic: "SBCB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC3
    OpcodeMetadata {
        mnemonic: "ADDD",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 4,
        size_bytes: 3,
        defined: true,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: "ANDB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: "BITB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: "LDB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC7
    UNDEFINED,
    // 0xC8
    OpcodeMetadata {
        mnemonic: "EORB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: "ADCB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: "ORB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xCB
    OpcodeMetadata {
        mnemonic: "ADDB",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        defined: true,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: "LDD",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 3,
        defined: true,
    },
    // 0xCD
    UNDEFINED,
    // 0xCE
    OpcodeMetadata {
        mnemonic: "LDU",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 3,
        size_bytes: 3,
        defined: true,
    },
    // 0xCF
    UNDEFINED,
    // 0xD0
    OpcodeMetadata {
        mnemonic: "SUBB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: "CMPB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD2
    OpcodeMetadata {
        mnemonic: "SBCB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD3
    OpcodeMetadata {
        mnemonic: "ADDD",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0xD4
    OpcodeMetadata {
        mnemonic: "ANDB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: "BITB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: "LDB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD7
    OpcodeMetadata {
        mnemonic: "STB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: "EORB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xD9
    OpcodeMetadata {
        mnemonic: "ADCB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xDA
    OpcodeMetadata {
        mnemonic: "ORB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xDB
    OpcodeMetadata {
        mnemonic: "ADDB",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xDC
    OpcodeMetadata {
        mnemonic: "LDD",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xDD
    OpcodeMetadata {
        mnemonic: "STD",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: "LDU",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xDF
    OpcodeMetadata {
        mnemonic: "STU",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: "SUBB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: "CMPB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE2
    OpcodeMetadata {
        mnemonic: "SBCB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE3
    OpcodeMetadata {
        mnemonic: "ADDD",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 2,
        defined: true,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: "ANDB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: "BITB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: "LDB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE7
    OpcodeMetadata {
        mnemonic: "STB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: "EORB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: "ADCB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: "ORB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xEB
    OpcodeMetadata {
        mnemonic: "ADDB",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 4,
        size_bytes: 2,
        defined: true,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: "LDD",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xED
    OpcodeMetadata {
        mnemonic: "STD",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: "LDU",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xEF
    OpcodeMetadata {
        mnemonic: "STU",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 5,
        size_bytes: 2,
        defined: true,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: "SUBB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: "CMPB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF2
    OpcodeMetadata {
        mnemonic: "SBCB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF3
    OpcodeMetadata {
        mnemonic: "ADDD",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xF4
    OpcodeMetadata {
        mnemonic: "ANDB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: "BITB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: "LDB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF7
    OpcodeMetadata {
        mnemonic: "STB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: "EORB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: "ADCB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xFA
    OpcodeMetadata {
        mnemonic: "ORB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xFB
    OpcodeMetadata {
        mnemonic: "ADDB",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 5,
        size_bytes: 3,
        defined: true,
    },
    // 0xFC
    OpcodeMetadata {
        mnemonic: "LDD",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xFD
    OpcodeMetadata {
        mnemonic: "STD",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: "LDU",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xFF
    OpcodeMetadata {
        mnemonic: "STU",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
];

/// Page-2 opcode table, indexed by the byte following a 0x10 prefix.
pub const PAGE2_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    UNDEFINED_PREFIXED,
    // 0x01
    UNDEFINED_PREFIXED,
    // 0x02
    UNDEFINED_PREFIXED,
    // 0x03
    UNDEFINED_PREFIXED,
    // 0x04
    UNDEFINED_PREFIXED,
    // 0x05
    UNDEFINED_PREFIXED,
    // 0x06
    UNDEFINED_PREFIXED,
    // 0x07
    UNDEFINED_PREFIXED,
    // 0x08
    UNDEFINED_PREFIXED,
    // 0x09
    UNDEFINED_PREFIXED,
    // 0x0A
    UNDEFINED_PREFIXED,
    // 0x0B
    UNDEFINED_PREFIXED,
    // 0x0C
    UNDEFINED_PREFIXED,
    // 0x0D
    UNDEFINED_PREFIXED,
    // 0x0E
    UNDEFINED_PREFIXED,
    // 0x0F
    UNDEFINED_PREFIXED,
    // 0x10
    UNDEFINED_PREFIXED,
    // 0x11
    UNDEFINED_PREFIXED,
    // 0x12
    UNDEFINED_PREFIXED,
    // 0x13
    UNDEFINED_PREFIXED,
    // 0x14
    UNDEFINED_PREFIXED,
    // 0x15
    UNDEFINED_PREFIXED,
    // 0x16
    UNDEFINED_PREFIXED,
    // 0x17
    UNDEFINED_PREFIXED,
    // 0x18
    UNDEFINED_PREFIXED,
    // 0x19
    UNDEFINED_PREFIXED,
    // 0x1A
    UNDEFINED_PREFIXED,
    // 0x1B
    UNDEFINED_PREFIXED,
    // 0x1C
    UNDEFINED_PREFIXED,
    // 0x1D
    UNDEFINED_PREFIXED,
    // 0x1E
    UNDEFINED_PREFIXED,
    // 0x1F
    UNDEFINED_PREFIXED,
    // 0x20
    UNDEFINED_PREFIXED,
    // 0x21
    OpcodeMetadata {
        mnemonic: "LBRN",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x22
    OpcodeMetadata {
        mnemonic: "LBHI",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x23
    OpcodeMetadata {
        mnemonic: "LBLS",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "LBHS",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "LBLO",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "LBNE",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x27
    OpcodeMetadata {
        mnemonic: "LBEQ",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: "LBVC",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "LBVS",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "LBPL",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x2B
    OpcodeMetadata {
        mnemonic: "LBMI",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "LBGE",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "LBLT",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "LBGT",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x2F
    OpcodeMetadata {
        mnemonic: "LBLE",
        addressing_mode: AddressingMode::LongRelative,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x30
    UNDEFINED_PREFIXED,
    // 0x31
    UNDEFINED_PREFIXED,
    // 0x32
    UNDEFINED_PREFIXED,
    // 0x33
    UNDEFINED_PREFIXED,
    // 0x34
    UNDEFINED_PREFIXED,
    // 0x35
    UNDEFINED_PREFIXED,
    // 0x36
    UNDEFINED_PREFIXED,
    // 0x37
    UNDEFINED_PREFIXED,
    // 0x38
    UNDEFINED_PREFIXED,
    // 0x39
    UNDEFINED_PREFIXED,
    // 0x3A
    UNDEFINED_PREFIXED,
    // 0x3B
    UNDEFINED_PREFIXED,
    // 0x3C
    UNDEFINED_PREFIXED,
    // 0x3D
    UNDEFINED_PREFIXED,
    // 0x3E
    UNDEFINED_PREFIXED,
    // 0x3F
    OpcodeMetadata {
        mnemonic: "SWI2",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 20,
        size_bytes: 2,
        defined: true,
    },
    // 0x40
    UNDEFINED_PREFIXED,
    // 0x41
    UNDEFINED_PREFIXED,
    // 0x42
    UNDEFINED_PREFIXED,
    // 0x43
    UNDEFINED_PREFIXED,
    // 0x44
    UNDEFINED_PREFIXED,
    // 0x45
    UNDEFINED_PREFIXED,
    // 0x46
    UNDEFINED_PREFIXED,
    // 0x47
    UNDEFINED_PREFIXED,
    // 0x48
    UNDEFINED_PREFIXED,
    // 0x49
    UNDEFINED_PREFIXED,
    // 0x4A
    UNDEFINED_PREFIXED,
    // 0x4B
    UNDEFINED_PREFIXED,
    // 0x4C
    UNDEFINED_PREFIXED,
    // 0x4D
    UNDEFINED_PREFIXED,
    // 0x4E
    UNDEFINED_PREFIXED,
    // 0x4F
    UNDEFINED_PREFIXED,
    // 0x50
    UNDEFINED_PREFIXED,
    // 0x51
    UNDEFINED_PREFIXED,
    // 0x52
    UNDEFINED_PREFIXED,
    // 0x53
    UNDEFINED_PREFIXED,
    // 0x54
    UNDEFINED_PREFIXED,
    // 0x55
    UNDEFINED_PREFIXED,
    // 0x56
    UNDEFINED_PREFIXED,
    // 0x57
    UNDEFINED_PREFIXED,
    // 0x58
    UNDEFINED_PREFIXED,
    // 0x59
    UNDEFINED_PREFIXED,
    // 0x5A
    UNDEFINED_PREFIXED,
    // 0x5B
    UNDEFINED_PREFIXED,
    // 0x5C
    UNDEFINED_PREFIXED,
    // 0x5D
    UNDEFINED_PREFIXED,
    // 0x5E
    UNDEFINED_PREFIXED,
    // 0x5F
    UNDEFINED_PREFIXED,
    // 0x60
    UNDEFINED_PREFIXED,
    // 0x61
    UNDEFINED_PREFIXED,
    // 0x62
    UNDEFINED_PREFIXED,
    // 0x63
    UNDEFINED_PREFIXED,
    // 0x64
    UNDEFINED_PREFIXED,
    // 0x65
    UNDEFINED_PREFIXED,
    // 0x66
    UNDEFINED_PREFIXED,
    // 0x67
    UNDEFINED_PREFIXED,
    // 0x68
    UNDEFINED_PREFIXED,
    // 0x69
    UNDEFINED_PREFIXED,
    // 0x6A
    UNDEFINED_PREFIXED,
    // 0x6B
    UNDEFINED_PREFIXED,
    // 0x6C
    UNDEFINED_PREFIXED,
    // 0x6D
    UNDEFINED_PREFIXED,
    // 0x6E
    UNDEFINED_PREFIXED,
    // 0x6F
    UNDEFINED_PREFIXED,
    // 0x70
    UNDEFINED_PREFIXED,
    // 0x71
    UNDEFINED_PREFIXED,
    // 0x72
    UNDEFINED_PREFIXED,
    // 0x73
    UNDEFINED_PREFIXED,
    // 0x74
    UNDEFINED_PREFIXED,
    // 0x75
    UNDEFINED_PREFIXED,
    // 0x76
    UNDEFINED_PREFIXED,
    // 0x77
    UNDEFINED_PREFIXED,
    // 0x78
    UNDEFINED_PREFIXED,
    // 0x79
    UNDEFINED_PREFIXED,
    // 0x7A
    UNDEFINED_PREFIXED,
    // 0x7B
    UNDEFINED_PREFIXED,
    // 0x7C
    UNDEFINED_PREFIXED,
    // 0x7D
    UNDEFINED_PREFIXED,
    // 0x7E
    UNDEFINED_PREFIXED,
    // 0x7F
    UNDEFINED_PREFIXED,
    // 0x80
    UNDEFINED_PREFIXED,
    // 0x81
    UNDEFINED_PREFIXED,
    // 0x82
    UNDEFINED_PREFIXED,
    // 0x83
    OpcodeMetadata {
        mnemonic: "CMPD",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x84
    UNDEFINED_PREFIXED,
    // 0x85
    UNDEFINED_PREFIXED,
    // 0x86
    UNDEFINED_PREFIXED,
    // 0x87
    UNDEFINED_PREFIXED,
    // 0x88
    UNDEFINED_PREFIXED,
    // 0x89
    UNDEFINED_PREFIXED,
    // 0x8A
    UNDEFINED_PREFIXED,
    // 0x8B
    UNDEFINED_PREFIXED,
    // 0x8C
    OpcodeMetadata {
        mnemonic: "CMPY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x8D
    UNDEFINED_PREFIXED,
    // 0x8E
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 4,
        size_bytes: 4,
        defined: true,
    },
    // 0x8F
    UNDEFINED_PREFIXED,
    // 0x90
    UNDEFINED_PREFIXED,
    // 0x91
    UNDEFINED_PREFIXED,
    // 0x92
    UNDEFINED_PREFIXED,
    // 0x93
    OpcodeMetadata {
        mnemonic: "CMPD",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x94
    UNDEFINED_PREFIXED,
    // 0x95
    UNDEFINED_PREFIXED,
    // 0x96
    UNDEFINED_PREFIXED,
    // 0x97
    UNDEFINED_PREFIXED,
    // 0x98
    UNDEFINED_PREFIXED,
    // 0x99
    UNDEFINED_PREFIXED,
    // 0x9A
    UNDEFINED_PREFIXED,
    // 0x9B
    UNDEFINED_PREFIXED,
    // 0x9C
    OpcodeMetadata {
        mnemonic: "CMPY",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x9D
    UNDEFINED_PREFIXED,
    // 0x9E
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0x9F
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xA0
    UNDEFINED_PREFIXED,
    // 0xA1
    UNDEFINED_PREFIXED,
    // 0xA2
    UNDEFINED_PREFIXED,
    // 0xA3
    OpcodeMetadata {
        mnemonic: "CMPD",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xA4
    UNDEFINED_PREFIXED,
    // 0xA5
    UNDEFINED_PREFIXED,
    // 0xA6
    UNDEFINED_PREFIXED,
    // 0xA7
    UNDEFINED_PREFIXED,
    // 0xA8
    UNDEFINED_PREFIXED,
    // 0xA9
    UNDEFINED_PREFIXED,
    // 0xAA
    UNDEFINED_PREFIXED,
    // 0xAB
    UNDEFINED_PREFIXED,
    // 0xAC
    OpcodeMetadata {
        mnemonic: "CMPY",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xAD
    UNDEFINED_PREFIXED,
    // 0xAE
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xAF
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xB0
    UNDEFINED_PREFIXED,
    // 0xB1
    UNDEFINED_PREFIXED,
    // 0xB2
    UNDEFINED_PREFIXED,
    // 0xB3
    OpcodeMetadata {
        mnemonic: "CMPD",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 8,
        size_bytes: 4,
        defined: true,
    },
    // 0xB4
    UNDEFINED_PREFIXED,
    // 0xB5
    UNDEFINED_PREFIXED,
    // 0xB6
    UNDEFINED_PREFIXED,
    // 0xB7
    UNDEFINED_PREFIXED,
    // 0xB8
    UNDEFINED_PREFIXED,
    // 0xB9
    UNDEFINED_PREFIXED,
    // 0xBA
    UNDEFINED_PREFIXED,
    // 0xBB
    UNDEFINED_PREFIXED,
    // 0xBC
    OpcodeMetadata {
        mnemonic: "CMPY",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 8,
        size_bytes: 4,
        defined: true,
    },
    // 0xBD
    UNDEFINED_PREFIXED,
    // 0xBE
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 4,
        defined: true,
    },
    // 0xBF
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 4,
        defined: true,
    },
    // 0xC0
    UNDEFINED_PREFIXED,
    // 0xC1
    UNDEFINED_PREFIXED,
    // 0xC2
    UNDEFINED_PREFIXED,
    // 0xC3
    UNDEFINED_PREFIXED,
    // 0xC4
    UNDEFINED_PREFIXED,
    // 0xC5
    UNDEFINED_PREFIXED,
    // 0xC6
    UNDEFINED_PREFIXED,
    // 0xC7
    UNDEFINED_PREFIXED,
    // 0xC8
    UNDEFINED_PREFIXED,
    // 0xC9
    UNDEFINED_PREFIXED,
    // 0xCA
    UNDEFINED_PREFIXED,
    // 0xCB
    UNDEFINED_PREFIXED,
    // 0xCC
    UNDEFINED_PREFIXED,
    // 0xCD
    UNDEFINED_PREFIXED,
    // 0xCE
    OpcodeMetadata {
        mnemonic: "LDS",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 4,
        size_bytes: 4,
        defined: true,
    },
    // 0xCF
    UNDEFINED_PREFIXED,
    // 0xD0
    UNDEFINED_PREFIXED,
    // 0xD1
    UNDEFINED_PREFIXED,
    // 0xD2
    UNDEFINED_PREFIXED,
    // 0xD3
    UNDEFINED_PREFIXED,
    // 0xD4
    UNDEFINED_PREFIXED,
    // 0xD5
    UNDEFINED_PREFIXED,
    // 0xD6
    UNDEFINED_PREFIXED,
    // 0xD7
    UNDEFINED_PREFIXED,
    // 0xD8
    UNDEFINED_PREFIXED,
    // 0xD9
    UNDEFINED_PREFIXED,
    // 0xDA
    UNDEFINED_PREFIXED,
    // 0xDB
    UNDEFINED_PREFIXED,
    // 0xDC
    UNDEFINED_PREFIXED,
    // 0xDD
    UNDEFINED_PREFIXED,
    // 0xDE
    OpcodeMetadata {
        mnemonic: "LDS",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xDF
    OpcodeMetadata {
        mnemonic: "STS",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xE0
    UNDEFINED_PREFIXED,
    // 0xE1
    UNDEFINED_PREFIXED,
    // 0xE2
    UNDEFINED_PREFIXED,
    // 0xE3
    UNDEFINED_PREFIXED,
    // 0xE4
    UNDEFINED_PREFIXED,
    // 0xE5
    UNDEFINED_PREFIXED,
    // 0xE6
    UNDEFINED_PREFIXED,
    // 0xE7
    UNDEFINED_PREFIXED,
    // 0xE8
    UNDEFINED_PREFIXED,
    // 0xE9
    UNDEFINED_PREFIXED,
    // 0xEA
    UNDEFINED_PREFIXED,
    // 0xEB
    UNDEFINED_PREFIXED,
    // 0xEC
    UNDEFINED_PREFIXED,
    // 0xED
    UNDEFINED_PREFIXED,
    // 0xEE
    OpcodeMetadata {
        mnemonic: "LDS",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xEF
    OpcodeMetadata {
        mnemonic: "STS",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 6,
        size_bytes: 3,
        defined: true,
    },
    // 0xF0
    UNDEFINED_PREFIXED,
    // 0xF1
    UNDEFINED_PREFIXED,
    // 0xF2
    UNDEFINED_PREFIXED,
    // 0xF3
    UNDEFINED_PREFIXED,
    // 0xF4
    UNDEFINED_PREFIXED,
    // 0xF5
    UNDEFINED_PREFIXED,
    // 0xF6
    UNDEFINED_PREFIXED,
    // 0xF7
    UNDEFINED_PREFIXED,
    // 0xF8
    UNDEFINED_PREFIXED,
    // 0xF9
    UNDEFINED_PREFIXED,
    // 0xFA
    UNDEFINED_PREFIXED,
    // 0xFB
    UNDEFINED_PREFIXED,
    // 0xFC
    UNDEFINED_PREFIXED,
    // 0xFD
    UNDEFINED_PREFIXED,
    // 0xFE
    OpcodeMetadata {
        mnemonic: "LDS",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 4,
        defined: true,
    },
    // 0xFF
    OpcodeMetadata {
        mnemonic: "STS",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 7,
        size_bytes: 4,
        defined: true,
    },
];

/// Page-3 opcode table, indexed by the byte following a 0x11 prefix.
pub const PAGE3_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    UNDEFINED_PREFIXED,
    // 0x01
    UNDEFINED_PREFIXED,
    // 0x02
    UNDEFINED_PREFIXED,
    // 0x03
    UNDEFINED_PREFIXED,
    // 0x04
    UNDEFINED_PREFIXED,
    // 0x05
    UNDEFINED_PREFIXED,
    // 0x06
    UNDEFINED_PREFIXED,
    // 0x07
    UNDEFINED_PREFIXED,
    // 0x08
    UNDEFINED_PREFIXED,
    // 0x09
    UNDEFINED_PREFIXED,
    // 0x0A
    UNDEFINED_PREFIXED,
    // 0x0B
    UNDEFINED_PREFIXED,
    // 0x0C
    UNDEFINED_PREFIXED,
    // 0x0D
    UNDEFINED_PREFIXED,
    // 0x0E
    UNDEFINED_PREFIXED,
    // 0x0F
    UNDEFINED_PREFIXED,
    // 0x10
    UNDEFINED_PREFIXED,
    // 0x11
    UNDEFINED_PREFIXED,
    // 0x12
    UNDEFINED_PREFIXED,
    // 0x13
    UNDEFINED_PREFIXED,
    // 0x14
    UNDEFINED_PREFIXED,
    // 0x15
    UNDEFINED_PREFIXED,
    // 0x16
    UNDEFINED_PREFIXED,
    // 0x17
    UNDEFINED_PREFIXED,
    // 0x18
    UNDEFINED_PREFIXED,
    // 0x19
    UNDEFINED_PREFIXED,
    // 0x1A
    UNDEFINED_PREFIXED,
    // 0x1B
    UNDEFINED_PREFIXED,
    // 0x1C
    UNDEFINED_PREFIXED,
    // 0x1D
    UNDEFINED_PREFIXED,
    // 0x1E
    UNDEFINED_PREFIXED,
    // 0x1F
    UNDEFINED_PREFIXED,
    // 0x20
    UNDEFINED_PREFIXED,
    // 0x21
    UNDEFINED_PREFIXED,
    // 0x22
    UNDEFINED_PREFIXED,
    // 0x23
    UNDEFINED_PREFIXED,
    // 0x24
    UNDEFINED_PREFIXED,
    // 0x25
    UNDEFINED_PREFIXED,
    // 0x26
    UNDEFINED_PREFIXED,
    // 0x27
    UNDEFINED_PREFIXED,
    // 0x28
    UNDEFINED_PREFIXED,
    // 0x29
    UNDEFINED_PREFIXED,
    // 0x2A
    UNDEFINED_PREFIXED,
    // 0x2B
    UNDEFINED_PREFIXED,
    // 0x2C
    UNDEFINED_PREFIXED,
    // 0x2D
    UNDEFINED_PREFIXED,
    // 0x2E
    UNDEFINED_PREFIXED,
    // 0x2F
    UNDEFINED_PREFIXED,
    // 0x30
    UNDEFINED_PREFIXED,
    // 0x31
    UNDEFINED_PREFIXED,
    // 0x32
    UNDEFINED_PREFIXED,
    // 0x33
    UNDEFINED_PREFIXED,
    // 0x34
    UNDEFINED_PREFIXED,
    // 0x35
    UNDEFINED_PREFIXED,
    // 0x36
    UNDEFINED_PREFIXED,
    // 0x37
    UNDEFINED_PREFIXED,
    // 0x38
    UNDEFINED_PREFIXED,
    // 0x39
    UNDEFINED_PREFIXED,
    // 0x3A
    UNDEFINED_PREFIXED,
    // 0x3B
    UNDEFINED_PREFIXED,
    // 0x3C
    UNDEFINED_PREFIXED,
    // 0x3D
    UNDEFINED_PREFIXED,
    // 0x3E
    UNDEFINED_PREFIXED,
    // 0x3F
    OpcodeMetadata {
        mnemonic: "SWI3",
        addressing_mode: AddressingMode::Inherent,
        base_cycles: 20,
        size_bytes: 2,
        defined: true,
    },
    // 0x40
    UNDEFINED_PREFIXED,
    // 0x41
    UNDEFINED_PREFIXED,
    // 0x42
    UNDEFINED_PREFIXED,
    // 0x43
    UNDEFINED_PREFIXED,
    // 0x44
    UNDEFINED_PREFIXED,
    // 0x45
    UNDEFINED_PREFIXED,
    // 0x46
    UNDEFINED_PREFIXED,
    // 0x47
    UNDEFINED_PREFIXED,
    // 0x48
    UNDEFINED_PREFIXED,
    // 0x49
    UNDEFINED_PREFIXED,
    // 0x4A
    UNDEFINED_PREFIXED,
    // 0x4B
    UNDEFINED_PREFIXED,
    // 0x4C
    UNDEFINED_PREFIXED,
    // 0x4D
    UNDEFINED_PREFIXED,
    // 0x4E
    UNDEFINED_PREFIXED,
    // 0x4F
    UNDEFINED_PREFIXED,
    // 0x50
    UNDEFINED_PREFIXED,
    // 0x51
    UNDEFINED_PREFIXED,
    // 0x52
    UNDEFINED_PREFIXED,
    // 0x53
    UNDEFINED_PREFIXED,
    // 0x54
    UNDEFINED_PREFIXED,
    // 0x55
    UNDEFINED_PREFIXED,
    // 0x56
    UNDEFINED_PREFIXED,
    // 0x57
    UNDEFINED_PREFIXED,
    // 0x58
    UNDEFINED_PREFIXED,
    // 0x59
    UNDEFINED_PREFIXED,
    // 0x5A
    UNDEFINED_PREFIXED,
    // 0x5B
    UNDEFINED_PREFIXED,
    // 0x5C
    UNDEFINED_PREFIXED,
    // 0x5D
    UNDEFINED_PREFIXED,
    // 0x5E
    UNDEFINED_PREFIXED,
    // 0x5F
    UNDEFINED_PREFIXED,
    // 0x60
    UNDEFINED_PREFIXED,
    // 0x61
    UNDEFINED_PREFIXED,
    // 0x62
    UNDEFINED_PREFIXED,
    // 0x63
    UNDEFINED_PREFIXED,
    // 0x64
    UNDEFINED_PREFIXED,
    // 0x65
    UNDEFINED_PREFIXED,
    // 0x66
    UNDEFINED_PREFIXED,
    // 0x67
    UNDEFINED_PREFIXED,
    // 0x68
    UNDEFINED_PREFIXED,
    // 0x69
    UNDEFINED_PREFIXED,
    // 0x6A
    UNDEFINED_PREFIXED,
    // 0x6B
    UNDEFINED_PREFIXED,
    // 0x6C
    UNDEFINED_PREFIXED,
    // 0x6D
    UNDEFINED_PREFIXED,
    // 0x6E
    UNDEFINED_PREFIXED,
    // 0x6F
    UNDEFINED_PREFIXED,
    // 0x70
    UNDEFINED_PREFIXED,
    // 0x71
    UNDEFINED_PREFIXED,
    // 0x72
    UNDEFINED_PREFIXED,
    // 0x73
    UNDEFINED_PREFIXED,
    // 0x74
    UNDEFINED_PREFIXED,
    // 0x75
    UNDEFINED_PREFIXED,
    // 0x76
    UNDEFINED_PREFIXED,
    // 0x77
    UNDEFINED_PREFIXED,
    // 0x78
    UNDEFINED_PREFIXED,
    // 0x79
    UNDEFINED_PREFIXED,
    // 0x7A
    UNDEFINED_PREFIXED,
    // 0x7B
    UNDEFINED_PREFIXED,
    // 0x7C
    UNDEFINED_PREFIXED,
    // 0x7D
    UNDEFINED_PREFIXED,
    // 0x7E
    UNDEFINED_PREFIXED,
    // 0x7F
    UNDEFINED_PREFIXED,
    // 0x80
    UNDEFINED_PREFIXED,
    // 0x81
    UNDEFINED_PREFIXED,
    // 0x82
    UNDEFINED_PREFIXED,
    // 0x83
    OpcodeMetadata {
        mnemonic: "CMPU",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x84
    UNDEFINED_PREFIXED,
    // 0x85
    UNDEFINED_PREFIXED,
    // 0x86
    UNDEFINED_PREFIXED,
    // 0x87
    UNDEFINED_PREFIXED,
    // 0x88
    UNDEFINED_PREFIXED,
    // 0x89
    UNDEFINED_PREFIXED,
    // 0x8A
    UNDEFINED_PREFIXED,
    // 0x8B
    UNDEFINED_PREFIXED,
    // 0x8C
    OpcodeMetadata {
        mnemonic: "CMPS",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 5,
        size_bytes: 4,
        defined: true,
    },
    // 0x8D
    UNDEFINED_PREFIXED,
    // 0x8E
    UNDEFINED_PREFIXED,
    // 0x8F
    UNDEFINED_PREFIXED,
    // 0x90
    UNDEFINED_PREFIXED,
    // 0x91
    UNDEFINED_PREFIXED,
    // 0x92
    UNDEFINED_PREFIXED,
    // 0x93
    OpcodeMetadata {
        mnemonic: "CMPU",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x94
    UNDEFINED_PREFIXED,
    // 0x95
    UNDEFINED_PREFIXED,
    // 0x96
    UNDEFINED_PREFIXED,
    // 0x97
    UNDEFINED_PREFIXED,
    // 0x98
    UNDEFINED_PREFIXED,
    // 0x99
    UNDEFINED_PREFIXED,
    // 0x9A
    UNDEFINED_PREFIXED,
    // 0x9B
    UNDEFINED_PREFIXED,
    // 0x9C
    OpcodeMetadata {
        mnemonic: "CMPS",
        addressing_mode: AddressingMode::Direct,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0x9D
    UNDEFINED_PREFIXED,
    // 0x9E
    UNDEFINED_PREFIXED,
    // 0x9F
    UNDEFINED_PREFIXED,
    // 0xA0
    UNDEFINED_PREFIXED,
    // 0xA1
    UNDEFINED_PREFIXED,
    // 0xA2
    UNDEFINED_PREFIXED,
    // 0xA3
    OpcodeMetadata {
        mnemonic: "CMPU",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xA4
    UNDEFINED_PREFIXED,
    // 0xA5
    UNDEFINED_PREFIXED,
    // 0xA6
    UNDEFINED_PREFIXED,
    // 0xA7
    UNDEFINED_PREFIXED,
    // 0xA8
    UNDEFINED_PREFIXED,
    // 0xA9
    UNDEFINED_PREFIXED,
    // 0xAA
    UNDEFINED_PREFIXED,
    // 0xAB
    UNDEFINED_PREFIXED,
    // 0xAC
    OpcodeMetadata {
        mnemonic: "CMPS",
        addressing_mode: AddressingMode::Indexed,
        base_cycles: 7,
        size_bytes: 3,
        defined: true,
    },
    // 0xAD
    UNDEFINED_PREFIXED,
    // 0xAE
    UNDEFINED_PREFIXED,
    // 0xAF
    UNDEFINED_PREFIXED,
    // 0xB0
    UNDEFINED_PREFIXED,
    // 0xB1
    UNDEFINED_PREFIXED,
    // 0xB2
    UNDEFINED_PREFIXED,
    // 0xB3
    OpcodeMetadata {
        mnemonic: "CMPU",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 8,
        size_bytes: 4,
        defined: true,
    },
    // 0xB4
    UNDEFINED_PREFIXED,
    // 0xB5
    UNDEFINED_PREFIXED,
    // 0xB6
    UNDEFINED_PREFIXED,
    // 0xB7
    UNDEFINED_PREFIXED,
    // 0xB8
    UNDEFINED_PREFIXED,
    // 0xB9
    UNDEFINED_PREFIXED,
    // 0xBA
    UNDEFINED_PREFIXED,
    // 0xBB
    UNDEFINED_PREFIXED,
    // 0xBC
    OpcodeMetadata {
        mnemonic: "CMPS",
        addressing_mode: AddressingMode::Extended,
        base_cycles: 8,
        size_bytes: 4,
        defined: true,
    },
    // 0xBD
    UNDEFINED_PREFIXED,
    // 0xBE
    UNDEFINED_PREFIXED,
    // 0xBF
    UNDEFINED_PREFIXED,
    // 0xC0
    UNDEFINED_PREFIXED,
    // 0xC1
    UNDEFINED_PREFIXED,
    // 0xC2
    UNDEFINED_PREFIXED,
    // 0xC3
    UNDEFINED_PREFIXED,
    // 0xC4
    UNDEFINED_PREFIXED,
    // 0xC5
    UNDEFINED_PREFIXED,
    // 0xC6
    UNDEFINED_PREFIXED,
    // 0xC7
    UNDEFINED_PREFIXED,
    // 0xC8
    UNDEFINED_PREFIXED,
    // 0xC9
    UNDEFINED_PREFIXED,
    // 0xCA
    UNDEFINED_PREFIXED,
    // 0xCB
    UNDEFINED_PREFIXED,
    // 0xCC
    UNDEFINED_PREFIXED,
    // 0xCD
    UNDEFINED_PREFIXED,
    // 0xCE
    UNDEFINED_PREFIXED,
    // 0xCF
    UNDEFINED_PREFIXED,
    // 0xD0
    UNDEFINED_PREFIXED,
    // 0xD1
    UNDEFINED_PREFIXED,
    // 0xD2
    UNDEFINED_PREFIXED,
    // 0xD3
    UNDEFINED_PREFIXED,
    // 0xD4
    UNDEFINED_PREFIXED,
    // 0xD5
    UNDEFINED_PREFIXED,
    // 0xD6
    UNDEFINED_PREFIXED,
    // 0xD7
    UNDEFINED_PREFIXED,
    // 0xD8
    UNDEFINED_PREFIXED,
    // 0xD9
    UNDEFINED_PREFIXED,
    // 0xDA
    UNDEFINED_PREFIXED,
    // 0xDB
    UNDEFINED_PREFIXED,
    // 0xDC
    UNDEFINED_PREFIXED,
    // 0xDD
    UNDEFINED_PREFIXED,
    // 0xDE
    UNDEFINED_PREFIXED,
    // 0xDF
    UNDEFINED_PREFIXED,
    // 0xE0
    UNDEFINED_PREFIXED,
    // 0xE1
    UNDEFINED_PREFIXED,
    // 0xE2
    UNDEFINED_PREFIXED,
    // 0xE3
    UNDEFINED_PREFIXED,
    // 0xE4
    UNDEFINED_PREFIXED,
    // 0xE5
    UNDEFINED_PREFIXED,
    // 0xE6
    UNDEFINED_PREFIXED,
    // 0xE7
    UNDEFINED_PREFIXED,
    // 0xE8
    UNDEFINED_PREFIXED,
    // 0xE9
    UNDEFINED_PREFIXED,
    // 0xEA
    UNDEFINED_PREFIXED,
    // 0xEB
    UNDEFINED_PREFIXED,
    // 0xEC
    UNDEFINED_PREFIXED,
    // 0xED
    UNDEFINED_PREFIXED,
    // 0xEE
    UNDEFINED_PREFIXED,
    // 0xEF
    UNDEFINED_PREFIXED,
    // 0xF0
    UNDEFINED_PREFIXED,
    // 0xF1
    UNDEFINED_PREFIXED,
    // 0xF2
    UNDEFINED_PREFIXED,
    // 0xF3
    UNDEFINED_PREFIXED,
    // 0xF4
    UNDEFINED_PREFIXED,
    // 0xF5
    UNDEFINED_PREFIXED,
    // 0xF6
    UNDEFINED_PREFIXED,
    // 0xF7
    UNDEFINED_PREFIXED,
    // 0xF8
    UNDEFINED_PREFIXED,
    // 0xF9
    UNDEFINED_PREFIXED,
    // 0xFA
    UNDEFINED_PREFIXED,
    // 0xFB
    UNDEFINED_PREFIXED,
    // 0xFC
    UNDEFINED_PREFIXED,
    // 0xFD
    UNDEFINED_PREFIXED,
    // 0xFE
    UNDEFINED_PREFIXED,
    // 0xFF
    UNDEFINED_PREFIXED,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn defined_count(table: &[OpcodeMetadata; 256]) -> usize {
        table.iter().filter(|m| m.defined).count()
    }

    #[test]
    fn test_defined_opcode_counts() {
        assert_eq!(defined_count(&PAGE1_TABLE), 223);
        assert_eq!(defined_count(&PAGE2_TABLE), 38);
        assert_eq!(defined_count(&PAGE3_TABLE), 9);
    }

    #[test]
    fn test_undefined_entries_are_consistent() {
        for page in [OpcodePage::Page1, OpcodePage::Page2, OpcodePage::Page3] {
            for meta in page.table().iter().filter(|m| !m.defined) {
                assert_eq!(meta.mnemonic, "???");
                assert_eq!(meta.base_cycles, 0);
            }
        }
    }

    #[test]
    fn test_defined_entries_have_cycles() {
        for (op, meta) in PAGE1_TABLE.iter().enumerate() {
            if meta.defined && op != 0x10 && op != 0x11 {
                assert!(meta.base_cycles >= 2, "page-1 0x{:02X}", op);
            }
        }
        for table in [&PAGE2_TABLE, &PAGE3_TABLE] {
            for meta in table.iter().filter(|m| m.defined) {
                assert!(meta.base_cycles >= 4);
                assert!(meta.size_bytes >= 2);
            }
        }
    }

    #[test]
    fn test_prefixed_sizes_include_prefix() {
        assert_eq!(PAGE2_TABLE[0x8E].size_bytes, 4); // LDY #nnnn
        assert_eq!(PAGE2_TABLE[0x9E].size_bytes, 3); // LDY <nn
        assert_eq!(PAGE3_TABLE[0x3F].size_bytes, 2); // SWI3
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(PAGE1_TABLE[0x3D].mnemonic, "MUL");
        assert_eq!(PAGE1_TABLE[0x3D].base_cycles, 11);
        assert_eq!(PAGE1_TABLE[0x7E].mnemonic, "JMP");
        assert_eq!(PAGE1_TABLE[0x7E].base_cycles, 4);
        assert_eq!(PAGE1_TABLE[0x8D].addressing_mode, AddressingMode::Relative);
        assert_eq!(PAGE2_TABLE[0x21].mnemonic, "LBRN");
        assert!(!PAGE2_TABLE[0x20].defined);
        assert!(!PAGE1_TABLE[0x87].defined); // STA immediate
    }
}
