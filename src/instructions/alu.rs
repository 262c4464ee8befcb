//! # ALU (Arithmetic Logic Unit) Operations
//!
//! Pure operations over operands and the condition codes, plus the executors
//! that feed them from the addressing modes:
//!
//! - 8-bit: SUB, CMP, SBC, AND, BIT, EOR, ADC, OR, ADD
//! - 16-bit: SUBD/ADDD, CMPD/CMPX/CMPY/CMPU/CMPS
//! - Unary: NEG, COM, LSR, ROR, ASR, LSL, ROL, DEC, INC, TST, CLR
//! - Inherent: MUL, DAA, SEX, ABX
//!
//! Overflow for add/subtract is derived from the sign bits of both operands
//! and the result. H is only written by 8-bit ADD/ADC.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::registers::{Accumulator, ConditionCodes, Register};
use crate::Fault;

/// Two-operand 8-bit operation producing a result.
pub(crate) type BinaryOp = fn(&mut ConditionCodes, u8, u8) -> u8;

/// Two-operand 8-bit operation that only sets flags.
pub(crate) type TestOp = fn(&mut ConditionCodes, u8, u8);

/// Two-operand 16-bit operation producing a result.
pub(crate) type WideOp = fn(&mut ConditionCodes, u16, u16) -> u16;

/// Single-operand 8-bit operation.
pub(crate) type UnaryOp = fn(&mut ConditionCodes, u8) -> u8;

// ========== 8-bit binary ==========

pub(crate) fn add(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    add_with_carry(cc, a, b, 0)
}

pub(crate) fn adc(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    let carry = cc.carry as u8;
    add_with_carry(cc, a, b, carry)
}

fn add_with_carry(cc: &mut ConditionCodes, a: u8, b: u8, carry: u8) -> u8 {
    let sum = a as u16 + b as u16 + carry as u16;
    let result = sum as u8;
    cc.half_carry = (a ^ b ^ result) & 0x10 != 0;
    cc.overflow = (a ^ result) & (b ^ result) & 0x80 != 0;
    cc.carry = sum > 0xFF;
    cc.set_nz8(result);
    result
}

pub(crate) fn sub(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    subtract_with_borrow(cc, a, b, 0)
}

pub(crate) fn sbc(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    let borrow = cc.carry as u8;
    subtract_with_borrow(cc, a, b, borrow)
}

fn subtract_with_borrow(cc: &mut ConditionCodes, a: u8, b: u8, borrow: u8) -> u8 {
    let difference = (a as u16)
        .wrapping_sub(b as u16)
        .wrapping_sub(borrow as u16);
    let result = difference as u8;
    cc.overflow = (a ^ b) & (a ^ result) & 0x80 != 0;
    cc.carry = difference & 0x100 != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn cmp(cc: &mut ConditionCodes, a: u8, b: u8) {
    sub(cc, a, b);
}

pub(crate) fn and(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    load8(cc, a & b)
}

pub(crate) fn bit(cc: &mut ConditionCodes, a: u8, b: u8) {
    and(cc, a, b);
}

pub(crate) fn eor(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    load8(cc, a ^ b)
}

pub(crate) fn or(cc: &mut ConditionCodes, a: u8, b: u8) -> u8 {
    load8(cc, a | b)
}

/// Flag update shared by 8-bit loads, stores and logic ops: N, Z, V=0.
pub(crate) fn load8(cc: &mut ConditionCodes, value: u8) -> u8 {
    cc.set_nz8(value);
    cc.overflow = false;
    value
}

// ========== 16-bit ==========

pub(crate) fn add16(cc: &mut ConditionCodes, a: u16, b: u16) -> u16 {
    let sum = a as u32 + b as u32;
    let result = sum as u16;
    cc.overflow = (a ^ result) & (b ^ result) & 0x8000 != 0;
    cc.carry = sum > 0xFFFF;
    cc.set_nz16(result);
    result
}

pub(crate) fn sub16(cc: &mut ConditionCodes, a: u16, b: u16) -> u16 {
    let result = a.wrapping_sub(b);
    cc.overflow = (a ^ b) & (a ^ result) & 0x8000 != 0;
    cc.carry = b > a;
    cc.set_nz16(result);
    result
}

pub(crate) fn load16(cc: &mut ConditionCodes, value: u16) -> u16 {
    cc.set_nz16(value);
    cc.overflow = false;
    value
}

// ========== Unary ==========

pub(crate) fn neg(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = 0u8.wrapping_sub(value);
    cc.overflow = value == 0x80;
    cc.carry = value != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn com(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = !value;
    cc.overflow = false;
    cc.carry = true;
    cc.set_nz8(result);
    result
}

pub(crate) fn lsr(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = value >> 1;
    cc.carry = value & 0x01 != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn ror(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = (value >> 1) | ((cc.carry as u8) << 7);
    cc.carry = value & 0x01 != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn asr(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = (value >> 1) | (value & 0x80);
    cc.carry = value & 0x01 != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn lsl(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = value << 1;
    cc.carry = value & 0x80 != 0;
    cc.overflow = (value ^ (value << 1)) & 0x80 != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn rol(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = (value << 1) | cc.carry as u8;
    cc.carry = value & 0x80 != 0;
    cc.overflow = (value ^ (value << 1)) & 0x80 != 0;
    cc.set_nz8(result);
    result
}

pub(crate) fn dec(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    cc.overflow = value == 0x80;
    cc.set_nz8(result);
    result
}

pub(crate) fn inc(cc: &mut ConditionCodes, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    cc.overflow = value == 0x7F;
    cc.set_nz8(result);
    result
}

pub(crate) fn tst(cc: &mut ConditionCodes, value: u8) {
    load8(cc, value);
}

pub(crate) fn clr(cc: &mut ConditionCodes, _value: u8) -> u8 {
    cc.negative = false;
    cc.zero = true;
    cc.overflow = false;
    cc.carry = false;
    0
}

// ========== Inherent arithmetic ==========

/// Unsigned A * B. C mirrors bit 7 of the low byte so the product can be
/// rounded with ADCA #0.
pub(crate) fn mul(cc: &mut ConditionCodes, a: u8, b: u8) -> u16 {
    let product = a as u16 * b as u16;
    cc.zero = product == 0;
    cc.carry = product & 0x80 != 0;
    product
}

/// Decimal-adjusts A after a BCD addition.
pub(crate) fn daa(cc: &mut ConditionCodes, a: u8) -> u8 {
    let high = a & 0xF0;
    let low = a & 0x0F;
    let mut correction = 0u8;
    if cc.carry || high > 0x90 || (high > 0x80 && low > 0x09) {
        correction |= 0x60;
    }
    if cc.half_carry || low > 0x09 {
        correction |= 0x06;
    }
    let sum = a as u16 + correction as u16;
    let result = sum as u8;
    cc.carry |= sum > 0xFF;
    cc.overflow = false;
    cc.set_nz8(result);
    result
}

/// Sign-extends B into D.
pub(crate) fn sex(cc: &mut ConditionCodes, b: u8) -> u16 {
    let result = b as i8 as i16 as u16;
    cc.overflow = false;
    cc.set_nz16(result);
    result
}

// ========== Executors ==========

/// `acc = op(acc, operand)`
pub(crate) fn execute_binary8(
    cpu: &mut Cpu,
    acc: Accumulator,
    mode: AddressingMode,
    op: BinaryOp,
) -> Result<(), Fault> {
    let operand = cpu.read_operand8(mode)?;
    let value = cpu.regs.accumulator(acc);
    let result = op(&mut cpu.regs.cc, value, operand);
    cpu.regs.set_accumulator(acc, result);
    Ok(())
}

/// CMP/BIT: flags only.
pub(crate) fn execute_test8(
    cpu: &mut Cpu,
    acc: Accumulator,
    mode: AddressingMode,
    op: TestOp,
) -> Result<(), Fault> {
    let operand = cpu.read_operand8(mode)?;
    let value = cpu.regs.accumulator(acc);
    op(&mut cpu.regs.cc, value, operand);
    Ok(())
}

/// SUBD/ADDD
pub(crate) fn execute_binary16(
    cpu: &mut Cpu,
    reg: Register,
    mode: AddressingMode,
    op: WideOp,
) -> Result<(), Fault> {
    let operand = cpu.read_operand16(mode)?;
    let value = cpu.regs.get(reg);
    let result = op(&mut cpu.regs.cc, value, operand);
    cpu.regs.set(reg, result);
    Ok(())
}

/// CMPD/CMPX/CMPY/CMPU/CMPS
pub(crate) fn execute_compare16(
    cpu: &mut Cpu,
    reg: Register,
    mode: AddressingMode,
) -> Result<(), Fault> {
    let operand = cpu.read_operand16(mode)?;
    let value = cpu.regs.get(reg);
    sub16(&mut cpu.regs.cc, value, operand);
    Ok(())
}

pub(crate) fn execute_mul(cpu: &mut Cpu) -> Result<(), Fault> {
    let product = mul(&mut cpu.regs.cc, cpu.regs.a, cpu.regs.b);
    cpu.regs.set_d(product);
    Ok(())
}

pub(crate) fn execute_daa(cpu: &mut Cpu) -> Result<(), Fault> {
    cpu.regs.a = daa(&mut cpu.regs.cc, cpu.regs.a);
    Ok(())
}

pub(crate) fn execute_sex(cpu: &mut Cpu) -> Result<(), Fault> {
    let d = sex(&mut cpu.regs.cc, cpu.regs.b);
    cpu.regs.set_d(d);
    Ok(())
}

/// X += B (unsigned), no flags.
pub(crate) fn execute_abx(cpu: &mut Cpu) -> Result<(), Fault> {
    cpu.regs.x = cpu.regs.x.wrapping_add(cpu.regs.b as u16);
    Ok(())
}
