//! 8-bit ALU family: `ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,*`, `INC`/`DEC r` and
//! `(HL)`, plus the flag-instruction odds and ends (`DAA`, `CPL`, `SCF`,
//! `CCF`) that piggyback on the same opcode rows.

use super::super::macros::{alu_a_hlp, alu_a_r};
use super::super::Cpu;
use crate::bus::Bus;
use crate::constants::{FLAG_C, FLAG_H, FLAG_N};

macro_rules! alu_row {
    ($op:ident, $b:ident, $c:ident, $d:ident, $e:ident, $h:ident, $l:ident, $hlp:ident, $a:ident) => {
        alu_a_r!($b, $op, b);
        alu_a_r!($c, $op, c);
        alu_a_r!($d, $op, d);
        alu_a_r!($e, $op, e);
        alu_a_r!($h, $op, h);
        alu_a_r!($l, $op, l);
        alu_a_hlp!($hlp, $op);
        alu_a_r!($a, $op, a);
    };
    ($op:ident, carry, $b:ident, $c:ident, $d:ident, $e:ident, $h:ident, $l:ident, $hlp:ident, $a:ident) => {
        alu_a_r!($b, $op, b, carry);
        alu_a_r!($c, $op, c, carry);
        alu_a_r!($d, $op, d, carry);
        alu_a_r!($e, $op, e, carry);
        alu_a_r!($h, $op, h, carry);
        alu_a_r!($l, $op, l, carry);
        alu_a_hlp!($hlp, $op, carry);
        alu_a_r!($a, $op, a, carry);
    };
}

alu_row!(add_a, add_a_b, add_a_c, add_a_d, add_a_e, add_a_h, add_a_l, add_a_hlp, add_a_a);
alu_row!(add_a, carry, adc_a_b, adc_a_c, adc_a_d, adc_a_e, adc_a_h, adc_a_l, adc_a_hlp, adc_a_a);
alu_row!(sub_a, sub_a_b, sub_a_c, sub_a_d, sub_a_e, sub_a_h, sub_a_l, sub_a_hlp, sub_a_a);
alu_row!(sub_a, carry, sbc_a_b, sbc_a_c, sbc_a_d, sbc_a_e, sbc_a_h, sbc_a_l, sbc_a_hlp, sbc_a_a);
alu_row!(and_a, and_a_b, and_a_c, and_a_d, and_a_e, and_a_h, and_a_l, and_a_hlp, and_a_a);
alu_row!(xor_a, xor_a_b, xor_a_c, xor_a_d, xor_a_e, xor_a_h, xor_a_l, xor_a_hlp, xor_a_a);
alu_row!(or_a, or_a_b, or_a_c, or_a_d, or_a_e, or_a_h, or_a_l, or_a_hlp, or_a_a);
alu_row!(cp_a, cp_a_b, cp_a_c, cp_a_d, cp_a_e, cp_a_h, cp_a_l, cp_a_hlp, cp_a_a);

macro_rules! alu_a_n {
    ($name:ident, $op:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = cpu.fetch_u8(bus);
            cpu.$op(value, false);
            0
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = cpu.fetch_u8(bus);
            cpu.$op(value, true);
            0
        }
    };
}

alu_a_n!(add_a_n, add_a);
alu_a_n!(adc_a_n, add_a, carry);
alu_a_n!(sub_a_n, sub_a);
alu_a_n!(sbc_a_n, sub_a, carry);
alu_a_n!(and_a_n, and_a);
alu_a_n!(xor_a_n, xor_a);
alu_a_n!(or_a_n, or_a);
alu_a_n!(cp_a_n, cp_a);

macro_rules! inc_r {
    ($name:ident, $reg:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().$reg;
            let result = cpu.inc_u8(value);
            cpu.reg_mut().$reg = result;
            0
        }
    };
}

macro_rules! dec_r {
    ($name:ident, $reg:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().$reg;
            let result = cpu.dec_u8(value);
            cpu.reg_mut().$reg = result;
            0
        }
    };
}

inc_r!(inc_b, b);
inc_r!(inc_c, c);
inc_r!(inc_d, d);
inc_r!(inc_e, e);
inc_r!(inc_h, h);
inc_r!(inc_l, l);
inc_r!(inc_a, a);

dec_r!(dec_b, b);
dec_r!(dec_c, c);
dec_r!(dec_d, d);
dec_r!(dec_e, e);
dec_r!(dec_h, h);
dec_r!(dec_l, l);
dec_r!(dec_a, a);

/// `INC (HL)`.
pub(in crate::cpu) fn inc_hlp(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.reg().hl();
    let value = bus.read_byte(addr);
    let result = cpu.inc_u8(value);
    bus.write_byte(addr, result);
    0
}

/// `DEC (HL)`.
pub(in crate::cpu) fn dec_hlp(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.reg().hl();
    let value = bus.read_byte(addr);
    let result = cpu.dec_u8(value);
    bus.write_byte(addr, result);
    0
}

/// `DAA`.
pub(in crate::cpu) fn daa(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    cpu.daa();
    0
}

/// `CPL` — complements `A`; sets `N` and `H`, leaves `Z`/`C` untouched.
pub(in crate::cpu) fn cpl(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let value = !cpu.reg().a;
    cpu.reg_mut().a = value;
    cpu.reg_mut().set_flag(FLAG_N | FLAG_H, true);
    0
}

/// `SCF` — sets `C`; clears `N`/`H`; `Z` untouched.
pub(in crate::cpu) fn scf(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    cpu.reg_mut().set_flag(FLAG_N | FLAG_H, false);
    cpu.reg_mut().set_flag(FLAG_C, true);
    0
}

/// `CCF` — complements `C`; clears `N`/`H`; `Z` untouched.
pub(in crate::cpu) fn ccf(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let carry = cpu.reg().flag_c();
    cpu.reg_mut().set_flag(FLAG_N | FLAG_H, false);
    cpu.reg_mut().set_flag(FLAG_C, !carry);
    0
}
