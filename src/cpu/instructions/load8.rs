//! 8-bit load family: `LD r,r'`, `LD r,n`, the `(HL)` and indirect-register
//! forms, and the `LDH`/auto-increment variants.

use super::super::macros::{ld_hlp_r, ld_r_hlp, ld_r_r};
use super::super::Cpu;
use crate::bus::Bus;

// `LD r, r'` — every register pair except the ones that go through `(HL)`
// or are a no-op (`LD B,B` etc. still exist as distinct opcodes on real
// hardware, so they get real functions too).
macro_rules! ld_r_r_family {
    ($dst:ident => $($name:ident : $src:ident),+ $(,)?) => {
        $( ld_r_r!($name, $dst, $src); )+
    };
}

ld_r_r_family!(b => ld_b_b: b, ld_b_c: c, ld_b_d: d, ld_b_e: e, ld_b_h: h, ld_b_l: l, ld_b_a: a);
ld_r_r_family!(c => ld_c_b: b, ld_c_c: c, ld_c_d: d, ld_c_e: e, ld_c_h: h, ld_c_l: l, ld_c_a: a);
ld_r_r_family!(d => ld_d_b: b, ld_d_c: c, ld_d_d: d, ld_d_e: e, ld_d_h: h, ld_d_l: l, ld_d_a: a);
ld_r_r_family!(e => ld_e_b: b, ld_e_c: c, ld_e_d: d, ld_e_e: e, ld_e_h: h, ld_e_l: l, ld_e_a: a);
ld_r_r_family!(h => ld_h_b: b, ld_h_c: c, ld_h_d: d, ld_h_e: e, ld_h_h: h, ld_h_l: l, ld_h_a: a);
ld_r_r_family!(l => ld_l_b: b, ld_l_c: c, ld_l_d: d, ld_l_e: e, ld_l_h: h, ld_l_l: l, ld_l_a: a);
ld_r_r_family!(a => ld_a_b: b, ld_a_c: c, ld_a_d: d, ld_a_e: e, ld_a_h: h, ld_a_l: l, ld_a_a: a);

ld_r_hlp!(ld_b_hlp, b);
ld_r_hlp!(ld_c_hlp, c);
ld_r_hlp!(ld_d_hlp, d);
ld_r_hlp!(ld_e_hlp, e);
ld_r_hlp!(ld_h_hlp, h);
ld_r_hlp!(ld_l_hlp, l);
ld_r_hlp!(ld_a_hlp, a);

ld_hlp_r!(ld_hlp_b, b);
ld_hlp_r!(ld_hlp_c, c);
ld_hlp_r!(ld_hlp_d, d);
ld_hlp_r!(ld_hlp_e, e);
ld_hlp_r!(ld_hlp_h, h);
ld_hlp_r!(ld_hlp_l, l);
ld_hlp_r!(ld_hlp_a, a);

/// `LD (HL), n`.
pub(in crate::cpu) fn ld_hlp_n(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let value = cpu.fetch_u8(bus);
    bus.write_byte(cpu.reg().hl(), value);
    0
}

macro_rules! ld_r_n {
    ($name:ident, $dst:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = cpu.fetch_u8(bus);
            cpu.reg_mut().$dst = value;
            0
        }
    };
}

ld_r_n!(ld_b_n, b);
ld_r_n!(ld_c_n, c);
ld_r_n!(ld_d_n, d);
ld_r_n!(ld_e_n, e);
ld_r_n!(ld_h_n, h);
ld_r_n!(ld_l_n, l);
ld_r_n!(ld_a_n, a);

/// `LD A, (BC)`.
pub(in crate::cpu) fn ld_a_bcp(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let value = bus.read_byte(cpu.reg().bc());
    cpu.reg_mut().a = value;
    0
}

/// `LD (BC), A`.
pub(in crate::cpu) fn ld_bcp_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    bus.write_byte(cpu.reg().bc(), cpu.reg().a);
    0
}

/// `LD A, (DE)`.
pub(in crate::cpu) fn ld_a_dep(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let value = bus.read_byte(cpu.reg().de());
    cpu.reg_mut().a = value;
    0
}

/// `LD (DE), A`.
pub(in crate::cpu) fn ld_dep_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    bus.write_byte(cpu.reg().de(), cpu.reg().a);
    0
}

/// `LD A, (a16)`.
pub(in crate::cpu) fn ld_a_a16p(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.fetch_u16(bus);
    cpu.reg_mut().a = bus.read_byte(addr);
    0
}

/// `LD (a16), A`.
pub(in crate::cpu) fn ld_a16p_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.fetch_u16(bus);
    bus.write_byte(addr, cpu.reg().a);
    0
}

/// `LD A, (C)` — shorthand for `LD A, ($FF00+C)`.
pub(in crate::cpu) fn ld_a_cp(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = 0xFF00 | cpu.reg().c as u16;
    cpu.reg_mut().a = bus.read_byte(addr);
    0
}

/// `LD (C), A`.
pub(in crate::cpu) fn ld_cp_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = 0xFF00 | cpu.reg().c as u16;
    bus.write_byte(addr, cpu.reg().a);
    0
}

/// `LDH (a8), A`.
pub(in crate::cpu) fn ldh_a8p_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let offset = cpu.fetch_u8(bus);
    bus.write_byte(0xFF00 | offset as u16, cpu.reg().a);
    0
}

/// `LDH A, (a8)`.
pub(in crate::cpu) fn ldh_a_a8p(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let offset = cpu.fetch_u8(bus);
    cpu.reg_mut().a = bus.read_byte(0xFF00 | offset as u16);
    0
}

/// `LD (HL+), A`.
pub(in crate::cpu) fn ld_hlip_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.reg().hl();
    bus.write_byte(addr, cpu.reg().a);
    cpu.reg_mut().set_hl(addr.wrapping_add(1));
    0
}

/// `LD A, (HL+)`.
pub(in crate::cpu) fn ld_a_hlip(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.reg().hl();
    cpu.reg_mut().a = bus.read_byte(addr);
    cpu.reg_mut().set_hl(addr.wrapping_add(1));
    0
}

/// `LD (HL-), A`.
pub(in crate::cpu) fn ld_hldp_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.reg().hl();
    bus.write_byte(addr, cpu.reg().a);
    cpu.reg_mut().set_hl(addr.wrapping_sub(1));
    0
}

/// `LD A, (HL-)`.
pub(in crate::cpu) fn ld_a_hldp(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.reg().hl();
    cpu.reg_mut().a = bus.read_byte(addr);
    cpu.reg_mut().set_hl(addr.wrapping_sub(1));
    0
}
