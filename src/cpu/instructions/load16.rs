//! 16-bit load family: `LD rr,d16`, `LD (a16),SP`, `LD SP,HL`,
//! `LD HL,SP+e8`, and `PUSH`/`POP`.

use super::super::Cpu;
use crate::bus::Bus;

macro_rules! ld_rr_d16 {
    ($name:ident, $set:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = cpu.fetch_u16(bus);
            cpu.reg_mut().$set(value);
            0
        }
    };
}

ld_rr_d16!(ld_bc_d16, set_bc);
ld_rr_d16!(ld_de_d16, set_de);
ld_rr_d16!(ld_hl_d16, set_hl);

/// `LD SP, d16`.
pub(in crate::cpu) fn ld_sp_d16(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let value = cpu.fetch_u16(bus);
    cpu.reg_mut().sp = value;
    0
}

/// `LD (a16), SP` — writes SP little-endian to the two bytes at `a16`.
pub(in crate::cpu) fn ld_a16p_sp(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let addr = cpu.fetch_u16(bus);
    let [lo, hi] = cpu.reg().sp.to_le_bytes();
    bus.write_byte(addr, lo);
    bus.write_byte(addr.wrapping_add(1), hi);
    0
}

/// `LD SP, HL`.
pub(in crate::cpu) fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let value = cpu.reg().hl();
    cpu.reg_mut().sp = value;
    0
}

/// `LD HL, SP+e8` — flags come from the unsigned low-byte sum, not the
/// signed 16-bit addition.
pub(in crate::cpu) fn ld_hl_sp_e8(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let offset = cpu.fetch_i8(bus);
    let result = cpu.sp_plus_e8(offset);
    cpu.reg_mut().set_hl(result);
    0
}

macro_rules! push_rr {
    ($name:ident, $get:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().$get();
            cpu.push_u16(bus, value);
            0
        }
    };
}

push_rr!(push_bc, bc);
push_rr!(push_de, de);
push_rr!(push_hl, hl);
push_rr!(push_af, af);

macro_rules! pop_rr {
    ($name:ident, $set:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = cpu.pop_u16(bus);
            cpu.reg_mut().$set(value);
            0
        }
    };
}

pop_rr!(pop_bc, set_bc);
pop_rr!(pop_de, set_de);
pop_rr!(pop_hl, set_hl);
pop_rr!(pop_af, set_af);
