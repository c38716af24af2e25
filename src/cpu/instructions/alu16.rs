//! 16-bit ALU family: `ADD HL,rr`, `INC`/`DEC rr`, `ADD SP,e8`.

use super::super::Cpu;
use crate::bus::Bus;

macro_rules! add_hl_rr {
    ($name:ident, $get:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().$get();
            cpu.add_hl(value);
            0
        }
    };
}

add_hl_rr!(add_hl_bc, bc);
add_hl_rr!(add_hl_de, de);
add_hl_rr!(add_hl_hl, hl);

/// `ADD HL, SP`.
pub(in crate::cpu) fn add_hl_sp(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let value = cpu.reg().sp;
    cpu.add_hl(value);
    0
}

macro_rules! inc_rr {
    ($name:ident, $get:ident, $set:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().$get().wrapping_add(1);
            cpu.reg_mut().$set(value);
            0
        }
    };
}

macro_rules! dec_rr {
    ($name:ident, $get:ident, $set:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().$get().wrapping_sub(1);
            cpu.reg_mut().$set(value);
            0
        }
    };
}

inc_rr!(inc_bc, bc, set_bc);
inc_rr!(inc_de, de, set_de);
inc_rr!(inc_hl, hl, set_hl);

dec_rr!(dec_bc, bc, set_bc);
dec_rr!(dec_de, de, set_de);
dec_rr!(dec_hl, hl, set_hl);

/// `INC SP`. Does not touch flags — 16-bit `INC`/`DEC` never do.
pub(in crate::cpu) fn inc_sp(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let value = cpu.reg().sp.wrapping_add(1);
    cpu.reg_mut().sp = value;
    0
}

/// `DEC SP`.
pub(in crate::cpu) fn dec_sp(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let value = cpu.reg().sp.wrapping_sub(1);
    cpu.reg_mut().sp = value;
    0
}

/// `ADD SP, e8` — same unsigned-low-byte-sum flag rule as `LD HL,SP+e8`,
/// but here `SP` itself is the destination.
pub(in crate::cpu) fn add_sp_e8(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let offset = cpu.fetch_i8(bus);
    let result = cpu.sp_plus_e8(offset);
    cpu.reg_mut().sp = result;
    0
}
