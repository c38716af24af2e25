//! Control-flow family: `JP`/`JR` (unconditional and conditional),
//! `CALL`/`RET`/`RETI`, and `RST`.
//!
//! Every conditional/ variant's handler returns the *extra* cycles beyond
//! the table's not-taken base cost — the base cost already covers reading
//! the operand, so only the branch itself is billed here.

use super::super::Cpu;
use crate::bus::Bus;

/// `JP a16`.
pub(in crate::cpu) fn jp_a16(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let target = cpu.fetch_u16(bus);
    cpu.jump_to(target);
    0
}

/// `JP HL` — unlike every other jump, the target is not read from the
/// instruction stream, so this is only 4 cycles total.
pub(in crate::cpu) fn jp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    let target = cpu.reg().hl();
    cpu.jump_to(target);
    0
}

macro_rules! jp_cc_a16 {
    ($name:ident, $cc:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let target = cpu.fetch_u16(bus);
            if cpu.reg().check_condition($cc) {
                cpu.jump_to(target);
                4
            } else {
                0
            }
        }
    };
}

jp_cc_a16!(jp_nz_a16, 0);
jp_cc_a16!(jp_z_a16, 1);
jp_cc_a16!(jp_nc_a16, 2);
jp_cc_a16!(jp_c_a16, 3);

/// `JR e8`.
pub(in crate::cpu) fn jr_e8(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let offset = cpu.fetch_i8(bus);
    let target = cpu.pc().wrapping_add(offset as i16 as u16);
    cpu.jump_to(target);
    0
}

macro_rules! jr_cc_e8 {
    ($name:ident, $cc:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let offset = cpu.fetch_i8(bus);
            if cpu.reg().check_condition($cc) {
                let target = cpu.pc().wrapping_add(offset as i16 as u16);
                cpu.jump_to(target);
                4
            } else {
                0
            }
        }
    };
}

jr_cc_e8!(jr_nz_e8, 0);
jr_cc_e8!(jr_z_e8, 1);
jr_cc_e8!(jr_nc_e8, 2);
jr_cc_e8!(jr_c_e8, 3);

/// `CALL a16`.
pub(in crate::cpu) fn call_a16(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let target = cpu.fetch_u16(bus);
    let return_pc = cpu.pc();
    cpu.push_u16(bus, return_pc);
    cpu.jump_to(target);
    0
}

macro_rules! call_cc_a16 {
    ($name:ident, $cc:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let target = cpu.fetch_u16(bus);
            if cpu.reg().check_condition($cc) {
                let return_pc = cpu.pc();
                cpu.push_u16(bus, return_pc);
                cpu.jump_to(target);
                12
            } else {
                0
            }
        }
    };
}

call_cc_a16!(call_nz_a16, 0);
call_cc_a16!(call_z_a16, 1);
call_cc_a16!(call_nc_a16, 2);
call_cc_a16!(call_c_a16, 3);

/// `RET`.
pub(in crate::cpu) fn ret(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let target = cpu.pop_u16(bus);
    cpu.jump_to(target);
    0
}

/// `RETI` — `RET` plus an immediate (not deferred) `IME` enable.
pub(in crate::cpu) fn reti(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let target = cpu.pop_u16(bus);
    cpu.jump_to(target);
    cpu.set_ime(true);
    0
}

macro_rules! ret_cc {
    ($name:ident, $cc:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            if cpu.reg().check_condition($cc) {
                let target = cpu.pop_u16(bus);
                cpu.jump_to(target);
                12
            } else {
                0
            }
        }
    };
}

ret_cc!(ret_nz, 0);
ret_cc!(ret_z, 1);
ret_cc!(ret_nc, 2);
ret_cc!(ret_c, 3);

macro_rules! rst {
    ($name:ident, $vector:literal) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let return_pc = cpu.pc();
            cpu.push_u16(bus, return_pc);
            cpu.jump_to($vector);
            0
        }
    };
}

rst!(rst_00, 0x0000);
rst!(rst_08, 0x0008);
rst!(rst_10, 0x0010);
rst!(rst_18, 0x0018);
rst!(rst_20, 0x0020);
rst!(rst_28, 0x0028);
rst!(rst_30, 0x0030);
rst!(rst_38, 0x0038);
