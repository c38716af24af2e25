//! Handler-generating macros shared by the instruction families.
//!
//! Every opcode gets its own named function (flat dispatch: no inheritance,
//! no command objects) but the bodies are mechanical
//! enough — "do the op on this field", "do the op through `(HL)`" — that
//! writing each one out by hand would just be error-prone copy/paste. These
//! macros generate the boilerplate while keeping one real implementation
//! (`Cpu::add_a`, `Cpu::rlc`, …) per family for the interesting part: the
//! flag math.

use super::Cpu;
use crate::bus::Bus;

/// Register-to-register load: `LD r1, r2`. 4 cycles, no flags.
macro_rules! ld_r_r {
    ($name:ident, $dst:ident, $src:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.reg.$dst = cpu.reg.$src;
            0
        }
    };
}

/// `LD r, (HL)`. 8 cycles (one extra memory access folded into the family's
/// base cycle count in the dispatch table).
macro_rules! ld_r_hlp {
    ($name:ident, $dst:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            cpu.reg.$dst = bus.read_byte(cpu.reg.hl());
            0
        }
    };
}

/// `LD (HL), r`. 8 cycles.
macro_rules! ld_hlp_r {
    ($name:ident, $src:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            bus.write_byte(cpu.reg.hl(), cpu.reg.$src);
            0
        }
    };
}

/// `ALU A, r` (ADD/ADC/SUB/SBC/AND/XOR/OR/CP), operand from a register.
macro_rules! alu_a_r {
    ($name:ident, $op:ident, $src:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.$op(cpu.reg.$src, false);
            0
        }
    };
    ($name:ident, $op:ident, $src:ident, carry) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.$op(cpu.reg.$src, true);
            0
        }
    };
}

/// `ALU A, (HL)`, operand read through HL.
macro_rules! alu_a_hlp {
    ($name:ident, $op:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = bus.read_byte(cpu.reg.hl());
            cpu.$op(value, false);
            0
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = bus.read_byte(cpu.reg.hl());
            cpu.$op(value, true);
            0
        }
    };
}

/// CB-prefixed rotate/shift/swap or bit op on a plain register.
macro_rules! cb_reg_op {
    ($name:ident, $op:ident, $reg:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.reg.$reg = cpu.$op(cpu.reg.$reg);
            0
        }
    };
    ($name:ident, bit, $bit:expr, $reg:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.op_bit($bit, cpu.reg.$reg);
            0
        }
    };
    ($name:ident, res, $bit:expr, $reg:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.reg.$reg &= !(1u8 << $bit);
            0
        }
    };
    ($name:ident, set, $bit:expr, $reg:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            cpu.reg.$reg |= 1u8 << $bit;
            0
        }
    };
}

/// CB-prefixed rotate/shift/swap or bit op on `(HL)`.
macro_rules! cb_hlp_op {
    ($name:ident, $op:ident) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let addr = cpu.reg.hl();
            let value = bus.read_byte(addr);
            let result = cpu.$op(value);
            bus.write_byte(addr, result);
            0
        }
    };
    ($name:ident, bit, $bit:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let value = bus.read_byte(cpu.reg.hl());
            cpu.op_bit($bit, value);
            0
        }
    };
    ($name:ident, res, $bit:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let addr = cpu.reg.hl();
            let value = bus.read_byte(addr);
            bus.write_byte(addr, value & !(1u8 << $bit));
            0
        }
    };
    ($name:ident, set, $bit:expr) => {
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
            let addr = cpu.reg.hl();
            let value = bus.read_byte(addr);
            bus.write_byte(addr, value | (1u8 << $bit));
            0
        }
    };
}

pub(crate) use alu_a_hlp;
pub(crate) use alu_a_r;
pub(crate) use cb_hlp_op;
pub(crate) use cb_reg_op;
pub(crate) use ld_hlp_r;
pub(crate) use ld_r_hlp;
pub(crate) use ld_r_r;
