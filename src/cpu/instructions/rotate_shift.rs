//! Rotate/shift family: the four non-prefixed accumulator rotates
//! (`RLCA`/`RLA`/`RRCA`/`RRA`, which always clear `Z`) and the CB-prefixed
//! `RLC`/`RRC`/`RL`/`RR`/`SLA`/`SRA`/`SWAP`/`SRL` over every register and
//! `(HL)`.

use super::super::macros::{cb_hlp_op, cb_reg_op};
use super::super::Cpu;
use crate::bus::Bus;
use crate::constants::FLAG_Z;

macro_rules! accumulator_rotate {
    ($name:ident, $op:ident) => {
        /// Forces `Z` to false, unlike the CB-prefixed form of the same
        /// rotate applied to `A`.
        pub(in crate::cpu) fn $name(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
            let value = cpu.reg().a;
            let result = cpu.$op(value);
            cpu.reg_mut().a = result;
            cpu.reg_mut().set_flag(FLAG_Z, false);
            0
        }
    };
}

accumulator_rotate!(rlca, rlc);
accumulator_rotate!(rrca, rrc);
accumulator_rotate!(rla, rl);
accumulator_rotate!(rra, rr);

macro_rules! cb_row {
    ($op:ident, $b:ident, $c:ident, $d:ident, $e:ident, $h:ident, $l:ident, $hlp:ident, $a:ident) => {
        cb_reg_op!($b, $op, b);
        cb_reg_op!($c, $op, c);
        cb_reg_op!($d, $op, d);
        cb_reg_op!($e, $op, e);
        cb_reg_op!($h, $op, h);
        cb_reg_op!($l, $op, l);
        cb_hlp_op!($hlp, $op);
        cb_reg_op!($a, $op, a);
    };
}

cb_row!(rlc, cb_rlc_b, cb_rlc_c, cb_rlc_d, cb_rlc_e, cb_rlc_h, cb_rlc_l, cb_rlc_hlp, cb_rlc_a);
cb_row!(rrc, cb_rrc_b, cb_rrc_c, cb_rrc_d, cb_rrc_e, cb_rrc_h, cb_rrc_l, cb_rrc_hlp, cb_rrc_a);
cb_row!(rl, cb_rl_b, cb_rl_c, cb_rl_d, cb_rl_e, cb_rl_h, cb_rl_l, cb_rl_hlp, cb_rl_a);
cb_row!(rr, cb_rr_b, cb_rr_c, cb_rr_d, cb_rr_e, cb_rr_h, cb_rr_l, cb_rr_hlp, cb_rr_a);
cb_row!(sla, cb_sla_b, cb_sla_c, cb_sla_d, cb_sla_e, cb_sla_h, cb_sla_l, cb_sla_hlp, cb_sla_a);
cb_row!(sra, cb_sra_b, cb_sra_c, cb_sra_d, cb_sra_e, cb_sra_h, cb_sra_l, cb_sra_hlp, cb_sra_a);
cb_row!(swap, cb_swap_b, cb_swap_c, cb_swap_d, cb_swap_e, cb_swap_h, cb_swap_l, cb_swap_hlp, cb_swap_a);
cb_row!(srl, cb_srl_b, cb_srl_c, cb_srl_d, cb_srl_e, cb_srl_h, cb_srl_l, cb_srl_hlp, cb_srl_a);
