//! CB-prefixed bit-test/reset/set family: `BIT n,r`, `RES n,r`, `SET n,r`
//! (and the `(HL)` forms), for every bit position 0..=7.

use super::super::macros::{cb_hlp_op, cb_reg_op};
use super::super::Cpu;
use crate::bus::Bus;

macro_rules! cb_bit_row {
    (bit, $bit:expr, $b:ident, $c:ident, $d:ident, $e:ident, $h:ident, $l:ident, $hlp:ident, $a:ident) => {
        cb_reg_op!($b, bit, $bit, b);
        cb_reg_op!($c, bit, $bit, c);
        cb_reg_op!($d, bit, $bit, d);
        cb_reg_op!($e, bit, $bit, e);
        cb_reg_op!($h, bit, $bit, h);
        cb_reg_op!($l, bit, $bit, l);
        cb_hlp_op!($hlp, bit, $bit);
        cb_reg_op!($a, bit, $bit, a);
    };
    (res, $bit:expr, $b:ident, $c:ident, $d:ident, $e:ident, $h:ident, $l:ident, $hlp:ident, $a:ident) => {
        cb_reg_op!($b, res, $bit, b);
        cb_reg_op!($c, res, $bit, c);
        cb_reg_op!($d, res, $bit, d);
        cb_reg_op!($e, res, $bit, e);
        cb_reg_op!($h, res, $bit, h);
        cb_reg_op!($l, res, $bit, l);
        cb_hlp_op!($hlp, res, $bit);
        cb_reg_op!($a, res, $bit, a);
    };
    (set, $bit:expr, $b:ident, $c:ident, $d:ident, $e:ident, $h:ident, $l:ident, $hlp:ident, $a:ident) => {
        cb_reg_op!($b, set, $bit, b);
        cb_reg_op!($c, set, $bit, c);
        cb_reg_op!($d, set, $bit, d);
        cb_reg_op!($e, set, $bit, e);
        cb_reg_op!($h, set, $bit, h);
        cb_reg_op!($l, set, $bit, l);
        cb_hlp_op!($hlp, set, $bit);
        cb_reg_op!($a, set, $bit, a);
    };
}

cb_bit_row!(bit, 0, cb_bit0_b, cb_bit0_c, cb_bit0_d, cb_bit0_e, cb_bit0_h, cb_bit0_l, cb_bit0_hlp, cb_bit0_a);
cb_bit_row!(bit, 1, cb_bit1_b, cb_bit1_c, cb_bit1_d, cb_bit1_e, cb_bit1_h, cb_bit1_l, cb_bit1_hlp, cb_bit1_a);
cb_bit_row!(bit, 2, cb_bit2_b, cb_bit2_c, cb_bit2_d, cb_bit2_e, cb_bit2_h, cb_bit2_l, cb_bit2_hlp, cb_bit2_a);
cb_bit_row!(bit, 3, cb_bit3_b, cb_bit3_c, cb_bit3_d, cb_bit3_e, cb_bit3_h, cb_bit3_l, cb_bit3_hlp, cb_bit3_a);
cb_bit_row!(bit, 4, cb_bit4_b, cb_bit4_c, cb_bit4_d, cb_bit4_e, cb_bit4_h, cb_bit4_l, cb_bit4_hlp, cb_bit4_a);
cb_bit_row!(bit, 5, cb_bit5_b, cb_bit5_c, cb_bit5_d, cb_bit5_e, cb_bit5_h, cb_bit5_l, cb_bit5_hlp, cb_bit5_a);
cb_bit_row!(bit, 6, cb_bit6_b, cb_bit6_c, cb_bit6_d, cb_bit6_e, cb_bit6_h, cb_bit6_l, cb_bit6_hlp, cb_bit6_a);
cb_bit_row!(bit, 7, cb_bit7_b, cb_bit7_c, cb_bit7_d, cb_bit7_e, cb_bit7_h, cb_bit7_l, cb_bit7_hlp, cb_bit7_a);

cb_bit_row!(res, 0, cb_res0_b, cb_res0_c, cb_res0_d, cb_res0_e, cb_res0_h, cb_res0_l, cb_res0_hlp, cb_res0_a);
cb_bit_row!(res, 1, cb_res1_b, cb_res1_c, cb_res1_d, cb_res1_e, cb_res1_h, cb_res1_l, cb_res1_hlp, cb_res1_a);
cb_bit_row!(res, 2, cb_res2_b, cb_res2_c, cb_res2_d, cb_res2_e, cb_res2_h, cb_res2_l, cb_res2_hlp, cb_res2_a);
cb_bit_row!(res, 3, cb_res3_b, cb_res3_c, cb_res3_d, cb_res3_e, cb_res3_h, cb_res3_l, cb_res3_hlp, cb_res3_a);
cb_bit_row!(res, 4, cb_res4_b, cb_res4_c, cb_res4_d, cb_res4_e, cb_res4_h, cb_res4_l, cb_res4_hlp, cb_res4_a);
cb_bit_row!(res, 5, cb_res5_b, cb_res5_c, cb_res5_d, cb_res5_e, cb_res5_h, cb_res5_l, cb_res5_hlp, cb_res5_a);
cb_bit_row!(res, 6, cb_res6_b, cb_res6_c, cb_res6_d, cb_res6_e, cb_res6_h, cb_res6_l, cb_res6_hlp, cb_res6_a);
cb_bit_row!(res, 7, cb_res7_b, cb_res7_c, cb_res7_d, cb_res7_e, cb_res7_h, cb_res7_l, cb_res7_hlp, cb_res7_a);

cb_bit_row!(set, 0, cb_set0_b, cb_set0_c, cb_set0_d, cb_set0_e, cb_set0_h, cb_set0_l, cb_set0_hlp, cb_set0_a);
cb_bit_row!(set, 1, cb_set1_b, cb_set1_c, cb_set1_d, cb_set1_e, cb_set1_h, cb_set1_l, cb_set1_hlp, cb_set1_a);
cb_bit_row!(set, 2, cb_set2_b, cb_set2_c, cb_set2_d, cb_set2_e, cb_set2_h, cb_set2_l, cb_set2_hlp, cb_set2_a);
cb_bit_row!(set, 3, cb_set3_b, cb_set3_c, cb_set3_d, cb_set3_e, cb_set3_h, cb_set3_l, cb_set3_hlp, cb_set3_a);
cb_bit_row!(set, 4, cb_set4_b, cb_set4_c, cb_set4_d, cb_set4_e, cb_set4_h, cb_set4_l, cb_set4_hlp, cb_set4_a);
cb_bit_row!(set, 5, cb_set5_b, cb_set5_c, cb_set5_d, cb_set5_e, cb_set5_h, cb_set5_l, cb_set5_hlp, cb_set5_a);
cb_bit_row!(set, 6, cb_set6_b, cb_set6_c, cb_set6_d, cb_set6_e, cb_set6_h, cb_set6_l, cb_set6_hlp, cb_set6_a);
cb_bit_row!(set, 7, cb_set7_b, cb_set7_c, cb_set7_d, cb_set7_e, cb_set7_h, cb_set7_l, cb_set7_hlp, cb_set7_a);
