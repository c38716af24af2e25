use super::*;
use crate::constants::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

#[test]
fn add_a_b_half_carry_no_carry() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x0F;
    cpu.reg_mut().b = 0x01;
    let mut bus = bus_with(0x0100, &[0x80]); // ADD A,B
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0x10);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, 0);
    assert_eq!(reg.f & FLAG_Z, 0);
}

#[test]
fn add_a_b_overflow_sets_zero_half_carry_and_carry() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0xFF;
    cpu.reg_mut().b = 0x01;
    let mut bus = bus_with(0x0100, &[0x80]); // ADD A,B
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0);
    assert_eq!(reg.f & FLAG_Z, FLAG_Z);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, FLAG_C);
}

#[test]
fn sub_a_b_half_borrow_no_carry() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x10;
    cpu.reg_mut().b = 0x01;
    let mut bus = bus_with(0x0100, &[0x90]); // SUB B
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0x0F);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, 0);
    assert_eq!(reg.f & FLAG_Z, 0);
}

#[test]
fn adc_a_b_adds_carry_in() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x01;
    cpu.reg_mut().b = 0x01;
    cpu.reg_mut().set_flag(FLAG_C, true);
    let mut bus = bus_with(0x0100, &[0x88]); // ADC A,B
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().a, 0x03);
}

#[test]
fn sbc_a_b_subtracts_carry_in() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x05;
    cpu.reg_mut().b = 0x01;
    cpu.reg_mut().set_flag(FLAG_C, true);
    let mut bus = bus_with(0x0100, &[0x98]); // SBC A,B
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().a, 0x03);
}

#[test]
fn add_hl_bc_half_carry_boundary() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().set_hl(0x0FFF);
    cpu.reg_mut().set_bc(0x0001);
    let mut bus = bus_with(0x0100, &[0x09]); // ADD HL,BC
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(cpu.reg().hl(), 0x1000);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, 0);
    assert_eq!(reg.f & FLAG_N, 0);
}

#[test]
fn add_hl_bc_wraps_with_half_carry_and_carry() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().set_hl(0xFFFF);
    cpu.reg_mut().set_bc(0x0001);
    let mut bus = bus_with(0x0100, &[0x09]); // ADD HL,BC
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(cpu.reg().hl(), 0x0000);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, FLAG_C);
}

#[test]
fn add_hl_hl_is_a_left_shift_with_carry_from_old_bit_15() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().set_hl(0x8001);
    let mut bus = bus_with(0x0100, &[0x29]); // ADD HL,HL
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.reg().hl(), 0x0002);
    assert_eq!(cpu.registers().f & FLAG_C, FLAG_C);
}

#[test]
fn add_sp_e8_low_byte_unsigned_sum_flags() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().sp = 0x00FF;
    let mut bus = bus_with(0x0100, &[0xE8, 0x01]); // ADD SP,1
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.sp, 0x0100);
    assert_eq!(reg.f & FLAG_Z, 0);
    assert_eq!(reg.f & FLAG_N, 0);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, FLAG_C);
}

#[test]
fn daa_after_bcd_addition() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x45;
    cpu.reg_mut().b = 0x38;
    let mut bus = bus_with(0x0100, &[0x80, 0x27]); // ADD A,B ; DAA
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0x83);
    assert_eq!(reg.f & FLAG_N, 0);
    assert_eq!(reg.f & FLAG_H, 0);
    assert_eq!(reg.f & FLAG_C, 0);
    assert_eq!(reg.f & FLAG_Z, 0);
}

#[test]
fn daa_after_bcd_subtraction() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x45;
    cpu.reg_mut().b = 0x38;
    let mut bus = bus_with(0x0100, &[0x90, 0x27]); // SUB B ; DAA
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0x07);
    assert_eq!(reg.f & FLAG_N, FLAG_N);
    assert_eq!(reg.f & FLAG_H, 0);
    assert_eq!(reg.f & FLAG_C, 0);
    assert_eq!(reg.f & FLAG_Z, 0);
}

#[test]
fn swap_b_twice_restores_register() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().b = 0x4F;
    let mut bus = bus_with(0x0100, &[0xCB, 0x30, 0xCB, 0x30]); // SWAP B twice
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.reg().b, 0xF4);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.reg().b, 0x4F);
}

#[test]
fn inc_dec_b_do_not_touch_carry() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().set_flag(FLAG_C, true);
    cpu.reg_mut().b = 0x0F;
    let mut bus = bus_with(0x0100, &[0x04]); // INC B
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.b, 0x10);
    assert_eq!(reg.f & FLAG_H, FLAG_H);
    assert_eq!(reg.f & FLAG_C, FLAG_C, "carry must be preserved by INC");
}

#[test]
fn inc_sp_and_dec_sp_wrap_and_touch_no_flags() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().sp = 0xFFFF;
    cpu.reg_mut().set_f(0xF0);
    let mut bus = bus_with(0x0100, &[0x33]); // INC SP
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.reg().sp, 0x0000);
    assert_eq!(cpu.registers().f, 0xF0);
}
