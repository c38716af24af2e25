use super::*;
use crate::constants::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

#[test]
fn xor_a_a_clears_a_and_sets_only_z() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0xAF]); // XOR A,A
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0);
    assert_eq!(reg.f, FLAG_Z);
}

#[test]
fn sub_a_a_clears_a_and_sets_z_and_n() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0x97]); // SUB A,A
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.a, 0);
    assert_eq!(reg.f, FLAG_Z | FLAG_N);
}

#[test]
fn scf_sets_carry_and_clears_n_h_leaves_z() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().set_flag(FLAG_Z, true);
    let mut bus = bus_with(0x0100, &[0x37]); // SCF
    cpu.step(&mut bus).unwrap();
    let reg = cpu.registers();
    assert_eq!(reg.f, FLAG_Z | FLAG_C);
}

#[test]
fn ccf_complements_carry_and_clears_n_h() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0x37, 0x3F]); // SCF then CCF
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().f, FLAG_C);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().f, 0);
}

#[test]
fn cpl_cpl_restores_a_and_sets_n_h_both_times() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().a = 0x35;
    let mut bus = bus_with(0x0100, &[0x2F, 0x2F]); // CPL, CPL

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().a, 0xCA);
    assert_eq!(cpu.registers().f & (FLAG_N | FLAG_H), FLAG_N | FLAG_H);

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().a, 0x35);
    assert_eq!(cpu.registers().f & (FLAG_N | FLAG_H), FLAG_N | FLAG_H);
}

#[test]
fn f_low_nibble_stays_zero_after_every_alu_op() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0x3E, 0xFF, 0xC6, 0x01]); // LD A,0xFF ; ADD A,1
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().f & 0x0F, 0);
}
