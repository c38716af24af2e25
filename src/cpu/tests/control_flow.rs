use super::*;

#[test]
fn jp_a16_sets_pc_unconditionally() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0xC3, 0x34, 0x12]); // JP 0x1234
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cycles, 16);
}

#[test]
fn jp_nz_not_taken_costs_base_cycles_only() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().set_flag(crate::constants::FLAG_Z, true);
    let mut bus = bus_with(0x0100, &[0xC2, 0x34, 0x12]); // JP NZ,0x1234
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cycles, 12);
}

#[test]
fn jp_nz_taken_adds_the_branch_cycles() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0xC2, 0x34, 0x12]); // JP NZ,0x1234 (Z clear)
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cycles, 16);
}

#[test]
fn jr_e8_signed_offset_both_directions() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0x18, 0xFE]); // JR -2 (back to self)
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0100);
}

#[test]
fn call_ret_round_trip() {
    let mut cpu = cpu_at(0x0200);
    cpu.reg_mut().sp = 0xFFFE;
    let mut bus = bus_with(0x0200, &[0xCD, 0x34, 0x12]); // CALL 0x1234
    bus.write_byte(0x1234, 0xC9); // RET

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.reg().sp, 0xFFFC);
    assert_eq!(bus.read_byte(0xFFFC), 0x03);
    assert_eq!(bus.read_byte(0xFFFD), 0x02);

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.reg().sp, 0xFFFE);
}

#[test]
fn rst_38_pushes_return_address_and_jumps_to_fixed_vector() {
    let mut cpu = cpu_at(0x0150);
    cpu.reg_mut().sp = 0xFFFE;
    let mut bus = bus_with(0x0150, &[0xFF]); // RST 38H
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0038);
    assert_eq!(cpu.reg().sp, 0xFFFC);
    assert_eq!(bus.read_byte(0xFFFC), 0x51);
    assert_eq!(bus.read_byte(0xFFFD), 0x01);
}

#[test]
fn reti_enables_ime_immediately_unlike_ei() {
    let mut cpu = cpu_at(0x0100);
    cpu.reg_mut().sp = 0xFFFC;
    let mut bus = bus_with(0x0100, &[0xD9]); // RETI
    bus.write_byte(0xFFFC, 0x00);
    bus.write_byte(0xFFFD, 0x02);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0200);
    assert!(cpu.ime());
}
