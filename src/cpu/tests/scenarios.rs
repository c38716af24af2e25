//! The six concrete end-to-end scenarios, one `step()` call at a time.

use super::*;
use crate::constants::{IE_ADDR, IF_ADDR};

#[test]
fn scenario_reset_then_nop() {
    let mut cpu = Cpu::new();
    let before = cpu.registers();
    let mut bus = bus_with(0x0100, &[0x00]);

    let cycles = cpu.step(&mut bus).unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x0101);
    let after = cpu.registers();
    assert_eq!(after.a, before.a);
    assert_eq!(after.f, before.f);
    assert_eq!(after.b, before.b);
    assert_eq!(after.c, before.c);
    assert_eq!(after.d, before.d);
    assert_eq!(after.e, before.e);
    assert_eq!(after.h, before.h);
    assert_eq!(after.l, before.l);
    assert_eq!(after.sp, before.sp);
}

#[test]
fn scenario_immediate_load() {
    let mut cpu = Cpu::new();
    let mut bus = bus_with(0x0100, &[0x3E, 0x42]);

    let cycles = cpu.step(&mut bus).unwrap();

    assert_eq!(cpu.reg().a, 0x42);
    assert_eq!(cpu.pc(), 0x0102);
    assert_eq!(cycles, 8);
}

#[test]
fn scenario_interrupt_service() {
    let mut cpu = cpu_at(0x0200);
    cpu.reg_mut().sp = 0xFFFE;
    cpu.set_ime(true);
    let mut bus = bus_with(0x0200, &[0x00]);
    bus.write_byte(IE_ADDR, 0x01);
    bus.write_byte(IF_ADDR, 0x01);

    let cycles = cpu.step(&mut bus).unwrap();

    assert_eq!(bus.read_byte(0xFFFD), 0x02);
    assert_eq!(bus.read_byte(0xFFFC), 0x00);
    assert_eq!(cpu.reg().sp, 0xFFFC);
    assert_eq!(cpu.pc(), 0x0040);
    assert!(!cpu.ime());
    assert_eq!(bus.read_byte(IF_ADDR) & 0x01, 0);
    assert_eq!(cycles, 20);
}

#[test]
fn scenario_halt_then_wake() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0x76]); // HALT

    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cycles, 4);
    assert!(cpu.is_halted());
    assert_eq!(cpu.pc(), 0x0101);

    // IE=0, IF=0: idles.
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cycles, 4);
    assert!(cpu.is_halted());

    // Pending-and-enabled interrupt, IME still false: wakes but does not
    // service, costs 0 cycles.
    bus.write_byte(IF_ADDR, 0x01);
    bus.write_byte(IE_ADDR, 0x01);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cycles, 0);
    assert!(!cpu.is_halted());
    assert_eq!(cpu.pc(), 0x0101);

    // The subsequent step executes the instruction at PC normally.
    bus.write_byte(0x0101, 0x00); // NOP
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x0102);
}

#[test]
fn scenario_ei_delay() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = bus_with(0x0100, &[0xFB, 0x00]); // EI ; NOP

    cpu.step(&mut bus).unwrap(); // EI
    assert!(!cpu.ime());

    let cycles = cpu.step(&mut bus).unwrap(); // NOP
    assert_eq!(cycles, 4);
    assert!(cpu.ime());

    // An interrupt raised during the EI instruction itself cannot be
    // serviced until the step after the instruction following EI dispatches.
    bus.write_byte(IE_ADDR, 0x01);
    bus.write_byte(IF_ADDR, 0x01);
    cpu.reg_mut().sp = 0xFFFE;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cycles, 20);
    assert_eq!(cpu.pc(), 0x0040);
}

#[test]
fn scenario_call_ret_round_trip() {
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
