//! The opcodes that don't fit any other family: `NOP`, `HALT`, `STOP`,
//! `DI`, `EI`.

use super::super::Cpu;
use crate::bus::Bus;
use crate::constants::{IE_ADDR, IF_ADDR};

/// `NOP`.
pub(in crate::cpu) fn nop(_cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    0
}

/// `HALT`. Suspends fetch-decode-execute until an enabled interrupt is
/// pending. The HALT-bug double-execution quirk (real hardware re-executes
/// the instruction after `HALT` when `IME` is clear and an interrupt is
/// already pending) is not reproduced here; the precondition is logged so
/// the gap is visible at runtime instead of silently absent.
pub(in crate::cpu) fn halt(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    let pending = bus.read_byte(IE_ADDR) & bus.read_byte(IF_ADDR) & 0x1F;
    if !cpu.ime() && pending != 0 {
        log::warn!(
            "HALT at PC={:#06X} with IME clear and an interrupt already pending \
             (HALT bug not reproduced)",
            cpu.pc().wrapping_sub(1)
        );
    }
    cpu.set_halted(true);
    0
}

/// `STOP`. Real hardware stops the system clock entirely (low-power mode)
/// until a button press; this core treats it as consuming its one operand
/// byte with no further effect; a host wanting low-power semantics
/// observes this opcode and acts on it externally.
pub(in crate::cpu) fn stop(cpu: &mut Cpu, bus: &mut dyn Bus) -> u32 {
    log::warn!("STOP executed at PC={:#06X}", cpu.pc().wrapping_sub(1));
    let _ = cpu.fetch_u8(bus);
    0
}

/// `DI` — disables interrupts immediately (no delay, unlike `EI`), and
/// cancels any `EI` latch still in flight so a deferred enable can't survive
/// an intervening disable.
pub(in crate::cpu) fn di(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    cpu.set_ime(false);
    cpu.clear_pending_ime_enable();
    0
}

/// `EI` — arms the one-instruction-deferred `IME` enable.
pub(in crate::cpu) fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    cpu.schedule_ime_enable();
    0
}

/// Dispatch-table filler for the eleven undefined primary opcodes and the
/// `0xCB` prefix byte. `step()` intercepts all twelve of these before ever
/// indexing into the table, so this body never actually runs; it exists
/// only so the 256-entry array has something to put there.
pub(in crate::cpu) fn unreachable_slot(_cpu: &mut Cpu, _bus: &mut dyn Bus) -> u32 {
    0
}
