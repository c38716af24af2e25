//! A Sharp SM83 (Game Boy DMG) CPU interpreter.
//!
//! Covers the instruction-decode-and-execute engine, the register/flag
//! model, the interrupt-service protocol, and the memory interface (a
//! single [`Bus`] trait) the CPU is driven against. Peripherals — PPU, APU,
//! cartridge/MBC, DMA, a ROM loader, anything display- or input-facing — are
//! out of scope; a host wires its own implementation of [`Bus`] in and
//! drives the core by calling [`Cpu::step`] in a loop.

mod bus;
mod constants;
mod cpu;
mod error;

pub use bus::Bus;
pub use cpu::{Cpu, RegisterSnapshot};
pub use error::CpuError;
