//! CPU-level error taxonomy.
//!
//! The interpreter is total by design: register arithmetic is unsigned
//! modulus, flag updates cannot fail, and 16-bit pointer arithmetic wraps.
//! The only two faults a `step()` can report are an undefined primary
//! opcode, or the host `Bus` reporting a fault of its own.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpuError {
    /// The primary byte fetched is one of the eleven opcodes the SM83 never
    /// defines. The core is left halted at the address the opcode was
    /// fetched from; it does not silently skip.
    #[error("illegal opcode {opcode:#04X} at PC={pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// The host's memory component failed. The CPU does not attempt
    /// recovery; this variant exists so a host `Bus` has somewhere to
    /// surface such a fault through `step()`, though the in-crate test `Bus`
    /// never returns it (`read_byte`/`write_byte` are infallible by
    /// contract).
    #[error("host memory fault: {0}")]
    HostMemoryFault(String),
}
