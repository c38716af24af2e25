//! Bit-exact trace line formatting, read immediately before instruction
//! fetch. Useful for diffing execution traces against another emulator
//! byte-for-byte; not used anywhere else in this crate.

use super::Cpu;
use crate::bus::Bus;

impl Cpu {
    /// Formats the current register file and the four bytes at
    /// `PC..PC+3` (wrapped mod `0x10000`) as one line:
    /// `A:HH F:HH B:HH C:HH D:HH E:HH H:HH L:HH SP:HHHH PC:HHHH
    /// PCMEM:HH,HH,HH,HH`.
    ///
    /// Takes `&mut dyn Bus` rather than `&self` alone because reading the
    /// PCMEM bytes goes through the bus, and `Bus::read_byte` is `&mut self`.
    pub fn trace_line(&self, bus: &mut dyn Bus) -> String {
        let reg = self.registers();
        let pc = reg.pc;
        let pcmem: Vec<u8> = (0..4u16)
            .map(|offset| bus.read_byte(pc.wrapping_add(offset)))
            .collect();

        format!(
            "A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} \
             SP:{:04X} PC:{:04X} PCMEM:{:02X},{:02X},{:02X},{:02X}",
            reg.a,
            reg.f,
            reg.b,
            reg.c,
            reg.d,
            reg.e,
            reg.h,
            reg.l,
            reg.sp,
            pc,
            pcmem[0],
            pcmem[1],
            pcmem[2],
            pcmem[3],
        )
    }
}
