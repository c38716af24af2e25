//! The two 256-entry opcode dispatch tables.
//!
//! Each entry pairs a handler function pointer with the base cycle count
//! for that opcode (the cost when a conditional branch is *not* taken;
//! handlers return the extra cycles on top of that when it is). The tables
//! are built once, lazily, the same way the reference core this crate
//! grew out of builds its own flat dispatch tables.

mod alu16;
mod alu8;
mod bit_ops;
mod control_flow;
mod load16;
mod load8;
mod misc;
mod rotate_shift;

use super::Cpu;
use crate::bus::Bus;
use lazy_static::lazy_static;

pub(super) struct Instruction {
    pub mnemonic: &'static str,
    pub cycles: u32,
    pub execute: fn(&mut Cpu, &mut dyn Bus) -> u32,
}

impl Instruction {
    const fn new(mnemonic: &'static str, cycles: u32, execute: fn(&mut Cpu, &mut dyn Bus) -> u32) -> Self {
        Self { mnemonic, cycles, execute }
    }
}

macro_rules! instr {
    ($mnemonic:literal, $cycles:literal, $f:path) => {
        Instruction::new($mnemonic, $cycles, $f)
    };
}

lazy_static! {
    pub(super) static ref PRIMARY_INSTRUCTIONS: [Instruction; 256] = [
        instr!("NOP", 4, misc::nop),                                  // 0x00
        instr!("LD BC,d16", 12, load16::ld_bc_d16),                   // 0x01
        instr!("LD (BC),A", 8, load8::ld_bcp_a),                      // 0x02
        instr!("INC BC", 8, alu16::inc_bc),                           // 0x03
        instr!("INC B", 4, alu8::inc_b),                              // 0x04
        instr!("DEC B", 4, alu8::dec_b),                              // 0x05
        instr!("LD B,d8", 8, load8::ld_b_n),                          // 0x06
        instr!("RLCA", 4, rotate_shift::rlca),                        // 0x07
        instr!("LD (a16),SP", 20, load16::ld_a16p_sp),                // 0x08
        instr!("ADD HL,BC", 8, alu16::add_hl_bc),                     // 0x09
        instr!("LD A,(BC)", 8, load8::ld_a_bcp),                      // 0x0A
        instr!("DEC BC", 8, alu16::dec_bc),                           // 0x0B
        instr!("INC C", 4, alu8::inc_c),                              // 0x0C
        instr!("DEC C", 4, alu8::dec_c),                              // 0x0D
        instr!("LD C,d8", 8, load8::ld_c_n),                          // 0x0E
        instr!("RRCA", 4, rotate_shift::rrca),                        // 0x0F

        instr!("STOP", 4, misc::stop),                                // 0x10
        instr!("LD DE,d16", 12, load16::ld_de_d16),                   // 0x11
        instr!("LD (DE),A", 8, load8::ld_dep_a),                      // 0x12
        instr!("INC DE", 8, alu16::inc_de),                           // 0x13
        instr!("INC D", 4, alu8::inc_d),                              // 0x14
        instr!("DEC D", 4, alu8::dec_d),                              // 0x15
        instr!("LD D,d8", 8, load8::ld_d_n),                          // 0x16
        instr!("RLA", 4, rotate_shift::rla),                          // 0x17
        instr!("JR r8", 12, control_flow::jr_e8),                     // 0x18
        instr!("ADD HL,DE", 8, alu16::add_hl_de),                     // 0x19
        instr!("LD A,(DE)", 8, load8::ld_a_dep),                      // 0x1A
        instr!("DEC DE", 8, alu16::dec_de),                           // 0x1B
        instr!("INC E", 4, alu8::inc_e),                              // 0x1C
        instr!("DEC E", 4, alu8::dec_e),                              // 0x1D
        instr!("LD E,d8", 8, load8::ld_e_n),                          // 0x1E
        instr!("RRA", 4, rotate_shift::rra),                          // 0x1F

        instr!("JR NZ,r8", 8, control_flow::jr_nz_e8),                // 0x20
        instr!("LD HL,d16", 12, load16::ld_hl_d16),                   // 0x21
        instr!("LD (HL+),A", 8, load8::ld_hlip_a),                    // 0x22
        instr!("INC HL", 8, alu16::inc_hl),                           // 0x23
        instr!("INC H", 4, alu8::inc_h),                              // 0x24
        instr!("DEC H", 4, alu8::dec_h),                              // 0x25
        instr!("LD H,d8", 8, load8::ld_h_n),                          // 0x26
        instr!("DAA", 4, alu8::daa),                                  // 0x27
        instr!("JR Z,r8", 8, control_flow::jr_z_e8),                  // 0x28
        instr!("ADD HL,HL", 8, alu16::add_hl_hl),                     // 0x29
        instr!("LD A,(HL+)", 8, load8::ld_a_hlip),                    // 0x2A
        instr!("DEC HL", 8, alu16::dec_hl),                           // 0x2B
        instr!("INC L", 4, alu8::inc_l),                              // 0x2C
        instr!("DEC L", 4, alu8::dec_l),                              // 0x2D
        instr!("LD L,d8", 8, load8::ld_l_n),                          // 0x2E
        instr!("CPL", 4, alu8::cpl),                                  // 0x2F

        instr!("JR NC,r8", 8, control_flow::jr_nc_e8),                // 0x30
        instr!("LD SP,d16", 12, load16::ld_sp_d16),                   // 0x31
        instr!("LD (HL-),A", 8, load8::ld_hldp_a),                    // 0x32
        instr!("INC SP", 8, alu16::inc_sp),                           // 0x33
        instr!("INC (HL)", 12, alu8::inc_hlp),                        // 0x34
        instr!("DEC (HL)", 12, alu8::dec_hlp),                        // 0x35
        instr!("LD (HL),d8", 12, load8::ld_hlp_n),                    // 0x36
        instr!("SCF", 4, alu8::scf),                                  // 0x37
        instr!("JR C,r8", 8, control_flow::jr_c_e8),                  // 0x38
        instr!("ADD HL,SP", 8, alu16::add_hl_sp),                     // 0x39
        instr!("LD A,(HL-)", 8, load8::ld_a_hldp),                    // 0x3A
        instr!("DEC SP", 8, alu16::dec_sp),                           // 0x3B
        instr!("INC A", 4, alu8::inc_a),                              // 0x3C
        instr!("DEC A", 4, alu8::dec_a),                              // 0x3D
        instr!("LD A,d8", 8, load8::ld_a_n),                          // 0x3E
        instr!("CCF", 4, alu8::ccf),                                  // 0x3F

        instr!("LD B,B", 4, load8::ld_b_b),                           // 0x40
        instr!("LD B,C", 4, load8::ld_b_c),                           // 0x41
        instr!("LD B,D", 4, load8::ld_b_d),                           // 0x42
        instr!("LD B,E", 4, load8::ld_b_e),                           // 0x43
        instr!("LD B,H", 4, load8::ld_b_h),                           // 0x44
        instr!("LD B,L", 4, load8::ld_b_l),                           // 0x45
        instr!("LD B,(HL)", 8, load8::ld_b_hlp),                      // 0x46
        instr!("LD B,A", 4, load8::ld_b_a),                           // 0x47
        instr!("LD C,B", 4, load8::ld_c_b),                           // 0x48
        instr!("LD C,C", 4, load8::ld_c_c),                           // 0x49
        instr!("LD C,D", 4, load8::ld_c_d),                           // 0x4A
        instr!("LD C,E", 4, load8::ld_c_e),                           // 0x4B
        instr!("LD C,H", 4, load8::ld_c_h),                           // 0x4C
        instr!("LD C,L", 4, load8::ld_c_l),                           // 0x4D
        instr!("LD C,(HL)", 8, load8::ld_c_hlp),                      // 0x4E
        instr!("LD C,A", 4, load8::ld_c_a),                           // 0x4F

        instr!("LD D,B", 4, load8::ld_d_b),                           // 0x50
        instr!("LD D,C", 4, load8::ld_d_c),                           // 0x51
        instr!("LD D,D", 4, load8::ld_d_d),                           // 0x52
        instr!("LD D,E", 4, load8::ld_d_e),                           // 0x53
        instr!("LD D,H", 4, load8::ld_d_h),                           // 0x54
        instr!("LD D,L", 4, load8::ld_d_l),                           // 0x55
        instr!("LD D,(HL)", 8, load8::ld_d_hlp),                      // 0x56
        instr!("LD D,A", 4, load8::ld_d_a),                           // 0x57
        instr!("LD E,B", 4, load8::ld_e_b),                           // 0x58
        instr!("LD E,C", 4, load8::ld_e_c),                           // 0x59
        instr!("LD E,D", 4, load8::ld_e_d),                           // 0x5A
        instr!("LD E,E", 4, load8::ld_e_e),                           // 0x5B
        instr!("LD E,H", 4, load8::ld_e_h),                           // 0x5C
        instr!("LD E,L", 4, load8::ld_e_l),                           // 0x5D
        instr!("LD E,(HL)", 8, load8::ld_e_hlp),                      // 0x5E
        instr!("LD E,A", 4, load8::ld_e_a),                           // 0x5F

        instr!("LD H,B", 4, load8::ld_h_b),                           // 0x60
        instr!("LD H,C", 4, load8::ld_h_c),                           // 0x61
        instr!("LD H,D", 4, load8::ld_h_d),                           // 0x62
        instr!("LD H,E", 4, load8::ld_h_e),                           // 0x63
        instr!("LD H,H", 4, load8::ld_h_h),                           // 0x64
        instr!("LD H,L", 4, load8::ld_h_l),                           // 0x65
        instr!("LD H,(HL)", 8, load8::ld_h_hlp),                      // 0x66
        instr!("LD H,A", 4, load8::ld_h_a),                           // 0x67
        instr!("LD L,B", 4, load8::ld_l_b),                           // 0x68
        instr!("LD L,C", 4, load8::ld_l_c),                           // 0x69
        instr!("LD L,D", 4, load8::ld_l_d),                           // 0x6A
        instr!("LD L,E", 4, load8::ld_l_e),                           // 0x6B
        instr!("LD L,H", 4, load8::ld_l_h),                           // 0x6C
        instr!("LD L,L", 4, load8::ld_l_l),                           // 0x6D
        instr!("LD L,(HL)", 8, load8::ld_l_hlp),                      // 0x6E
        instr!("LD L,A", 4, load8::ld_l_a),                           // 0x6F

        instr!("LD (HL),B", 8, load8::ld_hlp_b),                      // 0x70
        instr!("LD (HL),C", 8, load8::ld_hlp_c),                      // 0x71
        instr!("LD (HL),D", 8, load8::ld_hlp_d),                      // 0x72
        instr!("LD (HL),E", 8, load8::ld_hlp_e),                      // 0x73
        instr!("LD (HL),H", 8, load8::ld_hlp_h),                      // 0x74
        instr!("LD (HL),L", 8, load8::ld_hlp_l),                      // 0x75
        instr!("HALT", 4, misc::halt),                                // 0x76
        instr!("LD (HL),A", 8, load8::ld_hlp_a),                      // 0x77
        instr!("LD A,B", 4, load8::ld_a_b),                           // 0x78
        instr!("LD A,C", 4, load8::ld_a_c),                           // 0x79
        instr!("LD A,D", 4, load8::ld_a_d),                           // 0x7A
        instr!("LD A,E", 4, load8::ld_a_e),                           // 0x7B
        instr!("LD A,H", 4, load8::ld_a_h),                           // 0x7C
        instr!("LD A,L", 4, load8::ld_a_l),                           // 0x7D
        instr!("LD A,(HL)", 8, load8::ld_a_hlp),                      // 0x7E
        instr!("LD A,A", 4, load8::ld_a_a),                           // 0x7F

        instr!("ADD A,B", 4, alu8::add_a_b),                          // 0x80
        instr!("ADD A,C", 4, alu8::add_a_c),                          // 0x81
        instr!("ADD A,D", 4, alu8::add_a_d),                          // 0x82
        instr!("ADD A,E", 4, alu8::add_a_e),                          // 0x83
        instr!("ADD A,H", 4, alu8::add_a_h),                          // 0x84
        instr!("ADD A,L", 4, alu8::add_a_l),                          // 0x85
        instr!("ADD A,(HL)", 8, alu8::add_a_hlp),                     // 0x86
        instr!("ADD A,A", 4, alu8::add_a_a),                          // 0x87
        instr!("ADC A,B", 4, alu8::adc_a_b),                          // 0x88
        instr!("ADC A,C", 4, alu8::adc_a_c),                          // 0x89
        instr!("ADC A,D", 4, alu8::adc_a_d),                          // 0x8A
        instr!("ADC A,E", 4, alu8::adc_a_e),                          // 0x8B
        instr!("ADC A,H", 4, alu8::adc_a_h),                          // 0x8C
        instr!("ADC A,L", 4, alu8::adc_a_l),                          // 0x8D
        instr!("ADC A,(HL)", 8, alu8::adc_a_hlp),                     // 0x8E
        instr!("ADC A,A", 4, alu8::adc_a_a),                          // 0x8F

        instr!("SUB B", 4, alu8::sub_a_b),                            // 0x90
        instr!("SUB C", 4, alu8::sub_a_c),                            // 0x91
        instr!("SUB D", 4, alu8::sub_a_d),                            // 0x92
        instr!("SUB E", 4, alu8::sub_a_e),                            // 0x93
        instr!("SUB H", 4, alu8::sub_a_h),                            // 0x94
        instr!("SUB L", 4, alu8::sub_a_l),                            // 0x95
        instr!("SUB (HL)", 8, alu8::sub_a_hlp),                       // 0x96
        instr!("SUB A", 4, alu8::sub_a_a),                            // 0x97
        instr!("SBC A,B", 4, alu8::sbc_a_b),                          // 0x98
        instr!("SBC A,C", 4, alu8::sbc_a_c),                          // 0x99
        instr!("SBC A,D", 4, alu8::sbc_a_d),                          // 0x9A
        instr!("SBC A,E", 4, alu8::sbc_a_e),                          // 0x9B
        instr!("SBC A,H", 4, alu8::sbc_a_h),                          // 0x9C
        instr!("SBC A,L", 4, alu8::sbc_a_l),                          // 0x9D
        instr!("SBC A,(HL)", 8, alu8::sbc_a_hlp),                     // 0x9E
        instr!("SBC A,A", 4, alu8::sbc_a_a),                          // 0x9F

        instr!("AND B", 4, alu8::and_a_b),                            // 0xA0
        instr!("AND C", 4, alu8::and_a_c),                            // 0xA1
        instr!("AND D", 4, alu8::and_a_d),                            // 0xA2
        instr!("AND E", 4, alu8::and_a_e),                            // 0xA3
        instr!("AND H", 4, alu8::and_a_h),                            // 0xA4
        instr!("AND L", 4, alu8::and_a_l),                            // 0xA5
        instr!("AND (HL)", 8, alu8::and_a_hlp),                       // 0xA6
        instr!("AND A", 4, alu8::and_a_a),                            // 0xA7
        instr!("XOR B", 4, alu8::xor_a_b),                            // 0xA8
        instr!("XOR C", 4, alu8::xor_a_c),                            // 0xA9
        instr!("XOR D", 4, alu8::xor_a_d),                            // 0xAA
        instr!("XOR E", 4, alu8::xor_a_e),                            // 0xAB
        instr!("XOR H", 4, alu8::xor_a_h),                            // 0xAC
        instr!("XOR L", 4, alu8::xor_a_l),                            // 0xAD
        instr!("XOR (HL)", 8, alu8::xor_a_hlp),                       // 0xAE
        instr!("XOR A", 4, alu8::xor_a_a),                            // 0xAF

        instr!("OR B", 4, alu8::or_a_b),                              // 0xB0
        instr!("OR C", 4, alu8::or_a_c),                              // 0xB1
        instr!("OR D", 4, alu8::or_a_d),                              // 0xB2
        instr!("OR E", 4, alu8::or_a_e),                              // 0xB3
        instr!("OR H", 4, alu8::or_a_h),                              // 0xB4
        instr!("OR L", 4, alu8::or_a_l),                              // 0xB5
        instr!("OR (HL)", 8, alu8::or_a_hlp),                         // 0xB6
        instr!("OR A", 4, alu8::or_a_a),                              // 0xB7
        instr!("CP B", 4, alu8::cp_a_b),                              // 0xB8
        instr!("CP C", 4, alu8::cp_a_c),                              // 0xB9
        instr!("CP D", 4, alu8::cp_a_d),                              // 0xBA
        instr!("CP E", 4, alu8::cp_a_e),                              // 0xBB
        instr!("CP H", 4, alu8::cp_a_h),                              // 0xBC
        instr!("CP L", 4, alu8::cp_a_l),                              // 0xBD
        instr!("CP (HL)", 8, alu8::cp_a_hlp),                         // 0xBE
        instr!("CP A", 4, alu8::cp_a_a),                              // 0xBF

        instr!("RET NZ", 8, control_flow::ret_nz),                   // 0xC0
        instr!("POP BC", 12, load16::pop_bc),                        // 0xC1
        instr!("JP NZ,a16", 12, control_flow::jp_nz_a16),             // 0xC2
        instr!("JP a16", 16, control_flow::jp_a16),                   // 0xC3
        instr!("CALL NZ,a16", 12, control_flow::call_nz_a16),         // 0xC4
        instr!("PUSH BC", 16, load16::push_bc),                       // 0xC5
        instr!("ADD A,d8", 8, alu8::add_a_n),                         // 0xC6
        instr!("RST 00H", 16, control_flow::rst_00),                  // 0xC7
        instr!("RET Z", 8, control_flow::ret_z),                      // 0xC8
        instr!("RET", 16, control_flow::ret),                         // 0xC9
        instr!("JP Z,a16", 12, control_flow::jp_z_a16),               // 0xCA
        instr!("PREFIX CB", 4, misc::unreachable_slot),                // 0xCB
        instr!("CALL Z,a16", 12, control_flow::call_z_a16),           // 0xCC
        instr!("CALL a16", 24, control_flow::call_a16),               // 0xCD
        instr!("ADC A,d8", 8, alu8::adc_a_n),                         // 0xCE
        instr!("RST 08H", 16, control_flow::rst_08),                  // 0xCF

        instr!("RET NC", 8, control_flow::ret_nc),                    // 0xD0
        instr!("POP DE", 12, load16::pop_de),                        // 0xD1
        instr!("JP NC,a16", 12, control_flow::jp_nc_a16),             // 0xD2
        instr!("ILLEGAL D3", 4, misc::unreachable_slot),              // 0xD3
        instr!("CALL NC,a16", 12, control_flow::call_nc_a16),         // 0xD4
        instr!("PUSH DE", 16, load16::push_de),                       // 0xD5
        instr!("SUB d8", 8, alu8::sub_a_n),                           // 0xD6
        instr!("RST 10H", 16, control_flow::rst_10),                  // 0xD7
        instr!("RET C", 8, control_flow::ret_c),                      // 0xD8
        instr!("RETI", 16, control_flow::reti),                       // 0xD9
        instr!("JP C,a16", 12, control_flow::jp_c_a16),               // 0xDA
        instr!("ILLEGAL DB", 4, misc::unreachable_slot),              // 0xDB
        instr!("CALL C,a16", 12, control_flow::call_c_a16),           // 0xDC
        instr!("ILLEGAL DD", 4, misc::unreachable_slot),              // 0xDD
        instr!("SBC A,d8", 8, alu8::sbc_a_n),                         // 0xDE
        instr!("RST 18H", 16, control_flow::rst_18),                  // 0xDF

        instr!("LDH (a8),A", 12, load8::ldh_a8p_a),                   // 0xE0
        instr!("POP HL", 12, load16::pop_hl),                        // 0xE1
        instr!("LD (C),A", 8, load8::ld_cp_a),                        // 0xE2
        instr!("ILLEGAL E3", 4, misc::unreachable_slot),              // 0xE3
        instr!("ILLEGAL E4", 4, misc::unreachable_slot),              // 0xE4
        instr!("PUSH HL", 16, load16::push_hl),                       // 0xE5
        instr!("AND d8", 8, alu8::and_a_n),                           // 0xE6
        instr!("RST 20H", 16, control_flow::rst_20),                  // 0xE7
        instr!("ADD SP,r8", 16, alu16::add_sp_e8),                    // 0xE8
        instr!("JP HL", 4, control_flow::jp_hl),                      // 0xE9
        instr!("LD (a16),A", 16, load8::ld_a16p_a),                   // 0xEA
        instr!("ILLEGAL EB", 4, misc::unreachable_slot),              // 0xEB
        instr!("ILLEGAL EC", 4, misc::unreachable_slot),              // 0xEC
        instr!("ILLEGAL ED", 4, misc::unreachable_slot),              // 0xED
        instr!("XOR d8", 8, alu8::xor_a_n),                           // 0xEE
        instr!("RST 28H", 16, control_flow::rst_28),                  // 0xEF

        instr!("LDH A,(a8)", 12, load8::ldh_a_a8p),                   // 0xF0
        instr!("POP AF", 12, load16::pop_af),                        // 0xF1
        instr!("LD A,(C)", 8, load8::ld_a_cp),                        // 0xF2
        instr!("DI", 4, misc::di),                                    // 0xF3
        instr!("ILLEGAL F4", 4, misc::unreachable_slot),              // 0xF4
        instr!("PUSH AF", 16, load16::push_af),                       // 0xF5
        instr!("OR d8", 8, alu8::or_a_n),                             // 0xF6
        instr!("RST 30H", 16, control_flow::rst_30),                  // 0xF7
        instr!("LD HL,SP+r8", 12, load16::ld_hl_sp_e8),               // 0xF8
        instr!("LD SP,HL", 8, load16::ld_sp_hl),                      // 0xF9
        instr!("LD A,(a16)", 16, load8::ld_a_a16p),                   // 0xFA
        instr!("EI", 4, misc::ei),                                    // 0xFB
        instr!("ILLEGAL FC", 4, misc::unreachable_slot),              // 0xFC
        instr!("ILLEGAL FD", 4, misc::unreachable_slot),              // 0xFD
        instr!("CP d8", 8, alu8::cp_a_n),                             // 0xFE
        instr!("RST 38H", 16, control_flow::rst_38),                  // 0xFF
    ];

    pub(super) static ref CB_INSTRUCTIONS: [Instruction; 256] = [
        instr!("RLC B", 8, rotate_shift::cb_rlc_b), instr!("RLC C", 8, rotate_shift::cb_rlc_c),
        instr!("RLC D", 8, rotate_shift::cb_rlc_d), instr!("RLC E", 8, rotate_shift::cb_rlc_e),
        instr!("RLC H", 8, rotate_shift::cb_rlc_h), instr!("RLC L", 8, rotate_shift::cb_rlc_l),
        instr!("RLC (HL)", 16, rotate_shift::cb_rlc_hlp), instr!("RLC A", 8, rotate_shift::cb_rlc_a),
        instr!("RRC B", 8, rotate_shift::cb_rrc_b), instr!("RRC C", 8, rotate_shift::cb_rrc_c),
        instr!("RRC D", 8, rotate_shift::cb_rrc_d), instr!("RRC E", 8, rotate_shift::cb_rrc_e),
        instr!("RRC H", 8, rotate_shift::cb_rrc_h), instr!("RRC L", 8, rotate_shift::cb_rrc_l),
        instr!("RRC (HL)", 16, rotate_shift::cb_rrc_hlp), instr!("RRC A", 8, rotate_shift::cb_rrc_a),

        instr!("RL B", 8, rotate_shift::cb_rl_b), instr!("RL C", 8, rotate_shift::cb_rl_c),
        instr!("RL D", 8, rotate_shift::cb_rl_d), instr!("RL E", 8, rotate_shift::cb_rl_e),
        instr!("RL H", 8, rotate_shift::cb_rl_h), instr!("RL L", 8, rotate_shift::cb_rl_l),
        instr!("RL (HL)", 16, rotate_shift::cb_rl_hlp), instr!("RL A", 8, rotate_shift::cb_rl_a),
        instr!("RR B", 8, rotate_shift::cb_rr_b), instr!("RR C", 8, rotate_shift::cb_rr_c),
        instr!("RR D", 8, rotate_shift::cb_rr_d), instr!("RR E", 8, rotate_shift::cb_rr_e),
        instr!("RR H", 8, rotate_shift::cb_rr_h), instr!("RR L", 8, rotate_shift::cb_rr_l),
        instr!("RR (HL)", 16, rotate_shift::cb_rr_hlp), instr!("RR A", 8, rotate_shift::cb_rr_a),

        instr!("SLA B", 8, rotate_shift::cb_sla_b), instr!("SLA C", 8, rotate_shift::cb_sla_c),
        instr!("SLA D", 8, rotate_shift::cb_sla_d), instr!("SLA E", 8, rotate_shift::cb_sla_e),
        instr!("SLA H", 8, rotate_shift::cb_sla_h), instr!("SLA L", 8, rotate_shift::cb_sla_l),
        instr!("SLA (HL)", 16, rotate_shift::cb_sla_hlp), instr!("SLA A", 8, rotate_shift::cb_sla_a),
        instr!("SRA B", 8, rotate_shift::cb_sra_b), instr!("SRA C", 8, rotate_shift::cb_sra_c),
        instr!("SRA D", 8, rotate_shift::cb_sra_d), instr!("SRA E", 8, rotate_shift::cb_sra_e),
        instr!("SRA H", 8, rotate_shift::cb_sra_h), instr!("SRA L", 8, rotate_shift::cb_sra_l),
        instr!("SRA (HL)", 16, rotate_shift::cb_sra_hlp), instr!("SRA A", 8, rotate_shift::cb_sra_a),

        instr!("SWAP B", 8, rotate_shift::cb_swap_b), instr!("SWAP C", 8, rotate_shift::cb_swap_c),
        instr!("SWAP D", 8, rotate_shift::cb_swap_d), instr!("SWAP E", 8, rotate_shift::cb_swap_e),
        instr!("SWAP H", 8, rotate_shift::cb_swap_h), instr!("SWAP L", 8, rotate_shift::cb_swap_l),
        instr!("SWAP (HL)", 16, rotate_shift::cb_swap_hlp), instr!("SWAP A", 8, rotate_shift::cb_swap_a),
        instr!("SRL B", 8, rotate_shift::cb_srl_b), instr!("SRL C", 8, rotate_shift::cb_srl_c),
        instr!("SRL D", 8, rotate_shift::cb_srl_d), instr!("SRL E", 8, rotate_shift::cb_srl_e),
        instr!("SRL H", 8, rotate_shift::cb_srl_h), instr!("SRL L", 8, rotate_shift::cb_srl_l),
        instr!("SRL (HL)", 16, rotate_shift::cb_srl_hlp), instr!("SRL A", 8, rotate_shift::cb_srl_a),

        instr!("BIT 0,B", 8, bit_ops::cb_bit0_b), instr!("BIT 0,C", 8, bit_ops::cb_bit0_c),
        instr!("BIT 0,D", 8, bit_ops::cb_bit0_d), instr!("BIT 0,E", 8, bit_ops::cb_bit0_e),
        instr!("BIT 0,H", 8, bit_ops::cb_bit0_h), instr!("BIT 0,L", 8, bit_ops::cb_bit0_l),
        instr!("BIT 0,(HL)", 12, bit_ops::cb_bit0_hlp), instr!("BIT 0,A", 8, bit_ops::cb_bit0_a),
        instr!("BIT 1,B", 8, bit_ops::cb_bit1_b), instr!("BIT 1,C", 8, bit_ops::cb_bit1_c),
        instr!("BIT 1,D", 8, bit_ops::cb_bit1_d), instr!("BIT 1,E", 8, bit_ops::cb_bit1_e),
        instr!("BIT 1,H", 8, bit_ops::cb_bit1_h), instr!("BIT 1,L", 8, bit_ops::cb_bit1_l),
        instr!("BIT 1,(HL)", 12, bit_ops::cb_bit1_hlp), instr!("BIT 1,A", 8, bit_ops::cb_bit1_a),

        instr!("BIT 2,B", 8, bit_ops::cb_bit2_b), instr!("BIT 2,C", 8, bit_ops::cb_bit2_c),
        instr!("BIT 2,D", 8, bit_ops::cb_bit2_d), instr!("BIT 2,E", 8, bit_ops::cb_bit2_e),
        instr!("BIT 2,H", 8, bit_ops::cb_bit2_h), instr!("BIT 2,L", 8, bit_ops::cb_bit2_l),
        instr!("BIT 2,(HL)", 12, bit_ops::cb_bit2_hlp), instr!("BIT 2,A", 8, bit_ops::cb_bit2_a),
        instr!("BIT 3,B", 8, bit_ops::cb_bit3_b), instr!("BIT 3,C", 8, bit_ops::cb_bit3_c),
        instr!("BIT 3,D", 8, bit_ops::cb_bit3_d), instr!("BIT 3,E", 8, bit_ops::cb_bit3_e),
        instr!("BIT 3,H", 8, bit_ops::cb_bit3_h), instr!("BIT 3,L", 8, bit_ops::cb_bit3_l),
        instr!("BIT 3,(HL)", 12, bit_ops::cb_bit3_hlp), instr!("BIT 3,A", 8, bit_ops::cb_bit3_a),

        instr!("BIT 4,B", 8, bit_ops::cb_bit4_b), instr!("BIT 4,C", 8, bit_ops::cb_bit4_c),
        instr!("BIT 4,D", 8, bit_ops::cb_bit4_d), instr!("BIT 4,E", 8, bit_ops::cb_bit4_e),
        instr!("BIT 4,H", 8, bit_ops::cb_bit4_h), instr!("BIT 4,L", 8, bit_ops::cb_bit4_l),
        instr!("BIT 4,(HL)", 12, bit_ops::cb_bit4_hlp), instr!("BIT 4,A", 8, bit_ops::cb_bit4_a),
        instr!("BIT 5,B", 8, bit_ops::cb_bit5_b), instr!("BIT 5,C", 8, bit_ops::cb_bit5_c),
        instr!("BIT 5,D", 8, bit_ops::cb_bit5_d), instr!("BIT 5,E", 8, bit_ops::cb_bit5_e),
        instr!("BIT 5,H", 8, bit_ops::cb_bit5_h), instr!("BIT 5,L", 8, bit_ops::cb_bit5_l),
        instr!("BIT 5,(HL)", 12, bit_ops::cb_bit5_hlp), instr!("BIT 5,A", 8, bit_ops::cb_bit5_a),

        instr!("BIT 6,B", 8, bit_ops::cb_bit6_b), instr!("BIT 6,C", 8, bit_ops::cb_bit6_c),
        instr!("BIT 6,D", 8, bit_ops::cb_bit6_d), instr!("BIT 6,E", 8, bit_ops::cb_bit6_e),
        instr!("BIT 6,H", 8, bit_ops::cb_bit6_h), instr!("BIT 6,L", 8, bit_ops::cb_bit6_l),
        instr!("BIT 6,(HL)", 12, bit_ops::cb_bit6_hlp), instr!("BIT 6,A", 8, bit_ops::cb_bit6_a),
        instr!("BIT 7,B", 8, bit_ops::cb_bit7_b), instr!("BIT 7,C", 8, bit_ops::cb_bit7_c),
        instr!("BIT 7,D", 8, bit_ops::cb_bit7_d), instr!("BIT 7,E", 8, bit_ops::cb_bit7_e),
        instr!("BIT 7,H", 8, bit_ops::cb_bit7_h), instr!("BIT 7,L", 8, bit_ops::cb_bit7_l),
        instr!("BIT 7,(HL)", 12, bit_ops::cb_bit7_hlp), instr!("BIT 7,A", 8, bit_ops::cb_bit7_a),

        instr!("RES 0,B", 8, bit_ops::cb_res0_b), instr!("RES 0,C", 8, bit_ops::cb_res0_c),
        instr!("RES 0,D", 8, bit_ops::cb_res0_d), instr!("RES 0,E", 8, bit_ops::cb_res0_e),
        instr!("RES 0,H", 8, bit_ops::cb_res0_h), instr!("RES 0,L", 8, bit_ops::cb_res0_l),
        instr!("RES 0,(HL)", 16, bit_ops::cb_res0_hlp), instr!("RES 0,A", 8, bit_ops::cb_res0_a),
        instr!("RES 1,B", 8, bit_ops::cb_res1_b), instr!("RES 1,C", 8, bit_ops::cb_res1_c),
        instr!("RES 1,D", 8, bit_ops::cb_res1_d), instr!("RES 1,E", 8, bit_ops::cb_res1_e),
        instr!("RES 1,H", 8, bit_ops::cb_res1_h), instr!("RES 1,L", 8, bit_ops::cb_res1_l),
        instr!("RES 1,(HL)", 16, bit_ops::cb_res1_hlp), instr!("RES 1,A", 8, bit_ops::cb_res1_a),

        instr!("RES 2,B", 8, bit_ops::cb_res2_b), instr!("RES 2,C", 8, bit_ops::cb_res2_c),
        instr!("RES 2,D", 8, bit_ops::cb_res2_d), instr!("RES 2,E", 8, bit_ops::cb_res2_e),
        instr!("RES 2,H", 8, bit_ops::cb_res2_h), instr!("RES 2,L", 8, bit_ops::cb_res2_l),
        instr!("RES 2,(HL)", 16, bit_ops::cb_res2_hlp), instr!("RES 2,A", 8, bit_ops::cb_res2_a),
        instr!("RES 3,B", 8, bit_ops::cb_res3_b), instr!("RES 3,C", 8, bit_ops::cb_res3_c),
        instr!("RES 3,D", 8, bit_ops::cb_res3_d), instr!("RES 3,E", 8, bit_ops::cb_res3_e),
        instr!("RES 3,H", 8, bit_ops::cb_res3_h), instr!("RES 3,L", 8, bit_ops::cb_res3_l),
        instr!("RES 3,(HL)", 16, bit_ops::cb_res3_hlp), instr!("RES 3,A", 8, bit_ops::cb_res3_a),

        instr!("RES 4,B", 8, bit_ops::cb_res4_b), instr!("RES 4,C", 8, bit_ops::cb_res4_c),
        instr!("RES 4,D", 8, bit_ops::cb_res4_d), instr!("RES 4,E", 8, bit_ops::cb_res4_e),
        instr!("RES 4,H", 8, bit_ops::cb_res4_h), instr!("RES 4,L", 8, bit_ops::cb_res4_l),
        instr!("RES 4,(HL)", 16, bit_ops::cb_res4_hlp), instr!("RES 4,A", 8, bit_ops::cb_res4_a),
        instr!("RES 5,B", 8, bit_ops::cb_res5_b), instr!("RES 5,C", 8, bit_ops::cb_res5_c),
        instr!("RES 5,D", 8, bit_ops::cb_res5_d), instr!("RES 5,E", 8, bit_ops::cb_res5_e),
        instr!("RES 5,H", 8, bit_ops::cb_res5_h), instr!("RES 5,L", 8, bit_ops::cb_res5_l),
        instr!("RES 5,(HL)", 16, bit_ops::cb_res5_hlp), instr!("RES 5,A", 8, bit_ops::cb_res5_a),

        instr!("RES 6,B", 8, bit_ops::cb_res6_b), instr!("RES 6,C", 8, bit_ops::cb_res6_c),
        instr!("RES 6,D", 8, bit_ops::cb_res6_d), instr!("RES 6,E", 8, bit_ops::cb_res6_e),
        instr!("RES 6,H", 8, bit_ops::cb_res6_h), instr!("RES 6,L", 8, bit_ops::cb_res6_l),
        instr!("RES 6,(HL)", 16, bit_ops::cb_res6_hlp), instr!("RES 6,A", 8, bit_ops::cb_res6_a),
        instr!("RES 7,B", 8, bit_ops::cb_res7_b), instr!("RES 7,C", 8, bit_ops::cb_res7_c),
        instr!("RES 7,D", 8, bit_ops::cb_res7_d), instr!("RES 7,E", 8, bit_ops::cb_res7_e),
        instr!("RES 7,H", 8, bit_ops::cb_res7_h), instr!("RES 7,L", 8, bit_ops::cb_res7_l),
        instr!("RES 7,(HL)", 16, bit_ops::cb_res7_hlp), instr!("RES 7,A", 8, bit_ops::cb_res7_a),

        instr!("SET 0,B", 8, bit_ops::cb_set0_b), instr!("SET 0,C", 8, bit_ops::cb_set0_c),
        instr!("SET 0,D", 8, bit_ops::cb_set0_d), instr!("SET 0,E", 8, bit_ops::cb_set0_e),
        instr!("SET 0,H", 8, bit_ops::cb_set0_h), instr!("SET 0,L", 8, bit_ops::cb_set0_l),
        instr!("SET 0,(HL)", 16, bit_ops::cb_set0_hlp), instr!("SET 0,A", 8, bit_ops::cb_set0_a),
        instr!("SET 1,B", 8, bit_ops::cb_set1_b), instr!("SET 1,C", 8, bit_ops::cb_set1_c),
        instr!("SET 1,D", 8, bit_ops::cb_set1_d), instr!("SET 1,E", 8, bit_ops::cb_set1_e),
        instr!("SET 1,H", 8, bit_ops::cb_set1_h), instr!("SET 1,L", 8, bit_ops::cb_set1_l),
        instr!("SET 1,(HL)", 16, bit_ops::cb_set1_hlp), instr!("SET 1,A", 8, bit_ops::cb_set1_a),

        instr!("SET 2,B", 8, bit_ops::cb_set2_b), instr!("SET 2,C", 8, bit_ops::cb_set2_c),
        instr!("SET 2,D", 8, bit_ops::cb_set2_d), instr!("SET 2,E", 8, bit_ops::cb_set2_e),
        instr!("SET 2,H", 8, bit_ops::cb_set2_h), instr!("SET 2,L", 8, bit_ops::cb_set2_l),
        instr!("SET 2,(HL)", 16, bit_ops::cb_set2_hlp), instr!("SET 2,A", 8, bit_ops::cb_set2_a),
        instr!("SET 3,B", 8, bit_ops::cb_set3_b), instr!("SET 3,C", 8, bit_ops::cb_set3_c),
        instr!("SET 3,D", 8, bit_ops::cb_set3_d), instr!("SET 3,E", 8, bit_ops::cb_set3_e),
        instr!("SET 3,H", 8, bit_ops::cb_set3_h), instr!("SET 3,L", 8, bit_ops::cb_set3_l),
        instr!("SET 3,(HL)", 16, bit_ops::cb_set3_hlp), instr!("SET 3,A", 8, bit_ops::cb_set3_a),

        instr!("SET 4,B", 8, bit_ops::cb_set4_b), instr!("SET 4,C", 8, bit_ops::cb_set4_c),
        instr!("SET 4,D", 8, bit_ops::cb_set4_d), instr!("SET 4,E", 8, bit_ops::cb_set4_e),
        instr!("SET 4,H", 8, bit_ops::cb_set4_h), instr!("SET 4,L", 8, bit_ops::cb_set4_l),
        instr!("SET 4,(HL)", 16, bit_ops::cb_set4_hlp), instr!("SET 4,A", 8, bit_ops::cb_set4_a),
        instr!("SET 5,B", 8, bit_ops::cb_set5_b), instr!("SET 5,C", 8, bit_ops::cb_set5_c),
        instr!("SET 5,D", 8, bit_ops::cb_set5_d), instr!("SET 5,E", 8, bit_ops::cb_set5_e),
        instr!("SET 5,H", 8, bit_ops::cb_set5_h), instr!("SET 5,L", 8, bit_ops::cb_set5_l),
        instr!("SET 5,(HL)", 16, bit_ops::cb_set5_hlp), instr!("SET 5,A", 8, bit_ops::cb_set5_a),

        instr!("SET 6,B", 8, bit_ops::cb_set6_b), instr!("SET 6,C", 8, bit_ops::cb_set6_c),
        instr!("SET 6,D", 8, bit_ops::cb_set6_d), instr!("SET 6,E", 8, bit_ops::cb_set6_e),
        instr!("SET 6,H", 8, bit_ops::cb_set6_h), instr!("SET 6,L", 8, bit_ops::cb_set6_l),
        instr!("SET 6,(HL)", 16, bit_ops::cb_set6_hlp), instr!("SET 6,A", 8, bit_ops::cb_set6_a),
        instr!("SET 7,B", 8, bit_ops::cb_set7_b), instr!("SET 7,C", 8, bit_ops::cb_set7_c),
        instr!("SET 7,D", 8, bit_ops::cb_set7_d), instr!("SET 7,E", 8, bit_ops::cb_set7_e),
        instr!("SET 7,H", 8, bit_ops::cb_set7_h), instr!("SET 7,L", 8, bit_ops::cb_set7_l),
        instr!("SET 7,(HL)", 16, bit_ops::cb_set7_hlp), instr!("SET 7,A", 8, bit_ops::cb_set7_a),
    ];
}
