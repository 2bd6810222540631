//! Opcode tables.
//!
//! Two fixed 256-entry tables map an opcode byte to its [`Instruction`]:
//! one for the base opcode space and one for the `0xCB`-prefixed space.
//! Both are built once on first use. A `None` entry in the base table is an
//! opcode the SM83 does not implement; the engine turns it into a fault.
//! The base entry at [`PREFIX_CB`] is also `None`: the engine recognises the
//! prefix byte before consulting the table.

use std::borrow::Cow;
use std::fmt;

use lazy_static::lazy_static;

use super::alu::{AluOp, ShiftOp};
use super::{Cpu, MemoryBus};

/// First byte of every two-byte opcode.
pub const PREFIX_CB: u8 = 0xCB;

/// Number of immediate bytes that follow the opcode in the instruction
/// stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandWidth {
    None,
    Byte,
    Word,
}

impl OperandWidth {
    /// Immediate bytes following the opcode.
    #[inline]
    pub fn operand_len(self) -> u16 {
        match self {
            OperandWidth::None => 0,
            OperandWidth::Byte => 1,
            OperandWidth::Word => 2,
        }
    }
}

/// Immediate operand fetched by the engine before the handler runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    /// The 8-bit immediate. Only handlers of `Byte`-width entries call this.
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            Operand::Byte(value) => value,
            other => unreachable!("handler expected an 8-bit immediate, got {other:?}"),
        }
    }

    /// The 16-bit immediate. Only handlers of `Word`-width entries call this.
    #[inline]
    pub fn word(self) -> u16 {
        match self {
            Operand::Word(value) => value,
            other => unreachable!("handler expected a 16-bit immediate, got {other:?}"),
        }
    }
}

/// Instruction semantics. Returns cycles spent on top of the table's base
/// cost (non-zero only for taken conditional branches).
pub type Handler = fn(&mut Cpu, &mut dyn MemoryBus, &Instruction, Operand) -> u32;

/// One decoded opcode: everything the engine needs to run it.
#[derive(Clone)]
pub struct Instruction {
    pub opcode: u8,
    /// `true` for entries of the `0xCB` table.
    pub prefixed: bool,
    /// Assembly text. Immediates appear as `d8`, `d16`, `a8`, `a16` or `r8`.
    pub mnemonic: Cow<'static, str>,
    pub width: OperandWidth,
    /// Base cost in T-cycles. For conditional instructions this is the
    /// not-taken cost.
    pub cycles: u32,
    pub handler: Handler,
}

impl Instruction {
    /// Encoded length in bytes, prefix and immediates included.
    #[inline]
    pub fn encoded_len(&self) -> u16 {
        let opcode_bytes = if self.prefixed { 2 } else { 1 };
        opcode_bytes + self.width.operand_len()
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("opcode", &format_args!("{:#04x}", self.opcode))
            .field("prefixed", &self.prefixed)
            .field("mnemonic", &self.mnemonic)
            .field("width", &self.width)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

lazy_static! {
    static ref BASE_TABLE: [Option<Instruction>; 256] =
        std::array::from_fn(|opcode| base_entry(opcode as u8));
    static ref CB_TABLE: [Option<Instruction>; 256] =
        std::array::from_fn(|opcode| Some(cb_entry(opcode as u8)));
}

/// Look up an unprefixed opcode.
#[inline]
pub fn base(opcode: u8) -> Option<&'static Instruction> {
    let table: &'static [Option<Instruction>; 256] = &BASE_TABLE;
    table[opcode as usize].as_ref()
}

/// Look up the second byte of a `0xCB`-prefixed opcode.
#[inline]
pub fn prefixed(opcode: u8) -> Option<&'static Instruction> {
    let table: &'static [Option<Instruction>; 256] = &CB_TABLE;
    table[opcode as usize].as_ref()
}

const R8_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const RP_NAMES: [&str; 4] = ["BC", "DE", "HL", "SP"];
const RP2_NAMES: [&str; 4] = ["BC", "DE", "HL", "AF"];
const CC_NAMES: [&str; 4] = ["NZ", "Z", "NC", "C"];

fn entry(
    opcode: u8,
    mnemonic: impl Into<Cow<'static, str>>,
    width: OperandWidth,
    cycles: u32,
    handler: Handler,
) -> Option<Instruction> {
    Some(Instruction {
        opcode,
        prefixed: false,
        mnemonic: mnemonic.into(),
        width,
        cycles,
        handler,
    })
}

fn base_entry(opcode: u8) -> Option<Instruction> {
    use OperandWidth::{Byte, None as Implied, Word};

    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = (y >> 1) as usize;
    let r_y = R8_NAMES[y as usize];
    let r_z = R8_NAMES[z as usize];

    match opcode {
        0x00 => entry(opcode, "NOP", Implied, 4, Cpu::exec_nop),
        0x08 => entry(opcode, "LD (a16),SP", Word, 20, Cpu::exec_ld_a16_sp),
        0x10 => entry(opcode, "STOP", Byte, 4, Cpu::exec_stop),
        0x18 => entry(opcode, "JR r8", Byte, 8, Cpu::exec_jr),
        0x20 | 0x28 | 0x30 | 0x38 => entry(
            opcode,
            format!("JR {},r8", CC_NAMES[(y & 0x03) as usize]),
            Byte,
            8,
            Cpu::exec_jr_cc,
        ),

        0x01 | 0x11 | 0x21 | 0x31 => entry(
            opcode,
            format!("LD {},d16", RP_NAMES[p]),
            Word,
            12,
            Cpu::exec_ld_rr_d16,
        ),
        0x09 | 0x19 | 0x29 | 0x39 => entry(
            opcode,
            format!("ADD HL,{}", RP_NAMES[p]),
            Implied,
            8,
            Cpu::exec_add_hl_rr,
        ),

        0x02 => entry(opcode, "LD (BC),A", Implied, 8, Cpu::exec_ld_indirect_a),
        0x12 => entry(opcode, "LD (DE),A", Implied, 8, Cpu::exec_ld_indirect_a),
        0x22 => entry(opcode, "LD (HL+),A", Implied, 8, Cpu::exec_ld_indirect_a),
        0x32 => entry(opcode, "LD (HL-),A", Implied, 8, Cpu::exec_ld_indirect_a),
        0x0A => entry(opcode, "LD A,(BC)", Implied, 8, Cpu::exec_ld_a_indirect),
        0x1A => entry(opcode, "LD A,(DE)", Implied, 8, Cpu::exec_ld_a_indirect),
        0x2A => entry(opcode, "LD A,(HL+)", Implied, 8, Cpu::exec_ld_a_indirect),
        0x3A => entry(opcode, "LD A,(HL-)", Implied, 8, Cpu::exec_ld_a_indirect),

        0x03 | 0x13 | 0x23 | 0x33 => entry(
            opcode,
            format!("INC {}", RP_NAMES[p]),
            Implied,
            8,
            Cpu::exec_inc16,
        ),
        0x0B | 0x1B | 0x2B | 0x3B => entry(
            opcode,
            format!("DEC {}", RP_NAMES[p]),
            Implied,
            8,
            Cpu::exec_dec16,
        ),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => entry(
            opcode,
            format!("INC {r_y}"),
            Implied,
            if y == 6 { 12 } else { 4 },
            Cpu::exec_inc8,
        ),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => entry(
            opcode,
            format!("DEC {r_y}"),
            Implied,
            if y == 6 { 12 } else { 4 },
            Cpu::exec_dec8,
        ),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => entry(
            opcode,
            format!("LD {r_y},d8"),
            Byte,
            if y == 6 { 12 } else { 8 },
            Cpu::exec_ld_r_d8,
        ),

        0x07 => entry(opcode, "RLCA", Implied, 4, Cpu::exec_rotate_a),
        0x0F => entry(opcode, "RRCA", Implied, 4, Cpu::exec_rotate_a),
        0x17 => entry(opcode, "RLA", Implied, 4, Cpu::exec_rotate_a),
        0x1F => entry(opcode, "RRA", Implied, 4, Cpu::exec_rotate_a),
        0x27 => entry(opcode, "DAA", Implied, 4, Cpu::exec_daa),
        0x2F => entry(opcode, "CPL", Implied, 4, Cpu::exec_cpl),
        0x37 => entry(opcode, "SCF", Implied, 4, Cpu::exec_scf),
        0x3F => entry(opcode, "CCF", Implied, 4, Cpu::exec_ccf),

        0x76 => entry(opcode, "HALT", Implied, 4, Cpu::exec_halt),
        0x40..=0x7F => entry(
            opcode,
            format!("LD {r_y},{r_z}"),
            Implied,
            if y == 6 || z == 6 { 8 } else { 4 },
            Cpu::exec_ld_r_r,
        ),

        0x80..=0xBF => entry(
            opcode,
            format!("{}{r_z}", AluOp::from_bits(y).mnemonic()),
            Implied,
            if z == 6 { 8 } else { 4 },
            Cpu::exec_alu_reg,
        ),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => entry(
            opcode,
            format!("{}d8", AluOp::from_bits(y).mnemonic()),
            Byte,
            8,
            Cpu::exec_alu_imm,
        ),

        0xC0 | 0xC8 | 0xD0 | 0xD8 => entry(
            opcode,
            format!("RET {}", CC_NAMES[(y & 0x03) as usize]),
            Implied,
            8,
            Cpu::exec_ret_cc,
        ),
        0xC2 | 0xCA | 0xD2 | 0xDA => entry(
            opcode,
            format!("JP {},a16", CC_NAMES[(y & 0x03) as usize]),
            Word,
            12,
            Cpu::exec_jp_cc,
        ),
        0xC4 | 0xCC | 0xD4 | 0xDC => entry(
            opcode,
            format!("CALL {},a16", CC_NAMES[(y & 0x03) as usize]),
            Word,
            12,
            Cpu::exec_call_cc,
        ),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => entry(
            opcode,
            format!("POP {}", RP2_NAMES[p]),
            Implied,
            12,
            Cpu::exec_pop_rr,
        ),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => entry(
            opcode,
            format!("PUSH {}", RP2_NAMES[p]),
            Implied,
            16,
            Cpu::exec_push_rr,
        ),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => entry(
            opcode,
            format!("RST {:02X}H", opcode & 0x38),
            Implied,
            16,
            Cpu::exec_rst,
        ),

        0xC3 => entry(opcode, "JP a16", Word, 16, Cpu::exec_jp_a16),
        0xC9 => entry(opcode, "RET", Implied, 16, Cpu::exec_ret),
        0xCD => entry(opcode, "CALL a16", Word, 24, Cpu::exec_call_a16),
        0xD9 => entry(opcode, "RETI", Implied, 16, Cpu::exec_reti),
        0xE0 => entry(opcode, "LDH (a8),A", Byte, 12, Cpu::exec_ldh_a8),
        0xF0 => entry(opcode, "LDH A,(a8)", Byte, 12, Cpu::exec_ldh_a8),
        0xE2 => entry(opcode, "LD (C),A", Implied, 8, Cpu::exec_ldh_c),
        0xF2 => entry(opcode, "LD A,(C)", Implied, 8, Cpu::exec_ldh_c),
        0xE8 => entry(opcode, "ADD SP,r8", Byte, 16, Cpu::exec_add_sp_e8),
        0xE9 => entry(opcode, "JP HL", Implied, 4, Cpu::exec_jp_hl),
        0xEA => entry(opcode, "LD (a16),A", Word, 16, Cpu::exec_ld_a16_a),
        0xFA => entry(opcode, "LD A,(a16)", Word, 16, Cpu::exec_ld_a16_a),
        0xF3 => entry(opcode, "DI", Implied, 4, Cpu::exec_di),
        0xFB => entry(opcode, "EI", Implied, 4, Cpu::exec_ei),
        0xF8 => entry(opcode, "LD HL,SP+r8", Byte, 12, Cpu::exec_ld_hl_sp_e8),
        0xF9 => entry(opcode, "LD SP,HL", Implied, 8, Cpu::exec_ld_sp_hl),

        // PREFIX_CB plus the opcode holes D3, DB, DD, E3, E4, EB, EC, ED,
        // F4, FC, FD.
        _ => None,
    }
}

fn cb_entry(opcode: u8) -> Instruction {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let r_z = R8_NAMES[z as usize];
    let memory = z == 6;

    let handler: Handler = match x {
        0 => Cpu::exec_cb_shift,
        1 => Cpu::exec_cb_bit,
        2 => Cpu::exec_cb_res,
        _ => Cpu::exec_cb_set,
    };
    let mnemonic = match x {
        0 => format!("{} {r_z}", ShiftOp::from_bits(y).mnemonic()),
        1 => format!("BIT {y},{r_z}"),
        2 => format!("RES {y},{r_z}"),
        _ => format!("SET {y},{r_z}"),
    };
    // BIT only reads (HL); the other rows read and write it back.
    let cycles = match (x, memory) {
        (_, false) => 8,
        (1, true) => 12,
        (_, true) => 16,
    };

    Instruction {
        opcode,
        prefixed: true,
        mnemonic: mnemonic.into(),
        width: OperandWidth::None,
        cycles,
        handler,
    }
}
