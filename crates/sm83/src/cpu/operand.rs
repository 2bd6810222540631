use super::{Cpu, MemoryBus};

/// Plain 8-bit registers addressable by opcode register fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

/// A readable and writable 8-bit location: a register or the byte at HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location8 {
    Reg(Reg8),
    IndirectHl,
}

impl Location8 {
    /// Decode the standard 3-bit register field:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Location8::Reg(Reg8::B),
            1 => Location8::Reg(Reg8::C),
            2 => Location8::Reg(Reg8::D),
            3 => Location8::Reg(Reg8::E),
            4 => Location8::Reg(Reg8::H),
            5 => Location8::Reg(Reg8::L),
            6 => Location8::IndirectHl,
            _ => Location8::Reg(Reg8::A),
        }
    }
}

/// Where an ALU operand comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source8 {
    Loc(Location8),
    /// Already fetched from the instruction stream by the engine.
    Immediate(u8),
}

impl Cpu {
    #[inline]
    pub(super) fn reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn set_reg8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::A => self.regs.a = value,
        }
    }

    /// Read a location. `(HL)` costs exactly one bus read.
    #[inline]
    pub(super) fn read_loc8(&mut self, bus: &mut dyn MemoryBus, loc: Location8) -> u8 {
        match loc {
            Location8::Reg(reg) => self.reg8(reg),
            Location8::IndirectHl => bus.read_byte(self.regs.hl()),
        }
    }

    #[inline]
    pub(super) fn write_loc8(&mut self, bus: &mut dyn MemoryBus, loc: Location8, value: u8) {
        match loc {
            Location8::Reg(reg) => self.set_reg8(reg, value),
            Location8::IndirectHl => bus.write_byte(self.regs.hl(), value),
        }
    }

    /// Resolve an ALU operand to its value.
    #[inline]
    pub(super) fn read_source8(&mut self, bus: &mut dyn MemoryBus, src: Source8) -> u8 {
        match src {
            Source8::Loc(loc) => self.read_loc8(bus, loc),
            Source8::Immediate(value) => value,
        }
    }
}
