use super::{flags, Cpu};

/// The eight accumulator operations selected by bits 3..5 of the
/// `0x80..=0xBF` and `0xC6..=0xFE` opcode groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

/// CB-prefix rotate/shift operations (x=0 row, selected by y).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        }
    }
}

impl Cpu {
    /// Apply one accumulator operation to an already-resolved operand.
    pub(super) fn alu_op(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). ADD never
    /// looks at the incoming carry.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.carry());
        let raw = a as u16 + value as u16 + carry_in as u16;

        self.regs.f = flags::add8(a, value, carry_in, raw);
        self.regs.a = raw as u8;
    }

    /// Core 8-bit SUB/SBC operation on A.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.sub_with_flags(value, use_carry);
    }

    #[inline]
    fn sub_with_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.carry());
        let raw = a as i16 - value as i16 - carry_in as i16;

        self.regs.f = flags::sub8(a, value, carry_in, raw);
        raw as u8
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.regs.f = flags::and8(self.regs.a);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.regs.f = flags::logic8(self.regs.a);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.regs.f = flags::logic8(self.regs.a);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let _ = self.sub_with_flags(value, false);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.regs.carry() { 0x60 } else { 0x00 };
        if self.regs.half_carry() {
            adjust |= 0x06;
        }

        if !self.regs.subtract() {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.f = flags::daa(a, adjust >= 0x60, self.regs.f);
        self.regs.a = a;
    }

    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.f = flags::inc8(value, result, self.regs.f);
        result
    }

    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.f = flags::dec8(value, result, self.regs.f);
        result
    }

    /// `ADD HL,rr` / `ADD HL,SP`.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let raw = hl as u32 + value as u32;

        self.regs.f = flags::add16_hl(hl, value, raw, self.regs.f);
        self.regs.set_hl(raw as u16);
    }

    /// Signed 8-bit displacement add used by `ADD SP,e8` and `LD HL,SP+e8`.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        self.regs.f = flags::add_sp_e8(base, imm8);
        base.wrapping_add(imm8 as i8 as u16)
    }

    /// RLCA/RRCA/RLA/RRA, selected by bits 3..4 of the opcode.
    pub(super) fn alu_rotate_a(&mut self, op: ShiftOp) {
        let (result, carry) = self.shift_value(op, self.regs.a);
        self.regs.a = result;
        self.regs.f = flags::rotate_a(carry);
    }

    /// CB rotates/shifts; returns the value to store back.
    pub(super) fn alu_shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let (result, carry) = self.shift_value(op, value);
        self.regs.f = flags::shift8(result, carry);
        result
    }

    fn shift_value(&self, op: ShiftOp, value: u8) -> (u8, bool) {
        let carry_in = self.regs.carry();
        match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            ShiftOp::Rr => (
                (value >> 1) | if carry_in { 0x80 } else { 0 },
                value & 0x01 != 0,
            ),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        }
    }

    /// `BIT b,value`.
    #[inline]
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        let bit_set = value & (1 << bit) != 0;
        self.regs.f = flags::bit(bit_set, self.regs.f);
    }
}
