use crate::cpu::alu::{AluOp, ShiftOp};
use crate::cpu::operand::{Location8, Source8};
use crate::cpu::table::{Instruction, Operand};
use crate::cpu::{Cpu, MemoryBus};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r and A,(HL) (`0x80..=0xBF`).
    pub(in crate::cpu) fn exec_alu_reg(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&instr.opcode));
        let op = AluOp::from_bits(instr.opcode >> 3);
        let src = Source8::Loc(Location8::from_index(instr.opcode));
        let value = self.read_source8(bus, src);
        self.alu_op(op, value);
        0
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,d8.
    pub(in crate::cpu) fn exec_alu_imm(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(
            instr.opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let op = AluOp::from_bits(instr.opcode >> 3);
        let value = self.read_source8(bus, Source8::Immediate(operand.byte()));
        self.alu_op(op, value);
        0
    }

    pub(in crate::cpu) fn exec_rotate_a(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let op = match instr.opcode {
            0x07 => ShiftOp::Rlc,
            0x0F => ShiftOp::Rrc,
            0x17 => ShiftOp::Rl,
            0x1F => ShiftOp::Rr,
            _ => unreachable!(),
        };
        self.alu_rotate_a(op);
        0
    }

    pub(in crate::cpu) fn exec_add_hl_rr(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.rp(instr.opcode >> 4);
        self.alu_add16_hl(value);
        0
    }

    pub(in crate::cpu) fn exec_add_sp_e8(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, operand.byte());
        0
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_e8(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        let result = self.alu_add16_signed(self.regs.sp, operand.byte());
        self.regs.set_hl(result);
        0
    }

    pub(in crate::cpu) fn exec_daa(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.alu_daa();
        0
    }

    pub(in crate::cpu) fn exec_cpl(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.regs.a = !self.regs.a;
        self.regs.set_half_carry(true);
        self.regs.set_subtract(true);
        0
    }

    pub(in crate::cpu) fn exec_scf(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.regs.set_carry(true);
        self.regs.set_half_carry(false);
        self.regs.set_subtract(false);
        0
    }

    pub(in crate::cpu) fn exec_ccf(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let carry = self.regs.carry();
        self.regs.set_carry(!carry);
        self.regs.set_half_carry(false);
        self.regs.set_subtract(false);
        0
    }
}
