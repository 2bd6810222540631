use crate::cpu::table::{Instruction, Operand};
use crate::cpu::{Cpu, MemoryBus};

impl Cpu {
    pub(in crate::cpu) fn exec_push_rr(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.regs.rp2(instr.opcode >> 4);
        self.push_u16(bus, value);
        0
    }

    /// POP rr. `POP AF` drops the low nibble of F.
    pub(in crate::cpu) fn exec_pop_rr(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        self.regs.set_rp2(instr.opcode >> 4, value);
        0
    }

    pub(in crate::cpu) fn exec_rst(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (instr.opcode & 0x38) as u16;
        0
    }

    pub(in crate::cpu) fn exec_call_a16(
        &mut self,
        bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = operand.word();
        0
    }

    pub(in crate::cpu) fn exec_ret(
        &mut self,
        bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        0
    }

    pub(in crate::cpu) fn exec_reti(
        &mut self,
        bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.ime_enable_pending = false;
        0
    }
}
