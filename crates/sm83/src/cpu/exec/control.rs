use crate::cpu::table::{Instruction, Operand};
use crate::cpu::{Cpu, MemoryBus};

impl Cpu {
    pub(in crate::cpu) fn exec_jr(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        self.jr(operand.byte(), true)
    }

    pub(in crate::cpu) fn exec_jr_cc(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cond = self.cc_condition(instr.opcode >> 3);
        self.jr(operand.byte(), cond)
    }

    pub(in crate::cpu) fn exec_jp_a16(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        self.regs.pc = operand.word();
        0
    }

    pub(in crate::cpu) fn exec_jp_cc(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cond = self.cc_condition(instr.opcode >> 3);
        self.jp_cond(operand.word(), cond)
    }

    pub(in crate::cpu) fn exec_jp_hl(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.regs.pc = self.regs.hl();
        0
    }

    pub(in crate::cpu) fn exec_call_cc(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cond = self.cc_condition(instr.opcode >> 3);
        self.call_cond(bus, operand.word(), cond)
    }

    pub(in crate::cpu) fn exec_ret_cc(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cond = self.cc_condition(instr.opcode >> 3);
        self.ret_cond(bus, cond)
    }
}
