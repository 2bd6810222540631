use crate::cpu::table::{Instruction, Operand};
use crate::cpu::{Cpu, MemoryBus, RunState};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        0
    }

    pub(in crate::cpu) fn exec_halt(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        log::debug!("SM83 halted at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.state = RunState::Halted;
        0
    }

    pub(in crate::cpu) fn exec_stop(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        // STOP is a 2-byte instruction; the engine has already consumed the
        // padding byte as its operand. Leaving the low-power state is up to
        // whatever drives the joypad lines, so the core treats it as HALT.
        log::debug!("SM83 stopped at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.state = RunState::Halted;
        0
    }

    pub(in crate::cpu) fn exec_di(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        0
    }

    pub(in crate::cpu) fn exec_ei(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        0
    }
}
