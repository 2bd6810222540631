use crate::cpu::operand::Location8;
use crate::cpu::table::{Instruction, Operand};
use crate::cpu::{Cpu, MemoryBus};

impl Cpu {
    pub(in crate::cpu) fn exec_inc8(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(
            matches!(
                instr.opcode,
                0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C
            ),
            "unexpected INC r opcode {:#04x}",
            instr.opcode
        );

        let loc = Location8::from_index(instr.opcode >> 3);
        let value = self.read_loc8(bus, loc);
        let result = self.alu_inc8(value);
        self.write_loc8(bus, loc, result);
        0
    }

    pub(in crate::cpu) fn exec_dec8(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(
            matches!(
                instr.opcode,
                0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D
            ),
            "unexpected DEC r opcode {:#04x}",
            instr.opcode
        );

        let loc = Location8::from_index(instr.opcode >> 3);
        let value = self.read_loc8(bus, loc);
        let result = self.alu_dec8(value);
        self.write_loc8(bus, loc, result);
        0
    }

    pub(in crate::cpu) fn exec_inc16(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x03 | 0x13 | 0x23 | 0x33));
        let rp = instr.opcode >> 4;
        let value = self.regs.rp(rp).wrapping_add(1);
        self.regs.set_rp(rp, value);
        0
    }

    pub(in crate::cpu) fn exec_dec16(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        let rp = instr.opcode >> 4;
        let value = self.regs.rp(rp).wrapping_sub(1);
        self.regs.set_rp(rp, value);
        0
    }
}
