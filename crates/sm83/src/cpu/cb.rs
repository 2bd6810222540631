use super::alu::ShiftOp;
use super::operand::Location8;
use super::table::{Instruction, Operand};
use super::{Cpu, MemoryBus};

// CB-prefixed instructions (bit operations, shifts, and rotates).
//
// Opcode layout: x = bits 6..7 selects the row, y = bits 3..5 the shift
// operation or bit index, z = bits 0..2 the register (6 = (HL)). Each form
// reads its target once and, except BIT, writes it back once.
impl Cpu {
    pub(super) fn exec_cb_shift(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let loc = Location8::from_index(instr.opcode);
        let value = self.read_loc8(bus, loc);
        let result = self.alu_shift(ShiftOp::from_bits(instr.opcode >> 3), value);
        self.write_loc8(bus, loc, result);
        0
    }

    pub(super) fn exec_cb_bit(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let bit = (instr.opcode >> 3) & 0x07;
        let value = self.read_loc8(bus, Location8::from_index(instr.opcode));
        self.alu_bit(bit, value);
        0
    }

    pub(super) fn exec_cb_res(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let bit = (instr.opcode >> 3) & 0x07;
        let loc = Location8::from_index(instr.opcode);
        let value = self.read_loc8(bus, loc);
        self.write_loc8(bus, loc, value & !(1 << bit));
        0
    }

    pub(super) fn exec_cb_set(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let bit = (instr.opcode >> 3) & 0x07;
        let loc = Location8::from_index(instr.opcode);
        let value = self.read_loc8(bus, loc);
        self.write_loc8(bus, loc, value | (1 << bit));
        0
    }
}
