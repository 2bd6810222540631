use crate::cpu::operand::Location8;
use crate::cpu::table::{Instruction, Operand};
use crate::cpu::{Cpu, MemoryBus};

/// Base of the high page addressed by LDH and LD (C).
const HIGH_PAGE: u16 = 0xFF00;

impl Cpu {
    pub(in crate::cpu) fn exec_ld_rr_d16(
        &mut self,
        _bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x01 | 0x11 | 0x21 | 0x31));
        self.regs.set_rp(instr.opcode >> 4, operand.word());
        0
    }

    pub(in crate::cpu) fn exec_ld_r_d8(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        let loc = Location8::from_index(instr.opcode >> 3);
        self.write_loc8(bus, loc, operand.byte());
        0
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(
        &mut self,
        bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        let addr = operand.word();
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write_byte(addr, lo);
        bus.write_byte(addr.wrapping_add(1), hi);
        0
    }

    /// LDH (a8),A / LDH A,(a8)
    pub(in crate::cpu) fn exec_ldh_a8(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        let addr = HIGH_PAGE | operand.byte() as u16;
        match instr.opcode {
            0xE0 => bus.write_byte(addr, self.regs.a),
            0xF0 => self.regs.a = bus.read_byte(addr),
            _ => unreachable!(),
        }
        0
    }

    /// LD (C),A / LD A,(C)
    pub(in crate::cpu) fn exec_ldh_c(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        let addr = HIGH_PAGE | self.regs.c as u16;
        match instr.opcode {
            0xE2 => bus.write_byte(addr, self.regs.a),
            0xF2 => self.regs.a = bus.read_byte(addr),
            _ => unreachable!(),
        }
        0
    }

    /// LD (a16),A / LD A,(a16)
    pub(in crate::cpu) fn exec_ld_a16_a(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        operand: Operand,
    ) -> u32 {
        let addr = operand.word();
        match instr.opcode {
            0xEA => bus.write_byte(addr, self.regs.a),
            0xFA => self.regs.a = bus.read_byte(addr),
            _ => unreachable!(),
        }
        0
    }

    /// Address for LD (BC/DE/HL+/HL-) forms. HL is post-incremented or
    /// post-decremented for the `HL+`/`HL-` variants.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_add(1));
                addr
            }
            _ => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_sub(1));
                addr
            }
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(instr.opcode);
        bus.write_byte(addr, self.regs.a);
        0
    }

    pub(in crate::cpu) fn exec_ld_a_indirect(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(instr.opcode);
        self.regs.a = bus.read_byte(addr);
        0
    }

    /// LD r1,r2 for `0x40..=0x7F` except HALT.
    pub(in crate::cpu) fn exec_ld_r_r(
        &mut self,
        bus: &mut dyn MemoryBus,
        instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&instr.opcode) && instr.opcode != 0x76);
        let dst = Location8::from_index(instr.opcode >> 3);
        let src = Location8::from_index(instr.opcode);
        let value = self.read_loc8(bus, src);
        self.write_loc8(bus, dst, value);
        0
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(
        &mut self,
        _bus: &mut dyn MemoryBus,
        _instr: &Instruction,
        _operand: Operand,
    ) -> u32 {
        self.regs.sp = self.regs.hl();
        0
    }
}
