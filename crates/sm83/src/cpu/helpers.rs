use super::{Cpu, MemoryBus};

impl Cpu {
    #[inline]
    pub(super) fn fetch8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = bus.read_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian 16-bit immediate.
    #[inline]
    pub(super) fn fetch16(&mut self, bus: &mut dyn MemoryBus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn MemoryBus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // High byte first so the low byte lands at the final SP.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write_byte(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn MemoryBus) -> u16 {
        let lo = bus.read_byte(self.regs.sp);
        let hi = bus.read_byte(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Condition field of JR/JP/CALL/RET cc (0=NZ, 1=Z, 2=NC, 3=C).
    #[inline]
    pub(super) fn cc_condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.regs.zero(),
            1 => self.regs.zero(),
            2 => !self.regs.carry(),
            _ => self.regs.carry(),
        }
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is relative to the address following the operand,
    /// which is where PC already points. Returns the extra cycles taken.
    pub(super) fn jr(&mut self, offset: u8, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as u16);
            4
        } else {
            0
        }
    }

    pub(super) fn jp_cond(&mut self, addr: u16, cond: bool) -> u32 {
        if cond {
            self.regs.pc = addr;
            4
        } else {
            0
        }
    }

    pub(super) fn call_cond(&mut self, bus: &mut dyn MemoryBus, addr: u16, cond: bool) -> u32 {
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            12
        } else {
            0
        }
    }

    pub(super) fn ret_cond(&mut self, bus: &mut dyn MemoryBus, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.pop_u16(bus);
            12
        } else {
            0
        }
    }
}
