use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

/// Named flag selector for the by-name accessors on [`Registers`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z,
    N,
    H,
    C,
}

impl Flag {
    #[inline]
    pub const fn mask(self) -> Flags {
        match self {
            Flag::Z => Flags::Z,
            Flag::N => Flags::N,
            Flag::H => Flags::H,
            Flag::C => Flags::C,
        }
    }
}

/// Registers for the SM83 core.
///
/// `f` is stored as [`Flags`], so the low nibble of F cannot hold stray bits.
/// The 16-bit pairs are views over the 8-bit fields and are never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Raw value of F as seen by `PUSH AF`.
    #[inline]
    pub fn f(&self) -> u8 {
        self.f.bits()
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        // Lower 4 bits of F are always zero.
        self.f = Flags::from_bits_truncate(value);
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.f.contains(flag.mask())
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.f.set(flag.mask(), value);
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.flag(Flag::Z)
    }

    #[inline]
    pub fn set_zero(&mut self, value: bool) {
        self.set_flag(Flag::Z, value);
    }

    #[inline]
    pub fn subtract(&self) -> bool {
        self.flag(Flag::N)
    }

    #[inline]
    pub fn set_subtract(&mut self, value: bool) {
        self.set_flag(Flag::N, value);
    }

    #[inline]
    pub fn half_carry(&self) -> bool {
        self.flag(Flag::H)
    }

    #[inline]
    pub fn set_half_carry(&mut self, value: bool) {
        self.set_flag(Flag::H, value);
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.flag(Flag::C)
    }

    #[inline]
    pub fn set_carry(&mut self, value: bool) {
        self.set_flag(Flag::C, value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Register pair selected by the `rp` field of an opcode
    /// (0=BC, 1=DE, 2=HL, 3=SP).
    #[inline]
    pub fn rp(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    #[inline]
    pub fn set_rp(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// Register pair selected by the `rp2` field used by PUSH/POP
    /// (0=BC, 1=DE, 2=HL, 3=AF).
    #[inline]
    pub fn rp2(&self, index: u8) -> u16 {
        match index & 0x03 {
            3 => self.af(),
            other => self.rp(other),
        }
    }

    #[inline]
    pub fn set_rp2(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            3 => self.set_af(value),
            other => self.set_rp(other, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_round_trip_is_lossless() {
        let mut regs = Registers::default();
        for value in 0..=u16::MAX {
            regs.set_bc(value);
            regs.set_de(value ^ 0xFFFF);
            regs.set_hl(value.rotate_left(4));
            assert_eq!(regs.bc(), value);
            assert_eq!(regs.de(), value ^ 0xFFFF);
            assert_eq!(regs.hl(), value.rotate_left(4));
        }
    }

    #[test]
    fn pairs_do_not_alias() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        regs.set_de(0x5678);
        regs.set_hl(0x9ABC);
        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!((regs.d, regs.e), (0x56, 0x78));
        assert_eq!((regs.h, regs.l), (0x9A, 0xBC));
        assert_eq!(regs.a, 0);
        assert_eq!(regs.sp, 0);
    }

    #[test]
    fn f_low_nibble_is_always_clear() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);

        regs.set_f(0x0F);
        assert_eq!(regs.f(), 0x00);
    }

    #[test]
    fn named_flag_accessors_map_to_fixed_bits() {
        let mut regs = Registers::default();
        regs.set_zero(true);
        assert_eq!(regs.f(), 0x80);
        regs.set_subtract(true);
        assert_eq!(regs.f(), 0xC0);
        regs.set_half_carry(true);
        assert_eq!(regs.f(), 0xE0);
        regs.set_carry(true);
        assert_eq!(regs.f(), 0xF0);

        regs.set_flag(Flag::N, false);
        assert!(!regs.subtract());
        assert!(regs.zero() && regs.half_carry() && regs.carry());
    }
}
