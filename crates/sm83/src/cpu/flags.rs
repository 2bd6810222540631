//! Flag computation for every ALU operation class.
//!
//! These functions hold no state: they take the pre-operation value, the
//! operand, any incoming carry and the raw (unmasked) result, and return the
//! new F value. Operations that leave some flags untouched take the prior
//! flags and carry those bits through.

use super::Flags;

#[inline]
fn pack(z: bool, n: bool, h: bool, c: bool) -> Flags {
    let mut flags = Flags::empty();
    flags.set(Flags::Z, z);
    flags.set(Flags::N, n);
    flags.set(Flags::H, h);
    flags.set(Flags::C, c);
    flags
}

/// ADD/ADC: `raw = a + operand + carry_in`.
#[inline]
pub fn add8(a: u8, operand: u8, carry_in: u8, raw: u16) -> Flags {
    pack(
        raw & 0xFF == 0,
        false,
        (a & 0x0F) + (operand & 0x0F) + carry_in > 0x0F,
        raw > 0xFF,
    )
}

/// SUB/SBC/CP: `raw = a - operand - carry_in` computed in a signed width.
#[inline]
pub fn sub8(a: u8, operand: u8, carry_in: u8, raw: i16) -> Flags {
    let half = (a & 0x0F) as i16 - (operand & 0x0F) as i16 - carry_in as i16;
    pack(raw as u8 == 0, true, half < 0, raw < 0)
}

/// AND always sets H and clears C.
#[inline]
pub fn and8(result: u8) -> Flags {
    pack(result == 0, false, true, false)
}

/// OR/XOR: only Z can be set.
#[inline]
pub fn logic8(result: u8) -> Flags {
    pack(result == 0, false, false, false)
}

/// INC r / INC (HL). C is preserved.
#[inline]
pub fn inc8(value: u8, result: u8, prior: Flags) -> Flags {
    pack(
        result == 0,
        false,
        (value & 0x0F) + 1 > 0x0F,
        prior.contains(Flags::C),
    )
}

/// DEC r / DEC (HL). C is preserved.
#[inline]
pub fn dec8(value: u8, result: u8, prior: Flags) -> Flags {
    pack(
        result == 0,
        true,
        value & 0x0F == 0,
        prior.contains(Flags::C),
    )
}

/// ADD HL,rr / ADD HL,SP: half-carry out of bit 11, carry out of bit 15.
/// Z is not affected.
#[inline]
pub fn add16_hl(hl: u16, operand: u16, raw: u32, prior: Flags) -> Flags {
    pack(
        prior.contains(Flags::Z),
        false,
        (hl & 0x0FFF) + (operand & 0x0FFF) > 0x0FFF,
        raw > 0xFFFF,
    )
}

/// ADD SP,e8 and LD HL,SP+e8.
///
/// The displacement is signed for the result but the flags treat it as an
/// unsigned byte added to the low byte of SP.
#[inline]
pub fn add_sp_e8(sp: u16, e8: u8) -> Flags {
    let e8 = e8 as u16;
    pack(
        false,
        false,
        (sp & 0x000F) + (e8 & 0x000F) > 0x000F,
        (sp & 0x00FF) + (e8 & 0x00FF) > 0x00FF,
    )
}

/// RLCA/RRCA/RLA/RRA: Z is always cleared.
#[inline]
pub fn rotate_a(carry_out: bool) -> Flags {
    pack(false, false, false, carry_out)
}

/// CB rotates and shifts (RLC..SRL, SWAP).
#[inline]
pub fn shift8(result: u8, carry_out: bool) -> Flags {
    pack(result == 0, false, false, carry_out)
}

/// BIT b,r: Z is the complement of the tested bit, H set, C preserved.
#[inline]
pub fn bit(bit_set: bool, prior: Flags) -> Flags {
    pack(!bit_set, false, true, prior.contains(Flags::C))
}

/// DAA: N is preserved, H cleared.
#[inline]
pub fn daa(result: u8, carry: bool, prior: Flags) -> Flags {
    pack(result == 0, prior.contains(Flags::N), false, carry)
}
