//! Disassembler driven by the opcode tables.
//!
//! Works on a byte slice rather than a [`MemoryBus`](crate::MemoryBus) so a
//! debugger can render code without triggering read side effects.

use crate::cpu::table::{self, OperandWidth, PREFIX_CB};

/// Decode the instruction at the start of `mem`.
///
/// `addr` is the absolute address of `mem[0]`, used to show relative jump
/// targets. Returns the text and the instruction length in bytes. Bytes past
/// the end of `mem` read as zero; an opcode hole renders as `DB $xx`.
pub fn disassemble(mem: &[u8], addr: u16) -> (String, u16) {
    let get = |offset: usize| -> u8 { mem.get(offset).copied().unwrap_or(0) };
    let op = get(0);

    let instr = if op == PREFIX_CB {
        table::prefixed(get(1))
    } else {
        table::base(op)
    };
    let Some(instr) = instr else {
        return (format!("DB ${op:02X}"), 1);
    };

    let imm_at = usize::from(instr.encoded_len() - instr.width.operand_len());
    let text = match instr.width {
        OperandWidth::None => instr.mnemonic.to_string(),
        OperandWidth::Byte => {
            let value = get(imm_at);
            let mnemonic = &instr.mnemonic;
            if mnemonic.starts_with("JR") {
                let target = addr
                    .wrapping_add(instr.encoded_len())
                    .wrapping_add(value as i8 as u16);
                mnemonic.replace("r8", &format!("${target:04X}"))
            } else if mnemonic.contains("+r8") {
                mnemonic.replace("+r8", &format!("{:+}", value as i8))
            } else if mnemonic.contains("r8") {
                mnemonic.replace("r8", &format!("{}", value as i8))
            } else if mnemonic.contains("a8") {
                mnemonic.replace("a8", &format!("$FF{value:02X}"))
            } else {
                mnemonic.replace("d8", &format!("${value:02X}"))
            }
        }
        OperandWidth::Word => {
            let value = u16::from_le_bytes([get(imm_at), get(imm_at + 1)]);
            instr
                .mnemonic
                .replace("d16", &format!("${value:04X}"))
                .replace("a16", &format!("${value:04X}"))
        }
    };

    (text, instr.encoded_len())
}
