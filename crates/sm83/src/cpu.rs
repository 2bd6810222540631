mod alu;
mod bus;
mod cb;
mod exec;
pub mod flags;
mod helpers;
mod init;
mod operand;
mod regs;
mod step;
pub mod table;


use std::fmt;

pub use alu::{AluOp, ShiftOp};
pub use bus::MemoryBus;
pub use operand::{Location8, Reg8, Source8};
pub use regs::{Flag, Flags, Registers};

use crate::config::PowerOnState;

/// Execution state of the core.
///
/// `Halted` and `Faulted` are terminal until [`Cpu::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Halted,
    /// The byte at `address` decoded to an opcode the SM83 does not have.
    Faulted { opcode: u8, address: u16 },
}

/// SM83 (Game Boy DMG) CPU core.
///
/// Owns the register file and run state. Memory is reached only through the
/// [`MemoryBus`] passed to [`Cpu::step`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    /// Set by EI; IME is raised once the following instruction completes.
    ime_enable_pending: bool,
    state: RunState,
    /// T-cycles executed since the last reset.
    cycles: u64,
    power_on: PowerOnState,
}

/// Read-only copy of the CPU state for debuggers, front ends and save
/// states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub regs: Registers,
    pub ime: bool,
    pub state: RunState,
    pub cycles: u64,
}

impl Cpu {
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Total T-cycles executed since construction or the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            regs: self.regs,
            ime: self.ime,
            state: self.state,
            cycles: self.cycles,
        }
    }
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} [{}{}{}{}] IME={} {:?} cycles={}",
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.sp,
            r.pc,
            flag(r.zero(), 'Z'),
            flag(r.subtract(), 'N'),
            flag(r.half_carry(), 'H'),
            flag(r.carry(), 'C'),
            u8::from(self.ime),
            self.state,
            self.cycles,
        )
    }
}
