//! SM83 CPU core: the 8-bit processor of the Game Boy.
//!
//! The crate models the register file, the flag unit, every base and
//! `0xCB`-prefixed instruction and the fetch/decode/execute loop. Memory,
//! video, audio, input and interrupt dispatch live behind [`MemoryBus`] and
//! in whatever drives [`Cpu::step`].

pub mod config;
pub mod cpu;
pub mod disasm;
pub mod error;

pub use config::{CpuConfig, PowerOnState};
pub use cpu::{Cpu, CpuSnapshot, Flag, Flags, MemoryBus, Registers, RunState};
pub use disasm::disassemble;
pub use error::CpuError;
