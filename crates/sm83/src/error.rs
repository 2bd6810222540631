use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The opcode byte at `address` has no instruction. The CPU is left in
    /// [`RunState::Faulted`](crate::RunState::Faulted) with its registers as
    /// they were before the fetch.
    #[error("unimplemented opcode {opcode:#04x} at {address:#06x}")]
    UnimplementedOpcode { opcode: u8, address: u16 },
}
