//! Instruction handlers referenced by the opcode tables.
//!
//! Every handler has the [`Handler`](super::table::Handler) signature: the
//! engine has already fetched the opcode and any immediate bytes, so a
//! handler only touches the bus for indirect operands and stack traffic.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
