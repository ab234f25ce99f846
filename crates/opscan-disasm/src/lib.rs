//! # opscan-disasm
//!
//! Decode engine for the opscan disassembler: a static opcode registry and
//! a streaming decoder for a small single-byte-opcode x86-like subset.
//!
//! The registry maps each opcode byte to its mnemonic and operand encoding;
//! the decoder walks a byte buffer one instruction at a time, falling back
//! to an `UNKNOWN` marker on unregistered bytes and stopping with an error
//! when a matched encoding runs past the buffer end.

pub mod error;
pub mod modrm;
pub mod opcodes;
pub mod traits;

mod decoder;

pub use decoder::FlatDisassembler;
pub use error::DecodeError;
pub use traits::{Disassembler, Disassembly};
