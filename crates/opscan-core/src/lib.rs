//! # opscan-core
//!
//! Core abstractions for the opscan disassembler. This crate defines the
//! instruction and operand model produced by the decode engine; it knows
//! nothing about byte encodings.

pub mod instruction;
pub mod operand;

pub use instruction::{Instruction, Operation};
pub use operand::Operand;
