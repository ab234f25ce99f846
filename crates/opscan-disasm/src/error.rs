//! Disassembly error types.

use thiserror::Error;

/// Error type for instruction decoding.
///
/// Unregistered opcodes are not errors; they decode to the `UNKNOWN`
/// fallback. The only failure mode is a matched encoding that needs more
/// trailing bytes than the buffer holds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Instruction was truncated (not enough bytes).
    #[error("truncated instruction at offset {offset:#x}: need {needed} bytes, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Creates a new Truncated error.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            available,
        }
    }

    /// Offset of the opcode byte that started the failed decode.
    pub fn offset(&self) -> usize {
        match self {
            Self::Truncated { offset, .. } => *offset,
        }
    }
}
