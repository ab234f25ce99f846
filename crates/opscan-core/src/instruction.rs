//! Decoded instruction representation.

use crate::Operand;

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Offset of the first byte within the decoded buffer.
    pub offset: usize,
    /// Size in bytes.
    pub size: usize,
    /// Raw bytes of the encoding.
    pub bytes: Vec<u8>,
    /// High-level operation category.
    pub operation: Operation,
    /// Mnemonic string (e.g., "MOV", "RET").
    pub mnemonic: String,
    /// Operands (destination first, then sources).
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Creates a new instruction with minimal fields.
    pub fn new(offset: usize, size: usize, bytes: Vec<u8>, mnemonic: impl Into<String>) -> Self {
        Self {
            offset,
            size,
            bytes,
            operation: Operation::Unknown,
            mnemonic: mnemonic.into(),
            operands: Vec::new(),
        }
    }

    /// Sets the operation.
    pub fn with_operation(mut self, op: Operation) -> Self {
        self.operation = op;
        self
    }

    /// Adds an operand.
    pub fn with_operand(mut self, op: Operand) -> Self {
        self.operands.push(op);
        self
    }

    /// Sets operands.
    pub fn with_operands(mut self, ops: Vec<Operand>) -> Self {
        self.operands = ops;
        self
    }

    /// Returns the offset just past this instruction (offset + size).
    pub fn end_offset(&self) -> usize {
        self.offset + self.size
    }
}

/// High-level operation categories, one per instruction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Move,
    Jump,
    Call,
    Return,
    Push,
    /// Byte with no registered decoding.
    Unknown,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic)?;

        if !self.operands.is_empty() {
            write!(f, " ")?;
            for (i, op) in self.operands.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", op)?;
            }
        }

        Ok(())
    }
}
