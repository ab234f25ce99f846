//! Instruction operand types.

/// An instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// General-purpose register index (R0-R7).
    Register(u8),
    /// 32-bit immediate value.
    Immediate(i32),
    /// Placeholder operand for bytes with no registered decoding.
    Unspecified,
}

impl Operand {
    /// Returns true if this is a register operand.
    pub fn is_register(&self) -> bool {
        matches!(self, Self::Register(_))
    }

    /// Returns true if this is an immediate operand.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(n) => write!(f, "R{}", n),
            // Immediates print through their unsigned bit pattern, so a
            // negative value shows its two's-complement form.
            Self::Immediate(value) => write!(f, "0x{:X}", *value as u32),
            Self::Unspecified => write!(f, "N/A"),
        }
    }
}
