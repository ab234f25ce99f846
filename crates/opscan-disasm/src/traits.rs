//! Disassembler traits and the streaming decode pass.

use crate::DecodeError;
use opscan_core::Instruction;

/// Trait for instruction decoders.
pub trait Disassembler {
    /// Decode a single instruction from the front of `bytes`.
    ///
    /// # Arguments
    /// * `bytes` - The raw bytes to decode
    /// * `offset` - Position of `bytes[0]` within the overall buffer,
    ///   recorded in the decoded instruction and in any error
    fn decode_instruction(&self, bytes: &[u8], offset: usize)
        -> Result<Instruction, DecodeError>;

    /// Returns the minimum instruction size for this decoder.
    fn min_instruction_size(&self) -> usize;

    /// Returns the maximum instruction size for this decoder.
    fn max_instruction_size(&self) -> usize;

    /// Disassemble a buffer as a lazy stream of instructions.
    ///
    /// Instructions are yielded in increasing offset order. The stream ends
    /// at the buffer end, or immediately after yielding an error when a
    /// matched encoding needs more bytes than remain.
    fn disassemble<'a>(&'a self, bytes: &'a [u8]) -> Disassembly<'a, Self>
    where
        Self: Sized,
    {
        Disassembly {
            disasm: self,
            bytes,
            offset: 0,
            done: false,
        }
    }
}

/// One decode pass over a byte buffer.
///
/// The pass owns its cursor; call [`Disassembler::disassemble`] again for a
/// fresh scan of the same buffer.
pub struct Disassembly<'a, D: Disassembler> {
    disasm: &'a D,
    bytes: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a, D: Disassembler> Disassembly<'a, D> {
    /// Current cursor position within the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a, D: Disassembler> Iterator for Disassembly<'a, D> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.bytes.len() {
            return None;
        }

        match self
            .disasm
            .decode_instruction(&self.bytes[self.offset..], self.offset)
        {
            Ok(instr) => {
                self.offset += instr.size;
                Some(Ok(instr))
            }
            Err(e) => {
                // A truncated tail exhausts the pass.
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a, D: Disassembler> std::iter::FusedIterator for Disassembly<'a, D> {}
