//! Flat linear instruction decoder.

use crate::error::DecodeError;
use crate::modrm::ModRM;
use crate::opcodes::{lookup, OperandEncoding};
use crate::traits::Disassembler;
use opscan_core::{Instruction, Operand, Operation};

/// Mnemonic for bytes with no registered decoding.
const UNKNOWN_MNEMONIC: &str = "UNKNOWN";

/// Decoder for the flat single-byte-opcode instruction subset.
///
/// Stateless; one instance can serve any number of concurrent decode
/// passes over different buffers.
pub struct FlatDisassembler;

impl FlatDisassembler {
    /// Creates a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlatDisassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Disassembler for FlatDisassembler {
    fn decode_instruction(
        &self,
        bytes: &[u8],
        offset: usize,
    ) -> Result<Instruction, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::truncated(offset, 1, 0));
        }

        let opcode = bytes[0];
        let entry = match lookup(opcode) {
            Some(entry) => entry,
            None => {
                // Unregistered byte: skip it and resynchronize on the next.
                return Ok(Instruction::new(offset, 1, vec![opcode], UNKNOWN_MNEMONIC)
                    .with_operation(Operation::Unknown)
                    .with_operand(Operand::Unspecified));
            }
        };

        // The whole encoding must fit before any trailing byte is read.
        let len = entry.encoding.encoded_len();
        if bytes.len() < len {
            return Err(DecodeError::truncated(offset, len, bytes.len()));
        }

        let operands = match entry.encoding {
            OperandEncoding::None => Vec::new(),

            OperandEncoding::ModRmRegPair => {
                let modrm = ModRM::parse(bytes[1]);
                vec![Operand::Register(modrm.reg), Operand::Register(modrm.rm)]
            }

            OperandEncoding::RegByte => {
                vec![Operand::Register(bytes[1] & 0x7)]
            }

            OperandEncoding::Imm32 => {
                let imm = i32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
                vec![Operand::Immediate(imm)]
            }
        };

        Ok(Instruction::new(offset, len, bytes[..len].to_vec(), entry.mnemonic)
            .with_operation(entry.operation)
            .with_operands(operands))
    }

    fn min_instruction_size(&self) -> usize {
        1
    }

    fn max_instruction_size(&self) -> usize {
        5
    }
}
