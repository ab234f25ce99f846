#![no_main]

use libfuzzer_sys::fuzz_target;
use opscan_disasm::{Disassembler, FlatDisassembler};

fuzz_target!(|data: &[u8]| {
    let disasm = FlatDisassembler::new();

    // Single-instruction decode must never panic; errors are fine.
    let _ = disasm.decode_instruction(data, 0);

    // A full pass must always move forward and never run past the buffer.
    let mut consumed = 0;
    for decoded in disasm.disassemble(data) {
        match decoded {
            Ok(instr) => {
                assert!(instr.size >= disasm.min_instruction_size());
                assert!(instr.size <= disasm.max_instruction_size());
                assert_eq!(instr.offset, consumed);
                consumed += instr.size;
            }
            Err(_) => break, // truncated tail ends the pass
        }
    }
    assert!(consumed <= data.len());
});
