//! opscan - a flat linear disassembler
//!
//! Usage:
//!   opscan <binary>       Disassemble a raw binary file
//!   opscan -v <binary>    Include offsets and raw bytes in the listing

use anyhow::{Context, Result};
use clap::Parser;
use opscan_core::Instruction;
use opscan_disasm::{Disassembler, FlatDisassembler};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opscan")]
#[command(about = "A flat linear disassembler for a small x86-like opcode set", long_about = None)]
struct Cli {
    /// Path to the binary file
    binary: PathBuf,

    /// Show instruction offsets and raw bytes
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data = fs::read(&cli.binary)
        .with_context(|| format!("Failed to read binary: {}", cli.binary.display()))?;

    let disasm = FlatDisassembler::new();
    for decoded in disasm.disassemble(&data) {
        // A truncated trailing instruction ends the listing; everything
        // decoded before it has already been printed.
        let instr = decoded?;
        if cli.verbose {
            print_verbose(&instr);
        } else {
            println!("{}", instr);
        }
    }

    Ok(())
}

/// Prints one listing line with the offset and raw byte columns.
fn print_verbose(instr: &Instruction) {
    print!("{:#06x}:  ", instr.offset);

    for byte in &instr.bytes {
        print!("{:02x} ", byte);
    }

    // Pad to align the mnemonic column
    for _ in instr.bytes.len()..5 {
        print!("   ");
    }

    println!(" {}", instr);
}
