//! Benchmarks for decode-pass performance.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use opscan_disasm::{Disassembler, FlatDisassembler};

/// Sample code: a realistic mix of every registered encoding plus a few
/// unregistered bytes that exercise the fallback path.
const CODE: &[u8] = &[
    0x50, 0x00, // PUSH R0
    0x89, 0xD8, // MOV R3, R0
    0x89, 0xCB, // MOV R1, R3
    0xE9, 0x10, 0x00, 0x00, 0x00, // JMP 0x10
    0x50, 0x02, // PUSH R2
    0xFF, 0xFE, 0xFF, 0xFF, 0xFF, // CALL 0xFFFFFFFE
    0xAB, 0x0F, // unregistered
    0xC3, // RET
];

/// Larger block for throughput testing (repeated pattern, whole
/// instructions only so the pass runs to the end).
fn generate_large_block(size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    while result.len() + CODE.len() <= size {
        result.extend_from_slice(CODE);
    }
    result
}

fn bench_decode_pass(c: &mut Criterion) {
    let disasm = FlatDisassembler::new();

    let mut group = c.benchmark_group("decode_pass");
    group.throughput(Throughput::Bytes(CODE.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| {
            for decoded in disasm.disassemble(black_box(CODE)) {
                let _ = black_box(decoded);
            }
        })
    });
    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let disasm = FlatDisassembler::new();
    let block = generate_large_block(64 * 1024);

    let mut group = c.benchmark_group("decode_throughput");
    group.throughput(Throughput::Bytes(block.len() as u64));
    group.bench_function("64k", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for decoded in disasm.disassemble(black_box(&block)) {
                if decoded.is_ok() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_decode_pass, bench_throughput);
criterion_main!(benches);
