use bitmatch::{bits::Word, compiled::CompiledPattern, group::PatternGroup, part::PatternSpec};
use criterion::{Criterion, criterion_group, criterion_main};

/// One pattern per opcode: `opcode_bits` literal bits followed by a variable tail.
fn build_group(opcode_bits: u32) -> PatternGroup {
    let tail = 32 - opcode_bits;
    let mut patterns: Vec<CompiledPattern> = Vec::with_capacity(1 << opcode_bits);

    for opcode in 0..(1u32 << opcode_bits) {
        let literal: String = (0..opcode_bits)
            .rev()
            .map(|bit| if (opcode >> bit) & 1 == 1 { '1' } else { '0' })
            .collect();
        let text = format!("{literal}_{}", "r".repeat(tail as usize));

        let spec = PatternSpec::parse(&text).unwrap();
        patterns.push(spec.compile_named(format!("op{opcode}")).unwrap());
    }

    PatternGroup::new(patterns).unwrap()
}

fn gen_words(count: usize) -> Vec<Word> {
    // Deterministic but non-trivial pattern
    (0..count as Word)
        .map(|i| i.wrapping_mul(0x9E37_79B9))
        .collect()
}

fn bench_group_match(c: &mut Criterion) {
    let words = gen_words(1024);

    for &opcode_bits in &[1u32, 4, 6, 8] {
        let group = build_group(opcode_bits);

        c.bench_function(&format!("decode_{}_patterns", group.len()), |b| {
            b.iter(|| {
                for &word in &words {
                    let _ = group.decode(word);
                }
            })
        });
    }
}

fn bench_compile(c: &mut Criterion) {
    c.bench_function("parse_and_compile_32_bits", |b| {
        b.iter(|| "1010_dddd_ssss_0_iiiiiiiiiiiiiiiiiii".parse::<CompiledPattern>().unwrap())
    });
}

criterion_group!(benches, bench_group_match, bench_compile);
criterion_main!(benches);
