use criterion::{black_box, criterion_group, criterion_main, Criterion};
use newsletter_compiler_html::{compile_to_html, CompileOptions};
use newsletter_model::*;

fn newsletter_blocks(copies: usize) -> Vec<ContentBlock> {
    let mut ids = IDGenerator::from_seed("bench");
    let mut blocks: Vec<ContentBlock> = (0..copies)
        .flat_map(|_| BlockType::ALL.to_vec())
        .map(|t| create_block(t, &mut ids))
        .collect();
    renumber(&mut blocks);
    blocks
}

fn compile_document(c: &mut Criterion) {
    let blocks = newsletter_blocks(20);
    let theme = Theme::default();
    let settings = EmailSettings::default();

    c.bench_function("compile_html_pretty", |b| {
        b.iter(|| {
            compile_to_html(
                black_box(&blocks),
                &theme,
                &settings,
                CompileOptions::default(),
            )
        })
    });

    c.bench_function("compile_html_compact", |b| {
        b.iter(|| {
            compile_to_html(
                black_box(&blocks),
                &theme,
                &settings,
                CompileOptions::compact(),
            )
        })
    });
}

criterion_group!(benches, compile_document);
criterion_main!(benches);
