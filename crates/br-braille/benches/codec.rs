use std::hint::black_box;

use br_braille::{BrailleDecoder, BrailleFont, BrailleReader};
use br_core::pattern::BrailleEncoder;
use br_core::traits::{Decoder, Font};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_font(c: &mut Criterion) {
    c.bench_function("font_build_3x2", |b| {
        b.iter(|| BrailleFont::new(black_box(3), black_box(2), 'o', '.', &BrailleEncoder));
    });
}

fn bench_decode(c: &mut Criterion) {
    let font = BrailleFont::new(3, 2, 'o', '.', &BrailleEncoder);
    let decoder = BrailleDecoder::new(&BrailleEncoder);
    c.bench_function("decode_alphabet", |b| {
        b.iter(|| {
            for ch in 'a'..='z' {
                black_box(decoder.decode_bitmap(Some(font.bitmap(ch)), 'o'));
            }
        });
    });
}

fn bench_translate(c: &mut Criterion) {
    let font = BrailleFont::new(3, 2, 'o', '.', &BrailleEncoder);
    let spacing = 1;
    let text = "the quick brown fox jumps over the lazy dog";
    let scan: Vec<String> = (0..3)
        .map(|y| {
            text.chars()
                .map(|ch| font.bitmap(ch).row_string(y))
                .collect::<Vec<_>>()
                .join(&" ".repeat(spacing))
        })
        .collect();
    let reader = BrailleReader::new(BrailleDecoder::new(&BrailleEncoder));
    c.bench_function("translate_line_43", |b| {
        b.iter(|| reader.translate_line(black_box(&scan), 'o', spacing));
    });
}

criterion_group!(benches, bench_font, bench_decode, bench_translate);
criterion_main!(benches);
