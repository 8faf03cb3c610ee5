// This is a part of rust-charmap.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

static LATIN2_TEXT: &str =
    "P\u{159}\u{ed}li\u{161} \u{17e}lu\u{165}ou\u{10d}k\u{fd} k\u{16f}\u{148} \u{fa}p\u{11b}l \u{10f}\u{e1}belsk\u{e9} \u{f3}dy. ";

fn bench_decode(c: &mut Criterion) {
    let text = LATIN2_TEXT.repeat(64);
    let (bytes, _) = charmap::encode(&text, "ISO-8859-2");
    let bytes = bytes.into_owned();
    c.bench_function("decode ISO-8859-2", |b| {
        b.iter(|| charmap::decode(black_box(&bytes), "ISO-8859-2"))
    });
    c.bench_function("decode_to_buffer ISO-8859-2", |b| {
        b.iter(|| charmap::decode_to_buffer(black_box(&bytes), "ISO-8859-2"))
    });
}

fn bench_encode(c: &mut Criterion) {
    let text = LATIN2_TEXT.repeat(64);
    c.bench_function("encode ISO-8859-2", |b| {
        b.iter(|| charmap::encode(black_box(&text), "ISO-8859-2"))
    });
    c.bench_function("encode_to_buffer ISO-8859-2", |b| {
        b.iter(|| charmap::encode_to_buffer(black_box(text.as_bytes()), "ISO-8859-2"))
    });
    c.bench_function("encode ISO-8859-14 with substitution", |b| {
        b.iter(|| charmap::encode(black_box(&text), "ISO-8859-14"))
    });
}

fn bench_label(c: &mut Criterion) {
    c.bench_function("codec_for_label", |b| {
        b.iter(|| charmap::codec_for_label(black_box("iso_8859_bazinga")))
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_label);
criterion_main!(benches);
