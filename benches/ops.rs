use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hueshift::{analogous_colors, hex_color_brightness, sort_colors_by_brightness, Color};

pub fn run_benchmarks(c: &mut Criterion) {
    c.bench_function("parse-hex", |b| {
        b.iter(|| Color::parse(black_box("#1a2b3c")))
    });

    c.bench_function("parse-rgb", |b| {
        b.iter(|| Color::parse(black_box("rgb(26, 43, 60)")))
    });

    c.bench_function("brightness", |b| {
        b.iter(|| hex_color_brightness(black_box("#1a2b3c")))
    });

    c.bench_function("analogous-3", |b| {
        b.iter(|| analogous_colors(black_box("#1a2b3c"), 3))
    });

    let palette: Vec<String> = (0_u32..64)
        .map(|n| format!("#{:06x}", n * 0x040404))
        .collect();
    c.bench_function("sort-64", |b| {
        b.iter(|| sort_colors_by_brightness(black_box(&palette)))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
