use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractal_zoomer::{
    Complex, FractalKind, FrameParams, PaletteKind, PixelRect, PrecisionMode, render_frame,
    render_frame_serial,
};

fn frame(precision: PrecisionMode, zoom: f64) -> FrameParams {
    FrameParams {
        pixel_rect: PixelRect::new(320, 240).unwrap(),
        center: Complex::new(-0.743_643_887_037_151, 0.131_825_904_205_33),
        zoom,
        precision,
        max_iterations: 500,
        palette: PaletteKind::Nebula,
        kind: FractalKind::Mandelbrot,
        julia_c: Complex::new(-0.7, 0.27015),
        time_phase: 0.0,
    }
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.sample_size(20);

    for (label, params) in [
        ("single", frame(PrecisionMode::Single, 1e3)),
        ("extended", frame(PrecisionMode::Extended, 1e9)),
    ] {
        group.bench_with_input(BenchmarkId::new("rayon", label), &params, |b, params| {
            b.iter(|| criterion::black_box(render_frame(params).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("serial", label), &params, |b, params| {
            b.iter(|| criterion::black_box(render_frame_serial(params).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
