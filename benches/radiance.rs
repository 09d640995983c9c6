use criterion::*;
use ndarray::{Array1, Array3};
use thermal_cal::{cube::ThermalCube, spectral_radiance, ResponseCurve};

// Gaussian-ish LWIR response between 7.5 and 13.5 um.
fn lwir_curve(samples: usize) -> ResponseCurve {
    let wavelengths = Array1::linspace(7.5, 13.5, samples).to_vec();
    let responses = wavelengths
        .iter()
        .map(|wl| (-(wl - 10.5_f64).powi(2) / 4.).exp())
        .collect();
    ResponseCurve::new(wavelengths, responses).expect("valid curve")
}

fn radiometry(c: &mut Criterion) {
    let wavelengths = Array1::linspace(1., 20., 1000);
    c.bench_function("spectral_radiance_1000", |b| {
        b.iter(|| spectral_radiance(black_box(&wavelengths), black_box(300.)))
    });

    let curve = lwir_curve(601);
    c.bench_function("band_radiance_601", |b| {
        b.iter(|| curve.band_radiance(black_box(32.)))
    });

    let temperatures: Vec<f64> = (-400..=1500).map(|t| t as f64 * 0.1).collect();
    c.bench_function("band_radiance_table_1901", |b| {
        b.iter(|| curve.band_radiance_table(black_box(&temperatures)))
    });
}

fn cube(c: &mut Criterion) {
    let cube = ThermalCube::new(Array3::from_shape_fn((512, 640, 4), |(row, col, ch)| {
        ((row * 31 + col * 17 + ch * 7) % 4096) as f64
    }));
    c.bench_function("region_stats_256x256", |b| {
        b.iter(|| cube.region_stats(128, 384, 192, 448).expect("valid region"))
    });
}

criterion_group! {
    name = radiance;
    config = Criterion::default().sample_size(10);
    targets = radiometry, cube
}

criterion_main!(radiance);
