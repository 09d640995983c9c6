use std::io::Write;

use anyhow::Result;
use ndarray::{array, Array3};
use thermal_cal::{
    band::{celsius_to_kelvin, trapezoid},
    band_radiance,
    cube::{Normalization, ThermalCube},
    spectral_exitance, spectral_radiance, BandSample, Error, ResponseCurve,
};

const RSR_TABLE: &str = "\
# wavelength_um, response
wavelength,response
7.0,0.1
8.0,0.8
9.0,0.5
10.0,0.2
";

fn rel_diff(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

#[test]
fn reference_scenario() -> Result<()> {
    let l = spectral_radiance(8., 200.);
    let m = spectral_exitance(8., 200.);
    assert!(rel_diff(l, 0.4520652669686097) < 1e-10);
    assert!(rel_diff(m / l, std::f64::consts::PI) < 1e-12);

    let band = band_radiance(&[7., 8., 9., 10.][..], &[0.1, 0.8, 0.5, 0.2][..], 32.)?;
    let weighted = spectral_radiance(array![7., 8., 9., 10.], 305.15) * array![0.1, 0.8, 0.5, 0.2];
    let manual = trapezoid(&weighted, &array![7., 8., 9., 10.]);
    assert!(rel_diff(band, manual) < 1e-10);
    assert!(rel_diff(band, 14.916286776201082) < 1e-10);
    Ok(())
}

#[test]
fn celsius_conversion_happens_once() -> Result<()> {
    assert_eq!(celsius_to_kelvin(32.), 305.15);
    let wl = [8., 8.5];
    let rsr = [1., 1.];
    let band = band_radiance(&wl[..], &rsr[..], 0.)?;
    let expected = (spectral_radiance(8., 273.15) + spectral_radiance(8.5, 273.15)) / 2. * 0.5;
    assert!(rel_diff(band, expected) < 1e-12);
    Ok(())
}

#[test]
fn mismatched_lengths_are_invalid_input() {
    let err = band_radiance(&[7., 8., 9., 10.][..], &[0.1, 0.8, 0.5][..], 32.).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

#[test]
fn calibration_table_from_file() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("thermal-cal-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("rsr.csv");
    std::fs::File::create(&path)?.write_all(RSR_TABLE.as_bytes())?;

    let curve = ResponseCurve::from_path(&path)?;
    assert_eq!(curve.len(), 4);

    let table = curve.band_radiance_table(&[-20., 0., 32., 100.]);
    assert_eq!(table[2].temperature_c, 32.);
    assert!(rel_diff(table[2].band_radiance, 14.916286776201082) < 1e-10);
    assert!(table.windows(2).all(|w| w[1].band_radiance > w[0].band_radiance));

    let json = serde_json::to_string(&table[0])?;
    let back: BandSample = serde_json::from_str(&json)?;
    assert_eq!(back, table[0]);

    let json_path = dir.join("rsr.json");
    std::fs::write(&json_path, serde_json::to_vec(&curve)?)?;
    assert_eq!(ResponseCurve::from_path(&json_path)?, curve);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn missing_curve_file_is_io_error() {
    let err = ResponseCurve::from_path("/nonexistent/rsr.csv").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_invalid_input());
}

#[test]
fn cube_statistics() -> Result<()> {
    let cube = ThermalCube::new(Array3::from_shape_fn((3, 3, 2), |(r, c, ch)| {
        (r * 3 + c) as f64 + ch as f64 * 0.5
    }));

    let px = cube.pixel_stats(2, 2)?;
    assert_eq!(px.channel_values, array![8., 8.5]);
    assert_eq!(px.mean, 8.25);

    let region = cube.region_stats(0, 3, 0, 3)?;
    assert_eq!(region.stats.count, 18);
    assert_eq!(region.stats.min, 0.);
    assert_eq!(region.stats.max, 8.5);

    let normalized = cube.normalize_channels("minmax".parse::<Normalization>()?);
    assert_eq!(normalized[[2, 2, 1]], 1.);
    Ok(())
}
