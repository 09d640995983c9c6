//! Blackbody radiometry for thermal camera calibration.
//!
//! This crate provides two functionalities:
//!
//! 1. Evaluate Planck's law: [spectral
//! exitance](radiometry::spectral_exitance) and [spectral
//! radiance](radiometry::spectral_radiance) of a blackbody
//! at a given wavelength and temperature.
//!
//! 2. Compute the [band radiance](band::band_radiance) a
//! sensor with a given relative spectral response (RSR)
//! would measure from a blackbody: the RSR-weighted
//! spectral radiance, integrated over wavelength with the
//! trapezoidal rule.
//!
//! It also carries simple [descriptive
//! statistics](cube::ThermalCube) over decoded
//! multi-channel thermal images.
//!
//! # Usage
//!
//! ## Spectral quantities
//!
//! Wavelengths are in micrometers and temperatures in
//! Kelvin. Both scalar and [`ndarray`] inputs are
//! accepted; arrays are evaluated elementwise.
//!
//! ```rust
//! use ndarray::Array1;
//! use thermal_cal::{spectral_exitance, spectral_radiance};
//!
//! let radiance = spectral_radiance(8., 200.);
//! let wavelengths = Array1::linspace(7., 14., 71);
//! let exitance = spectral_exitance(&wavelengths, 300.);
//! ```
//!
//! ## Band radiance
//!
//! Band radiance takes the temperature in Celsius and
//! rejects malformed response curves (mismatched lengths,
//! fewer than two samples, unordered wavelengths) before
//! computing anything.
//!
//! ```rust
//! # fn test_compile() -> anyhow::Result<()> {
//! use thermal_cal::{band_radiance, ResponseCurve};
//!
//! let radiance = band_radiance(&[7., 8., 9., 10.][..], &[0.1, 0.8, 0.5, 0.2][..], 32.)?;
//!
//! let curve = ResponseCurve::from_path("rsr.csv")?;
//! let table = curve.band_radiance_table(&[20., 30., 40.]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod radiometry;
pub mod band;

pub mod stats;
pub mod cube;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::band::{band_radiance, BandSample, ResponseCurve};
pub use crate::error::{Error, Result};
pub use crate::radiometry::{spectral_exitance, spectral_radiance, Blackbody, PhysicalConstants};
