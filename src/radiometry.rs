//! Planck's law: spectral exitance and spectral radiance
//! of a blackbody.
//!
//! Wavelengths are in micrometers and temperatures in
//! Kelvin. Results are per micrometer of wavelength
//! (W/m²/sr/µm). Nothing here validates its inputs: a
//! zero or negative wavelength / temperature yields
//! whatever IEEE-754 arithmetic makes of the formula (NaN,
//! Inf or a meaningless finite value), and very small `λ·T`
//! underflows to zero.
//!
//! Both quantities accept a scalar or any [`ndarray`] array
//! of wavelengths through the [`Spectral`] trait, and
//! return a value of the same shape.
//!
//! ```rust
//! use ndarray::array;
//! use thermal_cal::radiometry::{spectral_exitance, spectral_radiance};
//!
//! let l = spectral_radiance(8., 200.);
//! let m = spectral_exitance(&array![8., 10., 12.], 200.);
//! assert_eq!(m.len(), 3);
//! assert!(l > 0.);
//! ```

use std::f64::consts::PI;

use ndarray::{Array, ArrayBase, Data, Dimension};
use serde_derive::*;

/// Physical constants used by the Planck evaluation (SI
/// units).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Planck constant (J·s).
    pub h: f64,
    /// Speed of light in vacuum (m/s).
    pub c: f64,
    /// Boltzmann constant (J/K).
    pub k: f64,
}

impl PhysicalConstants {
    /// Exact SI 2019 values.
    pub const SI: PhysicalConstants = PhysicalConstants {
        h: 6.62607015e-34,
        c: 299792458.,
        k: 1.380649e-23,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}

const METERS_PER_MICROMETER: f64 = 1e-6;

// Converts the per-meter spectral density to per-micrometer.
const PER_MICROMETER: f64 = 1e-6;

/// Wavelength input that can be evaluated elementwise:
/// either a single `f64` or an array of them.
pub trait Spectral {
    type Output;

    fn map_spectral<F: Fn(f64) -> f64>(self, f: F) -> Self::Output;
}

impl Spectral for f64 {
    type Output = f64;

    #[inline]
    fn map_spectral<F: Fn(f64) -> f64>(self, f: F) -> f64 {
        f(self)
    }
}

impl<S, D> Spectral for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output = Array<f64, D>;

    fn map_spectral<F: Fn(f64) -> f64>(self, f: F) -> Self::Output {
        self.mapv(f)
    }
}

impl<'a, S, D> Spectral for &'a ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Output = Array<f64, D>;

    fn map_spectral<F: Fn(f64) -> f64>(self, f: F) -> Self::Output {
        self.mapv(f)
    }
}

/// A blackbody evaluated with a fixed set of
/// [`PhysicalConstants`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Blackbody {
    pub constants: PhysicalConstants,
}

impl Blackbody {
    pub const fn new(constants: PhysicalConstants) -> Self {
        Blackbody { constants }
    }

    /// Spectral exitance in W/m²/sr/µm:
    ///
    /// `M(λ,T) = 2π·h·c² / (λ⁵·(exp(h·c/(k·T·λ)) − 1))`
    ///
    /// The 2π geometric factor is kept as part of this
    /// model's convention, so `M = π·L` with `L` from
    /// [`spectral_radiance`][Self::spectral_radiance].
    pub fn spectral_exitance<W: Spectral>(&self, wavelength_um: W, temperature_k: f64) -> W::Output {
        let PhysicalConstants { h, c, .. } = self.constants;
        let c1 = 2. * PI * h * c.powi(2);
        wavelength_um.map_spectral(|wl| self.planck(c1, wl, temperature_k))
    }

    /// Spectral radiance in W/m²/sr/µm:
    ///
    /// `L(λ,T) = 2·h·c² / (λ⁵·(exp(h·c/(k·T·λ)) − 1))`
    pub fn spectral_radiance<W: Spectral>(&self, wavelength_um: W, temperature_k: f64) -> W::Output {
        let PhysicalConstants { h, c, .. } = self.constants;
        let c1 = 2. * h * c.powi(2);
        wavelength_um.map_spectral(|wl| self.planck(c1, wl, temperature_k))
    }

    #[inline]
    fn planck(&self, c1: f64, wavelength_um: f64, temperature_k: f64) -> f64 {
        let PhysicalConstants { h, c, k } = self.constants;
        let wavelength = wavelength_um * METERS_PER_MICROMETER;
        let c2 = h * c / (k * temperature_k * wavelength);
        c1 / (wavelength.powi(5) * (c2.exp() - 1.)) * PER_MICROMETER
    }
}

/// [`Blackbody::spectral_exitance`] with
/// [`PhysicalConstants::SI`].
pub fn spectral_exitance<W: Spectral>(wavelength_um: W, temperature_k: f64) -> W::Output {
    Blackbody::default().spectral_exitance(wavelength_um, temperature_k)
}

/// [`Blackbody::spectral_radiance`] with
/// [`PhysicalConstants::SI`].
pub fn spectral_radiance<W: Spectral>(wavelength_um: W, temperature_k: f64) -> W::Output {
    Blackbody::default().spectral_radiance(wavelength_um, temperature_k)
}
