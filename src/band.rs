//! Band radiance: spectral radiance weighted by a sensor's
//! relative spectral response (RSR) and integrated over
//! wavelength.
//!
//! This is the quantity a thermal sensor actually reports
//! when looking at a blackbody, and is the basis for
//! calibrating raw counts against reference temperatures.
//! Temperatures enter here in Celsius; the conversion to
//! Kelvin happens once, in [`celsius_to_kelvin`], and
//! everything below works in Kelvin.
//!
//! ```rust
//! # fn test_compile() -> thermal_cal::Result<()> {
//! use thermal_cal::band::band_radiance;
//!
//! let wavelengths = [7., 8., 9., 10.];
//! let rsr = [0.1, 0.8, 0.5, 0.2];
//! let radiance = band_radiance(&wavelengths[..], &rsr[..], 32.)?;
//! # Ok(())
//! # }
//! ```

use std::{
    convert::TryFrom,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use itertools::Itertools;
use lazy_static::lazy_static;
use log::{debug, trace};
use ndarray::{s, Array1, ArrayView1, AsArray};
use rayon::prelude::*;
use regex::Regex;
use serde_derive::*;

use crate::{
    error::{Error, Result},
    radiometry::Blackbody,
};

pub const CELSIUS_OFFSET: f64 = 273.15;

#[inline]
pub fn celsius_to_kelvin(temperature_c: f64) -> f64 {
    temperature_c + CELSIUS_OFFSET
}

/// Composite trapezoidal rule: integrates samples `y`
/// taken at abscissae `x`.
///
/// Returns `0.` for fewer than two samples.
///
/// # Panics
///
/// If `y` and `x` have different lengths.
pub fn trapezoid<'a, 'b, Y, X>(y: Y, x: X) -> f64
where
    Y: AsArray<'a, f64>,
    X: AsArray<'b, f64>,
{
    let y: ArrayView1<f64> = y.into();
    let x: ArrayView1<f64> = x.into();
    assert_eq!(y.len(), x.len(), "trapezoid: samples and abscissae differ in length");
    if y.len() < 2 {
        return 0.;
    }

    let dx = &x.slice(s![1..]) - &x.slice(s![..-1]);
    let sums = &y.slice(s![1..]) + &y.slice(s![..-1]);
    (dx * sums / 2.).sum()
}

/// Check the preconditions of band integration. Runs
/// before any radiance is evaluated.
fn check_samples(wavelengths_um: &ArrayView1<f64>, rsr: &ArrayView1<f64>) -> Result<()> {
    if wavelengths_um.len() != rsr.len() {
        return Err(Error::LengthMismatch {
            wavelengths: wavelengths_um.len(),
            responses: rsr.len(),
        });
    }
    if wavelengths_um.len() < 2 {
        return Err(Error::TooFewSamples(wavelengths_um.len()));
    }
    if let Some((index, &value)) = wavelengths_um
        .iter()
        .find_position(|wl| !(wl.is_finite() && **wl > 0.))
    {
        return Err(Error::InvalidWavelength { index, value });
    }
    if let Some((index, (&prev, &next))) = wavelengths_um
        .iter()
        .tuple_windows()
        .find_position(|(prev, next)| !(next > prev))
    {
        return Err(Error::NotIncreasing { index, prev, next });
    }
    Ok(())
}

impl Blackbody {
    /// Band radiance (W/m²/sr) seen through a response
    /// curve, for a blackbody at `temperature_c` degrees
    /// Celsius.
    ///
    /// `wavelengths_um` must be finite, positive, strictly
    /// increasing and aligned index-for-index with `rsr`,
    /// with at least two samples. The temperature is not checked: a value at
    /// or below absolute zero gives a NaN / Inf result.
    pub fn band_radiance<'a, 'b, W, R>(
        &self,
        wavelengths_um: W,
        rsr: R,
        temperature_c: f64,
    ) -> Result<f64>
    where
        W: AsArray<'a, f64>,
        R: AsArray<'b, f64>,
    {
        let wavelengths_um: ArrayView1<f64> = wavelengths_um.into();
        let rsr: ArrayView1<f64> = rsr.into();
        check_samples(&wavelengths_um, &rsr)?;

        Ok(self.integrate_band(wavelengths_um, rsr, celsius_to_kelvin(temperature_c)))
    }

    fn integrate_band(
        &self,
        wavelengths_um: ArrayView1<f64>,
        rsr: ArrayView1<f64>,
        temperature_k: f64,
    ) -> f64 {
        let weighted = self.spectral_radiance(&wavelengths_um, temperature_k) * &rsr;
        let total = trapezoid(&weighted, &wavelengths_um);
        trace!(
            "band radiance at {} K over {} samples: {}",
            temperature_k,
            wavelengths_um.len(),
            total
        );
        total
    }
}

/// [`Blackbody::band_radiance`] with the SI constants.
pub fn band_radiance<'a, 'b, W, R>(wavelengths_um: W, rsr: R, temperature_c: f64) -> Result<f64>
where
    W: AsArray<'a, f64>,
    R: AsArray<'b, f64>,
{
    Blackbody::default().band_radiance(wavelengths_um, rsr, temperature_c)
}

/// One row of a calibration table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BandSample {
    pub temperature_c: f64,
    pub band_radiance: f64,
}

/// A sensor's relative spectral response, validated on
/// construction: equal lengths, at least two samples,
/// finite positive wavelengths (µm) in strictly increasing
/// order. Responses are taken as is.
///
/// Deserializes from `{"wavelengths": [..], "responses": [..]}`
/// through the same checks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawResponseCurve", into = "RawResponseCurve")]
pub struct ResponseCurve {
    wavelengths: Array1<f64>,
    responses: Array1<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawResponseCurve {
    wavelengths: Vec<f64>,
    responses: Vec<f64>,
}

impl ResponseCurve {
    pub fn new(wavelengths: Vec<f64>, responses: Vec<f64>) -> Result<Self> {
        let wavelengths = Array1::from(wavelengths);
        let responses = Array1::from(responses);
        check_samples(&wavelengths.view(), &responses.view())?;

        Ok(ResponseCurve {
            wavelengths,
            responses,
        })
    }

    /// Read a JSON encoded curve. Malformed JSON is an
    /// [`Error::Json`]; a well-formed but invalid curve
    /// reports the same error as [`ResponseCurve::new`].
    pub fn from_json_reader<R: Read>(rdr: R) -> Result<Self> {
        let raw: RawResponseCurve = serde_json::from_reader(rdr)?;
        Self::try_from(raw)
    }

    /// Read a two column text table: wavelength (µm) and
    /// response, separated by commas, semicolons or
    /// whitespace. Blank lines, `#` comments and one
    /// leading header line (first field not a number) are
    /// skipped; extra columns are ignored.
    pub fn from_table_reader<R: BufRead>(rdr: R) -> Result<Self> {
        lazy_static! {
            static ref SEPARATOR: Regex = Regex::new(r"[,;\s]+").unwrap();
        }

        let mut wavelengths = vec![];
        let mut responses = vec![];
        let mut seen_header = false;

        for (idx, line) in rdr.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = SEPARATOR.split(line).filter(|f| !f.is_empty()).collect();
            let is_header = fields.first().map_or(false, |f| f.parse::<f64>().is_err());
            if is_header && !seen_header && wavelengths.is_empty() {
                seen_header = true;
                continue;
            }

            let parsed = match fields.as_slice() {
                [wl, resp, ..] => wl
                    .parse::<f64>()
                    .and_then(|wl| Ok((wl, resp.parse::<f64>()?)))
                    .map_err(|e| e.to_string()),
                _ => Err(format!("expected 2 columns, found {}", fields.len())),
            };

            match parsed {
                Ok((wl, resp)) => {
                    wavelengths.push(wl);
                    responses.push(resp);
                }
                Err(reason) => {
                    return Err(Error::Parse {
                        line: idx + 1,
                        reason,
                    })
                }
            }
        }

        Self::new(wavelengths, responses)
    }

    /// Read a curve from disk: `.json` files as JSON,
    /// anything else as a text table.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let rdr = BufReader::new(File::open(path)?);
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let curve = if is_json {
            Self::from_json_reader(rdr)?
        } else {
            Self::from_table_reader(rdr)?
        };

        let (lo, hi) = curve.range();
        debug!(
            "loaded response curve {}: {} samples over {}..{} um",
            path.display(),
            curve.len(),
            lo,
            hi
        );
        Ok(curve)
    }

    pub fn wavelengths(&self) -> ArrayView1<f64> {
        self.wavelengths.view()
    }

    pub fn responses(&self) -> ArrayView1<f64> {
        self.responses.view()
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// First and last wavelength, in µm.
    pub fn range(&self) -> (f64, f64) {
        (self.wavelengths[0], self.wavelengths[self.len() - 1])
    }

    /// Band radiance for a blackbody at `temperature_c`
    /// degrees Celsius. Infallible: the curve was checked
    /// when it was built.
    pub fn band_radiance(&self, temperature_c: f64) -> f64 {
        Blackbody::default().integrate_band(
            self.wavelengths(),
            self.responses(),
            celsius_to_kelvin(temperature_c),
        )
    }

    /// Band radiance at each of `temperatures_c`, computed
    /// in parallel, in input order.
    pub fn band_radiance_table(&self, temperatures_c: &[f64]) -> Vec<BandSample> {
        temperatures_c
            .par_iter()
            .map(|&temperature_c| BandSample {
                temperature_c,
                band_radiance: self.band_radiance(temperature_c),
            })
            .collect()
    }
}

impl TryFrom<RawResponseCurve> for ResponseCurve {
    type Error = Error;

    fn try_from(raw: RawResponseCurve) -> Result<Self> {
        ResponseCurve::new(raw.wavelengths, raw.responses)
    }
}

impl From<ResponseCurve> for RawResponseCurve {
    fn from(curve: ResponseCurve) -> Self {
        RawResponseCurve {
            wavelengths: curve.wavelengths.to_vec(),
            responses: curve.responses.to_vec(),
        }
    }
}
