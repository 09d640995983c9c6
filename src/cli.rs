//! Helpers to parse CLI arguments and report progress in
//! the accompanying binaries.
//!
//! APIs here shouldn't be considered stable / used as a
//! library.

use std::path::Path;

use anyhow::{Context, Result};
pub use clap::{App, Arg};
use indicatif::{ProgressBar, ProgressStyle};
pub use inflector::Inflector;

use crate::band::ResponseCurve;

#[macro_export]
macro_rules! args_parser {
    ($name:expr) => {{
        $crate::cli::App::new($name)
            .version(clap::crate_version!())
            .author(clap::crate_authors!())
    }};
}

#[macro_export]
macro_rules! opt {
    ($name:expr) => {{
        use $crate::cli::Inflector;
        $crate::cli::Arg::with_name($name)
            .long(&$name.to_kebab_case())
            .value_name(&$name.to_screaming_snake_case())
    }};
}

/// Log to stderr, `info` and above unless `RUST_LOG` says
/// otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

pub fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar:cyan/blue} {pos:>7}/{len:7}"),
    );
    bar
}

pub fn read_response_curve(path: &Path) -> Result<ResponseCurve> {
    ResponseCurve::from_path(path)
        .with_context(|| format!("could not read response curve from {}", path.display()))
}

const MAX_RANGE_LEN: usize = 10_000_000;

/// Inclusive range `min, min + step, ..` up to `max`.
pub fn inclusive_range(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    anyhow::ensure!(
        min.is_finite() && max.is_finite() && step.is_finite(),
        "range bounds and step must be finite: {}..{} by {}",
        min,
        max,
        step
    );
    anyhow::ensure!(step > 0., "step must be positive, got {}", step);
    anyhow::ensure!(max >= min, "empty range: {} > {}", min, max);

    // tolerate rounding in (max - min) / step
    let intervals = ((max - min) / step + 1e-9).floor();
    anyhow::ensure!(
        intervals < MAX_RANGE_LEN as f64,
        "range {}..{} by {} has more than {} values",
        min,
        max,
        step,
        MAX_RANGE_LEN
    );
    let count = intervals as usize + 1;
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_range_includes_end() -> Result<()> {
        assert_eq!(inclusive_range(-10., 10., 5.)?, vec![-10., -5., 0., 5., 10.]);
        assert_eq!(inclusive_range(0., 1., 0.1)?.len(), 11);
        assert_eq!(inclusive_range(3., 3., 1.)?, vec![3.]);
        assert!(inclusive_range(0., 1., 0.).is_err());
        assert!(inclusive_range(1., 0., 1.).is_err());

        assert!(inclusive_range(0., f64::INFINITY, 1.).is_err());
        assert!(inclusive_range(f64::NEG_INFINITY, 0., 1.).is_err());
        assert!(inclusive_range(0., 1., f64::NAN).is_err());
        assert!(inclusive_range(f64::NAN, 1., 1.).is_err());
        assert!(inclusive_range(0., 100., 1e-300).is_err());
        assert!(inclusive_range(-f64::MAX, f64::MAX, 1.).is_err());
        Ok(())
    }
}
