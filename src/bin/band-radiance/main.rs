mod args;

use anyhow::Result;
use indicatif::ParallelProgressIterator;
use log::info;
use serde_derive::*;
use thermal_cal::{cli, BandSample};

use args::Args;

#[derive(Debug, Serialize)]
struct OutputJson {
    rsr: String,
    samples: usize,
    range_um: (f64, f64),
    table: Vec<BandSample>,
}

fn main() -> Result<()> {
    cli::init_logging();
    let Args { rsr, temperatures } = Args::from_cmd_line()?;

    let curve = cli::read_response_curve(&rsr)?;
    let (lo, hi) = curve.range();
    info!(
        "{}: {} samples over {}..{} um, {} temperatures",
        rsr.display(),
        curve.len(),
        lo,
        hi,
        temperatures.len()
    );

    use rayon::prelude::*;
    let table: Vec<BandSample> = temperatures
        .par_iter()
        .progress_with(cli::progress_bar(temperatures.len() as u64))
        .map(|&temperature_c| BandSample {
            temperature_c,
            band_radiance: curve.band_radiance(temperature_c),
        })
        .collect();

    serde_json::to_writer(
        std::io::stdout().lock(),
        &OutputJson {
            rsr: format!("{}", rsr.display()),
            samples: curve.len(),
            range_um: (lo, hi),
            table,
        },
    )?;

    Ok(())
}
