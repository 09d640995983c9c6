mod args;

use std::io::{stdout, BufWriter, Write};

use anyhow::Result;
use itertools::{izip, Itertools};
use log::info;
use ndarray::Array1;
use thermal_cal::{cli, Blackbody};

use args::Args;

fn main() -> Result<()> {
    cli::init_logging();
    let Args {
        temperature,
        min,
        max,
        samples,
    } = Args::from_cmd_line()?;

    let blackbody = Blackbody::default();
    let wavelengths = Array1::linspace(min, max, samples);
    let radiance = blackbody.spectral_radiance(&wavelengths, temperature);
    let exitance = blackbody.spectral_exitance(&wavelengths, temperature);

    if let Some(peak) = radiance.iter().position_max_by(|a, b| a.total_cmp(b)) {
        info!(
            "{} K: peak radiance {} W/m²/sr/µm at {} um",
            temperature, radiance[peak], wavelengths[peak]
        );
    }

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "wavelength_um,radiance,exitance")?;
    for (wl, l, m) in izip!(&wavelengths, &radiance, &exitance) {
        writeln!(out, "{},{},{}", wl, l, m)?;
    }
    out.flush()?;

    Ok(())
}
