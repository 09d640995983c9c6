use anyhow::{ensure, Result};
use clap::value_t_or_exit;
use thermal_cal::{args_parser, opt};

pub struct Args {
    pub temperature: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = args_parser!("planck")
            .about("Tabulate blackbody spectral radiance and exitance.")
            .arg(
                opt!("temperature")
                    .short("t")
                    .required(true)
                    .help("Blackbody temperature in Kelvin"),
            )
            .arg(opt!("min").help("Shortest wavelength in micrometers.  Default is 1.0"))
            .arg(opt!("max").help("Longest wavelength in micrometers.  Default is 20.0"))
            .arg(
                opt!("samples")
                    .short("n")
                    .help("Number of wavelength samples.  Default is 191"),
            )
            .get_matches();

        let temperature = value_t_or_exit!(matches, "temperature", f64);
        let min = matches
            .is_present("min")
            .then(|| value_t_or_exit!(matches.value_of("min"), f64))
            .unwrap_or(1.0);
        let max = matches
            .is_present("max")
            .then(|| value_t_or_exit!(matches.value_of("max"), f64))
            .unwrap_or(20.0);
        let samples = matches
            .is_present("samples")
            .then(|| value_t_or_exit!(matches.value_of("samples"), usize))
            .unwrap_or(191);

        ensure!(temperature > 0., "temperature must be above 0 K, got {}", temperature);
        ensure!(min > 0. && max > min, "invalid wavelength range {}..{}", min, max);
        ensure!(samples >= 2, "need at least 2 samples, got {}", samples);

        Ok(Args {
            temperature,
            min,
            max,
            samples,
        })
    }
}
