use anyhow::Result;
use clap::value_t_or_exit;
use std::path::PathBuf;
use thermal_cal::{args_parser, cli::inclusive_range, opt};

pub struct Args {
    pub rsr: PathBuf,
    pub temperatures: Vec<f64>,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = args_parser!("band-radiance")
            .setting(clap::AppSettings::AllowLeadingHyphen)
            .about("Compute a band radiance calibration table from a sensor response curve.")
            .arg(
                opt!("rsr")
                    .short("r")
                    .required(true)
                    .help("Response curve: json, or two column table of wavelength (um) and response"),
            )
            .arg(opt!("min").required(true).help("Lowest temperature in Celsius"))
            .arg(opt!("max").required(true).help("Highest temperature in Celsius"))
            .arg(
                opt!("step")
                    .short("s")
                    .help("Temperature step in Celsius.  Default is 1.0"),
            )
            .get_matches();

        let rsr = value_t_or_exit!(matches, "rsr", PathBuf);
        let min = value_t_or_exit!(matches, "min", f64);
        let max = value_t_or_exit!(matches, "max", f64);
        let step = matches
            .is_present("step")
            .then(|| value_t_or_exit!(matches.value_of("step"), f64))
            .unwrap_or(1.0);

        Ok(Args {
            rsr,
            temperatures: inclusive_range(min, max, step)?,
        })
    }
}
