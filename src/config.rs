use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::ALL_SITES;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "launch-dash", version, about = "Launch records dashboard")]
pub struct Config {
    /// Launch table to load (.csv, .json or .parquet)
    #[arg(default_value = "spacex_launch_dash.csv")]
    pub data: PathBuf,

    /// Initial launch site selection ("ALL" or a site name)
    #[arg(long, default_value = ALL_SITES)]
    pub site: String,

    /// Payload range slider step, in kg
    #[arg(long, default_value_t = 1000.0)]
    pub slider_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: PathBuf::from("spacex_launch_dash.csv"),
            site: ALL_SITES.to_string(),
            slider_step: 1000.0,
        }
    }
}
