//! Config command: generate a per-station analysis configuration file

use crate::config::{AnalysisConfig, FrequencyPreset};
use crate::storage::StorageLayout;
use clap::Args;

use super::CliError;

/// Arguments for the config command
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Station name (four characters, lowercase)
    pub station: String,

    /// Latitude (degrees)
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude (degrees)
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,

    /// Ellipsoidal height (meters)
    #[arg(allow_negative_numbers = true)]
    pub height: f64,

    /// Lower elevation angle limit (degrees)
    #[arg(long)]
    pub e1: Option<i32>,

    /// Upper elevation angle limit (degrees)
    #[arg(long)]
    pub e2: Option<i32>,

    /// Lower reflector height limit (meters)
    #[arg(long)]
    pub h1: Option<f64>,

    /// Upper reflector height limit (meters)
    #[arg(long)]
    pub h2: Option<f64>,

    /// Lower noise region limit for quality control (meters)
    #[arg(long)]
    pub nr1: Option<f64>,

    /// Upper noise region limit for quality control (meters)
    #[arg(long)]
    pub nr2: Option<f64>,

    /// Peak-to-noise ratio for quality control
    #[arg(long)]
    pub peak2noise: Option<f64>,

    /// Required spectral peak amplitude for quality control
    #[arg(long)]
    pub ampl: Option<f64>,

    /// Include all GNSS constellations instead of GPS only
    #[arg(long, conflicts_with_all = ["l1", "l2c"])]
    pub allfreq: bool,

    /// Use GPS L1 only
    #[arg(long, conflicts_with = "l2c")]
    pub l1: bool,

    /// Use GPS L2C only
    #[arg(long)]
    pub l2c: bool,

    /// Turn off the refraction correction
    #[arg(long)]
    pub no_refraction: bool,

    /// Extension name, for keeping multiple strategies per station
    #[arg(long)]
    pub extension: Option<String>,
}

impl ConfigCommand {
    /// Execute the config command
    pub fn execute(&self, layout: StorageLayout) -> Result<(), CliError> {
        let mut config = AnalysisConfig::new(&self.station, self.lat, self.lon, self.height)?;

        if self.h1.is_some() || self.h2.is_some() {
            let min = self.h1.unwrap_or(config.min_height);
            let max = self.h2.unwrap_or(config.max_height);
            config = config.with_height_limits(min, max)?;
        }

        if self.e1.is_some() || self.e2.is_some() {
            let e1 = self.e1.unwrap_or(config.e1);
            let e2 = self.e2.unwrap_or(config.e2);
            config = config.with_elevation_limits(e1, e2);
        }

        if self.nr1.is_some() || self.nr2.is_some() {
            let low = self.nr1.unwrap_or(config.noise_region[0]);
            let high = self.nr2.unwrap_or(config.noise_region[1]);
            config = config.with_noise_region(low, high);
        }

        if let Some(ratio) = self.peak2noise {
            config = config.with_peak_to_noise(ratio);
        }

        let preset = if self.allfreq {
            FrequencyPreset::AllGnss
        } else if self.l1 {
            FrequencyPreset::L1Only
        } else if self.l2c {
            FrequencyPreset::L2cOnly
        } else {
            FrequencyPreset::Gps
        };
        config = config.with_frequencies(
            preset,
            self.ampl
                .unwrap_or(crate::config::DEFAULT_REQUIRED_AMPLITUDE),
        );

        if self.no_refraction {
            config = config.without_refraction();
        }

        let path = config.write(&layout, self.extension.as_deref())?;
        println!("writing out to: {}", path.display());

        Ok(())
    }
}
