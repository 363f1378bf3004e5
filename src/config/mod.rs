//! Analysis configuration file generator
//!
//! Writes the per-station JSON instruction file consumed by the reflector
//! height analysis. Options are named struct fields with documented defaults
//! rather than a free-form key/value map, so the defaulting rules are visible
//! in one place.

use crate::storage::StorageLayout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Default lower elevation angle limit (degrees)
pub const DEFAULT_ELEV_MIN: i32 = 5;
/// Default upper elevation angle limit (degrees)
pub const DEFAULT_ELEV_MAX: i32 = 25;
/// Default lower reflector height limit (meters)
pub const DEFAULT_HEIGHT_MIN: f64 = 0.5;
/// Default upper reflector height limit (meters)
pub const DEFAULT_HEIGHT_MAX: f64 = 6.0;
/// Default peak-to-noise ratio for quality control; a starting point for
/// water, snow sites usually want 3 or 3.5
pub const DEFAULT_PEAK_TO_NOISE: f64 = 2.7;
/// Default required spectral peak amplitude for quality control
pub const DEFAULT_REQUIRED_AMPLITUDE: f64 = 6.0;

/// GPS-only frequency list: L1, L2C, L5
const GPS_FREQS: [u32; 3] = [1, 20, 5];
/// All-constellation frequency list (GPS, GLONASS, Galileo, Beidou)
const ALL_FREQS: [u32; 12] = [1, 20, 5, 101, 102, 201, 205, 206, 207, 208, 302, 306];

/// Errors raised while building or writing a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Station names are always four characters
    #[error("station name must be four characters long, got '{0}'")]
    InvalidStation(String),

    /// Reflector height limits out of order
    #[error("height limits out of order: min {0} > max {1}")]
    InvalidHeights(f64, f64),

    /// Failure writing the configuration file
    #[error("io error: {0}")]
    IoError(String),

    /// JSON serialization failure
    #[error("serialization error: {0}")]
    SerializeError(String),
}

/// Which frequencies the analysis should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyPreset {
    /// GPS L1, L2C, and L5 (the default)
    #[default]
    Gps,
    /// Every supported constellation
    AllGnss,
    /// GPS L1 only
    L1Only,
    /// GPS L2C only
    L2cOnly,
}

impl FrequencyPreset {
    fn frequencies(&self) -> Vec<u32> {
        match self {
            FrequencyPreset::Gps => GPS_FREQS.to_vec(),
            FrequencyPreset::AllGnss => ALL_FREQS.to_vec(),
            FrequencyPreset::L1Only => vec![1],
            FrequencyPreset::L2cOnly => vec![20],
        }
    }
}

/// Per-station analysis configuration
///
/// Field names in the serialized JSON match what the downstream analysis
/// expects; see the field docs for defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Four-character station identifier (lowercase)
    pub station: String,
    /// Latitude (degrees); within 100 meters of the antenna is fine
    pub lat: f64,
    /// Longitude (degrees)
    pub lon: f64,
    /// Ellipsoidal height (meters)
    pub ht: f64,
    /// Lower reflector height limit (meters), default 0.5
    #[serde(rename = "minH")]
    pub min_height: f64,
    /// Upper reflector height limit (meters), default 6.0
    #[serde(rename = "maxH")]
    pub max_height: f64,
    /// Lower elevation angle limit (degrees), default 5
    pub e1: i32,
    /// Upper elevation angle limit (degrees), default 25
    pub e2: i32,
    /// Noise region for quality control (meters); defaults to the reflector
    /// height limits
    #[serde(rename = "NReg")]
    pub noise_region: [f64; 2],
    /// Peak-to-noise ratio for quality control, default 2.7
    #[serde(rename = "PkNoise")]
    pub peak_to_noise: f64,
    /// Polynomial order for direct-signal removal
    #[serde(rename = "polyV")]
    pub poly_order: u32,
    /// Elevation angles used for direct-signal removal (degrees)
    pub pele: [i32; 2],
    /// Elevation angle tolerance (degrees)
    pub ediff: i32,
    /// Desired reflector height precision (meters)
    #[serde(rename = "desiredP")]
    pub desired_precision: f64,
    /// Azimuth regions in degrees, in pairs
    pub azval: Vec<i32>,
    /// Frequencies to analyze
    pub freqs: Vec<u32>,
    /// Required amplitude per frequency
    #[serde(rename = "reqAmp")]
    pub required_amplitude: Vec<f64>,
    /// Apply the refraction correction, default true
    pub refraction: bool,
    /// Overwrite existing results on each run
    #[serde(rename = "overwriteResults")]
    pub overwrite_results: bool,
    /// Attempt to create missing SNR files from RINEX
    #[serde(rename = "seekRinex")]
    pub seek_rinex: bool,
    /// Compress SNR files after analysis
    #[serde(rename = "wantCompression")]
    pub want_compression: bool,
    /// Show periodogram plots on screen
    pub plt_screen: bool,
    /// Restrict the analysis to a single satellite
    pub onesat: Option<u32>,
    /// Print per-retrieval statistics to the screen
    pub screenstats: bool,
    /// Output plot filename
    pub pltname: String,
    /// Maximum arc length in minutes; appropriate for 5-30 degree arcs
    #[serde(rename = "delTmax")]
    pub max_arc_minutes: u32,
}

impl AnalysisConfig {
    /// Build a configuration with documented defaults for `station` at the
    /// given coordinates
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStation`] unless the station name is
    /// exactly four characters.
    pub fn new(station: &str, lat: f64, lon: f64, ht: f64) -> Result<Self, ConfigError> {
        if station.len() != 4 {
            return Err(ConfigError::InvalidStation(station.to_string()));
        }
        let station = station.to_lowercase();
        let req_amp = DEFAULT_REQUIRED_AMPLITUDE;

        Ok(Self {
            pltname: format!("{station}_lsp.png"),
            station,
            lat,
            lon,
            ht,
            min_height: DEFAULT_HEIGHT_MIN,
            max_height: DEFAULT_HEIGHT_MAX,
            e1: DEFAULT_ELEV_MIN,
            e2: DEFAULT_ELEV_MAX,
            noise_region: [DEFAULT_HEIGHT_MIN, DEFAULT_HEIGHT_MAX],
            peak_to_noise: DEFAULT_PEAK_TO_NOISE,
            poly_order: 4,
            pele: [5, 30],
            ediff: 2,
            desired_precision: 0.005,
            azval: vec![0, 90, 90, 180, 180, 270, 270, 360],
            freqs: GPS_FREQS.to_vec(),
            required_amplitude: vec![req_amp; GPS_FREQS.len()],
            refraction: true,
            overwrite_results: true,
            seek_rinex: false,
            want_compression: false,
            plt_screen: false,
            onesat: None,
            screenstats: false,
            max_arc_minutes: 75,
        })
    }

    /// Replace the reflector height limits; the noise region follows them
    /// unless set separately
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeights`] when `min >= max`.
    pub fn with_height_limits(mut self, min: f64, max: f64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidHeights(min, max));
        }
        self.min_height = min;
        self.max_height = max;
        self.noise_region = [min, max];
        Ok(self)
    }

    /// Replace the elevation angle limits
    pub fn with_elevation_limits(mut self, e1: i32, e2: i32) -> Self {
        self.e1 = e1;
        self.e2 = e2;
        self
    }

    /// Replace the quality-control noise region
    pub fn with_noise_region(mut self, low: f64, high: f64) -> Self {
        self.noise_region = [low, high];
        self
    }

    /// Replace the peak-to-noise quality threshold
    pub fn with_peak_to_noise(mut self, ratio: f64) -> Self {
        self.peak_to_noise = ratio;
        self
    }

    /// Select a frequency preset; the required amplitude applies uniformly
    pub fn with_frequencies(mut self, preset: FrequencyPreset, amplitude: f64) -> Self {
        self.freqs = preset.frequencies();
        self.required_amplitude = vec![amplitude; self.freqs.len()];
        self
    }

    /// Turn the refraction correction off
    pub fn without_refraction(mut self) -> Self {
        self.refraction = false;
        self
    }

    /// Write the configuration as pretty JSON under `{root}/input/`
    ///
    /// `extension` distinguishes alternative strategies for the same station:
    /// `{station}.{extension}.json` instead of `{station}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] on filesystem failures.
    pub fn write(
        &self,
        layout: &StorageLayout,
        extension: Option<&str>,
    ) -> Result<PathBuf, ConfigError> {
        let input_dir = layout.input_dir();
        std::fs::create_dir_all(&input_dir).map_err(|e| {
            ConfigError::IoError(format!(
                "failed to create directory {}: {e}",
                input_dir.display()
            ))
        })?;

        let filename = match extension {
            Some(ext) => format!("{}.{ext}.json", self.station),
            None => format!("{}.json", self.station),
        };
        let path = input_dir.join(filename);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        std::fs::write(&path, json)
            .map_err(|e| ConfigError::IoError(format!("failed to write {}: {e}", path.display())))?;

        info!(path = %path.display(), "analysis configuration written");
        Ok(path)
    }
}
