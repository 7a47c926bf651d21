//! Generator parameters.
//!
//! Both configs default to the built-in scene constants. A TOML file may
//! override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::ScatterError;

/// Upper bound on the beads a smile may produce.
pub const MAX_BEADS: usize = 10_000;


#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SmileConfig {
    /// Azimuth range in units of pi: `[start, stop)` with `step`.
    pub phi_start: f64,
    pub phi_stop: f64,
    pub phi_step: f64,
    /// Radius of the head the smile is drawn on.
    pub head_radius: f64,
    /// Pulled inwards so the beads sit just below the surface.
    pub inset: f64,
    pub offset: [f64; 3],
    pub bead_radius: f64,
}

impl Default for SmileConfig {
    fn default() -> Self {
        Self {
            phi_start: 4.0 / 3.0,
            phi_stop: 5.0 / 3.0,
            phi_step: 1.0 / 18.0,
            head_radius: 0.16,
            inset: 0.005,
            offset: [-0.45, 0.3, 1.45],
            bead_radius: 0.014,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SnowConfig {
    pub count: usize,
    /// Scale applied to unit-ball samples.
    pub scale: f64,
    pub center: [f64; 3],
    /// Samples with `y <= floor` are rejected.
    pub floor: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub seed: Option<u64>,
    /// Trials per particle before giving up. `None` loops until accepted.
    pub max_trials: Option<u64>,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: 75,
            scale: 1.5,
            center: [0.0, -0.2, 1.45],
            floor: -0.2,
            radius_min: 0.02,
            radius_max: 0.04,
            seed: None,
            max_trials: None,
        }
    }
}

impl SmileConfig {
    /// Number of azimuths in `[phi_start, phi_stop)`, or `None` if the range
    /// is not finite.
    pub fn bead_count(&self) -> Option<usize> {
        let span = (self.phi_stop - self.phi_start) / self.phi_step;
        if !span.is_finite() {
            return None;
        }
        if span <= 0.0 {
            return Some(0);
        }
        let n = span.ceil();
        if n > MAX_BEADS as f64 { None } else { Some(n as usize) }
    }

    pub fn validate(&self) -> Result<(), ScatterError> {
        let angles = [self.phi_start, self.phi_stop, self.phi_step];
        if !angles.iter().all(|v| v.is_finite()) || !(self.phi_step > 0.0) {
            return Err(ScatterError::InvalidConfig(format!(
                "azimuth range [{}, {}) step {} must be finite with a positive step",
                self.phi_start, self.phi_stop, self.phi_step
            )));
        }
        if self.bead_count().is_none() {
            return Err(ScatterError::InvalidConfig(format!(
                "azimuth range yields more than {} beads",
                MAX_BEADS
            )));
        }
        let lengths = [self.head_radius, self.inset, self.bead_radius];
        if !lengths.iter().chain(self.offset.iter()).all(|v| v.is_finite()) {
            return Err(ScatterError::InvalidConfig("smile geometry must be finite".to_string()));
        }
        if !(self.bead_radius > 0.0) {
            return Err(ScatterError::InvalidConfig(format!("bead radius {} must be positive", self.bead_radius)));
        }
        Ok(())
    }
}

impl SnowConfig {
    pub fn validate(&self) -> Result<(), ScatterError> {
        let values = [self.radius_min, self.radius_max, self.floor];
        if !values.iter().chain(self.center.iter()).all(|v| v.is_finite()) {
            return Err(ScatterError::InvalidConfig(format!(
                "radius range, floor and center must be finite: {:?}",
                self
            )));
        }
        if !(self.radius_min > 0.0 && self.radius_min < self.radius_max) {
            return Err(ScatterError::InvalidConfig(format!(
                "particle radius range [{}, {}) is empty or not positive",
                self.radius_min, self.radius_max
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ScatterError::InvalidConfig(format!("scale {} must be positive", self.scale)));
        }
        if self.floor >= 1.0 {
            return Err(ScatterError::InvalidConfig(format!("floor {} leaves no room above it", self.floor)));
        }
        Ok(())
    }
}

/// Parses a config from TOML text.
pub fn from_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ScatterError> {
    toml::from_str(content).map_err(|e| ScatterError::ConfigParse(e.to_string()))
}

/// Loads a config from a TOML file.
pub fn load_from_path<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ScatterError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ScatterError::ConfigRead(path.to_path_buf(), e.to_string()))?;
    let config = from_toml(&content)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
