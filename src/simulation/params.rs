//! Simulation-wide tunables.
//!
//! `Params` replaces process-wide settings: the world owns one instance, the update
//! engine reads it every tick and behaviors see it through their surroundings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Upper bound for the time scale, matching the speed slider of the viewer.
pub const MAX_TIME_SCALE: f64 = 15.0;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be read.
    #[error("failed to read params file: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter document is not valid JSON for [`Params`].
    #[error("failed to parse params: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is outside its allowed range.
    #[error("invalid parameter `{name}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        name: &'static str,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
}

/// Simulation parameters that control world behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// World width.
    pub width: f64,
    /// World height.
    pub height: f64,
    /// Multiplier applied to every time-dependent effect.
    pub time_scale: f64,
    /// Energy every creature loses per unit of time, before movement and gestation costs.
    pub base_energy_depletion: f64,
    /// Maximum number of food items alive at once.
    pub max_food: usize,
    /// Exclusive upper bound for the energy of spawned food.
    pub max_food_energy: f64,
    /// Chance in percent that a spawn roll produces food.
    pub food_spawn_rate: u32,
    /// Spread of the mutation factor around 1.0.
    pub mutation_rate: f64,
    /// Seed for the world RNG. `None` seeds from the operating system.
    pub rng_seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            time_scale: 1.0,
            base_energy_depletion: 5.0,
            max_food: 300,
            max_food_energy: 100.0,
            food_spawn_rate: 50,
            mutation_rate: 0.1,
            rng_seed: None,
        }
    }
}

impl Params {
    /// Parses parameters from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object; missing fields take their default value
    ///
    /// # Returns
    ///
    /// The validated parameters, or a [`ParamsError`] if the document is malformed or
    /// a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid("width", "must be finite and positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid("height", "must be finite and positive"));
        }
        check_time_scale(self.time_scale)?;
        check_base_energy_depletion(self.base_energy_depletion)?;
        check_max_food_energy(self.max_food_energy)?;
        check_food_spawn_rate(self.food_spawn_rate)?;
        check_mutation_rate(self.mutation_rate)?;
        Ok(())
    }
}

fn invalid(name: &'static str, reason: &'static str) -> ParamsError {
    ParamsError::Invalid { name, reason }
}

pub(crate) fn check_time_scale(value: f64) -> Result<(), ParamsError> {
    if (0.0..=MAX_TIME_SCALE).contains(&value) {
        Ok(())
    } else {
        Err(invalid("time_scale", "must be between 0 and 15"))
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, "must be finite and non-negative"))
    }
}

pub(crate) fn check_base_energy_depletion(value: f64) -> Result<(), ParamsError> {
    check_non_negative("base_energy_depletion", value)
}

pub(crate) fn check_max_food_energy(value: f64) -> Result<(), ParamsError> {
    check_non_negative("max_food_energy", value)
}

pub(crate) fn check_food_spawn_rate(value: u32) -> Result<(), ParamsError> {
    if value <= 100 {
        Ok(())
    } else {
        Err(invalid("food_spawn_rate", "must be a percentage"))
    }
}

pub(crate) fn check_mutation_rate(value: f64) -> Result<(), ParamsError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid("mutation_rate", "must be in [0, 1)"))
    }
}
