use super::{is_probability, Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Startup parameters of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side length of the square torus.
    pub size: usize,
    /// Probability of a cell being alive after `randomize`.
    pub initial_density: f64,
    /// Generations computed by one run of the driver.
    pub generations: u64,
    /// Delay between two generations of a run, in milliseconds.
    pub delay_ms: u64,
    /// Keep a copy of every generation of a run for GIF export.
    pub record_frames: bool,
    /// Seed of the random generator; entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 50,
            initial_density: 0.2,
            generations: 200,
            delay_ms: 100,
            record_frames: false,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfiguration(
                "grid size must be positive".to_string(),
            ));
        }
        if !is_probability(self.initial_density) {
            return Err(Error::InvalidConfiguration(format!(
                "initial density {} is outside [0, 1]",
                self.initial_density
            )));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{"size": 20, "seed": 7}"#).unwrap();
        assert_eq!(config.size, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_density, 0.2);
        assert_eq!(config.generations, 200);
        assert_eq!(config.delay(), Duration::from_millis(100));
        assert!(!config.record_frames);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_json(r#"{"size": 0}"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"initial_density": 1.5}"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Config::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }
}
