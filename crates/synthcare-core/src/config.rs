use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default probability that a non-key cell is replaced with the
/// absent-value marker.
pub const DEFAULT_NOISE_PROBABILITY: f64 = 0.1;

/// Run configuration: table row counts, noise probability, and seeding.
///
/// `Default` is the stock dataset layout. `seed: None` draws from OS
/// entropy, so repeated runs share schemas but not cell values; a fixed
/// seed makes a run reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub patients: u64,
    pub providers: u64,
    pub primary_care_visits: u64,
    pub emergency_visits: u64,
    pub hospitalizations: u64,
    pub referrals: u64,
    pub chronic_conditions: u64,
    pub sdh_records: u64,
    pub behavioral_health: u64,
    pub quality_metrics: u64,
    pub noise_probability: f64,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            patients: 1000,
            providers: 200,
            primary_care_visits: 1500,
            emergency_visits: 600,
            hospitalizations: 500,
            referrals: 800,
            chronic_conditions: 700,
            sdh_records: 900,
            behavioral_health: 400,
            quality_metrics: 1000,
            noise_probability: DEFAULT_NOISE_PROBABILITY,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(Error::InvalidConfig(format!(
                "noise probability must be within [0, 1], got {}",
                self.noise_probability
            )));
        }
        if self.patients == 0 || self.providers == 0 {
            return Err(Error::InvalidConfig(
                "patients and providers must be at least 1; reference columns sample from their key ranges"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_unseeded() {
        let config = GeneratorConfig::default();
        assert_eq!(config.patients, 1000);
        assert_eq!(config.providers, 200);
        assert_eq!(config.quality_metrics, 1000);
        assert_eq!(config.noise_probability, DEFAULT_NOISE_PROBABILITY);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let config = GeneratorConfig {
            noise_probability: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_reference_tables() {
        let config = GeneratorConfig {
            providers: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
