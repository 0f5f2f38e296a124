use rand::Rng;

use synthcare_core::{CellValue, Error};

/// Probabilistically replaces generated values with the absent-value
/// marker.
///
/// Pure per-call: no row or column-level null rate is guaranteed, only a
/// per-field expectation of `probability`.
#[derive(Debug, Clone, Copy)]
pub struct NoiseInjector {
    probability: f64,
}

impl NoiseInjector {
    pub fn new(probability: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidConfig(format!(
                "noise probability must be within [0, 1], got {probability}"
            )));
        }
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns the value unchanged with probability `1 - p`, `Null` with
    /// probability `p`.
    pub fn apply<R: Rng>(&self, value: CellValue, rng: &mut R) -> CellValue {
        if rng.random_bool(self.probability) {
            CellValue::Null
        } else {
            value
        }
    }
}
