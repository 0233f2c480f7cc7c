//! Host-facing configuration.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Limits and defaults a host applies before asking for a trace. The
/// generator itself does not read this; trace size grows with
/// `events × len`, so the cap belongs in front of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Largest sequence a host should hand to the generator.
    pub max_elements: usize,
    /// Sequence shown before the user supplies one.
    pub default_sequence: Vec<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_elements: 100,
            default_sequence: vec![
                44.0, 23.0, 7.0, 56.0, 12.0, 89.0, 3.0, 50.0, 19.0, 65.0, 31.0, 95.0,
            ],
        }
    }
}

impl Config {
    /// Reject sequences the generator should not be asked to trace.
    pub fn check_sequence(&self, values: &[f64]) -> Result<(), TraceError> {
        if values.len() > self.max_elements {
            return Err(TraceError::TooManyElements {
                len: values.len(),
                max: self.max_elements,
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(TraceError::NonFiniteValue { index, value });
        }
        Ok(())
    }
}
