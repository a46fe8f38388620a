use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Scale and material parameters for a layout run.
///
/// All geometry lives in pixel space; `grid_size` (pixels per meter)
/// is the single conversion factor. Roll dimensions are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    pub grid_size: f64,
    pub roll_width_m: f64,
    pub roll_length_m: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            grid_size: 100.0,
            roll_width_m: 2.0,
            roll_length_m: 25.0,
        }
    }
}

impl PlanConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is non-finite or not
    /// strictly positive.
    pub fn new(grid_size: f64, roll_width_m: f64, roll_length_m: f64) -> Result<Self> {
        for (parameter, value) in [
            ("grid_size", grid_size),
            ("roll_width_m", roll_width_m),
            ("roll_length_m", roll_length_m),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { parameter, value }.into());
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { parameter, value }.into());
            }
        }
        Ok(Self {
            grid_size,
            roll_width_m,
            roll_length_m,
        })
    }

    /// Roll width converted to pixels.
    #[must_use]
    pub fn roll_width_px(&self) -> f64 {
        self.roll_width_m * self.grid_size
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = PlanConfig::default();
        assert!((c.grid_size - 100.0).abs() < 1e-12);
        assert!((c.roll_width_m - 2.0).abs() < 1e-12);
        assert!((c.roll_length_m - 25.0).abs() < 1e-12);
        assert!((c.roll_width_px() - 200.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive() {
        assert!(PlanConfig::new(0.0, 2.0, 25.0).is_err());
        assert!(PlanConfig::new(100.0, -2.0, 25.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(PlanConfig::new(f64::NAN, 2.0, 25.0).is_err());
        assert!(PlanConfig::new(100.0, f64::INFINITY, 25.0).is_err());
    }

    #[test]
    fn accepts_sane_values() {
        let c = PlanConfig::new(50.0, 4.0, 30.0).unwrap();
        assert!((c.roll_width_px() - 200.0).abs() < 1e-12);
    }
}
