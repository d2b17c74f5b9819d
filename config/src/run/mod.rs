//! Run configuration for a GZ curve computation.
//!
//! Every value the hydrostatics driver needs for one sweep travels in a
//! [`CurveConfig`], built once by the caller and passed explicitly.

use std::fmt;

use crate::constants::{heel_angles, DEFAULT_HEEL_COUNT, DEFAULT_HEEL_MAX_DEG};

/// Immutable settings for one GZ curve sweep.
///
/// # Examples
/// ```
/// use config::CurveConfig;
/// let cfg = CurveConfig::new(2.0, 6.0, 30.0, 31).expect("valid config");
/// assert_eq!(cfg.heel_angles_deg().len(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Vertical center of gravity above the keel reference (m).
    pub kg: f64,
    /// Waterplane elevation in the hull frame (m); `z >= draft` is submerged.
    pub draft: f64,
    /// Largest heel angle of the sweep, in degrees.
    pub heel_max_deg: f64,
    /// Number of heel angles, 0° included.
    pub heel_count: usize,
}

impl CurveConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::{ConfigError, CurveConfig};
    /// assert_eq!(
    ///     CurveConfig::new(2.0, f64::INFINITY, 30.0, 31).unwrap_err(),
    ///     ConfigError::InvalidDraft(f64::INFINITY),
    /// );
    /// ```
    pub fn new(kg: f64, draft: f64, heel_max_deg: f64, heel_count: usize) -> Result<Self, ConfigError> {
        if !kg.is_finite() {
            return Err(ConfigError::InvalidKg(kg));
        }
        if !draft.is_finite() {
            return Err(ConfigError::InvalidDraft(draft));
        }
        if !heel_max_deg.is_finite() || !(0.0..=90.0).contains(&heel_max_deg) {
            return Err(ConfigError::InvalidHeelRange(heel_max_deg));
        }
        if heel_count == 0 {
            return Err(ConfigError::InvalidHeelCount(heel_count));
        }
        Ok(Self {
            kg,
            draft,
            heel_max_deg,
            heel_count,
        })
    }

    /// Builds a configuration with the reference heel sweep (0..=30° in 1° steps).
    ///
    /// # Examples
    /// ```
    /// use config::CurveConfig;
    /// let cfg = CurveConfig::with_default_sweep(2.0, 6.0).unwrap();
    /// assert_eq!(cfg.heel_count, 31);
    /// ```
    pub fn with_default_sweep(kg: f64, draft: f64) -> Result<Self, ConfigError> {
        Self::new(kg, draft, DEFAULT_HEEL_MAX_DEG, DEFAULT_HEEL_COUNT)
    }

    /// Heel angles of the sweep in degrees, ascending from 0.
    pub fn heel_angles_deg(&self) -> Vec<f64> {
        heel_angles(self.heel_max_deg, self.heel_count)
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when KG is not a finite number.
    InvalidKg(f64),
    /// Raised when the draft is not a finite number.
    InvalidDraft(f64),
    /// Raised when the largest heel angle is outside 0..=90 degrees.
    InvalidHeelRange(f64),
    /// Raised when the sweep has no angles.
    InvalidHeelCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidKg(value) => {
                write!(f, "KG must be finite: {value}")
            }
            ConfigError::InvalidDraft(value) => {
                write!(f, "draft must be finite: {value}")
            }
            ConfigError::InvalidHeelRange(value) => {
                write!(f, "heel_max_deg must be within 0..=90: {value}")
            }
            ConfigError::InvalidHeelCount(value) => {
                write!(f, "heel_count must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
