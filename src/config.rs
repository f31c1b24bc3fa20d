//! Triangulation configuration and builder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tolerance::{Tolerance, EPSILON};
use crate::{Error, Result};

/// Default distance between the input bounds and the omega vertices.
pub const OMEGA_MARGIN: f64 = 1000.0;

/// Settings shared by the triangulators.
///
/// # Example
///
/// ```rust
/// use panelcut::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///   .epsilon(0.01)
///   .unwrap()
///   .omega_margin(5000.0)
///   .unwrap()
///   .build();
/// assert_eq!(config.tolerance.epsilon, 0.01);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
  /// Comparator used for point equality, ordering and incircle slack.
  pub tolerance: Tolerance,

  /// How far outside the input bounds the Delaunay omega vertices are
  /// placed. Must dwarf the input extent for the omega triangles to stay
  /// out of the final mesh.
  pub omega_margin: f64,
}

impl Default for Config {
  fn default() -> Self {
    ConfigBuilder::new().build()
  }
}

/// Builder for [`Config`] with validation.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
  epsilon: f64,
  omega_margin: f64,
}

impl ConfigBuilder {
  /// Defaults: epsilon 0.001, omega margin 1000.
  pub fn new() -> Self {
    ConfigBuilder {
      epsilon: EPSILON,
      omega_margin: OMEGA_MARGIN,
    }
  }

  /// # Errors
  ///
  /// Returns `InvalidConfig` unless `epsilon` is finite and positive.
  pub fn epsilon(mut self, epsilon: f64) -> Result<Self> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
      return Err(Error::InvalidConfig(format!(
        "epsilon must be positive (got {})",
        epsilon
      )));
    }
    self.epsilon = epsilon;
    Ok(self)
  }

  /// # Errors
  ///
  /// Returns `InvalidConfig` unless `margin` is finite and positive.
  pub fn omega_margin(mut self, margin: f64) -> Result<Self> {
    if !margin.is_finite() || margin <= 0.0 {
      return Err(Error::InvalidConfig(format!(
        "omega margin must be positive (got {})",
        margin
      )));
    }
    self.omega_margin = margin;
    Ok(self)
  }

  pub fn build(self) -> Config {
    Config {
      tolerance: Tolerance::new(self.epsilon),
      omega_margin: self.omega_margin,
    }
  }
}

impl Default for ConfigBuilder {
  fn default() -> Self {
    Self::new()
  }
}
