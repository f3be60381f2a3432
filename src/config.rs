use thiserror::Error;

/// Smallest bucket count a table ever has. Shrinking stops here.
pub const MIN_CAPACITY: usize = 8;

/// Fractional part of the golden ratio, used for multiplicative hashing.
pub const DEFAULT_MULTIPLIER: f64 = 0.6180339887;

const DEFAULT_GROW_THRESHOLD: f64 = 1.0;
const DEFAULT_SHRINK_THRESHOLD: f64 = 0.25;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
  #[error("grow threshold must be finite and positive, got {0}")]
  InvalidGrowThreshold(f64),
  #[error("shrink threshold must be finite, non-negative and below half the grow threshold {grow}, got {shrink}")]
  InvalidShrinkThreshold { shrink: f64, grow: f64 },
  #[error("multiplier must lie strictly between 0 and 1, got {0}")]
  InvalidMultiplier(f64),
}

/// Tunables for a [`Table`](crate::Table).
///
/// The table grows (doubles) before an insert once `len >= capacity * grow_threshold`
/// and shrinks (halves) after a remove once `len <= capacity * shrink_threshold`.
/// `shrink_threshold` must stay below half of `grow_threshold`, so the rebuild
/// after a shrink never crosses the grow threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
  pub initial_capacity: usize,
  pub grow_threshold: f64,
  pub shrink_threshold: f64,
  pub multiplier: f64,
}

impl Default for TableConfig {
  fn default() -> Self {
    Self {
      initial_capacity: MIN_CAPACITY,
      grow_threshold: DEFAULT_GROW_THRESHOLD,
      shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
      multiplier: DEFAULT_MULTIPLIER,
    }
  }
}

impl TableConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
    self.initial_capacity = capacity;
    self
  }

  pub fn with_grow_threshold(mut self, threshold: f64) -> Self {
    self.grow_threshold = threshold;
    self
  }

  pub fn with_shrink_threshold(mut self, threshold: f64) -> Self {
    self.shrink_threshold = threshold;
    self
  }

  pub fn with_multiplier(mut self, multiplier: f64) -> Self {
    self.multiplier = multiplier;
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    let grow = self.grow_threshold;
    if !grow.is_finite() || grow <= 0.0 {
      return Err(ConfigError::InvalidGrowThreshold(grow));
    }

    let shrink = self.shrink_threshold;
    if !shrink.is_finite() || shrink < 0.0 || shrink >= grow / 2.0 {
      return Err(ConfigError::InvalidShrinkThreshold { shrink, grow });
    }

    let multiplier = self.multiplier;
    if !multiplier.is_finite() || multiplier <= 0.0 || multiplier >= 1.0 {
      return Err(ConfigError::InvalidMultiplier(multiplier));
    }

    Ok(())
  }
}

/// Raises `capacity` to the floor and rounds it up to a power of two.
pub(crate) fn normalize_capacity(capacity: usize) -> usize {
  capacity.max(MIN_CAPACITY).next_power_of_two()
}
