//! Deque configuration parameters.

use numdeque_core::ConfigError;

/// Configuration for a numeric deque's backing storage.
///
/// Controls the starting capacity and how aggressively the buffer grows.
/// Validated at construction; immutable for the lifetime of the array.
/// Arrays derived from a source (map, filter, split, ...) inherit its config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DequeConfig {
    /// Slots allocated by the constructor.
    ///
    /// Default: 10. Both cursors start at `initial_capacity / 2`.
    pub initial_capacity: usize,

    /// Multiplier applied on every reallocation.
    ///
    /// Default: 2. Must be at least 2 so that growth stays amortized O(1)
    /// at both ends.
    pub growth_factor: usize,
}

impl DequeConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth factor (doubling).
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the default growth factor and the given capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Override the growth factor.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check that the config describes a usable buffer.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroCapacity`] if `initial_capacity == 0`.
    /// - [`ConfigError::GrowthFactorTooSmall`] if `growth_factor < 2`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                factor: self.growth_factor,
            });
        }
        Ok(())
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_slots_doubling() {
        let config = DequeConfig::default();
        assert_eq!(config.initial_capacity, 10);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            DequeConfig::new(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn growth_factor_below_two_rejected() {
        let config = DequeConfig::new(4).with_growth_factor(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::GrowthFactorTooSmall { factor: 1 })
        );
    }

    #[test]
    fn larger_growth_factor_accepted() {
        assert!(DequeConfig::new(1).with_growth_factor(4).validate().is_ok());
    }
}
