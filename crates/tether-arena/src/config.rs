//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`RecordArena`](crate::RecordArena).
///
/// Controls the up-front reservation and the hard limits on live slots.
/// Checked by [`validate`](Self::validate) when the arena is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Record slots reserved at construction.
    ///
    /// Default: 64. Inserting beyond the reservation grows the slab; it
    /// never exceeds `max_records`.
    pub record_capacity: usize,

    /// Maximum number of record slots.
    ///
    /// Default: 16_777_216. Inserting into a full arena returns
    /// [`ArenaError::CapacityExceeded`].
    pub max_records: u32,

    /// Maximum number of list header slots.
    ///
    /// Default: 65_536.
    pub max_lists: u32,
}

impl ArenaConfig {
    /// Default up-front record reservation.
    pub const DEFAULT_RECORD_CAPACITY: usize = 64;

    /// Default record slot limit.
    pub const DEFAULT_MAX_RECORDS: u32 = 1 << 24;

    /// Default list header slot limit.
    pub const DEFAULT_MAX_LISTS: u32 = 1 << 16;

    /// A config with default limits.
    pub fn new() -> Self {
        Self {
            record_capacity: Self::DEFAULT_RECORD_CAPACITY,
            max_records: Self::DEFAULT_MAX_RECORDS,
            max_lists: Self::DEFAULT_MAX_LISTS,
        }
    }

    /// Set the up-front record reservation.
    pub fn with_record_capacity(mut self, record_capacity: usize) -> Self {
        self.record_capacity = record_capacity;
        self
    }

    /// Set the record slot limit.
    pub fn with_max_records(mut self, max_records: u32) -> Self {
        self.max_records = max_records;
        self
    }

    /// Set the list header slot limit.
    pub fn with_max_lists(mut self, max_lists: u32) -> Self {
        self.max_lists = max_lists;
        self
    }

    /// Check that the limits are usable.
    ///
    /// Both limits must be non-zero, and the reservation may not exceed
    /// the record limit.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.max_records == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_records must be at least 1".into(),
            });
        }
        if self.max_lists == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_lists must be at least 1".into(),
            });
        }
        if self.record_capacity > self.max_records as usize {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "record_capacity {} exceeds max_records {}",
                    self.record_capacity, self.max_records
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ArenaConfig::default();
        assert_eq!(config.record_capacity, ArenaConfig::DEFAULT_RECORD_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limits_rejected() {
        let config = ArenaConfig::new()
            .with_record_capacity(0)
            .with_max_records(0);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
        let config = ArenaConfig::new().with_max_lists(0);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn reservation_above_limit_rejected() {
        let config = ArenaConfig::new()
            .with_record_capacity(10)
            .with_max_records(4);
        assert!(config.validate().is_err());
    }
}
