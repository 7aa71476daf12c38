use serde::Deserialize;
use thiserror::Error;

/// Analog thresholds for translating gamepad axes into discrete buttons.
///
/// All values are normalized magnitudes. The right stick uses a single
/// threshold over the 2-D vector length rather than per-axis cutoffs, which
/// is why its default is much higher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub trigger_threshold: f32,
    pub left_stick_dead_zone: f32,
    pub right_stick_dead_zone: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            trigger_threshold: 0.2,
            left_stick_dead_zone: 0.2,
            right_stick_dead_zone: 0.9,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("`{field}` must be within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f32 },
}

impl TrackerConfig {
    /// A bad threshold is a startup-time fault: reject it outright instead
    /// of letting dead-zone math degrade silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("trigger_threshold", self.trigger_threshold),
            ("left_stick_dead_zone", self.left_stick_dead_zone),
            ("right_stick_dead_zone", self.right_stick_dead_zone),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
