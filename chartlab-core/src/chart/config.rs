//! Chart configuration — string-driven construction with fail-fast errors.
//!
//! Unknown granularity or collision-policy names fail immediately with a
//! [`ChartError`]. Callers holding the enums directly never see an error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bucket::Granularity;
use super::series::CollisionPolicy;

/// Errors that can occur while building a chart configuration.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),
    #[error("Unknown collision policy: {0}")]
    UnknownPolicy(String),
}

impl FromStr for Granularity {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Granularity::Minute),
            "second" => Ok(Granularity::Second),
            other => Err(ChartError::UnknownGranularity(other.to_string())),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(CollisionPolicy::Skip),
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            other => Err(ChartError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Resolution and dedup rule for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub granularity: Granularity,
    pub collision_policy: CollisionPolicy,
}

impl ChartConfig {
    pub fn new(granularity: Granularity, collision_policy: CollisionPolicy) -> Self {
        Self {
            granularity,
            collision_policy,
        }
    }

    /// Build a configuration from config-file strings, failing fast on
    /// unknown names.
    pub fn from_params(granularity: &str, collision_policy: &str) -> Result<Self, ChartError> {
        Ok(Self {
            granularity: granularity.parse()?,
            collision_policy: collision_policy.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        let config = ChartConfig::from_params("minute", "skip").unwrap();
        assert_eq!(config.granularity, Granularity::Minute);
        assert_eq!(config.collision_policy, CollisionPolicy::Skip);

        let config = ChartConfig::from_params("second", "overwrite").unwrap();
        assert_eq!(config.granularity, Granularity::Second);
        assert_eq!(config.collision_policy, CollisionPolicy::Overwrite);
    }

    #[test]
    fn unknown_granularity_fails_fast() {
        let err = ChartConfig::from_params("hour", "skip").unwrap_err();
        assert!(matches!(err, ChartError::UnknownGranularity(ref name) if name == "hour"));
        assert_eq!(err.to_string(), "Unknown granularity: hour");
    }

    #[test]
    fn unknown_policy_fails_fast() {
        let err = ChartConfig::from_params("minute", "merge").unwrap_err();
        assert!(matches!(err, ChartError::UnknownPolicy(ref name) if name == "merge"));
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = ChartConfig::new(Granularity::Second, CollisionPolicy::Overwrite);
        let json = serde_json::to_string(&config).unwrap();
        let deser: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deser, config);
    }
}
