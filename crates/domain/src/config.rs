//! Approval policy configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use campuscoffee_core::ValueObject;

/// Environment variable overriding the approval quorum.
pub const MIN_COUNT_ENV: &str = "CAMPUSCOFFEE_APPROVAL_MIN_COUNT";

/// Quorum used when nothing else is configured.
pub const DEFAULT_MIN_COUNT: u32 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CAMPUSCOFFEE_APPROVAL_MIN_COUNT must be a non-negative integer, got '{0}'")]
    InvalidMinCount(String),
}

/// Minimum number of distinct approvals before a review counts as approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalConfiguration {
    min_count: u32,
}

impl ValueObject for ApprovalConfiguration {}

impl ApprovalConfiguration {
    pub fn new(min_count: u32) -> Self {
        Self { min_count }
    }

    pub fn min_count(&self) -> u32 {
        self.min_count
    }

    /// Load from `CAMPUSCOFFEE_APPROVAL_MIN_COUNT`, falling back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(MIN_COUNT_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            None => Ok(Self::default()),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map(Self::new)
                .map_err(|_| ConfigError::InvalidMinCount(raw.to_string())),
        }
    }
}

impl Default for ApprovalConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COUNT)
    }
}
