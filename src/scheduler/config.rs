/*!
 * Scheduler Configuration
 * Core count and scheme, validated before any state is created
 */

use super::policy::Scheme;
use crate::core::errors::{SchedulerError, SchedulerResult};
use serde::{Deserialize, Serialize};

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    pub cores: usize,
    pub scheme: Scheme,
}

impl SchedulerConfig {
    #[inline]
    #[must_use]
    pub const fn new(cores: usize, scheme: Scheme) -> Self {
        Self { cores, scheme }
    }

    pub fn builder() -> SchedulerConfigBuilder {
        SchedulerConfigBuilder::default()
    }

    /// Parse a JSON document such as `{"cores": 2, "scheme": "ppri"}`
    pub fn from_json(json: &str) -> SchedulerResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SchedulerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SchedulerResult<()> {
        if self.cores == 0 {
            return Err(SchedulerError::InvalidConfig(
                "core count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(1, Scheme::Fcfs)
    }
}

/// Builder for SchedulerConfig
#[derive(Debug, Default)]
pub struct SchedulerConfigBuilder {
    cores: Option<usize>,
    scheme: Option<Scheme>,
}

impl SchedulerConfigBuilder {
    pub fn cores(mut self, cores: usize) -> Self {
        self.cores = Some(cores);
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Build and validate, unset fields fall back to the defaults
    pub fn build(self) -> SchedulerResult<SchedulerConfig> {
        let defaults = SchedulerConfig::default();
        let config = SchedulerConfig {
            cores: self.cores.unwrap_or(defaults.cores),
            scheme: self.scheme.unwrap_or(defaults.scheme),
        };
        config.validate()?;
        Ok(config)
    }
}
