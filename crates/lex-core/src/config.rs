//! Site configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete configuration for intake and results flows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexConfig {
    pub intake: IntakeLimits,
    pub delays: Delays,
}

/// Limits enforced on the case intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeLimits {
    /// Minimum case details length (characters)
    pub min_details_chars: usize,
    /// Maximum case details length (characters)
    pub max_details_chars: usize,
    /// Maximum attachment size (bytes, inclusive)
    pub max_attachment_bytes: u64,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            min_details_chars: 50,
            max_details_chars: 1000,
            max_attachment_bytes: 5 * 1024 * 1024, // 5MB
        }
    }
}

/// Artificial pauses shown to the user.
///
/// These are presentation only: not timeouts, not retry budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delays {
    pub upload_ms: u64,
    pub submit_ms: u64,
    pub results_ms: u64,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            upload_ms: 1500,
            submit_ms: 3000,
            results_ms: 1500,
        }
    }
}

impl Delays {
    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }

    pub fn submit(&self) -> Duration {
        Duration::from_millis(self.submit_ms)
    }

    pub fn results(&self) -> Duration {
        Duration::from_millis(self.results_ms)
    }
}

impl LexConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: LexConfig = serde_json::from_str(json).map_err(invalid_config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let limits = &self.intake;
        if limits.min_details_chars > limits.max_details_chars {
            return Err(CoreError::Config(format!(
                "min_details_chars ({}) exceeds max_details_chars ({})",
                limits.min_details_chars, limits.max_details_chars
            )));
        }
        if limits.max_attachment_bytes == 0 {
            return Err(CoreError::Config(
                "max_attachment_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn invalid_config(err: serde_json::Error) -> CoreError {
    CoreError::Config(format!("Invalid configuration: {}", err))
}
