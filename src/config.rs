use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::ScheduleError;
use crate::scheduler::DEFAULT_QUANTUM;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Quantum used when Round-Robin is selected by name
    pub default_quantum: i64,

    /// Final tie-breaker for SJF and Priority selection
    pub tie_breaker: TieBreaker,
}

impl SimulationConfig {
    /// Create a new simulation configuration
    pub fn new() -> Self {
        Self {
            default_quantum: DEFAULT_QUANTUM,
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Set default quantum
    pub fn with_default_quantum(mut self, quantum: i64) -> Self {
        self.default_quantum = quantum;
        self
    }

    /// Set tie-breaker
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScheduleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.default_quantum < 1 {
            return Err(ScheduleError::Config(format!(
                "default_quantum must be at least 1, got {}",
                self.default_quantum
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
