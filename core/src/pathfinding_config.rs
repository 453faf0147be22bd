use std::{fmt, time::Duration};

pub const DEFAULT_BETA: f32 = 10.0;
pub const DEFAULT_MAX_DEPTH: usize = 10;
pub const DEFAULT_MAX_TIME_SECS: u64 = 60;

/// Configuration for the similarity-guided search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Weight applied to similarity when computing frontier priority
    pub beta: f32,
    /// Maximum number of pages in a returned path, start and goal included
    pub max_depth: usize,
    /// Wall-clock budget for a single search
    pub max_time: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidBeta(f32),
    InvalidMaxDepth(usize),
    InvalidMaxTime(Duration),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBeta(beta) => {
                write!(f, "beta must be a positive finite number, got {}", beta)
            }
            ConfigError::InvalidMaxDepth(depth) => {
                write!(f, "max depth must be at least 1, got {}", depth)
            }
            ConfigError::InvalidMaxTime(time) => {
                write!(f, "max time must be greater than zero, got {:?}", time)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SearchConfig {
    pub fn new(beta: f32, max_depth: usize, max_time: Duration) -> Result<Self, ConfigError> {
        if !beta.is_finite() || beta <= 0.0 {
            return Err(ConfigError::InvalidBeta(beta));
        }
        if max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(max_depth));
        }
        if max_time.is_zero() {
            return Err(ConfigError::InvalidMaxTime(max_time));
        }

        Ok(Self {
            beta,
            max_depth,
            max_time,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            max_depth: DEFAULT_MAX_DEPTH,
            max_time: Duration::from_secs(DEFAULT_MAX_TIME_SECS),
        }
    }
}
