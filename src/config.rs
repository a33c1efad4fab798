//! Run-time configuration read from the environment.

use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "BLOCKFALL_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for the shape source.
    pub seed: u32,
    /// Log file. Logging is off when unset.
    pub log_path: Option<String>,
    /// `EnvFilter` directive.
    pub log_filter: String,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = value(SEED_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            seed,
            log_path: value(LOG_PATH_VAR),
            log_filter: value(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Install a file-backed `tracing` subscriber.
    ///
    /// Stdout belongs to the renderer, so nothing is installed without a log
    /// path. Returns whether a subscriber was installed.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = self.log_path.as_deref() else {
            return Ok(false);
        };

        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {path}"))?;
        let filter = EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter {:?}", self.log_filter))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!(e))?;
        Ok(true)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
