//! Configuration loading from tickbench.toml
//!
//! Runs are configured programmatically by default; a `tickbench.toml` in
//! the project root (discovered by walking up from the current directory)
//! can override pacing and filtering for embeddings that prefer a file.

use crate::plan::PlanOptions;
use crate::scheduler::Pacing;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Delay between a test's Running transition and its body invocation
    /// (e.g., "500ms"). Never measured by the test's own timer.
    #[serde(default = "default_start_delay")]
    pub start_delay: String,
    /// Delay after each completed test (e.g., "500ms").
    #[serde(default = "default_test_pace")]
    pub test_pace: String,
    /// Delay after each group summary (e.g., "750ms").
    #[serde(default = "default_group_pace")]
    pub group_pace: String,
    /// Optional regex over test names; non-matching tests are skipped.
    #[serde(default)]
    pub filter: Option<String>,
    /// Optional exact group to run.
    #[serde(default)]
    pub group: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_delay: default_start_delay(),
            test_pace: default_test_pace(),
            group_pace: default_group_pace(),
            filter: None,
            group: None,
        }
    }
}

fn default_start_delay() -> String {
    "500ms".to_string()
}
fn default_test_pace() -> String {
    "500ms".to_string()
}
fn default_group_pace() -> String {
    "750ms".to_string()
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("tickbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Resolve the pacing delays.
    pub fn pacing(&self) -> anyhow::Result<Pacing> {
        Ok(Pacing {
            start_delay: Self::parse_duration(&self.start_delay)?,
            test_pace: Self::parse_duration(&self.test_pace)?,
            group_pace: Self::parse_duration(&self.group_pace)?,
        })
    }

    /// Resolve the planning options (compiles the name filter).
    pub fn plan_options(&self) -> anyhow::Result<PlanOptions> {
        let filter = match &self.filter {
            Some(pattern) => Some(regex::Regex::new(pattern)?),
            None => None,
        };
        Ok(PlanOptions {
            filter,
            group: self.group.clone(),
        })
    }

    /// Parse a duration string (e.g., "500ms", "2s", "0") to a Duration
    pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        // Find where the number ends and unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "ms"));

        let value: f64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;
        if value < 0.0 {
            return Err(anyhow::anyhow!("Negative duration: {}", s));
        }

        let nanos_per_unit: f64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1.0,
            "us" => 1_000.0,
            "ms" => 1_000_000.0,
            "s" => 1_000_000_000.0,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok(Duration::from_nanos((value * nanos_per_unit) as u64))
    }
}
