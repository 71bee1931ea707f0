use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub year_min: i32,
    pub year_max: i32,
    pub default_year: i32,
}

/// One movie listing source: `name` is the brand display name, `path` the
/// CSV location.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub stock_source: String,
    pub movie_sources: Vec<SourceConfig>,
    pub dashboard: DashboardSettings,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
