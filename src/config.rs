use crate::casting::{ChangeLineStrategy, CodeSeedStrategy};
use crate::classifier::RulesetVersion;
use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Instrument code cast in code mode. Validated at startup.
    pub stock_code: String,
    pub ruleset: RulesetVersion,
    pub change_line_strategy: ChangeLineStrategy,
    pub code_seed_strategy: CodeSeedStrategy,
    pub refresh_interval_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stock_code: "300403".to_string(),
            ruleset: RulesetVersion::Scored,
            change_line_strategy: ChangeLineStrategy::UseHour,
            code_seed_strategy: CodeSeedStrategy::Static,
            refresh_interval_seconds: 60,
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
