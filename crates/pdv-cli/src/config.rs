//! Rule configuration assembled from a config file and CLI flags.

use std::path::Path;

use anyhow::{Context, Result};
use pdv_validate::{Alphabet, RuleConfig};
use tracing::debug;

/// Rule settings given directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct RuleOverrides {
    pub occupation: Vec<String>,
    pub political_views: Vec<String>,
    pub worldview: Vec<String>,
    pub alphabet: Option<Alphabet>,
}

/// Load a [`RuleConfig`] from a JSON file. Missing keys take their defaults.
pub fn load_rule_config(path: &Path) -> Result<RuleConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config: RuleConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config: {}", path.display()))?;
    debug!(
        path = %path.display(),
        occupation_blocked = config.occupation_blocklist.len(),
        political_views_blocked = config.political_views_blocklist.len(),
        worldview_blocked = config.worldview_blocklist.len(),
        alphabet = config.alphabet.label(),
        "rule config loaded"
    );
    Ok(config)
}

/// Build the effective config: file values (if any), CLI blocklist values
/// added on top, and the CLI alphabet replacing the file's.
pub fn build_rule_config(file: Option<&Path>, overrides: RuleOverrides) -> Result<RuleConfig> {
    let base = match file {
        Some(path) => load_rule_config(path)?,
        None => RuleConfig::default(),
    };
    let RuleOverrides {
        occupation,
        political_views,
        worldview,
        alphabet,
    } = overrides;
    let mut config = base
        .with_occupation_blocklist(occupation)
        .with_political_views_blocklist(political_views)
        .with_worldview_blocklist(worldview);
    if let Some(alphabet) = alphabet {
        config = config.with_alphabet(alphabet);
    }
    Ok(config)
}
