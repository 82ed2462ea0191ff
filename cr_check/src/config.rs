//! Command configuration management.
//!
//! Merges command-line arguments over environment variables and validates
//! the result.

use chess_results::{TieBreak, ValidateOptions};
use std::path::PathBuf;

/// Complete configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Snapshot file to load
    pub snapshot: PathBuf,
    /// Validation switches
    pub validate: ValidateOptions,
    /// Tie-breaks applied when ranking, in order
    pub tie_breaks: Vec<TieBreak>,
}

/// Values given on the command line; each one wins over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub snapshot: Option<PathBuf>,
    pub rank: bool,
    pub rerank: bool,
    pub tie_breaks: Option<String>,
}

impl CheckConfig {
    /// Load configuration from the process environment
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration reading variables through `lookup`
    ///
    /// # Errors
    ///
    /// Returns error if the snapshot is missing or a variable is invalid
    pub fn from_lookup<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot = overrides
            .snapshot
            .or_else(|| lookup("CR_CHECK_SNAPSHOT").map(PathBuf::from))
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "CR_CHECK_SNAPSHOT".to_string(),
                hint: "Pass the snapshot path as the first argument".to_string(),
            })?;

        let rank = overrides.rank || parse_flag(&lookup, "CR_CHECK_RANK")?;
        let rerank = overrides.rerank || parse_flag(&lookup, "CR_CHECK_RERANK")?;

        let tie_breaks = match overrides.tie_breaks {
            Some(list) => parse_tie_breaks("--tie-breaks", &list)?,
            None => match lookup("CR_CHECK_TIE_BREAKS") {
                Some(list) => parse_tie_breaks("CR_CHECK_TIE_BREAKS", &list)?,
                None => Vec::new(),
            },
        };

        let config = CheckConfig {
            snapshot,
            validate: ValidateOptions::new().rank(rank).rerank(rerank),
            tie_breaks,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, tie_break) in self.tie_breaks.iter().enumerate() {
            if self.tie_breaks[..i].contains(tie_break) {
                return Err(ConfigError::Invalid {
                    var: "tie-breaks".to_string(),
                    reason: format!("{tie_break} is listed more than once"),
                });
            }
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("expected true or false, got {other:?}"),
        }),
    }
}

fn parse_tie_breaks(var: &str, list: &str) -> Result<Vec<TieBreak>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse().map_err(|e: chess_results::FieldError| ConfigError::Invalid {
                var: var.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
