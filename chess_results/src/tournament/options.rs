//! Construction and validation options.

use serde::{Deserialize, Serialize};

/// Raw value for the number of rounds: a number, or text holding one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundsValue {
    Number(i64),
    Text(String),
}

impl From<u32> for RoundsValue {
    fn from(value: u32) -> Self {
        RoundsValue::Number(value.into())
    }
}

impl From<&str> for RoundsValue {
    fn from(value: &str) -> Self {
        RoundsValue::Text(value.to_string())
    }
}

impl From<String> for RoundsValue {
    fn from(value: String) -> Self {
        RoundsValue::Text(value)
    }
}

impl From<Option<u32>> for RoundsValue {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(rounds) => rounds.into(),
            None => RoundsValue::Text(String::new()),
        }
    }
}

/// Optional tournament metadata applied at construction.
///
/// Each field goes through the matching `Tournament` setter, so the same
/// normalization and validation rules apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentOptions {
    pub finish: Option<String>,
    pub rounds: Option<RoundsValue>,
    pub site: Option<String>,
    pub city: Option<String>,
    pub fed: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub arbiter: Option<String>,
    pub deputy: Option<String>,
    pub time_control: Option<String>,
}

impl TournamentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(mut self, finish: impl Into<String>) -> Self {
        self.finish = Some(finish.into());
        self
    }

    pub fn rounds(mut self, rounds: impl Into<RoundsValue>) -> Self {
        self.rounds = Some(rounds.into());
        self
    }

    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn fed(mut self, fed: impl Into<String>) -> Self {
        self.fed = Some(fed.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn arbiter(mut self, arbiter: impl Into<String>) -> Self {
        self.arbiter = Some(arbiter.into());
        self
    }

    pub fn deputy(mut self, deputy: impl Into<String>) -> Self {
        self.deputy = Some(deputy.into());
        self
    }

    pub fn time_control(mut self, time_control: impl Into<String>) -> Self {
        self.time_control = Some(time_control.into());
        self
    }
}

/// Switches for [`Tournament::validate`](super::Tournament::validate)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Require consistent ranks
    pub rank: bool,
    /// Repair inconsistent ranks by reranking before the other checks
    pub rerank: bool,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(mut self, rank: bool) -> Self {
        self.rank = rank;
        self
    }

    pub fn rerank(mut self, rerank: bool) -> Self {
        self.rerank = rerank;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_deserialize_rounds_either_way() {
        let opts: TournamentOptions =
            serde_json::from_str(r#"{"rounds": 9, "type": "Swiss"}"#).unwrap();
        assert_eq!(opts.rounds, Some(RoundsValue::Number(9)));
        assert_eq!(opts.event_type.as_deref(), Some("Swiss"));

        let opts: TournamentOptions = serde_json::from_str(r#"{"rounds": "9"}"#).unwrap();
        assert_eq!(opts.rounds, Some(RoundsValue::Text("9".to_string())));
    }

    #[test]
    fn test_options_builder() {
        let opts = TournamentOptions::new().rounds(5u32).city("Reykjavik");
        assert_eq!(opts.rounds, Some(RoundsValue::Number(5)));
        assert_eq!(opts.city.as_deref(), Some("Reykjavik"));
        assert_eq!(opts.finish, None);
    }

    #[test]
    fn test_validate_options_default_off() {
        let opts = ValidateOptions::default();
        assert!(!opts.rank);
        assert!(!opts.rerank);
        assert!(ValidateOptions::new().rank(true).rank);
    }
}
