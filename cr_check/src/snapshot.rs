//! JSON snapshots of a tournament and how they are loaded.

use chess_results::{
    FieldError, GameResult, Player, PlayerNum, Tournament, TournamentError, TournamentOptions,
};
use serde::Deserialize;
use std::path::Path;

/// Snapshot error types
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad tournament details: {0}")]
    Tournament(#[source] TournamentError),

    #[error("Bad player {num}: {source}")]
    Player {
        num: PlayerNum,
        #[source]
        source: TournamentError,
    },

    #[error("Bad result #{index}: {source}")]
    Result {
        index: usize,
        #[source]
        source: TournamentError,
    },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub start: String,
    #[serde(default)]
    pub options: TournamentOptions,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub num: PlayerNum,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub fide_id: Option<u32>,
    #[serde(default)]
    pub fed: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub fide_rating: Option<u32>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// One result as written in a snapshot. Scores are "1", "=" or "0".
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEntry {
    pub round: u32,
    pub player: PlayerNum,
    pub score: String,
    #[serde(default)]
    pub opponent: Option<PlayerNum>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default = "default_true")]
    pub rateable: bool,
    #[serde(default = "default_true")]
    pub reverse_rateable: bool,
}

fn default_true() -> bool {
    true
}

impl Snapshot {
    pub fn load(path: &Path) -> SnapshotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the tournament, adding players before any results.
    pub fn build(self) -> SnapshotResult<Tournament> {
        let mut tournament = Tournament::new(&self.name, &self.start, self.options)
            .map_err(|e| SnapshotError::Tournament(e.into()))?;

        for entry in self.players {
            let num = entry.num;
            let player = entry.into_player().map_err(|e| SnapshotError::Player {
                num,
                source: e.into(),
            })?;
            tournament
                .add_player(player)
                .map_err(|source| SnapshotError::Player { num, source })?;
        }

        for (index, entry) in self.results.into_iter().enumerate() {
            let index = index + 1;
            let reverse_rateable = entry.reverse_rateable;
            let result = entry.into_result().map_err(|e| SnapshotError::Result {
                index,
                source: e.into(),
            })?;
            tournament
                .add_result_with(result, reverse_rateable)
                .map_err(|source| SnapshotError::Result { index, source })?;
        }

        log::debug!(
            "Loaded '{}' with {} players",
            tournament.name(),
            tournament.num_players()
        );
        Ok(tournament)
    }
}

impl PlayerEntry {
    fn into_player(self) -> Result<Player, FieldError> {
        let mut player = Player::new(&self.first_name, &self.last_name, self.num)?;
        player.set_id(self.id)?;
        player.set_fide_id(self.fide_id)?;
        player.set_rating(self.rating)?;
        player.set_fide_rating(self.fide_rating)?;
        player.set_rank(self.rank)?;
        if let Some(fed) = &self.fed {
            player.set_fed(fed)?;
        }
        if let Some(title) = &self.title {
            player.set_title(title)?;
        }
        if let Some(dob) = &self.dob {
            player.set_dob(dob)?;
        }
        if let Some(gender) = &self.gender {
            player.set_gender(gender)?;
        }
        Ok(player)
    }
}

impl ResultEntry {
    fn into_result(self) -> Result<GameResult, FieldError> {
        let mut result = GameResult::new(self.round, self.player, self.score.parse()?)?
            .with_rateable(self.rateable);
        if let Some(opponent) = self.opponent {
            result = result.against(opponent)?;
        }
        if let Some(colour) = &self.colour {
            result = result.with_colour(colour.parse()?);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_results::{Colour, Score, StructuralError, Title, ValidateOptions};

    const KILKENNY: &str = include_str!("../snapshots/kilkenny.json");

    #[test]
    fn test_sample_snapshot_builds_and_validates() {
        let mut t = Snapshot::from_json(KILKENNY).unwrap().build().unwrap();
        assert_eq!(t.name(), "Kilkenny Masters");
        assert_eq!(t.num_players(), 4);
        assert_eq!(t.city(), Some("Kilkenny"));

        let orr = t.player(1).unwrap();
        assert_eq!(orr.title(), Some(Title::IM));
        assert_eq!(orr.fed(), Some("IRL"));
        assert_eq!(orr.points(), 2.5);

        assert_eq!(t.validate(ValidateOptions::new().rerank(true).rank(true)), Ok(()));
        assert_eq!(t.rounds(), Some(3));
        assert_eq!(t.standings()[0].num(), 1);
    }

    #[test]
    fn test_sample_snapshot_mirrors_results() {
        let t = Snapshot::from_json(KILKENNY).unwrap().build().unwrap();
        let quinn = t.player(4).unwrap();
        let r1 = quinn.find_result(1).unwrap();
        assert_eq!(r1.opponent(), Some(1));
        assert_eq!(r1.score(), Score::Loss);
        assert_eq!(r1.colour(), Some(Colour::White));
    }

    #[test]
    fn test_reverse_rateable_flag() {
        let json = r#"{
            "name": "Blitz",
            "start": "2010-03-01",
            "players": [
                {"num": 1, "first_name": "Alex", "last_name": "Lopez"},
                {"num": 2, "first_name": "Colm", "last_name": "Daly"}
            ],
            "results": [
                {"round": 1, "player": 1, "score": "1", "opponent": 2, "reverse_rateable": false}
            ]
        }"#;
        let t = Snapshot::from_json(json).unwrap().build().unwrap();
        assert!(t.player(1).unwrap().find_result(1).unwrap().rateable());
        assert!(!t.player(2).unwrap().find_result(1).unwrap().rateable());
    }

    #[test]
    fn test_bad_player_is_reported_with_number() {
        let json = r#"{
            "name": "Open",
            "start": "2010-06-01",
            "players": [{"num": 7, "first_name": "Alex", "last_name": "Lopez", "title": "XYZ"}]
        }"#;
        let err = Snapshot::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, SnapshotError::Player { num: 7, .. }));
    }

    #[test]
    fn test_bad_result_is_reported_with_position() {
        let json = r#"{
            "name": "Open",
            "start": "2010-06-01",
            "players": [{"num": 1, "first_name": "Alex", "last_name": "Lopez"}],
            "results": [
                {"round": 1, "player": 1, "score": "1"},
                {"round": 2, "player": 1, "score": "1", "opponent": 9}
            ]
        }"#;
        let err = Snapshot::from_json(json).unwrap().build().unwrap_err();
        match err {
            SnapshotError::Result { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(
                    source,
                    TournamentError::Structural(StructuralError::UnknownOpponent { .. })
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_tournament_details() {
        let json = r#"{"name": "Open", "start": "not a date"}"#;
        let err = Snapshot::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, SnapshotError::Tournament(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Snapshot::from_json("{\"name\": 1}"),
            Err(SnapshotError::Json(_))
        ));
    }
}
