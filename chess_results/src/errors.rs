//! Error types for tournament construction and validation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::PlayerNum;

/// A setter rejected the value it was given.
///
/// The target keeps its previous value whenever this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} ({value:?}): {reason}")]
pub struct FieldError {
    /// Name of the field being set
    pub field: &'static str,
    /// Raw value as supplied by the caller
    pub value: String,
    /// Why the value was rejected
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field setters
pub type FieldResult<T> = Result<T, FieldError>;

/// Referential problems raised while players and results are being added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Player number {0} is already taken")]
    DuplicatePlayer(PlayerNum),

    #[error("Unknown player number {0}")]
    UnknownPlayer(PlayerNum),

    #[error("Player {player} has unknown opponent {opponent} in round {round}")]
    UnknownOpponent {
        player: PlayerNum,
        opponent: PlayerNum,
        round: u32,
    },

    #[error("Round {round} is out of range: the tournament has {rounds} rounds")]
    RoundOutOfRange { round: u32, rounds: u32 },

    #[error("Player {player} already has a different result in round {round}")]
    ConflictingResult { player: PlayerNum, round: u32 },

    #[error("Result for player {result_player} cannot be added to player {player}")]
    PlayerMismatch {
        player: PlayerNum,
        result_player: PlayerNum,
    },
}

/// Problems found by the validation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyError {
    #[error("A tournament needs at least 2 players, found {0}")]
    TooFewPlayers(usize),

    #[error("Player {0} has no results")]
    NoResults(PlayerNum),

    #[error("Start date {start} is after finish date {finish}")]
    DatesOutOfOrder { start: NaiveDate, finish: NaiveDate },

    #[error("No results found for round {0}")]
    MissingRound(u32),

    #[error("Declared number of rounds ({declared}) does not match the last round ({actual})")]
    RoundCountMismatch { declared: u32, actual: u32 },

    #[error("Players {first} and {second} share rank {rank}")]
    DuplicateRank {
        rank: u32,
        first: PlayerNum,
        second: PlayerNum,
    },

    #[error("Player {0} has no rank")]
    MissingRank(PlayerNum),

    #[error("The best rank must be 1, found {0}")]
    BestRankNotOne(u32),

    #[error("The worst rank must be {expected}, found {actual}")]
    RankGap { expected: u32, actual: u32 },

    #[error(
        "Player {above} with {above_points} points is ranked above player {below} with {below_points} points"
    )]
    RankOrder {
        above: PlayerNum,
        above_points: f64,
        below: PlayerNum,
        below_points: f64,
    },
}

/// Result type for validation
pub type ConsistencyResult<T> = Result<T, ConsistencyError>;

/// Any error the tournament aggregate can produce
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("time_control", "blitz", "must contain a number");
        let msg = err.to_string();
        assert!(msg.contains("time_control"));
        assert!(msg.contains("\"blitz\""));
        assert!(msg.contains("must contain a number"));
    }

    #[test]
    fn test_structural_error_wraps_transparently() {
        let err: TournamentError = StructuralError::RoundOutOfRange { round: 6, rounds: 5 }.into();
        assert_eq!(
            err.to_string(),
            "Round 6 is out of range: the tournament has 5 rounds"
        );
        assert!(matches!(
            err,
            TournamentError::Structural(StructuralError::RoundOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rank_order_message_mentions_points() {
        let err = ConsistencyError::RankOrder {
            above: 2,
            above_points: 1.5,
            below: 1,
            below_points: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "Player 2 with 1.5 points is ranked above player 1 with 2 points"
        );
    }
}
