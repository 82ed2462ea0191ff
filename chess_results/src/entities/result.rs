//! A single player's outcome in a single round.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::PlayerNum;
use crate::errors::{FieldError, FieldResult};

/// Outcome of a game from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Win,
    Draw,
    Loss,
}

impl Score {
    /// Points earned: 1 for a win, 0.5 for a draw, 0 for a loss
    pub fn points(self) -> f64 {
        match self {
            Score::Win => 1.0,
            Score::Draw => 0.5,
            Score::Loss => 0.0,
        }
    }

    /// The same game seen from the other side of the board
    pub fn reverse(self) -> Self {
        match self {
            Score::Win => Score::Loss,
            Score::Draw => Score::Draw,
            Score::Loss => Score::Win,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Win => write!(f, "1"),
            Score::Draw => write!(f, "="),
            Score::Loss => write!(f, "0"),
        }
    }
}

impl FromStr for Score {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1" | "1.0" | "W" | "+" => Ok(Score::Win),
            "=" | "½" | "0.5" | ".5" | "D" => Ok(Score::Draw),
            "0" | "0.0" | "L" | "-" => Ok(Score::Loss),
            _ => Err(FieldError::new("score", s, "expected a win, draw or loss")),
        }
    }
}

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub fn reverse(self) -> Self {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::White => write!(f, "W"),
            Colour::Black => write!(f, "B"),
        }
    }
}

impl FromStr for Colour {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Colour::White),
            "b" | "black" => Ok(Colour::Black),
            _ => Err(FieldError::new("colour", s, "expected white or black")),
        }
    }
}

/// One player's result in one round.
///
/// Everything except the `rateable` flag is fixed at construction. Players
/// are referred to by number; the tournament resolves numbers to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    round: u32,
    player: PlayerNum,
    score: Score,
    opponent: Option<PlayerNum>,
    colour: Option<Colour>,
    rateable: bool,
}

impl GameResult {
    /// Create a result with no opponent (a bye until [`GameResult::against`] is used)
    pub fn new(round: u32, player: PlayerNum, score: Score) -> FieldResult<Self> {
        if round == 0 {
            return Err(FieldError::new("round", "0", "must be a positive integer"));
        }
        if player == 0 {
            return Err(FieldError::new("player", "0", "must be a positive integer"));
        }

        Ok(Self {
            round,
            player,
            score,
            opponent: None,
            colour: None,
            rateable: true,
        })
    }

    /// Name the opponent of this game
    pub fn against(mut self, opponent: PlayerNum) -> FieldResult<Self> {
        if opponent == 0 {
            return Err(FieldError::new(
                "opponent",
                "0",
                "must be a positive integer",
            ));
        }
        if opponent == self.player {
            return Err(FieldError::new(
                "opponent",
                opponent.to_string(),
                "a player cannot be their own opponent",
            ));
        }
        self.opponent = Some(opponent);
        Ok(self)
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_rateable(mut self, rateable: bool) -> Self {
        self.rateable = rateable;
        self
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> PlayerNum {
        self.player
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn opponent(&self) -> Option<PlayerNum> {
        self.opponent
    }

    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    pub fn rateable(&self) -> bool {
        self.rateable
    }

    pub fn set_rateable(&mut self, rateable: bool) {
        self.rateable = rateable;
    }

    pub fn points(&self) -> f64 {
        self.score.points()
    }

    /// True for byes and other games without an opponent
    pub fn is_bye(&self) -> bool {
        self.opponent.is_none()
    }

    /// The mirror result from the opponent's point of view.
    ///
    /// Returns `None` when there is no opponent.
    pub fn reverse(&self) -> Option<GameResult> {
        let opponent = self.opponent?;
        Some(GameResult {
            round: self.round,
            player: opponent,
            score: self.score.reverse(),
            opponent: Some(self.player),
            colour: self.colour.map(Colour::reverse),
            rateable: self.rateable,
        })
    }

    /// Whether both results describe the same game, ignoring `rateable`
    pub fn same_game(&self, other: &GameResult) -> bool {
        self.round == other.round
            && self.player == other.player
            && self.score == other.score
            && self.opponent == other.opponent
            && self.colour == other.colour
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{} {}: {}", self.round, self.player, self.score)?;
        match self.opponent {
            Some(opponent) => write!(f, " v {opponent}")?,
            None => write!(f, " (bye)")?,
        }
        if let Some(colour) = self.colour {
            write!(f, " {colour}")?;
        }
        Ok(())
    }
}
