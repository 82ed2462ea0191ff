//! The tournament aggregate.
//!
//! A [`Tournament`] owns its players by number and keeps their results
//! consistent:
//! - metadata setters validate and normalize each field as it is set
//! - [`Tournament::add_result`] inserts the opponent's mirror result
//! - [`Tournament::rerank`] derives ranks from points and names
//! - [`Tournament::validate`] checks players, dates, rounds and ranks
//!
//! ## Example
//!
//! ```
//! use chess_results::{GameResult, Player, Score, Tournament, TournamentOptions, ValidateOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut t = Tournament::new("Reykjavik", "1972-07-11", TournamentOptions::default())?;
//! t.add_player(Player::new("Robert J.", "Fischer", 1)?)?;
//! t.add_player(Player::new("Boris V.", "Spassky", 2)?)?;
//! t.add_result(GameResult::new(1, 2, Score::Win)?.against(1)?)?;
//!
//! t.validate(ValidateOptions::default())?;
//! assert_eq!(t.rounds(), Some(1));
//! # Ok(())
//! # }
//! ```

mod models;
mod options;
mod ranking;
mod registry;
mod validation;

pub use models::Tournament;
pub use options::{RoundsValue, TournamentOptions, ValidateOptions};
pub use ranking::TieBreak;
