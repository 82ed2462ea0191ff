//! Players and their game results.

pub mod player;
pub mod result;

pub use player::{Gender, Player, Title};
pub use result::{Colour, GameResult, Score};

/// Tournament-local player number
pub type PlayerNum = u32;
