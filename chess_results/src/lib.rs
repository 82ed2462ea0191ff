//! # Chess Results
//!
//! An in-memory model of chess tournament results that keeps itself
//! consistent. File-format readers and writers fill a [`Tournament`] in and
//! read it back out; this crate owns the rules in between.
//!
//! ## Core Modules
//!
//! - [`entities`]: players and their per-round results
//! - [`tournament`]: the aggregate, its setters, ranking and validation
//! - [`errors`]: field, structural and consistency errors
//! - [`federation`] and [`dates`]: lookups used by the field setters

pub mod dates;
pub mod entities;
pub mod errors;
pub mod federation;
pub mod tournament;

pub use entities::{Colour, GameResult, Gender, Player, PlayerNum, Score, Title};
pub use errors::{
    ConsistencyError, ConsistencyResult, FieldError, FieldResult, StructuralError,
    TournamentError, TournamentResult,
};
pub use federation::{Federation, FederationLookup, Federations};
pub use tournament::{RoundsValue, TieBreak, Tournament, TournamentOptions, ValidateOptions};
