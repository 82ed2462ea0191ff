//! Whole-tournament consistency checks.

use super::{Tournament, ValidateOptions};
use crate::errors::{ConsistencyError, ConsistencyResult};

impl Tournament {
    /// Check the tournament is complete and consistent.
    ///
    /// Stops at the first problem found. When the number of rounds was never
    /// declared it is set to the last round played. With `rerank`, bad ranks
    /// are repaired by [`Tournament::rerank`] instead of being reported; with
    /// `rank`, they are reported.
    pub fn validate(&mut self, options: ValidateOptions) -> ConsistencyResult<()> {
        if options.rerank {
            if let Err(e) = self.check_ranks() {
                log::info!("Reranking '{}': {}", self.name(), e);
                self.rerank();
            }
        }

        self.check_players()?;
        self.check_dates()?;
        self.check_rounds()?;

        if options.rank {
            self.check_ranks()?;
        }

        Ok(())
    }

    /// Like [`Tournament::validate`], but returns the problem as text
    pub fn invalid(&mut self, options: ValidateOptions) -> Option<String> {
        self.validate(options).err().map(|e| e.to_string())
    }

    fn check_players(&self) -> ConsistencyResult<()> {
        if self.players.len() < 2 {
            return Err(ConsistencyError::TooFewPlayers(self.players.len()));
        }
        match self.players.values().find(|p| p.results().is_empty()) {
            Some(player) => Err(ConsistencyError::NoResults(player.num())),
            None => Ok(()),
        }
    }

    fn check_dates(&self) -> ConsistencyResult<()> {
        match self.finish() {
            Some(finish) if self.start() > finish => Err(ConsistencyError::DatesOutOfOrder {
                start: self.start(),
                finish,
            }),
            _ => Ok(()),
        }
    }

    fn check_rounds(&mut self) -> ConsistencyResult<()> {
        let rounds = self.round_numbers();
        let Some(&last) = rounds.last() else {
            return Ok(());
        };

        if let Some(missing) = (1..=last).find(|round| !rounds.contains(round)) {
            return Err(ConsistencyError::MissingRound(missing));
        }

        match self.rounds() {
            Some(declared) if declared != last => Err(ConsistencyError::RoundCountMismatch {
                declared,
                actual: last,
            }),
            Some(_) => Ok(()),
            None => {
                log::debug!("Setting rounds of '{}' to {}", self.name(), last);
                self.infer_rounds(last);
                Ok(())
            }
        }
    }
}
