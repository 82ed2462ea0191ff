//! Adding players and results, and looking them up.

use std::collections::BTreeSet;

use super::Tournament;
use crate::{
    entities::{GameResult, Player, PlayerNum},
    errors::{StructuralError, TournamentResult},
};

impl Tournament {
    /// Add a player; the player number must not be taken yet
    pub fn add_player(&mut self, player: Player) -> TournamentResult<()> {
        let num = player.num();
        if self.players.contains_key(&num) {
            return Err(StructuralError::DuplicatePlayer(num).into());
        }
        self.players.insert(num, player);
        Ok(())
    }

    pub fn player(&self, num: PlayerNum) -> Option<&Player> {
        self.players.get(&num)
    }

    pub fn player_mut(&mut self, num: PlayerNum) -> Option<&mut Player> {
        self.players.get_mut(&num)
    }

    /// All players, ordered by player number
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// First player, by number, that [matches](Player::matches) the candidate
    pub fn find_player(&self, candidate: &Player) -> Option<&Player> {
        self.players.values().find(|p| p.matches(candidate))
    }

    /// Players ordered by rank, unranked players last by number
    pub fn standings(&self) -> Vec<&Player> {
        let mut players: Vec<_> = self.players.values().collect();
        players.sort_by_key(|p| (p.rank().is_none(), p.rank(), p.num()));
        players
    }

    /// Highest round number found in any result
    pub fn last_round(&self) -> Option<u32> {
        self.round_numbers().last().copied()
    }

    pub(super) fn round_numbers(&self) -> BTreeSet<u32> {
        self.players
            .values()
            .flat_map(|p| p.results().iter().map(GameResult::round))
            .collect()
    }

    /// Add a result and its mirror, with the mirror as rateable as the original
    pub fn add_result(&mut self, result: GameResult) -> TournamentResult<()> {
        self.add_result_with(result, true)
    }

    /// Add a result to its player and, when it has an opponent, the mirror
    /// result to the opponent.
    ///
    /// With `reverse_rateable` false the mirror is never rateable. A result
    /// that conflicts with either player's existing result for the round is
    /// rejected before anything is added. If the opponent turns out to be
    /// unknown the result already added to the player stays in place.
    pub fn add_result_with(
        &mut self,
        result: GameResult,
        reverse_rateable: bool,
    ) -> TournamentResult<()> {
        if let Some(rounds) = self.rounds() {
            if result.round() > rounds {
                return Err(StructuralError::RoundOutOfRange {
                    round: result.round(),
                    rounds,
                }
                .into());
            }
        }

        let (subject, round) = (result.player(), result.round());
        let mirror = result.reverse().map(|mut mirror| {
            if !reverse_rateable {
                mirror.set_rateable(false);
            }
            mirror
        });

        let player = self
            .players
            .get(&subject)
            .ok_or(StructuralError::UnknownPlayer(subject))?;
        player.accepts(&result)?;
        if let Some(mirror) = &mirror {
            if let Some(opponent) = self.players.get(&mirror.player()) {
                opponent.accepts(mirror)?;
            }
        }

        if let Some(player) = self.players.get_mut(&subject) {
            player.add_result(result)?;
        }

        if let Some(mirror) = mirror {
            let opponent = self.players.get_mut(&mirror.player()).ok_or(
                StructuralError::UnknownOpponent {
                    player: subject,
                    opponent: mirror.player(),
                    round,
                },
            )?;
            opponent.add_result(mirror)?;
        }

        Ok(())
    }
}
