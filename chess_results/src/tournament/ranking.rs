//! Rank assignment and rank-consistency checks.

use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashMap, fmt, str::FromStr};

use super::Tournament;
use crate::{
    entities::{Colour, Player, PlayerNum},
    errors::{ConsistencyError, ConsistencyResult, FieldError},
};

/// Secondary criteria for separating players on equal points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Sum of the opponents' points
    Buchholz,
    /// Buchholz without the best and worst opponent
    Harkness,
    /// Beaten opponents' points plus half of drawn opponents' points
    SonnebornBerger,
    /// Sum of the running score after each round
    Progressive,
    /// Games won over the board
    Wins,
    /// Games played with black
    Blacks,
    /// Alphabetical by last then first name
    Name,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TieBreak::Buchholz => "Buchholz",
            TieBreak::Harkness => "Harkness",
            TieBreak::SonnebornBerger => "Sonneborn-Berger",
            TieBreak::Progressive => "Progressive",
            TieBreak::Wins => "Wins",
            TieBreak::Blacks => "Blacks",
            TieBreak::Name => "Name",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TieBreak {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "buchholz" | "bh" => Ok(TieBreak::Buchholz),
            "harkness" | "median" | "medianbuchholz" | "mb" => Ok(TieBreak::Harkness),
            "sonnebornberger" | "sb" | "neustadtl" => Ok(TieBreak::SonnebornBerger),
            "progressive" | "cumulative" | "sumofprogressivescores" => Ok(TieBreak::Progressive),
            "wins" | "win" => Ok(TieBreak::Wins),
            "blacks" | "black" => Ok(TieBreak::Blacks),
            "name" | "alphabetical" => Ok(TieBreak::Name),
            _ => Err(FieldError::new("tie_break", s, "unknown tie-break method")),
        }
    }
}

impl TieBreak {
    /// Numeric tie-break value for one player, higher is better.
    ///
    /// `Name` has no numeric value and always yields 0.
    pub fn value(self, player: &Player, points: &HashMap<PlayerNum, f64>) -> f64 {
        let opponent_points = || {
            player
                .results()
                .iter()
                .filter_map(|r| r.opponent())
                .map(|opp| points.get(&opp).copied().unwrap_or_default())
        };

        match self {
            TieBreak::Buchholz => opponent_points().sum(),
            TieBreak::Harkness => {
                let mut scores: Vec<f64> = opponent_points().collect();
                if scores.len() > 2 {
                    scores.sort_by(f64::total_cmp);
                    scores[1..scores.len() - 1].iter().sum()
                } else {
                    scores.iter().sum()
                }
            }
            TieBreak::SonnebornBerger => player
                .results()
                .iter()
                .filter_map(|r| {
                    let opp = points.get(&r.opponent()?).copied().unwrap_or_default();
                    Some(r.score().points() * opp)
                })
                .sum(),
            TieBreak::Progressive => player
                .results()
                .iter()
                .scan(0.0, |running, r| {
                    *running += r.points();
                    Some(*running)
                })
                .sum(),
            TieBreak::Wins => player.wins() as f64,
            TieBreak::Blacks => player
                .results()
                .iter()
                .filter(|r| r.colour() == Some(Colour::Black) && !r.is_bye())
                .count() as f64,
            TieBreak::Name => 0.0,
        }
    }
}

fn by_name(a: &Player, b: &Player) -> Ordering {
    a.last_name()
        .cmp(b.last_name())
        .then_with(|| a.first_name().cmp(b.first_name()))
}

impl Tournament {
    /// Rank players by points, then last name, then first name.
    ///
    /// Any existing ranks are overwritten with 1..N.
    pub fn rerank(&mut self) {
        self.rerank_by(&[]);
    }

    /// Rank players by points, then by each tie-break in turn, then by name.
    ///
    /// Players level on everything are ordered by player number.
    pub fn rerank_by(&mut self, tie_breaks: &[TieBreak]) {
        let points: HashMap<PlayerNum, f64> = self
            .players
            .values()
            .map(|p| (p.num(), p.points()))
            .collect();

        let keys: HashMap<PlayerNum, Vec<f64>> = self
            .players
            .values()
            .map(|p| {
                let values = tie_breaks.iter().map(|tb| tb.value(p, &points)).collect();
                (p.num(), values)
            })
            .collect();

        let mut order: Vec<&Player> = self.players.values().collect();
        order.sort_by(|a, b| {
            let mut ordering = points[&b.num()].total_cmp(&points[&a.num()]);
            for (i, tie_break) in tie_breaks.iter().enumerate() {
                ordering = ordering.then_with(|| match tie_break {
                    TieBreak::Name => by_name(a, b),
                    _ => keys[&b.num()][i].total_cmp(&keys[&a.num()][i]),
                });
            }
            ordering
                .then_with(|| by_name(a, b))
                .then_with(|| a.num().cmp(&b.num()))
        });

        let order: Vec<PlayerNum> = order.into_iter().map(Player::num).collect();
        for (rank, num) in (1..).zip(order) {
            if let Some(player) = self.players.get_mut(&num) {
                player.assign_rank(rank);
            }
        }

        log::debug!(
            "Reranked {} players in '{}' using {:?}",
            self.players.len(),
            self.name(),
            tie_breaks
        );
    }

    /// Check that ranks are unique, complete, start at 1, have no gaps and
    /// never put a player above someone with more points.
    pub fn check_ranks(&self) -> ConsistencyResult<()> {
        let mut by_rank: HashMap<u32, PlayerNum> = HashMap::new();
        for player in self.players.values() {
            if let Some(rank) = player.rank() {
                if let Some(&first) = by_rank.get(&rank) {
                    return Err(ConsistencyError::DuplicateRank {
                        rank,
                        first,
                        second: player.num(),
                    });
                }
                by_rank.insert(rank, player.num());
            }
        }

        if let Some(unranked) = self.players.values().find(|p| p.rank().is_none()) {
            return Err(ConsistencyError::MissingRank(unranked.num()));
        }

        let ranked = self.standings();
        let (Some(best), Some(worst)) = (ranked.first(), ranked.last()) else {
            return Ok(());
        };

        let best_rank = best.rank().unwrap_or_default();
        if best_rank != 1 {
            return Err(ConsistencyError::BestRankNotOne(best_rank));
        }

        let worst_rank = worst.rank().unwrap_or_default();
        let expected = ranked.len() as u32;
        if worst_rank != expected {
            return Err(ConsistencyError::RankGap {
                expected,
                actual: worst_rank,
            });
        }

        for pair in ranked.windows(2) {
            let (above, below) = (pair[0], pair[1]);
            if above.points() < below.points() {
                return Err(ConsistencyError::RankOrder {
                    above: above.num(),
                    above_points: above.points(),
                    below: below.num(),
                    below_points: below.points(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{GameResult, Score},
        tournament::TournamentOptions,
    };

    fn game(round: u32, player: PlayerNum, score: Score, opponent: PlayerNum) -> GameResult {
        GameResult::new(round, player, score)
            .unwrap()
            .against(opponent)
            .unwrap()
    }

    /// Four players, three rounds:
    /// Orr 2.5, Brady 1.5, Cafolla 1.5, Quinn 0.5
    fn tournament() -> Tournament {
        let mut t =
            Tournament::new("Kilkenny Congress", "2008-11-28", TournamentOptions::default())
                .unwrap();
        for (num, first, last) in [
            (1, "Mark", "Orr"),
            (2, "Bill", "Brady"),
            (3, "Peter", "Cafolla"),
            (4, "Mark", "Quinn"),
        ] {
            t.add_player(Player::new(first, last, num).unwrap()).unwrap();
        }
        for (round, player, score, opponent) in [
            (1, 1, Score::Win, 4),
            (1, 2, Score::Draw, 3),
            (2, 2, Score::Draw, 1),
            (2, 3, Score::Win, 4),
            (3, 1, Score::Win, 3),
            (3, 4, Score::Draw, 2),
        ] {
            t.add_result(game(round, player, score, opponent).with_colour(Colour::White))
                .unwrap();
        }
        t
    }

    fn ranks(t: &Tournament) -> Vec<(PlayerNum, u32)> {
        t.players()
            .map(|p| (p.num(), p.rank().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_tie_break_parsing() {
        assert_eq!("BH".parse::<TieBreak>().unwrap(), TieBreak::Buchholz);
        assert_eq!(
            "Sonneborn-Berger".parse::<TieBreak>().unwrap(),
            TieBreak::SonnebornBerger
        );
        assert_eq!("median".parse::<TieBreak>().unwrap(), TieBreak::Harkness);
        assert!("coin toss".parse::<TieBreak>().is_err());
    }

    #[test]
    fn test_rerank_uses_points_then_name() {
        let mut t = tournament();
        t.rerank();
        // Brady and Cafolla share 1.5 points; Brady sorts first by name.
        assert_eq!(ranks(&t), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(t.check_ranks().is_ok());
    }

    #[test]
    fn test_rerank_overwrites_existing_ranks() {
        let mut t = tournament();
        t.player_mut(4).unwrap().set_rank(Some(1)).unwrap();
        t.player_mut(1).unwrap().set_rank(Some(7)).unwrap();
        t.rerank();
        assert_eq!(t.player(1).unwrap().rank(), Some(1));
        assert_eq!(t.player(4).unwrap().rank(), Some(4));
    }

    #[test]
    fn test_rerank_with_identical_names_uses_number() {
        let mut t = Tournament::new("Twins", "2008-01-01", TournamentOptions::default()).unwrap();
        t.add_player(Player::new("Sam", "Smith", 2).unwrap()).unwrap();
        t.add_player(Player::new("Sam", "Smith", 1).unwrap()).unwrap();
        t.add_result(game(1, 1, Score::Draw, 2)).unwrap();
        t.rerank();
        assert_eq!(ranks(&t), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_tie_break_values() {
        let t = tournament();
        let points: HashMap<_, _> = t.players().map(|p| (p.num(), p.points())).collect();
        let brady = t.player(2).unwrap();
        let cafolla = t.player(3).unwrap();

        // Brady drew with Cafolla (1.5), Orr (2.5) and Quinn (0.5)
        assert_eq!(TieBreak::Buchholz.value(brady, &points), 4.5);
        assert_eq!(TieBreak::Harkness.value(brady, &points), 1.5);
        assert_eq!(TieBreak::SonnebornBerger.value(brady, &points), 2.25);
        assert_eq!(TieBreak::Progressive.value(brady, &points), 3.0);
        assert_eq!(TieBreak::Wins.value(brady, &points), 0.0);
        assert_eq!(TieBreak::Blacks.value(brady, &points), 1.0);

        // Cafolla drew with Brady, beat Quinn and lost to Orr
        assert_eq!(TieBreak::Buchholz.value(cafolla, &points), 4.5);
        assert_eq!(TieBreak::SonnebornBerger.value(cafolla, &points), 1.25);
        assert_eq!(TieBreak::Progressive.value(cafolla, &points), 3.5);
        assert_eq!(TieBreak::Wins.value(cafolla, &points), 1.0);
        assert_eq!(TieBreak::Blacks.value(cafolla, &points), 2.0);
        assert_eq!(TieBreak::Name.value(cafolla, &points), 0.0);
    }

    #[test]
    fn test_rerank_by_tie_breaks() {
        let mut t = tournament();
        t.rerank_by(&[TieBreak::Buchholz, TieBreak::SonnebornBerger]);
        assert_eq!(ranks(&t), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);

        t.rerank_by(&[TieBreak::Progressive]);
        assert_eq!(ranks(&t), vec![(1, 1), (2, 3), (3, 2), (4, 4)]);

        t.rerank_by(&[TieBreak::Buchholz, TieBreak::Wins]);
        assert_eq!(t.player(3).unwrap().rank(), Some(2));

        t.rerank_by(&[TieBreak::Name]);
        assert_eq!(t.player(2).unwrap().rank(), Some(2));

        t.player_mut(3).unwrap().set_last_name("Aaronson").unwrap();
        t.rerank();
        assert_eq!(t.player(3).unwrap().rank(), Some(2));
        assert_eq!(t.player(2).unwrap().rank(), Some(3));
    }

    #[test]
    fn test_check_ranks_duplicate() {
        let mut t = tournament();
        t.rerank();
        t.player_mut(2).unwrap().set_rank(Some(1)).unwrap();
        assert!(matches!(
            t.check_ranks(),
            Err(ConsistencyError::DuplicateRank { rank: 1, .. })
        ));
    }

    #[test]
    fn test_check_ranks_missing() {
        let mut t = tournament();
        t.rerank();
        t.player_mut(3).unwrap().set_rank(None).unwrap();
        assert_eq!(t.check_ranks(), Err(ConsistencyError::MissingRank(3)));
    }

    #[test]
    fn test_check_ranks_best_not_one() {
        let mut t = tournament();
        for num in 1..=4 {
            t.player_mut(num).unwrap().set_rank(Some(num + 1)).unwrap();
        }
        assert_eq!(t.check_ranks(), Err(ConsistencyError::BestRankNotOne(2)));
    }

    #[test]
    fn test_check_ranks_gap() {
        let mut t = tournament();
        t.rerank();
        t.player_mut(4).unwrap().set_rank(Some(6)).unwrap();
        assert_eq!(
            t.check_ranks(),
            Err(ConsistencyError::RankGap {
                expected: 4,
                actual: 6
            })
        );
    }

    #[test]
    fn test_check_ranks_order() {
        let mut t = tournament();
        t.rerank();
        t.player_mut(1).unwrap().set_rank(Some(4)).unwrap();
        t.player_mut(4).unwrap().set_rank(Some(1)).unwrap();
        assert!(matches!(
            t.check_ranks(),
            Err(ConsistencyError::RankOrder { above: 4, below: 2, .. })
        ));
    }
}
