/// Property-based tests for result mirroring and reranking using proptest
///
/// Random round-robin style tournaments are generated and the invariants
/// that must hold for any set of results are checked.
use chess_results::{
    Colour, GameResult, Player, Score, TieBreak, Tournament, TournamentOptions, ValidateOptions,
};
use proptest::prelude::*;

const NAMES: &[&str] = &["Orr", "Brady", "Quinn"];

fn score_strategy() -> impl Strategy<Value = Score> {
    prop_oneof![Just(Score::Win), Just(Score::Draw), Just(Score::Loss)]
}

fn colour_strategy() -> impl Strategy<Value = Option<Colour>> {
    prop_oneof![Just(None), Just(Some(Colour::White)), Just(Some(Colour::Black))]
}

// Strategy for a player count plus one game per pair of players.
// Pairs are played in successive rounds so no player meets two opponents
// in the same round.
fn games_strategy() -> impl Strategy<Value = (u32, Vec<(Score, Option<Colour>, bool)>)> {
    (2u32..=7).prop_flat_map(|players| {
        let pairs = (players * (players - 1) / 2) as usize;
        (
            Just(players),
            prop::collection::vec(
                (score_strategy(), colour_strategy(), any::<bool>()),
                pairs,
            ),
        )
    })
}

fn build(players: u32, games: &[(Score, Option<Colour>, bool)]) -> Tournament {
    let mut t = Tournament::new("Property Open", "2012-01-01", TournamentOptions::default())
        .expect("valid tournament");
    for num in 1..=players {
        // Repeat surnames so that name ties actually happen.
        let last = NAMES[num as usize % NAMES.len()];
        t.add_player(Player::new("Test", last, num).expect("valid player"))
            .expect("unique number");
    }

    let pairs = (1..=players).flat_map(|a| ((a + 1)..=players).map(move |b| (a, b)));
    for (round, ((a, b), &(score, colour, rateable))) in (1u32..).zip(pairs.zip(games)) {
        let mut result = GameResult::new(round, a, score)
            .expect("valid result")
            .against(b)
            .expect("distinct players")
            .with_rateable(rateable);
        if let Some(colour) = colour {
            result = result.with_colour(colour);
        }
        t.add_result(result).expect("known players");
    }
    t
}

proptest! {
    #[test]
    fn test_every_result_has_exact_mirror((players, games) in games_strategy()) {
        let t = build(players, &games);

        for player in t.players() {
            for result in player.results() {
                let opponent = t.player(result.opponent().unwrap()).unwrap();
                let mirror = opponent.find_result(result.round());
                prop_assert!(mirror.is_some(), "missing mirror for {}", result);
                let mirror = mirror.unwrap();
                prop_assert_eq!(mirror.opponent(), Some(player.num()));
                prop_assert_eq!(mirror.score(), result.score().reverse());
                prop_assert_eq!(mirror.colour(), result.colour().map(Colour::reverse));
                prop_assert_eq!(mirror.rateable(), result.rateable());
            }
        }
    }

    #[test]
    fn test_points_sum_to_games_played((players, games) in games_strategy()) {
        let t = build(players, &games);
        let total: f64 = t.players().map(Player::points).sum();
        prop_assert_eq!(total, games.len() as f64);
    }

    #[test]
    fn test_rerank_gives_dense_ordered_ranks((players, games) in games_strategy()) {
        let mut t = build(players, &games);
        t.rerank();

        let mut ranks: Vec<u32> = t.players().filter_map(Player::rank).collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=players).collect();
        prop_assert_eq!(ranks, expected);

        let standings = t.standings();
        for pair in standings.windows(2) {
            prop_assert!(pair[0].points() >= pair[1].points());
        }
        prop_assert!(t.check_ranks().is_ok());
    }

    #[test]
    fn test_rerank_by_tie_breaks_is_consistent((players, games) in games_strategy()) {
        let mut t = build(players, &games);
        t.rerank_by(&[TieBreak::Buchholz, TieBreak::SonnebornBerger, TieBreak::Wins]);
        prop_assert!(t.check_ranks().is_ok());
    }

    #[test]
    fn test_rerank_is_deterministic((players, games) in games_strategy()) {
        let mut first = build(players, &games);
        let mut second = first.clone();
        first.rerank();
        second.rerank();
        second.rerank();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_generated_tournaments_validate((players, games) in games_strategy()) {
        let mut t = build(players, &games);
        let opts = ValidateOptions::new().rerank(true).rank(true);
        prop_assert_eq!(t.validate(opts), Ok(()));
        prop_assert_eq!(t.rounds(), Some(games.len() as u32));
    }
}
