//! Checks a tournament snapshot and prints its standings.
//!
//! The snapshot is loaded into a tournament, validated, and the final
//! standings are printed with any requested tie-break columns.

mod config;
mod snapshot;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Error};
use chess_results::{PlayerNum, TieBreak, Tournament};
use log::info;
use pico_args::Arguments;

use config::{CheckConfig, Overrides};
use snapshot::Snapshot;

const HELP: &str = "\
Validate a chess tournament snapshot and print its standings

USAGE:
  cr_check [OPTIONS] <SNAPSHOT.json>

OPTIONS:
  --tie-breaks LIST        Comma-separated tie-breaks used when ranking  [default: env CR_CHECK_TIE_BREAKS]
                           (buchholz, harkness, sonneborn-berger, progressive, wins, blacks, name)

FLAGS:
  --rank                   Fail unless player ranks are consistent with points
  --rerank                 Recompute ranks when they are missing or inconsistent
  -h, --help               Print help information

ENVIRONMENT:
  CR_CHECK_SNAPSHOT        Snapshot path used when none is given
  CR_CHECK_RANK            Same as --rank when true
  CR_CHECK_RERANK          Same as --rerank when true
  CR_CHECK_TIE_BREAKS      Same as --tie-breaks
  RUST_LOG                 Log filter (e.g., debug)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        rank: pargs.contains("--rank"),
        rerank: pargs.contains("--rerank"),
        tie_breaks: pargs.opt_value_from_str("--tie-breaks")?,
        snapshot: pargs.opt_free_from_str::<PathBuf>()?,
    };

    env_logger::builder().format_target(false).init();

    let leftover = pargs.finish();
    if !leftover.is_empty() {
        log::warn!("Ignoring unused arguments: {leftover:?}");
    }

    let config = CheckConfig::from_env(overrides)?;
    info!("Checking {}", config.snapshot.display());

    let mut tournament = Snapshot::load(&config.snapshot)
        .and_then(Snapshot::build)
        .with_context(|| format!("Failed to load {}", config.snapshot.display()))?;

    if !config.tie_breaks.is_empty() && config.validate.rerank {
        tournament.rerank_by(&config.tie_breaks);
    }

    tournament
        .validate(config.validate)
        .with_context(|| format!("'{}' is invalid", tournament.name()))?;

    print_standings(&tournament, &config.tie_breaks);
    Ok(())
}

fn print_standings(tournament: &Tournament, tie_breaks: &[TieBreak]) {
    let points: HashMap<PlayerNum, f64> = tournament
        .players()
        .map(|p| (p.num(), p.points()))
        .collect();

    println!("{}", tournament.name());
    if let Some(rounds) = tournament.rounds() {
        println!("{} players, {} rounds", tournament.num_players(), rounds);
    }
    println!();

    let mut header = format!("{:>4} {:>4}  {:<32} {:<4} {:>5}", "Rank", "No", "Name", "Fed", "Pts");
    for tie_break in tie_breaks {
        header.push_str(&format!(" {:>8}", tie_break.to_string()));
    }
    println!("{header}");

    for player in tournament.standings() {
        let rank = player.rank().map(|r| r.to_string()).unwrap_or_default();
        let mut line = format!(
            "{:>4} {:>4}  {:<32} {:<4} {:>5}",
            rank,
            player.num(),
            player.name(),
            player.fed().unwrap_or(""),
            player.points()
        );
        for &tie_break in tie_breaks {
            if tie_break != TieBreak::Name {
                line.push_str(&format!(" {:>8}", tie_break.value(player, &points)));
            } else {
                line.push_str(&format!(" {:>8}", ""));
            }
        }
        println!("{line}");
    }
}
