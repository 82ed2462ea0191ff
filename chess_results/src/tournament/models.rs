//! The tournament aggregate and its metadata setters.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::{collections::BTreeMap, sync::LazyLock};

use super::options::{RoundsValue, TournamentOptions};
use crate::{
    dates::{DateParser, FlexibleDateParser},
    entities::{Player, PlayerNum, player},
    errors::{FieldError, FieldResult},
    federation::{FederationLookup, Federations},
};

static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").expect("scheme pattern is valid")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[a-z][a-z0-9+.\-]*://[\w\-]+(\.[\w\-]+)+(:\d+)?(/\S*)?$")
        .expect("URL pattern is valid")
});

static TIME_CONTROL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,}").expect("time control pattern is valid"));

/// A chess tournament: metadata plus the players and their results.
///
/// Players are stored by number; results refer to other players by number
/// too, so every cross-player operation goes through the tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    name: String,
    start: NaiveDate,
    finish: Option<NaiveDate>,
    rounds: Option<u32>,
    site: Option<String>,
    city: Option<String>,
    fed: Option<String>,
    event_type: Option<String>,
    arbiter: Option<String>,
    deputy: Option<String>,
    time_control: Option<String>,
    pub(super) players: BTreeMap<PlayerNum, Player>,
}

impl Tournament {
    /// Create a tournament, applying each of the options through its setter
    pub fn new(name: &str, start: &str, options: TournamentOptions) -> FieldResult<Self> {
        let mut tournament = Self {
            name: clean_name(name)?,
            start: parse_start(start, &FlexibleDateParser)?,
            finish: None,
            rounds: None,
            site: None,
            city: None,
            fed: None,
            event_type: None,
            arbiter: None,
            deputy: None,
            time_control: None,
            players: BTreeMap::new(),
        };

        let TournamentOptions {
            finish,
            rounds,
            site,
            city,
            fed,
            event_type,
            arbiter,
            deputy,
            time_control,
        } = options;

        if let Some(finish) = finish {
            tournament.set_finish(&finish)?;
        }
        if let Some(rounds) = rounds {
            tournament.set_rounds(rounds)?;
        }
        if let Some(site) = site {
            tournament.set_site(&site)?;
        }
        if let Some(city) = city {
            tournament.set_city(&city)?;
        }
        if let Some(fed) = fed {
            tournament.set_fed(&fed)?;
        }
        if let Some(event_type) = event_type {
            tournament.set_event_type(&event_type)?;
        }
        if let Some(arbiter) = arbiter {
            tournament.set_arbiter(&arbiter)?;
        }
        if let Some(deputy) = deputy {
            tournament.set_deputy(&deputy)?;
        }
        if let Some(time_control) = time_control {
            tournament.set_time_control(&time_control)?;
        }

        Ok(tournament)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn finish(&self) -> Option<NaiveDate> {
        self.finish
    }

    pub fn rounds(&self) -> Option<u32> {
        self.rounds
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn fed(&self) -> Option<&str> {
        self.fed.as_deref()
    }

    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    pub fn arbiter(&self) -> Option<&str> {
        self.arbiter.as_deref()
    }

    pub fn deputy(&self) -> Option<&str> {
        self.deputy.as_deref()
    }

    pub fn time_control(&self) -> Option<&str> {
        self.time_control.as_deref()
    }

    pub fn set_name(&mut self, name: &str) -> FieldResult<()> {
        self.name = clean_name(name)?;
        Ok(())
    }

    pub fn set_start(&mut self, start: &str) -> FieldResult<()> {
        self.set_start_with(start, &FlexibleDateParser)
    }

    pub fn set_start_with(&mut self, start: &str, parser: &dyn DateParser) -> FieldResult<()> {
        self.start = parse_start(start, parser)?;
        Ok(())
    }

    pub fn set_finish(&mut self, finish: &str) -> FieldResult<()> {
        self.set_finish_with(finish, &FlexibleDateParser)
    }

    pub fn set_finish_with(&mut self, finish: &str, parser: &dyn DateParser) -> FieldResult<()> {
        self.finish = player::parse_optional_date("finish", finish, parser)?;
        Ok(())
    }

    /// Set the declared number of rounds from a number or numeric text
    pub fn set_rounds(&mut self, rounds: impl Into<RoundsValue>) -> FieldResult<()> {
        self.rounds = normalize_rounds(rounds.into())?;
        Ok(())
    }

    pub(super) fn infer_rounds(&mut self, rounds: u32) {
        self.rounds = Some(rounds);
    }

    /// Set the web site; `http://` is assumed when no scheme is given
    pub fn set_site(&mut self, site: &str) -> FieldResult<()> {
        self.site = normalize_site(site)?;
        Ok(())
    }

    pub fn set_city(&mut self, city: &str) -> FieldResult<()> {
        self.city = optional_text("city", city)?;
        Ok(())
    }

    pub fn set_fed(&mut self, fed: &str) -> FieldResult<()> {
        self.set_fed_with(fed, &Federations)
    }

    pub fn set_fed_with(&mut self, fed: &str, lookup: &dyn FederationLookup) -> FieldResult<()> {
        self.fed = player::resolve_fed(fed, lookup)?;
        Ok(())
    }

    pub fn set_event_type(&mut self, event_type: &str) -> FieldResult<()> {
        self.event_type = optional_text("type", event_type)?;
        Ok(())
    }

    pub fn set_arbiter(&mut self, arbiter: &str) -> FieldResult<()> {
        self.arbiter = optional_text("arbiter", arbiter)?;
        Ok(())
    }

    pub fn set_deputy(&mut self, deputy: &str) -> FieldResult<()> {
        self.deputy = optional_text("deputy", deputy)?;
        Ok(())
    }

    pub fn set_time_control(&mut self, time_control: &str) -> FieldResult<()> {
        let time_control = time_control.trim();
        self.time_control = match time_control {
            "" => None,
            tc if TIME_CONTROL_NUMBER.is_match(tc) => Some(tc.to_string()),
            tc => {
                return Err(FieldError::new(
                    "time_control",
                    tc,
                    "must contain a number of at least two digits",
                ));
            }
        };
        Ok(())
    }
}

fn has_letter(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

fn clean_name(name: &str) -> FieldResult<String> {
    let name = name.trim();
    if !has_letter(name) {
        return Err(FieldError::new("name", name, "must contain at least one letter"));
    }
    Ok(name.to_string())
}

fn parse_start(start: &str, parser: &dyn DateParser) -> FieldResult<NaiveDate> {
    if start.trim().is_empty() {
        return Err(FieldError::new("start", start, "a start date is required"));
    }
    parser
        .parse(start)
        .ok_or_else(|| FieldError::new("start", start, "not a valid date"))
}

fn optional_text(field: &'static str, text: &str) -> FieldResult<Option<String>> {
    match text.trim() {
        "" => Ok(None),
        t if has_letter(t) => Ok(Some(t.to_string())),
        t => Err(FieldError::new(field, t, "must contain at least one letter")),
    }
}

pub(crate) fn normalize_rounds(rounds: RoundsValue) -> FieldResult<Option<u32>> {
    let number = match rounds {
        RoundsValue::Number(n) => n,
        RoundsValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| FieldError::new("rounds", trimmed, "not a whole number"))?
        }
    };

    match u32::try_from(number) {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(FieldError::new(
            "rounds",
            number.to_string(),
            "must be a positive integer",
        )),
    }
}

pub(crate) fn normalize_site(site: &str) -> FieldResult<Option<String>> {
    let site = site.trim();
    if site.is_empty() {
        return Ok(None);
    }

    let url = if SCHEME.is_match(site) {
        site.to_string()
    } else {
        format!("http://{site}")
    };

    if !URL.is_match(&url) {
        return Err(FieldError::new("site", site, "not a valid URL"));
    }
    Ok(Some(url))
}
