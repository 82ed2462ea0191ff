//! Tournament participants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{GameResult, PlayerNum, Score};
use crate::{
    dates::{DateParser, FlexibleDateParser},
    errors::{FieldError, FieldResult, StructuralError},
    federation::{FederationLookup, Federations},
};

/// Chess titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    GM,
    IM,
    FM,
    CM,
    WGM,
    WIM,
    WFM,
    WCM,
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Title::GM => "GM",
            Title::IM => "IM",
            Title::FM => "FM",
            Title::CM => "CM",
            Title::WGM => "WGM",
            Title::WIM => "WIM",
            Title::WFM => "WFM",
            Title::WCM => "WCM",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Title {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GM" | "G" => Ok(Title::GM),
            "IM" | "I" => Ok(Title::IM),
            "FM" | "F" => Ok(Title::FM),
            "CM" | "C" => Ok(Title::CM),
            "WGM" | "WG" => Ok(Title::WGM),
            "WIM" | "WI" => Ok(Title::WIM),
            "WFM" | "WF" => Ok(Title::WFM),
            "WCM" | "WC" => Ok(Title::WCM),
            _ => Err(FieldError::new("title", s, "unknown title")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl FromStr for Gender {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "man" | "boy" => Ok(Gender::M),
            "f" | "female" | "w" | "woman" | "girl" => Ok(Gender::F),
            _ => Err(FieldError::new("gender", s, "expected M or F")),
        }
    }
}

/// A tournament participant and the results they have accumulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    num: PlayerNum,
    first_name: String,
    last_name: String,
    id: Option<u32>,
    fide_id: Option<u32>,
    fed: Option<String>,
    title: Option<Title>,
    rating: Option<u32>,
    fide_rating: Option<u32>,
    dob: Option<NaiveDate>,
    gender: Option<Gender>,
    rank: Option<u32>,
    results: Vec<GameResult>,
}

impl Player {
    /// Create a player with the given tournament number.
    ///
    /// Names are trimmed with internal runs of whitespace collapsed, and each
    /// must contain at least one letter.
    pub fn new(first_name: &str, last_name: &str, num: PlayerNum) -> FieldResult<Self> {
        if num == 0 {
            return Err(FieldError::new("num", "0", "must be a positive integer"));
        }

        Ok(Self {
            num,
            first_name: clean_name("first_name", first_name)?,
            last_name: clean_name("last_name", last_name)?,
            id: None,
            fide_id: None,
            fed: None,
            title: None,
            rating: None,
            fide_rating: None,
            dob: None,
            gender: None,
            rank: None,
            results: Vec::new(),
        })
    }

    pub fn num(&self) -> PlayerNum {
        self.num
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "Last, First"
    pub fn name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn fide_id(&self) -> Option<u32> {
        self.fide_id
    }

    pub fn fed(&self) -> Option<&str> {
        self.fed.as_deref()
    }

    pub fn title(&self) -> Option<Title> {
        self.title
    }

    pub fn rating(&self) -> Option<u32> {
        self.rating
    }

    pub fn fide_rating(&self) -> Option<u32> {
        self.fide_rating
    }

    pub fn dob(&self) -> Option<NaiveDate> {
        self.dob
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn set_first_name(&mut self, first_name: &str) -> FieldResult<()> {
        self.first_name = clean_name("first_name", first_name)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: &str) -> FieldResult<()> {
        self.last_name = clean_name("last_name", last_name)?;
        Ok(())
    }

    /// National rating-list id
    pub fn set_id(&mut self, id: Option<u32>) -> FieldResult<()> {
        self.id = positive("id", id)?;
        Ok(())
    }

    pub fn set_fide_id(&mut self, fide_id: Option<u32>) -> FieldResult<()> {
        self.fide_id = positive("fide_id", fide_id)?;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: Option<u32>) -> FieldResult<()> {
        self.rating = positive("rating", rating)?;
        Ok(())
    }

    pub fn set_fide_rating(&mut self, fide_rating: Option<u32>) -> FieldResult<()> {
        self.fide_rating = positive("fide_rating", fide_rating)?;
        Ok(())
    }

    /// Set the rank; ranks start at 1
    pub fn set_rank(&mut self, rank: Option<u32>) -> FieldResult<()> {
        self.rank = positive("rank", rank)?;
        Ok(())
    }

    pub(crate) fn assign_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }

    pub fn set_fed(&mut self, fed: &str) -> FieldResult<()> {
        self.set_fed_with(fed, &Federations)
    }

    pub fn set_fed_with(&mut self, fed: &str, lookup: &dyn FederationLookup) -> FieldResult<()> {
        self.fed = resolve_fed(fed, lookup)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> FieldResult<()> {
        self.title = match title.trim() {
            "" => None,
            t => Some(t.parse()?),
        };
        Ok(())
    }

    pub fn set_gender(&mut self, gender: &str) -> FieldResult<()> {
        self.gender = match gender.trim() {
            "" => None,
            g => Some(g.parse()?),
        };
        Ok(())
    }

    pub fn set_dob(&mut self, dob: &str) -> FieldResult<()> {
        self.set_dob_with(dob, &FlexibleDateParser)
    }

    pub fn set_dob_with(&mut self, dob: &str, parser: &dyn DateParser) -> FieldResult<()> {
        self.dob = parse_optional_date("dob", dob, parser)?;
        Ok(())
    }

    /// Total points scored
    pub fn points(&self) -> f64 {
        self.results.iter().map(GameResult::points).sum()
    }

    pub fn find_result(&self, round: u32) -> Option<&GameResult> {
        self.results.iter().find(|r| r.round() == round)
    }

    /// Number of wins against a real opponent
    pub fn wins(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.score() == Score::Win && !r.is_bye())
            .count()
    }

    /// Append a result belonging to this player.
    ///
    /// A second result for a round that already has one is ignored when it
    /// describes the same game and rejected otherwise.
    ///
    /// This does not touch the opponent. Results against an opponent should
    /// go through [`Tournament::add_result`](crate::Tournament::add_result),
    /// which also records the opponent's side of the game.
    pub fn add_result(&mut self, result: GameResult) -> Result<(), StructuralError> {
        if self.accepts(&result)? {
            self.results.push(result);
            self.results.sort_by_key(GameResult::round);
        }
        Ok(())
    }

    /// Whether `result` would be appended by [`Player::add_result`].
    ///
    /// `Ok(false)` means the same game is already recorded.
    pub(crate) fn accepts(&self, result: &GameResult) -> Result<bool, StructuralError> {
        if result.player() != self.num {
            return Err(StructuralError::PlayerMismatch {
                player: self.num,
                result_player: result.player(),
            });
        }

        match self.find_result(result.round()) {
            None => Ok(true),
            Some(existing) if existing.same_game(result) => Ok(false),
            Some(_) => Err(StructuralError::ConflictingResult {
                player: self.num,
                round: result.round(),
            }),
        }
    }

    /// Loose identity used to spot the same person twice.
    ///
    /// Names must match exactly; the other identifying fields only count when
    /// both players have them.
    pub fn matches(&self, other: &Player) -> bool {
        fn agree<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        }

        self.first_name == other.first_name
            && self.last_name == other.last_name
            && agree(&self.fed, &other.fed)
            && agree(&self.dob, &other.dob)
            && agree(&self.gender, &other.gender)
            && agree(&self.id, &other.id)
            && agree(&self.fide_id, &other.fide_id)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.num, self.name())?;
        if let Some(title) = self.title {
            write!(f, " {title}")?;
        }
        if let Some(fed) = &self.fed {
            write!(f, " ({fed})")?;
        }
        Ok(())
    }
}

fn clean_name(field: &'static str, name: &str) -> FieldResult<String> {
    let cleaned = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if !cleaned.chars().any(char::is_alphabetic) {
        return Err(FieldError::new(field, name, "must contain at least one letter"));
    }
    Ok(cleaned)
}

fn positive(field: &'static str, value: Option<u32>) -> FieldResult<Option<u32>> {
    match value {
        Some(0) => Err(FieldError::new(field, "0", "must be a positive integer")),
        v => Ok(v),
    }
}

pub(crate) fn resolve_fed(
    fed: &str,
    lookup: &dyn FederationLookup,
) -> FieldResult<Option<String>> {
    let fed = fed.trim();
    if fed.is_empty() {
        return Ok(None);
    }
    lookup
        .find(fed)
        .map(|found| Some(found.code.to_string()))
        .ok_or_else(|| FieldError::new("fed", fed, "unknown federation"))
}

pub(crate) fn parse_optional_date(
    field: &'static str,
    text: &str,
    parser: &dyn DateParser,
) -> FieldResult<Option<NaiveDate>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parser
        .parse(text)
        .map(Some)
        .ok_or_else(|| FieldError::new(field, text, "not a valid date"))
}
