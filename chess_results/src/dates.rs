//! Calendar date parsing for tournament and player fields.

use chrono::NaiveDate;

/// Turns free-form text into a calendar date
pub trait DateParser {
    fn parse(&self, text: &str) -> Option<NaiveDate>;
}

/// Accepts the date layouts commonly found in tournament reports.
///
/// Year-first forms are tried before day-first ones, so `2010/03/04` is the
/// 4th of March. Day-first numeric forms follow European order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexibleDateParser;

const FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

impl DateParser for FlexibleDateParser {
    fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }
}

/// Parse with [`FlexibleDateParser`]
pub fn parse(text: &str) -> Option<NaiveDate> {
    FlexibleDateParser.parse(text)
}
