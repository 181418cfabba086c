use tracing::debug;

use crate::model::{Year, YearRange};

/// En dash, as used by the infobox for `1970–72`.
const RANGE_SEPARATOR: char = '–';

/// Parse an infobox year cell: `1991`, `1991[1]`, `1970–72`, `1989–1991`.
pub fn extract(content: &str) -> YearRange {
    if content.is_empty() {
        return YearRange::empty();
    }

    let mut parts = content.split(RANGE_SEPARATOR);
    let start = parts.next().unwrap_or_default();
    let end = parts.next().unwrap_or_default();

    if end.is_empty() {
        // First four chars only: drops footnote markers after the year.
        let head: String = start.chars().take(4).collect();
        return YearRange::single(parse_year(&head));
    }

    let end_year = if end.chars().count() < 4 {
        let century: String = start.chars().take(2).collect();
        parse_year(&format!("{}{}", century, end))
    } else {
        parse_year(end)
    };

    YearRange::span(parse_year(start), end_year)
}

fn parse_year(text: &str) -> Year {
    match text.trim().parse::<i32>() {
        Ok(y) => Year::Known(y),
        Err(_) => {
            debug!("Unparseable year {:?}", text);
            Year::Unknown
        }
    }
}
