use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::{link, name};
use crate::markup::MarkupParser;
use crate::model::Qualifier;

static SQL_CLAUSE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(<a").unwrap());

type Override = fn(&str) -> Qualifier;

/// Names whose infobox markup needs a bespoke qualifier.
const NAME_OVERRIDES: &[(&str, Override)] = &[("SQL", sql_clause)];

/// Resolve the final qualifier. The anchor text alone often lacks the aside,
/// so an empty one falls back to splitting the whole fragment.
pub fn resolve<P: MarkupParser + ?Sized>(
    parser: &P,
    base_url: &str,
    fragment: &str,
    from_anchor: Qualifier,
) -> Qualifier {
    if from_anchor.non_empty_text().is_some() {
        return from_anchor;
    }

    let candidate = match name::split_markup(fragment).qualifier {
        Qualifier::PlainText(t) if !t.is_empty() => t,
        _ => return Qualifier::None,
    };

    match parser.first_element(&candidate, "a") {
        Some(anchor) => {
            trace!("Linked qualifier in {:?}", candidate);
            Qualifier::LinkedText {
                link: link::normalize(base_url, anchor.attr("href")),
                name: anchor.text,
            }
        }
        None => Qualifier::PlainText(candidate.trim().to_string()),
    }
}

/// Replace the qualifier for names listed in the override table.
pub fn apply_overrides(fragment: &str, name: &str, qualifier: Qualifier) -> Qualifier {
    match NAME_OVERRIDES.iter().find(|(n, _)| *n == name) {
        Some((n, handler)) => {
            debug!("Applying {} qualifier override", n);
            handler(fragment)
        }
        None => qualifier,
    }
}

/// SQL's clause sits before a parenthesised link: keep everything up to `(<a`.
fn sql_clause(fragment: &str) -> Qualifier {
    let clause = SQL_CLAUSE_END_RE
        .find(fragment)
        .map(|m| fragment[..m.start()].trim())
        .unwrap_or_default();
    Qualifier::PlainText(clause.to_string())
}
