use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::link;
use crate::markup::MarkupParser;
use crate::model::LanguageInfo;

static FOOTNOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<sup.*>.*</sup>").unwrap());

/// Cells that are not a comma-separated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralRule {
    NoPredecessors,
    OperatorProgramming,
}

const LITERAL_RULES: &[(&str, LiteralRule)] = &[
    ("none", LiteralRule::NoPredecessors),
    ("Operator programming", LiteralRule::OperatorProgramming),
];

/// Parse an "Influenced by" cell into its listed languages, in source order.
pub fn extract<P: MarkupParser + ?Sized>(
    parser: &P,
    base_url: &str,
    content: &str,
) -> Vec<LanguageInfo> {
    if content.is_empty() {
        return Vec::new();
    }

    if let Some((prefix, rule)) = LITERAL_RULES.iter().find(|(p, _)| content.starts_with(p)) {
        trace!("Predecessor literal {:?}", prefix);
        return match rule {
            LiteralRule::NoPredecessors => Vec::new(),
            LiteralRule::OperatorProgramming => vec![LanguageInfo::plain(*prefix, None)],
        };
    }

    content
        .split(',')
        .map(|piece| extract_one(parser, base_url, piece))
        .collect()
}

fn extract_one<P: MarkupParser + ?Sized>(parser: &P, base_url: &str, piece: &str) -> LanguageInfo {
    let piece = FOOTNOTE_RE.replace(piece, "");
    match parser.first_element(&piece, "a") {
        Some(anchor) => LanguageInfo::plain(
            anchor.text.trim(),
            link::normalize(base_url, anchor.attr("href")),
        ),
        None => LanguageInfo::plain(piece.trim(), None),
    }
}
