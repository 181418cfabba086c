use std::sync::LazyLock;

use regex::Regex;

use crate::model::Qualifier;

static ANCHOR_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</a>").unwrap());

/// Which rule produced a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// `Name (aside...)`: everything from the first `(` to the end.
    Parenthetical,
    /// `Name</a> trailing`: text after the first closing anchor.
    TrailingAfterAnchor,
    Bare,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSplit {
    pub name: String,
    pub qualifier: Qualifier,
    pub rule: SplitRule,
}

type Rule = fn(&str) -> Option<NameSplit>;

/// Tried in order; the first match wins, `Bare` otherwise.
const TEXT_RULES: &[Rule] = &[parenthetical, trailing_after_anchor];
/// Same rules over raw markup, where parentheses inside tags don't count.
const MARKUP_RULES: &[Rule] = &[parenthetical_outside_tags, trailing_after_anchor];

/// Split visible display text into a name and a trailing qualifier.
pub fn split(text: &str) -> NameSplit {
    apply(TEXT_RULES, text)
}

/// Split a raw cell fragment, skipping `(` that sit inside tag markup.
pub fn split_markup(fragment: &str) -> NameSplit {
    apply(MARKUP_RULES, fragment)
}

fn apply(rules: &[Rule], text: &str) -> NameSplit {
    rules
        .iter()
        .find_map(|rule| rule(text))
        .unwrap_or_else(|| NameSplit {
            name: text.to_string(),
            qualifier: Qualifier::None,
            rule: SplitRule::Bare,
        })
}

fn parenthetical(text: &str) -> Option<NameSplit> {
    parenthetical_at(text, parenthetical_start(text, false)?)
}

fn parenthetical_outside_tags(text: &str) -> Option<NameSplit> {
    parenthetical_at(text, parenthetical_start(text, true)?)
}

fn parenthetical_at(text: &str, pos: usize) -> Option<NameSplit> {
    let extra = &text[pos..];
    Some(NameSplit {
        name: text.replacen(extra, "", 1).trim().to_string(),
        qualifier: Qualifier::PlainText(extra.to_string()),
        rule: SplitRule::Parenthetical,
    })
}

fn trailing_after_anchor(text: &str) -> Option<NameSplit> {
    let m = ANCHOR_CLOSE_RE.find(text)?;
    let extra = text[m.start()..].replacen("</a>", "", 1);
    Some(NameSplit {
        name: text.to_string(),
        qualifier: Qualifier::PlainText(extra.trim().to_string()),
        rule: SplitRule::TrailingAfterAnchor,
    })
}

/// Byte offset of the first `(` that has a `)` after it on the same line.
/// With `skip_tags`, parentheses inside tags (`<a href="/wiki/X_(y)">`) are skipped.
fn parenthetical_start(text: &str, skip_tags: bool) -> Option<usize> {
    let mut in_tag = false;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '<' if skip_tags && !in_tag => {
                in_tag = chars
                    .peek()
                    .is_some_and(|&(_, n)| n.is_ascii_alphabetic() || n == '/' || n == '!');
            }
            '>' => in_tag = false,
            '(' if !in_tag => {
                let line = text[i + 1..].split('\n').next().unwrap_or("");
                if line.contains(')') {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
