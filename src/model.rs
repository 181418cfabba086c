use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Supplementary text attached to a language name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Qualifier {
    #[default]
    None,
    PlainText(String),
    LinkedText { link: Option<String>, name: String },
}

impl Qualifier {
    pub fn is_none(&self) -> bool {
        matches!(self, Qualifier::None)
    }

    /// Plain text qualifier with actual content.
    pub fn non_empty_text(&self) -> Option<&str> {
        match self {
            Qualifier::PlainText(t) if !t.is_empty() => Some(t),
            _ => None,
        }
    }
}

// null | "text" | { "link": ..., "name": ... }
impl Serialize for Qualifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Qualifier::None => serializer.serialize_none(),
            Qualifier::PlainText(text) => serializer.serialize_str(text),
            Qualifier::LinkedText { link, name } => {
                let mut s = serializer.serialize_struct("LinkedText", 2)?;
                s.serialize_field("link", link)?;
                s.serialize_field("name", name)?;
                s.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub name: String,
    pub name_extra: Qualifier,
    pub link: Option<String>,
}

impl LanguageInfo {
    pub fn empty() -> Self {
        LanguageInfo {
            name: String::new(),
            name_extra: Qualifier::None,
            link: None,
        }
    }

    pub fn plain(name: impl Into<String>, link: Option<String>) -> Self {
        LanguageInfo {
            name: name.into(),
            name_extra: Qualifier::None,
            link,
        }
    }
}

/// A parsed year. `Unknown` stands in for text that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Year {
    Known(i32),
    Unknown,
}

impl Year {
    pub fn value(self) -> Option<i32> {
        match self {
            Year::Known(y) => Some(y),
            Year::Unknown => None,
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Year::Known(y) => serializer.serialize_i32(*y),
            Year::Unknown => serializer.serialize_none(),
        }
    }
}

/// `[]`, `[created]` or `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct YearRange(Vec<Year>);

impl YearRange {
    pub fn empty() -> Self {
        YearRange(Vec::new())
    }

    pub fn single(year: Year) -> Self {
        YearRange(vec![year])
    }

    pub fn span(start: Year, end: Year) -> Self {
        YearRange(vec![start, end])
    }

    pub fn years(&self) -> &[Year] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn start(&self) -> Option<Year> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Year> {
        self.0.get(1).copied()
    }

    /// Known values only, for callers that only care about numbers.
    pub fn known(&self) -> Vec<i32> {
        self.0.iter().filter_map(|y| y.value()).collect()
    }
}

/// Raw infobox cells collected from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InfoboxRow {
    pub name: String,
    pub year: String,
    pub predecessors: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRecord {
    pub name: String,
    pub name_extra: Qualifier,
    pub link: Option<String>,
    pub years: YearRange,
    pub predecessors: Vec<LanguageInfo>,
}

impl LanguageRecord {
    pub fn new(info: LanguageInfo, years: YearRange, predecessors: Vec<LanguageInfo>) -> Self {
        LanguageRecord {
            name: info.name,
            name_extra: info.name_extra,
            link: info.link,
            years,
            predecessors,
        }
    }
}
