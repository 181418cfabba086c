//! Structured language metadata from encyclopedia infobox cells.
//!
//! Three independent pipelines over raw cell markup: name/qualifier/link,
//! year of creation, and predecessor languages. All of them are total: bad
//! input degrades to empty values instead of errors.

pub mod batch;
pub mod error;
pub mod markup;
pub mod model;
pub mod parser;
pub mod settings;

pub use error::{Error, Result};
pub use markup::{Element, HtmlFragmentParser, MarkupParser};
pub use model::{InfoboxRow, LanguageInfo, LanguageRecord, Qualifier, Year, YearRange};
pub use parser::Extractor;
pub use settings::Settings;
