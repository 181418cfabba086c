pub mod link;
pub mod name;
pub mod predecessors;
pub mod qualifier;
pub mod years;

use tracing::trace;

use crate::markup::{HtmlFragmentParser, MarkupParser};
use crate::model::{InfoboxRow, LanguageInfo, LanguageRecord, YearRange};
use crate::settings::Settings;

/// Infobox cell extractor. Holds only configuration, so one instance can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Extractor<P = HtmlFragmentParser> {
    base_url: String,
    parser: P,
}

impl Extractor<HtmlFragmentParser> {
    pub fn new(settings: &Settings) -> Self {
        Extractor::with_parser(settings, HtmlFragmentParser)
    }
}

impl<P: MarkupParser> Extractor<P> {
    pub fn with_parser(settings: &Settings, parser: P) -> Self {
        Extractor {
            base_url: settings.base_url().to_string(),
            parser,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name cell → `{name, nameExtra, link}`.
    pub fn extract_info_from_name(&self, content: &str) -> LanguageInfo {
        if content.is_empty() {
            return LanguageInfo::empty();
        }

        let anchor = self.parser.first_element(content, "a");
        let (href, text) = match &anchor {
            Some(a) => (a.attr("href"), a.text.as_str()),
            None => (None, ""),
        };

        let split = name::split(text);
        trace!("Name {:?} split by {:?}", split.name, split.rule);

        let resolved = qualifier::resolve(&self.parser, &self.base_url, content, split.qualifier);
        let name_extra = qualifier::apply_overrides(content, &split.name, resolved);

        LanguageInfo {
            name: split.name,
            name_extra,
            link: link::normalize(&self.base_url, href),
        }
    }

    pub fn extract_year_of_creation(&self, content: &str) -> YearRange {
        years::extract(content)
    }

    pub fn extract_predecessors(&self, content: &str) -> Vec<LanguageInfo> {
        predecessors::extract(&self.parser, &self.base_url, content)
    }

    /// All three pipelines over one page's cells.
    pub fn process_row(&self, row: &InfoboxRow) -> LanguageRecord {
        LanguageRecord::new(
            self.extract_info_from_name(&row.name),
            self.extract_year_of_creation(&row.year),
            self.extract_predecessors(&row.predecessors),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Element;
    use crate::model::{Qualifier, Year};

    fn extractor() -> Extractor {
        Extractor::new(&Settings::default())
    }

    #[test]
    fn empty_fragment() {
        assert_eq!(extractor().extract_info_from_name(""), LanguageInfo::empty());
    }

    #[test]
    fn anchor_without_aside() {
        let info = extractor()
            .extract_info_from_name(r#"<a href="/wiki/Python_(programming_language)">Python</a>"#);
        assert_eq!(info.name, "Python");
        assert_eq!(info.name_extra, Qualifier::None);
        assert_eq!(
            info.link.as_deref(),
            Some("https://en.wikipedia.org/wiki/Python_(programming_language)")
        );
    }

    #[test]
    fn aside_after_anchor() {
        let info =
            extractor().extract_info_from_name(r#"<a href="/wiki/C_Sharp">C#</a> (also known as C-Sharp)"#);
        assert_eq!(
            info,
            LanguageInfo {
                name: "C#".into(),
                name_extra: Qualifier::PlainText("(also known as C-Sharp)".into()),
                link: Some("https://en.wikipedia.org/wiki/C_Sharp".into()),
            }
        );
    }

    #[test]
    fn aside_inside_anchor_text() {
        let info = extractor()
            .extract_info_from_name(r#"<a href="/wiki/Lisp">Lisp (family)</a> (other note)"#);
        assert_eq!(info.name, "Lisp");
        assert_eq!(info.name_extra, Qualifier::PlainText("(family)".into()));
    }

    #[test]
    fn linked_aside() {
        let info = extractor().extract_info_from_name(
            r#"<a href="/wiki/Caml">Caml</a> (<a href="/wiki/ML_(programming_language)">ML</a> dialect)"#,
        );
        assert_eq!(info.name, "Caml");
        assert_eq!(
            info.name_extra,
            Qualifier::LinkedText {
                link: Some("https://en.wikipedia.org/wiki/ML_(programming_language)".into()),
                name: "ML".into(),
            }
        );
    }

    #[test]
    fn escaped_less_than_in_anchor_text() {
        let info = extractor().extract_info_from_name(r#"<a href="/wiki/X">a &lt;b (c)</a>"#);
        assert_eq!(info.name, "a <b");
        assert_eq!(info.name_extra, Qualifier::PlainText("(c)".into()));
        assert_eq!(info.link.as_deref(), Some("https://en.wikipedia.org/wiki/X"));
    }

    #[test]
    fn redlinked_name() {
        let info = extractor().extract_info_from_name(
            r#"<a href="/w/index.php?title=Foo_(language)&amp;action=edit&amp;redlink=1" class="new">Foo</a>"#,
        );
        assert_eq!(info.name, "Foo");
        assert_eq!(info.link, None);
    }

    #[test]
    fn sql_uses_override() {
        let fragment = r#"<a href="/wiki/SQL">SQL</a> (Structured Query Language) (<a href="/wiki/ISO/IEC_9075">ISO/IEC 9075</a>)"#;
        let info = extractor().extract_info_from_name(fragment);
        assert_eq!(info.name, "SQL");
        assert_eq!(
            info.name_extra,
            Qualifier::PlainText(r#"<a href="/wiki/SQL">SQL</a> (Structured Query Language)"#.into())
        );
    }

    #[test]
    fn no_anchor_keeps_fragment_level_aside() {
        let info = extractor().extract_info_from_name("Plain (text)");
        assert_eq!(info.name, "");
        assert_eq!(info.name_extra, Qualifier::PlainText("(text)".into()));
        assert_eq!(info.link, None);

        let info = extractor().extract_info_from_name("Plain");
        assert_eq!(info, LanguageInfo::empty());
    }

    #[test]
    fn base_url_is_injected() {
        let e = Extractor::new(&Settings::with_base_url("http://mirror.local/"));
        assert_eq!(e.base_url(), "http://mirror.local");
        let info = e.extract_info_from_name(r#"<a href="/wiki/Ada">Ada</a>"#);
        assert_eq!(info.link.as_deref(), Some("http://mirror.local/wiki/Ada"));
    }

    /// Stand-in parser: treats the whole fragment as one anchor.
    struct WholeFragmentAnchor;

    impl MarkupParser for WholeFragmentAnchor {
        fn first_element(&self, fragment: &str, _tag: &str) -> Option<Element> {
            Some(Element {
                attrs: vec![("href".into(), "/wiki/Fake".into())],
                text: fragment.to_string(),
            })
        }
    }

    #[test]
    fn parser_is_pluggable() {
        let e = Extractor::with_parser(&Settings::default(), WholeFragmentAnchor);
        let info = e.extract_info_from_name("Modula-2");
        assert_eq!(info.name, "Modula-2");
        assert_eq!(info.link.as_deref(), Some("https://en.wikipedia.org/wiki/Fake"));
        let preds = e.extract_predecessors("Pascal, Mesa");
        assert_eq!(preds.len(), 2);
        assert_eq!(preds[1].name, "Mesa");
    }

    #[test]
    fn process_row_runs_all_pipelines() {
        let row = InfoboxRow {
            name: r#"<a href="/wiki/C_(programming_language)">C</a>"#.into(),
            year: "1972".into(),
            predecessors: r#"<a href="/wiki/B_(programming_language)">B</a>"#.into(),
        };
        let rec = extractor().process_row(&row);
        assert_eq!(rec.name, "C");
        assert_eq!(rec.years, YearRange::single(Year::Known(1972)));
        assert_eq!(rec.predecessors.len(), 1);
        assert_eq!(rec.predecessors[0].name, "B");
    }
}
