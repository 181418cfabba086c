use scraper::{Html, Selector};
use tracing::debug;

/// An element pulled out of a fragment: its attributes and visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub attrs: Vec<(String, String)>,
    pub text: String,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The only HTML capability the extractors need: first element by tag name.
pub trait MarkupParser: Send + Sync {
    fn first_element(&self, fragment: &str, tag: &str) -> Option<Element>;
}

/// `scraper`-backed parser (html5ever under the hood).
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFragmentParser;

impl MarkupParser for HtmlFragmentParser {
    fn first_element(&self, fragment: &str, tag: &str) -> Option<Element> {
        let selector = match Selector::parse(tag) {
            Ok(s) => s,
            Err(e) => {
                debug!("Invalid tag selector {:?}: {:?}", tag, e);
                return None;
            }
        };
        let doc = Html::parse_fragment(fragment);
        let el = doc.select(&selector).next()?;
        Some(Element {
            attrs: el
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: el.text().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_anchor_with_href_and_text() {
        let el = HtmlFragmentParser
            .first_element(r#"<a href="/wiki/ALGOL">ALGOL</a> and <a href="/wiki/B">B</a>"#, "a")
            .unwrap();
        assert_eq!(el.attr("href"), Some("/wiki/ALGOL"));
        assert_eq!(el.text, "ALGOL");
    }

    #[test]
    fn text_concatenates_nested_nodes() {
        let el = HtmlFragmentParser
            .first_element(r#"<a href="/x"><i>Standard</i> ML</a>"#, "a")
            .unwrap();
        assert_eq!(el.text, "Standard ML");
    }

    #[test]
    fn entities_are_decoded() {
        let el = HtmlFragmentParser
            .first_element(r#"<a href="/wiki/C_Sharp">C&#35; &amp; co</a>"#, "a")
            .unwrap();
        assert_eq!(el.text, "C# & co");
    }

    #[test]
    fn missing_attr_and_missing_element() {
        let el = HtmlFragmentParser.first_element("<a>bare</a>", "a").unwrap();
        assert_eq!(el.attr("href"), None);
        assert!(HtmlFragmentParser.first_element("plain text", "a").is_none());
        assert!(HtmlFragmentParser.first_element("", "a").is_none());
    }
}
