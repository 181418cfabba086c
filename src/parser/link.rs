use tracing::trace;

const REDLINK_MARKER: &str = "redlink=1";

/// Make a relative wiki link absolute. Missing pages (redlinks) become `None`.
pub fn normalize(base_url: &str, href: Option<&str>) -> Option<String> {
    let href = href.filter(|h| !h.is_empty())?;
    if href.contains(REDLINK_MARKER) {
        trace!("Dropping redlink {}", href);
        return None;
    }
    Some(format!("{}{}", base_url, href))
}
