//! Presentation metadata derived from a link's URL.

use crate::domain::entities::{IconKind, LinkPreview};
use url::Url;

/// Platform keywords checked in order. The first keyword found in the URL
/// decides the icon, regardless of where it appears in the URL.
const ICON_KEYWORDS: &[(&str, IconKind)] = &[
    ("instagram", IconKind::Instagram),
    ("twitter", IconKind::Twitter),
    ("x.com", IconKind::Twitter),
    ("facebook", IconKind::Facebook),
    ("youtube", IconKind::Youtube),
    ("linkedin", IconKind::Linkedin),
    ("github", IconKind::Github),
    ("tiktok", IconKind::Tiktok),
];

/// Builds the preview entry for one link.
///
/// Never fails: a URL that cannot be parsed is shown as-is.
///
/// # Examples
///
/// ```ignore
/// let preview = render_link("Instagram", "https://www.instagram.com/me");
/// assert_eq!(preview.display_url, "instagram.com");
/// assert_eq!(preview.icon, IconKind::Instagram);
/// ```
pub fn render_link(title: &str, url: &str) -> LinkPreview {
    LinkPreview {
        title: title.to_string(),
        url: url.to_string(),
        display_url: display_url(url),
        icon: classify_icon(url),
    }
}

/// Returns the URL's hostname without a leading `www.`.
///
/// Falls back to the raw input when the URL does not parse or has no host.
pub fn display_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

/// Classifies the icon for a URL by case-insensitive keyword match.
pub fn classify_icon(url: &str) -> IconKind {
    let haystack = url.to_lowercase();
    ICON_KEYWORDS
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(IconKind::Link)
}
