//! Work out how an icon should be presented on the wire.

use once_cell::sync::Lazy;
use regex::Regex;

/// An emoji shortcode, for example `:ghost:` or `:+1::skin-tone-2:`.
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    // Statically valid; covered by the tests below.
    Regex::new(r"^:[^:\s]+:(?::[^:\s]+:)?$").unwrap()
});

/// How a message's icon is interpreted by the webhook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconType {
    /// No icon, the webhook's own is used.
    #[default]
    None,
    /// A shortcode sent as `icon_emoji`.
    Emoji,
    /// An image location sent as `icon_url`.
    Url,
}

impl IconType {
    /// The payload key under which an icon of this type is sent.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            IconType::None => None,
            IconType::Emoji => Some("icon_emoji"),
            IconType::Url => Some("icon_url"),
        }
    }
}

/// Classify an icon value by its shape.
///
/// Only a single colon-wrapped token with no whitespace counts as an emoji;
/// any other non-empty value, `:not an emoji:` included, is treated as a URL.
///
/// ```
/// # use hookshot::message::icon::{classify, IconType};
/// assert_eq!(classify(":ghost:"), IconType::Emoji);
/// assert_eq!(classify("https://example.com/ghost.png"), IconType::Url);
/// assert_eq!(classify(""), IconType::None);
/// ```
pub fn classify(icon: &str) -> IconType {
    if icon.is_empty() {
        IconType::None
    } else if EMOJI.is_match(icon) {
        IconType::Emoji
    } else {
        IconType::Url
    }
}
