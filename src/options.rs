//! Client defaults supplied at construction.
//!
//! Options can be built in code or deserialised from any serde format, which
//! makes them easy to keep alongside the rest of an application's config:
//!
//! ```
//! # use hookshot::Options;
//! let opts: Options = serde_json::from_str(r##"{
//!     "channel": "#alerts",
//!     "link_names": 1,
//!     "unfurl_media": "no"
//! }"##).unwrap();
//!
//! assert_eq!(opts.channel.as_deref(), Some("#alerts"));
//! assert_eq!(opts.link_names, Some(true));
//! assert_eq!(opts.unfurl_media, Some(false));
//! ```

use serde::Deserialize;

/// Every option is optional. Those left unset keep the client's defaults:
/// no channel, username or icon, `link_names` and `unfurl_links` off,
/// `unfurl_media` and `allow_markdown` on, and no mrkdwn attachment fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "crate::de::truthy")]
    pub link_names: Option<bool>,
    #[serde(deserialize_with = "crate::de::truthy")]
    pub unfurl_links: Option<bool>,
    #[serde(deserialize_with = "crate::de::truthy")]
    pub unfurl_media: Option<bool>,
    #[serde(deserialize_with = "crate::de::truthy")]
    pub allow_markdown: Option<bool>,
    pub markdown_in_attachments: Option<Vec<String>>,
}
