//! The JSON body an incoming webhook expects.
//!
//! <https://api.slack.com/messaging/webhooks>

use crate::{attachment::Attachment, message::icon::IconType};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A message merged with its client's flags, ready to be encoded. Borrows
/// from both.
#[derive(Clone, Debug, PartialEq)]
pub struct Payload<'a> {
    pub text: Option<&'a str>,
    pub channel: Option<&'a str>,
    pub username: Option<&'a str>,
    pub link_names: bool,
    pub unfurl_links: bool,
    pub unfurl_media: bool,
    pub mrkdwn: bool,
    pub icon: Option<(IconType, &'a str)>,
    pub attachments: &'a [Attachment],
}

// The icon's key depends upon its type, which is simpler to express by hand
// than through derive attributes.
impl Serialize for Payload<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(None)?;

        if let Some(x) = self.text {
            state.serialize_entry("text", x)?;
        }
        if let Some(x) = self.channel {
            state.serialize_entry("channel", x)?;
        }
        if let Some(x) = self.username {
            state.serialize_entry("username", x)?;
        }

        // Older webhooks expect an integer here, unlike every other flag.
        state.serialize_entry("link_names", &u8::from(self.link_names))?;
        state.serialize_entry("unfurl_links", &self.unfurl_links)?;
        state.serialize_entry("unfurl_media", &self.unfurl_media)?;
        state.serialize_entry("mrkdwn", &self.mrkdwn)?;

        if let Some((typ, icon)) = self.icon {
            if let Some(key) = typ.key() {
                state.serialize_entry(key, icon)?;
            }
        }

        state.serialize_entry("attachments", self.attachments)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload() -> Payload<'static> {
        Payload {
            text: None,
            channel: None,
            username: None,
            link_names: false,
            unfurl_links: false,
            unfurl_media: true,
            mrkdwn: true,
            icon: None,
            attachments: &[],
        }
    }

    #[test]
    fn test_minimal() {
        assert_eq!(
            serde_json::to_value(payload()).unwrap(),
            json!({
                "link_names": 0,
                "unfurl_links": false,
                "unfurl_media": true,
                "mrkdwn": true,
                "attachments": [],
            }),
        );
    }

    #[test]
    fn test_icon_keys() {
        let emoji = Payload {
            icon: Some((IconType::Emoji, ":ghost:")),
            ..payload()
        };
        let url = Payload {
            icon: Some((IconType::Url, "http://x/y.png")),
            ..payload()
        };
        let none = Payload {
            icon: Some((IconType::None, "")),
            ..payload()
        };

        let emoji = serde_json::to_value(emoji).unwrap();
        assert_eq!(emoji["icon_emoji"], ":ghost:");
        assert!(emoji.get("icon_url").is_none());

        let url = serde_json::to_value(url).unwrap();
        assert_eq!(url["icon_url"], "http://x/y.png");
        assert!(url.get("icon_emoji").is_none());

        let none = serde_json::to_value(none).unwrap();
        assert!(none.get("icon_url").is_none());
        assert!(none.get("icon_emoji").is_none());
    }

    quickcheck! {
        fn test_link_names_is_always_an_integer(link_names: bool, others: bool) -> bool {
            let x = Payload {
                link_names,
                unfurl_links: others,
                unfurl_media: others,
                mrkdwn: others,
                ..payload()
            };
            let v = serde_json::to_value(x).unwrap();

            v["link_names"] == Value::from(u8::from(link_names))
                && v["unfurl_links"] == Value::Bool(others)
                && v["mrkdwn"] == Value::Bool(others)
        }
    }
}
