//! A single outgoing message, built up before being handed to a
//! [Client][crate::Client] to send.

pub mod icon;

use self::icon::{classify, IconType};
use crate::{
    attachment::Attachment,
    client::Client,
    error::{SendError, ValidationError},
    transport::Transport,
};
use serde_json::Value;

/// A message and its overrides of the client's defaults.
///
/// Messages obtained via [Client::create_message] start out with a copy of the
/// client's defaults at that moment. Changing the client afterwards doesn't
/// affect messages it's already created.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    text: Option<String>,
    channel: Option<String>,
    username: Option<String>,
    icon: Option<String>,
    icon_type: IconType,
    allow_markdown: bool,
    markdown_in_attachments: Vec<String>,
    attachments: Vec<Attachment>,
}

impl Default for Message {
    fn default() -> Self {
        Message {
            text: None,
            channel: None,
            username: None,
            icon: None,
            icon_type: IconType::None,
            allow_markdown: true,
            markdown_in_attachments: Vec::new(),
            attachments: Vec::new(),
        }
    }
}

impl Message {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn icon_type(&self) -> IconType {
        self.icon_type
    }

    pub fn allow_markdown(&self) -> bool {
        self.allow_markdown
    }

    pub fn markdown_in_attachments(&self) -> &[String] {
        &self.markdown_in_attachments
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn set_text<T: Into<String>>(&mut self, text: T) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn clear_text(&mut self) -> &mut Self {
        self.text = None;
        self
    }

    pub fn set_channel<T: Into<String>>(&mut self, channel: T) -> &mut Self {
        self.channel = Some(channel.into());
        self
    }

    /// Fall back to the webhook's own channel.
    pub fn clear_channel(&mut self) -> &mut Self {
        self.channel = None;
        self
    }

    /// Send to this channel (or `@user`) rather than the default.
    pub fn to<T: Into<String>>(&mut self, channel: T) -> &mut Self {
        self.set_channel(channel)
    }

    pub fn set_username<T: Into<String>>(&mut self, username: T) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    /// Fall back to the webhook's own username.
    pub fn clear_username(&mut self) -> &mut Self {
        self.username = None;
        self
    }

    /// Send as this username rather than the default.
    pub fn from<T: Into<String>>(&mut self, username: T) -> &mut Self {
        self.set_username(username)
    }

    /// Set the icon, either an emoji shortcode like `:ghost:` or an image URL.
    /// An empty value removes it.
    pub fn set_icon<T: Into<String>>(&mut self, icon: T) -> &mut Self {
        let icon = icon.into();

        self.icon_type = classify(&icon);
        self.icon = match self.icon_type {
            IconType::None => None,
            _ => Some(icon),
        };

        self
    }

    pub fn with_icon<T: Into<String>>(&mut self, icon: T) -> &mut Self {
        self.set_icon(icon)
    }

    pub fn set_allow_markdown(&mut self, allow: bool) -> &mut Self {
        self.allow_markdown = allow;
        self
    }

    pub fn enable_markdown(&mut self) -> &mut Self {
        self.set_allow_markdown(true)
    }

    pub fn disable_markdown(&mut self) -> &mut Self {
        self.set_allow_markdown(false)
    }

    /// Set which attachment fields are rendered as mrkdwn for attachments
    /// attached from now on that don't specify their own.
    pub fn set_markdown_in_attachments(&mut self, fields: Vec<String>) -> &mut Self {
        self.markdown_in_attachments = fields;
        self
    }

    /// Append an attachment. If it doesn't list its own mrkdwn fields it takes
    /// on this message's.
    pub fn attach(&mut self, mut attachment: Attachment) -> &mut Self {
        attachment.inherit_mrkdwn_in(&self.markdown_in_attachments);
        self.attachments.push(attachment);
        self
    }

    /// Build an attachment from a loosely typed mapping and append it. Fails
    /// straight away, leaving the message untouched, if required keys are
    /// missing.
    pub fn attach_map<V: Into<Value>>(&mut self, map: V) -> Result<&mut Self, ValidationError> {
        let attachment = Attachment::try_from(map.into())?;
        Ok(self.attach(attachment))
    }

    /// Replace every attachment.
    pub fn set_attachments(&mut self, attachments: Vec<Attachment>) -> &mut Self {
        self.clear_attachments();

        for x in attachments {
            self.attach(x);
        }

        self
    }

    pub fn clear_attachments(&mut self) -> &mut Self {
        self.attachments.clear();
        self
    }

    /// Set the text if given, then send via `client`.
    pub async fn send<T: Transport>(
        &mut self,
        client: &Client<T>,
        text: Option<&str>,
    ) -> Result<(), SendError<T::Error>> {
        if let Some(text) = text {
            self.set_text(text);
        }

        client.send_message(self).await
    }

    /// Seed a message with a client's defaults.
    pub(crate) fn seeded(
        channel: Option<String>,
        username: Option<String>,
        icon: Option<String>,
        allow_markdown: bool,
        markdown_in_attachments: Vec<String>,
    ) -> Self {
        let mut msg = Message {
            channel,
            username,
            allow_markdown,
            markdown_in_attachments,
            ..Message::default()
        };

        if let Some(icon) = icon {
            msg.set_icon(icon);
        }

        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::field::AttachmentField;
    use serde_json::json;

    #[test]
    fn test_setters_chain() {
        let mut msg = Message::default();
        msg.set_text("hello")
            .to("#general")
            .from("hermes")
            .with_icon(":ghost:")
            .disable_markdown();

        assert_eq!(msg.text(), Some("hello"));
        assert_eq!(msg.channel(), Some("#general"));
        assert_eq!(msg.username(), Some("hermes"));
        assert_eq!(msg.icon(), Some(":ghost:"));
        assert_eq!(msg.icon_type(), IconType::Emoji);
        assert!(!msg.allow_markdown());
    }

    #[test]
    fn test_clear_seeded_overrides() {
        let mut msg = Message::seeded(
            Some("#ops".into()),
            Some("hermes".into()),
            None,
            true,
            Vec::new(),
        );
        msg.set_text("hello");

        msg.clear_channel().clear_username().clear_text();

        assert_eq!(msg.channel(), None);
        assert_eq!(msg.username(), None);
        assert_eq!(msg.text(), None);
    }

    #[test]
    fn test_set_icon() {
        let mut msg = Message::default();

        msg.set_icon("http://x/y.png");
        assert_eq!(msg.icon_type(), IconType::Url);
        assert_eq!(msg.icon(), Some("http://x/y.png"));

        msg.set_icon("");
        assert_eq!(msg.icon_type(), IconType::None);
        assert_eq!(msg.icon(), None);
    }

    #[test]
    fn test_attach_order() {
        let mut msg = Message::default();
        msg.attach(Attachment::new("one"))
            .attach(Attachment::new("two"))
            .attach_map(json!({"fallback": "three"}))
            .unwrap();

        let fallbacks: Vec<&str> = msg.attachments().iter().map(|a| a.fallback.as_str()).collect();
        assert_eq!(fallbacks, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_attach_map_invalid_leaves_message_untouched() {
        let mut msg = Message::default();
        msg.attach(Attachment::new("one"));

        let res = msg.attach_map(json!({
            "text": "body",
            "fields": [{"title": "A", "value": "1", "short": true}],
        }));

        assert!(res.is_err());
        assert_eq!(msg.attachments().len(), 1);
    }

    #[test]
    fn test_attach_inherits_markdown_fields() {
        let mut msg = Message::default();
        msg.set_markdown_in_attachments(vec!["text".into(), "fields".into()]);

        msg.attach_map(json!({"fallback": "inherits"}))
            .unwrap()
            .attach_map(json!({"fallback": "overrides", "mrkdwn_in": ["pretext"]}))
            .unwrap()
            .attach(Attachment::new("built"));

        let lists: Vec<Option<Vec<String>>> =
            msg.attachments().iter().map(|a| a.mrkdwn_in.clone()).collect();

        assert_eq!(
            lists,
            vec![
                Some(vec!["text".to_owned(), "fields".to_owned()]),
                Some(vec!["pretext".to_owned()]),
                Some(vec!["text".to_owned(), "fields".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_set_and_clear_attachments() {
        let mut msg = Message::default();
        msg.set_markdown_in_attachments(vec!["text".into()]);
        msg.attach(Attachment::new("old"));

        let mut fresh = Attachment::new("new");
        fresh.add_field(AttachmentField::new("A", "1", true));
        msg.set_attachments(vec![fresh]);

        assert_eq!(msg.attachments().len(), 1);
        assert_eq!(msg.attachments()[0].fallback, "new");
        assert_eq!(msg.attachments()[0].mrkdwn_in, Some(vec!["text".to_owned()]));

        msg.clear_attachments();
        assert!(msg.attachments().is_empty());
    }

    #[test]
    fn test_seeded() {
        let msg = Message::seeded(
            Some("#ops".into()),
            None,
            Some(":robot_face:".into()),
            false,
            vec!["text".into()],
        );

        assert_eq!(msg.channel(), Some("#ops"));
        assert_eq!(msg.username(), None);
        assert_eq!(msg.icon_type(), IconType::Emoji);
        assert!(!msg.allow_markdown());
        assert_eq!(msg.markdown_in_attachments(), ["text".to_owned()]);
        assert_eq!(msg.text(), None);
    }
}
