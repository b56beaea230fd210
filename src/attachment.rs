//! Attachments, the rich blocks rendered beneath a message's text.
//!
//! <https://api.slack.com/reference/messaging/attachments>

pub mod action;
pub mod field;

use self::{action::AttachmentAction, field::AttachmentField};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// A single attachment. Only `fallback`, the plaintext summary shown by
/// clients that can't render attachments, is required.
///
/// Attachments can be built directly, or from a loosely typed mapping via
/// [TryFrom], which validates required keys up front:
///
/// ```
/// # use hookshot::Attachment;
/// use serde_json::json;
///
/// assert!(Attachment::try_from(json!({"text": "body"})).is_err());
/// assert!(Attachment::try_from(json!({"fallback": "f", "text": "body"})).is_ok());
/// ```
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: String,
    pub text: Option<String>,
    pub pretext: Option<String>,
    /// `good`, `warning`, `danger`, or any hex colour code.
    pub color: Option<String>,
    pub author_name: Option<String>,
    pub author_link: Option<String>,
    pub author_icon: Option<String>,
    pub title: Option<String>,
    pub title_link: Option<String>,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
    pub footer: Option<String>,
    pub footer_icon: Option<String>,
    /// Seconds since the Unix epoch.
    #[serde(alias = "timestamp")]
    pub ts: Option<i64>,
    /// Which of this attachment's fields are rendered as mrkdwn. Left unset, it
    /// takes on the list of the message it's attached to.
    #[serialize_always]
    #[serde(serialize_with = "ser_mrkdwn_in")]
    pub mrkdwn_in: Option<Vec<String>>,
    #[serde(default)]
    pub fields: Vec<AttachmentField>,
    #[serde(default)]
    pub actions: Vec<AttachmentAction>,
}

impl Attachment {
    pub fn new<T: Into<String>>(fallback: T) -> Self {
        Attachment {
            fallback: fallback.into(),
            ..Default::default()
        }
    }

    pub fn add_field(&mut self, field: AttachmentField) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn set_fields(&mut self, fields: Vec<AttachmentField>) -> &mut Self {
        self.fields = fields;
        self
    }

    pub fn clear_fields(&mut self) -> &mut Self {
        self.fields.clear();
        self
    }

    pub fn add_action(&mut self, action: AttachmentAction) -> &mut Self {
        self.actions.push(action);
        self
    }

    pub fn set_actions(&mut self, actions: Vec<AttachmentAction>) -> &mut Self {
        self.actions = actions;
        self
    }

    pub fn clear_actions(&mut self) -> &mut Self {
        self.actions.clear();
        self
    }

    /// Fill in the mrkdwn field list if it hasn't been set explicitly.
    pub(crate) fn inherit_mrkdwn_in(&mut self, fields: &[String]) {
        if self.mrkdwn_in.is_none() {
            self.mrkdwn_in = Some(fields.to_vec());
        }
    }
}

impl TryFrom<Value> for Attachment {
    type Error = ValidationError;

    fn try_from(x: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(x).map_err(ValidationError::from)
    }
}

impl TryFrom<Map<String, Value>> for Attachment {
    type Error = ValidationError;

    fn try_from(x: Map<String, Value>) -> Result<Self, Self::Error> {
        Attachment::try_from(Value::Object(x))
    }
}

/// An unset list goes out as an empty one; the key is always present.
fn ser_mrkdwn_in<S>(x: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    x.as_deref().unwrap_or_default().serialize(serializer)
}
