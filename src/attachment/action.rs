//! Interactive buttons attached to a message.
//!
//! <https://api.slack.com/legacy/interactive-message-field-guide#action_fields>

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A single action, typically a button. `name`, `text` and `type` are
/// required; building one from a mapping without them fails.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentAction {
    pub name: String,
    pub text: String,
    pub style: Option<ActionStyle>,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<String>,
    pub confirm: Option<ActionConfirmation>,
}

impl AttachmentAction {
    /// A plain button.
    pub fn button<T: Into<String>, U: Into<String>>(name: T, text: U) -> Self {
        AttachmentAction {
            name: name.into(),
            text: text.into(),
            style: None,
            kind: "button".into(),
            value: None,
            confirm: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Default,
    Primary,
    Danger,
}

/// A confirmation dialog shown before an action fires.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfirmation {
    pub text: String,
    pub title: Option<String>,
    pub ok_text: Option<String>,
    pub dismiss_text: Option<String>,
}

impl ActionConfirmation {
    pub fn new<T: Into<String>>(text: T) -> Self {
        ActionConfirmation {
            text: text.into(),
            ..Default::default()
        }
    }
}
