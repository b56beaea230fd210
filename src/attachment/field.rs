use serde::{Deserialize, Serialize};

/// A titled value shown in a table within an attachment.
///
/// <https://api.slack.com/reference/messaging/attachments#field_objects>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: FieldValue,
    /// Whether the field is narrow enough to sit side-by-side with others.
    #[serde(default)]
    pub short: bool,
}

impl AttachmentField {
    pub fn new<T: Into<String>, V: Into<FieldValue>>(title: T, value: V, short: bool) -> Self {
        AttachmentField {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}

/// Field values go out as whichever JSON kind they came in as.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<String> for FieldValue {
    fn from(x: String) -> Self {
        FieldValue::Text(x)
    }
}

impl From<&str> for FieldValue {
    fn from(x: &str) -> Self {
        FieldValue::Text(x.to_owned())
    }
}

impl From<i64> for FieldValue {
    fn from(x: i64) -> Self {
        FieldValue::Number(x.into())
    }
}

impl From<u64> for FieldValue {
    fn from(x: u64) -> Self {
        FieldValue::Number(x.into())
    }
}

impl From<i32> for FieldValue {
    fn from(x: i32) -> Self {
        FieldValue::Number(x.into())
    }
}

impl From<u32> for FieldValue {
    fn from(x: u32) -> Self {
        FieldValue::Number(x.into())
    }
}

/// Non-finite floats have no JSON number form, so they're sent as text.
impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        serde_json::Number::from_f64(x)
            .map(FieldValue::Number)
            .unwrap_or_else(|| FieldValue::Text(x.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind_is_preserved() {
        assert_eq!(
            serde_json::to_value(AttachmentField::new("A", "1", true)).unwrap(),
            json!({"title": "A", "value": "1", "short": true}),
        );

        assert_eq!(
            serde_json::to_value(AttachmentField::new("Builds", 42_i64, false)).unwrap(),
            json!({"title": "Builds", "value": 42, "short": false}),
        );
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(
            serde_json::to_value(AttachmentField::new("Builds", 2, false)).unwrap(),
            json!({"title": "Builds", "value": 2, "short": false}),
        );
        assert_eq!(FieldValue::from(7_u32), FieldValue::Number(7.into()));
        assert_eq!(
            serde_json::to_value(FieldValue::from(0.25)).unwrap(),
            json!(0.25)
        );
        assert_eq!(FieldValue::from(f64::NAN), FieldValue::Text("NaN".into()));
    }

    #[test]
    fn test_short_defaults_to_false() {
        let x: AttachmentField =
            serde_json::from_value(json!({"title": "A", "value": 1.5})).unwrap();

        assert!(!x.short);
        assert_eq!(x.value, FieldValue::Number(serde_json::Number::from_f64(1.5).unwrap()));
    }
}
