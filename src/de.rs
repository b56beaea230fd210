use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept loosely-typed booleans, as config files written by hand tend to
/// contain them: `1`, `"yes"`, `"off"` and so on. `null` is treated as absent.
pub fn truthy<'a, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'a>,
{
    Value::deserialize(deserializer).map(|v| to_bool(&v))
}

/// Coerce any JSON value to a canonical boolean, `None` for `null`.
pub fn to_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().map_or(true, |x| x != 0.0)),
        Value::String(s) => Some(!matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        )),
        Value::Array(xs) => Some(!xs.is_empty()),
        Value::Object(m) => Some(!m.is_empty()),
    }
}

#[test]
fn test_truthy() {
    #[derive(Debug, PartialEq, Eq, serde::Deserialize)]
    struct T {
        #[serde(default, deserialize_with = "truthy")]
        val: Option<bool>,
    }

    let parse = |s: &str| serde_json::from_str::<T>(s).unwrap().val;

    assert_eq!(parse(r#"{"val": true}"#), Some(true));
    assert_eq!(parse(r#"{"val": false}"#), Some(false));
    assert_eq!(parse(r#"{"val": 1}"#), Some(true));
    assert_eq!(parse(r#"{"val": 0}"#), Some(false));
    assert_eq!(parse(r#"{"val": "yes"}"#), Some(true));
    assert_eq!(parse(r#"{"val": "0"}"#), Some(false));
    assert_eq!(parse(r#"{"val": "Off"}"#), Some(false));
    assert_eq!(parse(r#"{"val": ""}"#), Some(false));
    assert_eq!(parse(r#"{"val": [1]}"#), Some(true));
    assert_eq!(parse(r#"{"val": null}"#), None);
    assert_eq!(parse(r#"{}"#), None);
}
