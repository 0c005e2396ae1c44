use crate::domain::model::Model;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Renders the model as an indented JSON array, one `indent_unit` per nesting
/// level. The output is deterministic for a given model and has no trailing
/// newline.
pub fn to_json(model: &Model, indent_unit: &str) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_unit.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    model.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::aggregate;
    use crate::domain::model::Record;

    #[test]
    fn test_empty_model_renders_empty_array() {
        assert_eq!(to_json(&Model::default(), "\t").unwrap(), "[]");
    }

    #[test]
    fn test_indent_unit_is_repeated_per_level() {
        let model = aggregate(vec![Record::new(["o", "u", "r"])]).unwrap();
        let json = to_json(&model, "  ").unwrap();
        let expected = r#"[
  {
    "organization": "o",
    "users": [
      {
        "username": "u",
        "roles": [
          "r"
        ]
      }
    ]
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let model = aggregate(vec![Record::new(["a\"b", "line\nbreak", "r\\s"])]).unwrap();
        let json = to_json(&model, "").unwrap();
        assert!(json.contains(r#""organization": "a\"b""#));
        assert!(json.contains(r#""username": "line\nbreak""#));
        assert!(json.contains(r#""r\\s""#));
    }
}
