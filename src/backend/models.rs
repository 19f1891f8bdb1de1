use fake::Dummy;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Exercise type whose options are rendered as a list.
///
pub const MULTIPLE_CHOICE: &str = "multiple-choice";

/// Defines a single generated exercise. Every field may be missing from the
/// backend response or carry a value of another JSON type.
///
#[derive(Clone, Debug, Default, Deserialize, Dummy, PartialEq, Eq)]
pub struct Exercise {
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_options")]
    pub options: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer: Option<String>,
}

impl Exercise {
    pub fn is_multiple_choice(&self) -> bool {
        self.kind.as_deref() == Some(MULTIPLE_CHOICE)
    }
}

/// Defines the envelope returned by the exercise generation endpoint, for
/// both successful and failed requests.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_exercises")]
    pub exercises: Option<Vec<Exercise>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub doc_id_used: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub api_key_present: Option<String>,
}

/// Text form of a scalar field. `null`, `false` and zero count as absent.
///
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(display(other)),
    }))
}

/// Option list, absent unless the value is an array.
///
fn lenient_options<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(items.into_iter().map(display).collect())),
        _ => Ok(None),
    }
}

/// Exercise list, absent unless the value is an array. Entries that are not
/// objects render with fallbacks only.
///
fn lenient_exercises<'de, D>(deserializer: D) -> Result<Option<Vec<Exercise>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn display(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_envelope() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "message": "Generadas",
            "doc_id_used": "Not Set",
            "api_key_present": "No",
            "exercises": [
                { "type": "multiple-choice", "question": "Q1", "options": ["A", "B"], "answer": "A" },
                { "type": "fill-in-blank", "question": "Yo ___ (aprender) español.", "answer": "aprendo" }
            ]
        }))
        .unwrap();

        let exercises = response.exercises.unwrap();
        assert_eq!(response.message.as_deref(), Some("Generadas"));
        assert_eq!(exercises.len(), 2);
        assert!(exercises[0].is_multiple_choice());
        assert_eq!(exercises[0].options, Some(vec!["A".to_string(), "B".to_string()]));
        assert!(!exercises[1].is_multiple_choice());
        assert_eq!(exercises[1].options, None);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "exercises": [{}]
        }))
        .unwrap();
        assert_eq!(response.message, None);
        assert_eq!(response.error, None);
        assert_eq!(response.exercises, Some(vec![Exercise::default()]));
    }

    #[test]
    fn non_array_exercises_count_as_absent() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "message": "ok",
            "exercises": "none"
        }))
        .unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));
        assert_eq!(response.exercises, None);

        let response: GenerateResponse =
            serde_json::from_value(json!({ "exercises": { "count": 2 } })).unwrap();
        assert_eq!(response.exercises, None);
    }

    #[test]
    fn scalar_fields_use_text_form() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "message": 7,
            "exercises": [
                { "type": "multiple-choice", "question": true, "options": [1, "dos", null], "answer": 4 },
                { "type": false, "question": null, "options": "A,B", "answer": 0 },
                "not an exercise"
            ]
        }))
        .unwrap();

        let exercises = response.exercises.unwrap();
        assert_eq!(response.message.as_deref(), Some("7"));
        assert_eq!(exercises.len(), 3);
        assert_eq!(exercises[0].question.as_deref(), Some("true"));
        assert_eq!(
            exercises[0].options,
            Some(vec!["1".to_string(), "dos".to_string(), "null".to_string()])
        );
        assert_eq!(exercises[0].answer.as_deref(), Some("4"));
        assert_eq!(exercises[1], Exercise::default());
        assert_eq!(exercises[2], Exercise::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let response: GenerateResponse =
            serde_json::from_value(json!({ "error": "boom", "trace": [1, 2, 3] })).unwrap();
        assert_eq!(response.error.as_deref(), Some("boom"));
    }
}
