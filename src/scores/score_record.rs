//! Score submission data structures.
//!
//! A submission body is a JSON object with optional `name` and `score`
//! fields. Both fall back to fixed defaults when absent; neither is
//! validated beyond that.

use chrono::Local;
use serde_json::Value;

/// Name used when a submission carries no `name` field
pub const UNKNOWN_NAME: &str = "Unknown";

/// Timestamp format for persisted rows (second precision, local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Score value as submitted, kept tagged instead of coerced.
///
/// Scalars persist verbatim; arrays and objects persist as their compact
/// JSON text; `null` persists as an empty field.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreValue {
    Number(serde_json::Number),
    Text(String),
    Bool(bool),
    Null,
}

impl ScoreValue {
    /// Default score for submissions without a `score` field
    pub fn zero() -> Self {
        ScoreValue::Number(serde_json::Number::from(0))
    }
}

impl From<&Value> for ScoreValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ScoreValue::Null,
            Value::Bool(b) => ScoreValue::Bool(*b),
            Value::Number(n) => ScoreValue::Number(n.clone()),
            Value::String(s) => ScoreValue::Text(s.clone()),
            other => ScoreValue::Text(other.to_string()),
        }
    }
}

impl std::fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValue::Number(n) => write!(f, "{}", n),
            ScoreValue::Text(s) => write!(f, "{}", s),
            ScoreValue::Bool(b) => write!(f, "{}", b),
            ScoreValue::Null => Ok(()),
        }
    }
}

/// One score submission, ready to be appended to the log
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    /// Wall-clock time of receipt, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Player name, `"Unknown"` when the field was absent
    pub name: String,
    /// Submitted score value
    pub score: ScoreValue,
}

impl ScoreRecord {
    /// Build a record timestamped now
    pub fn new(name: String, score: ScoreValue) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            name,
            score,
        }
    }

    /// Parse a raw submission body into a record timestamped now.
    ///
    /// The body must be well-formed JSON; anything inside it is accepted.
    pub fn from_submission(body: &[u8]) -> Result<Self, serde_json::Error> {
        let data: Value = serde_json::from_slice(body)?;

        let name = match data.get("name") {
            None => UNKNOWN_NAME.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let score = data
            .get("score")
            .map(ScoreValue::from)
            .unwrap_or_else(ScoreValue::zero);

        Ok(Self::new(name, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDateTime;

    #[test]
    fn test_full_submission() {
        let record = ScoreRecord::from_submission(br#"{"name":"Ada","score":42}"#).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.score.to_string(), "42");
    }

    #[test]
    fn test_empty_submission_uses_defaults() {
        let record = ScoreRecord::from_submission(b"{}").unwrap();
        assert_eq!(record.name, UNKNOWN_NAME);
        assert_eq!(record.score, ScoreValue::zero());
        assert_eq!(record.score.to_string(), "0");
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(ScoreRecord::from_submission(b"not json").is_err());
    }

    #[test]
    fn test_timestamp_format() {
        let record = ScoreRecord::new("Ada".to_string(), ScoreValue::zero());
        assert!(NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_score_value_stays_tagged() {
        let record = ScoreRecord::from_submission(br#"{"score":"over9000"}"#).unwrap();
        assert_matches!(record.score, ScoreValue::Text(ref s) if s == "over9000");

        let record = ScoreRecord::from_submission(br#"{"score":null}"#).unwrap();
        assert_matches!(record.score, ScoreValue::Null);
        assert_eq!(record.score.to_string(), "");

        let record = ScoreRecord::from_submission(br#"{"score":3.5}"#).unwrap();
        assert_eq!(record.score.to_string(), "3.5");
    }

    #[test]
    fn test_non_scalar_score_persists_as_json_text() {
        let record = ScoreRecord::from_submission(br#"{"score":[1,2]}"#).unwrap();
        assert_matches!(record.score, ScoreValue::Text(ref s) if s == "[1,2]");
    }

    #[test]
    fn test_non_string_name_persists_as_json_text() {
        let record = ScoreRecord::from_submission(br#"{"name":42}"#).unwrap();
        assert_eq!(record.name, "42");
    }
}
