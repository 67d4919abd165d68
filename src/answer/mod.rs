//! Answer map and canonicalization
//!
//! Answers arrive from the form runtime keyed by question id, each value a
//! scalar primitive or a list of primitives. The map is read-only here; the
//! engine owns no response state.

mod canonical;


pub use canonical::*;

use crate::error::{FormFlowError, Result};
use crate::question::QuestionId;
use ahash::AHashMap;
use serde_json::Value;

/// Collected answers keyed by question id
pub type AnswerMap = AHashMap<QuestionId, Value>;

/// Deserialize an answer map from its JSON wire form.
pub fn answers_from_json(raw: &str) -> Result<AnswerMap> {
    serde_json::from_str(raw).map_err(FormFlowError::InvalidAnswers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answers_from_json() {
        let map = answers_from_json(r#"{"q1": "Red", "q2": ["a", "b"], "q3": 4}"#).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("q1"), Some(&json!("Red")));
        assert_eq!(map.get("q3"), Some(&json!(4)));
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        let result = answers_from_json(r#"["not", "a", "map"]"#);
        assert!(matches!(result, Err(FormFlowError::InvalidAnswers(_))));
    }
}
