//! Question definition structures

use crate::question::rule::BranchRule;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque unique question identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Question kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortText,
    LongText,
    Email,
    PhoneNumber,
    Website,
    Date,
    Dropdown,
    MultipleChoice,
    Checkboxes,
    YesNo,
    Rating,
    OpinionScale,
}

impl QuestionType {
    /// Whether answers to this kind come from a small enumerable set
    /// (choice-like, boolean-like, or a bounded numeric scale). Only such
    /// questions can serve as condition sources.
    pub fn has_enumerable_answers(self) -> bool {
        matches!(
            self,
            QuestionType::Dropdown
                | QuestionType::MultipleChoice
                | QuestionType::Checkboxes
                | QuestionType::YesNo
                | QuestionType::Rating
                | QuestionType::OpinionScale
        )
    }
}

/// Fallback target used when no branch rule matches.
///
/// Three distinguishable states: a missing field deserializes to
/// `NotConfigured`, which falls back to structural list order at resolution
/// time. `End` and `Question` are explicit author choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DefaultNext {
    #[default]
    NotConfigured,
    End,
    Question { id: QuestionId },
}

impl DefaultNext {
    pub fn is_configured(&self) -> bool {
        !matches!(self, DefaultNext::NotConfigured)
    }
}

/// Question configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub title: String,
    /// Option list for choice-like kinds; empty otherwise.
    #[serde(default)]
    pub options: Vec<String>,
    /// Scale bounds for the bounded-numeric kinds.
    #[serde(default)]
    pub min: Option<i32>,
    #[serde(default)]
    pub max: Option<i32>,
    /// Branch rules, evaluated in declared order (first match wins).
    #[serde(default)]
    pub rules: Vec<BranchRule>,
    #[serde(default)]
    pub default_next: DefaultNext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_next_deserialization_states() {
        let absent: Question =
            serde_json::from_str(r#"{"id": "q1", "type": "short_text"}"#).unwrap();
        assert_eq!(absent.default_next, DefaultNext::NotConfigured);
        assert!(!absent.default_next.is_configured());

        let end: Question = serde_json::from_str(
            r#"{"id": "q1", "type": "short_text", "default_next": {"type": "end"}}"#,
        )
        .unwrap();
        assert_eq!(end.default_next, DefaultNext::End);

        let goto: Question = serde_json::from_str(
            r#"{"id": "q1", "type": "short_text", "default_next": {"type": "question", "id": "q7"}}"#,
        )
        .unwrap();
        assert_eq!(
            goto.default_next,
            DefaultNext::Question { id: "q7".into() }
        );
        assert!(goto.default_next.is_configured());
    }

    #[test]
    fn test_enumerable_answer_kinds() {
        assert!(QuestionType::Dropdown.has_enumerable_answers());
        assert!(QuestionType::YesNo.has_enumerable_answers());
        assert!(QuestionType::Rating.has_enumerable_answers());
        assert!(!QuestionType::ShortText.has_enumerable_answers());
        assert!(!QuestionType::Date.has_enumerable_answers());
    }

    #[test]
    fn test_question_id_lookup_by_str() {
        use std::collections::HashMap;

        let mut map: HashMap<QuestionId, i32> = HashMap::new();
        map.insert("q1".into(), 1);
        assert_eq!(map.get("q1"), Some(&1));
    }
}
