//! Condition data structures

use crate::question::QuestionId;
use serde::{Deserialize, Serialize};

/// Comparison operators
///
/// The catch-all `Unknown` variant absorbs any operator name this engine
/// does not recognize; such conditions always evaluate to false instead of
/// failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    In,
    #[serde(other)]
    Unknown,
}

/// Configured comparison value: a single string, or a list of strings for
/// the `in` operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    One(String),
    Many(Vec<String>),
}

/// Predicate comparing a referenced question's answer to a configured value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Question whose answer is inspected. By convention this precedes the
    /// rule's owning question in the list, but nothing depends on it.
    pub source: QuestionId,
    pub operator: ConditionOperator,
    pub value: ConditionValue,
}
