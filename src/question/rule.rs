//! Branch rule structures

use crate::condition::Condition;
use crate::idgen::RuleIdGenerator;
use crate::question::definition::QuestionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique branch rule identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a matched rule sends the respondent: a specific question, or the
/// distinguished end-of-form marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BranchTarget {
    Question { id: QuestionId },
    End,
}

/// Branch rule for conditional jumps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRule {
    pub id: RuleId,
    pub condition: Condition,
    pub target: BranchTarget,
}

impl BranchRule {
    /// Create a rule with an id drawn from the injected generator.
    pub fn new(
        condition: Condition,
        target: BranchTarget,
        ids: &mut dyn RuleIdGenerator,
    ) -> Self {
        Self {
            id: ids.next_id(),
            condition,
            target,
        }
    }
}
