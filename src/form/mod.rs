//! Index-addressed question arena
//!
//! The question graph is author-entered and may contain dangling ids,
//! backward references, and cycles, so questions live in an ordered list
//! with an id-to-index side table instead of linked references: O(1) id
//! lookup, and a dangling target is just a failed lookup.

mod queries;

pub use queries::*;

use crate::error::Result;
use crate::question::{questions_from_json, Question, QuestionId};
use ahash::AHashMap;

/// Ordered question list plus id-to-index lookup
#[derive(Debug, Clone, Default)]
pub struct Form {
    questions: Vec<Question>,
    index: AHashMap<QuestionId, usize>,
}

impl Form {
    /// Build the arena. Question ids are unique by convention; on violation
    /// the first occurrence wins and later duplicates are unreachable by id.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut index = AHashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            index.entry(question.id.clone()).or_insert(position);
        }
        Self { questions, index }
    }

    /// Build the arena from the JSON wire form of a question list.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(Self::new(questions_from_json(raw)?))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[inline]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    #[inline]
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The question immediately following `id` in list order.
    pub fn following(&self, id: &QuestionId) -> Option<&Question> {
        self.position(id)
            .and_then(|position| self.questions.get(position + 1))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl From<Vec<Question>> for Form {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
