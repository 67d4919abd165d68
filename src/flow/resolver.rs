//! Next-question resolution

use crate::answer::AnswerMap;
use crate::condition::evaluate;
use crate::form::Form;
use crate::question::{BranchTarget, DefaultNext, Question, QuestionId};

/// Resolution outcome: the next question to show, or the end of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    Question(QuestionId),
    End,
}

impl NextStep {
    pub fn is_end(&self) -> bool {
        matches!(self, NextStep::End)
    }

    pub fn question_id(&self) -> Option<&QuestionId> {
        match self {
            NextStep::Question(id) => Some(id),
            NextStep::End => None,
        }
    }
}

/// Pick the next step after `question` under the given answers.
///
/// Precedence, first match wins: branch rules in declared order, then an
/// explicitly configured default-next, then structural list order (End for
/// the last question). The returned id is not checked for existence —
/// dangling targets are the caller's concern.
pub fn resolve_next(question: &Question, form: &Form, answers: &AnswerMap) -> NextStep {
    for rule in &question.rules {
        if evaluate(&rule.condition, answers) {
            return match &rule.target {
                BranchTarget::Question { id } => NextStep::Question(id.clone()),
                BranchTarget::End => NextStep::End,
            };
        }
    }

    match &question.default_next {
        DefaultNext::Question { id } => NextStep::Question(id.clone()),
        DefaultNext::End => NextStep::End,
        DefaultNext::NotConfigured => form
            .following(&question.id)
            .map(|next| NextStep::Question(next.id.clone()))
            .unwrap_or(NextStep::End),
    }
}
