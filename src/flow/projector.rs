//! Path projection
//!
//! Simulates the traversal a respondent would take under the current
//! answers, for progress display. The graph is author-entered and may be
//! cyclic or dangling, so the walk is bounded: a visited set catches
//! revisits and an iteration cap of twice the list length bounds the rest.
//! The result is the longest well-formed prefix, never an error.

use crate::answer::AnswerMap;
use crate::flow::resolver::{resolve_next, NextStep};
use crate::form::Form;
use crate::question::{Question, QuestionId};
use ahash::AHashSet;

/// Project the anticipated question path from `start` (default: the first
/// question). Always terminates in O(form length) steps.
pub fn project_path<'a>(
    form: &'a Form,
    answers: &AnswerMap,
    start: Option<&QuestionId>,
) -> Vec<&'a Question> {
    if form.is_empty() {
        return Vec::new();
    }

    let mut path: Vec<&Question> = Vec::new();
    let mut visited: AHashSet<&QuestionId> = AHashSet::with_capacity(form.len());
    let step_cap = form.len() * 2;
    let mut steps = 0;

    let mut cursor = match start {
        Some(id) => Some(id.clone()),
        None => form.questions().first().map(|question| question.id.clone()),
    };

    loop {
        let Some(id) = cursor else {
            break; // reached END
        };
        if steps >= step_cap {
            break;
        }
        steps += 1;

        let Some(question) = form.get(&id) else {
            break; // dangling id
        };
        if !visited.insert(&question.id) {
            break; // cycle
        }
        path.push(question);

        cursor = match resolve_next(question, form, answers) {
            NextStep::Question(next) => Some(next),
            NextStep::End => None,
        };
    }

    path
}
