//! Condition evaluator

use crate::answer::{canonicalize, AnswerMap, CanonicalAnswer};
use crate::condition::types::{Condition, ConditionOperator, ConditionValue};

/// Evaluate a condition against the collected answers.
///
/// Total over every input shape: a missing or null answer, a malformed
/// value, or an unrecognized operator all evaluate to false rather than
/// erroring. Comparisons run on the canonical string form of the answer.
#[inline]
pub fn evaluate(condition: &Condition, answers: &AnswerMap) -> bool {
    let answer = canonicalize(answers.get(&condition.source));
    if matches!(answer, CanonicalAnswer::Missing) {
        return false;
    }

    match condition.operator {
        ConditionOperator::Equals => matches_value(&answer, &condition.value),
        ConditionOperator::NotEquals => !matches_value(&answer, &condition.value),
        ConditionOperator::Contains => contains_text(&answer, &condition.value),
        ConditionOperator::In => in_list(&answer, &condition.value),
        ConditionOperator::Unknown => false,
    }
}

/// Membership test for list answers, string equality for scalar answers.
/// `not_equals` is the exact negation of this test — for a list answer that
/// means "the condition value is not a member", not full-list inequality.
fn matches_value(answer: &CanonicalAnswer, value: &ConditionValue) -> bool {
    match (answer, value) {
        (CanonicalAnswer::Scalar(text), ConditionValue::One(expected)) => text == expected,
        (CanonicalAnswer::List(items), ConditionValue::One(expected)) => {
            items.iter().any(|item| item == expected)
        }
        // A list-valued condition value never equals a single answer slot.
        (_, ConditionValue::Many(_)) => false,
        (CanonicalAnswer::Missing, _) => false,
    }
}

/// Case-insensitive substring test; any element may match for list answers.
fn contains_text(answer: &CanonicalAnswer, value: &ConditionValue) -> bool {
    let ConditionValue::One(needle) = value else {
        return false;
    };
    let needle = needle.to_lowercase();

    match answer {
        CanonicalAnswer::Scalar(text) => text.to_lowercase().contains(&needle),
        CanonicalAnswer::List(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(&needle)),
        CanonicalAnswer::Missing => false,
    }
}

/// The condition value must already be a list; a scalar condition value is
/// a configuration mistake and yields false.
fn in_list(answer: &CanonicalAnswer, value: &ConditionValue) -> bool {
    let ConditionValue::Many(allowed) = value else {
        return false;
    };

    match answer {
        CanonicalAnswer::Scalar(text) => allowed.iter().any(|candidate| candidate == text),
        CanonicalAnswer::List(items) => items
            .iter()
            .any(|item| allowed.iter().any(|candidate| candidate == item)),
        CanonicalAnswer::Missing => false,
    }
}
