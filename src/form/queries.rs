//! Eligibility and value queries for the authoring surface

use crate::form::Form;
use crate::question::{Question, QuestionId, QuestionType};

/// Default inclusive range for rating questions
const RATING_RANGE: (i32, i32) = (1, 5);
/// Default inclusive range for opinion scale questions
const OPINION_SCALE_RANGE: (i32, i32) = (1, 10);

impl Form {
    /// Questions eligible as condition sources for `id`: strictly before it
    /// in list order, restricted to kinds with a small enumerable answer
    /// space. Empty if `id` is first or unknown.
    pub fn conditionable_sources(&self, id: &QuestionId) -> Vec<&Question> {
        let Some(position) = self.position(id) else {
            return Vec::new();
        };
        self.questions()[..position]
            .iter()
            .filter(|question| question.kind.has_enumerable_answers())
            .collect()
    }

    /// Questions eligible as branch targets for `id`: everything strictly
    /// after it in list order, any kind. Empty if `id` is unknown.
    pub fn branch_targets(&self, id: &QuestionId) -> Vec<&Question> {
        let Some(position) = self.position(id) else {
            return Vec::new();
        };
        self.questions()[position + 1..].iter().collect()
    }
}

/// Discrete answers a question can produce, for use as condition values:
/// the option list for choice kinds, the fixed Yes/No pair, or the inclusive
/// integer range of a bounded scale. Empty for free-form kinds.
pub fn question_values(question: &Question) -> Vec<String> {
    match question.kind {
        QuestionType::Dropdown | QuestionType::MultipleChoice | QuestionType::Checkboxes => {
            question.options.clone()
        }
        QuestionType::YesNo => vec!["Yes".to_string(), "No".to_string()],
        QuestionType::Rating => scale_values(question, RATING_RANGE),
        QuestionType::OpinionScale => scale_values(question, OPINION_SCALE_RANGE),
        _ => Vec::new(),
    }
}

fn scale_values(question: &Question, defaults: (i32, i32)) -> Vec<String> {
    let min = question.min.unwrap_or(defaults.0);
    let max = question.max.unwrap_or(defaults.1);
    // An inverted range degrades to empty rather than erroring.
    (min..=max).map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::DefaultNext;

    fn question(id: &str, kind: QuestionType) -> Question {
        Question {
            id: id.into(),
            kind,
            title: String::new(),
            options: Vec::new(),
            min: None,
            max: None,
            rules: Vec::new(),
            default_next: DefaultNext::NotConfigured,
        }
    }

    fn sample_form() -> Form {
        Form::new(vec![
            question("q1", QuestionType::Dropdown),
            question("q2", QuestionType::ShortText),
            question("q3", QuestionType::YesNo),
            question("q4", QuestionType::LongText),
        ])
    }

    #[test]
    fn test_first_question_has_no_sources() {
        let form = sample_form();
        assert!(form.conditionable_sources(&"q1".into()).is_empty());
    }

    #[test]
    fn test_sources_are_prior_enumerable_questions() {
        let form = sample_form();
        let sources = form.conditionable_sources(&"q4".into());
        let ids: Vec<&str> = sources.iter().map(|q| q.id.as_str()).collect();
        // q2 is free-form and filtered out.
        assert_eq!(ids, ["q1", "q3"]);
    }

    #[test]
    fn test_unknown_question_has_no_sources_or_targets() {
        let form = sample_form();
        assert!(form.conditionable_sources(&"nope".into()).is_empty());
        assert!(form.branch_targets(&"nope".into()).is_empty());
    }

    #[test]
    fn test_targets_are_everything_after() {
        let form = sample_form();
        let targets = form.branch_targets(&"q2".into());
        let ids: Vec<&str> = targets.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["q3", "q4"]);

        assert!(form.branch_targets(&"q4".into()).is_empty());
    }

    #[test]
    fn test_choice_values_are_the_option_list() {
        let mut q = question("q1", QuestionType::Dropdown);
        q.options = vec!["Red".to_string(), "Blue".to_string()];
        assert_eq!(question_values(&q), ["Red", "Blue"]);
    }

    #[test]
    fn test_yes_no_values() {
        let q = question("q1", QuestionType::YesNo);
        assert_eq!(question_values(&q), ["Yes", "No"]);
    }

    #[test]
    fn test_rating_defaults_to_one_through_five() {
        let q = question("q1", QuestionType::Rating);
        assert_eq!(question_values(&q), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_opinion_scale_defaults_to_one_through_ten() {
        let q = question("q1", QuestionType::OpinionScale);
        assert_eq!(question_values(&q).len(), 10);
        assert_eq!(question_values(&q).last().map(String::as_str), Some("10"));
    }

    #[test]
    fn test_configured_bounds_override_defaults() {
        let mut q = question("q1", QuestionType::Rating);
        q.min = Some(1);
        q.max = Some(5);
        assert_eq!(question_values(&q), ["1", "2", "3", "4", "5"]);

        q.min = Some(3);
        q.max = Some(4);
        assert_eq!(question_values(&q), ["3", "4"]);
    }

    #[test]
    fn test_inverted_bounds_degrade_to_empty() {
        let mut q = question("q1", QuestionType::OpinionScale);
        q.min = Some(9);
        q.max = Some(2);
        assert!(question_values(&q).is_empty());
    }

    #[test]
    fn test_free_form_kinds_have_no_values() {
        for kind in [
            QuestionType::ShortText,
            QuestionType::LongText,
            QuestionType::Email,
            QuestionType::PhoneNumber,
            QuestionType::Website,
            QuestionType::Date,
        ] {
            assert!(question_values(&question("q1", kind)).is_empty());
        }
    }
}
