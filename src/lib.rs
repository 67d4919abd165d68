//! Form Flow Core - conditional branching engine for form builders
//!
//! Given an ordered question list, per-question branch rules, and the
//! answers collected so far, this crate decides which question to show next
//! and projects the anticipated traversal path for progress display.
//!
//! The question graph is author-entered: target ids may dangle, references
//! may point backward, and cycles are possible. Every operation here is
//! pure, synchronous, and total — malformed input degrades to a best-effort
//! answer (false, [`NextStep::End`], or a truncated path) instead of
//! failing, because the engine runs inside an interactive rendering loop
//! where throwing is strictly worse than answering.
//!
//! ```
//! use form_flow_core::{project_path, resolve_next, Form, NextStep};
//!
//! let form = Form::from_json(r#"[
//!     {"id": "color", "type": "dropdown", "title": "Favorite color?",
//!      "options": ["Red", "Blue"],
//!      "rules": [{"id": "r1",
//!                 "condition": {"source": "color", "operator": "equals", "value": "Red"},
//!                 "target": {"type": "question", "id": "details"}}]},
//!     {"id": "rating", "type": "rating", "title": "Rate us"},
//!     {"id": "details", "type": "long_text", "title": "Tell us more"}
//! ]"#).unwrap();
//! let answers = form_flow_core::answers_from_json(r#"{"color": "Red"}"#).unwrap();
//!
//! let first = form.questions().first().unwrap();
//! assert_eq!(resolve_next(first, &form, &answers), NextStep::Question("details".into()));
//! assert_eq!(project_path(&form, &answers, None).len(), 2);
//! ```

pub mod answer;
pub mod condition;
pub mod error;
pub mod flow;
pub mod form;
pub mod idgen;
pub mod question;

pub use answer::{answers_from_json, canonicalize, AnswerMap, CanonicalAnswer};
pub use condition::{evaluate, Condition, ConditionOperator, ConditionValue};
pub use error::{FormFlowError, Result};
pub use flow::{project_path, resolve_next, NextStep};
pub use form::{question_values, Form};
pub use idgen::{RandomIds, RuleIdGenerator, SequentialIds};
pub use question::{
    questions_from_json, BranchRule, BranchTarget, DefaultNext, Question, QuestionId,
    QuestionType, RuleId,
};
