//! Canonical answer forms
//!
//! Condition evaluation compares string-converted values. The conversion is
//! pinned down here in one place instead of relying on ambient coercion:
//! strings pass through, numbers and booleans take their display form
//! ("7", "true"), list elements convert element-wise with non-scalar
//! elements skipped, and anything else counts as no answer.

use serde_json::Value;
use smallvec::SmallVec;

/// A raw answer reduced to the shape the evaluator works on.
///
/// A missing map key and an explicit JSON null both canonicalize to
/// `Missing`. List answers keep their element order; respondents rarely
/// select more than a handful of options, hence the inline capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalAnswer {
    Missing,
    Scalar(String),
    List(SmallVec<[String; 4]>),
}

/// Reduce a raw answer value to its canonical form.
#[inline]
pub fn canonicalize(raw: Option<&Value>) -> CanonicalAnswer {
    match raw {
        None | Some(Value::Null) => CanonicalAnswer::Missing,
        Some(Value::Array(items)) => {
            CanonicalAnswer::List(items.iter().filter_map(scalar_text).collect())
        }
        Some(value) => match scalar_text(value) {
            Some(text) => CanonicalAnswer::Scalar(text),
            None => CanonicalAnswer::Missing,
        },
    }
}

/// String form of a scalar primitive; `None` for null, arrays, and objects.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
