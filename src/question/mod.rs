//! Question and branch rule data model
//!
//! Questions, rules, and answers are authored and mutated by an external
//! editor component; this crate only reads them. The loaders here are the
//! crate's single fallible boundary — everything past deserialization
//! degrades gracefully instead of erroring.

mod definition;
mod rule;

pub use definition::*;
pub use rule::*;

use crate::error::{FormFlowError, Result};

/// Deserialize an ordered question list from its JSON wire form.
pub fn questions_from_json(raw: &str) -> Result<Vec<Question>> {
    serde_json::from_str(raw).map_err(FormFlowError::InvalidDefinition)
}
