//! Rule id generation
//!
//! New-rule ids come from an injected capability rather than ambient
//! randomness, so authoring flows stay deterministic under test while the
//! editor keeps collision-resistant ids in production.

use crate::question::RuleId;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated random rule ids
const RANDOM_ID_LEN: usize = 8;

/// Source of fresh branch rule ids
pub trait RuleIdGenerator {
    fn next_id(&mut self) -> RuleId;
}

/// Deterministic counter-based ids: `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl RuleIdGenerator for SequentialIds {
    fn next_id(&mut self) -> RuleId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        RuleId::from(id)
    }
}

/// Random alphanumeric ids for interactive authoring
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl RuleIdGenerator for RandomIds {
    fn next_id(&mut self) -> RuleId {
        let mut rng = rand::thread_rng();
        let id: String = (0..RANDOM_ID_LEN)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();
        RuleId::from(id)
    }
}
