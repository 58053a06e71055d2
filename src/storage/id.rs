use crate::core::RecordId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// How fresh record ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdStrategy {
    /// 1, 2, 3, ... starting at `start`
    Sequential { start: RecordId },
    /// Milliseconds since the Unix epoch, bumped when two ids land in the same millisecond
    Timestamp,
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::Sequential { start: 1 }
    }
}

/// Hands out strictly increasing ids.
///
/// Ids already present in a collection are reported through [`IdGenerator::observe`]
/// so a fresh id can never collide with one of them.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last: Option<RecordId>,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last: None,
        }
    }

    pub fn next_id(&mut self) -> RecordId {
        let floor = self.last.map(|last| last.saturating_add(1));
        let candidate = match self.strategy {
            IdStrategy::Sequential { start } => start,
            IdStrategy::Timestamp => Utc::now().timestamp_millis(),
        };

        let id = floor.map_or(candidate, |floor| candidate.max(floor));
        self.last = Some(id);
        id
    }

    pub fn observe(&mut self, id: RecordId) {
        self.last = Some(self.last.map_or(id, |last| last.max(id)));
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
