use crate::error::{Result, SpecError};
use crate::lookup;
use crate::types::SpecId;
use std::path::PathBuf;

/// Computes the next spec id from the directories already under the root.
///
/// Only the current maximum is considered, so ids freed by deleted
/// directories are never handed out again. There is no reservation: two
/// processes allocating at once can receive the same id.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    specs_root: PathBuf,
}

impl IdAllocator {
    pub fn new(specs_root: impl Into<PathBuf>) -> Self {
        Self {
            specs_root: specs_root.into(),
        }
    }

    /// Highest id present, if any.
    pub fn current_max(&self) -> Result<Option<SpecId>> {
        Ok(lookup::list(&self.specs_root)?.into_iter().map(|e| e.id).max())
    }

    pub fn next_id(&self) -> Result<SpecId> {
        let next = match self.current_max()? {
            None => SpecId::FIRST,
            Some(max) => max
                .next()
                .ok_or_else(|| SpecError::IdSpaceExhausted(max.to_string()))?,
        };
        tracing::debug!(root = %self.specs_root.display(), id = %next, "allocated spec id");
        Ok(next)
    }
}
