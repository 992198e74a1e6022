use tracing::debug;

use super::{ContentCacheUpdate, UpdateStatus};
use crate::content::WritableContentCache;

/// Runs child updates in order and stops at the first failure.
pub struct CompositeUpdate {
    name: String,
    updates: Vec<Box<dyn ContentCacheUpdate>>,
    complete: bool,
    status: UpdateStatus,
}

impl CompositeUpdate {
    /// An incremental composite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updates: Vec::new(),
            complete: false,
            status: UpdateStatus::default(),
        }
    }

    /// A composite whose result replaces the whole cache.
    pub fn complete(name: impl Into<String>) -> Self {
        Self {
            complete: true,
            ..Self::new(name)
        }
    }

    pub fn with(mut self, update: impl ContentCacheUpdate + 'static) -> Self {
        self.updates.push(Box::new(update));
        self
    }

    pub fn push(&mut self, update: Box<dyn ContentCacheUpdate>) {
        self.updates.push(update);
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

impl ContentCacheUpdate for CompositeUpdate {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, cache: &mut dyn WritableContentCache) {
        for update in &mut self.updates {
            update.execute(cache);
            if let Some(cause) = update.failure_cause() {
                debug!(
                    composite = %self.name,
                    update = update.name(),
                    "Child update failed, skipping the rest"
                );
                self.status.fail(cause.clone());
                return;
            }
        }
    }

    fn status(&self) -> &UpdateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut UpdateStatus {
        &mut self.status
    }

    /// Also resets every child.
    fn reset(&mut self) {
        self.status.reset();
        for update in &mut self.updates {
            update.reset();
        }
    }

    fn is_complete_update(&self) -> bool {
        self.complete
    }
}
