use crate::clipboard::ClipboardWriter;
use crate::config::DocsConfig;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Everything a component needs from its surroundings.
///
/// Built once at startup and handed to each component when it is created;
/// components keep what they need and never reach for globals. Dropping the
/// last component and the context is the whole shutdown story.
#[derive(Clone)]
pub struct DocsContext {
    config: Arc<DocsConfig>,
    runtime: Handle,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl DocsContext {
    pub fn new(config: DocsConfig, runtime: Handle, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            config: Arc::new(config),
            runtime,
            clipboard,
        }
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Runtime that drives component timers.
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn clipboard(&self) -> Arc<dyn ClipboardWriter> {
        Arc::clone(&self.clipboard)
    }
}
