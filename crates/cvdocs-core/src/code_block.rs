use crate::clipboard::ClipboardWriter;
use crate::context::DocsContext;
use crate::snippet::{SnippetSet, Variant};
use crate::timer::{lock, TimerSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct CopyState {
    copied: bool,
    // Bumped on every copy so only the newest revert applies.
    generation: u64,
}

/// A rendered snippet: the selected tab plus the "copied" confirmation.
///
/// The confirmation belongs to the block, not to a tab. It turns on when a
/// copy succeeds and turns off one feedback window after the most recent
/// copy.
pub struct CodeBlock {
    snippet: SnippetSet,
    selected: Option<usize>,
    copy_state: Arc<Mutex<CopyState>>,
    copy_feedback: Duration,
    clipboard: Arc<dyn ClipboardWriter>,
    timers: TimerSet,
}

impl CodeBlock {
    pub fn new(ctx: &DocsContext, snippet: SnippetSet) -> Self {
        Self {
            selected: snippet.default_tab(),
            snippet,
            copy_state: Arc::new(Mutex::new(CopyState::default())),
            copy_feedback: ctx.config().copy_feedback(),
            clipboard: ctx.clipboard(),
            timers: TimerSet::new(ctx.runtime().clone()),
        }
    }

    pub fn snippet(&self) -> &SnippetSet {
        &self.snippet
    }

    /// Swap in new content, keeping the copy confirmation and, when it still
    /// exists, the selected tab.
    pub fn update_snippet(&mut self, snippet: SnippetSet) {
        if self.snippet == snippet {
            return;
        }
        self.selected = match self.selected {
            Some(index) if index < snippet.len() => Some(index),
            _ => snippet.default_tab(),
        };
        self.snippet = snippet;
    }

    pub fn selected_tab(&self) -> Option<usize> {
        self.selected
    }

    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.snippet.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn select_language(&mut self, language: &str) -> bool {
        match self.snippet.position(language) {
            Some(index) => self.select_tab(index),
            None => false,
        }
    }

    pub fn next_tab(&mut self) {
        let len = self.snippet.len();
        if let Some(index) = self.selected {
            self.selected = Some((index + 1) % len);
        }
    }

    pub fn previous_tab(&mut self) {
        let len = self.snippet.len();
        if let Some(index) = self.selected {
            self.selected = Some((index + len - 1) % len);
        }
    }

    pub fn visible(&self) -> Option<Variant<'_>> {
        self.selected.and_then(|index| self.snippet.variant(index))
    }

    pub fn visible_code(&self) -> Option<&str> {
        self.visible().map(|variant| variant.code)
    }

    /// Copy the visible variant. Returns whether the clipboard accepted it.
    ///
    /// A failed write leaves the confirmation untouched.
    pub fn copy_visible(&mut self) -> bool {
        let Some(code) = self.visible_code() else {
            tracing::debug!("nothing visible to copy");
            return false;
        };

        if let Err(err) = self.clipboard.write_text(code) {
            tracing::warn!(error = %err, "copy to clipboard failed");
            return false;
        }

        let generation = {
            let mut state = lock(&self.copy_state);
            state.copied = true;
            state.generation += 1;
            state.generation
        };
        tracing::debug!(generation, "snippet copied");

        self.timers
            .schedule(self.copy_feedback, &self.copy_state, move |state| {
                if state.generation == generation {
                    state.copied = false;
                }
            });
        true
    }

    pub fn is_copied(&self) -> bool {
        lock(&self.copy_state).copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::config::DocsConfig;
    use crate::timer::testing::advance;
    use tokio::runtime::Handle;

    fn context(clipboard: &RecordingClipboard) -> DocsContext {
        DocsContext::new(
            DocsConfig::default(),
            Handle::current(),
            Arc::new(clipboard.clone()),
        )
    }

    fn client_init() -> SnippetSet {
        SnippetSet::multi([
            ("javascript", "const client = new Client();"),
            ("python", "client = Client()"),
            ("curl", "curl -X POST /auth/token"),
        ])
        .with_title("Client Initialization")
    }

    #[tokio::test]
    async fn first_variant_is_visible_by_default() {
        let clipboard = RecordingClipboard::default();
        let block = CodeBlock::new(&context(&clipboard), client_init());

        assert_eq!(block.selected_tab(), Some(0));
        assert_eq!(block.visible().unwrap().language, "javascript");
        assert!(!block.is_copied());
    }

    #[tokio::test]
    async fn copy_takes_the_tab_selected_just_before() {
        let clipboard = RecordingClipboard::default();
        let mut block = CodeBlock::new(&context(&clipboard), client_init());

        assert!(block.select_language("python"));
        assert!(block.copy_visible());
        block.next_tab();
        assert!(block.copy_visible());

        assert_eq!(
            clipboard.writes(),
            ["client = Client()", "curl -X POST /auth/token"]
        );
    }

    #[tokio::test]
    async fn tab_navigation_wraps() {
        let clipboard = RecordingClipboard::default();
        let mut block = CodeBlock::new(&context(&clipboard), client_init());

        block.previous_tab();
        assert_eq!(block.selected_tab(), Some(2));
        block.next_tab();
        assert_eq!(block.selected_tab(), Some(0));
        assert!(!block.select_tab(3));
        assert!(!block.select_language("rust"));
        assert_eq!(block.selected_tab(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn confirmation_lasts_exactly_the_feedback_window() {
        let clipboard = RecordingClipboard::default();
        let mut block = CodeBlock::new(&context(&clipboard), SnippetSet::single("{}", "json"));

        assert!(block.copy_visible());
        assert!(block.is_copied());

        advance(1999).await;
        assert!(block.is_copied());

        advance(1).await;
        assert!(!block.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn copying_again_restarts_the_window() {
        let clipboard = RecordingClipboard::default();
        let mut block = CodeBlock::new(&context(&clipboard), SnippetSet::single("{}", "json"));

        block.copy_visible();
        advance(1500).await;
        block.copy_visible();

        // The first revert comes due here but is stale.
        advance(500).await;
        assert!(block.is_copied());

        advance(1500).await;
        assert!(!block.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_copy_changes_nothing() {
        let clipboard = RecordingClipboard::failing();
        let mut block = CodeBlock::new(&context(&clipboard), SnippetSet::single("{}", "json"));

        assert!(!block.copy_visible());
        assert!(!block.is_copied());
        assert_eq!(block.timers.outstanding(), 0);
    }

    #[tokio::test]
    async fn empty_block_copies_nothing() {
        let clipboard = RecordingClipboard::default();
        let empty = SnippetSet::multi(Vec::<(String, String)>::new());
        let mut block = CodeBlock::new(&context(&clipboard), empty);

        assert_eq!(block.visible_code(), None);
        assert!(!block.copy_visible());
        block.next_tab();
        assert!(clipboard.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn new_content_keeps_confirmation_and_clamps_selection() {
        let clipboard = RecordingClipboard::default();
        let mut block = CodeBlock::new(&context(&clipboard), client_init());

        block.select_tab(2);
        block.copy_visible();
        block.update_snippet(SnippetSet::single("curl -X GET", "bash"));

        assert_eq!(block.selected_tab(), Some(0));
        assert_eq!(block.visible_code(), Some("curl -X GET"));
        assert!(block.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_a_block_mid_window_is_quiet() {
        let clipboard = RecordingClipboard::default();
        let mut block = CodeBlock::new(&context(&clipboard), SnippetSet::single("{}", "json"));
        block.copy_visible();
        let state = Arc::downgrade(&block.copy_state);

        drop(block);
        advance(2500).await;
        assert!(state.upgrade().is_none());
    }
}
