use crate::error::{DocsError, Result};
use arboard::Clipboard;

/// Write-only access to a clipboard.
///
/// Code blocks only ever push text out; nothing in the docs reads the
/// clipboard back.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The system clipboard, opened fresh for every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().map_err(|e| DocsError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| DocsError::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ClipboardWriter;
    use crate::error::{DocsError, Result};
    use std::sync::{Arc, Mutex};

    /// Records every write; optionally refuses them.
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        writes: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl RecordingClipboard {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(DocsError::Clipboard("no display available".to_string()));
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
