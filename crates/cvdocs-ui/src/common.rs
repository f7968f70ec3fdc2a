use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A help line such as `F1: Quick Start  c: Copy`.
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {}  ", action)));
    }
    Line::from(spans)
}

pub fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use cvdocs_core::{ClipboardWriter, DocsConfig, DocsContext, Result};
    use ratatui::buffer::Buffer;
    use std::sync::{Arc, Mutex};
    use tokio::runtime::Handle;

    #[derive(Clone, Default)]
    pub struct RecordingClipboard(pub Arc<Mutex<Vec<String>>>);

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    pub fn context(clipboard: &RecordingClipboard) -> DocsContext {
        DocsContext::new(
            DocsConfig::default(),
            Handle::current(),
            Arc::new(clipboard.clone()),
        )
    }

    /// The buffer as one string per row.
    pub fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub fn contains(buffer: &Buffer, needle: &str) -> bool {
        rows(buffer).iter().any(|row| row.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_hints_alternate_key_and_action() {
        let line = key_hints(&[("c", "Copy"), ("Esc", "Exit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "c: Copy  Esc: Exit  ");
    }
}
