use crate::common::focus_style;
use crossterm::event::KeyCode;
use cvdocs_core::{CodeBlock, DocsContext, SnippetSet};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// A [`CodeBlock`] plus the scroll position of its code region.
pub struct CodeBlockView {
    block: CodeBlock,
    scroll_x: u16,
    scroll_y: u16,
}

impl CodeBlockView {
    pub fn new(ctx: &DocsContext, snippet: SnippetSet) -> Self {
        Self {
            block: CodeBlock::new(ctx, snippet),
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn block(&self) -> &CodeBlock {
        &self.block
    }

    pub fn update_snippet(&mut self, snippet: SnippetSet) {
        self.block.update_snippet(snippet);
    }

    pub fn copy_visible(&mut self) -> bool {
        self.block.copy_visible()
    }

    /// Tab switching, scrolling and copy. Returns whether the key was used.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Left => self.switch_tab(|block| block.previous_tab()),
            KeyCode::Right => self.switch_tab(|block| block.next_tab()),
            KeyCode::Char('h') => self.scroll_x = self.scroll_x.saturating_sub(4),
            KeyCode::Char('l') => self.scroll_x = self.scroll_x.saturating_add(4),
            KeyCode::Char('k') => self.scroll_y = self.scroll_y.saturating_sub(1),
            KeyCode::Char('j') => self.scroll_y = self.scroll_y.saturating_add(1),
            KeyCode::Char('c') | KeyCode::Char('y') => {
                self.block.copy_visible();
            }
            _ => return false,
        }
        true
    }

    fn switch_tab(&mut self, switch: impl FnOnce(&mut CodeBlock)) {
        switch(&mut self.block);
        self.scroll_x = 0;
        self.scroll_y = 0;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let snippet = self.block.snippet();

        let copy_indicator = if self.block.is_copied() {
            Span::styled(
                " ✓ copied ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" copy ", Style::default().fg(Color::DarkGray))
        };

        let mut frame_block = Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title_top(Line::from(copy_indicator).right_aligned());
        if let Some(title) = &snippet.title {
            frame_block = frame_block.title(Span::styled(
                format!(" {} ", title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        let inner = frame_block.inner(area);
        frame.render_widget(frame_block, area);

        let Some(variant) = self.block.visible() else {
            let empty = Paragraph::new("No code to display")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        };

        let code_area = if snippet.has_tabs() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);

            let tabs = Tabs::new(snippet.tab_labels())
                .select(self.block.selected_tab().unwrap_or(0))
                .style(Style::default().fg(Color::Gray))
                .highlight_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                );
            frame.render_widget(tabs, chunks[0]);
            chunks[1]
        } else {
            inner
        };

        // Verbatim and unwrapped; long lines scroll sideways.
        let code = Paragraph::new(variant.code)
            .style(Style::default().fg(Color::White))
            .scroll((self.scroll_y, self.scroll_x));
        frame.render_widget(code, code_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::{contains, context, RecordingClipboard};
    use ratatui::{backend::TestBackend, Terminal};

    fn install() -> SnippetSet {
        SnippetSet::multi([("javascript", "npm install sdk"), ("python", "pip install sdk")])
            .with_title("SDK Installation")
    }

    fn draw(view: &CodeBlockView) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|frame| view.render(frame, frame.area(), true))
            .unwrap();
        terminal
    }

    #[tokio::test]
    async fn renders_title_tabs_and_first_variant() {
        let clipboard = RecordingClipboard::default();
        let view = CodeBlockView::new(&context(&clipboard), install());

        let terminal = draw(&view);
        let buffer = terminal.backend().buffer();
        assert!(contains(buffer, "SDK Installation"));
        assert!(contains(buffer, "Javascript"));
        assert!(contains(buffer, "Python"));
        assert!(contains(buffer, "npm install sdk"));
        assert!(!contains(buffer, "pip install sdk"));
        assert!(contains(buffer, "copy"));
    }

    #[tokio::test]
    async fn arrow_keys_switch_the_visible_variant() {
        let clipboard = RecordingClipboard::default();
        let mut view = CodeBlockView::new(&context(&clipboard), install());

        assert!(view.handle_key(KeyCode::Right));
        let terminal = draw(&view);
        assert!(contains(terminal.backend().buffer(), "pip install sdk"));
    }

    #[tokio::test]
    async fn copy_key_shows_confirmation() {
        let clipboard = RecordingClipboard::default();
        let mut view = CodeBlockView::new(&context(&clipboard), install());

        view.handle_key(KeyCode::Right);
        assert!(view.handle_key(KeyCode::Char('c')));

        let terminal = draw(&view);
        assert!(contains(terminal.backend().buffer(), "✓ copied"));
        assert_eq!(*clipboard.0.lock().unwrap(), ["pip install sdk"]);
    }

    #[tokio::test]
    async fn single_snippet_has_no_tab_strip() {
        let clipboard = RecordingClipboard::default();
        let view = CodeBlockView::new(
            &context(&clipboard),
            SnippetSet::single("{ \"ok\": true }", "json").with_title("Response Body"),
        );

        let terminal = draw(&view);
        let buffer = terminal.backend().buffer();
        assert!(contains(buffer, "{ \"ok\": true }"));
        assert!(!contains(buffer, "Json"));
    }

    #[tokio::test]
    async fn empty_set_renders_placeholder() {
        let clipboard = RecordingClipboard::default();
        let view = CodeBlockView::new(
            &context(&clipboard),
            SnippetSet::multi(Vec::<(String, String)>::new()),
        );

        let terminal = draw(&view);
        assert!(contains(terminal.backend().buffer(), "No code to display"));
    }
}
