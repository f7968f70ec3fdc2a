use crate::code_block::CodeBlockView;
use crossterm::event::KeyCode;
use cvdocs_core::{all_snippets, DocsContext, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

struct Entry {
    slug: &'static str,
    section: Section,
    view: CodeBlockView,
}

/// Every documentation snippet, listed by section, one code block at a time.
pub struct GuidesPage {
    entries: Vec<Entry>,
    cursor: usize,
}

impl GuidesPage {
    pub fn new(ctx: &DocsContext) -> Self {
        let entries = all_snippets()
            .into_iter()
            .map(|named| Entry {
                slug: named.slug,
                section: named.section,
                view: CodeBlockView::new(ctx, named.set),
            })
            .collect();
        Self { entries, cursor: 0 }
    }

    pub fn selected_slug(&self) -> Option<&'static str> {
        self.entries.get(self.cursor).map(|entry| entry.slug)
    }

    pub fn selected_block(&self) -> Option<&CodeBlockView> {
        self.entries.get(self.cursor).map(|entry| &entry.view)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let count = self.entries.len();
        if count == 0 {
            return false;
        }
        match code {
            KeyCode::Down => self.cursor = (self.cursor + 1) % count,
            KeyCode::Up => self.cursor = (self.cursor + count - 1) % count,
            KeyCode::PageDown => self.jump_section(true),
            KeyCode::PageUp => self.jump_section(false),
            other => return self.entries[self.cursor].view.handle_key(other),
        }
        true
    }

    /// Move to the first snippet of the next or previous section, wrapping.
    fn jump_section(&mut self, forward: bool) {
        let current = self.entries[self.cursor].section;
        let sections: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|section| self.entries.iter().any(|entry| entry.section == *section))
            .collect();
        let Some(index) = sections.iter().position(|section| *section == current) else {
            return;
        };
        let target = if forward {
            sections[(index + 1) % sections.len()]
        } else {
            sections[(index + sections.len() - 1) % sections.len()]
        };
        if let Some(position) = self.entries.iter().position(|entry| entry.section == target) {
            self.cursor = position;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);

        let mut items = Vec::new();
        let mut selected_item = 0;
        let mut previous: Option<Section> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if previous != Some(entry.section) {
                items.push(ListItem::new(Line::from(Span::styled(
                    entry.section.title(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))));
                previous = Some(entry.section);
            }
            if index == self.cursor {
                selected_item = items.len();
            }
            let marker = if index == self.cursor { "> " } else { "  " };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(entry.slug),
            ])));
        }

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title(" Guides "));
        let mut state = ListState::default();
        state.select(Some(selected_item));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        if let Some(view) = self.selected_block() {
            view.render(frame, chunks[1], true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::{contains, context, RecordingClipboard};
    use cvdocs_core::find_snippet;
    use ratatui::{backend::TestBackend, Terminal};

    #[tokio::test]
    async fn lists_sections_and_shows_the_selected_block() {
        let clipboard = RecordingClipboard::default();
        let page = GuidesPage::new(&context(&clipboard));

        let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
        terminal
            .draw(|frame| page.render(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(contains(buffer, "Overview"));
        assert!(contains(buffer, "Authentication"));
        assert!(contains(buffer, "Best Practices"));
        assert!(contains(buffer, "Vehicle Data Access Example"));
    }

    #[tokio::test]
    async fn arrows_move_between_snippets_and_wrap() {
        let clipboard = RecordingClipboard::default();
        let mut page = GuidesPage::new(&context(&clipboard));
        assert_eq!(page.selected_slug(), Some("vehicle-access"));

        page.handle_key(KeyCode::Down);
        assert_eq!(page.selected_slug(), Some("install"));

        page.handle_key(KeyCode::Up);
        page.handle_key(KeyCode::Up);
        assert_eq!(page.selected_slug(), Some("batching"));
    }

    #[tokio::test]
    async fn page_keys_jump_between_sections() {
        let clipboard = RecordingClipboard::default();
        let mut page = GuidesPage::new(&context(&clipboard));

        page.handle_key(KeyCode::PageDown);
        page.handle_key(KeyCode::PageDown);
        assert_eq!(page.selected_slug(), Some("token-request"));

        page.handle_key(KeyCode::PageUp);
        assert_eq!(page.selected_slug(), Some("install"));
    }

    #[tokio::test]
    async fn copy_and_tabs_go_to_the_selected_block() {
        let clipboard = RecordingClipboard::default();
        let mut page = GuidesPage::new(&context(&clipboard));

        while page.selected_slug() != Some("webhook-verify") {
            page.handle_key(KeyCode::Down);
        }
        page.handle_key(KeyCode::Right);
        page.handle_key(KeyCode::Char('c'));

        let expected = find_snippet("webhook-verify").unwrap();
        let copied = clipboard.0.lock().unwrap().clone();
        assert_eq!(copied, [expected.variant(1).unwrap().code]);
        assert!(page.selected_block().unwrap().block().is_copied());
    }
}
