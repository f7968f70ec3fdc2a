use crate::code_block::CodeBlockView;
use crossterm::event::KeyCode;
use cvdocs_core::content::QUICK_START_STEPS;
use cvdocs_core::{quick_start_snippets, DocsContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct QuickStartPage {
    blocks: Vec<CodeBlockView>,
    focused: usize,
}

impl QuickStartPage {
    pub fn new(ctx: &DocsContext) -> Self {
        let blocks = quick_start_snippets()
            .into_iter()
            .map(|named| CodeBlockView::new(ctx, named.set))
            .collect();
        Self { blocks, focused: 0 }
    }

    pub fn focused_block(&self) -> Option<&CodeBlockView> {
        self.blocks.get(self.focused)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let count = self.blocks.len();
        if count == 0 {
            return false;
        }
        match code {
            KeyCode::Tab | KeyCode::Down => self.focused = (self.focused + 1) % count,
            KeyCode::BackTab | KeyCode::Up => self.focused = (self.focused + count - 1) % count,
            other => return self.blocks[self.focused].handle_key(other),
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.render_steps(frame, chunks[0]);

        let constraints = vec![Constraint::Ratio(1, self.blocks.len().max(1) as u32); self.blocks.len()];
        let block_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(chunks[1]);

        for (index, (view, block_area)) in self.blocks.iter().zip(block_areas.iter()).enumerate() {
            view.render(frame, *block_area, index == self.focused);
        }
    }

    fn render_steps(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (index, (step, column)) in QUICK_START_STEPS.iter().zip(columns.iter()).enumerate() {
            let text = vec![
                Line::from(Span::styled(
                    step.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    step.description,
                    Style::default().fg(Color::Gray),
                )),
            ];
            let card = Paragraph::new(text).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {}. ", index + 1))
                    .title_top(
                        Line::from(Span::styled(
                            format!(" {} ", step.duration),
                            Style::default().fg(Color::Magenta),
                        ))
                        .right_aligned(),
                    ),
            );
            frame.render_widget(card, *column);
        }
    }
}
