use crate::code_block::CodeBlockView;
use crate::common::focus_style;
use crossterm::event::KeyCode;
use cvdocs_core::{DocsContext, Explorer, RequestDraft, SnippetSet, SubmitOutcome, QUICK_EXAMPLES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Endpoint,
    Method,
    Token,
    ResourceId,
    Examples,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTab {
    Response,
    Curl,
}

pub struct ExplorerPage {
    explorer: Explorer,
    focus: Field,
    output: OutputTab,
    example_cursor: usize,
    response_view: CodeBlockView,
    curl_view: CodeBlockView,
}

impl ExplorerPage {
    pub fn new(ctx: &DocsContext) -> Self {
        let explorer = Explorer::new(ctx);
        let curl_view = CodeBlockView::new(ctx, curl_snippet(&explorer));
        Self {
            explorer,
            focus: Field::Endpoint,
            output: OutputTab::Response,
            example_cursor: 0,
            response_view: CodeBlockView::new(ctx, response_snippet(String::new())),
            curl_view,
        }
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn output(&self) -> OutputTab {
        self.output
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Endpoint, Field::Method, Field::Token];
        if self.explorer.needs_resource_id() {
            fields.push(Field::ResourceId);
        }
        fields.push(Field::Examples);
        fields
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    /// Pull the explorer's latest state into the output blocks.
    pub fn refresh(&mut self) {
        self.curl_view.update_snippet(curl_snippet(&self.explorer));
        self.response_view
            .update_snippet(response_snippet(self.explorer.response_body()));
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::F(6) => {
                self.output = match self.output {
                    OutputTab::Response => OutputTab::Curl,
                    OutputTab::Curl => OutputTab::Response,
                };
            }
            KeyCode::F(5) => {
                self.refresh();
                let view = match self.output {
                    OutputTab::Response => &mut self.response_view,
                    OutputTab::Curl => &mut self.curl_view,
                };
                // Copy exactly what the view now shows.
                if view.block().visible_code().is_some_and(|code| !code.is_empty()) {
                    view.copy_visible();
                }
            }
            KeyCode::Up | KeyCode::Down => self.cycle(code == KeyCode::Down),
            KeyCode::Enter if self.focus == Field::Examples => {
                self.explorer.apply_example(&QUICK_EXAMPLES[self.example_cursor]);
            }
            KeyCode::Enter => {
                if self.explorer.submit() == SubmitOutcome::AlreadyPending {
                    tracing::debug!("send ignored while a request is pending");
                }
            }
            KeyCode::Backspace => self.edit(|value| {
                value.pop();
            }),
            KeyCode::Char(c) => {
                if !matches!(self.focus, Field::Token | Field::ResourceId) {
                    return false;
                }
                self.edit(|value| value.push(c));
            }
            _ => return false,
        }
        self.refresh();
        true
    }

    fn cycle(&mut self, forward: bool) {
        match self.focus {
            Field::Endpoint => {
                let draft = self.explorer.snapshot();
                let endpoints = self.explorer.endpoints().endpoints();
                let current = self
                    .explorer
                    .endpoints()
                    .position(&draft.endpoint_path)
                    .unwrap_or(0);
                let next = if forward {
                    (current + 1) % endpoints.len()
                } else {
                    (current + endpoints.len() - 1) % endpoints.len()
                };
                self.explorer.select_endpoint(endpoints[next].path);
            }
            Field::Method => {
                let method = self.explorer.snapshot().method;
                self.explorer.select_method(if forward {
                    method.cycle()
                } else {
                    method.cycle_back()
                });
            }
            Field::Examples => {
                let count = QUICK_EXAMPLES.len();
                self.example_cursor = if forward {
                    (self.example_cursor + 1) % count
                } else {
                    (self.example_cursor + count - 1) % count
                };
            }
            Field::Token | Field::ResourceId => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        let draft = self.explorer.snapshot();
        match self.focus {
            Field::Token => {
                let mut token = draft.auth_token;
                change(&mut token);
                self.explorer.set_auth_token(token);
            }
            Field::ResourceId => {
                let mut resource_id = draft.resource_id;
                change(&mut resource_id);
                self.explorer.set_resource_id(resource_id);
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.refresh();
        // The id field can disappear when the endpoint changes under it.
        if self.focus == Field::ResourceId && !self.explorer.needs_resource_id() {
            self.focus = Field::Endpoint;
        }
        let draft = self.explorer.snapshot();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        self.render_builder(frame, columns[0], &draft);
        self.render_output(frame, columns[1], &draft);
    }

    fn render_builder(&self, frame: &mut Frame, area: Rect, draft: &RequestDraft) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(" Request Builder ");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let mut constraints = vec![Constraint::Length(3), Constraint::Length(3), Constraint::Length(3)];
        if draft.needs_resource_id() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let endpoint_text = match self.explorer.endpoints().find(&draft.endpoint_path) {
            Some(endpoint) => Line::from(vec![
                Span::styled(
                    format!("[{}] ", endpoint.method),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(endpoint.path),
                Span::styled(
                    format!("  {}", endpoint.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            None => Line::from(draft.endpoint_path.as_str()),
        };
        self.render_field(frame, rows[0], "Endpoint", endpoint_text, Field::Endpoint);
        self.render_field(
            frame,
            rows[1],
            "Method",
            Line::from(draft.method.as_str()),
            Field::Method,
        );

        let token = if draft.auth_token.is_empty() {
            Line::from(Span::styled(
                "Bearer token...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from("•".repeat(draft.auth_token.chars().count()))
        };
        self.render_field(frame, rows[2], "Authorization Token", token, Field::Token);

        let mut next_row = 3;
        if draft.needs_resource_id() {
            let id = if draft.resource_id.is_empty() {
                Line::from(Span::styled(
                    "veh_123456789",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::from(draft.resource_id.as_str())
            };
            self.render_field(frame, rows[next_row], "Vehicle ID", id, Field::ResourceId);
            next_row += 1;
        }

        let send = if draft.is_pending {
            Span::styled("  Sending...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "  ⏎ Send Request",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(send)), rows[next_row]);

        let examples: Vec<ListItem> = QUICK_EXAMPLES
            .iter()
            .enumerate()
            .map(|(index, example)| {
                let marker = if index == self.example_cursor { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(example.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", example.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(examples).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(self.focus == Field::Examples))
                .title(" Quick Examples "),
        );
        frame.render_widget(list, rows[next_row + 1]);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, label: &str, value: Line, field: Field) {
        let widget = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(self.focus == field))
                .title(format!(" {} ", label)),
        );
        frame.render_widget(widget, area);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect, draft: &RequestDraft) {
        let outer = Block::default().borders(Borders::ALL).title(" Response ");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let selected = match self.output {
            OutputTab::Response => 0,
            OutputTab::Curl => 1,
        };
        let tabs = Tabs::new(vec!["Response", "cURL"])
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, rows[0]);

        match self.output {
            OutputTab::Curl => self.curl_view.render(frame, rows[1], true),
            OutputTab::Response if draft.response_body.is_empty() => {
                let hint = if draft.is_pending {
                    "Waiting for response..."
                } else {
                    "Press Enter to send the request and see the response"
                };
                let placeholder = Paragraph::new(hint)
                    .style(Style::default().fg(Color::DarkGray))
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(placeholder, rows[1]);
            }
            OutputTab::Response => self.response_view.render(frame, rows[1], true),
        }
    }
}

fn curl_snippet(explorer: &Explorer) -> SnippetSet {
    SnippetSet::single(explorer.command_line(), "bash").with_title("Equivalent cURL Command")
}

fn response_snippet(body: String) -> SnippetSet {
    SnippetSet::single(body, "json").with_title("Response Body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::{contains, context, RecordingClipboard};
    use cvdocs_core::HttpMethod;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn draw(page: &mut ExplorerPage) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|frame| page.render(frame, frame.area()))
            .unwrap();
        terminal
    }

    fn type_text(page: &mut ExplorerPage, text: &str) {
        for c in text.chars() {
            page.handle_key(KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn typing_fills_the_focused_text_field() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::Tab);
        page.handle_key(KeyCode::Tab);
        assert_eq!(page.focus(), Field::Token);
        type_text(&mut page, "tok_1x");
        page.handle_key(KeyCode::Backspace);

        assert_eq!(page.explorer().snapshot().auth_token, "tok_1");
    }

    #[tokio::test]
    async fn characters_are_ignored_outside_text_fields() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        assert!(!page.handle_key(KeyCode::Char('x')));
        assert_eq!(page.explorer().snapshot(), RequestDraft::default());
    }

    #[tokio::test]
    async fn arrows_cycle_endpoint_and_method() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::Down);
        assert_eq!(page.explorer().snapshot().endpoint_path, "/v1/vehicles/{id}");
        page.handle_key(KeyCode::Up);
        page.handle_key(KeyCode::Up);
        assert_eq!(page.explorer().snapshot().endpoint_path, "/v1/vehicles/{id}/unlock");

        page.handle_key(KeyCode::Tab);
        page.handle_key(KeyCode::Down);
        assert_eq!(page.explorer().snapshot().method, HttpMethod::Post);
    }

    #[tokio::test]
    async fn vehicle_id_field_only_when_the_path_needs_it() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        let terminal = draw(&mut page);
        assert!(!contains(terminal.backend().buffer(), "Vehicle ID"));

        page.handle_key(KeyCode::Down);
        let terminal = draw(&mut page);
        assert!(contains(terminal.backend().buffer(), "Vehicle ID"));

        for _ in 0..3 {
            page.handle_key(KeyCode::Tab);
        }
        assert_eq!(page.focus(), Field::ResourceId);
    }

    #[tokio::test]
    async fn examples_apply_on_enter() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::BackTab);
        assert_eq!(page.focus(), Field::Examples);
        page.handle_key(KeyCode::Down);
        page.handle_key(KeyCode::Down);
        page.handle_key(KeyCode::Enter);

        let draft = page.explorer().snapshot();
        assert_eq!(draft.endpoint_path, "/v1/vehicles/{id}/lock");
        assert_eq!(draft.method, HttpMethod::Post);
        assert!(!draft.is_pending);
    }

    #[tokio::test]
    async fn curl_tab_copies_the_current_command() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::F(6));
        assert_eq!(page.output(), OutputTab::Curl);
        let terminal = draw(&mut page);
        assert!(contains(terminal.backend().buffer(), "Equivalent cURL Command"));

        page.handle_key(KeyCode::F(5));
        let copied = clipboard.0.lock().unwrap().clone();
        assert_eq!(copied, [page.explorer().command_line()]);
    }

    #[tokio::test]
    async fn empty_response_is_not_copied() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::F(5));
        assert!(clipboard.0.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn copy_right_after_resolution_takes_the_resolved_body() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::Enter);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        // No draw in between: the copy key alone pulls in the response.
        page.handle_key(KeyCode::F(5));
        let copied = clipboard.0.lock().unwrap().clone();
        assert_eq!(copied.len(), 1);
        assert!(!copied[0].is_empty());
        assert_eq!(
            Some(copied[0].as_str()),
            page.response_view.block().visible_code()
        );
        assert!(copied[0].contains("\"data\": ["));
    }

    #[tokio::test(start_paused = true)]
    async fn copy_while_pending_copies_nothing() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::Enter);
        tokio::time::sleep(Duration::from_millis(999)).await;
        page.handle_key(KeyCode::F(5));
        assert!(clipboard.0.lock().unwrap().is_empty());
        assert!(!page.response_view.block().is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn send_shows_pending_then_the_response() {
        let clipboard = RecordingClipboard::default();
        let mut page = ExplorerPage::new(&context(&clipboard));

        page.handle_key(KeyCode::Enter);
        let terminal = draw(&mut page);
        assert!(contains(terminal.backend().buffer(), "Sending..."));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        let terminal = draw(&mut page);
        let buffer = terminal.backend().buffer();
        assert!(contains(buffer, "Response Body"));
        assert!(contains(buffer, "\"data\": ["));
        assert!(contains(buffer, "Send Request"));
    }
}
