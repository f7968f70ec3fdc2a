use crate::common::key_hints;
use crate::explorer::ExplorerPage;
use crate::guides::GuidesPage;
use crate::quick_start::QuickStartPage;
use crate::status::StatusPage;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use cvdocs_core::{DocsContext, Result};
use rand::Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io::{self, stdout};
use std::time::Duration;

// Background timers change what is on screen, so redraw at least this often.
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    QuickStart,
    Explorer,
    Status,
    Guides,
}

impl Page {
    const ALL: [Page; 4] = [Page::QuickStart, Page::Explorer, Page::Status, Page::Guides];

    fn title(self) -> &'static str {
        match self {
            Page::QuickStart => "F1 Quick Start",
            Page::Explorer => "F2 API Explorer",
            Page::Status => "F3 API Status",
            Page::Guides => "F4 Guides",
        }
    }
}

pub struct App {
    page: Page,
    quick_start: QuickStartPage,
    explorer: ExplorerPage,
    status: StatusPage,
    guides: GuidesPage,
    exiting: bool,
}

impl App {
    pub fn new<R: Rng>(ctx: &DocsContext, rng: &mut R) -> Self {
        Self {
            page: Page::QuickStart,
            quick_start: QuickStartPage::new(ctx),
            explorer: ExplorerPage::new(ctx),
            status: StatusPage::new(rng),
            guides: GuidesPage::new(ctx),
            exiting: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exiting = true;
                return;
            }
            KeyCode::Esc => {
                self.exiting = true;
                return;
            }
            KeyCode::F(1) => self.page = Page::QuickStart,
            KeyCode::F(2) => self.page = Page::Explorer,
            KeyCode::F(3) => self.page = Page::Status,
            KeyCode::F(4) => self.page = Page::Guides,
            _ => {}
        }

        match self.page {
            // The explorer has text fields, so plain characters belong to it.
            Page::Explorer => {
                self.explorer.handle_key(key.code);
            }
            Page::QuickStart | Page::Status | Page::Guides => match key.code {
                KeyCode::Char('q') => self.exiting = true,
                KeyCode::Char('1') => self.page = Page::QuickStart,
                KeyCode::Char('2') => self.page = Page::Explorer,
                KeyCode::Char('3') => self.page = Page::Status,
                KeyCode::Char('4') => self.page = Page::Guides,
                code if self.page == Page::QuickStart => {
                    self.quick_start.handle_key(code);
                }
                code if self.page == Page::Guides => {
                    self.guides.handle_key(code);
                }
                _ => {}
            },
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Page tabs
                Constraint::Min(10),   // Page content
                Constraint::Length(2), // Help text
            ])
            .split(frame.area());

        let selected = Page::ALL.iter().position(|p| *p == self.page).unwrap_or(0);
        let tabs = Tabs::new(Page::ALL.iter().map(|p| p.title()).collect::<Vec<_>>())
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Connected Vehicles API docs v{} ",
                env!("CARGO_PKG_VERSION")
            )));
        frame.render_widget(tabs, chunks[0]);

        match self.page {
            Page::QuickStart => self.quick_start.render(frame, chunks[1]),
            Page::Explorer => self.explorer.render(frame, chunks[1]),
            Page::Status => self.status.render(frame, chunks[1]),
            Page::Guides => self.guides.render(frame, chunks[1]),
        }

        let hints = match self.page {
            Page::QuickStart => key_hints(&[
                ("Tab/↑↓", "Focus block"),
                ("←/→", "Language"),
                ("h/j/k/l", "Scroll"),
                ("c", "Copy"),
                ("Esc", "Exit"),
            ]),
            Page::Explorer => key_hints(&[
                ("Tab", "Next field"),
                ("↑/↓", "Change"),
                ("Enter", "Send / apply example"),
                ("F6", "Response/cURL"),
                ("F5", "Copy"),
                ("Esc", "Exit"),
            ]),
            Page::Status => key_hints(&[("1-4", "Switch page"), ("Esc", "Exit")]),
            Page::Guides => key_hints(&[
                ("↑/↓", "Snippet"),
                ("PgUp/PgDn", "Section"),
                ("←/→", "Language"),
                ("h/j/k/l", "Scroll"),
                ("c", "Copy"),
                ("Esc", "Exit"),
            ]),
        };
        let help = Paragraph::new(hints).block(Block::default().borders(Borders::TOP));
        frame.render_widget(help, chunks[2]);
    }
}

/// Display the docs dashboard until the user exits.
pub fn display_docs_dashboard<R: Rng>(ctx: &DocsContext, rng: &mut R) -> Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(ctx, rng);

    let result = run_dashboard(&mut terminal, &mut app);

    // Clean up terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_dashboard(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    tracing::info!("dashboard started");
    while !app.is_exiting() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    tracing::info!("dashboard closed");
    Ok(())
}
