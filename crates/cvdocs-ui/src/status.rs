use cvdocs_core::status::{
    incidents, metrics, overall_uptime, services, uptime_history, IncidentStatus, ServiceStatus,
    Trend, UptimeDay, UptimeLevel, HISTORY_DAYS,
};
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The status page; the uptime history is drawn once when the page is built.
pub struct StatusPage {
    history: Vec<UptimeDay>,
}

impl StatusPage {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            history: uptime_history(rng, HISTORY_DAYS),
        }
    }

    pub fn history(&self) -> &[UptimeDay] {
        &self.history
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Metrics
                Constraint::Length(8),  // Services
                Constraint::Length(4),  // Uptime bars
                Constraint::Min(5),     // Incidents
            ])
            .split(area);

        render_metrics(frame, chunks[0]);
        render_services(frame, chunks[1]);
        self.render_uptime(frame, chunks[2]);
        render_incidents(frame, chunks[3]);
    }

    fn render_uptime(&self, frame: &mut Frame, area: Rect) {
        let bars: Vec<Span> = self
            .history
            .iter()
            .map(|day| Span::styled("▇", Style::default().fg(level_color(day.level()))))
            .collect();

        let text = vec![
            Line::from(bars),
            Line::from(Span::styled(
                "green: 100% uptime  yellow: degraded  red: outage",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let widget = Paragraph::new(text).block(
            Block::default().borders(Borders::ALL).title(format!(
                " Uptime History ({} days) - Overall Uptime: {:.2}% ",
                self.history.len(),
                overall_uptime(&self.history)
            )),
        );
        frame.render_widget(widget, area);
    }
}

fn level_color(level: UptimeLevel) -> Color {
    match level {
        UptimeLevel::Healthy => Color::Green,
        UptimeLevel::Degraded => Color::Yellow,
        UptimeLevel::Outage => Color::Red,
    }
}

fn status_color(status: ServiceStatus) -> Color {
    match status {
        ServiceStatus::Operational => Color::Green,
        ServiceStatus::Degraded => Color::Yellow,
        ServiceStatus::Outage => Color::Red,
    }
}

fn render_metrics(frame: &mut Frame, area: Rect) {
    let metrics = metrics();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()])
        .split(area);

    for (metric, column) in metrics.iter().zip(columns.iter()) {
        let (arrow, color) = match metric.trend {
            Trend::Up => ("↑", Color::Green),
            Trend::Down => ("↓", Color::Cyan),
        };
        let line = Line::from(vec![
            Span::styled(metric.value, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {} {}", arrow, metric.change), Style::default().fg(color)),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", metric.name)),
        );
        frame.render_widget(widget, *column);
    }
}

fn render_services(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = services()
        .into_iter()
        .map(|service| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(status_color(service.status))),
                Span::styled(
                    format!("{:<24}", service.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<12}", service.status.label()),
                    Style::default().fg(status_color(service.status)),
                ),
                Span::raw(format!("{:>7.2}% uptime  {:>4}ms  ", service.uptime, service.response_time_ms)),
                Span::styled(service.description, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Service Status "));
    frame.render_widget(widget, area);
}

fn render_incidents(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for incident in incidents() {
        let (label, color) = match incident.status {
            IncidentStatus::Investigating => ("investigating", Color::Yellow),
            IncidentStatus::Resolved => ("resolved", Color::Green),
        };
        let window = match incident.resolved {
            Some(resolved) => format!("{} - {}", incident.started, resolved),
            None => format!("since {}", incident.started),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", label), Style::default().fg(color)),
            Span::styled(incident.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {} ({})", incident.id, window), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(format!("    {}", incident.description)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Recent Incidents "));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::contains;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn same_seed_same_bars() {
        let first = StatusPage::new(&mut StdRng::seed_from_u64(9));
        let second = StatusPage::new(&mut StdRng::seed_from_u64(9));
        assert_eq!(first.history(), second.history());
        assert_eq!(first.history().len(), HISTORY_DAYS);
    }

    #[test]
    fn renders_services_and_incidents() {
        let page = StatusPage::new(&mut StdRng::seed_from_u64(3));
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|frame| page.render(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(contains(buffer, "Webhook Delivery"));
        assert!(contains(buffer, "Degraded"));
        assert!(contains(buffer, "Uptime History (90 days)"));
        assert!(contains(buffer, "Intermittent webhook delivery delays"));
        assert!(contains(buffer, "12.4M"));
    }
}
