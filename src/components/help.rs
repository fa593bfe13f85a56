// ABOUTME: Help overlay listing kiosk key bindings

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Welcome",
        &[
            ("type", "Enter your name, company, email or phone"),
            ("Enter", "Search for your visit"),
            ("F2 / Ctrl+S", "Scan your invitation"),
        ],
    ),
    (
        "Find Visit",
        &[
            ("↑/↓ j/k", "Choose a visit"),
            ("Enter", "Select the highlighted visit"),
            ("Esc", "Back to search"),
        ],
    ),
    (
        "Confirm",
        &[("Enter / y", "Check in"), ("Esc / n", "Go back")],
    ),
    ("Done", &[("Enter", "Start a new check-in")]),
    (
        "Anywhere",
        &[("F1", "Toggle this help"), ("Ctrl+Q / Ctrl+C", "Quit")],
    ),
];

pub struct HelpComponent;

impl HelpComponent {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = Self::centered_rect(60, 70, area);
        frame.render_widget(Clear, popup);

        let mut lines = Vec::new();
        for (section, keys) in BINDINGS {
            lines.push(Line::from(Span::styled(
                *section,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            for (key, action) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Cyan)),
                    Span::raw(*action),
                ]));
            }
            lines.push(Line::from(""));
        }

        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Help (F1 / Esc to close) "),
        );
        frame.render_widget(help, popup);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
