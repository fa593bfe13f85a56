// ABOUTME: Check-in wizard screen component
// Renders the four wizard steps with header progress and a key-hint footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, NotificationType};
use crate::config::Density;
use crate::models::VisitorRecord;
use crate::wizard::{RequestKind, WizardStep};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub struct KioskComponent;

impl KioskComponent {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(10),   // Step content
                Constraint::Length(3), // Key hints and notifications
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_footer(frame, layout[2], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Visitor Check-in", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" · ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(state.config.kiosk.name.as_str(), Style::default().fg(SOFT_WHITE)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state.wizard.step());
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, current: WizardStep) {
        let steps = WizardStep::all();
        let current_idx = current.number() - 1;

        let mut spans = Vec::new();
        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn step_block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.wizard.step();
        let block = Self::step_block(step.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let density = state.config.kiosk.density;
        let content = Layout::default()
            .direction(Direction::Vertical)
            .margin(density.margin())
            .constraints([
                Constraint::Length(2), // Step description
                Constraint::Min(3),    // Step body
                Constraint::Length(1), // Busy indicator
            ])
            .split(inner);

        let description = Paragraph::new(Span::styled(
            step.description(),
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(description, content[0]);

        match step {
            WizardStep::Welcome => self.render_welcome(frame, content[1], state),
            WizardStep::Search => self.render_search(frame, content[1], state),
            WizardStep::Confirm => self.render_confirm(frame, content[1], state, density),
            WizardStep::Complete => self.render_complete(frame, content[1], state, density),
        }

        if let Some(kind) = state.wizard.pending_request() {
            let label = match kind {
                RequestKind::Scan => "Reading your invitation...",
                RequestKind::Search => "Looking up your visit...",
                RequestKind::CheckIn => "Checking you in...",
            };
            let busy = Paragraph::new(Span::styled(label, Style::default().fg(GOLD)))
                .alignment(Alignment::Center);
            frame.render_widget(busy, content[2]);
        }
    }

    fn render_welcome(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Length(2), // Scan hint
                Constraint::Min(1),    // Session stats
            ])
            .split(area);

        let wizard = state.wizard.state();
        let (before, after): (String, String) = {
            let chars: Vec<char> = wizard.query.chars().collect();
            let split = wizard.cursor_position.min(chars.len());
            (chars[..split].iter().collect(), chars[split..].iter().collect())
        };

        let input_line = if wizard.query.is_empty() {
            Line::from(vec![
                Span::styled("│", Style::default().fg(GOLD)),
                Span::styled(
                    "Type your name, company, email or phone",
                    Style::default().fg(MUTED_GRAY),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(before, Style::default().fg(SOFT_WHITE)),
                Span::styled("│", Style::default().fg(GOLD)),
                Span::styled(after, Style::default().fg(SOFT_WHITE)),
            ])
        };

        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .title(" Search "),
        );
        frame.render_widget(input, layout[0]);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Have an invitation? Press ", Style::default().fg(MUTED_GRAY)),
            Span::styled("F2", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" to scan it", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout[1]);

        let stats = Paragraph::new(Span::styled(
            format!("Checked in this session: {}", state.checked_in_count()),
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(stats, layout[2]);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let wizard = state.wizard.state();

        if wizard.results.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No visits found for \"{}\"", wizard.query.trim()),
                    Style::default().fg(WARNING_YELLOW),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to try again or ask at reception",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = wizard
            .results
            .iter()
            .map(|record| {
                ListItem::new(Line::from(vec![
                    Span::styled(record.full_name(), Style::default().fg(SOFT_WHITE)),
                    Span::styled(
                        format!("  {}", record.company_label()),
                        Style::default().fg(MUTED_GRAY),
                    ),
                    Span::styled(
                        format!(
                            "  {} with {}",
                            record.visit.scheduled_clock(),
                            record.visit.host_name
                        ),
                        Style::default().fg(CORNFLOWER_BLUE),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(SELECTION_GREEN)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(wizard.highlighted));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn visitor_lines(record: &VisitorRecord, density: Density) -> Vec<Line<'static>> {
        let label = |name: &str| Span::styled(format!("{name:>12}  "), Style::default().fg(MUTED_GRAY));
        let value = |text: String| Span::styled(text, Style::default().fg(SOFT_WHITE));

        let mut lines = vec![
            Line::from(vec![label("Visitor"), value(record.full_name())]),
            Line::from(vec![label("Company"), value(record.company_label().to_string())]),
            Line::from(vec![label("Host"), value(record.visit.host_name.clone())]),
            Line::from(vec![label("Scheduled"), value(record.visit.scheduled_clock())]),
            Line::from(vec![label("Location"), value(record.visit.location_label().to_string())]),
        ];

        if density.shows_details() {
            lines.extend([
                Line::from(vec![label("Department"), value(record.visit.department.clone())]),
                Line::from(vec![label("Purpose"), value(record.visit.purpose.clone())]),
                Line::from(vec![label("Duration"), value(record.visit.duration_label())]),
                Line::from(vec![label("Email"), value(record.email.clone())]),
                Line::from(vec![label("Phone"), value(record.phone.clone())]),
            ]);
        }

        lines
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect, state: &AppState, density: Density) {
        let Some(record) = state.wizard.state().selected.as_ref() else {
            return;
        };

        let mut lines = Self::visitor_lines(record, density);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" to check in  ·  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Esc", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" to go back", Style::default().fg(MUTED_GRAY)),
        ]));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_complete(&self, frame: &mut Frame, area: Rect, state: &AppState, density: Density) {
        let Some(receipt) = state.wizard.state().receipt.as_ref() else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("✓ Welcome, {}!", receipt.visitor.first_name),
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Badge  ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    receipt.badge_number.clone(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} has been notified. Please wait at {}.",
                    receipt.visitor.visit.host_name,
                    receipt.visitor.visit.location_label()
                ),
                Style::default().fg(SOFT_WHITE),
            )),
        ];

        if density.shows_details() {
            lines.push(Line::from(Span::styled(
                format!(
                    "Checked in at {}",
                    receipt
                        .checked_in_at
                        .with_timezone(&chrono::Local)
                        .format("%H:%M")
                ),
                Style::default().fg(MUTED_GRAY),
            )));
        }

        if let Some(after) = state.config.auto_reset() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("This screen resets in {}s", after.as_secs()),
                Style::default().fg(MUTED_GRAY),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn key_hints(step: WizardStep) -> &'static str {
        match step {
            WizardStep::Welcome => "Enter search · F2 scan · F1 help · Ctrl+Q quit",
            WizardStep::Search => "↑/↓ choose · Enter select · Esc back",
            WizardStep::Confirm => "Enter check in · Esc back",
            WizardStep::Complete => "Enter new check-in",
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = match &state.notification {
            Some(notification) => {
                let color = match notification.notification_type {
                    NotificationType::Info => CORNFLOWER_BLUE,
                    NotificationType::Success => SELECTION_GREEN,
                    NotificationType::Warning => WARNING_YELLOW,
                };
                Line::from(Span::styled(notification.message.clone(), Style::default().fg(color)))
            }
            None => Line::from(Span::styled(
                Self::key_hints(state.wizard.step()),
                Style::default().fg(MUTED_GRAY),
            )),
        };

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
    }
}

impl Default for KioskComponent {
    fn default() -> Self {
        Self::new()
    }
}
