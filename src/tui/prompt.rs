//! Target-name prompt shown when no target argument was given

use super::colors::*;
use super::input::PromptAction;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// What the prompt resolved to once the user is done with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

#[derive(Debug)]
pub struct PromptState {
    /// Suggestion shown greyed-out; submitted as-is on an empty Enter.
    pub placeholder: String,
    pub input: String,
}

impl PromptState {
    pub fn new(placeholder: impl Into<String>) -> Self {
        PromptState {
            placeholder: placeholder.into(),
            input: String::new(),
        }
    }

    /// Applies one key action. Returns the outcome once the prompt finishes.
    pub fn apply(&mut self, action: PromptAction) -> Option<PromptOutcome> {
        match action {
            PromptAction::Insert(c) => {
                self.input.push(c);
                None
            }
            PromptAction::Backspace => {
                self.input.pop();
                None
            }
            PromptAction::Submit => {
                let target = if self.input.trim().is_empty() {
                    self.placeholder.clone()
                } else {
                    self.input.trim().to_string()
                };
                Some(PromptOutcome::Submitted(target))
            }
            PromptAction::Cancel => Some(PromptOutcome::Cancelled),
            PromptAction::None => None,
        }
    }
}

/// Renders the prompt as a centered dialog
pub fn render_prompt(frame: &mut Frame, state: &PromptState) {
    let area = centered_rect(50, 30, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Which folders should be swept? ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_line = if state.input.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT_HIGHLIGHT)),
            Span::styled(
                state.placeholder.clone(),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT_HIGHLIGHT)),
            Span::styled(
                state.input.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(ACCENT_HIGHLIGHT)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Folder name to search for:",
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        input_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(ACCENT_SECONDARY)),
            Span::styled(" search  ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled("Esc", Style::default().fg(ACCENT_PRIMARY)),
            Span::styled(" cancel", Style::default().fg(TEXT_SECONDARY)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
