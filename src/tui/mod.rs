// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;
pub mod prompt;

// Re-exports
pub use colors::*;
pub use helpers::{display_path, format_elapsed, scroll_window};
pub use input::{
    handle_list_key, handle_preview_key, handle_prompt_key, ListAction, PreviewAction,
    PromptAction,
};
pub use prompt::{render_prompt, PromptOutcome, PromptState};

use crate::delete::{DeleteSession, TaskStatus};
use crate::session::{Mode, SelectorSession};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::path::Path;

/// Renders the selector in whichever mode it is in
pub fn render_selector(frame: &mut Frame, session: &SelectorSession, root: &Path) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    match session.mode {
        Mode::List => {
            render_list_header(frame, chunks[0], session);
            render_list(frame, chunks[1], session, root);
            render_list_footer(frame, chunks[2]);
        }
        Mode::Preview => {
            render_preview_header(frame, chunks[0], session, root);
            render_preview(frame, chunks[1], session);
            render_preview_footer(frame, chunks[2]);
        }
    }
}

/// Renders the deletion progress screen
pub fn render_delete(frame: &mut Frame, session: &DeleteSession, root: &Path) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    let done = session
        .tasks
        .iter()
        .filter(|t| t.status.is_terminal())
        .count();
    let title = Line::from(vec![
        Span::styled(
            " Sweeping ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}/{} folders ", done, session.tasks.len()),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);
    let header = Paragraph::new(title)
        .block(bordered_block())
        .alignment(Alignment::Left);
    frame.render_widget(header, chunks[0]);

    let spinner = session.spinner_frame();
    let lines: Vec<Line> = session
        .tasks
        .iter()
        .map(|task| {
            let (icon, icon_style) = match task.status {
                TaskStatus::Pending => ("·", Style::default().fg(TEXT_SECONDARY)),
                TaskStatus::Deleting => (spinner, Style::default().fg(ACCENT_HIGHLIGHT)),
                TaskStatus::Done => ("✓", Style::default().fg(ACCENT_SECONDARY)),
                TaskStatus::Error => ("✗", Style::default().fg(ACCENT_ERROR)),
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", icon), icon_style),
                Span::styled(
                    display_path(&task.path, root),
                    Style::default().fg(TEXT_PRIMARY),
                ),
            ];
            if let Some(ref error) = task.error {
                spans.push(Span::styled(
                    format!("  {}", error),
                    Style::default().fg(ACCENT_ERROR),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let content = Paragraph::new(lines).block(bordered_block());
    frame.render_widget(content, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Deleting selected folders...",
        Style::default().fg(TEXT_SECONDARY),
    )))
    .block(bordered_block())
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

fn bordered_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
}

fn render_list_header(frame: &mut Frame, area: Rect, session: &SelectorSession) {
    let line = Line::from(vec![
        Span::styled(
            " dirsweep ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} folder(s) found • {} selected",
                session.items.len(),
                session.selected_count()
            ),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);

    let header = Paragraph::new(line)
        .block(bordered_block())
        .alignment(Alignment::Left);
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, area: Rect, session: &SelectorSession, root: &Path) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let (start, end) = scroll_window(session.cursor, session.items.len(), inner_height);

    let lines: Vec<Line> = session.items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let index = start + offset;
            let is_cursor = index == session.cursor;

            let marker = if item.selected { "[x]" } else { "[ ]" };
            let marker_style = if item.selected {
                Style::default().fg(ACCENT_PRIMARY)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };

            let mut name_style = Style::default().fg(TEXT_PRIMARY);
            let cursor_mark = if is_cursor {
                name_style = Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD);
                "❯ "
            } else {
                "  "
            };

            Line::from(vec![
                Span::styled(cursor_mark, Style::default().fg(ACCENT_HIGHLIGHT)),
                Span::styled(marker, marker_style),
                Span::raw(" "),
                Span::styled(display_path(&item.result.path, root), name_style),
            ])
        })
        .collect();

    let mut block = bordered_block();
    if session.items.len() > end - start {
        block = block.title(
            Line::from(Span::styled(
                format!(" {}-{} of {} ", start + 1, end, session.items.len()),
                Style::default().fg(TEXT_SECONDARY),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_list_footer(frame: &mut Frame, area: Rect) {
    let controls = Line::from(vec![
        Span::styled("space ", Style::default().fg(ACCENT_PRIMARY)),
        Span::styled("select", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("a/A/i ", Style::default().fg(ACCENT_PRIMARY)),
        Span::styled("all/none/invert", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("v ", Style::default().fg(ACCENT_HIGHLIGHT)),
        Span::styled("preview", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("enter ", Style::default().fg(ACCENT_SECONDARY)),
        Span::styled("delete", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("q ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("quit", Style::default().fg(TEXT_SECONDARY)),
    ]);

    let footer = Paragraph::new(controls)
        .block(bordered_block())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_preview_header(frame: &mut Frame, area: Rect, session: &SelectorSession, root: &Path) {
    let path = &session.items[session.cursor].result.path;
    let line = Line::from(vec![
        Span::styled(
            " Preview ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} ({}/{})",
                display_path(path, root),
                session.cursor + 1,
                session.items.len()
            ),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);

    let header = Paragraph::new(line)
        .block(bordered_block())
        .alignment(Alignment::Left);
    frame.render_widget(header, area);
}

fn render_preview(frame: &mut Frame, area: Rect, session: &SelectorSession) {
    let Some(pane) = session.preview.as_ref() else {
        return;
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let (start, end) = scroll_window(pane.cursor, pane.flat.len(), inner_height);

    let mut lines: Vec<Line> = pane.flat[start..end]
        .iter()
        .enumerate()
        .map(|(offset, &node_index)| {
            let position = start + offset;
            let node = pane.tree.node(node_index);
            let is_cursor = position == pane.cursor;

            let icon = if node.is_dir {
                if node.expanded {
                    "▼ "
                } else {
                    "▶ "
                }
            } else {
                "  "
            };

            let style = if is_cursor {
                Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else if node.is_dir {
                Style::default().fg(TEXT_PRIMARY)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };

            Line::from(vec![
                Span::raw(" ".repeat(1 + node.depth * 2)),
                Span::styled(icon, Style::default().fg(ACCENT_PRIMARY)),
                Span::styled(node.name.clone(), style),
            ])
        })
        .collect();

    if pane.truncated && end == pane.flat.len() {
        lines.push(Line::from(Span::styled(
            " … preview truncated",
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let mut block = bordered_block();
    if pane.flat.len() > end - start {
        block = block.title(
            Line::from(Span::styled(
                format!(" {}-{} of {} ", start + 1, end, pane.flat.len()),
                Style::default().fg(TEXT_SECONDARY),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_preview_footer(frame: &mut Frame, area: Rect) {
    let controls = Line::from(vec![
        Span::styled("enter/l ", Style::default().fg(ACCENT_PRIMARY)),
        Span::styled("expand", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("h ", Style::default().fg(ACCENT_PRIMARY)),
        Span::styled("collapse", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("n/p ", Style::default().fg(ACCENT_HIGHLIGHT)),
        Span::styled("next/prev folder", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("q ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("back", Style::default().fg(TEXT_SECONDARY)),
    ]);

    let footer = Paragraph::new(controls)
        .block(bordered_block())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
