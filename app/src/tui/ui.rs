//! Widget rendering for the task screen.
//!
//! Stateless draw functions over [`TuiApp`]: header, creation form, filter
//! bar, task list (or its empty state), and footer. Everything is derived
//! per frame; no render state survives between draws.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::{FormField, InputMode, TuiApp};
use crate::types::{Filter, Priority, Task};
use crate::view::{self, TaskCounts};

const TITLE_LABEL: &str = "Title: ";
const DESCRIPTION_LABEL: &str = "Description: ";
const PRIORITY_LABEL: &str = "Priority: ";

/// Draws one frame of the task screen.
pub fn draw(f: &mut Frame<'_>, app: &TuiApp) {
    let size = f.area();
    let form_height = if app.input_mode == InputMode::Editing {
        6
    } else {
        1
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(form_height),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    draw_header(f, chunks[0]);
    draw_form(f, chunks[1], app);
    draw_filter_bar(f, chunks[2], app);
    draw_task_list(f, chunks[3], app);
    draw_footer(f, chunks[4], app);
}

fn draw_header(f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Task Manager",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Organize your work and life, finally.",
            Style::default().fg(Color::Gray),
        )),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_form(f: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    if app.input_mode != InputMode::Editing {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Press a to add a task",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(hint, area);
        return;
    }

    let block = Block::default().borders(Borders::ALL).title("New Task");
    let inner = block.inner(area);

    let lines = vec![
        form_text_line(
            TITLE_LABEL,
            &app.form.title,
            app.form.field == FormField::Title,
        ),
        form_text_line(
            DESCRIPTION_LABEL,
            &app.form.description,
            app.form.field == FormField::Description,
        ),
        form_priority_line(app.form.priority, app.form.field == FormField::Priority),
        Line::from(Span::styled(
            "Enter: add  Tab: next field  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);

    let focused = match app.form.field {
        FormField::Title => Some((TITLE_LABEL, &app.form.title, app.form.title_cursor, 0)),
        FormField::Description => Some((
            DESCRIPTION_LABEL,
            &app.form.description,
            app.form.description_cursor,
            1,
        )),
        FormField::Priority => None,
    };
    if let Some((label, buffer, cursor, row)) = focused {
        let x = usize::from(inner.x) + label.len() + char_col(buffer, cursor);
        let y = usize::from(inner.y) + row;
        f.set_cursor_position((
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        ));
    }
}

fn form_text_line<'a>(label: &'static str, value: &'a str, focused: bool) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, label_style(focused)),
        Span::raw(value),
    ])
}

fn form_priority_line(priority: Priority, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(PRIORITY_LABEL, label_style(focused)),
        Span::styled(
            format!("< {} >", priority_name(priority)),
            Style::default().fg(priority_color(priority)),
        ),
        Span::styled(
            "  (Left/Right to change)",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_filter_bar(f: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    let counts = TaskCounts::tally(&app.snapshot.tasks);
    let entries = [
        (Filter::All, "All", counts.all),
        (Filter::Active, "Active", counts.active),
        (Filter::Completed, "Completed", counts.completed),
    ];

    let mut spans = Vec::new();
    for (filter, label, count) in entries {
        let style = if filter == app.snapshot.filter {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} ({count}) "), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_task_list(f: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    let visible = view::visible(&app.snapshot.tasks, app.snapshot.filter);
    if visible.is_empty() {
        draw_empty_state(f, area, app);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_start = 0;
    for (idx, task) in visible.into_iter().enumerate() {
        if idx == app.selected {
            selected_start = lines.len();
        }
        push_task_lines(&mut lines, task, idx == app.selected);
    }

    let offset = scroll_offset(selected_start, lines.len(), area.height);
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn push_task_lines(lines: &mut Vec<Line<'static>>, task: &Task, selected: bool) {
    let marker = if selected {
        Span::styled(
            "> ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let title_style = if task.completed {
        Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default()
    };

    lines.push(Line::from(vec![
        marker,
        Span::raw(checkbox),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            task.priority.label(),
            Style::default().fg(priority_color(task.priority)),
        ),
        Span::raw("  "),
        Span::styled(
            format_created(task.created_at),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    if !task.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("      {}", task.description),
            Style::default().fg(Color::Gray),
        )));
    }
}

fn draw_empty_state(f: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    let (heading, hint) = view::empty_state(app.snapshot.filter);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    let counts = TaskCounts::tally(&app.snapshot.tasks);
    let mut spans = vec![Span::styled(
        "a:add  Space:toggle  d:delete  1/2/3:filter  Tab:cycle  j/k:move  q:quit",
        Style::default().fg(Color::DarkGray),
    )];
    if counts.all > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} of {} tasks completed", counts.completed, counts.all),
            Style::default().fg(Color::Gray),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

fn char_col(s: &str, cursor: usize) -> usize {
    s[..cursor].chars().count()
}

fn scroll_offset(selected_start: usize, total: usize, height: u16) -> u16 {
    let height = usize::from(height);
    if height == 0 || total <= height {
        return 0;
    }
    let max_offset = total - height;
    // Keep the selected row in view once the list overflows
    let offset = selected_start.saturating_sub(height / 2).min(max_offset);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}

const fn priority_name(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

fn format_created(created_at: DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y").to_string()
}
