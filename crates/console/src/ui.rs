//! Rendering for the add inventory source form.
//!
//! Layout, top to bottom: header with the parent inventory, the visible
//! fields, an error notice when the last submit failed, and a status/hint line.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::form::{Field, FieldKind};

/// Title of the inline notice shown after a failed submit.
pub const ERROR_NOTICE_TITLE: &str = "Error";

const HINTS: &str =
    "Tab/Shift+Tab move  Space/Left/Right toggle  Ctrl+S save  Esc cancel  Ctrl+C quit";

pub fn render(f: &mut Frame, app: &App) {
    let failure = app.controller.failure();
    let notice_height = if failure.is_some() { 3 } else { 0 };

    let [header, body, notice, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(notice_height),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_header(f, header, app);
    render_fields(f, body, app);
    if let Some(failure) = failure {
        let paragraph = Paragraph::new(failure.message())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(ERROR_NOTICE_TITLE),
            );
        f.render_widget(paragraph, notice);
    }
    render_status(f, status, app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let inventory = app.controller.inventory();
    let target = if inventory.name.is_empty() {
        format!("Inventory {}", inventory.id)
    } else {
        format!("{} (ID {})", inventory.name, inventory.id)
    };
    let header = Paragraph::new(target).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Add new source"),
    );
    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let focused = form.focused();
    let mut lines: Vec<Line> = Vec::new();

    for field in form.visible_fields() {
        let is_focused = field == focused;
        let marker = if is_focused { "> " } else { "  " };
        let label_style = if is_focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let value = form.value_text(field);
        if field.kind() == FieldKind::Multiline {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}:", field.label()), label_style),
            ]));
            for text in value.lines() {
                lines.push(Line::from(format!("      {}", text)));
            }
        } else {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", required_label(field)), label_style),
                Span::raw(value),
            ]));
        }

        if let Some(message) = form.error_for(field) {
            lines.push(Line::styled(
                format!("    ! {}", message),
                Style::default().fg(Color::Red),
            ));
        }
    }

    let fields = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(fields, area);
}

fn required_label(field: Field) -> String {
    match field {
        Field::Name | Field::Source => format!("{} *", field.label()),
        _ => field.label().to_string(),
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.controller.is_submitting() {
        Line::styled(
            format!("Saving... {}", app.spinner()),
            Style::default().fg(Color::Yellow),
        )
    } else if app.options_loading {
        Line::from("Loading source choices...")
    } else if let Some(error) = &app.options_error {
        Line::styled(
            format!("Could not load source choices: {}", error),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Line::styled(HINTS, Style::default().fg(Color::DarkGray))
    };
    f.render_widget(Paragraph::new(line), area);
}
