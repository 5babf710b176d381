use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode, NoticeKind};
use crate::ui::{overlay, panels};

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main area above a one-line status bar.
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    // Content on the left, stats on the right.
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(vertical[0]);

    let content_focused =
        !app.show_history && !app.show_menu && app.input_mode == InputMode::Normal;
    panels::draw_content(frame, app, horizontal[0], content_focused);
    panels::draw_stats(frame, app, horizontal[1]);

    if app.show_history {
        panels::draw_history(frame, app, history_area(vertical[0]));
    }
    if app.show_menu {
        overlay::draw_menu_overlay(frame, app, size);
    }
    if app.input_mode == InputMode::OpenPath {
        overlay::draw_path_prompt(frame, app, size);
    }

    draw_status_bar(frame, app, vertical[1]);
}

/// The history panel slides over the right part of the main area.
fn history_area(area: Rect) -> Rect {
    let width = (area.width * 2 / 5).max(24).min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let keys = Span::styled(
        " o open │ h history │ m menu │ t theme │ c copy │ e export │ q quit ",
        Style::default().fg(Color::DarkGray),
    );

    let mut spans = vec![keys];
    if app.pending_reads > 0 {
        spans.push(Span::styled(
            " Reading... ",
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {} ", notice.text),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
