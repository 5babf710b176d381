use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph};

use crate::app::App;
use crate::stats::{format_time_ago, now_millis};
use crate::ui::style::{COLOR_SELECTED_BG, make_block};

/// Side panel listing recent files, newest insert first.
pub fn draw_history(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Clear, area);

    let block = make_block("History", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 4 {
        return;
    }

    if app.history.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No history yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Files you preview will appear here",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let now = now_millis();
    let items: Vec<ListItem> = app
        .history
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.format.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(entry.name.clone()),
                Span::styled(
                    format!("  {}", format_time_ago(entry.timestamp, now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.history_index));

    frame.render_stateful_widget(list, inner, &mut list_state);
}
