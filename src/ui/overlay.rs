use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::{App, MenuAction};

/// Dropdown menu with the selectable actions.
pub fn draw_menu_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(28, (MenuAction::ALL.len() + 2) as u16, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Menu ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let items: Vec<ListItem> = MenuAction::ALL
        .iter()
        .map(|action| ListItem::new(Line::from(format!("  {}", action.label()))))
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.menu_index));

    frame.render_stateful_widget(list, inner, &mut list_state);
}

/// Open-file prompt with the path typed so far.
pub fn draw_path_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area.width.saturating_sub(10).min(72), 4, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Open file ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(vec![
            Span::raw(app.path_input.clone()),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            "Enter to open, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Return a centered `Rect` of the given fixed size within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}
