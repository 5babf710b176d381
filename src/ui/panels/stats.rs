use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::style::make_block;

/// The fixed-shape stats panel: six labeled fields.
pub fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let block = make_block("File Stats", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 {
        return;
    }

    let Some(stats) = &app.stats else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No file loaded",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, inner);
        return;
    };

    let rows = [
        ("File Name", stats.name.clone()),
        ("File Size", stats.size.clone()),
        ("File Type", stats.format.label().to_owned()),
        ("Last Opened", stats.last_opened.clone()),
        ("Lines", stats.lines.to_string()),
        ("Characters", stats.characters.clone()),
    ];

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<12}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
