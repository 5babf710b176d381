use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::style::{COLOR_GUTTER, make_block, token_style};

pub fn draw_content(frame: &mut Frame, app: &App, area: Rect, focused: bool) {
    let title = match &app.preview {
        Some(preview) => preview.name.as_str(),
        None => "Preview",
    };
    let block = make_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 6 {
        return;
    }

    let Some(preview) = &app.preview else {
        let hint = if app.pending_reads > 0 {
            "Reading..."
        } else {
            "Press o to open a file, h for history"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, inner);
        return;
    };

    let display_lines: Vec<Line> = preview
        .lines
        .iter()
        .enumerate()
        .map(|(i, segments)| {
            let line_num = i + 1;
            let gutter = Span::styled(format!("{line_num:>4} "), Style::default().fg(COLOR_GUTTER));
            let mut spans = vec![gutter];
            for (kind, text) in segments {
                spans.push(Span::styled(text.as_str(), token_style(*kind, app.dark_mode)));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(display_lines).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, inner);
}
