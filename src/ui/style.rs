use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::highlight::TokenKind;

pub const COLOR_GUTTER: Color = Color::DarkGray;
pub const COLOR_SELECTED_BG: Color = Color::Rgb(59, 66, 82);

pub fn make_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .title(title.to_owned())
        .borders(Borders::ALL)
        .border_style(style)
}

/// Terminal style for a token kind under the active theme.
pub fn token_style(kind: TokenKind, dark: bool) -> Style {
    let plain = if dark { Color::White } else { Color::Black };
    match kind {
        TokenKind::Plain => Style::default().fg(plain),
        TokenKind::Comment => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        TokenKind::Str => Style::default().fg(Color::Green),
        TokenKind::Number => Style::default().fg(Color::Magenta),
        TokenKind::Keyword => {
            let fg = if dark { Color::Cyan } else { Color::Blue };
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        }
        TokenKind::Tag => Style::default().fg(Color::Red),
        TokenKind::Attr => Style::default().fg(Color::Yellow),
        TokenKind::Value => Style::default().fg(Color::Green),
        TokenKind::Property => {
            let fg = if dark { Color::Cyan } else { Color::Blue };
            Style::default().fg(fg)
        }
        TokenKind::Selector => Style::default().fg(Color::Yellow),
    }
}
