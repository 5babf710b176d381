mod css;
mod html;
mod js;

use crate::format::Format;

/// Lexical class assigned to a run of source text.
///
/// Tokenizers classify each format's interesting ranges; everything else is
/// `Plain`. Consumers map kinds to markup span classes or terminal styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Comment,
    Str,
    Number,
    Keyword,
    Tag,
    Attr,
    Value,
    Property,
    Selector,
}

impl TokenKind {
    fn span_class(self) -> &'static str {
        match self {
            TokenKind::Plain => "",
            TokenKind::Comment => "syntax-comment",
            TokenKind::Str => "syntax-string",
            TokenKind::Number => "syntax-number",
            TokenKind::Keyword => "syntax-keyword",
            TokenKind::Tag => "syntax-tag",
            TokenKind::Attr => "syntax-attr",
            TokenKind::Value => "syntax-value",
            TokenKind::Property => "syntax-property",
            TokenKind::Selector => "syntax-selector",
        }
    }
}

/// One classified, non-overlapping run of text.
///
/// Concatenating the `text` of every token reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Escape markup-significant characters for HTML display.
///
/// Single left-to-right pass; ampersand is handled together with the angle
/// brackets so entities it introduces are never re-escaped. The markup
/// renderer is the only call site in the display path, keeping escaping to
/// exactly one pass per content lifecycle.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Classify `text` for the given format in a single pass.
///
/// Formats without a tokenizer produce one `Plain` token covering the whole
/// input. Tokenizers never fail; anything they don't recognize stays plain.
pub fn tokenize(text: &str, format: Format) -> Vec<Token> {
    match format {
        Format::Html => html::tokenize(text),
        Format::JavaScript => js::tokenize(text),
        Format::Css => css::tokenize(text),
        _ => {
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Token {
                    kind: TokenKind::Plain,
                    text: text.to_owned(),
                }]
            }
        }
    }
}

/// Render escaped, highlighted HTML markup for `text`.
///
/// Plain runs are escaped as-is; classified runs are additionally wrapped in
/// `<span class="syntax-...">` tags. Unrecognized formats therefore come out
/// escaped but unhighlighted.
pub fn highlight(text: &str, format: Format) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for token in tokenize(text, format) {
        match token.kind {
            TokenKind::Plain => out.push_str(&escape(&token.text)),
            kind => {
                out.push_str("<span class=\"");
                out.push_str(kind.span_class());
                out.push_str("\">");
                out.push_str(&escape(&token.text));
                out.push_str("</span>");
            }
        }
    }
    out
}

/// Append a token, merging consecutive plain runs so the stream stays
/// minimal.
fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, text: String) {
    if text.is_empty() {
        return;
    }
    if kind == TokenKind::Plain
        && let Some(last) = tokens.last_mut()
        && last.kind == TokenKind::Plain
    {
        last.text.push_str(&text);
        return;
    }
    tokens.push(Token { kind, text });
}
