use super::{Token, TokenKind, push_token};

fn is_prop_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// Single-pass CSS tokenizer.
///
/// Outside a block, the prefix of a line up to `{` is a selector (a line
/// without `{` stays plain). Inside a block, identifier runs before `:` are
/// property names and the text after `:` up to `;` or `}` is the value.
/// Comments are classified anywhere and brace depth tracks nested blocks.
pub(super) fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut depth: usize = 0;

    while i < len {
        let c = chars[i];

        if c == '/' && i + 1 < len && chars[i + 1] == '*' {
            let end = find_comment_end(&chars, i + 2);
            push_token(
                &mut tokens,
                TokenKind::Comment,
                chars[i..end].iter().collect(),
            );
            i = end;
            continue;
        }

        if depth == 0 {
            // Scan ahead for a `{` on this line; the prefix is a selector.
            let mut j = i;
            while j < len
                && chars[j] != '{'
                && chars[j] != '\n'
                && !(chars[j] == '/' && j + 1 < len && chars[j + 1] == '*')
            {
                j += 1;
            }

            if j < len && chars[j] == '{' {
                let prefix: String = chars[i..j].iter().collect();
                let kind = if prefix.trim().is_empty() {
                    TokenKind::Plain
                } else {
                    TokenKind::Selector
                };
                push_token(&mut tokens, kind, prefix);
                push_token(&mut tokens, TokenKind::Plain, "{".to_owned());
                depth = 1;
                i = j + 1;
            } else {
                // No block opener before the line ends (or a comment starts).
                let mut end = j;
                if end < len && chars[end] == '\n' {
                    end += 1;
                }
                if end == i {
                    // Stopped immediately on a comment opener; let the top
                    // of the loop classify it.
                    continue;
                }
                push_token(&mut tokens, TokenKind::Plain, chars[i..end].iter().collect());
                i = end;
            }
            continue;
        }

        // Inside a declaration block.
        match c {
            '}' => {
                push_token(&mut tokens, TokenKind::Plain, c.to_string());
                depth -= 1;
                i += 1;
            }
            '{' => {
                push_token(&mut tokens, TokenKind::Plain, c.to_string());
                depth += 1;
                i += 1;
            }
            ':' => {
                push_token(&mut tokens, TokenKind::Plain, c.to_string());
                i += 1;
                // Leading whitespace stays outside the value token.
                let ws_start = i;
                while i < len && chars[i].is_whitespace() && chars[i] != '\n' {
                    i += 1;
                }
                push_token(
                    &mut tokens,
                    TokenKind::Plain,
                    chars[ws_start..i].iter().collect(),
                );
                let val_start = i;
                while i < len && chars[i] != ';' && chars[i] != '}' {
                    i += 1;
                }
                push_token(
                    &mut tokens,
                    TokenKind::Value,
                    chars[val_start..i].iter().collect(),
                );
            }
            c if is_prop_char(c) => {
                let mut j = i + 1;
                while j < len && is_prop_char(chars[j]) {
                    j += 1;
                }
                // Property only when a colon follows (whitespace allowed).
                let mut k = j;
                while k < len && (chars[k] == ' ' || chars[k] == '\t') {
                    k += 1;
                }
                let kind = if k < len && chars[k] == ':' {
                    TokenKind::Property
                } else {
                    TokenKind::Plain
                };
                push_token(&mut tokens, kind, chars[i..j].iter().collect());
                i = j;
            }
            _ => {
                push_token(&mut tokens, TokenKind::Plain, c.to_string());
                i += 1;
            }
        }
    }

    tokens
}

/// Index one past the closing `*/`, or `len` when unterminated.
fn find_comment_end(chars: &[char], from: usize) -> usize {
    let mut j = from;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '/' {
            return j + 2;
        }
        j += 1;
    }
    chars.len()
}
