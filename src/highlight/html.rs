use super::{Token, TokenKind, push_token};

fn is_attr_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// Single-pass HTML tokenizer.
///
/// Outside tags only comments and tag openings matter; inside a tag the
/// scanner picks out attribute names (letter/hyphen runs directly followed
/// by `=`) and quoted attribute values following an `=`. Stray `<` that
/// doesn't open a tag stays plain.
pub(super) fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut in_tag = false;
    // True when the last non-whitespace character inside a tag was `=`,
    // meaning a quote here starts an attribute value.
    let mut after_eq = false;

    while i < len {
        let c = chars[i];

        if !in_tag {
            if c == '<' && starts_with(&chars, i, "<!--") {
                let end = find_terminator(&chars, i + 4, "-->");
                push_token(
                    &mut tokens,
                    TokenKind::Comment,
                    chars[i..end].iter().collect(),
                );
                i = end;
                continue;
            }

            if c == '<' {
                let mut j = i + 1;
                if j < len && chars[j] == '/' {
                    j += 1;
                }
                if j < len && chars[j].is_ascii_alphabetic() {
                    // `<` or `</` stays plain; the name becomes a Tag token.
                    push_token(&mut tokens, TokenKind::Plain, chars[i..j].iter().collect());
                    let name_start = j;
                    let mut k = j + 1;
                    while k < len && chars[k].is_ascii_alphanumeric() {
                        k += 1;
                    }
                    push_token(
                        &mut tokens,
                        TokenKind::Tag,
                        chars[name_start..k].iter().collect(),
                    );
                    in_tag = true;
                    after_eq = false;
                    i = k;
                    continue;
                }
            }

            push_token(&mut tokens, TokenKind::Plain, c.to_string());
            i += 1;
            continue;
        }

        // Inside a tag.
        if c == '>' {
            push_token(&mut tokens, TokenKind::Plain, c.to_string());
            in_tag = false;
            i += 1;
            continue;
        }

        if (c == '"' || c == '\'') && after_eq {
            if let Some(end) = find_quote_end(&chars, i + 1, c) {
                push_token(
                    &mut tokens,
                    TokenKind::Value,
                    chars[i..=end].iter().collect(),
                );
                i = end + 1;
            } else {
                push_token(&mut tokens, TokenKind::Plain, c.to_string());
                i += 1;
            }
            after_eq = false;
            continue;
        }

        if is_attr_char(c) {
            let mut j = i + 1;
            while j < len && is_attr_char(chars[j]) {
                j += 1;
            }
            let kind = if j < len && chars[j] == '=' {
                TokenKind::Attr
            } else {
                TokenKind::Plain
            };
            push_token(&mut tokens, kind, chars[i..j].iter().collect());
            after_eq = false;
            i = j;
            continue;
        }

        if c == '=' {
            after_eq = true;
        } else if !c.is_whitespace() {
            after_eq = false;
        }
        push_token(&mut tokens, TokenKind::Plain, c.to_string());
        i += 1;
    }

    tokens
}

fn starts_with(chars: &[char], at: usize, needle: &str) -> bool {
    needle
        .chars()
        .enumerate()
        .all(|(k, nc)| chars.get(at + k) == Some(&nc))
}

/// Index one past `needle`, or `len` when it never appears.
fn find_terminator(chars: &[char], from: usize, needle: &str) -> usize {
    let mut j = from;
    while j < chars.len() {
        if starts_with(chars, j, needle) {
            return j + needle.chars().count();
        }
        j += 1;
    }
    chars.len()
}

/// Index of the closing quote, honoring backslash escapes.
fn find_quote_end(chars: &[char], from: usize, delim: char) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        if chars[j] == '\\' {
            j += 2;
        } else if chars[j] == delim {
            return Some(j);
        } else {
            j += 1;
        }
    }
    None
}
