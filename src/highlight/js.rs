use super::{Token, TokenKind, push_token};

/// Keywords wrapped as `Keyword` tokens, whole-word only.
const KEYWORDS: [&str; 28] = [
    "function",
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "break",
    "continue",
    "return",
    "var",
    "let",
    "const",
    "new",
    "delete",
    "typeof",
    "instanceof",
    "true",
    "false",
    "null",
    "undefined",
    "try",
    "catch",
    "finally",
    "throw",
    "class",
    "extends",
];

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Single-pass JavaScript tokenizer.
///
/// Classifies line and block comments, string literals (backtick, double,
/// single; backslash escapes tolerated, unterminated literals stay plain),
/// word-bounded numeric literals, and the fixed keyword list. Comments and
/// strings are matched first, so a keyword inside either is never wrapped.
pub(super) fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        let c = chars[i];

        // Line comment: up to, not including, the newline.
        if c == '/' && i + 1 < len && chars[i + 1] == '/' {
            let mut j = i + 2;
            while j < len && chars[j] != '\n' {
                j += 1;
            }
            push_token(
                &mut tokens,
                TokenKind::Comment,
                chars[i..j].iter().collect(),
            );
            i = j;
            continue;
        }

        // Block comment: may span newlines; runs to EOF when unterminated.
        if c == '/' && i + 1 < len && chars[i + 1] == '*' {
            let end = find_block_comment_end(&chars, i + 2);
            push_token(
                &mut tokens,
                TokenKind::Comment,
                chars[i..end].iter().collect(),
            );
            i = end;
            continue;
        }

        // String literals. An unterminated literal is left plain rather
        // than swallowing the rest of the file.
        if c == '`' || c == '"' || c == '\'' {
            if let Some(end) = find_string_end(&chars, i + 1, c) {
                push_token(
                    &mut tokens,
                    TokenKind::Str,
                    chars[i..=end].iter().collect(),
                );
                i = end + 1;
            } else {
                push_token(&mut tokens, TokenKind::Plain, c.to_string());
                i += 1;
            }
            continue;
        }

        // Numeric literal: integer or decimal, both edges word-bounded.
        if c.is_ascii_digit() {
            let mut j = i + 1;
            while j < len && chars[j].is_ascii_digit() {
                j += 1;
            }
            if j + 1 < len && chars[j] == '.' && chars[j + 1].is_ascii_digit() {
                j += 2;
                while j < len && chars[j].is_ascii_digit() {
                    j += 1;
                }
            }
            if j < len && is_word(chars[j]) {
                // Something like `1px`: no trailing boundary, so the whole
                // word run stays plain.
                while j < len && is_word(chars[j]) {
                    j += 1;
                }
                push_token(&mut tokens, TokenKind::Plain, chars[i..j].iter().collect());
            } else {
                push_token(
                    &mut tokens,
                    TokenKind::Number,
                    chars[i..j].iter().collect(),
                );
            }
            i = j;
            continue;
        }

        // Identifier or keyword.
        if is_ident_start(c) {
            let mut j = i + 1;
            while j < len && is_ident_continue(chars[j]) {
                j += 1;
            }
            let word: String = chars[i..j].iter().collect();
            let kind = if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Plain
            };
            push_token(&mut tokens, kind, word);
            i = j;
            continue;
        }

        push_token(&mut tokens, TokenKind::Plain, c.to_string());
        i += 1;
    }

    tokens
}

/// Index one past the closing `*/`, or `len` when unterminated.
fn find_block_comment_end(chars: &[char], from: usize) -> usize {
    let mut j = from;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '/' {
            return j + 2;
        }
        j += 1;
    }
    chars.len()
}

/// Index of the closing delimiter, honoring backslash escapes.
fn find_string_end(chars: &[char], from: usize, delim: char) -> Option<usize> {
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

#[cfg(test)]
mod tests {
    use super::super::TokenKind;
    use super::tokenize;

    fn find(tokens: &[super::Token], kind: TokenKind) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn line_comment_stops_at_newline() {
        let tokens = tokenize("// a\nlet x = 1;");
        assert_eq!(find(&tokens, TokenKind::Comment), vec!["// a"]);
        assert_eq!(find(&tokens, TokenKind::Keyword), vec!["let"]);
        assert_eq!(find(&tokens, TokenKind::Number), vec!["1"]);
    }

    #[test]
    fn block_comment_spans_newlines() {
        let tokens = tokenize("/* one\ntwo */ if");
        assert_eq!(find(&tokens, TokenKind::Comment), vec!["/* one\ntwo */"]);
        assert_eq!(find(&tokens, TokenKind::Keyword), vec!["if"]);
    }

    #[test]
    fn unterminated_block_comment_runs_to_eof() {
        let tokens = tokenize("/* open");
        assert_eq!(find(&tokens, TokenKind::Comment), vec!["/* open"]);
    }

    #[test]
    fn keyword_inside_string_stays_string() {
        let tokens = tokenize("\"return home\"");
        assert_eq!(find(&tokens, TokenKind::Str), vec!["\"return home\""]);
        assert!(find(&tokens, TokenKind::Keyword).is_empty());
    }

    #[test]
    fn keyword_inside_comment_stays_comment() {
        let tokens = tokenize("// for the record");
        assert!(find(&tokens, TokenKind::Keyword).is_empty());
    }

    #[test]
    fn escaped_delimiters_stay_inside_the_literal() {
        let tokens = tokenize(r#"'it\'s' + "a \"b\"" + `x\``"#);
        assert_eq!(
            find(&tokens, TokenKind::Str),
            vec![r"'it\'s'", r#""a \"b\"""#, r"`x\``"]
        );
    }

    #[test]
    fn unterminated_string_is_plain() {
        let tokens = tokenize("let s = \"oops");
        assert!(find(&tokens, TokenKind::Str).is_empty());
        assert_eq!(find(&tokens, TokenKind::Keyword), vec!["let"]);
    }

    #[test]
    fn decimals_are_one_number_token() {
        let tokens = tokenize("a = 3.14 + 2");
        assert_eq!(find(&tokens, TokenKind::Number), vec!["3.14", "2"]);
    }

    #[test]
    fn digits_glued_to_letters_are_not_numbers() {
        let tokens = tokenize("margin1px + x2");
        assert!(find(&tokens, TokenKind::Number).is_empty());
    }

    #[test]
    fn identifier_containing_keyword_is_plain() {
        let tokens = tokenize("classes iffy do_it");
        assert!(find(&tokens, TokenKind::Keyword).is_empty());
    }

    #[test]
    fn all_listed_keywords_match_whole_words() {
        for kw in super::KEYWORDS {
            let src = format!("a {kw} b");
            let tokens = tokenize(&src);
            assert_eq!(find(&tokens, TokenKind::Keyword), vec![kw], "{kw}");
        }
    }
}
