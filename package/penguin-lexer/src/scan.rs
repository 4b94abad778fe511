//! Quote- and parenthesis-aware walking over one line of text.
//!
//! Everything that has to ignore `+`, `,`, `=` or `#` inside string literals
//! goes through [`Scanner`].

use std::str::CharIndices;

pub const QUOTES: [char; 2] = ['"', '\''];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum QuoteState {
    Outside,
    Inside {
        quote: char,
        /// previous char was a backslash inside the literal
        escaped: bool,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Scanned {
    pub index: usize,
    pub char: char,
    /// `true` for the delimiting quotes and every char between them.
    pub in_string: bool,
    /// Parenthesis depth outside string literals. A paren reports the depth it opens from.
    pub depth: usize,
}

impl Scanned {
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        !self.in_string && self.depth == 0
    }
}

#[derive(Debug)]
pub struct Scanner<'src> {
    chars: CharIndices<'src>,
    state: QuoteState,
    depth: usize,
}

impl<'src> Scanner<'src> {
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self {
            chars: text.char_indices(),
            state: QuoteState::Outside,
            depth: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> QuoteState {
        self.state
    }
}

impl Iterator for Scanner<'_> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, c) = self.chars.next()?;
        let scanned = match self.state {
            QuoteState::Outside => {
                if QUOTES.contains(&c) {
                    self.state = QuoteState::Inside { quote: c, escaped: false };
                    Scanned { index, char: c, in_string: true, depth: self.depth }
                } else if c == '(' {
                    let s = Scanned { index, char: c, in_string: false, depth: self.depth };
                    self.depth += 1;
                    s
                } else if c == ')' {
                    self.depth = self.depth.saturating_sub(1);
                    Scanned { index, char: c, in_string: false, depth: self.depth }
                } else {
                    Scanned { index, char: c, in_string: false, depth: self.depth }
                }
            }
            QuoteState::Inside { quote, escaped } => {
                self.state = if escaped {
                    QuoteState::Inside { quote, escaped: false }
                } else if c == '\\' {
                    QuoteState::Inside { quote, escaped: true }
                } else if c == quote {
                    QuoteState::Outside
                } else {
                    QuoteState::Inside { quote, escaped: false }
                };

                Scanned { index, char: c, in_string: true, depth: self.depth }
            }
        };

        Some(scanned)
    }
}

/// Counts `"` and `'` separately, skipping any char right after a backslash,
/// and reports a kind whose count is odd. `"` is reported first.
#[must_use]
pub fn unbalanced_quote(text: &str) -> Option<char> {
    let mut counts = [0usize; QUOTES.len()];
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
            continue
        }

        if let Some(kind) = QUOTES.iter().position(|q| *q == c) {
            counts[kind] += 1;
        }
    }

    QUOTES.into_iter().zip(counts).find(|(_, n)| n % 2 == 1).map(|(q, _)| q)
}

/// Byte index of the first top-level char satisfying `predicate`.
pub fn find_top_level(text: &str, mut predicate: impl FnMut(char) -> bool) -> Option<usize> {
    Scanner::new(text)
        .find(|s| s.is_top_level() && predicate(s.char))
        .map(|s| s.index)
}

/// Splits on `separator` wherever it occurs outside quotes and parentheses.
/// Pieces are trimmed; empty pieces are kept so callers can reject `a,,b`.
#[must_use]
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = vec![];
    let mut start = 0;
    for s in Scanner::new(text) {
        if s.is_top_level() && s.char == separator {
            pieces.push(text[start..s.index].trim());
            start = s.index + separator.len_utf8();
        }
    }
    pieces.push(text[start..].trim());

    pieces
}

/// Drops a trailing `# comment` that sits outside string literals.
#[must_use]
pub fn strip_inline_comment(text: &str) -> &str {
    Scanner::new(text)
        .find(|s| !s.in_string && s.char == '#')
        .map_or(text, |s| &text[..s.index])
}

/// If `text` is exactly one string literal, returns its decoded contents.
///
/// `"a" + "b"` is not a single literal: its first literal closes before the end.
#[must_use]
pub fn unquote(text: &str) -> Option<String> {
    let quote = text.chars().next().filter(|c| QUOTES.contains(c))?;
    let mut scanner = Scanner::new(text);
    scanner.next();

    let mut decoded = String::new();
    let mut closed_at = None;
    while let Some(s) = scanner.next() {
        if scanner.state() == QuoteState::Outside {
            closed_at = Some(s.index);
            break
        }
        decoded.push(s.char);
    }

    let closed_at = closed_at?;
    if closed_at + quote.len_utf8() != text.len() {
        return None
    }

    Some(decode_escapes(&decoded))
}

fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other @ ('\\' | '"' | '\'')) => out.push(other),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{find_top_level, split_top_level, strip_inline_comment, unbalanced_quote, unquote};

    #[test]
    fn each_quote_kind_is_counted_on_its_own() {
        assert_eq!(unbalanced_quote(r#"print("fine")"#), None);
        assert_eq!(unbalanced_quote(r#"print("oops)"#), Some('"'));
        assert_eq!(unbalanced_quote("print('oops)"), Some('\''));
        assert_eq!(unbalanced_quote(r#"print("It's")"#), Some('\''));
        assert_eq!(unbalanced_quote(r#"print('say "hi"')"#), None);
        assert_eq!(unbalanced_quote(r#"print("a' + 'b)"#), Some('"'));
    }

    #[test]
    fn escaped_quote_is_not_counted() {
        assert_eq!(unbalanced_quote(r#"print("say \"hi\"")"#), None);
        assert_eq!(unbalanced_quote(r#"print("It\'s")"#), None);
        assert_eq!(unbalanced_quote(r#"print("trailing \")"#), Some('"'));
    }

    #[test]
    fn split_respects_quotes_and_parens() {
        assert_eq!(split_top_level(r#""a, b", c"#, ','), vec![r#""a, b""#, "c"]);
        assert_eq!(split_top_level(r#"x + "+" + y"#, '+'), vec!["x", r#""+""#, "y"]);
        assert_eq!(split_top_level("input(a, b), c", ','), vec!["input(a, b)", "c"]);
        assert_eq!(split_top_level("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_top_level("", ','), vec![""]);
    }

    #[test]
    fn find_skips_nested_and_quoted() {
        assert_eq!(find_top_level(r#"name = "a=b""#, |c| c == '='), Some(5));
        assert_eq!(find_top_level(r#"print(x=1)"#, |c| c == '='), None);
        assert_eq!(find_top_level(r#""=""#, |c| c == '='), None);
    }

    #[test]
    fn inline_comment_outside_quotes_only() {
        assert_eq!(strip_inline_comment(r#"print("hi")  # greet"#), r#"print("hi")  "#);
        assert_eq!(strip_inline_comment(r##"print("#1 fan")"##), r##"print("#1 fan")"##);
    }

    #[test]
    fn unquote_exact_pair_only() {
        assert_eq!(unquote(r#""Alex""#).as_deref(), Some("Alex"));
        assert_eq!(unquote("'Alex'").as_deref(), Some("Alex"));
        assert_eq!(unquote(r#""""#).as_deref(), Some(""));
        assert_eq!(unquote(r#""It's""#).as_deref(), Some("It's"));
        assert_eq!(unquote(r#""a" + "b""#), None);
        assert_eq!(unquote(r#""Alex'"#), None);
        assert_eq!(unquote("Alex"), None);
        assert_eq!(unquote(r#"""#), None);
    }

    #[test]
    fn unquote_decodes_escapes() {
        assert_eq!(unquote(r#""say \"hi\"""#).as_deref(), Some(r#"say "hi""#));
        assert_eq!(unquote(r#""a\nb""#).as_deref(), Some("a\nb"));
        assert_eq!(unquote(r#""C:\path""#).as_deref(), Some(r"C:\path"));
    }
}
