use std::{collections::HashMap, ops::Range};

use unscanny::Scanner;

pub const ROOT: char = '√';
pub const PI: char = 'π';

/// ASCII word character, as authored content uses Latin variables only.
pub fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters allowed in a radicand written without parentheses.
pub fn is_radicand(c: char) -> bool {
    is_word(c) || c == PI
}

/// Characters allowed in a fraction operand.
pub fn is_operand(c: char) -> bool {
    is_word(c) || matches!(c, ROOT | PI | '(' | ')' | '+' | '-' | '*')
}

pub fn is_color_name(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Matching closers for the balanced `open`/`close` pairs of a line, keyed
/// by the byte offset of the opener. Unbalanced openers have no entry.
#[derive(Debug)]
pub struct Pairs {
    close: char,
    closers: HashMap<usize, usize>,
}

impl Pairs {
    pub fn new(source: &str, open: char, close: char) -> Self {
        let mut openers = Vec::new();
        let mut closers = HashMap::new();
        for (i, c) in source.char_indices() {
            if c == open {
                openers.push(i);
            } else if c == close {
                if let Some(opener) = openers.pop() {
                    closers.insert(opener, i);
                }
            }
        }
        Self { close, closers }
    }

    /// The closer of the opener at `open`, if it lies before `end`.
    pub fn closer(&self, open: usize, end: usize) -> Option<usize> {
        self.closers.get(&open).copied().filter(|&close| close < end)
    }

    /// Eats up to and including the closer of the opener at `open` and
    /// returns the range between the cursor and the closer.
    fn eat_to_closer(&self, s: &mut Scanner, open: usize) -> Option<Range<usize>> {
        let close = self.closer(open, end_of(s))?;
        let inner = s.cursor()..close;
        s.jump(close + self.close.len_utf8());
        Some(inner)
    }
}

/// Moves the cursor to the next occurrence of `needle`, or to the end.
pub fn skip_to(s: &mut Scanner, needle: &str) {
    let offset = s.after().find(needle).unwrap_or(s.after().len());
    s.jump(s.cursor() + offset);
}

/// Eats a group whose opener is under the cursor and returns the range
/// between the delimiters. When the group never closes, the cursor is left
/// where it was.
pub fn eat_balanced(s: &mut Scanner, pairs: &Pairs) -> Option<Range<usize>> {
    let start = s.cursor();
    s.eat();
    let inner = pairs.eat_to_closer(s, start);
    if inner.is_none() {
        s.jump(start);
    }
    inner
}

/// Eats `{#name:content}` and returns the name and the range of the
/// content.
pub fn eat_colored_span<'a>(
    s: &mut Scanner<'a>,
    braces: &Pairs,
) -> Option<(&'a str, Range<usize>)> {
    let start = s.cursor();
    if s.eat_if("{#") {
        let name = s.eat_while(is_color_name);
        if !name.is_empty() && s.eat_if(':') {
            if let Some(content) = braces.eat_to_closer(s, start) {
                return Some((name, content));
            }
        }
    }

    s.jump(start);
    None
}

/// Eats `√(...)` or `√token` and returns the range of the radicand without
/// its parentheses.
pub fn eat_root(s: &mut Scanner, parens: &Pairs) -> Option<Range<usize>> {
    let start = s.cursor();
    if !s.eat_if(ROOT) {
        return None;
    }

    let radicand = if s.at('(') {
        eat_balanced(s, parens)
    } else {
        let token_start = s.cursor();
        s.eat_while(is_radicand);
        Some(token_start..s.cursor()).filter(|token| !token.is_empty())
    };

    if radicand.is_none() {
        s.jump(start);
    }
    radicand
}

/// Eats `numerator / denominator` where both sides are maximal operand runs.
///
/// The scanner must sit at the start of an operand run. On failure the
/// cursor is left where it was.
pub fn eat_fraction(s: &mut Scanner) -> Option<(Range<usize>, Range<usize>)> {
    let start = s.cursor();
    s.eat_while(is_operand);
    let numerator = start..s.cursor();
    if !numerator.is_empty() {
        s.eat_while(char::is_whitespace);
        if s.eat_if('/') {
            s.eat_while(char::is_whitespace);
            let denominator_start = s.cursor();
            s.eat_while(is_operand);
            let denominator = denominator_start..s.cursor();
            if !denominator.is_empty() {
                return Some((numerator, denominator));
            }
        }
    }

    s.jump(start);
    None
}

/// Spaces out arithmetic operators in plain text.
pub fn normalize_operators(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '*' => normalized.push_str(" × "),
            '+' => normalized.push_str(" + "),
            '-' => normalized.push_str(" - "),
            '=' => normalized.push_str(" = "),
            _ => normalized.push(c),
        }
    }
    normalized
}

/// Undoes [`normalize_operators`].
pub fn denormalize_operators(text: &str) -> String {
    text.replace(" × ", "*")
        .replace(" + ", "+")
        .replace(" - ", "-")
        .replace(" = ", "=")
}

fn end_of(s: &Scanner) -> usize {
    s.cursor() + s.after().len()
}
