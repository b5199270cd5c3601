use std::ops::Range;

use unscanny::Scanner;

use super::{
    scanner::{
        eat_colored_span, eat_fraction, eat_root, is_operand, normalize_operators, skip_to,
        Pairs,
    },
    Segment,
};

/// Nodes never nest deeper than this. Anything further in is kept as text.
pub const MAX_DEPTH: usize = 128;

/// Renders annotated text into one segment sequence per line.
///
/// Never fails: malformed markup is kept as literal text.
pub fn render(text: &str) -> Vec<Vec<Segment>> {
    lines(text).map(parse_line).collect()
}

/// Splits text into the lines `render` works on. Empty text has no lines.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let lines = (!text.is_empty()).then(|| text.split('\n'));
    lines
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parses a single line.
///
/// Colored spans are extracted first, then roots, then fractions. Node
/// interiors are parsed the same way, one level deeper.
pub fn parse_line(source: &str) -> Vec<Segment> {
    tracing::trace!(source, "parsing line");
    let parser = LineParser {
        source,
        parens: Pairs::new(source, '(', ')'),
        braces: Pairs::new(source, '{', '}'),
    };

    let mut segments = Vec::new();
    parser.parse(0..source.len(), 0, &mut segments);
    segments
}

/// Works on byte ranges of one line so that delimiter pairs are matched
/// once per line.
struct LineParser<'a> {
    source: &'a str,
    parens: Pairs,
    braces: Pairs,
}

impl<'a> LineParser<'a> {
    /// Parses `range`, which sits inside `depth` enclosing nodes.
    fn parse(&self, range: Range<usize>, depth: usize, segments: &mut Vec<Segment>) {
        if depth >= MAX_DEPTH {
            tracing::debug!(depth, offset = range.start, "nesting too deep, kept as text");
            push_text(&self.source[range], segments);
            return;
        }
        self.parse_colored_spans(range, depth, segments);
    }

    fn nested(&self, range: Range<usize>, depth: usize) -> Vec<Segment> {
        let mut segments = Vec::new();
        self.parse(range, depth + 1, &mut segments);
        segments
    }

    /// A scanner over the line that stops at the end of `range`, so its
    /// cursor offsets are line offsets.
    fn scanner(&self, range: &Range<usize>) -> Scanner<'a> {
        let mut s = Scanner::new(&self.source[..range.end]);
        s.jump(range.start);
        s
    }

    fn parse_colored_spans(&self, range: Range<usize>, depth: usize, segments: &mut Vec<Segment>) {
        let mut s = self.scanner(&range);
        let mut plain_start = range.start;

        loop {
            skip_to(&mut s, "{#");
            if s.done() {
                break;
            }

            let start = s.cursor();
            if let Some((color_key, content)) = eat_colored_span(&mut s, &self.braces) {
                self.parse_roots(plain_start..start, depth, segments);
                segments.push(Segment::ColoredSpan {
                    color_key: color_key.to_string(),
                    content: self.nested(content, depth),
                });
                plain_start = s.cursor();
                continue;
            }

            tracing::debug!(offset = start, "unterminated colored span kept as text");
            s.eat();
        }

        self.parse_roots(plain_start..range.end, depth, segments);
    }

    fn parse_roots(&self, range: Range<usize>, depth: usize, segments: &mut Vec<Segment>) {
        let mut s = self.scanner(&range);
        let mut plain_start = range.start;

        loop {
            skip_to(&mut s, "√");
            if s.done() {
                break;
            }

            let start = s.cursor();
            if let Some(radicand) = eat_root(&mut s, &self.parens) {
                self.parse_fractions(plain_start..start, depth, segments);
                segments.push(Segment::Root {
                    radicand: self.nested(radicand, depth),
                });
                plain_start = s.cursor();
                continue;
            }

            tracing::debug!(offset = start, "root without radicand kept as text");
            s.eat();
        }

        self.parse_fractions(plain_start..range.end, depth, segments);
    }

    fn parse_fractions(&self, range: Range<usize>, depth: usize, segments: &mut Vec<Segment>) {
        let mut s = self.scanner(&range);
        let mut plain_start = range.start;

        while !s.done() {
            let start = s.cursor();
            if !s.at(is_operand) {
                s.eat();
                continue;
            }

            match eat_fraction(&mut s) {
                Some((numerator, denominator)) => {
                    push_text(&self.source[plain_start..start], segments);
                    segments.push(Segment::Fraction {
                        numerator: self.nested(numerator, depth),
                        denominator: self.nested(denominator, depth),
                    });
                    plain_start = s.cursor();
                }
                // A shorter run starting inside this one cannot match either.
                None => {
                    s.eat_while(is_operand);
                }
            }
        }

        push_text(&self.source[plain_start..range.end], segments);
    }
}

fn push_text(text: &str, segments: &mut Vec<Segment>) {
    if !text.is_empty() {
        segments.push(Segment::text(normalize_operators(text)));
    }
}
