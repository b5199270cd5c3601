use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use self::scanner::denormalize_operators;

pub mod parser;
pub mod scanner;

/// One node of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    PlainText {
        content: String,
    },
    Fraction {
        numerator: Vec<Segment>,
        denominator: Vec<Segment>,
    },
    Root {
        radicand: Vec<Segment>,
    },
    ColoredSpan {
        color_key: String,
        content: Vec<Segment>,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::PlainText {
            content: content.into(),
        }
    }

    /// Concatenates the plain-text leaves below this node, dropping all
    /// structure.
    pub fn plain_text(&self) -> String {
        match self {
            Segment::PlainText { content } => content.clone(),
            Segment::Fraction {
                numerator,
                denominator,
            } => plain_text(numerator) + &plain_text(denominator),
            Segment::Root { radicand } => plain_text(radicand),
            Segment::ColoredSpan { content, .. } => plain_text(content),
        }
    }

    /// Whether this node is anything other than plain text.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Segment::PlainText { .. })
    }

    /// Number of structural nodes in this subtree, including this one.
    pub fn structure_count(&self) -> usize {
        let own = usize::from(self.is_structural());
        own + match self {
            Segment::PlainText { .. } => 0,
            Segment::Fraction {
                numerator,
                denominator,
            } => structure_count(numerator) + structure_count(denominator),
            Segment::Root { radicand } => structure_count(radicand),
            Segment::ColoredSpan { content, .. } => structure_count(content),
        }
    }
}

pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::plain_text).join("")
}

pub fn structure_count(segments: &[Segment]) -> usize {
    segments.iter().map(Segment::structure_count).sum()
}

/// Writes the segments back out as markup.
pub fn to_markup(segments: &[Segment]) -> String {
    segments.iter().join("")
}

/// Re-emits markup with operator spacing undone. Trees produced by the
/// parser parse back to themselves; roots always come out parenthesized.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::PlainText { content } => write!(f, "{}", denormalize_operators(content)),
            Segment::Fraction {
                numerator,
                denominator,
            } => write!(f, "{}/{}", to_markup(numerator), to_markup(denominator)),
            Segment::Root { radicand } => write!(f, "√({})", to_markup(radicand)),
            Segment::ColoredSpan { color_key, content } => {
                write!(f, "{{#{color_key}:{}}}", to_markup(content))
            }
        }
    }
}
