use serde::{Deserialize, Serialize};

use crate::markup::{
    parser::{lines, parse_line},
    scanner::is_word,
    Segment,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// One rendered input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub segments: Vec<Segment>,
    pub align: TextAlign,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let blocks = lines(text)
            .map(|line| Block {
                segments: parse_line(line),
                align: if is_formula_line(line) {
                    TextAlign::Center
                } else {
                    TextAlign::Start
                },
            })
            .collect();
        Self { blocks }
    }
}

/// Whether a line reads as a standalone formula, to be shown centered.
///
/// Needs an `=` next to something operand-like, and no Arabic letters so
/// that prose mentioning an equality stays in the text flow.
pub fn is_formula_line(line: &str) -> bool {
    line.contains('=')
        && line.contains(|c: char| c == '(' || c == '²' || is_word(c))
        && !line.contains(is_arabic_letter)
}

fn is_arabic_letter(c: char) -> bool {
    c.is_alphabetic()
        && matches!(c,
            '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}')
}
