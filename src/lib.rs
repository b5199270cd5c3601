use crate::{document::Document, html::HtmlBuilder, palette::Palette};

pub mod cli;
pub mod document;
pub mod error;
pub mod html;
pub mod markup;
pub mod palette;

pub use error::{Error, Result};
pub use markup::{
    parser::{parse_line, render},
    Segment,
};

/// Renders annotated lesson text to an HTML fragment, one `div` per line.
pub fn generate_html(text: &str, palette: &Palette) -> String {
    let document = Document::from_text(text);
    tracing::debug!(lines = document.blocks.len(), "rendering document");

    HtmlBuilder::new(palette).document(&document).build()
}
