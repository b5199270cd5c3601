use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::{document::Document, error::Result, generate_html, palette::Palette};

/// Which output format to produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq, clap::ValueEnum)]
pub enum Format {
    /// An HTML fragment, one `div` per line
    Html,
    /// The segment tree as `{ "blocks": [...] }`
    Json,
}

/// Where the lesson text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// A missing path or `-` reads stdin.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Input::Path(path),
            _ => Input::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Input::Path(path) => Ok(fs::read_to_string(path)?),
            Input::Stdin => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }
}

/// The default palette, with the entries of the JSON file at `path` layered
/// over it.
pub fn load_palette(path: Option<&Path>) -> Result<Palette> {
    let mut palette = Palette::default();
    if let Some(path) = path {
        palette.merge(Palette::from_json(&fs::read_to_string(path)?)?);
        tracing::info!("loaded palette from {}", path.display());
    }
    Ok(palette)
}

/// Renders `input` in the given format. One trailing newline is ignored so
/// files ending in `\n` do not gain an empty last line.
pub fn generate(input: &str, format: Format, palette: &Palette) -> Result<String> {
    let text = input.strip_suffix('\n').unwrap_or(input);
    match format {
        Format::Html => Ok(generate_html(text, palette)),
        Format::Json => Ok(serde_json::to_string_pretty(&Document::from_text(text))? + "\n"),
    }
}
