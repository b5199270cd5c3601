use std::collections::BTreeMap;

use crate::{
    error::{Error, Result},
    markup::scanner::is_color_name,
};

const DEFAULT_COLORS: [(&str, &str); 7] = [
    ("blue", "#2563eb"),
    ("red", "#dc2626"),
    ("green", "#16a34a"),
    ("orange", "#ea580c"),
    ("indigo", "#4f46e5"),
    ("purple", "#9333ea"),
    ("slate", "#475569"),
];

/// Maps the color keys used in `{#key:...}` spans to display values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_COLORS
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { colors }
    }
}

impl Palette {
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Loads a palette from a JSON object of `name: value` pairs. Only the
    /// listed colors are included; use [`Palette::merge`] to layer them over
    /// the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;

        let mut palette = Self::empty();
        for (name, value) in entries {
            palette.insert(name, value)?;
        }
        Ok(palette)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        let value = value.into();

        if name.is_empty() || !name.chars().all(is_color_name) {
            return Err(Error::InvalidColorName { name });
        }
        let value_is_safe = !value.trim().is_empty()
            && !value.contains(|c: char| matches!(c, '"' | '<' | '>' | ';'));
        if !value_is_safe {
            return Err(Error::InvalidColorValue { name, value });
        }

        self.colors.insert(name, value);
        Ok(())
    }

    /// Overrides and extends this palette with the entries of `other`.
    pub fn merge(&mut self, other: Palette) {
        self.colors.extend(other.colors);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// The display value for a color key. Unknown keys are passed through so
    /// the presentation layer can still try them as color names.
    pub fn color<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.get("purple"), Some("#9333ea"));
        assert_eq!(palette.get("teal"), None);
        assert_eq!(palette.color("indigo"), "#4f46e5");
        assert_eq!(palette.color("teal"), "teal");
    }

    #[test]
    fn test_merge_json_over_defaults() {
        let mut palette = Palette::default();
        let custom = Palette::from_json(r#"{ "blue": "navy", "teal": "rgb(0, 128, 128)" }"#).unwrap();
        palette.merge(custom);

        assert_eq!(palette.get("purple"), Some("#9333ea"));
        assert_eq!(palette.color("blue"), "navy");
        assert_eq!(palette.color("teal"), "rgb(0, 128, 128)");
        assert_eq!(palette.color("red"), "#dc2626");
    }

    #[test]
    fn test_reject_bad_entries() {
        assert!(matches!(
            Palette::from_json(r##"{ "dark blue": "#000" }"##),
            Err(Error::InvalidColorName { .. })
        ));
        assert!(matches!(
            Palette::from_json(r#"{ "blue": "red\" onclick=\"x" }"#),
            Err(Error::InvalidColorValue { .. })
        ));
        assert!(matches!(
            Palette::from_json(r#"{ "blue": "  " }"#),
            Err(Error::InvalidColorValue { .. })
        ));
        assert!(matches!(Palette::from_json("[1, 2]"), Err(Error::Json(_))));
        assert_eq!(Palette::from_json("{}").unwrap(), Palette::empty());
    }
}
