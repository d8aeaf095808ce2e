//! # Theme Mapper
//!
//! Maps every [`StyleClass`] to a [`VisualStyle`] from host design tokens.
//!
//! Tokens are looked up in the mode's own table, then in `base`, then in the
//! built-in defaults for that mode. A token that is present but not a valid
//! color is logged and treated as absent. The result is meant to be computed
//! once per mode change.

pub mod color;

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::decorate::StyleClass;

pub use color::{Color, ParseColorError, ThemeError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Host-supplied design token registry: token name to color string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTokens {
    pub base: BTreeMap<String, String>,
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

impl DesignTokens {
    fn for_mode(&self, mode: ThemeMode) -> &BTreeMap<String, String> {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Resolves `token` for `mode`, ignoring invalid values.
    pub fn color(&self, mode: ThemeMode, token: &str) -> Option<Color> {
        [self.for_mode(mode), &self.base]
            .into_iter()
            .filter_map(|table| table.get(token))
            .find_map(|value| match Color::parse_token(token, value) {
                Ok(color) => Some(color),
                Err(e) => {
                    warn!("{e}, falling back");
                    None
                }
            })
    }
}

/// Token names the mapper reads.
pub mod tokens {
    pub const BLOCK_BACKGROUND: &str = "block.background";
    pub const BLOCK_BORDER: &str = "block.border";
    pub const DELIMITER: &str = "color.delimiter";
    pub const KEYWORD: &str = "color.keyword";
    pub const IDENTIFIER: &str = "color.identifier";
    pub const KEY: &str = "color.key";
    pub const STRING: &str = "color.string";
    pub const NUMBER: &str = "color.number";
    pub const BOOLEAN: &str = "color.boolean";
    pub const COMMENT: &str = "color.comment";
    pub const MARKUP: &str = "color.markup";
    pub const LINK: &str = "color.link";

    pub const ALL: [&str; 12] = [
        BLOCK_BACKGROUND,
        BLOCK_BORDER,
        DELIMITER,
        KEYWORD,
        IDENTIFIER,
        KEY,
        STRING,
        NUMBER,
        BOOLEAN,
        COMMENT,
        MARKUP,
        LINK,
    ];
}

/// Built-in value for `token` in `mode`.
fn default_color(mode: ThemeMode, token: &str) -> Option<Color> {
    let (light, dark) = match token {
        tokens::BLOCK_BACKGROUND => ("#f5f5fa", "#25253a"),
        tokens::BLOCK_BORDER => ("#c8c8dc", "#45475a"),
        tokens::DELIMITER => ("#9090a8", "#6c7086"),
        tokens::KEYWORD => ("#8839ef", "#cba6f7"),
        tokens::IDENTIFIER => ("#1e66f5", "#89b4fa"),
        tokens::KEY => ("#d20f39", "#f38ba8"),
        tokens::STRING => ("#40a02b", "#a6e3a1"),
        tokens::NUMBER => ("#fe640b", "#fab387"),
        tokens::BOOLEAN => ("#df8e1d", "#f9e2af"),
        tokens::COMMENT => ("#8c8fa1", "#7f849c"),
        tokens::MARKUP => ("#9ca0b0", "#585b70"),
        tokens::LINK => ("#04a5e5", "#89dceb"),
        _ => return None,
    };
    let value = match mode {
        ThemeMode::Light => light,
        ThemeMode::Dark => dark,
    };
    value.parse().ok()
}

/// Visual properties for one style class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisualStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub border: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Token usage for a style class before resolution.
#[derive(Default)]
struct Recipe {
    foreground: Option<&'static str>,
    background: Option<&'static str>,
    border: Option<&'static str>,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Recipe {
    fn fg(token: &'static str) -> Self {
        Self {
            foreground: Some(token),
            ..Default::default()
        }
    }
}

fn recipe(class: StyleClass) -> Recipe {
    match class {
        StyleClass::Block => Recipe {
            background: Some(tokens::BLOCK_BACKGROUND),
            border: Some(tokens::BLOCK_BORDER),
            ..Default::default()
        },
        StyleClass::Delimiter => Recipe::fg(tokens::DELIMITER),
        StyleClass::ScopeKeyword | StyleClass::QuillKeyword => Recipe {
            bold: true,
            ..Recipe::fg(tokens::KEYWORD)
        },
        StyleClass::KeywordName => Recipe::fg(tokens::IDENTIFIER),
        StyleClass::YamlKey => Recipe::fg(tokens::KEY),
        StyleClass::YamlString => Recipe::fg(tokens::STRING),
        StyleClass::YamlNumber => Recipe::fg(tokens::NUMBER),
        StyleClass::YamlBoolean => Recipe::fg(tokens::BOOLEAN),
        StyleClass::YamlComment => Recipe {
            italic: true,
            ..Recipe::fg(tokens::COMMENT)
        },
        StyleClass::BoldDelimiter | StyleClass::ItalicDelimiter => Recipe::fg(tokens::MARKUP),
        StyleClass::Bold => Recipe {
            bold: true,
            ..Default::default()
        },
        StyleClass::Italic => Recipe {
            italic: true,
            ..Default::default()
        },
        StyleClass::LinkBracket | StyleClass::LinkParen => Recipe::fg(tokens::MARKUP),
        StyleClass::LinkText => Recipe {
            underline: true,
            ..Recipe::fg(tokens::LINK)
        },
        StyleClass::LinkUrl | StyleClass::LinkReference => Recipe::fg(tokens::COMMENT),
    }
}

/// Resolved styles for every style class in one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStyles {
    mode: ThemeMode,
    styles: BTreeMap<StyleClass, VisualStyle>,
}

impl ThemeStyles {
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn get(&self, class: StyleClass) -> VisualStyle {
        self.styles.get(&class).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleClass, &VisualStyle)> {
        self.styles.iter().map(|(class, style)| (*class, style))
    }
}

/// Computes the style table for `mode`.
pub fn theme_styles(mode: ThemeMode, tokens: &DesignTokens) -> ThemeStyles {
    let resolve = |token: Option<&'static str>| {
        token.and_then(|t| tokens.color(mode, t).or_else(|| default_color(mode, t)))
    };

    let styles = StyleClass::ALL
        .into_iter()
        .map(|class| {
            let r = recipe(class);
            let style = VisualStyle {
                foreground: resolve(r.foreground),
                background: resolve(r.background),
                border: resolve(r.border),
                bold: r.bold,
                italic: r.italic,
                underline: r.underline,
            };
            (class, style)
        })
        .collect();

    ThemeStyles { mode, styles }
}
