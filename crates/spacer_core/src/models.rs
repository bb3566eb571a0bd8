//! Data models for spacer configs.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_BREAKPOINT;

/// Config document as loaded, before validation.
///
/// Every field is kept untyped so that a missing or wrongly shaped field is
/// reported by the validator rather than by the parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawConfig {
    pub properties: Option<Value>,
    pub options: Option<Value>,
    pub spacers: Option<Value>,
    pub file_types: Option<Value>,
    pub filename: Option<Value>,
}

/// Box-model property a class sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssProperty {
    Margin,
    Padding,
}

impl CssProperty {
    /// Every accepted property, in the order reported to users.
    pub const ALL: [Self; 2] = [Self::Margin, Self::Padding];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == token)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Margin => "margin",
            Self::Padding => "padding",
        }
    }

    /// Single letter used in selector names.
    pub fn shorthand(&self) -> &'static str {
        match self {
            Self::Margin => "m",
            Self::Padding => "p",
        }
    }
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directional suffix controlling which sides receive the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingOption {
    /// Left and right.
    X,
    /// Top and bottom.
    Y,
    Top,
    Bottom,
    Left,
    Right,
}

impl SpacingOption {
    /// Every accepted option, in the order reported to users.
    pub const ALL: [Self; 6] = [
        Self::X,
        Self::Y,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.token() == token)
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::X => "-x",
            Self::Y => "-y",
            Self::Top => "-top",
            Self::Bottom => "-bottom",
            Self::Left => "-left",
            Self::Right => "-right",
        }
    }
}

impl fmt::Display for SpacingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Css,
    Scss,
    Less,
    Json,
}

impl FileType {
    /// Every accepted output format, in the order reported to users.
    pub const ALL: [Self; 4] = [Self::Css, Self::Scss, Self::Less, Self::Json];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.extension() == token)
    }

    /// File extension, identical to the config token.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where a spacer value applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint<'a> {
    Default,
    MinWidth(&'a str),
}

impl<'a> Breakpoint<'a> {
    pub fn from_key(key: &'a str) -> Self {
        if key == DEFAULT_BREAKPOINT {
            Self::Default
        } else {
            Self::MinWidth(key)
        }
    }
}

/// One named spacing size and its value per breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spacer {
    pub key: String,
    /// Breakpoint key to value, in config order.
    pub breakpoints: Vec<(String, String)>,
}

impl Spacer {
    /// A spacer whose first breakpoint is `default`.
    pub fn new(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            breakpoints: vec![(DEFAULT_BREAKPOINT.to_string(), default.into())],
        }
    }

    /// A spacer with breakpoints in the given order.
    pub fn from_breakpoints(key: impl Into<String>, breakpoints: Vec<(String, String)>) -> Self {
        Self {
            key: key.into(),
            breakpoints,
        }
    }

    pub fn with_breakpoint(mut self, width: impl Into<String>, value: impl Into<String>) -> Self {
        self.breakpoints.push((width.into(), value.into()));
        self
    }

    /// Value of the `default` breakpoint.
    pub fn default_value(&self) -> Option<&str> {
        self.breakpoints
            .iter()
            .find(|(key, _)| key == DEFAULT_BREAKPOINT)
            .map(|(_, value)| value.as_str())
    }

    /// Values in config order.
    pub fn values(&self) -> impl Iterator<Item = (Breakpoint<'_>, &str)> {
        self.breakpoints
            .iter()
            .map(|(key, value)| (Breakpoint::from_key(key), value.as_str()))
    }
}

/// Ordered collection of spacers keyed by scale key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacingScale {
    spacers: Vec<Spacer>,
}

impl SpacingScale {
    pub fn get(&self, key: &str) -> Option<&Spacer> {
        self.spacers.iter().find(|s| s.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.spacers.iter().map(|s| s.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.spacers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spacers.is_empty()
    }
}

impl FromIterator<Spacer> for SpacingScale {
    fn from_iter<I: IntoIterator<Item = Spacer>>(iter: I) -> Self {
        Self {
            spacers: iter.into_iter().collect(),
        }
    }
}

/// A validated config. Read-only for the rest of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacerConfig {
    pub properties: Vec<CssProperty>,
    pub options: Vec<SpacingOption>,
    pub spacers: SpacingScale,
    pub file_types: Vec<FileType>,
    pub filename: String,
}
