use std::fmt;

use serde::Serialize;

/// Fill color for map markers and legend swatches. The names are valid CSS
/// color keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
    Gray,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
            ColorToken::Blue => "blue",
            ColorToken::Gray => "gray",
        }
    }

    /// Text color that stays readable on top of this fill.
    pub fn text_color(&self) -> &'static str {
        match self {
            ColorToken::Yellow => "black",
            _ => "white",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
