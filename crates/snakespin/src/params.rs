use derive_more::From;
use palette::Srgb;
use palette::rgb::FromHexError;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

pub const DEFAULT_SIZE: f64 = 60.0;
pub const DEFAULT_SPEED: f64 = 1.0;
pub const DEFAULT_LENGTH: f64 = 0.8;
pub const DEFAULT_COLOR: &str = "#10B981";

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: FromHexError,
    },
}

/// Decorative marker style placed along the arc.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Scales,
    Dots,
    Zigzag,
}

impl Pattern {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    #[default]
    Spinner,
}

/// An sRGB colour, written and parsed as `#rrggbb`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    From,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Color(Srgb<u8>);

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Channels scaled to `0.0..=1.0`, the form cairo expects.
    pub fn components(&self) -> (f64, f64, f64) {
        self.0.into_format::<f64>().into_components()
    }
}

impl Default for Color {
    fn default() -> Self {
        // #10B981
        Self::new(0x10, 0xb9, 0x81)
    }
}

impl FromStr for Color {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self)
            .map_err(|source| ParamsError::InvalidColor {
                value: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.0.red, self.0.green, self.0.blue
        )
    }
}

/// Inputs of the indicator. Read-only from the animation's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Rendered width and height in pixels.
    pub size: f64,
    pub color: Color,
    /// Rotation multiplier.
    pub speed: f64,
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    /// Target arc length as a fraction of the full circle, `0.0..=0.9`.
    pub length: f64,
    pub pattern: Pattern,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: Color::default(),
            speed: DEFAULT_SPEED,
            kind: IndicatorKind::Spinner,
            length: DEFAULT_LENGTH,
            pattern: Pattern::Scales,
        }
    }
}
