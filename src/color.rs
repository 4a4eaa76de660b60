//! Colors carried by paths, with the HSL conversions used for blending.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use thiserror::Error;

/// Largest per-channel difference at which a delivered color still satisfies a receiver (exclusive).
pub const MATCH_TOLERANCE: f32 = 0.2;

// a channel "dominates" above this and is "absent" below the other
const DOMINANT: f32 = 0.6;
const ABSENT: f32 = 0.4;

/// An RGBA color with channels in `[0, 1]`.
///
/// Alpha is carried along but never takes part in matching or mixing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel, 0 to 1.
    pub r: f32,
    /// Green channel, 0 to 1.
    pub g: f32,
    /// Blue channel, 0 to 1.
    pub b: f32,
    /// Opacity, 0 to 1.
    pub a: f32,
}

impl Color {
    /// `#FF0000`
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// `#00FF00`
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// `#0000FF`
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// `#FFFF00`
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// `#800080`
    pub const PURPLE: Self = Self::rgb(128.0 / 255.0, 0.0, 128.0 / 255.0);
    /// `#FF8C00`
    pub const ORANGE: Self = Self::rgb(1.0, 140.0 / 255.0, 0.0);
    /// The "no color" result of mixing nothing.
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// An opaque color from channels in 0 to 1.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Quantize the color channels to 8 bits each, dropping alpha.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Whether the color has no opacity at all.
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Whether every RGB channel of `self` is strictly within `tolerance` of `other`'s.
    ///
    /// Channels are compared independently, not by Euclidean distance.
    pub fn matches(&self, other: &Self, tolerance: f32) -> bool {
        (self.r - other.r).abs() < tolerance
            && (self.g - other.g).abs() < tolerance
            && (self.b - other.b).abs() < tolerance
    }

    /// Convert to hue, saturation and lightness, each in `[0, 1]`.
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = (self.r, self.g, self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }

    /// Convert back from HSL, clamping every channel into `[0, 1]`.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;
        if s == 0.0 {
            let l = l.clamp(0.0, 1.0);
            return Self::rgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::rgb(
            hue_to_channel(p, q, h + 1.0 / 3.0).clamp(0.0, 1.0),
            hue_to_channel(p, q, h).clamp(0.0, 1.0),
            hue_to_channel(p, q, h - 1.0 / 3.0).clamp(0.0, 1.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Hue, saturation and lightness; hue is a fraction of a full turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn, 0 to 1.
    pub h: f32,
    /// Saturation, 0 to 1.
    pub s: f32,
    /// Lightness, 0 to 1.
    pub l: f32,
}

/// The three canonical pigments recognized when exactly two colors meet in a mixer.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum Pigment {
    /// Dominant red.
    Red,
    /// Dominant red and green.
    Yellow,
    /// Dominant blue.
    Blue,
}

impl Pigment {
    /// The pigment `color` reads as, if any. At most one pigment can match a given color.
    pub fn classify(color: &Color) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|pigment| pigment.is(color))
    }

    fn is(&self, color: &Color) -> bool {
        match self {
            Self::Red => color.r > DOMINANT && color.g < ABSENT && color.b < ABSENT,
            Self::Yellow => color.r > DOMINANT && color.g > DOMINANT && color.b < ABSENT,
            Self::Blue => color.b > DOMINANT && color.r < ABSENT && color.g < ABSENT,
        }
    }
}

/// Reasons a hex color string may be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string does not start with `#`.
    #[error("color must start with '#'")]
    MissingHash,
    /// Wrong number of hex digits.
    #[error("invalid color length {0}, expected 6 or 8")]
    InvalidLength(usize),
    /// A character that is not a hex digit.
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(bad));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorError::InvalidLength(hex.len()));
        }

        // all ascii hex digits at this point, so byte slicing is safe
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError::InvalidHex(hex.as_bytes()[i] as char));
        let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
        if hex.len() == 8 {
            color.a = channel(6)? as f32 / 255.0;
        }

        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        if value.a < 1.0 {
            let (r, g, b) = value.to_rgb8();
            format!("#{r:02X}{g:02X}{b:02X}{:02X}", (value.a.clamp(0.0, 1.0) * 255.0).round() as u8)
        } else {
            value.to_string()
        }
    }
}

impl Display for Color {
    /// Formats as `#RRGGBB`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.to_rgb8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}
