//! Blending the colors of every path feeding a mixer.

use std::f32::consts::TAU;

use unordered_pair::UnorderedPair;

use crate::color::{Color, Hsl, Pigment};

// checked in order; the first matching pair wins
const PIGMENT_PAIRS: [(UnorderedPair<Pigment>, Color); 3] = [
    (UnorderedPair(Pigment::Blue, Pigment::Yellow), Color::GREEN),
    (UnorderedPair(Pigment::Red, Pigment::Blue), Color::PURPLE),
    (UnorderedPair(Pigment::Red, Pigment::Yellow), Color::ORANGE),
];

/// Blend every color arriving at a mixer into one.
///
/// - Nothing in gives [`Color::TRANSPARENT`]; a single color passes through untouched.
/// - Two colors reading as a canonical pigment pair (blue and yellow, red and blue, red and yellow) give that pair's paint-box result, in either order.
/// - Anything else is averaged in HSL space: saturation and lightness arithmetically, hue around the color wheel.
pub fn mix(colors: &[Color]) -> Color {
    match colors {
        [] => Color::TRANSPARENT,
        [only] => *only,
        [a, b] => pigment_pair(a, b).unwrap_or_else(|| blend(colors)),
        _ => blend(colors),
    }
}

fn pigment_pair(a: &Color, b: &Color) -> Option<Color> {
    let key = UnorderedPair(Pigment::classify(a)?, Pigment::classify(b)?);

    PIGMENT_PAIRS.iter()
        .find(|(pair, _)| *pair == key)
        .map(|(_, mixed)| *mixed)
}

fn blend(colors: &[Color]) -> Color {
    let hsl: Vec<Hsl> = colors.iter().map(Color::to_hsl).collect();
    let count = hsl.len() as f32;

    Color::from_hsl(Hsl {
        h: average_hue(hsl.iter().map(|c| c.h)),
        s: hsl.iter().map(|c| c.s).sum::<f32>() / count,
        l: hsl.iter().map(|c| c.l).sum::<f32>() / count,
    })
}

/// Average hues as angles: sum their unit vectors and take the direction of the result, normalized to `[0, 1)`.
///
/// A plain arithmetic mean of 0.98 and 0.02 would land on cyan; this lands on red.
pub(crate) fn average_hue(hues: impl Iterator<Item = f32>) -> f32 {
    let (x, y) = hues
        .map(|hue| hue * TAU)
        .fold((0.0f32, 0.0f32), |(x, y), angle| (x + angle.cos(), y + angle.sin()));

    let hue = y.atan2(x) / TAU;
    if hue < 0.0 {
        // a tiny negative would otherwise round up to exactly 1.0
        (hue + 1.0) % 1.0
    } else {
        hue
    }
}
