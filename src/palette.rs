//! Pure color assignment for series and markers.
//!
//! The renderer owns nothing here: colors are plain RGBA tuples computed
//! from an index, so two calls with the same index always agree and no
//! shared palette state exists.

use serde::{Deserialize, Serialize};

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Line rendering style hints carried by each series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// Continuous stroke.
    Solid,
    /// Dashed stroke, used for fit overlays and reference markers.
    Dashed,
    /// Dotted stroke.
    Dotted,
}

const PALETTE: [Rgba; 8] = [
    Rgba(0x3b, 0x82, 0xf6, 0xff), // blue
    Rgba(0xef, 0x44, 0x44, 0xff), // red
    Rgba(0x10, 0xb9, 0x81, 0xff), // green
    Rgba(0xf5, 0x93, 0x00, 0xff), // orange
    Rgba(0x8b, 0x5c, 0xff, 0xff), // violet
    Rgba(0x06, 0xb6, 0xd4, 0xff), // cyan
    Rgba(0xd9, 0x46, 0x9e, 0xff), // magenta
    Rgba(0x84, 0x7a, 0x59, 0xff), // olive
];

/// Color for the `i`-th series of a graph; cycles through a fixed palette.
pub fn color_for_index(i: usize) -> Rgba {
    PALETTE[i % PALETTE.len()]
}

/// Gradient color for the `i`-th of `count` columns, interpolating from
/// blue to pink in column order.
pub fn column_gradient(i: usize, count: usize) -> Rgba {
    const FROM: (f64, f64, f64) = (0.0, 0.0, 255.0);
    const TO: (f64, f64, f64) = (255.0, 105.0, 180.0);
    let t = if count > 1 {
        i as f64 / (count - 1) as f64
    } else {
        0.0
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    Rgba(lerp(FROM.0, TO.0), lerp(FROM.1, TO.1), lerp(FROM.2, TO.2), 0xff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(color_for_index(0), color_for_index(PALETTE.len()));
        assert_ne!(color_for_index(0), color_for_index(1));
    }

    #[test]
    fn gradient_endpoints_are_blue_and_pink() {
        assert_eq!(column_gradient(0, 10), Rgba(0, 0, 255, 255));
        assert_eq!(column_gradient(9, 10), Rgba(255, 105, 180, 255));
    }

    #[test]
    fn gradient_single_column_is_blue() {
        assert_eq!(column_gradient(0, 1), Rgba(0, 0, 255, 255));
    }
}
