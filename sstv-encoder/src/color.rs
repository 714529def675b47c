// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

/// A normalized `[R, G, B]` pixel, every channel in `[0, 1]`.
pub type Rgb = [f32; 3];

/// The channel a scan segment transmits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Gray,
    Y,
    RMinusY,
    BMinusY,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// The level of this channel for `pixel`, on the 0-255 scale.
    pub fn level(self, pixel: Rgb) -> f64 {
        let [r, g, b] = scale(pixel);
        match self {
            Channel::Gray => gray(r, g, b),
            Channel::Y => luma(r, g, b),
            Channel::RMinusY => red_difference(r, g, b),
            Channel::BMinusY => blue_difference(r, g, b),
            Channel::Red => r,
            Channel::Green => g,
            Channel::Blue => b,
        }
    }
}

fn scale(pixel: Rgb) -> [f64; 3] {
    pixel.map(|v| v as f64 * 255.0)
}

/// Perceptual luma used by the black and white modes.
pub fn gray(r: f64, g: f64, b: f64) -> f64 {
    0.299 * r + 0.587 * g + 0.114 * b
}

///
/// Refrence is at below:
///
/// > Dayton Paper Appendix B: YRyBy (YCrCb) Color Encoding
/// >
/// > To convert non-linear RGB to [Y, R-Y, B-Y] (scaled to 0-255)
/// >
/// > $$ Y = 16.0 + (.003906 * ((65.738 * R) + (129.057 * G) + (25.064 * B))) $$
/// > $$ RY = 128.0 + (.003906 * ((112.439 * R) + (-94.154 * G) + (-18.285 * B))) $$
/// > $$ BY = 128.0 + (.003906 * ((-37.945 * R) + (-74.494 * G) + (112.439 * B))) $$
///
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    16.0 + 0.003906 * (65.738 * r + 129.057 * g + 25.064 * b)
}

/// R-Y chroma difference, see [`luma`].
pub fn red_difference(r: f64, g: f64, b: f64) -> f64 {
    128.0 + 0.003906 * (112.439 * r - 94.154 * g - 18.285 * b)
}

/// B-Y chroma difference, see [`luma`].
pub fn blue_difference(r: f64, g: f64, b: f64) -> f64 {
    128.0 + 0.003906 * (-37.945 * r - 74.494 * g + 112.439 * b)
}

///
/// Map a 0-255 level into the 1500-2300 Hz video band.
///
/// > Dayton Paper Appendix A: RGB Color Encoding
/// >
/// > SSTV systems use the frequency range of 1500-2300hz to represent
/// > the range of brightness values from pure black to pure white.
/// >
/// > $$ f = 1500 + s_r * 3.1372549 $$
///
pub fn level_to_frequency(level: f64) -> f64 {
    1500.0 + level * 3.1372549
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_gray_levels() {
        assert_relative_eq!(Channel::Gray.level([0.0; 3]), 0.0);
        assert_relative_eq!(Channel::Gray.level([1.0; 3]), 255.0, epsilon = 1e-9);
        assert_relative_eq!(Channel::Gray.level([0.5; 3]), 127.5, epsilon = 1e-9);
    }

    #[test]
    fn test_white_ycrcb() {
        let white = [1.0; 3];
        assert_relative_eq!(Channel::Y.level(white), 235.0, epsilon = 0.1);
        assert_relative_eq!(Channel::RMinusY.level(white), 128.0, epsilon = 0.1);
        assert_relative_eq!(Channel::BMinusY.level(white), 128.0, epsilon = 0.1);
    }

    #[test]
    fn test_black_ycrcb() {
        let black = [0.0; 3];
        assert_relative_eq!(Channel::Y.level(black), 16.0);
        assert_relative_eq!(Channel::RMinusY.level(black), 128.0);
        assert_relative_eq!(Channel::BMinusY.level(black), 128.0);
    }

    #[test]
    fn test_rgb_channels() {
        let pixel = [1.0, 0.0, 0.5];
        assert_relative_eq!(Channel::Red.level(pixel), 255.0);
        assert_relative_eq!(Channel::Green.level(pixel), 0.0);
        assert_relative_eq!(Channel::Blue.level(pixel), 127.5);
    }

    #[test]
    fn test_band_edges() {
        assert_relative_eq!(level_to_frequency(0.0), 1500.0);
        assert_relative_eq!(level_to_frequency(255.0), 2300.0, epsilon = 1e-3);
        assert_relative_eq!(level_to_frequency(127.5), 1900.0, epsilon = 1e-3);
    }
}
