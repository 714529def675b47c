#![allow(dead_code)]

use core::f64::consts::TAU;

use sstv_encoder::{ImageSource, ScheduledSegment, color::Rgb};

/// Every pixel the same normalized color.
pub struct Uniform {
    pub width: usize,
    pub height: usize,
    pub rgb: Rgb,
}

impl Uniform {
    pub fn new((width, height): (usize, usize), rgb: Rgb) -> Self {
        Self { width, height, rgb }
    }
}

impl ImageSource for Uniform {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, _x: usize, _y: usize) -> Rgb {
        self.rgb
    }
}

/// Rows alternate between two colors, starting with `even` on row 0.
pub struct Striped {
    pub width: usize,
    pub height: usize,
    pub even: Rgb,
    pub odd: Rgb,
}

impl ImageSource for Striped {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, _x: usize, y: usize) -> Rgb {
        if y % 2 == 0 { self.even } else { self.odd }
    }
}

///
/// Frequency of a pure tone.
///
/// Any sinusoid satisfies `x[n-1] + x[n+1] = 2 cos(w) x[n]`, solved here in the
/// least squares sense.
///
pub fn estimate_frequency(samples: &[f32], sample_rate: u32) -> f64 {
    assert!(samples.len() >= 3, "need three samples, got {}", samples.len());

    let (mut num, mut den) = (0.0, 0.0);
    for n in 1..samples.len() - 1 {
        let x = samples[n] as f64;
        num += x * (samples[n - 1] as f64 + samples[n + 1] as f64);
        den += x * x;
    }

    (num / (2.0 * den)).clamp(-1.0, 1.0).acos() * sample_rate as f64 / TAU
}

/// Frequency of the samples a scheduled segment covers.
pub fn span_frequency(samples: &[f32], span: &ScheduledSegment, sample_rate: u32) -> f64 {
    estimate_frequency(&samples[span.start..span.start + span.len], sample_rate)
}
