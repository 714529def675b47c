// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::{EncodeError, descriptor::WHITE_FREQUENCY};

pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// How many image rows a transmission carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCount {
    /// Exactly one pass per image row.
    #[default]
    Exact,

    /// One extra pass in front of the first row.
    ///
    /// Matches encoders that loop from `height` down to 0 inclusive over a
    /// bottom-up texture with repeat wrapping: rows past either edge wrap
    /// around, so the extra pass carries the bottom row and a pass left over
    /// after the last row carries the top row.
    LegacyPadLine,
}

impl LineCount {
    /// Number of rows sent for an image `height` rows tall.
    pub fn rows(self, height: usize) -> usize {
        match self {
            LineCount::Exact => height,
            LineCount::LegacyPadLine => height + 1,
        }
    }

    /// The image row read by the `index`-th pass.
    ///
    /// `Exact` clamps rows past the end to the last row. `LegacyPadLine` wraps.
    pub fn source_row(self, index: usize, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        match self {
            LineCount::Exact => index.min(height - 1),
            LineCount::LegacyPadLine => (index + height - 1) % height,
        }
    }
}

/// Encoder settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Send the VIS calibration header before the image.
    pub vis_header: bool,

    pub line_count: LineCount,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            vis_header: false,
            line_count: LineCount::Exact,
        }
    }
}

impl EncoderConfig {
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_vis_header(mut self, vis_header: bool) -> Self {
        self.vis_header = vis_header;
        self
    }

    pub fn with_line_count(mut self, line_count: LineCount) -> Self {
        self.line_count = line_count;
        self
    }

    /// The sample rate must be able to carry the highest video frequency.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if (self.sample_rate as f64) <= 2.0 * WHITE_FREQUENCY {
            return Err(EncodeError::InvalidConfig(format!(
                "sample rate {} Hz cannot carry {} Hz",
                self.sample_rate, WHITE_FREQUENCY
            )));
        }
        Ok(())
    }

    /// Length of one sample period in milliseconds.
    pub fn sample_period_ms(&self) -> f64 {
        1000.0 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.sample_rate, 8000);
        assert!(!config.vis_header);
        assert_eq!(config.sample_period_ms(), 0.125);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_low_sample_rate_rejected() {
        for rate in [0, 4000, 4600] {
            assert!(matches!(
                EncoderConfig::default().with_sample_rate(rate).validate(),
                Err(EncodeError::InvalidConfig(_))
            ));
        }
        assert!(EncoderConfig::default().with_sample_rate(4601).validate().is_ok());
    }

    #[test]
    fn test_source_rows() {
        assert_eq!(LineCount::Exact.source_row(0, 4), 0);
        assert_eq!(LineCount::Exact.source_row(5, 4), 3);
        assert_eq!(LineCount::LegacyPadLine.source_row(0, 4), 3);
        assert_eq!(LineCount::LegacyPadLine.source_row(1, 4), 0);
        assert_eq!(LineCount::LegacyPadLine.source_row(4, 4), 3);
        // A two-pass mode sends one pass past the last row.
        assert_eq!(LineCount::LegacyPadLine.source_row(5, 4), 0);
    }
}
