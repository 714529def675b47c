//! # sstv-encoder
//!
//! sstv-encoder is a library to convert images into audio using the Slow Scan Television algorithms.
//!
//! The encoder produces the whole transmission as one buffer of `f32` samples in `[-1, 1]`.
//! Storing or playing it is left to the caller, see [`AudioSink`].
//!
//! ```no_run
//! use sstv_encoder::{Mode, SstvImage, encode};
//!
//! let image = SstvImage::filled(320, 240, [128, 128, 128]);
//! let buffer = encode(&image, Mode::Robot36).unwrap();
//! assert_eq!(buffer.sample_rate(), 8000);
//! ```
//!
//! Supported modes are BW8, BW12, Martin 1 and 2, Robot 24, 36 and 72, and Scottie 1, 2 and DX.

mod buffer;
mod bw;
pub mod color;
mod config;
mod descriptor;
mod encoder;
mod header;
mod martin;
mod mode;
mod oscillator;
mod robot36;
mod robot72;
mod scottie;
mod sink;
pub mod sstv_image;
mod timing;

use std::ops::ControlFlow;

use thiserror::Error;

pub use crate::{
    buffer::SampleBuffer,
    config::{DEFAULT_SAMPLE_RATE, EncoderConfig, LineCount},
    descriptor::{ModeDescriptor, ProgramStep, Segment, SegmentKind},
    encoder::{EncodeState, LineProgress, ScheduledSegment},
    mode::Mode,
    oscillator::Oscillator,
    sink::AudioSink,
    sstv_image::{ImageSource, SstvImage},
    timing::TimingAccumulator,
};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid image size {width}x{height}. Should be {expected_width}x{expected_height}")]
    InvalidImage {
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("Sample buffer sized for {expected} samples, encoder wrote {actual}")]
    BufferSizing { expected: usize, actual: usize },

    #[error("Encode cancelled before line {line}")]
    Cancelled { line: usize },

    #[error("Invalid encoder configuration: {0}")]
    InvalidConfig(String),
}

/// Encodes pictures with one configuration.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Result<Self, EncodeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// The descriptor of `mode` as this encoder sends it.
    pub fn descriptor(&self, mode: Mode) -> ModeDescriptor {
        let descriptor = mode.descriptor();
        if self.config.vis_header {
            descriptor.with_vis_header()
        } else {
            descriptor
        }
    }

    /// Sum of the nominal durations of every segment.
    pub fn total_duration_ms(&self, mode: Mode) -> f64 {
        self.descriptor(mode)
            .total_duration_ms(self.config.line_count)
    }

    /// Exact number of samples [`Encoder::encode`] produces for `mode`.
    pub fn sample_count(&self, mode: Mode) -> usize {
        encoder::sample_count(&self.descriptor(mode), &self.config)
    }

    /// Sample span of every segment of `mode`.
    pub fn schedule(&self, mode: Mode) -> Vec<ScheduledSegment> {
        encoder::schedule(&self.descriptor(mode), &self.config)
    }

    /// Generate the whole transmission of `image`.
    pub fn encode<I>(&self, image: &I, mode: Mode) -> Result<SampleBuffer, EncodeError>
    where
        I: ImageSource + ?Sized,
    {
        self.encode_with(image, mode, |_| ControlFlow::Continue(()))
    }

    ///
    /// Generate the whole transmission of `image`, reporting every line.
    ///
    /// Returning `ControlFlow::Break` from `on_line` abandons the encode with
    /// [`EncodeError::Cancelled`].
    ///
    pub fn encode_with<I, F>(
        &self,
        image: &I,
        mode: Mode,
        on_line: F,
    ) -> Result<SampleBuffer, EncodeError>
    where
        I: ImageSource + ?Sized,
        F: FnMut(LineProgress) -> ControlFlow<()>,
    {
        let descriptor = self.descriptor(mode);
        check_image(image, &descriptor)?;

        let expected = encoder::sample_count(&descriptor, &self.config);
        tracing::debug!(
            %mode,
            samples = expected,
            sample_rate = self.config.sample_rate,
            "Encoding picture"
        );

        let mut samples = vec![0.0; expected];
        let result = encoder::run(&descriptor, &self.config, &image, &mut samples, on_line);
        debug_assert!(
            !matches!(result, Err(EncodeError::BufferSizing { .. })),
            "descriptor of {mode} overran its buffer"
        );

        let written = result?;
        if written != expected {
            debug_assert_eq!(written, expected, "descriptor of {mode} underran its buffer");
            return Err(EncodeError::BufferSizing {
                expected,
                actual: written,
            });
        }

        tracing::debug!(%mode, samples = written, "Encoding finished");
        Ok(SampleBuffer::new(samples, self.config.sample_rate))
    }
}

fn check_image<I>(image: &I, descriptor: &ModeDescriptor) -> Result<(), EncodeError>
where
    I: ImageSource + ?Sized,
{
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 || width != descriptor.width || height != descriptor.height {
        return Err(EncodeError::InvalidImage {
            width,
            height,
            expected_width: descriptor.width,
            expected_height: descriptor.height,
        });
    }
    Ok(())
}

/// Encode `image` with the default configuration (8000 Hz, no VIS header).
pub fn encode<I>(image: &I, mode: Mode) -> Result<SampleBuffer, EncodeError>
where
    I: ImageSource + ?Sized,
{
    Encoder::default().encode(image, mode)
}
