// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::ops::ControlFlow;

use crate::{
    EncodeError,
    color::level_to_frequency,
    config::EncoderConfig,
    descriptor::{BLACK_FREQUENCY, ModeDescriptor, ProgramStep, Segment, SegmentKind},
    oscillator::Oscillator,
    sstv_image::ImageSource,
    timing::TimingAccumulator,
};

/// Reported to the progress callback at the start of every line iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineProgress {
    /// Index of the line iteration about to be sent.
    pub line: usize,

    /// Total number of line iterations.
    pub lines: usize,
}

/// Where a segment landed in the output buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledSegment {
    pub kind: SegmentKind,
    pub duration_ms: f64,
    /// Image row the segment reads from.
    pub row: usize,
    /// Index of the first sample.
    pub start: usize,
    /// Number of samples.
    pub len: usize,
}

///
/// Mutable state of one in-flight encode.
///
/// Never shared: every encode builds its own.
///
#[derive(Clone, Copy, Debug)]
pub struct EncodeState {
    oscillator: Oscillator,
    timing: TimingAccumulator,
    index: usize,
}

impl EncodeState {
    pub fn new(config: &EncoderConfig) -> Self {
        Self {
            oscillator: Oscillator::new(config.sample_rate),
            timing: TimingAccumulator::new(config.sample_period_ms()),
            index: 0,
        }
    }

    /// Index of the next sample to write.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> f64 {
        self.oscillator.phase()
    }

    fn push(&mut self, buffer: &mut [f32], sample: f32) -> Result<(), EncodeError> {
        let expected = buffer.len();
        let slot = buffer
            .get_mut(self.index)
            .ok_or(EncodeError::BufferSizing {
                expected,
                actual: self.index + 1,
            })?;
        *slot = sample;
        self.index += 1;
        Ok(())
    }

    /// Emit one segment, reading pixels of `row` for channel scans.
    pub fn emit<I>(
        &mut self,
        segment: &Segment,
        image: &I,
        row: usize,
        buffer: &mut [f32],
    ) -> Result<(), EncodeError>
    where
        I: ImageSource,
    {
        let width = image.width();

        self.timing.begin(segment.duration_ms);
        while let Some(position) = self.timing.tick(segment.duration_ms) {
            let frequency = match segment.kind {
                SegmentKind::ChannelScan(channel) => {
                    let x = ((position * width as f64).floor() as usize)
                        .min(width.saturating_sub(1));
                    level_to_frequency(channel.level(image.pixel(x, row)))
                }
                kind => kind.fixed_frequency().unwrap_or(BLACK_FREQUENCY),
            };

            let sample = self.oscillator.next_sample(frequency);
            self.push(buffer, sample)?;
        }

        Ok(())
    }

    /// Close a pass. The phase is brought back into one turn.
    pub fn end_pass(&mut self) {
        self.oscillator.wrap_phase();
    }
}

///
/// Drive `descriptor` across `image` into `buffer`.
///
/// Returns the number of samples written. `on_line` runs before every line
/// iteration and stops the encode by returning `ControlFlow::Break`.
///
pub(crate) fn run<I, F>(
    descriptor: &ModeDescriptor,
    config: &EncoderConfig,
    image: &I,
    buffer: &mut [f32],
    mut on_line: F,
) -> Result<usize, EncodeError>
where
    I: ImageSource,
    F: FnMut(LineProgress) -> ControlFlow<()>,
{
    let mut state = EncodeState::new(config);

    for step in descriptor.program(config.line_count) {
        match step {
            ProgramStep::LineStart { line, lines } => {
                tracing::trace!(line, lines, index = state.index(), "Line");
                if on_line(LineProgress { line, lines }).is_break() {
                    return Err(EncodeError::Cancelled { line });
                }
            }
            ProgramStep::Segment { segment, row } => state.emit(segment, image, row, buffer)?,
            ProgramStep::PassEnd => state.end_pass(),
        }
    }

    Ok(state.index())
}

/// Sample spans of every segment, from the timing accumulator alone.
pub(crate) fn schedule(
    descriptor: &ModeDescriptor,
    config: &EncoderConfig,
) -> Vec<ScheduledSegment> {
    let mut timing = TimingAccumulator::new(config.sample_period_ms());
    let mut start = 0;

    descriptor
        .program(config.line_count)
        .filter_map(|step| match step {
            ProgramStep::Segment { segment, row } => {
                let len = timing.count(segment.duration_ms);
                let scheduled = ScheduledSegment {
                    kind: segment.kind,
                    duration_ms: segment.duration_ms,
                    row,
                    start,
                    len,
                };
                start += len;
                Some(scheduled)
            }
            _ => None,
        })
        .collect()
}

/// Exact buffer length needed for `descriptor`.
pub(crate) fn sample_count(descriptor: &ModeDescriptor, config: &EncoderConfig) -> usize {
    let mut timing = TimingAccumulator::new(config.sample_period_ms());

    descriptor
        .program(config.line_count)
        .map(|step| match step {
            ProgramStep::Segment { segment, .. } => timing.count(segment.duration_ms),
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{color::Channel, sstv_image::SstvImage};

    #[test]
    fn test_emit_fills_buffer() {
        let config = EncoderConfig::default();
        let image = SstvImage::filled(4, 1, [255, 255, 255]);
        let mut state = EncodeState::new(&config);
        let mut buffer = vec![0.0; 8];

        state
            .emit(&Segment::scan(Channel::Red, 1.0), &image, 0, &mut buffer)
            .unwrap();
        assert_eq!(state.index(), 8);
        assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_emit_never_overruns() {
        let config = EncoderConfig::default();
        let image = SstvImage::filled(1, 1, [0, 0, 0]);
        let mut state = EncodeState::new(&config);
        let mut buffer = vec![0.0; 4];

        let result = state.emit(&Segment::sync(1.0), &image, 0, &mut buffer);
        assert!(matches!(
            result,
            Err(EncodeError::BufferSizing {
                expected: 4,
                actual: 5
            })
        ));
        assert_eq!(state.index(), 4);
    }

    #[test]
    fn test_pixel_selection_spans_width() {
        // Left half black, right half white: the first half of the scan sits at
        // 1500 Hz, so its phase step is smaller than in the second half.
        let image = SstvImage::new(2, 1, vec![[0, 0, 0], [255, 255, 255]]).unwrap();
        let config = EncoderConfig::default();
        let mut state = EncodeState::new(&config);
        let mut buffer = vec![0.0; 8];

        state
            .emit(&Segment::scan(Channel::Green, 1.0), &image, 0, &mut buffer)
            .unwrap();

        let black_step = core::f64::consts::TAU * 1500.0 / 8000.0;
        let white_step = core::f64::consts::TAU * (1500.0 + 255.0 * 3.1372549) / 8000.0;
        let expected = 4.0 * black_step + 4.0 * white_step;
        assert!((state.phase() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_tones_follow_segment_kind() {
        let config = EncoderConfig::default();
        let image = SstvImage::filled(1, 1, [255, 255, 255]);
        let segments = [
            Segment::sync(1.0),
            Segment::porch(1900.0, 1.0),
            Segment::tone(1100.0, 1.0),
        ];

        for segment in segments {
            let mut state = EncodeState::new(&config);
            let mut buffer = vec![0.0; 8];
            state.emit(&segment, &image, 0, &mut buffer).unwrap();

            let frequency = segment.kind.fixed_frequency().unwrap();
            let expected = 8.0 * core::f64::consts::TAU * frequency / 8000.0;
            assert!((state.phase() - expected).abs() < 1e-9, "{segment:?}");
        }
        assert_eq!(Segment::sync(1.0).kind.fixed_frequency(), Some(1200.0));
        assert_eq!(Segment::scan(Channel::Y, 1.0).kind.fixed_frequency(), None);
    }

    #[test]
    fn test_schedule_matches_count() {
        let config = EncoderConfig::default();
        for mode in crate::Mode::ALL {
            let descriptor = mode.descriptor();
            let schedule = schedule(&descriptor, &config);
            let last = schedule.last().unwrap();
            assert_eq!(last.start + last.len, sample_count(&descriptor, &config));
            assert!(schedule.windows(2).all(|w| w[0].start + w[0].len == w[1].start));
        }
    }
}
