// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::iter;

use crate::{
    bw, color::Channel, config::LineCount, header, martin, mode::Mode, robot36, robot72, scottie,
};

/// Frequency of every sync pulse.
pub const SYNC_FREQUENCY: f64 = 1200.0;

/// Frequency of black, and of most porches and separators.
pub const BLACK_FREQUENCY: f64 = 1500.0;

/// Frequency of white.
pub const WHITE_FREQUENCY: f64 = 2300.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentKind {
    /// 1200 Hz line sync.
    SyncPulse,

    /// A fixed tone inside a line: porches and separator pulses.
    Porch { frequency: f64 },

    /// Pixel data of one channel, swept across the image width.
    ChannelScan(Channel),

    /// A fixed tone outside the line program, used by the VIS header.
    Tone { frequency: f64 },
}

impl SegmentKind {
    /// The frequency of a segment that does not depend on pixel data.
    pub fn fixed_frequency(&self) -> Option<f64> {
        match self {
            SegmentKind::SyncPulse => Some(SYNC_FREQUENCY),
            SegmentKind::Porch { frequency } | SegmentKind::Tone { frequency } => Some(*frequency),
            SegmentKind::ChannelScan(_) => None,
        }
    }
}

/// A timed unit of the waveform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub duration_ms: f64,
}

impl Segment {
    pub const fn sync(duration_ms: f64) -> Self {
        Self {
            kind: SegmentKind::SyncPulse,
            duration_ms,
        }
    }

    pub const fn porch(frequency: f64, duration_ms: f64) -> Self {
        Self {
            kind: SegmentKind::Porch { frequency },
            duration_ms,
        }
    }

    pub const fn scan(channel: Channel, duration_ms: f64) -> Self {
        Self {
            kind: SegmentKind::ChannelScan(channel),
            duration_ms,
        }
    }

    pub const fn tone(frequency: f64, duration_ms: f64) -> Self {
        Self {
            kind: SegmentKind::Tone { frequency },
            duration_ms,
        }
    }
}

///
/// Everything the encoder needs to know about a mode.
///
/// `preamble` is sent once before the first line. Each entry of `passes` is the
/// segment program of one image row; a line iteration runs all passes in order.
///
#[derive(Clone, Debug)]
pub struct ModeDescriptor {
    pub mode: Mode,
    pub width: usize,
    pub height: usize,
    pub preamble: Vec<Segment>,
    pub passes: Vec<Vec<Segment>>,
}

/// One step of a flattened mode program.
#[derive(Clone, Copy, Debug)]
pub enum ProgramStep<'a> {
    /// A new line iteration begins.
    LineStart { line: usize, lines: usize },

    /// Emit `segment`, reading pixels from `row`.
    Segment { segment: &'a Segment, row: usize },

    /// A pass has been completed.
    PassEnd,
}

impl ModeDescriptor {
    pub(crate) fn new(mode: Mode, preamble: Vec<Segment>, passes: Vec<Vec<Segment>>) -> Self {
        let (width, height) = mode.resolution();
        Self {
            mode,
            width,
            height,
            preamble,
            passes,
        }
    }

    /// Put the VIS calibration header in front of the preamble.
    pub fn with_vis_header(mut self) -> Self {
        let mut preamble = header::vis_header(self.mode.vis_code());
        preamble.append(&mut self.preamble);
        self.preamble = preamble;
        self
    }

    /// Number of line iterations needed to send `line_count` rows.
    pub fn line_iterations(&self, line_count: LineCount) -> usize {
        line_count.rows(self.height).div_ceil(self.passes.len())
    }

    /// Nominal duration of one line iteration.
    pub fn line_duration_ms(&self) -> f64 {
        self.passes
            .iter()
            .flatten()
            .map(|segment| segment.duration_ms)
            .sum()
    }

    /// Nominal duration of the whole transmission.
    pub fn total_duration_ms(&self, line_count: LineCount) -> f64 {
        self.program(line_count)
            .filter_map(|step| match step {
                ProgramStep::Segment { segment, .. } => Some(segment.duration_ms),
                _ => None,
            })
            .sum()
    }

    /// The transmission as a flat sequence of steps.
    pub fn program(&self, line_count: LineCount) -> impl Iterator<Item = ProgramStep<'_>> + '_ {
        let per_line = self.passes.len();
        let lines = self.line_iterations(line_count);
        let height = self.height;

        let preamble = self
            .preamble
            .iter()
            .map(|segment| ProgramStep::Segment { segment, row: 0 });

        let body = (0..lines).flat_map(move |line| {
            let passes = self.passes.iter().enumerate().flat_map(move |(n, pass)| {
                let row = line_count.source_row(line * per_line + n, height);
                pass.iter()
                    .map(move |segment| ProgramStep::Segment { segment, row })
                    .chain(iter::once(ProgramStep::PassEnd))
            });
            iter::once(ProgramStep::LineStart { line, lines }).chain(passes)
        });

        preamble.chain(body)
    }
}

impl Mode {
    /// Look up the descriptor of this mode.
    pub fn descriptor(self) -> ModeDescriptor {
        match self {
            Mode::Bw8 => bw::descriptor(self, 8000.0, 0.229),
            Mode::Bw12 => bw::descriptor(self, 12000.0, 0.0),
            Mode::Martin1 => martin::descriptor(self, 146.432),
            Mode::Martin2 => martin::descriptor(self, 73.216),
            Mode::Robot36 => robot36::descriptor(self),
            Mode::Robot72 => robot72::descriptor(self, 138.0, 69.0),
            Mode::Robot24 => robot72::descriptor(self, 88.0, 44.0),
            Mode::Scottie1 => scottie::descriptor(self, 138.240),
            Mode::Scottie2 => scottie::descriptor(self, 88.064),
            Mode::ScottieDx => scottie::descriptor(self, 345.6),
        }
    }
}
