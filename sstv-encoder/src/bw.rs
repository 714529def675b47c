// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::{
    color::Channel,
    descriptor::{BLACK_FREQUENCY, ModeDescriptor, Segment},
    mode::Mode,
};

const SYNC_MS: f64 = 6.0;
const PORCH_MS: f64 = 2.0;

///
/// Robot black and white modes
///
/// VIS Code:
///
/// |Mode|Code in Decimal|
/// |-------|---|
/// | BW 8  | 2 |
/// | BW 12 | 6 |
///
/// Color Mode: Grayscale
///
/// Image Size: 160x120
///
/// The scan fills what is left of `frame_ms / height` after sync and porch,
/// plus `trim_ms`.
///
pub(crate) fn descriptor(mode: Mode, frame_ms: f64, trim_ms: f64) -> ModeDescriptor {
    let (_, height) = mode.resolution();
    let scan_time_ms = frame_ms / height as f64 - SYNC_MS - PORCH_MS + trim_ms;

    let line = vec![
        Segment::sync(SYNC_MS),
        Segment::porch(BLACK_FREQUENCY, PORCH_MS),
        Segment::scan(Channel::Gray, scan_time_ms),
    ];

    ModeDescriptor::new(mode, vec![], vec![line])
}
