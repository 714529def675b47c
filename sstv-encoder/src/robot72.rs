// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::{
    color::Channel,
    descriptor::{BLACK_FREQUENCY, ModeDescriptor, Segment, WHITE_FREQUENCY},
    mode::Mode,
};

///
/// Robot 72 and Robot 24 Modes
///
/// VIS Code:
///
/// |Mode|Code in Decimal|
/// |----------|----|
/// | Robot 24 |  4 |
/// | Robot 72 | 12 |
///
/// Color Mode: YRyBy (1500-2300hz luminance range)
/// Scan Sequence: Y, Ry, By
///
/// Image Size: 320x240 (Robot 72), 160x120 (Robot 24)
///
/// Robot 24 is the same line with shorter scans: 88ms of Y, 44ms of chroma.
///
pub(crate) fn descriptor(mode: Mode, y_scan_ms: f64, chroma_scan_ms: f64) -> ModeDescriptor {
    let line = vec![
        Segment::sync(9.0),
        Segment::porch(BLACK_FREQUENCY, 3.0),
        Segment::scan(Channel::Y, y_scan_ms),
        // Even separator and porch
        Segment::porch(BLACK_FREQUENCY, 4.5),
        Segment::porch(1900.0, 1.5),
        Segment::scan(Channel::RMinusY, chroma_scan_ms),
        // Odd separator and porch
        Segment::porch(WHITE_FREQUENCY, 4.5),
        Segment::porch(BLACK_FREQUENCY, 1.5),
        Segment::scan(Channel::BMinusY, chroma_scan_ms),
    ];

    ModeDescriptor::new(mode, vec![], vec![line])
}
