// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::{
    color::Channel,
    descriptor::{BLACK_FREQUENCY, ModeDescriptor, Segment, WHITE_FREQUENCY},
    mode::Mode,
};

///
/// Robot 36 Mode
///
/// VIS Code:
///
/// |Mode|Code in Decimal|
/// |----------|-----|
/// | Robot 36 |  8  |
///
/// Color Mode: YRyBy (1500-2300hz luminance range)
/// Scan Sequence: Y, R-Y (even lines) Y, B-Y (odd lines)
///
/// Image Size: 320x240
///
/// Reminders:
///  • The R-Y color information is transmitted on even lines.
///  • The B-Y color information is transmitted on odd lines.
///  • The R-Y and B-Y scans have only 1/2 the period (44ms) of the Y scan. (88ms)
///  • Even lines use a 1500hz “separator” pulse, while odd lines use 2300hz.
///
pub(crate) fn descriptor(mode: Mode) -> ModeDescriptor {
    let pass = |separator: f64, chroma: Channel| {
        vec![
            Segment::sync(9.0),
            Segment::porch(BLACK_FREQUENCY, 3.0),
            Segment::scan(Channel::Y, 88.0),
            Segment::porch(separator, 4.5),
            Segment::porch(1900.0, 1.5),
            Segment::scan(chroma, 44.0),
        ]
    };

    ModeDescriptor::new(
        mode,
        vec![],
        vec![
            pass(BLACK_FREQUENCY, Channel::RMinusY),
            pass(WHITE_FREQUENCY, Channel::BMinusY),
        ],
    )
}
