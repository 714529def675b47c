// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::{
    color::Channel,
    descriptor::{BLACK_FREQUENCY, ModeDescriptor, Segment},
    mode::Mode,
};

///
/// Martin mode
///
/// VIS Code:
///
/// |Mode|Code in Decimal|
/// |------------|-------|
/// | Martin 1  |   44  |
/// | Martin 2  |   40  |
///
/// Color Mode: RGB (1500-2300hz luminance range)
/// Scan Sequence: Green, Blue, Red
///
/// Image Size: 320x256
///
/// | Step | Segment         | Frequency | Duration       |
/// |------|-----------------|-----------|----------------|
/// | 1    | Sync pulse      | 1200 Hz   | 4.862 ms       |
/// | 2    | Sync porch      | 1500 Hz   | 0.572 ms       |
/// | 3    | Green scan      | video     | `scan_time_ms` |
/// | 4    | Separator pulse | 1500 Hz   | 0.572 ms       |
/// | 5    | Blue scan       | video     | `scan_time_ms` |
/// | 6    | Separator pulse | 1500 Hz   | 0.572 ms       |
/// | 7    | Red scan        | video     | `scan_time_ms` |
/// | 8    | Separator pulse | 1500 Hz   | 0.572 ms       |
///
pub(crate) fn descriptor(mode: Mode, scan_time_ms: f64) -> ModeDescriptor {
    let separator = Segment::porch(BLACK_FREQUENCY, 0.572);

    let line = vec![
        Segment::sync(4.862),
        separator,
        Segment::scan(Channel::Green, scan_time_ms),
        separator,
        Segment::scan(Channel::Blue, scan_time_ms),
        separator,
        Segment::scan(Channel::Red, scan_time_ms),
        separator,
    ];

    ModeDescriptor::new(mode, vec![], vec![line])
}
