// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::{
    color::Channel,
    descriptor::{BLACK_FREQUENCY, ModeDescriptor, Segment},
    mode::Mode,
};

///
/// Scottie mode
///
/// VIS Code:
///
/// |Mode|Code in Decimal|
/// |------------|-------|
/// | Scottie 1  |   60  |
/// | Scottie 2  |   56  |
/// | Scottie DX |   76  |
///
/// Color Mode: RGB (1500-2300hz luminance range)
/// Scan Sequence: Green, Blue, Red
///
/// Image Size: 320x256
///
/// A single "starting" sync pulse of 9 ms goes out before the first line only.
/// The sync pulse of every line sits between the blue and the red scan.
///
pub(crate) fn descriptor(mode: Mode, scan_time_ms: f64) -> ModeDescriptor {
    let porch = Segment::porch(BLACK_FREQUENCY, 1.5);

    let line = vec![
        // Separator pulse
        porch,
        Segment::scan(Channel::Green, scan_time_ms),
        // Separator pulse
        porch,
        Segment::scan(Channel::Blue, scan_time_ms),
        Segment::sync(9.0),
        // Sync porch
        porch,
        Segment::scan(Channel::Red, scan_time_ms),
    ];

    ModeDescriptor::new(mode, vec![Segment::sync(9.0)], vec![line])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::descriptor::SegmentKind;

    #[test]
    fn test_sync_after_blue() {
        let descriptor = Mode::Scottie1.descriptor();
        let line = &descriptor.passes[0];
        let sync = line
            .iter()
            .position(|s| s.kind == SegmentKind::SyncPulse)
            .unwrap();
        assert_eq!(line[sync - 1].kind, SegmentKind::ChannelScan(Channel::Blue));
        assert_eq!(line[sync + 2].kind, SegmentKind::ChannelScan(Channel::Red));
        assert_eq!(descriptor.preamble, vec![Segment::sync(9.0)]);
    }
}
