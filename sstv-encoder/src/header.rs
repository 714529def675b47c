// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::descriptor::{SYNC_FREQUENCY, Segment};

const LEADER_TONE: f64 = 1900.0;
const VIS_BIT_MS: f64 = 30.0;

///
/// Generate a VIS data bit.
///
/// In the header, 1100 Hz means '1', 1300 Hz means '0'.
///
/// Refrence: Dayton Paper - VIS Code and Robot calibration header
///
fn vis_bit(bit: bool) -> Segment {
    Segment::tone(if bit { 1100.0 } else { 1300.0 }, VIS_BIT_MS)
}

///
/// Generate the calibration header announcing `vis_code`.
///
/// Refrence: Dayton Paper - VIS Code and Robot calibration header
///
pub(crate) fn vis_header(vis_code: u8) -> Vec<Segment> {
    let mut segments = vec![
        // Leader tone
        Segment::tone(LEADER_TONE, 300.0),
        // Break
        Segment::tone(SYNC_FREQUENCY, 10.0),
        // Leader tone
        Segment::tone(LEADER_TONE, 300.0),
        // VIS start bit
        Segment::tone(SYNC_FREQUENCY, VIS_BIT_MS),
    ];

    // The seven-bit code is transmitted least-significant-bit (LSB) first, and uses “even” parity.
    segments.extend((0..7).map(|bit| vis_bit((vis_code >> bit) & 1 == 1)));
    segments.push(vis_bit(vis_code.count_ones() % 2 == 1));

    // VIS stop bit
    segments.push(Segment::tone(SYNC_FREQUENCY, VIS_BIT_MS));

    segments
}
