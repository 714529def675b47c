// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

///
/// Timer deciding how many samples every segment gets.
///
/// Each segment adds its nominal duration to the timer, and every emitted sample
/// takes one sample period off. Whatever is left over (always in
/// `(-period, 0]`) carries into the next segment, so the emitted length tracks
/// the sum of nominal durations instead of drifting by a rounding error per
/// segment.
///
#[derive(Clone, Copy, Debug)]
pub struct TimingAccumulator {
    timer_ms: f64,
    period_ms: f64,
}

impl TimingAccumulator {
    pub fn new(period_ms: f64) -> Self {
        Self {
            timer_ms: 0.0,
            period_ms,
        }
    }

    /// Time still owed to the current segment, negative once overpaid.
    pub fn timer_ms(&self) -> f64 {
        self.timer_ms
    }

    /// Start a segment lasting `duration_ms`.
    pub fn begin(&mut self, duration_ms: f64) {
        self.timer_ms += duration_ms;
    }

    ///
    /// Claim the next sample of a segment lasting `duration_ms`.
    ///
    /// Returns the position of the sample within the segment, in `[0, 1)`, or
    /// `None` once the segment is used up.
    ///
    pub fn tick(&mut self, duration_ms: f64) -> Option<f64> {
        if self.timer_ms > 0.0 {
            let position = (duration_ms - self.timer_ms) / duration_ms;
            self.timer_ms -= self.period_ms;
            Some(position)
        } else {
            None
        }
    }

    /// Run a whole segment without synthesis and return its sample count.
    pub fn count(&mut self, duration_ms: f64) -> usize {
        self.begin(duration_ms);
        let mut samples = 0;
        while self.tick(duration_ms).is_some() {
            samples += 1;
        }
        samples
    }
}
