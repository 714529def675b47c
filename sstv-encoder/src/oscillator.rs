// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use core::f64::consts::TAU;

///
/// Oscillator is a phase accumulating sine generator.
///
/// One instance is shared by every segment of an encode, so the waveform stays
/// continuous when the frequency jumps from one tone to the next.
///
#[derive(Clone, Copy, Debug)]
pub struct Oscillator {
    /// The sample rate of the generated wave
    sample_rate: f64,

    /// The accumulated phase in radians
    phase: f64,
}

impl Oscillator {
    /// Create a new oscillator starting at phase zero.
    pub fn new(sample_rate: u32) -> Self {
        Self::with_phase(sample_rate, 0.0)
    }

    /// Create an oscillator continuing from an existing phase.
    pub fn with_phase(sample_rate: u32, phase: f64) -> Self {
        Self {
            sample_rate: sample_rate as f64,
            phase,
        }
    }

    /// The current phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    ///
    /// Advance the phase by one sample period at `frequency` and return the sample.
    ///
    /// > $$ \varphi_{n} = \varphi_{n-1} + 2 \pi f / f_s $$
    /// > $$ s_n = \sin(\varphi_n) $$
    ///
    pub fn next_sample(&mut self, frequency: f64) -> f32 {
        self.phase += TAU * frequency / self.sample_rate;
        self.phase.sin() as f32
    }

    ///
    /// Reduce the phase into `[0, 2π)`.
    ///
    /// Only whole turns are removed, so the next sample is unchanged.
    ///
    pub fn wrap_phase(&mut self) {
        self.phase = self.phase.rem_euclid(TAU);
    }
}
