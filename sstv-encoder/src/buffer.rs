// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::ops::Deref;

/// A finished mono transmission.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    pub(crate) fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Length of the transmission in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.samples.len() as f64 * 1000.0 / self.sample_rate as f64
    }

    /// 16 bit signed pcm samples, for sinks that cannot take floats.
    pub fn to_pcm_i16(&self) -> Vec<i16> {
        self.samples
            .iter()
            .map(|&sample| (32767.0 * sample.clamp(-1.0, 1.0)).floor() as i16)
            .collect()
    }
}

impl Deref for SampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pcm_conversion() {
        let buffer = SampleBuffer::new(vec![0.0, 1.0, -1.0, 0.5], 8000);
        assert_eq!(buffer.to_pcm_i16(), vec![0, 32767, -32767, 16383]);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.duration_ms(), 0.5);
    }
}
