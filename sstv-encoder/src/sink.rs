// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::convert::Infallible;

use crate::buffer::SampleBuffer;

///
/// Write port for finished transmissions.
///
/// The encoder never depends on a sink; hosts hand the buffer returned by
/// [`crate::encode`] to whatever stores or plays it.
///
pub trait AudioSink {
    type Error;

    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), Self::Error>;
}

impl<S> AudioSink for &mut S
where
    S: AudioSink + ?Sized,
{
    type Error = S::Error;

    #[inline]
    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), Self::Error> {
        (**self).write(buffer)
    }
}

/// Appends the samples, ignoring the sample rate.
impl AudioSink for Vec<f32> {
    type Error = Infallible;

    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), Self::Error> {
        self.extend_from_slice(buffer.samples());
        Ok(())
    }
}
