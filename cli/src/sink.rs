use std::{fs::File, path::PathBuf, sync::mpsc, time::Duration};

use color_eyre::eyre::{Error, eyre};
use cpal::{
    FromSample, Sample, SampleFormat, SizedSample,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use sstv_encoder::{AudioSink, SampleBuffer};

/// Writes 16 bit mono PCM WAV files.
pub struct WavFile {
    path: PathBuf,
}

impl WavFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AudioSink for WavFile {
    type Error = Error;

    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), Self::Error> {
        tracing::debug!(path = %self.path.display(), "Writing WAV file");

        let mut file = File::create(&self.path)
            .map_err(|e| eyre!("Create output file error: {e}"))?;
        let head = wav_io::new_header(buffer.sample_rate(), 16, false, true);
        let samples = buffer.to_pcm_i16();
        wav_io::writer::i16samples_to_file(&mut file, &head, &samples)
            .map_err(|e| eyre!("Write output file error: {}", e.to_string()))?;

        Ok(())
    }
}

/// Plays transmissions on the default output device.
pub struct Playback {
    device: cpal::Device,
    config: cpal::StreamConfig,
    sample_format: SampleFormat,
}

impl Playback {
    pub fn open() -> Result<Self, Error> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("failed to find output device"))?;
        let supported = device.default_output_config()?;
        let sample_format = supported.sample_format();
        let config = supported.config();
        tracing::debug!(?config, ?sample_format, "Opened output device");

        Ok(Self {
            device,
            config,
            sample_format,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    fn play<T>(&self, samples: Vec<f32>) -> Result<(), Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = usize::from(self.config.channels);
        let mut position = 0;
        let (done_tx, done_rx) = mpsc::channel();
        let error_tx = done_tx.clone();

        let stream = self.device.build_output_stream(
            &self.config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                position = fill_frames(data, channels, &samples, position);
                if position >= samples.len() {
                    let _ = done_tx.send(Ok(()));
                }
            },
            move |err| {
                tracing::error!(%err, "Audio stream error");
                let _ = error_tx.send(Err(err));
            },
            None,
        )?;

        stream.play()?;
        done_rx.recv()??;
        // Let the device drain its last period.
        std::thread::sleep(Duration::from_millis(200));

        Ok(())
    }
}

/// Copy mono samples from `position` into interleaved frames, silence past the end.
fn fill_frames<T>(data: &mut [T], channels: usize, samples: &[f32], mut position: usize) -> usize
where
    T: Sample + FromSample<f32>,
{
    for frame in data.chunks_mut(channels) {
        let sample = samples.get(position).copied().unwrap_or(0.0);
        frame.fill(T::from_sample(sample));
        position += 1;
    }
    position
}

impl AudioSink for Playback {
    type Error = Error;

    /// Blocks until the whole buffer has been played.
    fn write(&mut self, buffer: &SampleBuffer) -> Result<(), Self::Error> {
        if buffer.sample_rate() != self.sample_rate() {
            return Err(eyre!(
                "buffer is {} Hz, device plays {} Hz",
                buffer.sample_rate(),
                self.sample_rate()
            ));
        }

        let samples = buffer.samples().to_vec();
        match self.sample_format {
            SampleFormat::F32 => self.play::<f32>(samples),
            SampleFormat::F64 => self.play::<f64>(samples),
            SampleFormat::I16 => self.play::<i16>(samples),
            SampleFormat::U16 => self.play::<u16>(samples),
            SampleFormat::I32 => self.play::<i32>(samples),
            SampleFormat::U8 => self.play::<u8>(samples),
            format => Err(eyre!("unsupported sample format {format:?}")),
        }
    }
}
