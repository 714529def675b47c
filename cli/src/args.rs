use std::path::PathBuf;

use clap::Parser;
use sstv_encoder::{EncoderConfig, LineCount, Mode};

#[derive(Debug, Parser)]
#[command(author, version, about = "Encode a picture into Slow Scan Television audio")]
pub struct Args {
    /// Picture to send. It is resized to the resolution of the mode.
    pub image: PathBuf,

    /// SSTV mode: BW8, BW12, Martin1, Martin2, Robot24, Robot36, Robot72,
    /// Scottie1, Scottie2 or ScottieDX.
    #[clap(short, long, default_value = "robot36")]
    pub mode: Mode,

    /// Sample rate of the output. Ignored with --play, which uses the rate of the
    /// output device.
    #[clap(short, long = "samplerate", default_value = "8000")]
    pub sample_rate: u32,

    /// Send the VIS header in front of the picture.
    #[clap(long)]
    pub vis_header: bool,

    /// Send one extra line carrying the bottom row first, like encoders that
    /// scan `height + 1` lines.
    #[clap(long)]
    pub legacy_pad_line: bool,

    /// Write a 16 bit PCM WAV file.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Play the transmission on the default output device.
    #[clap(short, long)]
    pub play: bool,
}

impl Args {
    pub fn encoder_config(&self, sample_rate: u32) -> EncoderConfig {
        EncoderConfig::default()
            .with_sample_rate(sample_rate)
            .with_vis_header(self.vis_header)
            .with_line_count(if self.legacy_pad_line {
                LineCount::LegacyPadLine
            } else {
                LineCount::Exact
            })
    }
}
