mod args;
mod sink;

use std::ops::ControlFlow;

use clap::Parser;
use color_eyre::eyre::{Error, bail};
use sstv_encoder::{AudioSink, Encoder, SstvImage};
use tracing_subscriber::EnvFilter;

use crate::{
    args::Args,
    sink::{Playback, WavFile},
};

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!(?args);

    if args.output.is_none() && !args.play {
        bail!("Nothing to do, pass --output and/or --play");
    }

    let playback = if args.play {
        Some(Playback::open()?)
    } else {
        None
    };
    let sample_rate = match &playback {
        Some(playback) if playback.sample_rate() != args.sample_rate => {
            tracing::info!(
                requested = args.sample_rate,
                device = playback.sample_rate(),
                "Using the sample rate of the output device"
            );
            playback.sample_rate()
        }
        _ => args.sample_rate,
    };

    let picture = image::open(&args.image)?;
    let (width, height) = args.mode.resolution();
    let image = SstvImage::from_image(&picture)?.resize_image(width, height);

    let encoder = Encoder::new(args.encoder_config(sample_rate))?;
    tracing::info!(
        mode = %args.mode,
        seconds = encoder.total_duration_ms(args.mode) / 1000.0,
        "Encoding {}",
        args.image.display()
    );

    let buffer = encoder.encode_with(&image, args.mode, |progress| {
        if progress.line % 32 == 0 {
            tracing::debug!(line = progress.line, lines = progress.lines, "Encoding");
        }
        ControlFlow::Continue(())
    })?;

    if let Some(path) = &args.output {
        WavFile::new(path.clone()).write(&buffer)?;
        tracing::info!(path = %path.display(), samples = buffer.len(), "Wrote transmission");
    }

    if let Some(mut playback) = playback {
        tracing::info!("Playing transmission");
        playback.write(&buffer)?;
    }

    Ok(())
}
