// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Storing packed PCM in a wav container.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;
use snafu::{ResultExt, Snafu};

use crate::pcm::{self, Pcm16};

#[derive(Debug, Snafu)]
pub enum WavError {
    #[snafu(display("PCM data of {} bytes is not made of 16 bit samples", len))]
    OddLength { len: usize },
    #[snafu(display("Failed to write wav data: {}", source))]
    Encode { source: hound::Error },
}

/// Header for mono 16 bit integer samples.
fn mono_pcm16(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Write little endian 16 bit mono samples as a complete wav file.
pub fn write_wav_to<W: Write + Seek>(
    writer: W,
    sample_rate: u32,
    bytes: &[u8],
) -> Result<(), WavError> {
    if bytes.len() % 2 != 0 {
        return Err(WavError::OddLength { len: bytes.len() });
    }
    let mut wav = WavWriter::new(writer, mono_pcm16(sample_rate)).context(Encode)?;
    for sample in pcm::unpack(bytes) {
        wav.write_sample(sample).context(Encode)?;
    }
    wav.finalize().context(Encode)
}

/// Store packed PCM as a wav file at `path`.
pub fn write_wav(path: &Path, pcm: &Pcm16) -> Result<(), WavError> {
    debug!(
        "writing {} samples at {} Hz to {}",
        pcm.sample_count(),
        pcm.sample_rate(),
        path.display()
    );
    let file = File::create(path)
        .map_err(hound::Error::IoError)
        .context(Encode)?;
    write_wav_to(BufWriter::new(file), pcm.sample_rate(), pcm.bytes())
}
