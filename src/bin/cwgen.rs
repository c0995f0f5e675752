// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `cwgen` keys text as morse code and plays it or stores it as a wav file.

use std::io::{self, Read};
use std::path::PathBuf;

use log::{info, warn};
use snafu::{ResultExt, Snafu};
use structopt::StructOpt;

use cwgen::mail::{self, HeaderParser};
use cwgen::output::{sox, wav};
use cwgen::pcm::Pcm16;
use cwgen::{ConfigError, CwGenerator, EncodeError, GeneratorConfig};

#[derive(Debug, StructOpt)]
#[structopt(name = "cwgen", about = "Keying text as morse code")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Sample rate of the generated audio in Hz.
    #[structopt(long, default_value = "44100")]
    rate: u32,

    /// Keying speed in words per minute.
    #[structopt(long, default_value = "25")]
    wpm: f64,

    /// Pitch of the tone in Hz.
    #[structopt(long, default_value = "600")]
    freq: f64,

    /// Output wav file. The message is played directly if not given.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Play the output file after writing it.
    #[structopt(long)]
    play: bool,

    /// Also dump the raw 16 bit little endian samples to this file.
    #[structopt(long, parse(from_os_str))]
    dump_pcm: Option<PathBuf>,

    /// Announce the mail headers in this file (blocks separated by blank lines)
    /// instead of keying text.
    #[structopt(long, parse(from_os_str))]
    headers: Option<PathBuf>,

    /// The text to key. Read from stdin if not given.
    text: Vec<String>,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("Could not set up logging: {}", source))]
    Logger { source: log::SetLoggerError },
    #[snafu(display("Invalid generator settings: {}", source))]
    Config { source: ConfigError },
    #[snafu(display("Failed to read {}: {}", path.display(), source))]
    ReadHeaders { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read text from stdin: {}", source))]
    ReadStdin { source: io::Error },
    #[snafu(display("Cannot key message: {}", source))]
    Encode { source: EncodeError },
    #[snafu(display("Failed to write {}: {}", path.display(), source))]
    WriteWav { path: PathBuf, source: wav::WavError },
    #[snafu(display("Failed to write {}: {}", path.display(), source))]
    WritePcm { path: PathBuf, source: io::Error },
    #[snafu(display("Playback failed: {}", source))]
    Play { source: io::Error },
}

/// Collect the text to be keyed from wherever the options point to.
fn message_text(opt: &Opt) -> Result<String, Error> {
    if let Some(path) = &opt.headers {
        let raw = std::fs::read_to_string(path).context(ReadHeaders { path })?;
        let parser = HeaderParser::new();
        let announcements: Vec<_> = mail::split_header_blocks(&raw)
            .iter()
            .filter_map(|block| {
                let header = parser.parse(block);
                if header.is_none() {
                    warn!("skipping header block without sender or subject");
                }
                header
            })
            .map(|header| header.announcement())
            .collect();
        info!("announcing {} messages", announcements.len());
        // separated by the prosign BT
        Ok(announcements.join(" = "))
    } else if !opt.text.is_empty() {
        Ok(opt.text.join(" "))
    } else {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context(ReadStdin)?;
        Ok(text)
    }
}

fn run(opt: Opt) -> Result<(), Error> {
    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).context(Logger)?;

    let cw = CwGenerator::new(GeneratorConfig {
        sample_rate: opt.rate,
        words_per_minute: opt.wpm,
        tone_frequency: opt.freq,
    })
    .context(Config)?;

    let text = message_text(&opt)?;
    let signal = cw.encode(&text).context(Encode)?;
    info!(
        "keying at {} wpm and {} Hz: {} samples ({:.2} seconds)",
        opt.wpm,
        opt.freq,
        signal.len(),
        signal.duration_secs(opt.rate)
    );

    let pcm = Pcm16::from_signal(&signal, opt.rate);
    if let Some(path) = &opt.dump_pcm {
        std::fs::write(path, pcm.bytes()).context(WritePcm { path })?;
    }

    match &opt.output {
        Some(path) => {
            wav::write_wav(path, &pcm).context(WriteWav { path })?;
            if opt.play {
                sox::play_file(path).context(Play)?;
            }
        }
        None => sox::play_pcm(&pcm).context(Play)?,
    }
    Ok(())
}

fn main() {
    if let Err(err) = run(Opt::from_args()) {
        eprintln!("cwgen: {}", err);
        std::process::exit(1);
    }
}
