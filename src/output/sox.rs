// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Easy interface for getting sound to play using a sox subprocess.

use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, error};

use crate::pcm::Pcm16;

/// Location of the sox `play` binary.
fn play_binary() -> PathBuf {
    // For properly recording the sox dependency on nix:
    if let Some(sox_bin) = option_env!("NIX_SOX_BIN") {
        debug!("using sox from nix store {}", sox_bin);
        Path::new(sox_bin).join("play")
    } else {
        "play".into()
    }
}

/// Arguments describing raw mono 16 bit input on stdin.
fn raw_input_args(pcm: &Pcm16) -> Vec<String> {
    vec![
        "--type".into(),
        "s16".into(),
        "--endian".into(),
        "little".into(),
        "--channels".into(),
        format!("{}", pcm.channels()),
        "--rate".into(),
        format!("{}", pcm.sample_rate()),
        "/dev/stdin".into(),
    ]
}

fn wait_for(mut player: Child) -> io::Result<()> {
    let status = player.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("sox exited with {}", status),
        ))
    }
}

/// Play packed PCM on the default speakers, blocking until playback has finished.
pub fn play_pcm(pcm: &Pcm16) -> io::Result<()> {
    let mut player = Command::new(play_binary())
        .arg("-q")
        .args(raw_input_args(pcm))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()?;

    let mut audio_stream = player
        .stdin
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "sox stdin is not piped"))?;

    let status = audio_stream
        .write_all(pcm.bytes())
        .and_then(|_| audio_stream.flush());
    if let Err(err) = &status {
        error!("Failed to write audio to sox stream: {}", err);
    }

    // sox exits once the input stream is closed
    drop(audio_stream);
    wait_for(player)?;
    status
}

/// Play an audio file in any format sox understands.
pub fn play_file(path: &Path) -> io::Result<()> {
    let player = Command::new(play_binary())
        .arg("-q")
        .arg(path)
        .stdout(Stdio::null())
        .spawn()?;
    wait_for(player)
}
