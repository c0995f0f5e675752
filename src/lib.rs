// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

// modules for making sounds
pub mod cache;
pub mod filter;
pub mod morse;
pub mod oscillator;
pub mod timing;
pub mod wave;

// Building messages
pub mod generator;
pub mod pcm;

// Getting messages in and out
pub mod mail;
pub mod output;

pub use generator::{CwGenerator, EncodeError};
pub use timing::{ConfigError, GeneratorConfig};
