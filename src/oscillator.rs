// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use std::f64::consts::PI;

use crate::wave::Signal;

/// Peak amplitude of the tone, half of the 16 bit range.
pub const AMPLITUDE: f64 = 16384.0;

/// Shapes a sine carrier with a keying envelope.
#[derive(Debug, Clone)]
pub struct ToneModulator {
    /// Phase increment per sample in radians.
    omega: f64,
    amplitude: f64,
}

impl ToneModulator {
    pub fn new(sample_rate: u32, frequency: f64) -> Self {
        Self {
            omega: 2.0 * PI * frequency / sample_rate as f64,
            amplitude: AMPLITUDE,
        }
    }

    /// Multiply the envelope with the carrier.
    /// The carrier phase starts at zero on the first sample of every call.
    pub fn modulate(&self, envelope: &Signal) -> Signal {
        envelope
            .iter()
            .enumerate()
            .map(|(n, &e)| e * self.amplitude * (self.omega * n as f64).sin())
            .collect()
    }
}
