// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Click suppression for keying envelopes.

use crate::wave::Signal;

/// Smoothing factor that gives a rise and fall time of about 4 ms,
/// independent of the sample rate.
const RISE_RATE: f64 = 800.0;

/// Single pole lowpass (RC) filter coefficient.
///
/// `y[n] = y[n-1] + k * (x[n] - y[n-1])`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OnePoleCoefficient {
    pub k: f64,
}

impl OnePoleCoefficient {
    /// Coefficient for keying at the given sample rate.
    ///
    /// This is `800 / sample_rate`, capped at 1 so that the output of a 0/1
    /// envelope never exceeds 1 and the tone stays within its amplitude.
    /// Below 800 Hz the envelope therefore passes unfiltered.
    pub fn click_suppression(sample_rate: u32) -> Self {
        Self {
            k: (RISE_RATE / sample_rate as f64).min(1.0),
        }
    }
}

/// State of a single pole filter.
#[derive(Debug, Clone)]
pub struct OnePole {
    y1: f64,
}

impl OnePole {
    pub fn new() -> Self {
        Self { y1: 0.0 }
    }

    /// Feed the next value through the filter using the given coefficient.
    pub fn step(&mut self, c: &OnePoleCoefficient, input: f64) -> f64 {
        self.y1 += c.k * (input - self.y1);
        self.y1
    }
}

impl Default for OnePole {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter a whole keying envelope, starting from rest.
///
/// The first output sample is always zero, so every keyed element
/// starts out silent. The output has the same length as the input.
pub fn smooth(c: &OnePoleCoefficient, envelope: &Signal) -> Signal {
    let mut filter = OnePole::new();
    envelope
        .iter()
        .enumerate()
        .map(|(n, &x)| if n == 0 { 0.0 } else { filter.step(c, x) })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coefficient() {
        assert_eq!(OnePoleCoefficient::click_suppression(8000).k, 0.1);
        assert_eq!(OnePoleCoefficient::click_suppression(400).k, 1.0);
        // below 800 Hz the envelope passes through without overshoot
        let low = OnePoleCoefficient::click_suppression(100);
        let out = smooth(&low, &Signal::keyed(3, 2));
        assert_eq!(out.samples(), &[0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn recurrence() {
        let c = OnePoleCoefficient { k: 0.5 };
        let out = smooth(&c, &Signal::from(vec![1.0, 1.0, 1.0, 0.0, 0.0]));
        assert_eq!(out.samples(), &[0.0, 0.5, 0.75, 0.375, 0.1875]);
    }

    #[test]
    fn same_length_and_bounded() {
        let c = OnePoleCoefficient::click_suppression(44100);
        let env = Signal::keyed(500, 500);
        let out = smooth(&c, &env);
        assert_eq!(out.len(), env.len());
        assert!(out.iter().all(|&y| (0.0..=1.0).contains(&y)));
        // rising while keyed, falling after release
        let s = out.samples();
        assert!(s[..500].windows(2).all(|w| w[0] <= w[1]));
        assert!(s[500..].windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn rise_time_is_about_4ms() {
        let sample_rate = 48000;
        let c = OnePoleCoefficient::click_suppression(sample_rate);
        let out = smooth(&c, &Signal::keyed(sample_rate as usize / 10, 0));
        // one time constant (1/800 s) reaches 1 - 1/e, about 63%
        let tau = sample_rate as usize / 800;
        assert!((out.samples()[tau] - 0.632).abs() < 0.01);
        // after 4ms the envelope is above 95%
        let four_ms = sample_rate as usize * 4 / 1000;
        assert!(out.samples()[four_ms] > 0.95);
    }

    #[test]
    fn no_state_between_calls() {
        let c = OnePoleCoefficient::click_suppression(8000);
        let env = Signal::keyed(10, 0);
        assert_eq!(smooth(&c, &env), smooth(&c, &env));
        assert!(smooth(&c, &Signal::new()).is_empty());
    }
}
