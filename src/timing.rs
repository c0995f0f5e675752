// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Conversion of keying speed into sample counts.

use log::{debug, warn};
use snafu::Snafu;

/// Longest dit accepted, which keeps the primitives at a sane size.
pub const MAX_DIT_SECS: f64 = 60.0;

/// Parameters a generator is built from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of samples per second.
    pub sample_rate: u32,
    /// Keying speed, measured with the word "PARIS" (50 dits).
    pub words_per_minute: f64,
    /// Pitch of the tone in Hz.
    pub tone_frequency: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            words_per_minute: 25.0,
            tone_frequency: 600.0,
        }
    }
}

#[derive(Debug, PartialEq, Snafu)]
pub enum ConfigError {
    #[snafu(display("Sample rate must be positive, got {}", sample_rate))]
    SampleRate { sample_rate: u32 },
    #[snafu(display("Words per minute must be positive, got {}", words_per_minute))]
    WordsPerMinute { words_per_minute: f64 },
    #[snafu(display("Tone frequency must be positive, got {} Hz", tone_frequency))]
    ToneFrequency { tone_frequency: f64 },
    #[snafu(display(
        "A dit at {} wpm and {} Hz sample rate is shorter than one sample",
        words_per_minute,
        sample_rate
    ))]
    DitTooShort {
        sample_rate: u32,
        words_per_minute: f64,
    },
    #[snafu(display(
        "A dit at {} wpm is longer than {} seconds",
        words_per_minute,
        MAX_DIT_SECS
    ))]
    DitTooLong {
        sample_rate: u32,
        words_per_minute: f64,
    },
}

/// Durations of the keying elements, in samples.
///
/// The dit and dah primitives each end in one dit of silence,
/// so the gaps only hold the silence on top of that:
/// two dits between characters, six between words.
///
/// ```
/// use cwgen::timing::{GeneratorConfig, Timing};
///
/// let timing = Timing::new(&GeneratorConfig::default()).unwrap();
/// assert_eq!(timing.dit(), 2117);
/// assert_eq!(timing.dah(), 3 * 2117);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timing {
    dit: usize,
}

impl Timing {
    pub fn new(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let GeneratorConfig {
            sample_rate,
            words_per_minute,
            tone_frequency,
        } = *config;

        // written as negations so that NaN is rejected as well
        if sample_rate == 0 {
            return Err(ConfigError::SampleRate { sample_rate });
        }
        if !(words_per_minute > 0.0) || !words_per_minute.is_finite() {
            return Err(ConfigError::WordsPerMinute { words_per_minute });
        }
        if !(tone_frequency > 0.0) || !tone_frequency.is_finite() {
            return Err(ConfigError::ToneFrequency { tone_frequency });
        }

        let dit = (sample_rate as f64 * 1.2 / words_per_minute).round();
        if dit < 1.0 {
            return Err(ConfigError::DitTooShort {
                sample_rate,
                words_per_minute,
            });
        }
        // a word space must still be addressable
        if dit > sample_rate as f64 * MAX_DIT_SECS || dit * 6.0 > usize::MAX as f64 {
            return Err(ConfigError::DitTooLong {
                sample_rate,
                words_per_minute,
            });
        }

        if tone_frequency * 2.0 >= sample_rate as f64 {
            warn!(
                "tone of {} Hz is at or above the Nyquist frequency of {} Hz",
                tone_frequency,
                sample_rate / 2
            );
        }
        debug!(
            "{} wpm at {} Hz: dit is {} samples",
            words_per_minute, sample_rate, dit
        );

        Ok(Self { dit: dit as usize })
    }

    /// Length of a dit.
    pub fn dit(&self) -> usize {
        self.dit
    }

    /// Length of a dah, three dits.
    pub fn dah(&self) -> usize {
        3 * self.dit
    }

    /// Silence added after the last symbol of a character.
    pub fn char_space(&self) -> usize {
        2 * self.dit
    }

    /// Silence added after the last character of a word.
    pub fn word_space(&self) -> usize {
        6 * self.dit
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(sample_rate: u32, words_per_minute: f64) -> GeneratorConfig {
        GeneratorConfig {
            sample_rate,
            words_per_minute,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn dit_is_rounded() {
        // 44100 * 1.2 / 25 = 2116.8
        assert_eq!(Timing::new(&config(44100, 25.0)).unwrap().dit(), 2117);
        // 8000 * 1.2 / 20 = 480
        assert_eq!(Timing::new(&config(8000, 20.0)).unwrap().dit(), 480);
        // 1000 * 1.2 / 7 = 171.43
        assert_eq!(Timing::new(&config(1000, 7.0)).unwrap().dit(), 171);
    }

    #[test]
    fn derived_lengths() {
        let t = Timing::new(&config(8000, 20.0)).unwrap();
        assert_eq!(t.dah(), 3 * t.dit());
        assert_eq!(t.char_space(), 2 * t.dit());
        assert_eq!(t.word_space(), 6 * t.dit());
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert_eq!(
            Timing::new(&config(0, 25.0)),
            Err(ConfigError::SampleRate { sample_rate: 0 })
        );
        assert_eq!(
            Timing::new(&config(44100, 0.0)),
            Err(ConfigError::WordsPerMinute {
                words_per_minute: 0.0
            })
        );
        assert!(matches!(
            Timing::new(&config(44100, -3.0)),
            Err(ConfigError::WordsPerMinute { .. })
        ));
        assert!(matches!(
            Timing::new(&config(44100, f64::NAN)),
            Err(ConfigError::WordsPerMinute { .. })
        ));
        let silent = GeneratorConfig {
            tone_frequency: 0.0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            Timing::new(&silent),
            Err(ConfigError::ToneFrequency {
                tone_frequency: 0.0
            })
        );
    }

    #[test]
    fn rejects_sub_sample_dits() {
        // 10 * 1.2 / 100 = 0.12
        assert_eq!(
            Timing::new(&config(10, 100.0)),
            Err(ConfigError::DitTooShort {
                sample_rate: 10,
                words_per_minute: 100.0
            })
        );
        // 1 * 1.2 / 1 = 1.2 still rounds to one sample
        assert_eq!(Timing::new(&config(1, 1.0)).unwrap().dit(), 1);
    }

    #[test]
    fn rejects_overlong_dits() {
        assert_eq!(
            Timing::new(&config(44100, 1e-300)),
            Err(ConfigError::DitTooLong {
                sample_rate: 44100,
                words_per_minute: 1e-300
            })
        );
        // 1.2 / 0.01 = 120 seconds
        assert!(matches!(
            Timing::new(&config(44100, 0.01)),
            Err(ConfigError::DitTooLong { .. })
        ));
        assert!(matches!(
            Timing::new(&config(u32::MAX, 1e-9)),
            Err(ConfigError::DitTooLong { .. })
        ));
        // 1.2 / 0.03 = 40 seconds is slow but fine
        assert_eq!(Timing::new(&config(100, 0.03)).unwrap().dit(), 4000);
    }
}
