// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turning text into a continuous wave signal.

use log::trace;
use snafu::Snafu;

use crate::cache::{PrimitiveCache, PrimitiveKind};
use crate::filter::OnePoleCoefficient;
use crate::morse::{self, Symbol};
use crate::oscillator::ToneModulator;
use crate::timing::{ConfigError, GeneratorConfig, Timing};
use crate::wave::Signal;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum EncodeError {
    #[snafu(display("Character {:?} has no morse code", character))]
    UnsupportedCharacter { character: char },
}

impl From<Symbol> for PrimitiveKind {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Dit => PrimitiveKind::Dit,
            Symbol::Dah => PrimitiveKind::Dah,
        }
    }
}

/// A morse code generator for a fixed speed, pitch and sample rate.
///
/// ```
/// use cwgen::generator::CwGenerator;
/// use cwgen::timing::GeneratorConfig;
///
/// let cw = CwGenerator::new(GeneratorConfig::default()).unwrap();
/// let signal = cw.encode("cq de dl1abc").unwrap();
/// assert_eq!(signal.len(), cw.encoded_len("cq de dl1abc").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct CwGenerator {
    config: GeneratorConfig,
    timing: Timing,
    cache: PrimitiveCache,
}

impl CwGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let timing = Timing::new(&config)?;
        let cache = PrimitiveCache::new(
            &timing,
            &OnePoleCoefficient::click_suppression(config.sample_rate),
            &ToneModulator::new(config.sample_rate, config.tone_frequency),
        );
        Ok(Self {
            config,
            timing,
            cache,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn primitive(&self, kind: PrimitiveKind) -> &Signal {
        self.cache.get(kind)
    }

    pub fn dit(&self) -> &Signal {
        self.primitive(PrimitiveKind::Dit)
    }

    pub fn dah(&self) -> &Signal {
        self.primitive(PrimitiveKind::Dah)
    }

    pub fn char_space(&self) -> &Signal {
        self.primitive(PrimitiveKind::CharSpace)
    }

    pub fn word_space(&self) -> &Signal {
        self.primitive(PrimitiveKind::WordSpace)
    }

    /// Encode the text as one signal.
    ///
    /// Words are separated by any amount of whitespace. Every character
    /// is followed by a character space and every word by a word space,
    /// including the last one. There is no silence before the first symbol.
    ///
    /// Fails without producing any output if a character has no morse code.
    pub fn encode(&self, text: &str) -> Result<Signal, EncodeError> {
        let words = lookup_words(text)?;
        let mut signal = Signal::with_capacity(self.planned_len(&words));
        for word in &words {
            for (c, pattern) in word {
                trace!("{:?} as {}", c, pattern);
                for symbol in morse::decode(pattern) {
                    signal.append(self.primitive(symbol.into()));
                }
                signal.append(self.char_space());
            }
            signal.append(self.word_space());
        }
        Ok(signal)
    }

    /// Number of samples `encode` produces for the text, without synthesizing it.
    pub fn encoded_len(&self, text: &str) -> Result<usize, EncodeError> {
        lookup_words(text).map(|words| self.planned_len(&words))
    }

    fn planned_len(&self, words: &[Vec<(char, &str)>]) -> usize {
        let dit = self.dit().len();
        let dah = self.dah().len();
        let char_space = self.char_space().len();
        let word_space = self.word_space().len();
        words
            .iter()
            .map(|word| {
                let chars: usize = word
                    .iter()
                    .map(|(_, pattern)| {
                        let symbols: usize = morse::decode(pattern)
                            .map(|s| match s {
                                Symbol::Dit => dit,
                                Symbol::Dah => dah,
                            })
                            .sum();
                        symbols + char_space
                    })
                    .sum();
                chars + word_space
            })
            .sum()
    }
}

/// Split the text into words and look up the pattern of every character.
fn lookup_words(text: &str) -> Result<Vec<Vec<(char, &'static str)>>, EncodeError> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| {
                    morse::pattern(c)
                        .map(|pattern| (c, pattern))
                        .ok_or(EncodeError::UnsupportedCharacter { character: c })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn default_generator() -> CwGenerator {
        CwGenerator::new(GeneratorConfig::default()).unwrap()
    }

    /// Concatenate primitives by hand.
    fn assemble(cw: &CwGenerator, kinds: &[PrimitiveKind]) -> Signal {
        let mut out = Signal::new();
        for &kind in kinds {
            out.append(cw.primitive(kind));
        }
        out
    }

    #[test]
    fn invalid_config() {
        let err = CwGenerator::new(GeneratorConfig {
            sample_rate: 0,
            ..GeneratorConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::SampleRate { sample_rate: 0 });
    }

    #[test]
    fn overlong_dit_fails_at_construction() {
        let err = CwGenerator::new(GeneratorConfig {
            words_per_minute: 1e-300,
            ..GeneratorConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::DitTooLong { .. }));
    }

    #[test]
    fn empty_text() {
        let cw = default_generator();
        assert!(cw.encode("").unwrap().is_empty());
        assert!(cw.encode("  \t\n ").unwrap().is_empty());
        assert_eq!(cw.encoded_len(" ").unwrap(), 0);
    }

    #[test]
    fn single_dit() {
        let cw = default_generator();
        let dit = cw.timing().dit();
        let e = cw.encode("E").unwrap();
        assert_eq!(e.len(), cw.dit().len() + 2 * dit + 6 * dit);
        use PrimitiveKind::*;
        assert_eq!(e, assemble(&cw, &[Dit, CharSpace, WordSpace]));
    }

    #[test]
    fn sos_sample_count() {
        let cw = default_generator();
        let dit = cw.timing().dit();
        assert_eq!(dit, 2117);
        let dit_len = 2 * dit;
        let dah_len = 4 * dit;
        let gap = 2 * dit;
        let expected =
            (3 * dit_len + gap) + (3 * dah_len + gap) + (3 * dit_len + gap) + 6 * dit;
        let sos = cw.encode("SOS").unwrap();
        assert_eq!(sos.len(), expected);
        assert_eq!(sos.len(), 36 * 2117);
        assert_eq!(sos, cw.encode("SOS").unwrap());
    }

    #[test]
    fn word_spacing() {
        let cw = default_generator();
        use PrimitiveKind::*;
        // h .... e . l .-.. l .-.. o ---
        let mut expected = vec![Dit, Dit, Dit, Dit, CharSpace];
        expected.extend(&[Dit, CharSpace]);
        expected.extend(&[Dit, Dah, Dit, Dit, CharSpace]);
        expected.extend(&[Dit, Dah, Dit, Dit, CharSpace]);
        expected.extend(&[Dah, Dah, Dah, CharSpace, WordSpace]);
        // w .-- o --- r .-. l .-.. d -..
        expected.extend(&[Dit, Dah, Dah, CharSpace]);
        expected.extend(&[Dah, Dah, Dah, CharSpace]);
        expected.extend(&[Dit, Dah, Dit, CharSpace]);
        expected.extend(&[Dit, Dah, Dit, Dit, CharSpace]);
        expected.extend(&[Dah, Dit, Dit, CharSpace, WordSpace]);

        let hello = cw.encode("hello world").unwrap();
        assert_eq!(hello, assemble(&cw, &expected));
        // repeated whitespace does not add silence
        assert_eq!(cw.encode("  hello \t\n  world ").unwrap(), hello);
    }

    #[test]
    fn case_does_not_matter() {
        let cw = default_generator();
        assert_eq!(cw.encode("Paris").unwrap(), cw.encode("PARIS").unwrap());
        assert_eq!(cw.encode("Ärger").unwrap(), cw.encode("äRGER").unwrap());
    }

    #[test]
    fn unsupported_character() {
        let cw = default_generator();
        assert_eq!(
            cw.encode("hello #world").unwrap_err(),
            EncodeError::UnsupportedCharacter { character: '#' }
        );
        assert_eq!(
            cw.encoded_len("50%").unwrap_err(),
            EncodeError::UnsupportedCharacter { character: '%' }
        );
        assert_eq!(
            cw.encode("ok ~").unwrap_err().to_string(),
            "Character '~' has no morse code"
        );
    }

    #[test]
    fn encoded_len_matches() {
        let cw = CwGenerator::new(GeneratorConfig {
            sample_rate: 8000,
            words_per_minute: 20.0,
            tone_frequency: 700.0,
        })
        .unwrap();
        for text in &["", "E", "SOS", "cq cq de dl1abc k", "Grüße, 73!"] {
            assert_eq!(cw.encode(text).unwrap().len(), cw.encoded_len(text).unwrap());
        }
    }

    #[test]
    fn shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CwGenerator>();

        let cw = std::sync::Arc::new(default_generator());
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let cw = cw.clone();
                std::thread::spawn(move || cw.encode("test").unwrap())
            })
            .collect();
        let expected = cw.encode("test").unwrap();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn primitives_are_stable() {
        let cw = default_generator();
        assert_eq!(cw.dit(), cw.dit());
        assert!(std::ptr::eq(cw.dah(), cw.dah()));
        let other = CwGenerator::new(GeneratorConfig {
            words_per_minute: 18.0,
            ..GeneratorConfig::default()
        })
        .unwrap();
        assert_ne!(cw.dit(), other.dit());
    }
}
