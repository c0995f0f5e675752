// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The four waveforms every message is assembled from.

use log::debug;

use crate::filter::{self, OnePoleCoefficient};
use crate::oscillator::ToneModulator;
use crate::timing::Timing;
use crate::wave::Signal;

/// The atomic building blocks of a morse message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// One dit of tone followed by one dit of silence.
    Dit,
    /// Three dits of tone followed by one dit of silence.
    Dah,
    /// Extra silence after a character.
    CharSpace,
    /// Extra silence after a word.
    WordSpace,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Dit,
        PrimitiveKind::Dah,
        PrimitiveKind::CharSpace,
        PrimitiveKind::WordSpace,
    ];

    fn index(self) -> usize {
        match self {
            PrimitiveKind::Dit => 0,
            PrimitiveKind::Dah => 1,
            PrimitiveKind::CharSpace => 2,
            PrimitiveKind::WordSpace => 3,
        }
    }

    /// Keying envelope of the primitive.
    pub fn envelope(self, timing: &Timing) -> Signal {
        match self {
            PrimitiveKind::Dit => Signal::keyed(timing.dit(), timing.dit()),
            PrimitiveKind::Dah => Signal::keyed(timing.dah(), timing.dit()),
            PrimitiveKind::CharSpace => Signal::keyed(0, timing.char_space()),
            PrimitiveKind::WordSpace => Signal::keyed(0, timing.word_space()),
        }
    }
}

/// Synthesized primitives for one generator configuration.
///
/// All four are rendered when the cache is built and never modified afterwards.
#[derive(Debug, Clone)]
pub struct PrimitiveCache {
    primitives: [Signal; 4],
}

impl PrimitiveCache {
    pub fn new(timing: &Timing, filter: &OnePoleCoefficient, modulator: &ToneModulator) -> Self {
        let render = |kind: PrimitiveKind| {
            let signal = modulator.modulate(&filter::smooth(filter, &kind.envelope(timing)));
            debug!("rendered {:?} with {} samples", kind, signal.len());
            signal
        };
        Self {
            primitives: [
                render(PrimitiveKind::Dit),
                render(PrimitiveKind::Dah),
                render(PrimitiveKind::CharSpace),
                render(PrimitiveKind::WordSpace),
            ],
        }
    }

    pub fn get(&self, kind: PrimitiveKind) -> &Signal {
        &self.primitives[kind.index()]
    }
}
