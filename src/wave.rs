// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// A mono buffer of floating point audio data.
///
/// Depending on the stage it either holds a keying envelope (samples of
/// `0.0` and `1.0`) or tone samples scaled to roughly the 16 bit range.
///
/// ```
/// use cwgen::wave::Signal;
///
/// let mut signal = Signal::silence(3);
/// signal.append(&Signal::from(vec![1.0, -1.0]));
/// assert_eq!(signal.samples(), &[0.0, 0.0, 0.0, 1.0, -1.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty signal with room for `sample_count` samples.
    pub fn with_capacity(sample_count: usize) -> Self {
        Self {
            samples: Vec::with_capacity(sample_count),
        }
    }

    /// `sample_count` samples of zero.
    pub fn silence(sample_count: usize) -> Self {
        Self {
            samples: vec![0.0; sample_count],
        }
    }

    /// A keying envelope holding the key down for `on` samples,
    /// then releasing it for `off` samples.
    pub fn keyed(on: usize, off: usize) -> Self {
        let mut samples = vec![1.0; on + off];
        samples[on..].iter_mut().for_each(|s| *s = 0.0);
        Self { samples }
    }

    /// Size of the signal in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playing time at the given sample rate.
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / sample_rate as f64
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }

    /// Append a copy of another signal to the end of this one.
    pub fn append(&mut self, other: &Signal) {
        self.samples.extend_from_slice(&other.samples);
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl std::iter::FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
