// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Serializing signals into 16 bit PCM.

use log::error;

use crate::wave::Signal;

/// Mono 16 bit little endian PCM data together with its sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcm16 {
    sample_rate: u32,
    bytes: Vec<u8>,
}

impl Pcm16 {
    /// Pack a signal that was synthesized at `sample_rate`.
    pub fn from_signal(signal: &Signal, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            bytes: pack(signal),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        1
    }

    pub fn bits_per_sample(&self) -> u16 {
        16
    }

    pub fn sample_count(&self) -> usize {
        self.bytes.len() / 2
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Round a sample to the nearest 16 bit value.
///
/// Returns `None` if the sample lies outside of the representable range.
fn quantize(sample: f64) -> Option<i16> {
    let rounded = sample.round();
    if rounded >= i16::MIN as f64 && rounded <= i16::MAX as f64 {
        Some(rounded as i16)
    } else {
        None
    }
}

/// Convert the signal to signed 16 bit little endian samples,
/// rounding to the nearest integer.
///
/// The output is always exactly two bytes per sample.
/// Samples out of range are clamped; they should never occur
/// since the tone amplitude leaves plenty of headroom.
///
/// ```
/// use cwgen::pcm::pack;
/// use cwgen::wave::Signal;
///
/// let bytes = pack(&Signal::from(vec![0.0, 1.6, -256.0]));
/// assert_eq!(bytes, vec![0x00, 0x00, 0x02, 0x00, 0x00, 0xff]);
/// ```
pub fn pack(signal: &Signal) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 * signal.len());
    let mut clamped = 0usize;
    for &sample in signal.iter() {
        let value = quantize(sample).unwrap_or_else(|| {
            clamped += 1;
            if sample > 0.0 {
                i16::MAX
            } else if sample < 0.0 {
                i16::MIN
            } else {
                // NaN
                0
            }
        });
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    if clamped > 0 {
        error!(
            "clamped {} of {} samples exceeding the 16 bit range",
            clamped,
            signal.len()
        );
    }
    bytes
}

/// Read back little endian 16 bit samples.
/// A trailing odd byte is ignored.
pub fn unpack(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::CwGenerator;
    use crate::timing::GeneratorConfig;

    #[test]
    fn rounds_to_nearest() {
        let signal = Signal::from(vec![0.4, 0.5, 0.6, -0.4, -0.6, -1.5, 100.49]);
        assert_eq!(unpack(&pack(&signal)), vec![0, 1, 1, 0, -1, -2, 100]);
    }

    #[test]
    fn clamps_instead_of_wrapping() {
        let signal = Signal::from(vec![32767.4, 32768.0, 1e9, -32768.0, -32769.0, -1e9]);
        assert_eq!(
            unpack(&pack(&signal)),
            vec![32767, 32767, 32767, -32768, -32768, -32768]
        );
    }

    #[test]
    fn two_bytes_per_sample() {
        assert!(pack(&Signal::new()).is_empty());
        assert_eq!(pack(&Signal::silence(123)).len(), 246);
    }

    #[test]
    fn encoded_message_round_trip() {
        let cw = CwGenerator::new(GeneratorConfig::default()).unwrap();
        let signal = cw.encode("73").unwrap();
        let pcm = Pcm16::from_signal(&signal, cw.config().sample_rate);
        assert_eq!(pcm.bytes().len(), 2 * signal.len());
        assert_eq!(pcm.sample_count(), signal.len());
        let samples = unpack(pcm.bytes());
        for (packed, original) in samples.iter().zip(signal.iter()) {
            assert!((*packed as f64 - original).abs() <= 0.5);
        }
    }

    #[test]
    fn unpack_ignores_odd_byte() {
        assert_eq!(unpack(&[0x01, 0x00, 0xff]), vec![1]);
    }
}
