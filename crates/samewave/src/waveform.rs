//! Waveform parameters and sample-level synthesis primitives
//!
//! All synthesis happens at a fixed 24 kHz mono rate in `f32`
//! samples; conversion to 16-bit PCM is deferred to write time.

use std::f32::consts::PI;

/// Output sampling rate (Hz)
pub const SAMPLE_RATE: u32 = 24_000;

/// Output bit depth
pub const BIT_DEPTH: u16 = 16;

/// Mark frequency (Hz)
pub const FSK_MARK_HZ: f32 = 2083.3;

/// Space frequency (Hz)
pub const FSK_SPACE_HZ: f32 = 1562.5;

/// Baud rate (Hz)
pub const BAUD_HZ: f32 = 520.83;

/// Mark/space tone level (dBFS)
pub const FSK_LEVEL_DB: f32 = -3.0;

/// Preamble byte
///
/// The preamble byte is repeated sixteen times before every SAME
/// burst. It contains many bit transitions to ensure that bit and
/// byte synchronization is acquired quickly.
pub const PREAMBLE: u8 = 0xAB;

/// Number of preamble bytes per burst
pub const PREAMBLE_LEN: usize = 16;

/// Duration of one bit (ms)
pub fn bit_duration_ms() -> f32 {
    1000.0 / BAUD_HZ
}

/// Samples per bit at the output rate
///
/// Mark and space bits contribute the same sample count, so burst
/// lengths are an exact multiple of this.
pub fn samples_per_bit() -> usize {
    (SAMPLE_RATE as f32 / BAUD_HZ).round() as usize
}

/// Synthesize a sine tone
///
/// `duration_ms` of `freq_hz` at `volume_db` relative to full scale.
/// The sample count is `round(duration_ms / 1000 · 24000)`.
pub fn sine(freq_hz: f32, duration_ms: f32, volume_db: f32) -> Vec<f32> {
    let count = (duration_ms / 1000.0 * SAMPLE_RATE as f32).round() as usize;
    let amplitude = 10.0f32.powf(volume_db / 20.0);
    (0..count)
        .map(|i| amplitude * (2.0 * PI * freq_hz * i as f32 / SAMPLE_RATE as f32).sin())
        .collect()
}

/// Silence of the given duration
pub fn silence(duration_ms: f32) -> Vec<f32> {
    vec![0.0; (duration_ms / 1000.0 * SAMPLE_RATE as f32).round() as usize]
}

/// AFSK-modulate bytes, least significant bit first
///
/// Emits a mark tone for every one bit and a space tone for every
/// zero bit. Each bit is an independently-keyed tone burst of
/// [`samples_per_bit`] samples.
pub fn modulate(data: &[u8]) -> Vec<f32> {
    let mark = sine(FSK_MARK_HZ, bit_duration_ms(), FSK_LEVEL_DB);
    let space = sine(FSK_SPACE_HZ, bit_duration_ms(), FSK_LEVEL_DB);

    let mut out = Vec::with_capacity(data.len() * 8 * mark.len());
    for byte in data {
        let mut word = *byte;
        for _ in 0..8 {
            if word & 0x01 == 1 {
                out.extend_from_slice(&mark);
            } else {
                out.extend_from_slice(&space);
            }
            word >>= 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_per_bit() {
        assert_eq!(samples_per_bit(), 46);
        assert_eq!(
            sine(FSK_MARK_HZ, bit_duration_ms(), FSK_LEVEL_DB).len(),
            samples_per_bit()
        );
        assert_eq!(
            sine(FSK_SPACE_HZ, bit_duration_ms(), FSK_LEVEL_DB).len(),
            samples_per_bit()
        );
    }

    #[test]
    fn test_sine_samples() {
        let tone = sine(1050.0, 1000.0, -4.0);
        assert_eq!(tone.len(), SAMPLE_RATE as usize);

        let amplitude = 10.0f32.powf(-4.0 / 20.0);
        assert!(tone[0].abs() < 1e-6);
        for (i, &sample) in tone.iter().enumerate().take(200) {
            let expect =
                amplitude * (2.0 * PI * 1050.0 * i as f32 / SAMPLE_RATE as f32).sin();
            assert!((sample - expect).abs() < 1e-6);
        }
    }

    #[test]
    fn test_silence_length() {
        assert_eq!(silence(1000.0).len(), 24_000);
        assert_eq!(silence(150.0).len(), 3_600);
        assert_eq!(silence(500.0).len(), 12_000);
        assert!(silence(1000.0).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_modulate_lsb_first() {
        // 0xAB = 0b1010_1011: LSB-first bit order 1,1,0,1,0,1,0,1
        const EXPECT_MARKS: &[bool] = &[true, true, false, true, false, true, false, true];

        let bit = samples_per_bit();
        let mark = sine(FSK_MARK_HZ, bit_duration_ms(), FSK_LEVEL_DB);
        let space = sine(FSK_SPACE_HZ, bit_duration_ms(), FSK_LEVEL_DB);

        let out = modulate(&[PREAMBLE]);
        assert_eq!(out.len(), 8 * bit);

        for (slot, &is_mark) in EXPECT_MARKS.iter().enumerate() {
            let segment = &out[slot * bit..(slot + 1) * bit];
            let expect = if is_mark { &mark } else { &space };
            assert_eq!(segment, expect.as_slice());
        }
    }

    #[test]
    fn test_modulate_length_is_sum_of_bits() {
        let out = modulate(b"ZCZC-TEST");
        assert_eq!(out.len(), 9 * 8 * samples_per_bit());
    }
}
