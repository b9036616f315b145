//! Per-mode framing and burst assembly
//!
//! Every header (and end-of-message) transmission is the same
//! message sent three times. The hardware encoders we imitate differ
//! in the bytes they wrap around each burst and in the attention
//! tone they sound; [`EncoderMode`] captures those variations.

use crate::waveform::{modulate, silence, sine, PREAMBLE, PREAMBLE_LEN};

/// End-of-message marker, transmitted after the preamble
pub(crate) const EOM_MARKER: &[u8] = b"NNNN";

/// Two-tone attention signal frequencies (Hz)
const ATTN_TONE_LOW_HZ: f32 = 853.0;
const ATTN_TONE_HIGH_HZ: f32 = 960.0;
/// Two-tone attention signal: level per tone (dBFS) and duration (ms)
const ATTN_TONE_DB: f32 = -10.0;
const ATTN_TONE_MS: f32 = 8000.0;

/// NWS single-tone attention signal
const ATTN_NWS_HZ: f32 = 1050.0;
const ATTN_NWS_DB: f32 = -4.0;
const ATTN_NWS_MS: f32 = 9000.0;

/// Silence between bursts of one transmission (ms)
const BURST_GAP_MS: f32 = 1000.0;

/// Hardware-encoder framing flavor
///
/// Parses case-insensitively from its SAME option string:
///
/// ```
/// use std::str::FromStr;
/// use samewave::EncoderMode;
///
/// assert_eq!(EncoderMode::from_str("digital").unwrap(), EncoderMode::Digital);
/// assert_eq!(EncoderMode::from_str("NWS").unwrap(), EncoderMode::Nws);
/// assert_eq!(EncoderMode::Sage.to_string(), "SAGE");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum EncoderMode {
    /// Standard EAS framing
    #[default]
    Default,
    /// NWS: two NUL bytes close each burst; single-tone attention
    Nws,
    /// SAGE DIGITAL 3644: NUL/0xFF burst delimiters
    Digital,
    /// SAGE EAS 1822: one 0xFF byte closes each burst
    Sage,
    /// Trilithic: shortened post-header settling silence
    Trilithic,
}

impl EncoderMode {
    /// Settling silence between the header transmission and the rest
    /// of the alert (ms)
    pub(crate) fn post_header_silence_ms(&self) -> f32 {
        match self {
            EncoderMode::Trilithic => 150.0,
            _ => 500.0,
        }
    }
}

/// Synthesize one complete transmission of `message`
///
/// The message is prefixed with the sixteen-byte preamble and sent
/// three times with one second of silence after each burst. DIGITAL
/// mode instead wraps its bursts in NUL/0xFF delimiters, carries the
/// full preamble only on the first burst, and ends on a burst rather
/// than a gap.
pub(crate) fn transmission(mode: EncoderMode, message: &[u8]) -> Vec<f32> {
    let mut preambled = Vec::with_capacity(PREAMBLE_LEN + message.len());
    preambled.extend_from_slice(&[PREAMBLE; PREAMBLE_LEN]);
    preambled.extend_from_slice(message);

    let gap = silence(BURST_GAP_MS);
    let mut out = Vec::new();

    if mode == EncoderMode::Digital {
        let mut first = vec![0x00];
        first.extend_from_slice(&preambled);
        first.extend_from_slice(&[0xFF, 0xFF, 0xFF]);

        let mut rest = vec![PREAMBLE];
        rest.extend_from_slice(message);
        rest.extend_from_slice(&[0xFF, 0xFF, 0xFF]);

        out.extend_from_slice(&modulate(&first));
        out.extend_from_slice(&gap);
        out.extend_from_slice(&modulate(&rest));
        out.extend_from_slice(&gap);
        out.extend_from_slice(&modulate(&rest));
        return out;
    }

    match mode {
        EncoderMode::Nws => preambled.extend_from_slice(&[0x00, 0x00]),
        EncoderMode::Sage => preambled.push(0xFF),
        _ => {}
    }

    let burst = modulate(&preambled);
    for _ in 0..3 {
        out.extend_from_slice(&burst);
        out.extend_from_slice(&gap);
    }
    out
}

/// End-of-message transmission: the preamble followed by `NNNN`
pub(crate) fn eom_transmission(mode: EncoderMode) -> Vec<f32> {
    transmission(mode, EOM_MARKER)
}

/// Attention tone for the given mode
///
/// NWS sounds nine seconds of a single 1050 Hz tone; every other
/// mode sounds eight seconds of the 853/960 Hz pair, mixed by
/// per-sample averaging.
pub(crate) fn attention_tone(mode: EncoderMode) -> Vec<f32> {
    if mode == EncoderMode::Nws {
        return sine(ATTN_NWS_HZ, ATTN_NWS_MS, ATTN_NWS_DB);
    }

    let low = sine(ATTN_TONE_LOW_HZ, ATTN_TONE_MS, ATTN_TONE_DB);
    let high = sine(ATTN_TONE_HIGH_HZ, ATTN_TONE_MS, ATTN_TONE_DB);
    low.iter().zip(&high).map(|(a, b)| 0.5 * (a + b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use crate::waveform::{samples_per_bit, SAMPLE_RATE};

    const MESSAGE: &[u8] = b"ZCZC-TEST";

    fn burst_samples(payload_len: usize) -> usize {
        payload_len * 8 * samples_per_bit()
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(EncoderMode::from_str("default").unwrap(), EncoderMode::Default);
        assert_eq!(EncoderMode::from_str("Trilithic").unwrap(), EncoderMode::Trilithic);
        assert_eq!(EncoderMode::from_str("SAGE").unwrap(), EncoderMode::Sage);
        assert!(EncoderMode::from_str("bogus").is_err());
        assert_eq!(EncoderMode::default(), EncoderMode::Default);
    }

    #[test]
    fn test_transmission_lengths() {
        let gap = SAMPLE_RATE as usize;
        let framed = PREAMBLE_LEN + MESSAGE.len();

        assert_eq!(
            transmission(EncoderMode::Default, MESSAGE).len(),
            3 * (burst_samples(framed) + gap)
        );
        assert_eq!(
            transmission(EncoderMode::Nws, MESSAGE).len(),
            3 * (burst_samples(framed + 2) + gap)
        );
        assert_eq!(
            transmission(EncoderMode::Sage, MESSAGE).len(),
            3 * (burst_samples(framed + 1) + gap)
        );
        assert_eq!(
            transmission(EncoderMode::Trilithic, MESSAGE).len(),
            3 * (burst_samples(framed) + gap)
        );

        // digital: delimited first burst, short later bursts, no
        // trailing gap
        assert_eq!(
            transmission(EncoderMode::Digital, MESSAGE).len(),
            burst_samples(1 + framed + 3) + gap + 2 * (burst_samples(1 + MESSAGE.len() + 3) + gap)
                - gap
        );
    }

    #[test]
    fn test_transmission_starts_with_preamble() {
        let out = transmission(EncoderMode::Default, MESSAGE);
        let expect = modulate(&[PREAMBLE; PREAMBLE_LEN]);
        assert_eq!(&out[..expect.len()], expect.as_slice());
    }

    #[test]
    fn test_eom_payload() {
        let eom = eom_transmission(EncoderMode::Default);
        let mut payload = Vec::from([PREAMBLE; PREAMBLE_LEN]);
        payload.extend_from_slice(b"NNNN");
        let expect = modulate(&payload);
        assert_eq!(&eom[..expect.len()], expect.as_slice());
    }

    #[test]
    fn test_attention_tone_nws() {
        let tone = attention_tone(EncoderMode::Nws);
        assert_eq!(tone.len(), 9 * SAMPLE_RATE as usize);

        let amplitude = 10.0f32.powf(ATTN_NWS_DB / 20.0);
        for (i, &sample) in tone.iter().enumerate().take(100) {
            let expect = amplitude
                * (2.0 * std::f32::consts::PI * ATTN_NWS_HZ * i as f32 / SAMPLE_RATE as f32)
                    .sin();
            assert!((sample - expect).abs() < 1e-6);
        }
    }

    #[test]
    fn test_attention_tone_two_tone_mix() {
        let tone = attention_tone(EncoderMode::Default);
        assert_eq!(tone.len(), 8 * SAMPLE_RATE as usize);

        let low = sine(ATTN_TONE_LOW_HZ, ATTN_TONE_MS, ATTN_TONE_DB);
        let high = sine(ATTN_TONE_HIGH_HZ, ATTN_TONE_MS, ATTN_TONE_DB);
        for i in (0..tone.len()).step_by(997) {
            let expect = 0.5 * (low[i] + high[i]);
            assert!((tone[i] - expect).abs() < 1e-6);
        }
    }
}
