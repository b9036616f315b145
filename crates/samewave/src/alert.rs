//! Top-level alert assembly
//!
//! Stitches the header transmission, attention tone, narration, and
//! end-of-message into one sample stream, then hands it to the
//! output writer:
//!
//! ```txt
//! silence(1 s)
//! ‖ header transmission            (×3 bursts, per mode)
//! ‖ settling silence               (150 ms Trilithic, else 500 ms)
//! ‖ attention tone ‖ silence(1 s)  (when enabled)
//! ‖ narration ‖ silence(1 s)       (when audio was loaded)
//! ‖ end-of-message                 (×3 bursts, per mode)
//! ‖ silence(1 s)
//! ```

use log::debug;

use crate::error::SameErr;
use crate::output::write_alert;
use crate::synth::{attention_tone, eom_transmission, transmission, EncoderMode};
use crate::transcode::load_narration;
use crate::waveform::silence;

/// Options for [`generate_eas_alert`]
///
/// The defaults produce a standard-framing alert with the two-tone
/// attention signal, no narration, and a `"output.wav"` output file.
///
/// ```
/// use samewave::{AlertOptions, EncoderMode};
///
/// let mut options = AlertOptions::new();
/// options
///     .with_mode(EncoderMode::Nws)
///     .with_attention_tone(true)
///     .with_output_file("warning.wav");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertOptions {
    mode: EncoderMode,
    attention_tone: bool,
    audio_path: Option<String>,
    output_file: String,
    transcoder: String,
}

impl AlertOptions {
    /// Options with all defaults
    pub fn new() -> Self {
        Self {
            mode: EncoderMode::Default,
            attention_tone: true,
            audio_path: None,
            output_file: "output.wav".to_owned(),
            transcoder: "ffmpeg".to_owned(),
        }
    }

    /// Hardware-encoder framing mode
    pub fn with_mode(&mut self, mode: EncoderMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Sound the attention tone between the header and the narration
    pub fn with_attention_tone(&mut self, enabled: bool) -> &mut Self {
        self.attention_tone = enabled;
        self
    }

    /// Narration audio file, in any format the transcoder accepts
    pub fn with_audio_path<S: Into<String>>(&mut self, path: S) -> &mut Self {
        self.audio_path = Some(path.into());
        self
    }

    /// Output file name; an `.mp3` extension selects MP3 encoding
    pub fn with_output_file<S: Into<String>>(&mut self, path: S) -> &mut Self {
        self.output_file = path.into();
        self
    }

    /// External transcoder executable
    pub fn with_transcoder<S: Into<String>>(&mut self, path: S) -> &mut Self {
        self.transcoder = path.into();
        self
    }
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a complete EAS alert waveform and write it to disk
///
/// `message` is the ZCZC-prefixed SAME header to transmit. The
/// finished float sample stream is returned; writing the output file
/// is a side effect. A missing narration file is the one fatal
/// error; transcoder failures are logged and leave the alert without
/// narration (or, for MP3 output, without an output file).
pub fn generate_eas_alert(message: &str, options: &AlertOptions) -> Result<Vec<f32>, SameErr> {
    let narration = match options.audio_path.as_deref() {
        Some(path) if !path.trim().is_empty() => load_narration(&options.transcoder, path)?,
        _ => Vec::new(),
    };

    let samples = assemble(message, options, &narration);
    debug!(
        "assembled {} mode alert: {} samples",
        options.mode,
        samples.len()
    );

    write_alert(&options.transcoder, &options.output_file, &samples)?;
    Ok(samples)
}

// Stitch the alert segments in transmission order.
fn assemble(message: &str, options: &AlertOptions, narration: &[f32]) -> Vec<f32> {
    let mode = options.mode;

    let mut out = silence(1000.0);
    out.extend_from_slice(&transmission(mode, message.as_bytes()));
    out.extend_from_slice(&silence(mode.post_header_silence_ms()));

    if options.attention_tone {
        out.extend_from_slice(&attention_tone(mode));
        out.extend_from_slice(&silence(1000.0));
    }
    if !narration.is_empty() {
        out.extend_from_slice(narration);
        out.extend_from_slice(&silence(1000.0));
    }

    out.extend_from_slice(&eom_transmission(mode));
    out.extend_from_slice(&silence(1000.0));
    out
}
