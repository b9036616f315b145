//! PCM conversion and WAV output

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use crate::error::SameErr;
use crate::transcode::export_mp3;
use crate::waveform::{BIT_DEPTH, SAMPLE_RATE};

/// Write the finished alert to `output`
///
/// An `.mp3` extension routes through the external transcoder;
/// everything else is written directly as WAV.
pub(crate) fn write_alert(transcoder: &str, output: &str, samples: &[f32]) -> Result<(), SameErr> {
    let is_mp3 = Path::new(output)
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("mp3"));

    if is_mp3 {
        export_mp3(transcoder, output, samples)
    } else {
        write_wav(Path::new(output), samples)?;
        debug!("wrote WAV alert to \"{}\"", output);
        Ok(())
    }
}

/// Write samples as RIFF/WAVE, PCM s16le, 24 kHz, mono
pub(crate) fn write_wav(path: &Path, samples: &[f32]) -> Result<(), SameErr> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BIT_DEPTH,
        sample_format: SampleFormat::Int,
    };

    let write = |path: &Path| -> Result<(), hound::Error> {
        let mut writer = WavWriter::create(path, spec)?;
        for &sample in samples {
            writer.write_sample(to_i16(sample))?;
        }
        writer.finalize()
    };

    write(path).map_err(|err| SameErr::OutputWrite(err.to_string()))
}

/// Saturating float-to-s16 conversion
pub(crate) fn to_i16(sample: f32) -> i16 {
    (sample * 32767.0).round().clamp(-32768.0, 32767.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_to_i16_clamps() {
        assert_eq!(to_i16(0.0), 0);
        assert_eq!(to_i16(1.0), 32767);
        assert_eq!(to_i16(-1.0), -32767);
        assert_eq!(to_i16(2.0), 32767);
        assert_eq!(to_i16(-2.0), -32768);
        assert_eq!(to_i16(0.5), 16384);
    }

    #[test]
    fn test_write_wav_format() {
        let scratch = TempDir::new().expect("no tempdir");
        let path = scratch.path().join("alert.wav");

        write_wav(&path, &[0.0, 0.25, -0.25, 1.0]).expect("write failed");

        let reader = hound::WavReader::open(&path).expect("open failed");
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn test_write_alert_selects_wav() {
        let scratch = TempDir::new().expect("no tempdir");
        let path = scratch.path().join("alert.wav");
        let path = path.to_str().unwrap();

        write_alert("/nonexistent/transcoder", path, &[0.0; 64]).expect("write failed");
        assert!(Path::new(path).is_file());
    }
}
