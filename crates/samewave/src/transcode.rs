//! External audio-transcoder collaborator
//!
//! Narration input and MP3 output both shell out to an
//! ffmpeg-compatible binary. Scratch files live in a per-call
//! temporary directory so concurrent generations never collide, and
//! the directory is removed on every exit path when it drops.

use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, error};
use tempfile::TempDir;

use crate::error::SameErr;
use crate::output::write_wav;
use crate::waveform::SAMPLE_RATE;

/// Load a narration file as 24 kHz mono float samples
///
/// The transcoder downmixes and resamples into a scratch WAV, which
/// is then read back and scaled to `f32`. A missing input file is
/// fatal; any transcoder failure is a logged diagnostic and yields an
/// empty buffer so alert assembly can proceed without narration.
pub(crate) fn load_narration(transcoder: &str, input: &str) -> Result<Vec<f32>, SameErr> {
    if !Path::new(input).is_file() {
        return Err(SameErr::AudioFileNotFound(input.to_owned()));
    }

    let scratch = match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => {
            error!("unable to create scratch directory: {}", err);
            return Ok(Vec::new());
        }
    };
    let wav_path = scratch.path().join("narration.wav");

    if !run_transcoder(
        transcoder,
        &[
            "-i".as_ref(),
            input.as_ref(),
            "-ar".as_ref(),
            SAMPLE_RATE.to_string().as_ref(),
            "-ac".as_ref(),
            "1".as_ref(),
            "-acodec".as_ref(),
            "pcm_s16le".as_ref(),
            wav_path.as_os_str(),
        ],
    ) {
        return Ok(Vec::new());
    }

    match read_wav(&wav_path) {
        Ok(samples) => {
            debug!("loaded {} narration samples from \"{}\"", samples.len(), input);
            Ok(samples)
        }
        Err(err) => {
            error!("unable to read transcoded narration: {}", err);
            Ok(Vec::new())
        }
    }
}

/// Encode `samples` to MP3 through a scratch WAV
///
/// MPEG-1 Layer III, CBR 128 kbps. Encoder failure is a logged
/// diagnostic, not an error: the caller still gets its sample
/// buffer even when no file could be written.
pub(crate) fn export_mp3(transcoder: &str, output: &str, samples: &[f32]) -> Result<(), SameErr> {
    let scratch = TempDir::new().map_err(|err| SameErr::OutputWrite(err.to_string()))?;
    let wav_path = scratch.path().join("export.wav");
    write_wav(&wav_path, samples)?;

    if run_transcoder(
        transcoder,
        &[
            "-i".as_ref(),
            wav_path.as_os_str(),
            "-codec:a".as_ref(),
            "libmp3lame".as_ref(),
            "-b:a".as_ref(),
            "128k".as_ref(),
            output.as_ref(),
        ],
    ) {
        debug!("wrote MP3 alert to \"{}\"", output);
    }
    Ok(())
}

// Launch the transcoder and wait for it. False on any failure, with
// the diagnostic already logged.
fn run_transcoder(transcoder: &str, args: &[&std::ffi::OsStr]) -> bool {
    let status = Command::new(transcoder)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(code) if code.success() => true,
        Ok(code) => {
            error!(
                "transcoder \"{}\" exited abnormally with status {}",
                transcoder,
                code.code().unwrap_or(1)
            );
            false
        }
        Err(err) => {
            error!("unable to launch transcoder \"{}\": {}", transcoder, err);
            false
        }
    }
}

fn read_wav(path: &Path) -> Result<Vec<f32>, hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    reader
        .samples::<i16>()
        .map(|sample| sample.map(|v| v as f32 / 32768.0))
        .collect()
}
