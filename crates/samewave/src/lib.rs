//! # samewave: SAME/EAS Header Codec and Alert Generator
//!
//! This crate encodes and decodes
//! [Specific Area Message Encoding](https://en.wikipedia.org/wiki/Specific_Area_Message_Encoding)
//! (SAME) data for the United States
//! [Emergency Alert System](https://en.wikipedia.org/wiki/Emergency_Alert_System)
//! (EAS). It performs two reciprocal operations:
//!
//! * **decode** a textual SAME header into a structured,
//!   human-readable alert description; and
//! * **encode** a SAME header, with optional spoken audio, into the
//!   PCM waveform an EAS receiver expects: AFSK data bursts,
//!   attention tone, narration, and end-of-message.
//!
//! ## Disclaimer
//!
//! This crate is dual-licensed MIT and Apache 2.0. Read these
//! licenses carefully as they may affect your rights.
//!
//! This crate has not been certified as an emergency alert encoder.
//! The author **strongly discourages** its use in any safety-critical
//! application. Broadcasting EAS attention tones or alert audio
//! without authorization is illegal in the United States.
//!
//! ## Decoding
//!
//! An example header, as received "off the wire" in ASCII format:
//!
//! ```txt
//! ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-
//! ```
//!
//! Code resolution runs against an injected [`CodeBook`]:
//!
//! ```
//! use samewave::{decode_same, CodeBook};
//!
//! let book = CodeBook::builtin();
//! let alert = decode_same(&book, "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-")
//!     .expect("fail to parse");
//!
//! assert_eq!(alert.organization, "The Civil Authorities have issued ");
//! assert_eq!(alert.event, "Administrative Message");
//! assert_eq!(alert.locations, "Sedgwick, KS");
//! assert_eq!(alert.sender, "ERN/LB");
//! ```
//!
//! SAME headers carry no year: the issue time resolves against the
//! process's current calendar year. Single codes translate through
//! [`translate_fips`], [`translate_originator`], and
//! [`translate_event`].
//!
//! ## Encoding
//!
//! [`generate_eas_alert`] synthesizes the complete 24 kHz mono
//! waveform and writes it to disk:
//!
//! ```no_run
//! use samewave::{generate_eas_alert, AlertOptions, EncoderMode};
//!
//! let mut options = AlertOptions::new();
//! options
//!     .with_mode(EncoderMode::Nws)
//!     .with_audio_path("narration.wav")
//!     .with_output_file("alert.wav");
//!
//! let samples = generate_eas_alert(
//!     "ZCZC-WXR-RWT-020173+0030-3441707-KEAX/NWS-",
//!     &options,
//! )?;
//! println!("{} samples written", samples.len());
//! # Ok::<(), samewave::SameErr>(())
//! ```
//!
//! The five [`EncoderMode`]s reproduce the framing quirks of common
//! hardware encoders. Narration input and MP3 output shell out to an
//! ffmpeg-compatible transcoder; see [`AlertOptions::with_transcoder`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod alert;
mod codebook;
mod codes;
mod decoder;
mod error;
mod fips;
mod output;
mod synth;
mod transcode;
mod waveform;

pub use alert::{generate_eas_alert, AlertOptions};
pub use codebook::CodeBook;
pub use codes::{translate_event, translate_originator};
pub use decoder::{decode_same, decode_same_in_year, AlertTiming, DecodedAlert};
pub use error::SameErr;
pub use fips::{translate_fips, LocationRecord};
pub use synth::EncoderMode;
pub use waveform::{BAUD_HZ, FSK_MARK_HZ, FSK_SPACE_HZ, PREAMBLE, SAMPLE_RATE};
