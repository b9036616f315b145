//! Error taxonomy for decoding and alert generation

use thiserror::Error;

/// Errors produced by the decoder, the translators, and the alert
/// assembler
///
/// Variants which reject a specific code carry that code. Every
/// variant also exposes a stable lowercase key via
/// [`kind()`](SameErr::kind) so callers can substitute their own
/// localized message catalogs; the `Display` strings are the built-in
/// English texts.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SameErr {
    /// Input was empty
    #[error("no data was received")]
    NoData,

    /// Header does not split into enough fields
    #[error("invalid SAME header: too few fields")]
    InvalidSameHeader,

    /// Header does not begin with the `ZCZC` start marker
    #[error("invalid SAME header: ZCZC start marker not found")]
    ZczcNotFound,

    /// Header originator code is not in the originator table
    #[error("invalid originator code: {0}")]
    OrgCodeInvalid(String),

    /// Header event code is not in the event table
    #[error("invalid event code: {0}")]
    EventCodeInvalid(String),

    /// Location code is malformed or not in the county table
    #[error("invalid FIPS location code: {0}")]
    FipsInvalid(String),

    /// Issue time field is malformed or out of range
    #[error("invalid issue date/time")]
    DateTimeInvalid,

    /// Purge offset field is malformed
    #[error("invalid expiration time")]
    ExpireTimeInvalid,

    /// Originator code rejected by the standalone translator
    #[error("invalid originator: {0}")]
    OriginatorInvalid(String),

    /// Event code rejected by the standalone translator
    #[error("invalid event: {0}")]
    EventInvalid(String),

    /// Subdivision digit is not in the subdivision table
    #[error("invalid subdivision: {0}")]
    SubdivisionInvalid(String),

    /// Field contains characters outside its alphabet
    #[error("field contains invalid characters")]
    InvalidCharacters,

    /// Narration audio file does not exist
    #[error("audio file not found: {0}")]
    AudioFileNotFound(String),

    /// Output file could not be written
    #[error("unable to write output: {0}")]
    OutputWrite(String),
}

impl SameErr {
    /// Stable message-catalog key for this error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SameErr::NoData => "nodata",
            SameErr::InvalidSameHeader => "invalidsameheader",
            SameErr::ZczcNotFound => "zczcnotfound",
            SameErr::OrgCodeInvalid(_) => "orgcodeinvalid",
            SameErr::EventCodeInvalid(_) => "eventcodeinvalid",
            SameErr::FipsInvalid(_) => "fipsinvalid",
            SameErr::DateTimeInvalid => "datetimeinvalid",
            SameErr::ExpireTimeInvalid => "expiretimeinvalid",
            SameErr::OriginatorInvalid(_) => "originvalid",
            SameErr::EventInvalid(_) => "eventinvalid",
            SameErr::SubdivisionInvalid(_) => "subdivisioninvalid",
            SameErr::InvalidCharacters => "invalidcharacters",
            SameErr::AudioFileNotFound(_) => "audiofilenotfound",
            SameErr::OutputWrite(_) => "outputwrite",
        }
    }
}
