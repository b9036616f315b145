//! Originator and event code translators
//!
//! Both translators share one validation shape: a non-empty
//! three-letter code, uppercased, then looked up in its table.

use lazy_static::lazy_static;
use regex::Regex;

use crate::codebook::CodeBook;
use crate::error::SameErr;

/// Resolve a 3-letter originator code to its organization name
///
/// ```
/// use samewave::{translate_originator, CodeBook};
///
/// let book = CodeBook::builtin();
/// let org = translate_originator(&book, "wxr").unwrap();
/// assert_eq!(org, "National Weather Service");
/// ```
pub fn translate_originator(book: &CodeBook, data: &str) -> Result<String, SameErr> {
    let code = normalize(data, SameErr::OriginatorInvalid)?;
    book.organization_name(&code)
        .map(str::to_owned)
        .ok_or(SameErr::OriginatorInvalid(code))
}

/// Resolve a 3-letter event code to its event name
///
/// ```
/// use samewave::{translate_event, CodeBook};
///
/// let book = CodeBook::builtin();
/// let event = translate_event(&book, "TOR").unwrap();
/// assert_eq!(event, "Tornado Warning");
/// ```
pub fn translate_event(book: &CodeBook, data: &str) -> Result<String, SameErr> {
    let code = normalize(data, SameErr::EventInvalid)?;
    book.event(&code)
        .map(str::to_owned)
        .ok_or(SameErr::EventInvalid(code))
}

// Shared field-shape check; `invalid` is the caller's length-mismatch
// error constructor.
fn normalize(data: &str, invalid: fn(String) -> SameErr) -> Result<String, SameErr> {
    lazy_static! {
        static ref CODE_RE: Regex = Regex::new(r"^[A-Za-z]{3}$").expect("bad code regexp");
    }

    if data.is_empty() {
        return Err(SameErr::NoData);
    }
    if !CODE_RE.is_match(data) {
        if data.chars().count() != 3 {
            return Err(invalid(data.to_owned()));
        }
        return Err(SameErr::InvalidCharacters);
    }

    Ok(data.to_ascii_uppercase())
}
