//! SAME location (FIPS) code translation
//!
//! Location codes are six-digit strings of the form `PSSCCC`:
//!
//! - `P`: part of county, or zero for the entire county
//! - `SS`: FIPS state code
//! - `CCC`: FIPS county code, or `000` for the entire state

use lazy_static::lazy_static;
use regex::Regex;

use crate::codebook::CodeBook;
use crate::error::SameErr;

/// A resolved SAME location code
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocationRecord {
    /// Subdivision phrase, like `"All"` or `"Northern"`
    pub subdivision: String,
    /// County name, or the state name for state-wide markers
    pub county: String,
    /// Two-letter state; equals `county` for state-wide markers
    pub region: String,
    /// Presentation text, like `"All Cascade, MT"`
    pub formatted: String,
}

/// Resolve one 6-digit SAME location code
///
/// The leading digit selects the county subdivision; the remaining
/// five digits select the county. A county part of `000` marks the
/// entire state:
///
/// ```
/// use samewave::{translate_fips, CodeBook};
///
/// let book = CodeBook::builtin();
/// let record = translate_fips(&book, "030013").unwrap();
/// assert_eq!(record.formatted, "All Cascade, MT");
///
/// let record = translate_fips(&book, "020000").unwrap();
/// assert_eq!(record.formatted, "All of Kansas");
/// ```
pub fn translate_fips(book: &CodeBook, data: &str) -> Result<LocationRecord, SameErr> {
    lazy_static! {
        static ref FIPS_RE: Regex = Regex::new(r"^[0-9]{6}$").expect("bad FIPS regexp");
    }

    if data.is_empty() {
        return Err(SameErr::NoData);
    }
    if !FIPS_RE.is_match(data) {
        if data.chars().count() != 6 {
            return Err(SameErr::FipsInvalid(data.to_owned()));
        }
        return Err(SameErr::InvalidCharacters);
    }

    let (part, loc) = data.split_at(1);
    let entry = book
        .county(loc)
        .ok_or_else(|| SameErr::FipsInvalid(data.to_owned()))?;

    // subdivision "0" may be absent from the table
    let subdivision = if part == "0" {
        book.subdivision("0").unwrap_or("All")
    } else {
        book.subdivision(part)
            .ok_or_else(|| SameErr::SubdivisionInvalid(part.to_owned()))?
    };

    let (county, region) = match entry.split_once(',') {
        Some((county, region)) => (county.trim(), region.trim()),
        None => (entry.trim(), "none"),
    };

    if loc.ends_with("000") {
        Ok(LocationRecord {
            subdivision: subdivision.to_owned(),
            county: county.to_owned(),
            region: county.to_owned(),
            formatted: format!("{} of {}", subdivision, county),
        })
    } else {
        Ok(LocationRecord {
            subdivision: subdivision.to_owned(),
            county: county.to_owned(),
            region: region.to_owned(),
            formatted: format!("{} {}, {}", subdivision, county, region),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_county() {
        let book = CodeBook::builtin();

        let record = translate_fips(&book, "030013").expect("bad location");
        assert_eq!(record.subdivision, "All");
        assert_eq!(record.county, "Cascade");
        assert_eq!(record.region, "MT");
        assert_eq!(record.formatted, "All Cascade, MT");

        let record = translate_fips(&book, "220173").expect("bad location");
        assert_eq!(record.subdivision, "Northern");
        assert_eq!(record.formatted, "Northern Sedgwick, KS");
    }

    #[test]
    fn test_translate_statewide() {
        let book = CodeBook::builtin();

        let record = translate_fips(&book, "020000").expect("bad location");
        assert_eq!(record.county, "Kansas");
        assert_eq!(record.region, "Kansas");
        assert_eq!(record.formatted, "All of Kansas");

        let record = translate_fips(&book, "706000").expect("bad location");
        assert_eq!(record.formatted, "Southwestern of California");
    }

    #[test]
    fn test_validation_order() {
        let book = CodeBook::builtin();

        assert_eq!(translate_fips(&book, ""), Err(SameErr::NoData));
        assert_eq!(
            translate_fips(&book, "12345"),
            Err(SameErr::FipsInvalid("12345".to_owned()))
        );
        assert_eq!(
            translate_fips(&book, "A30013"),
            Err(SameErr::InvalidCharacters)
        );
        assert_eq!(
            translate_fips(&book, "099999"),
            Err(SameErr::FipsInvalid("099999".to_owned()))
        );
    }

    #[test]
    fn test_missing_subdivision() {
        // a book whose SUBDIV table is empty still resolves part "0"
        let book = CodeBook::from_json_str(
            r#"{
                "ORGS": {},
                "EVENTS": {},
                "SAME": {"20173": "Sedgwick, KS"}
            }"#,
        )
        .expect("artifact should parse");

        let record = translate_fips(&book, "020173").expect("bad location");
        assert_eq!(record.subdivision, "All");
        assert_eq!(
            translate_fips(&book, "120173"),
            Err(SameErr::SubdivisionInvalid("1".to_owned()))
        );
    }
}
