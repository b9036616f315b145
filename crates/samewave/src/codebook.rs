//! # SAME Code Dictionaries
//!
//! Four read-only tables drive header resolution:
//!
//! | Table    | Key                 | Value                                |
//! |----------|---------------------|--------------------------------------|
//! | `ORGS`   | originator, 3 chars | phrase ending with a trailing space  |
//! | `ORGS2`  | originator, 3 chars | plain organization name              |
//! | `EVENTS` | event, 3 chars      | event name                           |
//! | `SAME`   | county, 5 digits    | `"County, ST"` or bare state name    |
//! | `SUBDIV` | subdivision digit   | modifier phrase (`"All"`, …)         |
//!
//! The header decoder renders `ORGS` phrases directly into its alert
//! sentence, which is why they carry a trailing space; the standalone
//! originator translator answers with the `ORGS2` names.
//!
//! Tables are bundled into a [`CodeBook`], which callers inject into
//! the decoder and translators. [`CodeBook::builtin`] uses the static
//! tables below; [`CodeBook::from_json_str`] loads the full national
//! artifact.
//!
//! SAME event codes for the United States are given in
//! [NWSI 10-1712](https://www.nws.noaa.gov/directives/sym/pd01017012curr.pdf).

use std::collections::HashMap;

use phf::phf_map;
use serde::Deserialize;

/// Originator phrases used by the header decoder
///
/// Phrases end with a trailing space so the decoder can append
/// "a {event}" directly.
static ORGS: phf::Map<&'static str, &'static str> = phf_map! {
    "PEP" => "The Primary Entry Point System has issued ",
    "CIV" => "The Civil Authorities have issued ",
    "WXR" => "The National Weather Service has issued ",
    "EAS" => "The Broadcast station or cable system has issued ",
    "EAN" => "The Emergency Action Notification Network has issued ",
};

/// Plain originator names used by the standalone translator
static ORGS_ALT: phf::Map<&'static str, &'static str> = phf_map! {
    "PEP" => "Primary Entry Point System",
    "CIV" => "Civil Authorities",
    "WXR" => "National Weather Service",
    "EAS" => "Broadcast station or cable system",
    "EAN" => "Emergency Action Notification Network",
};

static EVENTS: phf::Map<&'static str, &'static str> = phf_map! {
    // national activations
    "EAN" => "National Emergency Message",
    "NIC" => "National Information Center",

    // tests
    "DMO" => "Practice/Demo Warning",
    "NAT" => "National Audible Test",
    "NPT" => "National Periodic Test",
    "NST" => "National Silent Test",
    "RMT" => "Required Monthly Test",
    "RWT" => "Required Weekly Test",

    // civil authority codes
    "ADR" => "Administrative Message",
    "AVA" => "Avalanche Watch",
    "AVW" => "Avalanche Warning",
    "BLU" => "Blue Alert",
    "CAE" => "Child Abduction Emergency",
    "CDW" => "Civil Danger Warning",
    "CEM" => "Civil Emergency Message",
    "EQW" => "Earthquake Warning",
    "EVI" => "Evacuation Immediate",
    "FRW" => "Fire Warning",
    "HMW" => "Hazardous Materials Warning",
    "LAE" => "Local Area Emergency",
    "LEW" => "Law Enforcement Warning",
    "NMN" => "Network Notification Message",
    "NUW" => "Nuclear Power Plant Warning",
    "RHW" => "Radiological Hazard Warning",
    "SPW" => "Shelter In-Place Warning",
    "TOE" => "911 Telephone Outage Emergency",
    "VOW" => "Volcano Warning",

    // weather codes
    "BZW" => "Blizzard Warning",
    "CFA" => "Coastal Flood Watch",
    "CFW" => "Coastal Flood Warning",
    "DSW" => "Dust Storm Warning",
    "EWW" => "Extreme Wind Warning",
    "FFA" => "Flash Flood Watch",
    "FFS" => "Flash Flood Statement",
    "FFW" => "Flash Flood Warning",
    "FLA" => "Flood Watch",
    "FLS" => "Flood Statement",
    "FLW" => "Flood Warning",
    "FSW" => "Flash Freeze Warning",
    "FZW" => "Freeze Warning",
    "HLS" => "Hurricane Local Statement",
    "HUA" => "Hurricane Watch",
    "HUW" => "Hurricane Warning",
    "HWA" => "High Wind Watch",
    "HWW" => "High Wind Warning",
    "SMW" => "Special Marine Warning",
    "SPS" => "Special Weather Statement",
    "SQW" => "Snow Squall Warning",
    "SSA" => "Storm Surge Watch",
    "SSW" => "Storm Surge Warning",
    "SVA" => "Severe Thunderstorm Watch",
    "SVR" => "Severe Thunderstorm Warning",
    "SVS" => "Severe Weather Statement",
    "TOA" => "Tornado Watch",
    "TOR" => "Tornado Warning",
    "TRA" => "Tropical Storm Watch",
    "TRW" => "Tropical Storm Warning",
    "TSA" => "Tsunami Watch",
    "TSW" => "Tsunami Warning",
    "WSA" => "Winter Storm Watch",
    "WSW" => "Winter Storm Warning",
};

/// County-part subdivision digits, per the `PSSCCC` location format
static SUBDIVISIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "All",
    "1" => "Northwestern",
    "2" => "Northern",
    "3" => "Northeastern",
    "4" => "Western",
    "5" => "Central",
    "6" => "Eastern",
    "7" => "Southwestern",
    "8" => "Southern",
    "9" => "Southeastern",
};

/// Built-in county table
///
/// Carries every state-wide marker (`SS000`, bare state name) plus a
/// working set of county entries. The full national table ships as a
/// JSON artifact; see [`CodeBook::from_json_str`].
static COUNTIES: phf::Map<&'static str, &'static str> = phf_map! {
    // state-wide markers
    "01000" => "Alabama",
    "02000" => "Alaska",
    "04000" => "Arizona",
    "05000" => "Arkansas",
    "06000" => "California",
    "08000" => "Colorado",
    "09000" => "Connecticut",
    "10000" => "Delaware",
    "11000" => "District of Columbia",
    "12000" => "Florida",
    "13000" => "Georgia",
    "15000" => "Hawaii",
    "16000" => "Idaho",
    "17000" => "Illinois",
    "18000" => "Indiana",
    "19000" => "Iowa",
    "20000" => "Kansas",
    "21000" => "Kentucky",
    "22000" => "Louisiana",
    "23000" => "Maine",
    "24000" => "Maryland",
    "25000" => "Massachusetts",
    "26000" => "Michigan",
    "27000" => "Minnesota",
    "28000" => "Mississippi",
    "29000" => "Missouri",
    "30000" => "Montana",
    "31000" => "Nebraska",
    "32000" => "Nevada",
    "33000" => "New Hampshire",
    "34000" => "New Jersey",
    "35000" => "New Mexico",
    "36000" => "New York",
    "37000" => "North Carolina",
    "38000" => "North Dakota",
    "39000" => "Ohio",
    "40000" => "Oklahoma",
    "41000" => "Oregon",
    "42000" => "Pennsylvania",
    "44000" => "Rhode Island",
    "45000" => "South Carolina",
    "46000" => "South Dakota",
    "47000" => "Tennessee",
    "48000" => "Texas",
    "49000" => "Utah",
    "50000" => "Vermont",
    "51000" => "Virginia",
    "53000" => "Washington",
    "54000" => "West Virginia",
    "55000" => "Wisconsin",
    "56000" => "Wyoming",
    "60000" => "American Samoa",
    "66000" => "Guam",
    "69000" => "Northern Mariana Islands",
    "72000" => "Puerto Rico",
    "78000" => "U.S. Virgin Islands",

    // county entries
    "04013" => "Maricopa, AZ",
    "06001" => "Alameda, CA",
    "06013" => "Contra Costa, CA",
    "06037" => "Los Angeles, CA",
    "06075" => "San Francisco, CA",
    "06081" => "San Mateo, CA",
    "06085" => "Santa Clara, CA",
    "06087" => "Santa Cruz, CA",
    "12057" => "Hillsborough, FL",
    "12081" => "Manatee, FL",
    "12101" => "Pasco, FL",
    "12103" => "Pinellas, FL",
    "12115" => "Sarasota, FL",
    "17031" => "Cook, IL",
    "20045" => "Douglas, KS",
    "20091" => "Johnson, KS",
    "20173" => "Sedgwick, KS",
    "27053" => "Hennepin, MN",
    "27123" => "Ramsey, MN",
    "27133" => "Rock, MN",
    "29095" => "Jackson, MO",
    "30013" => "Cascade, MT",
    "30111" => "Yellowstone, MT",
    "31055" => "Douglas, NE",
    "36061" => "New York, NY",
    "40109" => "Oklahoma, OK",
    "40143" => "Tulsa, OK",
    "46099" => "Minnehaha, SD",
    "48201" => "Harris, TX",
    "53033" => "King, WA",
};

/// The SAME code dictionaries, injectable wherever codes resolve
///
/// A `CodeBook` is process-wide immutable state: build one at startup
/// and share it by reference. Lookups answer `None` for unknown
/// codes; the decoder and translators turn absence into their
/// respective errors.
#[derive(Clone, Debug, Deserialize)]
pub struct CodeBook {
    /// Originator phrases for the header decoder
    #[serde(rename = "ORGS")]
    orgs: HashMap<String, String>,

    /// Alternative originator names for the standalone translator
    #[serde(rename = "ORGS2", default)]
    orgs_alt: HashMap<String, String>,

    /// Event names
    #[serde(rename = "EVENTS")]
    events: HashMap<String, String>,

    /// County names, keyed by 5-digit code
    #[serde(rename = "SAME")]
    counties: HashMap<String, String>,

    /// Subdivision phrases, keyed by single digit
    #[serde(rename = "SUBDIV", default)]
    subdivisions: HashMap<String, String>,
}

impl CodeBook {
    /// Code book backed by the built-in tables
    pub fn builtin() -> Self {
        Self {
            orgs: owned(&ORGS),
            orgs_alt: owned(&ORGS_ALT),
            events: owned(&EVENTS),
            counties: owned(&COUNTIES),
            subdivisions: owned(&SUBDIVISIONS),
        }
    }

    /// Load a code book from the JSON dictionary artifact
    ///
    /// The artifact is a single JSON document with `ORGS`, `ORGS2`,
    /// `EVENTS`, `SAME`, and `SUBDIV` string maps. `ORGS2` and
    /// `SUBDIV` may be absent: originator translation then falls back
    /// to `ORGS`, and subdivision `"0"` defaults to `"All"`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Originator phrase for the header decoder, like
    /// `"The Civil Authorities have issued "`
    pub fn organization(&self, code: &str) -> Option<&str> {
        self.orgs.get(code).map(String::as_str)
    }

    /// Plain originator name, like `"Civil Authorities"`
    ///
    /// Answers from `ORGS2` when that table is present, from `ORGS`
    /// otherwise.
    pub fn organization_name(&self, code: &str) -> Option<&str> {
        if self.orgs_alt.is_empty() {
            self.organization(code)
        } else {
            self.orgs_alt.get(code).map(String::as_str)
        }
    }

    /// Event name, like `"Tornado Warning"`
    pub fn event(&self, code: &str) -> Option<&str> {
        self.events.get(code).map(String::as_str)
    }

    /// County entry for a 5-digit code, like `"Sedgwick, KS"`
    pub fn county(&self, code: &str) -> Option<&str> {
        self.counties.get(code).map(String::as_str)
    }

    /// Subdivision phrase for a single digit, like `"Northern"`
    pub fn subdivision(&self, digit: &str) -> Option<&str> {
        self.subdivisions.get(digit).map(String::as_str)
    }
}

impl Default for CodeBook {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(table: &phf::Map<&'static str, &'static str>) -> HashMap<String, String> {
    table
        .entries()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}
