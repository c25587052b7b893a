//! Per-country telephone numbering profiles.
//!
//! Display templates use `X` for a digit; every other character is a
//! literal separator.

/// Static numbering data for one country.
#[derive(Debug)]
pub(crate) struct PhoneProfile {
    pub(crate) code: &'static str,
    pub(crate) dial_prefix: &'static str,
    pub(crate) number_length: usize,
    pub(crate) mobile_prefixes: &'static [&'static str],
    pub(crate) landline_prefixes: &'static [&'static str],
    pub(crate) display_format: &'static str,
}

/// Country used when the caller does not name one.
pub(crate) const DEFAULT_PHONE_COUNTRY: &str = "NG";

/// Countries whose toll-free and premium numbers use the North American plan.
pub(crate) const NORTH_AMERICAN_PLAN: &[&str] = &["US", "CA"];

/// Every supported phone profile.
pub(crate) static PHONE_PROFILES: &[PhoneProfile] = &[
    PhoneProfile {
        code: "US",
        dial_prefix: "+1",
        number_length: 10,
        mobile_prefixes: &["2", "3", "4", "5", "6", "7", "8", "9"],
        landline_prefixes: &["1"],
        display_format: "(XXX) XXX-XXXX",
    },
    PhoneProfile {
        code: "CA",
        dial_prefix: "+1",
        number_length: 10,
        mobile_prefixes: &["2", "3", "4", "5", "6", "7", "8", "9"],
        landline_prefixes: &["1"],
        display_format: "(XXX) XXX-XXXX",
    },
    PhoneProfile {
        code: "UK",
        dial_prefix: "+44",
        number_length: 10,
        mobile_prefixes: &["7"],
        landline_prefixes: &["1", "2", "3"],
        display_format: "XXXX XXX XXX",
    },
    PhoneProfile {
        code: "FR",
        dial_prefix: "+33",
        number_length: 9,
        mobile_prefixes: &["6", "7"],
        landline_prefixes: &["1", "2", "3", "4", "5"],
        display_format: "X XX XX XX XX",
    },
    PhoneProfile {
        code: "DE",
        dial_prefix: "+49",
        number_length: 10,
        mobile_prefixes: &["15", "16", "17"],
        landline_prefixes: &["2", "3", "4", "5", "6", "7", "8", "9"],
        display_format: "XXXX-XXXXXX",
    },
    PhoneProfile {
        code: "NG",
        dial_prefix: "+234",
        number_length: 10,
        mobile_prefixes: &["70", "80", "81", "90", "91"],
        landline_prefixes: &["1", "2", "7"],
        display_format: "XXX XXX XXXX",
    },
    PhoneProfile {
        code: "ZA",
        dial_prefix: "+27",
        number_length: 9,
        mobile_prefixes: &["6", "7", "8"],
        landline_prefixes: &["1", "2"],
        display_format: "XX XXX XXXX",
    },
    PhoneProfile {
        code: "IN",
        dial_prefix: "+91",
        number_length: 10,
        mobile_prefixes: &["7", "8", "9"],
        landline_prefixes: &["1", "2", "3", "4", "5"],
        display_format: "XXXXX-XXXXX",
    },
    PhoneProfile {
        code: "CN",
        dial_prefix: "+86",
        number_length: 11,
        mobile_prefixes: &["13", "15", "18"],
        landline_prefixes: &["10", "20", "21", "22", "23", "24"],
        display_format: "XXX-XXXX-XXXX",
    },
];
