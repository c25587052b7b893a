//! Per-country address profiles.
//!
//! Postal templates use `#` for a digit and `@` for an uppercase letter.
//! Output templates use the named placeholders understood by
//! [`crate::address::Placeholder`].

/// Static data driving address generation for one country.
#[derive(Debug)]
pub(crate) struct CountryProfile {
    pub(crate) code: &'static str,
    pub(crate) street_types: &'static [&'static str],
    pub(crate) cities: &'static [&'static str],
    pub(crate) states: &'static [&'static str],
    pub(crate) postal_template: &'static str,
    pub(crate) format_template: &'static str,
}

/// Street names shared by every country.
pub(crate) const STREET_NAMES: &[&str] = &[
    "Main", "Broadway", "Market", "Park", "High", "Church", "Elm", "Oak", "Cedar", "Pine",
    "Maple", "Victoria", "Station", "Mill", "Hill",
];

/// Country used when the caller does not name one.
pub(crate) const DEFAULT_ADDRESS_COUNTRY: &str = "US";

/// Every supported address profile.
pub(crate) static COUNTRY_PROFILES: &[CountryProfile] = &[
    CountryProfile {
        code: "US",
        street_types: &["St", "Ave", "Rd", "Blvd", "Ln"],
        cities: &["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"],
        states: &["NY", "CA", "IL", "TX", "AZ"],
        postal_template: "#####",
        format_template: "{streetNumber} {streetName} {streetType}, {city}, {state} {postalCode}",
    },
    CountryProfile {
        code: "UK",
        street_types: &["Street", "Road", "Lane", "Avenue", "Close"],
        cities: &["London", "Manchester", "Birmingham", "Glasgow", "Edinburgh"],
        states: &["England", "Scotland", "Wales", "Northern Ireland"],
        postal_template: "@@## #@@",
        format_template: "{streetNumber} {streetName} {streetType}, {city}, {postalCode}",
    },
    CountryProfile {
        code: "NG",
        street_types: &["Street", "Road", "Avenue", "Close", "Lane"],
        cities: &["Lagos", "Abuja", "Kano", "Ibadan", "Port Harcourt"],
        states: &["Lagos", "FCT", "Kano", "Oyo", "Rivers"],
        postal_template: "######",
        format_template: "{streetNumber} {streetName} {streetType}, {city}, {state}",
    },
    CountryProfile {
        code: "CA",
        street_types: &["St", "Ave", "Rd", "Blvd", "Dr"],
        cities: &["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"],
        states: &["ON", "BC", "QC", "AB", "MB"],
        postal_template: "@#@ #@#",
        format_template: "{streetNumber} {streetName} {streetType}, {city}, {state} {postalCode}",
    },
    CountryProfile {
        code: "AU",
        street_types: &["St", "Rd", "Ave", "Pde", "Tce"],
        cities: &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"],
        states: &["NSW", "VIC", "QLD", "WA", "SA"],
        postal_template: "####",
        format_template: "{streetNumber} {streetName} {streetType}, {city} {state} {postalCode}",
    },
];
