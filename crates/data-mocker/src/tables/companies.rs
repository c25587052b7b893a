//! Company name tables keyed by continent, country and industry.
//!
//! Lookups that miss fall back to the global rows.

use crate::company::{Continent, Industry};

pub(crate) static CONTINENT_COMPANIES: &[(Continent, &[&str])] = &[
    (
        Continent::Africa,
        &["Safaricom", "Dangote Group", "MTN Group", "Shoprite", "Ecobank"],
    ),
    (
        Continent::America,
        &["Apple", "Microsoft", "Google", "Amazon", "Tesla"],
    ),
    (
        Continent::Europe,
        &["Siemens", "Volkswagen", "Nestle", "Shell", "Unilever"],
    ),
    (
        Continent::Asia,
        &["Samsung", "Toyota", "Alibaba", "Huawei", "Sony"],
    ),
    (
        Continent::Australia,
        &["BHP", "Woolworths", "Telstra", "Qantas", "Commonwealth Bank"],
    ),
    (
        Continent::Global,
        &["Coca-Cola", "McDonald's", "Nike", "Disney", "IBM"],
    ),
];

pub(crate) static COUNTRY_COMPANIES: &[(&str, &[&str])] = &[
    ("US", &["Apple", "Google", "Amazon", "Tesla", "Walmart"]),
    ("UK", &["BP", "HSBC", "Tesco", "Rolls-Royce", "Barclays"]),
    (
        "NG",
        &["Dangote Group", "MTN Nigeria", "Zenith Bank", "Glo", "First Bank"],
    ),
    ("JP", &["Toyota", "Sony", "Honda", "Nintendo", "Panasonic"]),
    ("DE", &["SAP", "Siemens", "BMW", "Allianz", "Bosch"]),
];

pub(crate) static INDUSTRY_PREFIXES: &[(Industry, &[&str])] = &[
    (Industry::Tech, &["Tech", "Nex", "Cyber", "Inno", "Data"]),
    (
        Industry::Retail,
        &["Shop", "Market", "Store", "Retail", "Trade"],
    ),
    (
        Industry::Manufacturing,
        &["Indust", "Manu", "Forge", "Build", "Works"],
    ),
    (
        Industry::Finance,
        &["Bank", "Fin", "Invest", "Capital", "Trust"],
    ),
];

/// Prefixes used when an industry has no dedicated row.
pub(crate) const GLOBAL_PREFIXES: &[&str] = &["Global", "Prime", "Uni", "Omni", "Pan"];

/// Corporate suffixes.
pub(crate) const CORPORATE_SUFFIXES: &[&str] = &[
    "Inc.", "Ltd", "LLC", "GmbH", "Co.", "Corp", "Group", "Solutions",
];

/// Generic tokens glued onto synthetic company stems.
pub(crate) const GENERIC_TERMS: &[&str] = &["ify", "tron", "ex", "ly", "on", "is", "um", "er"];
