//! Word pools for usernames, text, URLs and email addresses.

pub(crate) const ADJECTIVES: &[&str] = &[
    "Cool", "Smart", "Fast", "Brave", "Witty", "Mighty", "Fierce", "Bold", "Sly", "Energetic",
];

pub(crate) const NOUNS: &[&str] = &[
    "Tiger", "Eagle", "Shark", "Panther", "Wolf", "Dragon", "Falcon", "Cheetah", "Viper", "Hawk",
];

pub(crate) const LOREM_WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

pub(crate) const FOLDERS: &[&str] = &["documents", "pictures", "downloads", "music", "videos"];

pub(crate) const FILE_EXTENSIONS: &[&str] = &["txt", "pdf", "csv", "png", "json"];

/// Top-level domains for synthetic hosts.
pub(crate) const TOP_LEVEL_DOMAINS: &[&str] = &["com", "net", "org", "io", "co", "ai"];

/// Mail providers for personal addresses.
pub(crate) const PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "example.com",
];

/// Role mailboxes for business addresses.
pub(crate) const BUSINESS_PREFIXES: &[&str] = &["contact", "info", "sales", "support", "admin"];

/// Top-level domains for business addresses.
pub(crate) const BUSINESS_TLDS: &[&str] = &[
    "com", "org", "net", "co.uk", "ng", "ca", "de", "fr", "jp",
];

/// Country-specific business TLDs; any other code maps to `com`.
pub(crate) const COUNTRY_TLDS: &[(&str, &str)] = &[
    ("UK", "co.uk"),
    ("NG", "ng"),
    ("CA", "ca"),
    ("DE", "de"),
    ("FR", "fr"),
    ("JP", "jp"),
];

/// TLD used for country codes without a dedicated mapping.
pub(crate) const DEFAULT_TLD: &str = "com";
