//! Mocker configuration and its JSON document format.
//!
//! A configuration is a plain value with every field defaulted: an optional
//! seed plus the default country and region used by the address, phone and
//! name generators. It can be built in code or loaded from a versioned JSON
//! document:
//!
//! ```json
//! {
//!     "version": 1,
//!     "seed": 42,
//!     "addressCountry": "UK",
//!     "phoneCountry": "US",
//!     "nameRegion": "european"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::address::AddressGenerator;
use crate::error::{ConfigError, GenerationError};
use crate::name::Region;
use crate::phone::PhoneNumberGenerator;
use crate::random::Random;
use crate::tables::phones::DEFAULT_PHONE_COUNTRY;
use crate::tables::places::DEFAULT_ADDRESS_COUNTRY;

/// Current supported configuration version.
const SUPPORTED_VERSION: u32 = 1;

/// Settings applied when the built-in generators are constructed.
///
/// # Example
///
/// ```
/// use data_mocker::{MockerConfig, Region};
///
/// let config = MockerConfig::from_json(r#"{"version": 1, "addressCountry": "ng"}"#)
///     .expect("valid config");
/// assert_eq!(config.address_country(), "NG");
/// assert_eq!(config.phone_country(), "NG");
/// assert_eq!(config.name_region(), Region::Western);
/// assert_eq!(config.seed(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockerConfig {
    seed: Option<u64>,
    address_country: &'static str,
    phone_country: &'static str,
    name_region: Region,
}

impl Default for MockerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            address_country: DEFAULT_ADDRESS_COUNTRY,
            phone_country: DEFAULT_PHONE_COUNTRY,
            name_region: Region::Western,
        }
    }
}

impl MockerConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - The JSON is malformed or has unknown fields
    /// - The version is unsupported
    /// - A country code or region is not recognised
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawMockerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawMockerConfig) -> Result<Self, ConfigError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let mut config = Self {
            seed: raw.seed,
            ..Self::default()
        };
        if let Some(code) = raw.address_country {
            config = config.with_address_country(&code)?;
        }
        if let Some(code) = raw.phone_country {
            config = config.with_phone_country(&code)?;
        }
        if let Some(region) = raw.name_region {
            let parsed = region
                .parse::<Region>()
                .map_err(|e| invalid_setting("nameRegion", &e))?;
            config = config.with_name_region(parsed);
        }
        Ok(config)
    }

    /// Seeds every built-in generator from one reproducible source.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the default address country.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] for a code without an
    /// address profile.
    pub fn with_address_country(mut self, code: &str) -> Result<Self, ConfigError> {
        self.address_country = AddressGenerator::default()
            .with_country(code)
            .map_err(|e| invalid_setting("addressCountry", &e))?
            .country();
        Ok(self)
    }

    /// Sets the default phone country.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] for a code without a phone
    /// profile.
    pub fn with_phone_country(mut self, code: &str) -> Result<Self, ConfigError> {
        self.phone_country = PhoneNumberGenerator::default()
            .with_country(code)
            .map_err(|e| invalid_setting("phoneCountry", &e))?
            .country();
        Ok(self)
    }

    /// Sets the region used for full names and personal emails.
    #[must_use]
    pub const fn with_name_region(mut self, region: Region) -> Self {
        self.name_region = region;
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the canonical default address country code.
    #[must_use]
    pub const fn address_country(&self) -> &'static str {
        self.address_country
    }

    /// Returns the canonical default phone country code.
    #[must_use]
    pub const fn phone_country(&self) -> &'static str {
        self.phone_country
    }

    /// Returns the default name region.
    #[must_use]
    pub const fn name_region(&self) -> Region {
        self.name_region
    }

    /// Builds the random handle described by this configuration: seeded
    /// when a seed is set, thread-local otherwise.
    #[must_use]
    pub fn random(&self) -> Random {
        self.seed.map_or_else(Random::thread, Random::seeded)
    }
}

fn invalid_setting(field: &'static str, error: &GenerationError) -> ConfigError {
    let message = match error {
        GenerationError::InvalidArgument { message } | GenerationError::InvalidRange { message } => {
            message.clone()
        }
        GenerationError::Exhausted { .. } => error.to_string(),
    };
    ConfigError::InvalidSetting { field, message }
}

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawMockerConfig {
    version: u32,
    seed: Option<u64>,
    address_country: Option<String>,
    phone_country: Option<String>,
    name_region: Option<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_fs::{TempCleanup, write_temp_file};

    #[test]
    fn defaults_match_the_generators() {
        let config = MockerConfig::default();
        assert_eq!(config.seed(), None);
        assert_eq!(config.address_country(), "US");
        assert_eq!(config.phone_country(), "NG");
        assert_eq!(config.name_region(), Region::Western);
    }

    #[test]
    fn parses_a_complete_document() {
        let json = r#"{
            "version": 1,
            "seed": 42,
            "addressCountry": "uk",
            "phoneCountry": "US",
            "nameRegion": "European"
        }"#;
        let config = MockerConfig::from_json(json).expect("valid config");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.address_country(), "UK");
        assert_eq!(config.phone_country(), "US");
        assert_eq!(config.name_region(), Region::European);
    }

    #[test]
    fn missing_fields_keep_their_defaults() {
        let config = MockerConfig::from_json(r#"{"version": 1}"#).expect("valid config");
        assert_eq!(config, MockerConfig::default());
    }

    #[test]
    fn rejects_unsupported_version() {
        let result = MockerConfig::from_json(r#"{"version": 2}"#);
        assert_eq!(
            result,
            Err(ConfigError::UnsupportedVersion {
                expected: 1,
                actual: 2
            })
        );
    }

    #[rstest]
    #[case(r#"{"version": 1, "addressCountry": "ZZ"}"#, "addressCountry")]
    #[case(r#"{"version": 1, "phoneCountry": "AU"}"#, "phoneCountry")]
    #[case(r#"{"version": 1, "nameRegion": "martian"}"#, "nameRegion")]
    fn rejects_unknown_settings(#[case] json: &str, #[case] expected_field: &str) {
        let Err(ConfigError::InvalidSetting { field, message }) = MockerConfig::from_json(json)
        else {
            panic!("expected an invalid setting error");
        };
        assert_eq!(field, expected_field);
        assert!(!message.is_empty());
    }

    #[test]
    fn unsupported_address_country_lists_supported_codes() {
        let Err(ConfigError::InvalidSetting { message, .. }) =
            MockerConfig::default().with_address_country("BR")
        else {
            panic!("expected an invalid setting error");
        };
        assert!(message.contains("US, UK, NG, CA, AU"), "{message}");
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"seed": 1}"#)]
    #[case(r#"{"version": 1, "colour": "blue"}"#)]
    fn rejects_malformed_documents(#[case] json: &str) {
        assert!(matches!(
            MockerConfig::from_json(json),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let path = write_temp_file(
            "config",
            "mocker.json",
            r#"{"version": 1, "seed": 7, "phoneCountry": "ZA"}"#,
        );
        let _cleanup = TempCleanup(path.clone());

        let config = MockerConfig::from_file(path.as_std_path()).expect("valid config file");

        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.phone_country(), "ZA");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let path = Path::new("/definitely/not/here/mocker.json");
        let Err(ConfigError::IoError { path: reported, .. }) = MockerConfig::from_file(path)
        else {
            panic!("expected an io error");
        };
        assert_eq!(reported, path);
    }

    #[test]
    fn seeded_configs_reproduce_draws() {
        let config = MockerConfig::default().with_seed(11);
        let first = config.random().int_between(0, 1_000_000).expect("valid range");
        let second = config.random().int_between(0, 1_000_000).expect("valid range");
        assert_eq!(first, second);
    }
}
