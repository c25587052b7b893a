//! Randomised but plausible mock data for tests and demonstrations.
//!
//! The crate is a set of independent generators (names, dates, numbers,
//! usernames, addresses, phone numbers, companies, strings and emails) that
//! draw from static per-category tables and one injected random source.
//! [`DataMocker`] bundles them behind one typed accessor per category.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Range-constrained numbers, including parity, divisor and prime draws
//! - Calendar windows relative to an injectable clock
//! - Per-region names and per-country addresses and phone numbers
//! - Reproducible output from a seeded [`Random`] source
//! - Replacing any built-in provider, or registering custom ones, through
//!   [`ProviderOverrides`]
//!
//! # Example
//!
//! ```
//! use data_mocker::{DataMocker, MockerConfig, ProviderOverrides, Region};
//!
//! let config = MockerConfig::default()
//!     .with_seed(42)
//!     .with_name_region(Region::Nigerian);
//! let mocker = DataMocker::new(config, ProviderOverrides::default())
//!     .expect("no custom providers");
//!
//! let name = mocker.name().full_name().expect("tables are populated");
//! assert_eq!(name.split(' ').count(), 2);
//!
//! let even = mocker.number().even(1, 100).expect("range has even values");
//! assert_eq!(even.rem_euclid(2), 0);
//!
//! let phone = mocker.phone_number().phone_number().expect("supported country");
//! assert!(mocker
//!     .phone_number()
//!     .is_valid_for_country(&phone, "NG")
//!     .expect("supported country"));
//! ```

mod address;
mod company;
mod config;
mod date;
mod email;
mod error;
mod mocker;
mod name;
mod number;
mod phone;
mod random;
mod registry;
mod string;
mod tables;
#[cfg(test)]
mod test_fs;
mod username;
mod validation;

pub mod mock_cli;

pub use address::{AddressGenerator, supported_countries as supported_address_countries};
pub use company::{CompanyGenerator, Continent, Industry, is_valid_company_name};
pub use config::MockerConfig;
pub use date::{DateGenerator, Season, SharedClock};
pub use email::{EmailGenerator, country_tld};
pub use error::{ConfigError, GenerationError, RegistryError};
pub use mocker::DataMocker;
pub use name::{Gender, NameFormat, NameGenerator, Region, belongs_to_region};
pub use number::{MAX_PRECISION, NumberGenerator};
pub use phone::{LineType, PhoneNumberGenerator, supported_countries as supported_phone_countries};
pub use random::{Random, RandomSource, SeededRandom, ThreadRandom};
pub use registry::{DataProvider, Provider, ProviderOverrides, ProviderRegistry, keys};
pub use string::{SPECIAL_CHARS, STRONG_PASSWORD_MIN, StringGenerator, is_valid_email};
pub use username::UsernameGenerator;
pub use validation::{USERNAME_MAX, USERNAME_MIN, USERNAME_SPECIALS, is_valid_username};
