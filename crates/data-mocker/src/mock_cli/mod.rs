//! CLI support for printing mock values.
//!
//! The binary delegates to these functions so argument parsing and value
//! generation can be exercised in tests without spawning a subprocess.

mod error;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use self::error::CliError;
use crate::config::MockerConfig;
use crate::mocker::DataMocker;
use crate::name::Region;
use crate::registry::ProviderOverrides;

const DEFAULT_COUNT: usize = 1;
const PASSWORD_LENGTH: usize = 16;
const MIN_BIRTHDAY_AGE: i32 = 18;
const MAX_BIRTHDAY_AGE: i32 = 80;

/// Kinds of value the CLI can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A full name in the configured region.
    Name,
    /// A personal email address.
    Email,
    /// A role address at a company domain.
    BusinessEmail,
    /// A postal address.
    Address,
    /// A phone number.
    Phone,
    /// A company name.
    Company,
    /// An adjective-noun-number username.
    Username,
    /// A date in the default window.
    Date,
    /// A birthday for an adult age.
    Birthday,
    /// A random UUID.
    Uuid,
    /// A strong password.
    Password,
    /// A lorem-style sentence.
    Sentence,
}

impl Category {
    /// Every category, in help-output order.
    pub const ALL: [Self; 12] = [
        Self::Name,
        Self::Email,
        Self::BusinessEmail,
        Self::Address,
        Self::Phone,
        Self::Company,
        Self::Username,
        Self::Date,
        Self::Birthday,
        Self::Uuid,
        Self::Password,
        Self::Sentence,
    ];

    /// Command-line spelling of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::BusinessEmail => "business-email",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Username => "username",
            Self::Date => "date",
            Self::Birthday => "birthday",
            Self::Uuid => "uuid",
            Self::Password => "password",
            Self::Sentence => "sentence",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| CliError::UnknownCategory {
                value: value.to_owned(),
            })
    }
}

/// Parsed options for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    category: Category,
    count: usize,
    seed: Option<u64>,
    country: Option<String>,
    region: Option<Region>,
    config_path: Option<PathBuf>,
}

impl Options {
    /// Returns the requested category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns how many values to print.
    ///
    /// # Example
    ///
    /// ```
    /// use data_mocker::mock_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["uuid".to_owned(), "--count".to_owned(), "3".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.count(), 3);
    /// ```
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the seed supplied with `--seed`.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the country supplied with `--country`.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns the region supplied with `--region`.
    #[must_use]
    pub const fn region(&self) -> Option<Region> {
        self.region
    }

    /// Returns the configuration file supplied with `--config`.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`CliError`] when the category is missing or unknown, a flag is
/// missing its value, or a value cannot be parsed.
///
/// # Example
///
/// ```
/// use data_mocker::Region;
/// use data_mocker::mock_cli::{Category, ParseOutcome, parse_args};
///
/// let args = ["name", "--region", "asian", "--seed", "7"].map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.category(), Category::Name);
/// assert_eq!(options.region(), Some(Region::Asian));
/// assert_eq!(options.seed(), Some(7));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut category: Option<Category> = None;
    let mut count: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut country: Option<String> = None;
    let mut region: Option<Region> = None;
    let mut config_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                count = Some(parse_number(&value, "--count")?);
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--country" => {
                country = Some(next_value(&mut args, "--country")?);
            }
            "--region" => {
                let value = next_value(&mut args, "--region")?;
                region = Some(parse_region(value)?);
            }
            "--config" => {
                let value = next_value(&mut args, "--config")?;
                config_path = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') || category.is_some() => {
                return Err(CliError::UnknownArgument {
                    value: other.to_owned(),
                });
            }
            value => category = Some(value.parse()?),
        }
    }

    let resolved_category = category.ok_or(CliError::MissingCategory)?;
    Ok(ParseOutcome::Options(Options {
        category: resolved_category,
        count: count.unwrap_or(DEFAULT_COUNT),
        seed,
        country,
        region,
        config_path,
    }))
}

/// Resolves the configuration: the `--config` file (or defaults), then the
/// `--seed` and `--region` flags on top.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the configuration file cannot be
/// loaded.
pub fn load_config(options: &Options) -> Result<MockerConfig, CliError> {
    let mut config = match options.config_path() {
        Some(path) => MockerConfig::from_file(path)?,
        None => MockerConfig::default(),
    };
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(region) = options.region {
        config = config.with_name_region(region);
    }
    Ok(config)
}

/// Builds a mocker from the options and generates the requested values.
///
/// # Errors
///
/// Returns [`CliError`] when the configuration cannot be loaded or a
/// generator rejects the request, such as an unsupported `--country`.
///
/// # Example
///
/// ```
/// use data_mocker::mock_cli::{ParseOutcome, generate, parse_args};
///
/// let args = ["address", "--country", "UK", "--count", "2"].map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let lines = generate(&options).expect("generate");
/// assert_eq!(lines.len(), 2);
/// ```
pub fn generate(options: &Options) -> Result<Vec<String>, CliError> {
    let mocker = DataMocker::new(load_config(options)?, ProviderOverrides::default())?;
    (0..options.count)
        .map(|_| generate_one(&mocker, options))
        .collect()
}

/// Generates a single value of the requested category.
///
/// # Errors
///
/// Returns [`CliError::Generation`] when the generator rejects the request.
pub fn generate_one(mocker: &DataMocker, options: &Options) -> Result<String, CliError> {
    let country = options.country();
    let value = match options.category {
        Category::Name => mocker.name().full_name()?,
        Category::Email => mocker.email().personal()?,
        Category::BusinessEmail => match country {
            Some(code) => mocker.email().business_by_country(code)?,
            None => mocker.email().business()?,
        },
        Category::Address => match country {
            Some(code) => mocker.address().for_country(code)?,
            None => mocker.address().address()?,
        },
        Category::Phone => match country {
            Some(code) => mocker.phone_number().for_country(code)?,
            None => mocker.phone_number().phone_number()?,
        },
        Category::Company => match country {
            Some(code) => mocker.company().by_country(code)?,
            None => mocker.company().company_name()?,
        },
        Category::Username => mocker.username().random()?,
        Category::Date => mocker.date().random()?.to_string(),
        Category::Birthday => {
            let age = mocker.number().integer(
                i64::from(MIN_BIRTHDAY_AGE),
                i64::from(MAX_BIRTHDAY_AGE),
            )?;
            let years = i32::try_from(age).unwrap_or(MIN_BIRTHDAY_AGE);
            mocker.date().birthday(years)?.to_string()
        }
        Category::Uuid => mocker.string().uuid(),
        Category::Password => mocker.string().strong_password(PASSWORD_LENGTH)?,
        Category::Sentence => mocker.string().sentence()?,
    };
    Ok(value)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn parse_region(value: String) -> Result<Region, CliError> {
    value.parse::<Region>().map_err(|err| CliError::InvalidValue {
        flag: "--region",
        message: err.to_string(),
        value,
    })
}
