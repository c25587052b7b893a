//! Postal address generation from per-country templates.
//!
//! A country's output template is parsed into literal text and named
//! placeholders such as `{city}`. Generation fills each placeholder with a
//! random draw; validation turns the same template into an anchored regular
//! expression whose placeholder groups are alternations over the tables.

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;

use crate::error::GenerationError;
use crate::random::{Random, digit, pick, upper_letter};
use crate::tables::places::{
    COUNTRY_PROFILES, CountryProfile, DEFAULT_ADDRESS_COUNTRY, STREET_NAMES,
};

const STREET_NUMBER_MAX: u32 = 999;
const APARTMENT_MAX: u32 = 99;
const APARTMENT_PATTERN: &str = r"(?:\s*Apt\s*\d{1,2}[A-Z]?)?";

/// A named slot in an address template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    StreetNumber,
    StreetName,
    StreetType,
    City,
    State,
    PostalCode,
}

impl Placeholder {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "streetNumber" => Some(Self::StreetNumber),
            "streetName" => Some(Self::StreetName),
            "streetType" => Some(Self::StreetType),
            "city" => Some(Self::City),
            "state" => Some(Self::State),
            "postalCode" => Some(Self::PostalCode),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Field(Placeholder),
}

/// Splits a template into literal runs and placeholders.
fn parse_template(template: &str) -> Result<Vec<Segment<'_>>, GenerationError> {
    let mut segments = Vec::new();
    let mut rest = template;
    while let Some((before, after)) = rest.split_once('{') {
        if !before.is_empty() {
            segments.push(Segment::Literal(before));
        }
        let (key, tail) = after.split_once('}').ok_or_else(|| {
            GenerationError::invalid_argument(format!("unterminated placeholder in '{template}'"))
        })?;
        let field = Placeholder::from_key(key).ok_or_else(|| {
            GenerationError::invalid_argument(format!("unknown address placeholder '{key}'"))
        })?;
        segments.push(Segment::Field(field));
        rest = tail;
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

/// One set of drawn address components.
struct Parts {
    street_number: u32,
    street_name: &'static str,
    street_type: &'static str,
    city: &'static str,
    state: &'static str,
    postal_code: String,
}

/// Codes of every country with an address profile.
#[must_use]
pub fn supported_countries() -> Vec<&'static str> {
    COUNTRY_PROFILES.iter().map(|profile| profile.code).collect()
}

/// Resolves a country code, ignoring case and surrounding whitespace.
fn profile(code: &str) -> Result<&'static CountryProfile, GenerationError> {
    let wanted = code.trim();
    COUNTRY_PROFILES
        .iter()
        .find(|profile| profile.code.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            GenerationError::invalid_argument(format!(
                "unsupported country code: {code} (supported: {})",
                supported_countries().join(", ")
            ))
        })
}

/// Generates postal addresses.
///
/// # Example
///
/// ```
/// use data_mocker::{AddressGenerator, Random};
///
/// let addresses = AddressGenerator::new(Random::seeded(5));
/// let address = addresses.for_country("ca").expect("supported country");
/// assert!(addresses.is_valid_address(&address, "CA").expect("supported country"));
/// ```
#[derive(Debug, Clone)]
pub struct AddressGenerator {
    random: Random,
    country: &'static str,
}

impl AddressGenerator {
    /// Creates a generator whose default country is `US`.
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self {
            random,
            country: DEFAULT_ADDRESS_COUNTRY,
        }
    }

    /// Replaces the country used by [`AddressGenerator::address`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn with_country(mut self, code: &str) -> Result<Self, GenerationError> {
        self.country = profile(code)?.code;
        Ok(self)
    }

    /// Sets a code already resolved against the profile table.
    #[must_use]
    pub(crate) const fn with_resolved_country(mut self, code: &'static str) -> Self {
        self.country = code;
        self
    }

    /// The code of the default country.
    #[must_use]
    pub const fn country(&self) -> &'static str {
        self.country
    }

    /// A full address in the default country.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if the profile is
    /// malformed.
    pub fn address(&self) -> Result<String, GenerationError> {
        self.render(profile(self.country)?)
    }

    /// A full address in the given country.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn for_country(&self, code: &str) -> Result<String, GenerationError> {
        self.render(profile(code)?)
    }

    /// A full address in a randomly chosen supported country.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if no profile exists.
    pub fn random_country_address(&self) -> Result<String, GenerationError> {
        let chosen = COUNTRY_PROFILES
            .choose(&mut self.random.rng())
            .ok_or_else(|| GenerationError::invalid_argument("no address profiles"))?;
        self.render(chosen)
    }

    /// A full address with an apartment token such as `Apt 12B`.
    ///
    /// The token goes immediately before the first comma, or at the end
    /// when the address has none.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn with_apartment(&self, code: &str) -> Result<String, GenerationError> {
        let address = self.for_country(code)?;
        let apartment = self.apartment();
        Ok(match address.split_once(',') {
            Some((head, tail)) => format!("{head} {apartment},{tail}"),
            None => format!("{address} {apartment}"),
        })
    }

    /// Street number, name and type, e.g. `42 Oak Ave`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn street_address(&self, code: &str) -> Result<String, GenerationError> {
        let parts = self.draw(profile(code)?)?;
        Ok(format!(
            "{} {} {}",
            parts.street_number, parts.street_name, parts.street_type
        ))
    }

    /// A city from the country's table.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn city(&self, code: &str) -> Result<String, GenerationError> {
        pick(&mut self.random.rng(), profile(code)?.cities, "cities").map(str::to_owned)
    }

    /// A state or region from the country's table.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn state(&self, code: &str) -> Result<String, GenerationError> {
        pick(&mut self.random.rng(), profile(code)?.states, "states").map(str::to_owned)
    }

    /// A postal code rendered from the country's postal template.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn postal_code(&self, code: &str) -> Result<String, GenerationError> {
        let template = profile(code)?.postal_template;
        Ok(fill_postal_template(&mut self.random.rng(), template))
    }

    /// Checks whether `address` has the shape of an address generated for
    /// `code`, with or without an apartment token.
    ///
    /// This is a structural check against the template and tables, not a
    /// statement that the address exists.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn is_valid_address(&self, address: &str, code: &str) -> Result<bool, GenerationError> {
        let pattern = validation_pattern(profile(code)?)?;
        Ok(pattern.is_match(address.trim()))
    }

    fn render(&self, country: &CountryProfile) -> Result<String, GenerationError> {
        let segments = parse_template(country.format_template)?;
        let parts = self.draw(country)?;
        let mut address = String::with_capacity(country.format_template.len() + 16);
        for segment in segments {
            match segment {
                Segment::Literal(text) => address.push_str(text),
                Segment::Field(Placeholder::StreetNumber) => {
                    address.push_str(&parts.street_number.to_string());
                }
                Segment::Field(Placeholder::StreetName) => address.push_str(parts.street_name),
                Segment::Field(Placeholder::StreetType) => address.push_str(parts.street_type),
                Segment::Field(Placeholder::City) => address.push_str(parts.city),
                Segment::Field(Placeholder::State) => address.push_str(parts.state),
                Segment::Field(Placeholder::PostalCode) => address.push_str(&parts.postal_code),
            }
        }
        Ok(address)
    }

    fn draw(&self, country: &CountryProfile) -> Result<Parts, GenerationError> {
        let mut rng = self.random.rng();
        Ok(Parts {
            street_number: rng.random_range(1..=STREET_NUMBER_MAX),
            street_name: pick(&mut rng, STREET_NAMES, "street names")?,
            street_type: pick(&mut rng, country.street_types, "street types")?,
            city: pick(&mut rng, country.cities, "cities")?,
            state: pick(&mut rng, country.states, "states")?,
            postal_code: fill_postal_template(&mut rng, country.postal_template),
        })
    }

    fn apartment(&self) -> String {
        let mut rng = self.random.rng();
        let number = rng.random_range(1..=APARTMENT_MAX);
        if rng.random_bool(0.5) {
            format!("Apt {number}{}", upper_letter(&mut rng))
        } else {
            format!("Apt {number}")
        }
    }
}

impl Default for AddressGenerator {
    fn default() -> Self {
        Self::new(Random::default())
    }
}

/// Replaces `#` with a digit and `@` with an uppercase letter.
fn fill_postal_template<R>(rng: &mut R, template: &str) -> String
where
    R: Rng + ?Sized,
{
    template
        .chars()
        .map(|c| match c {
            '#' => digit(rng),
            '@' => upper_letter(rng),
            other => other,
        })
        .collect()
}

fn validation_pattern(country: &CountryProfile) -> Result<Regex, GenerationError> {
    let mut pattern = String::from("^");
    let mut apartment_slot = true;
    for segment in parse_template(country.format_template)? {
        match segment {
            Segment::Literal(text) => {
                if apartment_slot && text.contains(',') {
                    pattern.push_str(APARTMENT_PATTERN);
                    apartment_slot = false;
                }
                pattern.push_str(&literal_pattern(text));
            }
            Segment::Field(Placeholder::StreetNumber) => pattern.push_str(r"\d{1,3}"),
            Segment::Field(Placeholder::StreetName) => pattern.push_str(&alternation(STREET_NAMES)),
            Segment::Field(Placeholder::StreetType) => {
                pattern.push_str(&alternation(country.street_types));
            }
            Segment::Field(Placeholder::City) => pattern.push_str(&alternation(country.cities)),
            Segment::Field(Placeholder::State) => pattern.push_str(&alternation(country.states)),
            Segment::Field(Placeholder::PostalCode) => {
                pattern.push_str(&postal_pattern(country.postal_template));
            }
        }
    }
    if apartment_slot {
        pattern.push_str(APARTMENT_PATTERN);
    }
    pattern.push('$');
    Regex::new(&pattern).map_err(|err| GenerationError::invalid_argument(err.to_string()))
}

/// Escapes literal text, letting each space match any run of whitespace.
fn literal_pattern(text: &str) -> String {
    text.split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s*")
}

fn alternation(options: &[&str]) -> String {
    let escaped: Vec<String> = options.iter().map(|option| regex::escape(option)).collect();
    format!("(?:{})", escaped.join("|"))
}

fn postal_pattern(template: &str) -> String {
    template
        .chars()
        .map(|c| match c {
            '#' => r"\d".to_owned(),
            '@' => "[A-Z]".to_owned(),
            ' ' => r"\s*".to_owned(),
            other => regex::escape(&other.to_string()),
        })
        .collect()
}
