//! Telephone number generation and validation.
//!
//! Local numbers are a table-driven prefix followed by random digits up to
//! the country's number length. Display formats interleave literal
//! separators with `X` digit slots.

use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;

use crate::error::GenerationError;
use crate::random::{Random, digits, pick};
use crate::tables::phones::{
    DEFAULT_PHONE_COUNTRY, NORTH_AMERICAN_PLAN, PHONE_PROFILES, PhoneProfile,
};

/// Digit slot in a display format.
const DIGIT_SLOT: char = 'X';

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static GENERIC_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+\d{1,4}[\s-]?)?(\(?\d\)?[\s-]?){7,15}(x\d+)?$").expect("valid regex")
});

/// Kind of line a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Mobile prefixes.
    Mobile,
    /// Landline prefixes.
    Landline,
}

/// Codes of every country with a phone profile.
#[must_use]
pub fn supported_countries() -> Vec<&'static str> {
    PHONE_PROFILES.iter().map(|profile| profile.code).collect()
}

fn profile(code: &str) -> Result<&'static PhoneProfile, GenerationError> {
    let wanted = code.trim();
    PHONE_PROFILES
        .iter()
        .find(|profile| profile.code.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            GenerationError::invalid_argument(format!(
                "unsupported country code: {code} (supported: {})",
                supported_countries().join(", ")
            ))
        })
}

/// Generates telephone numbers.
///
/// # Example
///
/// ```
/// use data_mocker::{PhoneNumberGenerator, Random};
///
/// let phones = PhoneNumberGenerator::new(Random::seeded(8));
/// let number = phones.international("DE").expect("supported country");
/// assert!(number.starts_with("+49"));
/// assert!(phones.is_valid_for_country(&number, "DE").expect("supported country"));
/// ```
#[derive(Debug, Clone)]
pub struct PhoneNumberGenerator {
    random: Random,
    country: &'static str,
}

impl PhoneNumberGenerator {
    /// Creates a generator whose default country is `NG`.
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self {
            random,
            country: DEFAULT_PHONE_COUNTRY,
        }
    }

    /// Replaces the country used by [`PhoneNumberGenerator::phone_number`].
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

    /// A local number for the default country.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if the profile is
    /// malformed.
    pub fn phone_number(&self) -> Result<String, GenerationError> {
        self.for_country(self.country)
    }

    /// A local mobile or landline number, digits only.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn for_country(&self, code: &str) -> Result<String, GenerationError> {
        let line = if self.random.rng().random_bool(0.5) {
            LineType::Mobile
        } else {
            LineType::Landline
        };
        self.local(profile(code)?, line)
    }

    /// A mobile number with the international dialling code, e.g.
    /// `+2348031234567`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn mobile(&self, code: &str) -> Result<String, GenerationError> {
        self.dialled(profile(code)?, LineType::Mobile)
    }

    /// A landline number with the international dialling code, e.g.
    /// `+12015550123`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn landline(&self, code: &str) -> Result<String, GenerationError> {
        self.dialled(profile(code)?, LineType::Landline)
    }

    /// A number prefixed with the international dialling code, e.g.
    /// `+2348031234567`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn international(&self, code: &str) -> Result<String, GenerationError> {
        let country = profile(code)?;
        let local = self.for_country(country.code)?;
        Ok(format!("{}{local}", country.dial_prefix))
    }

    /// A local number rendered through the country's display format.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn formatted(&self, code: &str) -> Result<String, GenerationError> {
        let country = profile(code)?;
        let local = self.for_country(country.code)?;
        Ok(apply_format(&local, country.display_format))
    }

    /// Dialling code followed by the formatted local number, e.g.
    /// `+234 803 123 4567`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn international_formatted(&self, code: &str) -> Result<String, GenerationError> {
        let country = profile(code)?;
        Ok(format!("{} {}", country.dial_prefix, self.formatted(code)?))
    }

    /// A local number rendered through a caller-supplied format in which
    /// `X` marks a digit.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code
    /// or a pattern without any `X`.
    pub fn custom_formatted(&self, code: &str, pattern: &str) -> Result<String, GenerationError> {
        if !pattern.contains(DIGIT_SLOT) {
            return Err(GenerationError::invalid_argument(format!(
                "pattern '{pattern}' has no '{DIGIT_SLOT}' digit slots"
            )));
        }
        let local = self.for_country(code)?;
        Ok(apply_format(&local, pattern))
    }

    /// A toll-free number: `800` in North America, `0800` elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn toll_free(&self, code: &str) -> Result<String, GenerationError> {
        self.special_rate(code, "800", "0800")
    }

    /// A premium-rate number: `900` in North America, `0900` elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn premium(&self, code: &str) -> Result<String, GenerationError> {
        self.special_rate(code, "900", "0900")
    }

    /// A local number followed by `x` and `extension_digits` digits.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code
    /// or an empty extension.
    pub fn with_extension(
        &self,
        code: &str,
        extension_digits: usize,
    ) -> Result<String, GenerationError> {
        if extension_digits == 0 {
            return Err(GenerationError::invalid_argument(
                "extension must have at least one digit",
            ));
        }
        let local = self.for_country(code)?;
        let extension = digits(&mut self.random.rng(), extension_digits);
        Ok(format!("{local}x{extension}"))
    }

    /// An international number for a randomly chosen supported country.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if no profile exists.
    pub fn random_country(&self) -> Result<String, GenerationError> {
        let country = PHONE_PROFILES
            .choose(&mut self.random.rng())
            .ok_or_else(|| GenerationError::invalid_argument("no phone profiles"))?;
        self.international(country.code)
    }

    /// Best-effort structural check accepting an optional `+` dialling
    /// code, 7 to 15 digits with optional separators, and an optional
    /// `x` extension.
    #[must_use]
    pub fn is_valid_phone_number(&self, number: &str) -> bool {
        GENERIC_PHONE.is_match(number.trim())
    }

    /// Checks a number against a country's profile.
    ///
    /// Separators and any extension are ignored. A leading `+` must carry
    /// the country's dialling code, which is then stripped; what remains
    /// must have the profile's length and start with a known prefix.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] for an unsupported code.
    pub fn is_valid_for_country(&self, number: &str, code: &str) -> Result<bool, GenerationError> {
        let country = profile(code)?;
        let trimmed = number.trim();
        let without_extension = trimmed
            .split_once('x')
            .map_or(trimmed, |(head, _)| head);
        let all_digits: String = without_extension
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        let dial_digits = country.dial_prefix.trim_start_matches('+');
        let local = if without_extension.starts_with('+') {
            match all_digits.strip_prefix(dial_digits) {
                Some(rest) => rest,
                None => return Ok(false),
            }
        } else {
            all_digits.as_str()
        };

        if local.len() != country.number_length {
            return Ok(false);
        }
        Ok(country
            .mobile_prefixes
            .iter()
            .chain(country.landline_prefixes)
            .any(|prefix| local.starts_with(prefix)))
    }

    fn dialled(&self, country: &PhoneProfile, line: LineType) -> Result<String, GenerationError> {
        let local = self.local(country, line)?;
        Ok(format!("{}{local}", country.dial_prefix))
    }

    fn local(&self, country: &PhoneProfile, line: LineType) -> Result<String, GenerationError> {
        let prefixes = match line {
            LineType::Mobile => country.mobile_prefixes,
            LineType::Landline => country.landline_prefixes,
        };
        let mut rng = self.random.rng();
        let prefix = pick(&mut rng, prefixes, "phone prefixes")?;
        let remaining = remaining_digits(country, prefix)?;
        Ok(format!("{prefix}{}", digits(&mut rng, remaining)))
    }

    fn special_rate(
        &self,
        code: &str,
        north_american: &str,
        elsewhere: &str,
    ) -> Result<String, GenerationError> {
        let country = profile(code)?;
        let prefix = if NORTH_AMERICAN_PLAN.contains(&country.code) {
            north_american
        } else {
            elsewhere
        };
        let remaining = remaining_digits(country, prefix)?;
        Ok(format!(
            "{prefix}{}",
            digits(&mut self.random.rng(), remaining)
        ))
    }
}

impl Default for PhoneNumberGenerator {
    fn default() -> Self {
        Self::new(Random::default())
    }
}

fn remaining_digits(country: &PhoneProfile, prefix: &str) -> Result<usize, GenerationError> {
    country
        .number_length
        .checked_sub(prefix.len())
        .filter(|remaining| *remaining > 0)
        .ok_or_else(|| {
            GenerationError::invalid_argument(format!(
                "prefix {prefix} leaves no digits in a {}-digit {} number",
                country.number_length, country.code
            ))
        })
}

/// Renders `digits` through `format`.
///
/// Literals are copied until the digits run out; digits left over once the
/// format is exhausted are appended unformatted.
fn apply_format(number: &str, format: &str) -> String {
    let mut remaining = number.chars().peekable();
    let mut rendered = String::with_capacity(format.len() + number.len());
    for slot in format.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if slot == DIGIT_SLOT {
            rendered.extend(remaining.next());
        } else {
            rendered.push(slot);
        }
    }
    rendered.extend(remaining);
    rendered
}
