//! Username generation strategies.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;

use crate::error::GenerationError;
use crate::random::{LOWERCASE, Random, UPPERCASE, from_alphabet, pick};
use crate::tables::words::{ADJECTIVES, NOUNS};
use crate::validation::{
    USERNAME_MAX, USERNAME_MIN, USERNAME_SPECIALS, is_valid_username, sanitize_name_part,
};

/// Maximum number of attempts to build a valid name-based username.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Smallest numeric suffix for adjective-noun usernames.
const SUFFIX_MIN: u32 = 100;

/// Largest numeric suffix for adjective-noun usernames.
const SUFFIX_MAX: u32 = 9998;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates usernames.
#[derive(Debug, Clone, Default)]
pub struct UsernameGenerator {
    random: Random,
}

impl UsernameGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self { random }
    }

    /// Adjective, noun and number, e.g. `BraveFalcon4821`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a word table is
    /// empty.
    pub fn random(&self) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let adjective = pick(&mut rng, ADJECTIVES, "adjectives")?;
        let noun = pick(&mut rng, NOUNS, "nouns")?;
        let number = rng.random_range(SUFFIX_MIN..=SUFFIX_MAX);
        Ok(format!("{adjective}{noun}{number}"))
    }

    /// Lowercase `first.last`, or `firstlast` without the separator.
    ///
    /// Names come from English first- and last-name tables; punctuation is
    /// stripped and candidates failing [`is_valid_username`] are redrawn.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Exhausted`] if no valid candidate is
    /// produced within the retry budget.
    pub fn name_based(&self, with_separator: bool) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let separator = if with_separator { "." } else { "" };

        for _ in 0..MAX_NAME_ATTEMPTS {
            let first: String = FirstName(EN).fake_with_rng(&mut rng);
            let last: String = LastName(EN).fake_with_rng(&mut rng);
            let candidate = format!(
                "{}{separator}{}",
                sanitize_name_part(&first),
                sanitize_name_part(&last)
            );
            if is_valid_username(&candidate) {
                return Ok(candidate);
            }
        }

        Err(GenerationError::Exhausted {
            what: "username",
            max_attempts: MAX_NAME_ATTEMPTS,
        })
    }

    /// A username of exactly `length` characters.
    ///
    /// Letters and digits are always allowed; `special_chars` adds `_`, `-`
    /// and `.`. The first character is always a letter or digit, and a
    /// letter when `start_with_letter` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `length` is
    /// outside 6 to 32.
    pub fn custom(
        &self,
        length: usize,
        special_chars: bool,
        start_with_letter: bool,
    ) -> Result<String, GenerationError> {
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
            return Err(GenerationError::invalid_argument(format!(
                "username length must be between {USERNAME_MIN} and {USERNAME_MAX}, got {length}"
            )));
        }

        let mut alphabet = ALPHANUMERIC.to_vec();
        if special_chars {
            alphabet.extend_from_slice(USERNAME_SPECIALS.as_bytes());
        }
        let letters = [UPPERCASE, LOWERCASE].concat();
        let lead_alphabet = if start_with_letter {
            letters.as_slice()
        } else {
            ALPHANUMERIC
        };

        let mut rng = self.random.rng();
        let mut username = from_alphabet(&mut rng, lead_alphabet, 1);
        username.push_str(&from_alphabet(&mut rng, &alphabet, length - 1));
        Ok(username)
    }
}
