//! General-purpose string builders.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::locales::EN;
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::random::{
    DIGITS, LOWERCASE, Random, UPPERCASE, digit, from_alphabet, pick, upper_letter,
};
use crate::tables::words::{FILE_EXTENSIONS, FOLDERS, LOREM_WORDS, TOP_LEVEL_DOMAINS};

/// Punctuation used by special-character strings and passwords.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;':,.<>?";

/// Shortest password [`StringGenerator::strong_password`] accepts.
pub const STRONG_PASSWORD_MIN: usize = 8;

const HEX: &[u8] = b"0123456789ABCDEF";
const LOWER_HEX: &[u8] = b"0123456789abcdef";
const SENTENCE_WORDS_MIN: usize = 5;
const SENTENCE_WORDS_MAX: usize = 10;
const HOST_LEN_MIN: usize = 5;
const HOST_LEN_MAX: usize = 10;
const FILE_STEM_LEN: usize = 10;

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid regex"));

/// Best-effort check that `email` has the shape `local@domain.tld`.
///
/// ```
/// use data_mocker::is_valid_email;
///
/// assert!(is_valid_email("ada.lovelace@example.com"));
/// assert!(!is_valid_email("ada.lovelace@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Builds random strings, text and identifiers.
#[derive(Debug, Clone, Default)]
pub struct StringGenerator {
    random: Random,
}

impl StringGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self { random }
    }

    /// Mixed-case ASCII letters.
    #[must_use]
    pub fn alphabetic(&self, length: usize) -> String {
        self.build(&[UPPERCASE, LOWERCASE].concat(), length)
    }

    /// ASCII digits.
    #[must_use]
    pub fn numeric(&self, length: usize) -> String {
        self.build(DIGITS, length)
    }

    /// Mixed-case ASCII letters and digits.
    #[must_use]
    pub fn alphanumeric(&self, length: usize) -> String {
        self.build(&[UPPERCASE, LOWERCASE, DIGITS].concat(), length)
    }

    /// Uppercase hexadecimal digits.
    #[must_use]
    pub fn hex(&self, length: usize) -> String {
        self.build(HEX, length)
    }

    /// Letters, digits and [`SPECIAL_CHARS`].
    #[must_use]
    pub fn with_specials(&self, length: usize) -> String {
        self.build(
            &[UPPERCASE, LOWERCASE, DIGITS, SPECIAL_CHARS.as_bytes()].concat(),
            length,
        )
    }

    /// Characters drawn uniformly from `charset`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `charset` is empty.
    pub fn from_charset(&self, length: usize, charset: &str) -> Result<String, GenerationError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(GenerationError::invalid_argument(
                "charset must not be empty",
            ));
        }
        let mut rng = self.random.rng();
        (0..length)
            .map(|_| pick(&mut rng, &chars, "charset"))
            .collect()
    }

    /// Replaces `#` with a digit and `@` with an uppercase letter, keeping
    /// every other character.
    ///
    /// ```
    /// use data_mocker::{Random, StringGenerator};
    ///
    /// let strings = StringGenerator::new(Random::seeded(1));
    /// let plate = strings.from_pattern("@@@-####");
    /// assert_eq!(plate.len(), 8);
    /// assert_eq!(plate.chars().nth(3), Some('-'));
    /// ```
    #[must_use]
    pub fn from_pattern(&self, pattern: &str) -> String {
        let mut rng = self.random.rng();
        pattern
            .chars()
            .map(|c| match c {
                '#' => digit(&mut rng),
                '@' => upper_letter(&mut rng),
                other => other,
            })
            .collect()
    }

    /// One lorem-ipsum word.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if the word pool is
    /// empty.
    pub fn word(&self) -> Result<String, GenerationError> {
        pick(&mut self.random.rng(), LOREM_WORDS, "words").map(str::to_owned)
    }

    /// `count` space-separated lorem-ipsum words.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if the word pool is
    /// empty.
    pub fn words(&self, count: usize) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let words = (0..count)
            .map(|_| pick(&mut rng, LOREM_WORDS, "words"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(words.join(" "))
    }

    /// A capitalised sentence of five to ten words ending in a full stop.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if the word pool is
    /// empty.
    pub fn sentence(&self) -> Result<String, GenerationError> {
        let count = self
            .random
            .rng()
            .random_range(SENTENCE_WORDS_MIN..=SENTENCE_WORDS_MAX);
        let words = self.words(count)?;
        let mut chars = words.chars();
        let capitalised: String = chars
            .next()
            .map(|first| first.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();
        Ok(format!("{capitalised}."))
    }

    /// `sentences` sentences separated by single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `sentences` is
    /// zero.
    pub fn paragraph(&self, sentences: usize) -> Result<String, GenerationError> {
        if sentences == 0 {
            return Err(GenerationError::invalid_argument(
                "a paragraph needs at least one sentence",
            ));
        }
        let parts = (0..sentences)
            .map(|_| self.sentence())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(" "))
    }

    /// A random (version 4) UUID in lowercase hyphenated form.
    #[must_use]
    pub fn uuid(&self) -> String {
        self.random_uuid().hyphenated().to_string()
    }

    /// A random UUID in the uppercase, brace-wrapped GUID form.
    #[must_use]
    pub fn guid(&self) -> String {
        format!("{{{}}}", self.random_uuid().hyphenated().to_string().to_uppercase())
    }

    /// Lowercase hex in the 8-4-4-4-12 layout without version or variant
    /// bits.
    #[must_use]
    pub fn uuid_like(&self) -> String {
        let mut rng = self.random.rng();
        [8, 4, 4, 4, 12]
            .into_iter()
            .map(|len| from_alphabet(&mut rng, LOWER_HEX, len))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// A password of letters, digits and special characters.
    #[must_use]
    pub fn password(&self, length: usize) -> String {
        self.with_specials(length)
    }

    /// A password with at least two uppercase letters, two lowercase
    /// letters, two digits and two special characters, shuffled.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `length` is below
    /// [`STRONG_PASSWORD_MIN`].
    pub fn strong_password(&self, length: usize) -> Result<String, GenerationError> {
        if length < STRONG_PASSWORD_MIN {
            return Err(GenerationError::invalid_argument(format!(
                "strong passwords need at least {STRONG_PASSWORD_MIN} characters, got {length}"
            )));
        }
        let specials = SPECIAL_CHARS.as_bytes();
        let any = [UPPERCASE, LOWERCASE, DIGITS, specials].concat();
        let mut rng = self.random.rng();

        let mut password: Vec<char> = [UPPERCASE, LOWERCASE, DIGITS, specials]
            .into_iter()
            .flat_map(|class| from_alphabet(&mut rng, class, 2).chars().collect::<Vec<_>>())
            .collect();
        password.extend(from_alphabet(&mut rng, &any, length - STRONG_PASSWORD_MIN).chars());
        password.shuffle(&mut rng);
        Ok(password.into_iter().collect())
    }

    /// An absolute path such as `/documents/a8Kd02LmQz.pdf`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn file_path(&self) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let folder = pick(&mut rng, FOLDERS, "folders")?;
        let extension = pick(&mut rng, FILE_EXTENSIONS, "file extensions")?;
        let alphabet = [UPPERCASE, LOWERCASE, DIGITS].concat();
        let stem = from_alphabet(&mut rng, &alphabet, FILE_STEM_LEN);
        Ok(format!("/{folder}/{stem}.{extension}"))
    }

    /// An `https` URL with a random host and path.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn url(&self) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let host = host_label(&mut rng);
        let tld = pick(&mut rng, TOP_LEVEL_DOMAINS, "top-level domains")?;
        let path = host_label(&mut rng);
        Ok(format!("https://{host}.{tld}/{path}"))
    }

    /// A random-looking address such as `qkzvw@mfjdyt.io`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn email(&self) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let local = host_label(&mut rng);
        let domain = host_label(&mut rng);
        let tld = pick(&mut rng, TOP_LEVEL_DOMAINS, "top-level domains")?;
        Ok(format!("{local}@{domain}.{tld}"))
    }

    /// An English first name.
    #[must_use]
    pub fn first_name(&self) -> String {
        FirstName(EN).fake_with_rng(&mut self.random.rng())
    }

    /// An English last name.
    #[must_use]
    pub fn last_name(&self) -> String {
        LastName(EN).fake_with_rng(&mut self.random.rng())
    }

    /// An English full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        Name(EN).fake_with_rng(&mut self.random.rng())
    }

    /// Delegates to [`is_valid_email`].
    #[must_use]
    pub fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }

    fn build(&self, alphabet: &[u8], length: usize) -> String {
        from_alphabet(&mut self.random.rng(), alphabet, length)
    }

    fn random_uuid(&self) -> Uuid {
        uuid::Builder::from_random_bytes(self.random.rng().random()).into_uuid()
    }
}

fn host_label<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let len = rng.random_range(HOST_LEN_MIN..=HOST_LEN_MAX);
    from_alphabet(rng, &[LOWERCASE, DIGITS].concat(), len)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn strings() -> StringGenerator {
        StringGenerator::new(Random::seeded(64))
    }

    #[rstest]
    fn alphabet_builders_respect_their_alphabets(strings: StringGenerator) {
        let alphabetic = strings.alphabetic(40);
        let numeric = strings.numeric(40);
        let alphanumeric = strings.alphanumeric(40);
        let hex = strings.hex(40);
        assert!(alphabetic.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(numeric.chars().all(|c| c.is_ascii_digit()));
        assert!(alphanumeric.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        for value in [alphabetic, numeric, alphanumeric, hex] {
            assert_eq!(value.len(), 40);
        }
    }

    #[rstest]
    fn special_strings_stay_in_their_alphabet(strings: StringGenerator) {
        let value = strings.with_specials(200);
        assert!(
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(c))
        );
    }

    #[rstest]
    fn zero_lengths_give_empty_strings(strings: StringGenerator) {
        assert!(strings.alphanumeric(0).is_empty());
        assert_eq!(strings.from_charset(0, "ab"), Ok(String::new()));
    }

    #[rstest]
    fn custom_charsets_are_honoured(strings: StringGenerator) {
        let value = strings.from_charset(50, "xyzé").expect("non-empty charset");
        assert_eq!(value.chars().count(), 50);
        assert!(value.chars().all(|c| "xyzé".contains(c)));
        assert!(matches!(
            strings.from_charset(5, ""),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    #[case("###-@@@", r"^\d{3}-[A-Z]{3}$")]
    #[case("ID: @#@", r"^ID: [A-Z]\d[A-Z]$")]
    #[case("plain", r"^plain$")]
    fn patterns_keep_their_shape(
        strings: StringGenerator,
        #[case] pattern: &str,
        #[case] shape: &str,
    ) {
        let expected = Regex::new(shape).expect("regex");
        for _ in 0..20 {
            let value = strings.from_pattern(pattern);
            assert!(expected.is_match(&value), "{value}");
        }
    }

    #[rstest]
    fn sentences_are_capitalised_and_terminated(strings: StringGenerator) {
        for _ in 0..50 {
            let sentence = strings.sentence().expect("populated pool");
            assert!(sentence.starts_with(|c: char| c.is_ascii_uppercase()));
            assert!(sentence.ends_with('.'));
            let words = sentence.split(' ').count();
            assert!((SENTENCE_WORDS_MIN..=SENTENCE_WORDS_MAX).contains(&words));
        }
    }

    #[rstest]
    fn words_come_from_the_pool(strings: StringGenerator) {
        let words = strings.words(30).expect("populated pool");
        assert!(words.split(' ').all(|word| LOREM_WORDS.contains(&word)));
        assert!(LOREM_WORDS.contains(&strings.word().expect("populated pool").as_str()));
    }

    #[rstest]
    fn paragraphs_contain_the_requested_sentences(strings: StringGenerator) {
        let paragraph = strings.paragraph(4).expect("positive count");
        assert_eq!(paragraph.matches('.').count(), 4);
        assert!(matches!(
            strings.paragraph(0),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    fn uuids_parse_and_differ(strings: StringGenerator) {
        let seen: HashSet<String> = (0..50).map(|_| strings.uuid()).collect();
        assert_eq!(seen.len(), 50);
        for value in &seen {
            let parsed = Uuid::parse_str(value).expect("valid uuid");
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[rstest]
    fn guids_are_braced_and_uppercase(strings: StringGenerator) {
        let guid = strings.guid();
        let inner = guid
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .expect("braces");
        assert_eq!(inner, inner.to_uppercase());
        assert!(Uuid::parse_str(inner).is_ok());
    }

    #[rstest]
    fn uuid_like_values_have_the_uuid_layout(strings: StringGenerator) {
        let shape = Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("regex");
        assert!(shape.is_match(&strings.uuid_like()));
    }

    #[rstest]
    #[case(8)]
    #[case(12)]
    #[case(64)]
    fn strong_passwords_cover_every_class(strings: StringGenerator, #[case] length: usize) {
        for _ in 0..20 {
            let password = strings.strong_password(length).expect("long enough");
            assert_eq!(password.chars().count(), length);
            let count = |predicate: fn(&char) -> bool| password.chars().filter(predicate).count();
            assert!(count(char::is_ascii_uppercase) >= 2, "{password}");
            assert!(count(char::is_ascii_lowercase) >= 2, "{password}");
            assert!(count(char::is_ascii_digit) >= 2, "{password}");
            assert!(
                password.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count() >= 2,
                "{password}"
            );
        }
    }

    #[rstest]
    fn short_strong_passwords_are_rejected(strings: StringGenerator) {
        assert!(matches!(
            strings.strong_password(STRONG_PASSWORD_MIN - 1),
            Err(GenerationError::InvalidArgument { .. })
        ));
        assert_eq!(strings.password(16).chars().count(), 16);
    }

    #[rstest]
    fn file_paths_and_urls_are_well_formed(strings: StringGenerator) {
        let path = Regex::new(r"^/[a-z]+/[A-Za-z0-9]{10}\.[a-z]+$").expect("regex");
        let url = Regex::new(r"^https://[a-z0-9]{5,10}\.[a-z]{2,3}/[a-z0-9]{5,10}$").expect("regex");
        for _ in 0..20 {
            let file = strings.file_path().expect("populated tables");
            let link = strings.url().expect("populated tables");
            assert!(path.is_match(&file), "{file}");
            assert!(url.is_match(&link), "{link}");
        }
    }

    #[rstest]
    fn random_emails_pass_validation(strings: StringGenerator) {
        for _ in 0..20 {
            let email = strings.email().expect("populated tables");
            assert!(strings.is_valid_email(&email), "{email}");
        }
    }

    #[rstest]
    fn english_names_are_not_blank(strings: StringGenerator) {
        assert!(!strings.first_name().trim().is_empty());
        assert!(!strings.last_name().trim().is_empty());
        assert!(strings.full_name().contains(' '));
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last-1@mail.example.co", true)]
    #[case("user@example", false)]
    #[case("user example@mail.com", false)]
    #[case("@example.com", false)]
    fn email_shapes(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }
}
