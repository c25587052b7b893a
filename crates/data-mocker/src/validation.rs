//! Username validation rules.
//!
//! Every username produced by [`crate::UsernameGenerator`] satisfies these
//! rules, so callers can use [`is_valid_username`] to check values that
//! came from elsewhere against the same shape.
//!
//! # Validation Rules
//!
//! - Minimum length: 6 characters
//! - Maximum length: 32 characters
//! - Allowed characters: letters (A-Z, a-z), digits (0-9), `_`, `-`, `.`
//! - Must start with a letter or digit

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 6;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

/// Punctuation permitted inside a username.
pub const USERNAME_SPECIALS: &str = "_-.";

/// Validates a username.
///
/// # Examples
///
/// ```
/// use data_mocker::is_valid_username;
///
/// assert!(is_valid_username("BraveTiger4521"));
/// assert!(is_valid_username("ada.lovelace"));
/// assert!(!is_valid_username("ada"));          // Too short
/// assert!(!is_valid_username("ada lovelace")); // Invalid character
/// assert!(!is_valid_username(".adalovelace")); // Leading punctuation
/// ```
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let length = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return false;
    }
    if !username
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
    {
        return false;
    }
    username.chars().all(is_valid_username_char)
}

/// Returns `true` if the character may appear in a username.
#[must_use]
const fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Lowercases a name fragment, folds common Latin diacritics and drops
/// everything else that is not an ASCII letter or digit, so `O'Brien`
/// becomes `obrien` and `Müller` becomes `muller`.
#[must_use]
pub(crate) fn sanitize_name_part(part: &str) -> String {
    part.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

const fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
