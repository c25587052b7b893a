//! Email addresses composed from the name and company generators.

use rand::Rng;

use crate::company::CompanyGenerator;
use crate::error::GenerationError;
use crate::name::NameGenerator;
use crate::random::{Random, pick};
use crate::string::is_valid_email;
use crate::tables::words::{
    BUSINESS_PREFIXES, BUSINESS_TLDS, COUNTRY_TLDS, DEFAULT_TLD, PERSONAL_DOMAINS,
};
use crate::validation::sanitize_name_part;

/// Largest number appended by the `firstlastNN` personal format.
const PERSONAL_NUMBER_MAX: u32 = 99;

/// Generates personal and business email addresses.
///
/// # Example
///
/// ```
/// use data_mocker::{CompanyGenerator, EmailGenerator, NameGenerator, Random};
///
/// let random = Random::seeded(10);
/// let emails = EmailGenerator::new(
///     random.clone(),
///     NameGenerator::new(random.clone()),
///     CompanyGenerator::new(random),
/// );
/// let email = emails.business_by_country("DE").expect("tables are populated");
/// assert!(email.ends_with(".de"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailGenerator {
    random: Random,
    names: NameGenerator,
    companies: CompanyGenerator,
}

impl EmailGenerator {
    /// Creates a generator composing the given name and company generators.
    #[must_use]
    pub const fn new(random: Random, names: NameGenerator, companies: CompanyGenerator) -> Self {
        Self {
            random,
            names,
            companies,
        }
    }

    /// `first.last@` one of the common personal mail domains.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn personal(&self) -> Result<String, GenerationError> {
        let domain = pick(&mut self.random.rng(), PERSONAL_DOMAINS, "personal domains")?;
        self.personal_with_domain(domain)
    }

    /// `first.last@domain`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `domain` is blank
    /// or contains `@` or whitespace.
    pub fn personal_with_domain(&self, domain: &str) -> Result<String, GenerationError> {
        let host = checked_domain(domain)?;
        let (first, last) = self.name_parts()?;
        Ok(format!("{first}.{last}@{host}"))
    }

    /// A personal address in one of four shapes: `first.last`, `flast`,
    /// `firstlastNN` or `last.f`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn personal_random_format(&self) -> Result<String, GenerationError> {
        let (first, last) = self.name_parts()?;
        let mut rng = self.random.rng();
        let domain = pick(&mut rng, PERSONAL_DOMAINS, "personal domains")?;
        let initial = |part: &str| part.chars().next().map(String::from).unwrap_or_default();

        let local = match rng.random_range(0..4_u8) {
            0 => format!("{first}.{last}"),
            1 => format!("{}{last}", initial(&first)),
            2 => format!(
                "{first}{last}{}",
                rng.random_range(0..=PERSONAL_NUMBER_MAX)
            ),
            _ => format!("{last}.{}", initial(&first)),
        };
        Ok(format!("{local}@{domain}"))
    }

    /// `role@company.tld` with a random role, company and TLD.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn business(&self) -> Result<String, GenerationError> {
        let company = self.companies.company_name()?;
        let tld = pick(&mut self.random.rng(), BUSINESS_TLDS, "business TLDs")?;
        self.business_with(&company, tld)
    }

    /// `role@company.tld` using a company and TLD for `code`; countries
    /// without a dedicated TLD use `com`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn business_by_country(&self, code: &str) -> Result<String, GenerationError> {
        let company = self.companies.by_country(code)?;
        self.business_with(&company, country_tld(code))
    }

    /// `role@company.tld` for a caller-supplied company and TLD.
    ///
    /// The company is lowercased and stripped of everything but ASCII
    /// letters and digits; a leading dot on the TLD is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when the company has no
    /// usable characters or the TLD is blank.
    pub fn business_with(&self, company: &str, tld: &str) -> Result<String, GenerationError> {
        let host = company_host(company);
        if host.is_empty() {
            return Err(GenerationError::invalid_argument(format!(
                "company '{company}' has no letters or digits"
            )));
        }
        let suffix = tld.trim().trim_start_matches('.').to_ascii_lowercase();
        if suffix.is_empty() {
            return Err(GenerationError::invalid_argument("tld must not be blank"));
        }
        let role = pick(&mut self.random.rng(), BUSINESS_PREFIXES, "business prefixes")?;
        Ok(format!("{role}@{host}.{suffix}"))
    }

    /// Delegates to [`is_valid_email`].
    #[must_use]
    pub fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }

    /// Sanitised first and last name from the name generator.
    fn name_parts(&self) -> Result<(String, String), GenerationError> {
        let full = self.names.full_name()?;
        let mut parts = full.split_whitespace().map(sanitize_name_part);
        match (parts.next(), parts.last()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                Ok((first, last))
            }
            _ => Err(GenerationError::invalid_argument(format!(
                "name '{full}' cannot form an email address"
            ))),
        }
    }
}

/// The business TLD for a country code, `com` when unmapped.
#[must_use]
pub fn country_tld(code: &str) -> &'static str {
    let wanted = code.trim();
    COUNTRY_TLDS
        .iter()
        .find(|(country, _)| country.eq_ignore_ascii_case(wanted))
        .map_or(DEFAULT_TLD, |(_, tld)| *tld)
}

fn company_host(company: &str) -> String {
    company
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn checked_domain(domain: &str) -> Result<&str, GenerationError> {
    let host = domain.trim();
    if host.is_empty() || host.contains('@') || host.contains(char::is_whitespace) {
        return Err(GenerationError::invalid_argument(format!(
            "invalid email domain: '{domain}'"
        )));
    }
    Ok(host)
}
