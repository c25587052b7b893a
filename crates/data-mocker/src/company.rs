//! Company name generation.
//!
//! Table-driven modes fall back to the global category when the requested
//! continent, country or industry has no row of its own.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use tracing::debug;

use crate::error::GenerationError;
use crate::random::{LOWERCASE, Random, from_alphabet, pick, upper_letter};
use crate::tables::companies::{
    CONTINENT_COMPANIES, CORPORATE_SUFFIXES, COUNTRY_COMPANIES, GENERIC_TERMS, GLOBAL_PREFIXES,
    INDUSTRY_PREFIXES,
};

/// Letters in a synthetic company stem.
const SYNTHETIC_STEM_LEN: usize = 4;

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static COMPANY_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9\s'&-]*?(?:\s(?:Inc\.|Ltd|LLC|GmbH|Co\.|Corp|Group|Solutions))?$",
    )
    .expect("valid regex")
});

/// Continent keying the real-company tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    /// African companies.
    Africa,
    /// North and South American companies.
    America,
    /// European companies.
    Europe,
    /// Asian companies.
    Asia,
    /// Australian companies.
    Australia,
    /// Multinationals; the fallback category.
    Global,
}

impl Continent {
    /// Every continent, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Africa,
        Self::America,
        Self::Europe,
        Self::Asia,
        Self::Australia,
        Self::Global,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "africa",
            Self::America => "america",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Australia => "australia",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|continent| continent.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GenerationError::invalid_argument(format!("unknown continent: {value}")))
    }
}

/// Industry keying the synthetic-name prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    /// Technology.
    Tech,
    /// Retail.
    Retail,
    /// Manufacturing.
    Manufacturing,
    /// Banking and finance.
    Finance,
    /// Healthcare; uses the global prefixes.
    Healthcare,
    /// Energy; uses the global prefixes.
    Energy,
}

/// Generates company names.
#[derive(Debug, Clone, Default)]
pub struct CompanyGenerator {
    random: Random,
}

impl CompanyGenerator {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self { random }
    }

    /// A real company from a randomly chosen continent table.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn company_name(&self) -> Result<String, GenerationError> {
        let continent = pick(&mut self.random.rng(), &Continent::ALL, "continents")?;
        self.by_continent(continent)
    }

    /// A real company headquartered on `continent`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn by_continent(&self, continent: Continent) -> Result<String, GenerationError> {
        let companies = lookup(CONTINENT_COMPANIES, |key| *key == continent)
            .or_else(|| {
                debug!(%continent, "no company table for continent; using global");
                global_companies()
            })
            .unwrap_or_default();
        pick(&mut self.random.rng(), companies, "companies").map(str::to_owned)
    }

    /// A real company from the `code` country table, or a global one when
    /// the country has no table.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn by_country(&self, code: &str) -> Result<String, GenerationError> {
        let wanted = code.trim();
        let companies = lookup(COUNTRY_COMPANIES, |key| key.eq_ignore_ascii_case(wanted))
            .or_else(|| {
                debug!(country = wanted, "no company table for country; using global");
                global_companies()
            })
            .unwrap_or_default();
        pick(&mut self.random.rng(), companies, "companies").map(str::to_owned)
    }

    /// Industry prefix, generic ending and optional corporate suffix, e.g.
    /// `Finex` or `Cyberon LLC`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn by_industry(
        &self,
        industry: Industry,
        with_suffix: bool,
    ) -> Result<String, GenerationError> {
        let prefixes = lookup(INDUSTRY_PREFIXES, |key| *key == industry).unwrap_or_else(|| {
            debug!(?industry, "no prefixes for industry; using global");
            GLOBAL_PREFIXES
        });
        let mut rng = self.random.rng();
        let prefix = pick(&mut rng, prefixes, "industry prefixes")?;
        finish(&mut rng, prefix.to_owned(), with_suffix)
    }

    /// A made-up name: four random letters, a generic ending and an
    /// optional corporate suffix, e.g. `Qorvify Ltd`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a table is empty.
    pub fn synthetic(&self, with_suffix: bool) -> Result<String, GenerationError> {
        let mut rng = self.random.rng();
        let mut stem = String::with_capacity(SYNTHETIC_STEM_LEN);
        stem.push(upper_letter(&mut rng));
        stem.push_str(&from_alphabet(&mut rng, LOWERCASE, SYNTHETIC_STEM_LEN - 1));
        finish(&mut rng, stem, with_suffix)
    }

    /// Picks uniformly from caller-supplied names.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when the list is empty
    /// or contains a blank entry.
    pub fn from_list<S>(&self, names: &[S]) -> Result<String, GenerationError>
    where
        S: AsRef<str>,
    {
        if names.iter().any(|name| name.as_ref().trim().is_empty()) {
            return Err(GenerationError::invalid_argument(
                "company names must not contain blank entries",
            ));
        }
        names
            .choose(&mut self.random.rng())
            .map(|name| name.as_ref().to_owned())
            .ok_or_else(|| GenerationError::invalid_argument("company names must not be empty"))
    }
}

/// Best-effort check that `name` looks like a company name: words of
/// letters and digits optionally ending in a known corporate suffix.
#[must_use]
pub fn is_valid_company_name(name: &str) -> bool {
    COMPANY_NAME.is_match(name.trim())
}

fn lookup<K>(
    table: &[(K, &'static [&'static str])],
    matches: impl Fn(&K) -> bool,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(key, _)| matches(key))
        .map(|(_, values)| *values)
}

fn global_companies() -> Option<&'static [&'static str]> {
    lookup(CONTINENT_COMPANIES, |key| *key == Continent::Global)
}

fn finish<R>(rng: &mut R, stem: String, with_suffix: bool) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    let term = pick(rng, GENERIC_TERMS, "generic terms")?;
    let mut name = stem;
    name.push_str(term);
    if with_suffix {
        name.push(' ');
        name.push_str(pick(rng, CORPORATE_SUFFIXES, "corporate suffixes")?);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn companies() -> CompanyGenerator {
        CompanyGenerator::new(Random::seeded(500))
    }

    fn table(continent: Continent) -> &'static [&'static str] {
        lookup(CONTINENT_COMPANIES, |key| *key == continent).expect("continent row")
    }

    #[test]
    fn every_continent_has_a_row() {
        for continent in Continent::ALL {
            assert!(!table(continent).is_empty(), "{continent}");
        }
    }

    #[rstest]
    #[case(Continent::Africa)]
    #[case(Continent::Asia)]
    #[case(Continent::Global)]
    fn continent_names_come_from_their_table(
        companies: CompanyGenerator,
        #[case] continent: Continent,
    ) {
        for _ in 0..20 {
            let name = companies.by_continent(continent).expect("populated");
            assert!(table(continent).contains(&name.as_str()), "{name}");
        }
    }

    #[rstest]
    fn known_countries_use_their_table(companies: CompanyGenerator) {
        let japanese = lookup(COUNTRY_COMPANIES, |key| *key == "JP").expect("JP row");
        for _ in 0..20 {
            let name = companies.by_country("jp").expect("populated");
            assert!(japanese.contains(&name.as_str()), "{name}");
        }
    }

    #[rstest]
    fn unknown_countries_fall_back_to_global(companies: CompanyGenerator) {
        for _ in 0..20 {
            let name = companies.by_country("ZZ").expect("fallback");
            assert!(table(Continent::Global).contains(&name.as_str()), "{name}");
        }
    }

    #[rstest]
    #[case(Industry::Tech)]
    #[case(Industry::Finance)]
    fn industry_names_start_with_an_industry_prefix(
        companies: CompanyGenerator,
        #[case] industry: Industry,
    ) {
        let prefixes = lookup(INDUSTRY_PREFIXES, |key| *key == industry).expect("industry row");
        for _ in 0..20 {
            let name = companies.by_industry(industry, false).expect("populated");
            assert!(prefixes.iter().any(|p| name.starts_with(p)), "{name}");
            assert!(GENERIC_TERMS.iter().any(|t| name.ends_with(t)), "{name}");
        }
    }

    #[rstest]
    fn suffixed_industry_names_end_in_a_corporate_suffix(companies: CompanyGenerator) {
        let prefixes = lookup(INDUSTRY_PREFIXES, |key| *key == Industry::Finance)
            .expect("industry row");
        for _ in 0..20 {
            let name = companies.by_industry(Industry::Finance, true).expect("populated");
            let (stem, suffix) = name.split_once(' ').expect("suffix separator");
            assert!(prefixes.iter().any(|p| stem.starts_with(p)), "{name}");
            assert!(GENERIC_TERMS.iter().any(|t| stem.ends_with(t)), "{name}");
            assert!(CORPORATE_SUFFIXES.contains(&suffix), "{name}");
        }
    }

    #[rstest]
    fn industries_without_a_row_use_global_prefixes(companies: CompanyGenerator) {
        for _ in 0..20 {
            let name = companies
                .by_industry(Industry::Healthcare, true)
                .expect("fallback");
            assert!(GLOBAL_PREFIXES.iter().any(|p| name.starts_with(p)), "{name}");
            assert!(
                CORPORATE_SUFFIXES.iter().any(|s| name.ends_with(s)),
                "{name}"
            );
            assert!(is_valid_company_name(&name), "{name}");
        }
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn synthetic_names_are_well_formed(companies: CompanyGenerator, #[case] with_suffix: bool) {
        for _ in 0..50 {
            let name = companies.synthetic(with_suffix).expect("populated");
            assert!(name.starts_with(|c: char| c.is_ascii_uppercase()), "{name}");
            assert_eq!(name.contains(' '), with_suffix, "{name}");
            assert!(is_valid_company_name(&name), "{name}");
        }
    }

    #[rstest]
    fn random_names_come_from_some_continent(companies: CompanyGenerator) {
        for _ in 0..20 {
            let name = companies.company_name().expect("populated");
            let known = Continent::ALL
                .into_iter()
                .any(|continent| table(continent).contains(&name.as_str()));
            assert!(known, "{name}");
        }
    }

    #[rstest]
    fn custom_lists_are_used(companies: CompanyGenerator) {
        let names = ["Initech", "Globex"];
        for _ in 0..10 {
            let name = companies.from_list(&names).expect("non-empty");
            assert!(names.contains(&name.as_str()));
        }
    }

    #[rstest]
    fn empty_custom_lists_are_rejected(companies: CompanyGenerator) {
        let empty: [&str; 0] = [];
        assert!(matches!(
            companies.from_list(&empty),
            Err(GenerationError::InvalidArgument { .. })
        ));
        assert!(matches!(
            companies.from_list(&["Initech", " "]),
            Err(GenerationError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    #[case("Acme Corp", true)]
    #[case("Techify Inc.", true)]
    #[case("Rolls-Royce", true)]
    #[case("Dangote Group", true)]
    #[case("", false)]
    #[case("-Acme", false)]
    #[case("Acme!", false)]
    fn company_name_validation(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_company_name(name), expected);
    }

    #[rstest]
    #[case("Africa", Continent::Africa)]
    #[case("GLOBAL", Continent::Global)]
    fn continents_parse_case_insensitively(#[case] raw: &str, #[case] expected: Continent) {
        assert_eq!(raw.parse::<Continent>(), Ok(expected));
    }
}
