//! Personal name composition from per-region tables.

use std::fmt;
use std::str::FromStr;

use rand::seq::IndexedRandom;

use crate::error::GenerationError;
use crate::random::{Random, pick};
use crate::tables::names::{MIDDLE_NAMES, RegionNames, region_names};

/// Cultural region selecting which name tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Yoruba, Igbo and Hausa names.
    Nigerian,
    /// Names common across the Arabic-speaking world.
    Arabic,
    /// Anglophone names.
    #[default]
    Western,
    /// Chinese, Japanese, Korean, Indian and Vietnamese names.
    Asian,
    /// Continental European names.
    European,
}

impl Region {
    /// Every region, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Nigerian,
        Self::Arabic,
        Self::Western,
        Self::Asian,
        Self::European,
    ];

    /// Lowercase identifier used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nigerian => "nigerian",
            Self::Arabic => "arabic",
            Self::Western => "western",
            Self::Asian => "asian",
            Self::European => "european",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GenerationError::invalid_argument(format!("unknown region: {value}")))
    }
}

/// Gender selecting the first-name table.
///
/// [`Gender::Unspecified`] always draws from the female table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Male first names.
    Male,
    /// Female first names.
    Female,
    /// No preference.
    #[default]
    Unspecified,
}

/// Shape of a composed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameFormat {
    /// `First Last`
    #[default]
    FirstLast,
    /// `Last, First`
    LastFirst,
    /// `First Middle Last`
    FirstMiddleLast,
    /// `Title First Last`
    TitleFirstLast,
}

/// Generates personal names.
///
/// # Example
///
/// ```
/// use data_mocker::{Gender, NameFormat, NameGenerator, Random, Region};
///
/// let names = NameGenerator::new(Random::seeded(3));
/// let name = names
///     .name(Region::Nigerian, Gender::Female, NameFormat::LastFirst)
///     .expect("tables are populated");
/// assert!(name.contains(", "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    random: Random,
    region: Region,
}

impl NameGenerator {
    /// Creates a generator whose default region is [`Region::Western`].
    #[must_use]
    pub const fn new(random: Random) -> Self {
        Self {
            random,
            region: Region::Western,
        }
    }

    /// Replaces the region used by [`NameGenerator::full_name`].
    #[must_use]
    pub const fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// The region used by [`NameGenerator::full_name`].
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Composes a name for `region` in the requested `format`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] if a backing table is
    /// empty.
    pub fn name(
        &self,
        region: Region,
        gender: Gender,
        format: NameFormat,
    ) -> Result<String, GenerationError> {
        let tables = region_names(region);
        let mut rng = self.random.rng();
        let first = pick(&mut rng, first_names(tables, gender), "first names")?;
        let last = pick(&mut rng, tables.last, "last names")?;

        Ok(match format {
            NameFormat::FirstLast => format!("{first} {last}"),
            NameFormat::LastFirst => format!("{last}, {first}"),
            NameFormat::FirstMiddleLast => {
                let middle = pick(&mut rng, MIDDLE_NAMES, "middle names")?;
                format!("{first} {middle} {last}")
            }
            NameFormat::TitleFirstLast => {
                let title = pick(&mut rng, tables.titles, "titles")?;
                format!("{title} {first} {last}")
            }
        })
    }

    /// A `First Last` name from the generator's default region.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn full_name(&self) -> Result<String, GenerationError> {
        self.name(self.region, Gender::Unspecified, NameFormat::FirstLast)
    }

    /// A first name for `region` and `gender`.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn first_name(&self, region: Region, gender: Gender) -> Result<String, GenerationError> {
        let names = first_names(region_names(region), gender);
        pick(&mut self.random.rng(), names, "first names").map(str::to_owned)
    }

    /// A last name for `region`.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn last_name(&self, region: Region) -> Result<String, GenerationError> {
        pick(&mut self.random.rng(), region_names(region).last, "last names").map(str::to_owned)
    }

    /// A middle name from the shared cross-region pool.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn middle_name(&self) -> Result<String, GenerationError> {
        pick(&mut self.random.rng(), MIDDLE_NAMES, "middle names").map(str::to_owned)
    }

    /// An honorific for `region`.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn title(&self, region: Region) -> Result<String, GenerationError> {
        pick(&mut self.random.rng(), region_names(region).titles, "titles").map(str::to_owned)
    }

    /// A `First Last` Nigerian name.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn nigerian(&self) -> Result<String, GenerationError> {
        self.default_shape(Region::Nigerian)
    }

    /// A `First Last` Arabic name.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn arabic(&self) -> Result<String, GenerationError> {
        self.default_shape(Region::Arabic)
    }

    /// A `First Last` Western name.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn western(&self) -> Result<String, GenerationError> {
        self.default_shape(Region::Western)
    }

    /// A `First Last` Asian name.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn asian(&self) -> Result<String, GenerationError> {
        self.default_shape(Region::Asian)
    }

    /// A `First Last` European name.
    ///
    /// # Errors
    ///
    /// See [`NameGenerator::name`].
    pub fn european(&self) -> Result<String, GenerationError> {
        self.default_shape(Region::European)
    }

    /// Composes `First Last` from caller-supplied tables.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when either list is
    /// empty or contains a blank entry.
    pub fn from_lists<S>(&self, first_names: &[S], last_names: &[S]) -> Result<String, GenerationError>
    where
        S: AsRef<str>,
    {
        for (what, list) in [("first names", first_names), ("last names", last_names)] {
            if list.is_empty() {
                return Err(GenerationError::invalid_argument(format!(
                    "{what} must not be empty"
                )));
            }
            if list.iter().any(|entry| entry.as_ref().trim().is_empty()) {
                return Err(GenerationError::invalid_argument(format!(
                    "{what} must not contain blank entries"
                )));
            }
        }
        let mut rng = self.random.rng();
        match (first_names.choose(&mut rng), last_names.choose(&mut rng)) {
            (Some(first), Some(last)) => Ok(format!("{} {}", first.as_ref(), last.as_ref())),
            _ => Err(GenerationError::invalid_argument("name lists must not be empty")),
        }
    }

    fn default_shape(&self, region: Region) -> Result<String, GenerationError> {
        self.name(region, Gender::Unspecified, NameFormat::FirstLast)
    }
}

/// Reports whether every part of `name` appears in `region`'s tables.
///
/// Titles, middle names and the `Last, First` comma are all accepted.
#[must_use]
pub fn belongs_to_region(name: &str, region: Region) -> bool {
    let tables = region_names(region);
    let mut parts = name
        .split_whitespace()
        .map(|part| part.trim_end_matches(','))
        .peekable();
    if parts.peek().is_none() {
        return false;
    }
    parts.all(|part| {
        [
            tables.male_first,
            tables.female_first,
            tables.last,
            tables.titles,
            MIDDLE_NAMES,
        ]
        .iter()
        .any(|table| table.contains(&part))
    })
}

const fn first_names(tables: &RegionNames, gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => tables.male_first,
        Gender::Female | Gender::Unspecified => tables.female_first,
    }
}
