//! Provider registry behind the [`crate::DataMocker`] facade.
//!
//! Built-in categories live in typed fields, so resolving one never needs a
//! downcast. The string-keyed map is reserved for caller-supplied custom
//! providers, which are downcast to the type the caller asks for.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::address::AddressGenerator;
use crate::company::CompanyGenerator;
use crate::config::MockerConfig;
use crate::date::{DateGenerator, SharedClock};
use crate::email::EmailGenerator;
use crate::error::RegistryError;
use crate::name::NameGenerator;
use crate::number::NumberGenerator;
use crate::phone::PhoneNumberGenerator;
use crate::string::StringGenerator;
use crate::username::UsernameGenerator;

/// Registry keys of the built-in categories.
pub mod keys {
    /// Personal names.
    pub const NAME: &str = "name";
    /// Calendar dates.
    pub const DATE: &str = "date";
    /// Numbers and booleans.
    pub const NUMBER: &str = "number";
    /// Usernames.
    pub const USERNAME: &str = "username";
    /// Postal addresses.
    pub const ADDRESS: &str = "address";
    /// Phone numbers.
    pub const PHONE_NUMBER: &str = "phoneNumber";
    /// Company names.
    pub const COMPANY: &str = "company";
    /// Strings, text and identifiers.
    pub const STRING: &str = "string";
    /// Email addresses.
    pub const EMAIL: &str = "email";

    /// Every built-in key.
    pub const BUILT_IN: [&str; 9] = [
        NAME,
        DATE,
        NUMBER,
        USERNAME,
        ADDRESS,
        PHONE_NUMBER,
        COMPANY,
        STRING,
        EMAIL,
    ];
}

/// A custom provider stored under a caller-chosen key.
///
/// Any `'static` type that is `Send + Sync + Debug` qualifies.
pub trait DataProvider: Any + Send + Sync + fmt::Debug {
    /// Upcasts to [`Any`] so the registry can downcast to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl<T> DataProvider for T
where
    T: Any + Send + Sync + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Replacement providers applied when the registry is built.
///
/// Unset fields are filled by built-in generators configured from
/// [`MockerConfig`].
///
/// # Example
///
/// ```
/// use data_mocker::{NameGenerator, ProviderOverrides, Random, Region};
///
/// let overrides = ProviderOverrides {
///     name: Some(NameGenerator::new(Random::seeded(1)).with_region(Region::Asian)),
///     ..ProviderOverrides::default()
/// }
/// .with_custom("greeting", "hello");
/// assert_eq!(overrides.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    /// Replacement name generator.
    pub name: Option<NameGenerator>,
    /// Replacement date generator.
    pub date: Option<DateGenerator>,
    /// Replacement number generator.
    pub number: Option<NumberGenerator>,
    /// Replacement username generator.
    pub username: Option<UsernameGenerator>,
    /// Replacement address generator.
    pub address: Option<AddressGenerator>,
    /// Replacement phone number generator.
    pub phone_number: Option<PhoneNumberGenerator>,
    /// Replacement company generator.
    pub company: Option<CompanyGenerator>,
    /// Replacement string generator.
    pub string: Option<StringGenerator>,
    /// Replacement email generator.
    pub email: Option<EmailGenerator>,
    /// Custom providers keyed by name.
    pub custom: BTreeMap<String, Arc<dyn DataProvider>>,
}

impl ProviderOverrides {
    /// Adds a custom provider under `key`, replacing any earlier one.
    #[must_use]
    pub fn with_custom(mut self, key: impl Into<String>, provider: impl DataProvider) -> Self {
        self.custom.insert(key.into(), Arc::new(provider));
        self
    }

    /// Number of replaced built-ins plus custom providers.
    #[must_use]
    pub fn len(&self) -> usize {
        let replaced = [
            self.name.is_some(),
            self.date.is_some(),
            self.number.is_some(),
            self.username.is_some(),
            self.address.is_some(),
            self.phone_number.is_some(),
            self.company.is_some(),
            self.string.is_some(),
            self.email.is_some(),
        ];
        replaced.iter().filter(|set| **set).count() + self.custom.len()
    }

    /// Returns `true` when nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A provider resolved by key.
#[derive(Debug, Clone, Copy)]
pub enum Provider<'a> {
    /// The name generator.
    Name(&'a NameGenerator),
    /// The date generator.
    Date(&'a DateGenerator),
    /// The number generator.
    Number(&'a NumberGenerator),
    /// The username generator.
    Username(&'a UsernameGenerator),
    /// The address generator.
    Address(&'a AddressGenerator),
    /// The phone number generator.
    PhoneNumber(&'a PhoneNumberGenerator),
    /// The company generator.
    Company(&'a CompanyGenerator),
    /// The string generator.
    String(&'a StringGenerator),
    /// The email generator.
    Email(&'a EmailGenerator),
    /// A caller-supplied provider.
    Custom(&'a dyn DataProvider),
}

/// The finished, immutable set of providers.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    name: NameGenerator,
    date: DateGenerator,
    number: NumberGenerator,
    username: UsernameGenerator,
    address: AddressGenerator,
    phone_number: PhoneNumberGenerator,
    company: CompanyGenerator,
    string: StringGenerator,
    email: EmailGenerator,
    custom: BTreeMap<String, Arc<dyn DataProvider>>,
}

impl ProviderRegistry {
    /// Builds the registry, filling every key `overrides` leaves unset with
    /// a built-in generator configured from `config`.
    ///
    /// The built-in email generator composes whichever name and company
    /// generators end up registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReservedKey`] when a custom provider uses a
    /// built-in key.
    pub fn build(
        config: &MockerConfig,
        clock: SharedClock,
        overrides: ProviderOverrides,
    ) -> Result<Self, RegistryError> {
        if let Some(key) = overrides
            .custom
            .keys()
            .find(|key| keys::BUILT_IN.contains(&key.as_str()))
        {
            return Err(RegistryError::ReservedKey { key: key.clone() });
        }

        let override_count = overrides.len();
        let random = config.random();
        let ProviderOverrides {
            name: name_override,
            date: date_override,
            number: number_override,
            username: username_override,
            address: address_override,
            phone_number: phone_override,
            company: company_override,
            string: string_override,
            email: email_override,
            custom,
        } = overrides;

        let name = name_override.unwrap_or_else(|| {
            NameGenerator::new(random.clone()).with_region(config.name_region())
        });
        let company = company_override.unwrap_or_else(|| CompanyGenerator::new(random.clone()));
        let email = email_override.unwrap_or_else(|| {
            EmailGenerator::new(random.clone(), name.clone(), company.clone())
        });

        let registry = Self {
            date: date_override.unwrap_or_else(|| DateGenerator::new(random.clone(), clock)),
            number: number_override.unwrap_or_else(|| NumberGenerator::new(random.clone())),
            username: username_override.unwrap_or_else(|| UsernameGenerator::new(random.clone())),
            address: address_override.unwrap_or_else(|| {
                AddressGenerator::new(random.clone())
                    .with_resolved_country(config.address_country())
            }),
            phone_number: phone_override.unwrap_or_else(|| {
                PhoneNumberGenerator::new(random.clone())
                    .with_resolved_country(config.phone_country())
            }),
            string: string_override.unwrap_or_else(|| StringGenerator::new(random.clone())),
            name,
            company,
            email,
            custom,
        };
        debug!(
            overrides = override_count,
            custom = registry.custom.len(),
            seeded = config.seed().is_some(),
            "provider registry built"
        );
        Ok(registry)
    }

    /// Resolves `key` to a built-in or custom provider.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProviderNotFound`] for an unknown key.
    pub fn get(&self, key: &str) -> Result<Provider<'_>, RegistryError> {
        let provider = match key {
            keys::NAME => Provider::Name(&self.name),
            keys::DATE => Provider::Date(&self.date),
            keys::NUMBER => Provider::Number(&self.number),
            keys::USERNAME => Provider::Username(&self.username),
            keys::ADDRESS => Provider::Address(&self.address),
            keys::PHONE_NUMBER => Provider::PhoneNumber(&self.phone_number),
            keys::COMPANY => Provider::Company(&self.company),
            keys::STRING => Provider::String(&self.string),
            keys::EMAIL => Provider::Email(&self.email),
            other => Provider::Custom(self.custom_provider(other)?),
        };
        Ok(provider)
    }

    /// Resolves a custom provider and downcasts it to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProviderNotFound`] for an unknown key and
    /// [`RegistryError::ProviderTypeMismatch`] when the provider is not a `T`.
    pub fn custom<T: Any>(&self, key: &str) -> Result<&T, RegistryError> {
        self.custom_provider(key)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| RegistryError::ProviderTypeMismatch {
                key: key.to_owned(),
            })
    }

    /// Returns `true` if `key` names a built-in or custom provider.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        keys::BUILT_IN.contains(&key) || self.custom.contains_key(key)
    }

    /// Every registered key: built-ins first, then custom keys in order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        keys::BUILT_IN
            .into_iter()
            .chain(self.custom.keys().map(String::as_str))
            .collect()
    }

    fn custom_provider(&self, key: &str) -> Result<&dyn DataProvider, RegistryError> {
        self.custom
            .get(key)
            .map(AsRef::as_ref)
            .ok_or_else(|| RegistryError::ProviderNotFound {
                key: key.to_owned(),
            })
    }

    pub(crate) const fn name(&self) -> &NameGenerator {
        &self.name
    }

    pub(crate) const fn date(&self) -> &DateGenerator {
        &self.date
    }

    pub(crate) const fn number(&self) -> &NumberGenerator {
        &self.number
    }

    pub(crate) const fn username(&self) -> &UsernameGenerator {
        &self.username
    }

    pub(crate) const fn address(&self) -> &AddressGenerator {
        &self.address
    }

    pub(crate) const fn phone_number(&self) -> &PhoneNumberGenerator {
        &self.phone_number
    }

    pub(crate) const fn company(&self) -> &CompanyGenerator {
        &self.company
    }

    pub(crate) const fn string(&self) -> &StringGenerator {
        &self.string
    }

    pub(crate) const fn email(&self) -> &EmailGenerator {
        &self.email
    }
}
