//! The `DataMocker` facade.

use std::any::Any;
use std::sync::Arc;

use mockable::DefaultClock;

use crate::address::AddressGenerator;
use crate::company::CompanyGenerator;
use crate::config::MockerConfig;
use crate::date::{DateGenerator, SharedClock};
use crate::email::EmailGenerator;
use crate::error::RegistryError;
use crate::name::NameGenerator;
use crate::number::NumberGenerator;
use crate::phone::PhoneNumberGenerator;
use crate::registry::{Provider, ProviderOverrides, ProviderRegistry};
use crate::string::StringGenerator;
use crate::username::UsernameGenerator;

/// One typed accessor per data category.
///
/// # Example
///
/// ```
/// use data_mocker::{DataMocker, MockerConfig, ProviderOverrides};
///
/// let mocker = DataMocker::new(
///     MockerConfig::default().with_seed(42),
///     ProviderOverrides::default(),
/// )
/// .expect("no custom providers");
///
/// let age = mocker.number().integer(18, 65).expect("valid range");
/// assert!((18..=65).contains(&age));
/// assert!(mocker.email().personal().expect("populated tables").contains('@'));
/// ```
#[derive(Debug, Clone)]
pub struct DataMocker {
    config: MockerConfig,
    registry: ProviderRegistry,
}

impl DataMocker {
    /// Builds a mocker whose "today" is the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReservedKey`] when a custom provider uses a
    /// built-in key.
    pub fn new(config: MockerConfig, overrides: ProviderOverrides) -> Result<Self, RegistryError> {
        Self::with_clock(config, Arc::new(DefaultClock), overrides)
    }

    /// Builds a mocker reading "today" from `clock`.
    ///
    /// # Errors
    ///
    /// See [`DataMocker::new`].
    pub fn with_clock(
        config: MockerConfig,
        clock: SharedClock,
        overrides: ProviderOverrides,
    ) -> Result<Self, RegistryError> {
        let registry = ProviderRegistry::build(&config, clock, overrides)?;
        Ok(Self { config, registry })
    }

    /// Names.
    #[must_use]
    pub const fn name(&self) -> &NameGenerator {
        self.registry.name()
    }

    /// Dates.
    #[must_use]
    pub const fn date(&self) -> &DateGenerator {
        self.registry.date()
    }

    /// Numbers.
    #[must_use]
    pub const fn number(&self) -> &NumberGenerator {
        self.registry.number()
    }

    /// Usernames.
    #[must_use]
    pub const fn username(&self) -> &UsernameGenerator {
        self.registry.username()
    }

    /// Addresses.
    #[must_use]
    pub const fn address(&self) -> &AddressGenerator {
        self.registry.address()
    }

    /// Phone numbers.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumberGenerator {
        self.registry.phone_number()
    }

    /// Company names.
    #[must_use]
    pub const fn company(&self) -> &CompanyGenerator {
        self.registry.company()
    }

    /// Strings.
    #[must_use]
    pub const fn string(&self) -> &StringGenerator {
        self.registry.string()
    }

    /// Emails.
    #[must_use]
    pub const fn email(&self) -> &EmailGenerator {
        self.registry.email()
    }

    /// Resolves any registered key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ProviderNotFound`] for an unknown key.
    pub fn provider(&self, key: &str) -> Result<Provider<'_>, RegistryError> {
        self.registry.get(key)
    }

    /// Resolves a custom provider as `T`.
    ///
    /// # Errors
    ///
    /// See [`ProviderRegistry::custom`].
    pub fn custom<T: Any>(&self, key: &str) -> Result<&T, RegistryError> {
        self.registry.custom(key)
    }

    /// The configuration the built-ins were created from.
    #[must_use]
    pub const fn config(&self) -> &MockerConfig {
        &self.config
    }

    /// The underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }
}
