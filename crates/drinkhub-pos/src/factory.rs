//! Provider-name-keyed adapter registry.

use std::collections::BTreeMap;
use std::sync::RwLock;

use drinkhub_core::{PosClientSettings, PosConfig, PosCredentials};

use crate::adapter::PosAdapter;
use crate::clover::CloverAdapter;
use crate::error::PosError;
use crate::square::SquareAdapter;
use crate::toast::ToastAdapter;

/// Builds a vendor adapter from credentials and per-integration config.
pub type AdapterCtor =
    Box<dyn Fn(PosCredentials, PosConfig) -> Result<Box<dyn PosAdapter>, PosError> + Send + Sync>;

/// Registry mapping a lower-cased provider name to an adapter constructor.
///
/// Read-mostly: the writers are startup registration and test
/// setup/teardown. A `RwLock` keeps post-startup registration safe in a
/// multi-threaded host without penalizing the hot `create_adapter` path.
pub struct AdapterFactory {
    registry: RwLock<BTreeMap<String, AdapterCtor>>,
}

impl AdapterFactory {
    /// An empty registry, for tests that register their own doubles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(BTreeMap::new()),
        }
    }

    /// A registry with the built-in vendors registered. Called once at
    /// process start; nothing registers implicitly at module load.
    #[must_use]
    pub fn with_default_adapters(settings: PosClientSettings) -> Self {
        let factory = Self::new();

        let square_settings = settings.clone();
        factory.register_adapter(
            "square",
            Box::new(move |credentials, config| {
                Ok(Box::new(SquareAdapter::new(
                    credentials,
                    config,
                    square_settings.clone(),
                )))
            }),
        );
        factory.register_adapter(
            "toast",
            Box::new(|credentials, config| Ok(Box::new(ToastAdapter::new(credentials, config)))),
        );
        factory.register_adapter(
            "clover",
            Box::new(|credentials, config| Ok(Box::new(CloverAdapter::new(credentials, config)))),
        );

        factory
    }

    /// Builds an adapter for `provider` (matched case-insensitively).
    ///
    /// # Errors
    ///
    /// Returns [`PosError::UnsupportedProvider`] naming the attempted
    /// provider and the full supported list when no constructor is
    /// registered.
    pub fn create_adapter(
        &self,
        provider: &str,
        credentials: PosCredentials,
        config: PosConfig,
    ) -> Result<Box<dyn PosAdapter>, PosError> {
        let key = provider.to_lowercase();
        let registry = self.read_registry();
        let Some(ctor) = registry.get(&key) else {
            return Err(PosError::UnsupportedProvider {
                provider: provider.to_owned(),
                supported: registry.keys().cloned().collect::<Vec<_>>().join(", "),
            });
        };
        ctor(credentials, config)
    }

    /// Registers (or replaces) the constructor for a provider name. Later
    /// registrations win, which is what test doubles rely on.
    pub fn register_adapter(&self, provider: &str, ctor: AdapterCtor) {
        self.write_registry().insert(provider.to_lowercase(), ctor);
    }

    /// Removes a provider's constructor. A name that was never registered is
    /// a no-op, not an error.
    pub fn unregister_adapter(&self, provider: &str) {
        self.write_registry().remove(&provider.to_lowercase());
    }

    /// The currently registered provider names, sorted.
    #[must_use]
    pub fn supported_providers(&self) -> Vec<String> {
        self.read_registry().keys().cloned().collect()
    }

    #[must_use]
    pub fn is_provider_supported(&self, provider: &str) -> bool {
        self.read_registry().contains_key(&provider.to_lowercase())
    }

    fn read_registry(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, AdapterCtor>> {
        self.registry
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_registry(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, AdapterCtor>> {
        self.registry
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for AdapterFactory {
    fn default() -> Self {
        Self::new()
    }
}
