//! Mechanism Registry
//!
//! Maps well-known mechanism names to factories producing fresh instances.
//! Lookups are exact, case-sensitive matches; the selection algorithm only
//! talks to the registry, so new mechanisms plug in without touching it.

#![forbid(unsafe_code)]

use once_cell::sync::Lazy;
use std::{collections::BTreeMap, fmt};
use tracing::{trace, warn};

use crate::mechanism::{Anonymous, External, Mechanism, Plain};
use crate::{SaslError, SaslResult};

/// Produces a new mechanism instance per negotiation.
pub type MechanismFactory = Box<dyn Fn() -> Box<dyn Mechanism> + Send + Sync>;

/// Factory for any `Default`-constructible mechanism.
pub fn factory<M: Mechanism + Default + 'static>() -> MechanismFactory {
    Box::new(|| -> Box<dyn Mechanism> { Box::new(M::default()) })
}

static DEFAULT_REGISTRY: Lazy<MechanismRegistry> = Lazy::new(MechanismRegistry::with_defaults);

/// Registry holding `PLAIN`, `ANONYMOUS` and `EXTERNAL`.
pub fn default_registry() -> &'static MechanismRegistry {
    &DEFAULT_REGISTRY
}

#[derive(Default)]
pub struct MechanismRegistry {
    factories: BTreeMap<String, MechanismFactory>,
}

impl fmt::Debug for MechanismRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}

impl MechanismRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { factories: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.insert(Plain::NAME, factory::<Plain>());
        reg.insert(Anonymous::NAME, factory::<Anonymous>());
        reg.insert(External::NAME, factory::<External>());
        reg
    }

    fn insert(&mut self, name: &str, factory: MechanismFactory) {
        self.factories.insert(name.to_owned(), factory);
    }

    /// Register a factory; fails if the name is already taken.
    pub fn register(&mut self, name: impl Into<String>, factory: MechanismFactory) -> SaslResult<()> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(SaslError::DuplicateMechanism(name));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Factory for `name`, or `None` for empty and unknown names.
    pub fn find_factory(&self, name: &str) -> Option<&MechanismFactory> {
        if name.is_empty() {
            warn!("No SASL mechanism name was specified");
            return None;
        }
        let factory = self.factories.get(name);
        if factory.is_none() {
            trace!(mechanism = name, "no local implementation for offered SASL mechanism");
        }
        factory
    }

    /// Fresh instance of `name`, if known.
    pub fn create(&self, name: &str) -> Option<Box<dyn Mechanism>> {
        self.find_factory(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
