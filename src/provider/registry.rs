//! Service registry mapping provider names to handle constructors

use std::collections::HashMap;

use tracing::debug;

use super::services::{DefinedService, BUILTIN_SERVICES};
use super::VideoService;

/// Constructor for a fresh, unconfigured service handle
pub type ServiceFactory = Box<dyn Fn() -> Box<dyn VideoService> + Send + Sync>;

/// Registry of available video services
///
/// Maps a service name to a factory producing one handle per request.
/// Registering a name twice replaces the earlier factory, so callers can
/// override a built-in service with their own implementation.
#[derive(Default)]
pub struct ServiceRegistry {
    factories: HashMap<String, ServiceFactory>,
}

impl ServiceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the built-in services
    pub fn with_builtin_services() -> Self {
        let mut registry = Self::new();
        for definition in BUILTIN_SERVICES {
            registry.register(definition.name, move || {
                Box::new(DefinedService::new(definition))
            });
        }
        registry
    }

    /// Register a service factory under a name; last registration wins
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn VideoService> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Create a fresh handle for a service, if one is registered
    pub fn create(&self, name: &str) -> Option<Box<dyn VideoService>> {
        let factory = self.factories.get(name)?;
        debug!(service = name, "created service handle");
        Some(factory())
    }

    /// Check if a service is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Names of all registered services
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|s| s.as_str())
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("ServiceRegistry")
            .field("services", &names)
            .finish()
    }
}
