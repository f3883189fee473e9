use std::collections::HashMap;

use super::draft_store::{DraftStore, StoreError};

/// Backend-agnostic store configuration.
///
/// `backend` must match the [`StoreFactory::backend_name`] of a registered
/// factory.  `location` is passed through to that factory unchanged; its
/// meaning is entirely backend-specific.
///
/// | backend  | location examples            |
/// |----------|------------------------------|
/// | `file`   | `.`, `/home/me/.local/share` |
/// | `memory` | ignored                      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"file"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub location: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            location: String::new(),
        }
    }
}

/// One implementation per storage backend.  Each backend crate exports a
/// single unit struct that implements this trait and is registered with a
/// [`StoreRegistry`] at startup.
pub trait StoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the backing storage and return a ready-to-use
    /// store. Implementations are free to create directories or files
    /// inside this method.
    fn create(&self, config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError>;
}

/// Registry of [`StoreFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `StoreRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` whenever a new store is needed.
pub struct StoreRegistry {
    factories: HashMap<&'static str, Box<dyn StoreFactory>>,
}

impl StoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory.
    ///
    /// If a factory with the same [`StoreFactory::backend_name`] is
    /// already present it is silently replaced.
    pub fn register(&mut self, factory: Box<dyn StoreFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend` and return
    /// the store it produces.
    ///
    /// # Errors
    /// * [`StoreError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub fn create(&self, config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError> {
        let factory = self.factories.get(config.backend.as_str()).ok_or_else(|| {
            StoreError::Configuration(format!(
                "unknown backend '{}'; available: {:?}",
                config.backend,
                self.available_backends()
            ))
        })?;

        factory.create(config)
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::models::Draft;

    use super::super::draft_store::DraftStore;
    use super::{StoreConfig, StoreError, StoreFactory, StoreRegistry};

    // ── stub store ───────────────────────────────────────────────────────
    // The tests never persist anything; they only verify that the registry
    // routes to the correct factory.
    struct StubStore;

    impl DraftStore for StubStore {
        fn load(&self) -> Draft {
            Draft::default()
        }
        fn save(&self, _draft: &Draft) -> Result<(), StoreError> {
            Ok(())
        }
        fn clear(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    /// A factory whose `create` flips an `AtomicBool` and returns a
    /// [`StubStore`].  The flag lets tests prove that `create` was
    /// actually called.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    impl StoreFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        fn create(&self, _config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubStore))
        }
    }

    /// A factory that always fails, used to verify that the registry
    /// surfaces errors from the underlying factory.
    struct FailingFactory;

    impl StoreFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        fn create(&self, _config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError> {
            Err(StoreError::Configuration(
                "intentional failure".to_string(),
            ))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn StoreFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    #[test]
    fn default_config_is_memory() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.backend, "memory");
        assert_eq!(cfg.location, "");
    }

    #[test]
    fn new_registry_has_no_backends() {
        assert!(StoreRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = StoreRegistry::new();
        // Register in reverse alphabetical order on purpose.
        let (f1, _) = stub_factory("memory");
        let (f2, _) = stub_factory("file");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["file", "memory"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = StoreRegistry::new();
        let (old, _) = stub_factory("file");
        let (new, _) = stub_factory("file");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["file"]);
    }

    #[test]
    fn create_calls_matching_factory() {
        let mut reg = StoreRegistry::new();
        let (factory, called) = stub_factory("file");
        reg.register(factory);

        let config = StoreConfig {
            backend: "file".to_string(),
            location: ".".to_string(),
        };

        let result = reg.create(&config);

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(
            called.load(Ordering::SeqCst),
            "factory create was not invoked"
        );
    }

    #[test]
    fn unknown_backend_returns_configuration_error() {
        let reg = StoreRegistry::new();
        let config = StoreConfig {
            backend: "nope".to_string(),
            location: "x".to_string(),
        };
        assert!(matches!(
            reg.create(&config),
            Err(StoreError::Configuration(_))
        ));
    }

    #[test]
    fn configuration_error_names_requested_and_available_backends() {
        let mut reg = StoreRegistry::new();
        let (f, _) = stub_factory("memory");
        reg.register(f);

        let config = StoreConfig {
            backend: "file".to_string(),
            location: "x".to_string(),
        };

        match reg.create(&config) {
            Err(StoreError::Configuration(msg)) => {
                assert!(
                    msg.contains("file"),
                    "error should name the requested backend"
                );
                assert!(
                    msg.contains("memory"),
                    "error should list available backends"
                );
            }
            other => panic!("expected Configuration error, got {:#?}", other.err()),
        }
    }

    #[test]
    fn create_propagates_factory_error() {
        let mut reg = StoreRegistry::new();
        reg.register(Box::new(FailingFactory));

        let config = StoreConfig {
            backend: "failing".to_string(),
            location: "x".to_string(),
        };

        assert!(matches!(
            reg.create(&config),
            Err(StoreError::Configuration(msg)) if msg == "intentional failure"
        ));
    }
}
