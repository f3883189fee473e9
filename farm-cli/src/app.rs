//! Application wiring: store backends, wizard construction, session start.

use anyhow::{Context, Result};

use farm_core::store::MemoryStoreFactory;
use farm_core::{StoreConfig, StoreRegistry, Wizard};
use farm_store_file::FileStoreFactory;

use crate::api::MockApi;
use crate::session;

/// Registry with every backend this binary knows about.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(MemoryStoreFactory));
    registry.register(Box::new(FileStoreFactory));
    registry
}

/// Opens the configured store and runs the interactive session on
/// stdin/stdout until the user quits or submits.
pub async fn run(config: &StoreConfig) -> Result<()> {
    let registry = build_registry();
    let store = registry
        .create(config)
        .context("cannot open the draft store")?;

    let mut wizard = Wizard::new(store);
    let client = MockApi::default();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session::run(&mut wizard, &client, &mut stdin.lock(), &mut stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_both_backends() {
        assert_eq!(build_registry().available_backends(), vec!["file", "memory"]);
    }
}
