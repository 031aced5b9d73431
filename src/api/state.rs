//! Application state for the Payroll Engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::PayrollService;
use crate::store::PayrollStore;

/// Shared application state.
///
/// Holds the loaded payroll configuration and the store every handler reads
/// from and writes to.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn PayrollStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn PayrollStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll store.
    pub fn store(&self) -> &dyn PayrollStore {
        self.store.as_ref()
    }

    /// Builds a payroll service over this state's store and configuration.
    pub fn service(&self) -> PayrollService {
        PayrollService::new(self.store.clone(), self.config.config().clone())
    }
}
