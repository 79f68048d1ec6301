//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::PrdService;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub prd_service: PrdService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new() -> Self {
        Self::with_deps(Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(fs: Arc<dyn FileSystem>) -> Self {
        let prd_service = PrdService::new(Arc::clone(&fs));

        Self { fs, prd_service }
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
