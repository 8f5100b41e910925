use crate::di::{DependenciesInject, DependenciesInjectDeps};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));

        let deps = DependenciesInjectDeps {
            pool,
            registry: registry.clone(),
        };

        let di_container = DependenciesInject::new(deps).await;

        Self {
            di_container,
            registry,
        }
    }
}
