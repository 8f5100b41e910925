use crate::{
    abstract_trait::{
        DynSchemaInitializer,
        comment::service::{DynCommentCommandService, DynCommentQueryService},
        product::service::{DynProductCommandService, DynProductQueryService},
    },
    repository::Repositories,
    service::{
        comment::{CommentCommandService, CommentQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub comment_query: DynCommentQueryService,
    pub comment_command: DynCommentCommandService,
    pub schema: DynSchemaInitializer,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("comment_query", &"CommentQueryService")
            .field("comment_command", &"CommentCommandService")
            .field("schema", &"SchemaInitializer")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps { pool, registry } = deps;

        let repos = Repositories::new(&pool);

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(repos.product_query, registry.clone()).await);

        let product_command: DynProductCommandService = Arc::new(
            ProductCommandService::new(repos.product_command, registry.clone()).await,
        );

        let comment_query: DynCommentQueryService =
            Arc::new(CommentQueryService::new(repos.comment_query, registry.clone()).await);

        let comment_command: DynCommentCommandService = Arc::new(
            CommentCommandService::new(repos.comment_command, registry.clone()).await,
        );

        Self {
            product_query,
            product_command,
            comment_query,
            comment_command,
            schema: repos.schema,
        }
    }
}
