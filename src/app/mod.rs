//! Application assembly
//!
//! `AppBuilder` collects the static policy (allowed origins, route table,
//! schema metadata) and `build` turns it into a finished `Application`
//! exactly once.

mod cors;
mod groups;

pub use cors::AllowedOrigins;
pub use groups::{
    GroupRoutes, RouteGroup, RouteTable, AUTH_PREFIX, AUTH_TAG, POSTS_PREFIX, POSTS_TAG,
    USERS_PREFIX, USERS_TAG,
};

use axum::{middleware, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::api::routes::RootApi;
use crate::config::Config;
use crate::openapi::{ApiMetadata, DocumentedGroup, RouteCatalog, SchemaService};
use crate::state::AppState;

/// Startup errors raised while assembling the application
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No allowed origins configured")]
    NoOrigins,

    #[error("Invalid allowed origin: {0:?}")]
    InvalidOrigin(String),

    #[error("Invalid route group prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("Route group prefix is reserved by a root endpoint: {0}")]
    ReservedPrefix(String),

    #[error("Route group prefix mounted twice: {0}")]
    DuplicatePrefix(String),

    #[error("Route group {0} has an empty tag")]
    EmptyTag(String),
}

/// Immutable description of the application to build
#[derive(Debug)]
pub struct AppBuilder {
    origins: Vec<String>,
    routes: RouteTable,
    metadata: ApiMetadata,
}

impl AppBuilder {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
            routes: RouteTable::new(),
            metadata: ApiMetadata::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.allowed_origins())
    }

    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn metadata(mut self, metadata: ApiMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Validate the policy and produce the finished application
    pub fn build(self) -> Result<Application, BuildError> {
        let origins = AllowedOrigins::parse(&self.origins)?;
        self.routes.validate()?;

        let mut catalog = RouteCatalog::new(RootApi::openapi());
        for group in self.routes.groups() {
            if let Some(api) = group.api() {
                catalog.push(DocumentedGroup {
                    prefix: group.prefix().to_string(),
                    tag: group.tag().to_string(),
                    api: api.clone(),
                });
            }
        }

        let state = AppState::new(SchemaService::new(self.metadata, catalog));

        let mut router: Router = api::create_router().with_state(state.clone());
        for group in self.routes.into_groups() {
            tracing::info!(prefix = group.prefix(), tag = group.tag(), "Mounting route group");
            let prefix = group.prefix().to_string();
            router = router.nest(&prefix, group.into_router());
        }

        // Layers run outermost-last: cors -> request id -> trace -> logging -> handler
        let router = router
            .fallback(api::routes::not_found)
            .layer(middleware::from_fn(api::middleware::logging_middleware))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(origins.layer());

        Ok(Application {
            router,
            state,
            origins,
        })
    }
}

/// The assembled HTTP application
#[derive(Debug, Clone)]
pub struct Application {
    router: Router,
    state: AppState,
    origins: AllowedOrigins,
}

impl Application {
    /// A router handle ready to be served or driven with `oneshot`
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn into_router(self) -> Router {
        self.router
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.origins
    }
}
