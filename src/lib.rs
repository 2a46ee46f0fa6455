//! blog_api Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod app;
pub mod config;
mod error;
pub mod openapi;
pub mod state;

pub use app::{AppBuilder, Application, BuildError, RouteGroup, RouteTable};
pub use config::Config;
pub use error::{AppError, AppResult, ErrorResponse};
