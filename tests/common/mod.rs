//! Common test utilities

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    routing::{get, post},
    Router,
};
use blog_api::app::GroupRoutes;
use blog_api::{AppBuilder, Application, RouteTable};
use http_body_util::BodyExt;
use serde_json::Value;
use utoipa::OpenApi;

pub const ORIGIN: &str = "https://example.com";

#[utoipa::path(
    post,
    path = "/login",
    responses((status = 200, description = "Credentials accepted"))
)]
async fn login() -> &'static str {
    "logged in"
}

#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Current user"))
)]
async fn me() -> &'static str {
    "me"
}

#[derive(OpenApi)]
#[openapi(paths(login))]
struct AuthApi;

#[derive(OpenApi)]
#[openapi(paths(me))]
struct UsersApi;

/// Application with documented auth and users groups and an empty posts group
pub fn setup_app() -> Application {
    let auth = GroupRoutes::new(Router::new().route("/login", post(login)))
        .with_api(AuthApi::openapi());
    let users =
        GroupRoutes::new(Router::new().route("/me", get(me))).with_api(UsersApi::openapi());

    AppBuilder::new([ORIGIN])
        .routes(RouteTable::standard(auth, users, Router::new()))
        .build()
        .expect("Failed to build application")
}

/// GET request carrying the configured Origin header
pub fn get_with_origin(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Origin", ORIGIN)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Body is not JSON")
}
