//! Cross-origin policy

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use super::BuildError;

/// Origins allowed to read responses with credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn parse<I, S>(origins: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for origin in origins {
            let origin = origin.as_ref().trim();
            if origin == "*" {
                return Err(BuildError::InvalidOrigin(origin.to_string()));
            }
            let value = HeaderValue::from_str(origin)
                .map_err(|_| BuildError::InvalidOrigin(origin.to_string()))?;
            parsed.push(value);
        }

        if parsed.is_empty() {
            return Err(BuildError::NoOrigins);
        }
        Ok(Self(parsed))
    }

    pub fn as_slice(&self) -> &[HeaderValue] {
        &self.0
    }

    /// One policy for every route: the listed origins with credentials,
    /// any method and any request header.
    ///
    /// Browsers refuse `*` alongside credentials, so methods and headers
    /// are mirrored from the preflight request instead.
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.0.iter().cloned()))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }
}
