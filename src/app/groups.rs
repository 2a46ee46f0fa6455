//! Route groups
//!
//! The table of (prefix, tag, router) entries mounted by the application.

use axum::Router;
use utoipa::openapi::OpenApi;

use super::BuildError;
use crate::api::routes::{HEALTH_PATH, OPENAPI_PATH};

pub const AUTH_PREFIX: &str = "/api/auth";
pub const USERS_PREFIX: &str = "/api/users";
pub const POSTS_PREFIX: &str = "/api/posts";

pub const AUTH_TAG: &str = "Auth";
pub const USERS_TAG: &str = "Users";
pub const POSTS_TAG: &str = "Posts";

/// Endpoints contributed by a group, plus their documentation
#[derive(Debug, Default)]
pub struct GroupRoutes {
    router: Router,
    api: Option<OpenApi>,
}

impl GroupRoutes {
    pub fn new(router: Router) -> Self {
        Self { router, api: None }
    }

    /// Attach the OpenAPI fragment describing this group's endpoints.
    /// Paths in the fragment are relative to the group prefix.
    pub fn with_api(mut self, api: OpenApi) -> Self {
        self.api = Some(api);
        self
    }
}

impl From<Router> for GroupRoutes {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}

/// One mounted route group
#[derive(Debug)]
pub struct RouteGroup {
    prefix: String,
    tag: String,
    routes: GroupRoutes,
}

impl RouteGroup {
    pub fn new(
        prefix: impl Into<String>,
        tag: impl Into<String>,
        routes: impl Into<GroupRoutes>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            tag: tag.into(),
            routes: routes.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn api(&self) -> Option<&OpenApi> {
        self.routes.api.as_ref()
    }

    pub(crate) fn into_router(self) -> Router {
        self.routes.router
    }

    fn validate(&self) -> Result<(), BuildError> {
        let prefix = self.prefix.as_str();
        let well_formed = prefix.len() > 1
            && prefix.starts_with('/')
            && !prefix.ends_with('/')
            && !prefix.contains(|c: char| matches!(c, '*' | ':' | '{' | '}' | ' '));

        if !well_formed {
            return Err(BuildError::InvalidPrefix(self.prefix.clone()));
        }
        if prefix == HEALTH_PATH || prefix == OPENAPI_PATH {
            return Err(BuildError::ReservedPrefix(self.prefix.clone()));
        }
        if self.tag.trim().is_empty() {
            return Err(BuildError::EmptyTag(self.prefix.clone()));
        }
        Ok(())
    }
}

/// Ordered route groups, mounted in table order
#[derive(Debug, Default)]
pub struct RouteTable {
    groups: Vec<RouteGroup>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The blog API layout: auth, then users, then posts
    pub fn standard(
        auth: impl Into<GroupRoutes>,
        users: impl Into<GroupRoutes>,
        posts: impl Into<GroupRoutes>,
    ) -> Self {
        Self::new()
            .with(RouteGroup::new(AUTH_PREFIX, AUTH_TAG, auth))
            .with(RouteGroup::new(USERS_PREFIX, USERS_TAG, users))
            .with(RouteGroup::new(POSTS_PREFIX, POSTS_TAG, posts))
    }

    pub fn with(mut self, group: RouteGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    /// Check every entry before anything is mounted
    pub fn validate(&self) -> Result<(), BuildError> {
        for (index, group) in self.groups.iter().enumerate() {
            group.validate()?;
            if self.groups[..index].iter().any(|g| g.prefix == group.prefix) {
                return Err(BuildError::DuplicatePrefix(group.prefix.clone()));
            }
        }
        Ok(())
    }

    pub(crate) fn into_groups(self) -> Vec<RouteGroup> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Router {
        Router::new()
    }

    #[test]
    fn test_standard_order() {
        let table = RouteTable::standard(empty(), empty(), empty());
        let entries: Vec<(&str, &str)> = table
            .groups()
            .iter()
            .map(|g| (g.prefix(), g.tag()))
            .collect();

        assert_eq!(
            entries,
            vec![
                ("/api/auth", "Auth"),
                ("/api/users", "Users"),
                ("/api/posts", "Posts"),
            ]
        );
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let table = RouteTable::new()
            .with(RouteGroup::new("/api/posts", "Posts", empty()))
            .with(RouteGroup::new("/api/posts", "Drafts", empty()));

        assert!(matches!(
            table.validate(),
            Err(BuildError::DuplicatePrefix(p)) if p == "/api/posts"
        ));
    }

    #[test]
    fn test_malformed_prefixes_rejected() {
        for prefix in ["", "/", "api/users", "/api/users/", "/api/:id", "/api/*rest"] {
            let table = RouteTable::new().with(RouteGroup::new(prefix, "Users", empty()));
            assert!(
                matches!(table.validate(), Err(BuildError::InvalidPrefix(_))),
                "prefix {:?} should be rejected",
                prefix
            );
        }
    }

    #[test]
    fn test_reserved_prefix_rejected() {
        let table = RouteTable::new().with(RouteGroup::new(HEALTH_PATH, "Health", empty()));
        assert!(matches!(table.validate(), Err(BuildError::ReservedPrefix(_))));
    }

    #[test]
    fn test_empty_tag_rejected() {
        let table = RouteTable::new().with(RouteGroup::new("/api/users", " ", empty()));
        assert!(matches!(table.validate(), Err(BuildError::EmptyTag(_))));
    }
}
