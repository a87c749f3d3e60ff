#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Provides in-memory fakes for the collaborator traits: a named-route
//! table, a base-URL resolver, and a request with trailing-`*` pattern
//! matching, bundled into a [`TestEnv`] that hands out a `NavContext`.

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::anyhow;
use serde_json::{Map, Value, json};

use navmenu::{NavContext, RequestContext, Router, UrlResolver};

/// Fake router over a static name-to-URL table.
pub struct FakeRouter {
    routes: HashMap<String, String>,
    current: Option<String>,
}

impl FakeRouter {
    pub fn new(routes: &[(&str, &str)]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
            current: None,
        }
    }

    /// Set the route name the current request resolved to.
    pub fn current(mut self, name: &str) -> Self {
        self.current = Some(name.to_string());
        self
    }
}

impl Router for FakeRouter {
    fn resolve_route_url(&self, name: &str, _params: &Map<String, Value>) -> anyhow::Result<String> {
        self.routes
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("unknown route `{name}`"))
    }

    fn current_route_name(&self) -> Option<String> {
        self.current.clone()
    }

    fn has_named_route(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    fn route_action(&self, name: &str) -> Option<Value> {
        self.routes
            .get(name)
            .map(|url| json!({ "controller": format!("{name}@handle"), "url": url }))
    }
}

/// Fake URL resolver anchored at a fixed base URL.
pub struct FakeUrls {
    base: String,
}

impl UrlResolver for FakeUrls {
    fn resolve_url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn base_url(&self) -> String {
        self.base.clone()
    }
}

/// Fake request with a fixed path and trailing-`*` pattern matching.
pub struct FakeRequest {
    path: String,
}

impl RequestContext for FakeRequest {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn path_matches(&self, pattern: &str) -> bool {
        let pattern = pattern.trim_start_matches('/');
        let path = self.path.trim_start_matches('/');
        match pattern.strip_suffix('*') {
            Some(prefix) => path.starts_with(prefix),
            None => path == pattern,
        }
    }
}

/// Bundle of fakes owning the collaborators a `NavContext` borrows.
pub struct TestEnv {
    pub router: FakeRouter,
    pub urls: FakeUrls,
    pub request: FakeRequest,
}

impl TestEnv {
    /// Environment with no named routes, a fixed base URL, and the given
    /// current request path.
    pub fn at(path: &str) -> Self {
        Self::with_router(FakeRouter::new(&[]), path)
    }

    pub fn with_router(router: FakeRouter, path: &str) -> Self {
        Self {
            router,
            urls: FakeUrls {
                base: "https://example.test".to_string(),
            },
            request: FakeRequest {
                path: path.to_string(),
            },
        }
    }

    pub fn ctx(&self) -> NavContext<'_> {
        NavContext::new(&self.router, &self.urls, &self.request)
    }
}
