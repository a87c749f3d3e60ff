//! Collaborator traits for route, URL, and request resolution.
//!
//! The tree model performs no I/O itself; everything environment-dependent is
//! delegated through these traits so hosts can plug in their own router and
//! request machinery, and tests can substitute fakes.

use anyhow::Result;
use serde_json::{Map, Value};

/// Named-route resolution and introspection.
pub trait Router {
    /// Resolve a named route with bound parameters to a URL.
    ///
    /// An unknown route is the router's concern; errors are propagated to the
    /// caller as [`crate::MenuError::RouteResolution`] rather than swallowed.
    fn resolve_route_url(&self, name: &str, params: &Map<String, Value>) -> Result<String>;

    /// Name of the route matched by the current request, if any.
    fn current_route_name(&self) -> Option<String>;

    /// Whether a route with this name is registered.
    fn has_named_route(&self, name: &str) -> bool;

    /// Opaque action metadata for a named route.
    fn route_action(&self, name: &str) -> Option<Value>;
}

/// Relative-to-absolute URL resolution.
pub trait UrlResolver {
    /// Absolute URL for a relative path.
    fn resolve_url(&self, path: &str) -> String;

    /// The application's base URL, stripped from resolved URLs when
    /// computing request paths.
    fn base_url(&self) -> String;
}

/// The current HTTP request, as far as menus care about it.
pub trait RequestContext {
    /// Path of the current request, without the base URL.
    fn current_path(&self) -> String;

    /// Whether the current path matches a pattern. Implementations must
    /// support at least a trailing `*` wildcard.
    fn path_matches(&self, pattern: &str) -> bool;
}

/// Borrowed bundle of collaborators passed to the evaluation methods on
/// [`crate::MenuItem`].
#[derive(Clone, Copy)]
pub struct NavContext<'a> {
    pub router: &'a dyn Router,
    pub urls: &'a dyn UrlResolver,
    pub request: &'a dyn RequestContext,
}

impl<'a> NavContext<'a> {
    pub fn new(
        router: &'a dyn Router,
        urls: &'a dyn UrlResolver,
        request: &'a dyn RequestContext,
    ) -> Self {
        Self {
            router,
            urls,
            request,
        }
    }
}
