//! Library error types.

use thiserror::Error;

/// Errors surfaced by menu evaluation.
///
/// The model prefers silent fallback: unknown properties read as absent,
/// targetless items resolve to a placeholder link, and unknown routes make
/// [`crate::MenuItem::action`] return `None`. The one hard failure is a
/// router refusing to resolve a named route to a URL, which is propagated.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to resolve route `{route}` to a url")]
    RouteResolution {
        route: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
