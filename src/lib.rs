//! Hierarchical navigation menus: fluent tree construction and
//! request-aware active-state resolution.
//!
//! Menus are forests of named [`MenuItem`] trees held in a [`MenuRegistry`]:
//! - A fluent builder produces nested items in declaration order
//! - Each item resolves a URL and an active state against the current request
//! - Trees are pruned with the recursive, parent-first [`MenuItem::filter`]
//!
//! Route, URL, and request lookups are delegated to the collaborator traits
//! in [`context`]; the tree model performs no I/O of its own. Rendering is a
//! consumer's concern: walk [`MenuItem::children`] and call the evaluation
//! methods.
//!
//! ```
//! use navmenu::{Attributes, MenuRegistry};
//!
//! let mut registry = MenuRegistry::new();
//! registry.make_root_menu("sidebar", |menu| {
//!     menu.add_url("/dashboard", "Dashboard", Attributes::new().icon("fa fa-dashboard"));
//!     menu.submenu("Reports", Attributes::new(), |reports| {
//!         reports.add_url("/reports/sales", "Sales", Attributes::new());
//!     });
//! });
//!
//! assert!(registry.has("sidebar"));
//! ```

pub mod attributes;
pub mod context;
pub mod error;
pub mod flag;
pub mod item;
pub mod registry;

pub use attributes::Attributes;
pub use context::{NavContext, RequestContext, Router, UrlResolver};
pub use error::{MenuError, MenuResult};
pub use flag::{Flag, Predicate};
pub use item::{ItemId, ItemKind, MenuItem, NavTarget, PLACEHOLDER_URL};
pub use registry::{ItemDefinition, MenuBuilder, MenuRegistry, RouteRef};
