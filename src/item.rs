//! Menu item tree model.
//!
//! A [`MenuItem`] is one node in a menu tree: it owns its children, knows its
//! depth and its root, and resolves its URL, icon, and active state against
//! the collaborators in [`crate::context`]. Trees are built through
//! [`crate::MenuRegistry`] and walked read-only by whatever renders them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attributes::Attributes;
use crate::context::NavContext;
use crate::error::{MenuError, MenuResult};

/// Placeholder href for items with no navigation target.
pub const PLACEHOLDER_URL: &str = "#";

/// Identifier for a menu item, unique within one registry.
///
/// Parent and root back-references are carried as plain ids rather than
/// owning pointers, so a tree can never form an ownership cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub(crate) u32);

/// Node kind within a menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Level-0 item addressable by name in the registry.
    Root,
    /// Non-leaf item created via a nested builder callback.
    Submenu,
    /// Leaf item.
    Item,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Root => "root",
            ItemKind::Submenu => "submenu",
            ItemKind::Item => "item",
        }
    }
}

/// Navigation target of an item: at most one of a raw URL or a named route.
#[derive(Debug, Clone, Default)]
pub enum NavTarget {
    /// No target; URL resolution yields [`PLACEHOLDER_URL`].
    #[default]
    None,
    /// Relative or absolute URL, resolved through [`crate::UrlResolver`].
    Url(String),
    /// Named route with bound parameters, resolved through [`crate::Router`].
    Route {
        name: String,
        params: Map<String, Value>,
    },
}

/// One node in a menu tree.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub(crate) id: ItemId,
    pub(crate) root: ItemId,
    pub(crate) parent: Option<ItemId>,
    pub(crate) level: u32,
    pub(crate) name: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) kind: ItemKind,
    pub(crate) target: NavTarget,
    pub(crate) attributes: Attributes,
    pub(crate) properties: Map<String, Value>,
    pub(crate) children: Vec<MenuItem>,
}

impl MenuItem {
    /// Registry-scoped identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Id of the level-0 ancestor; equals [`Self::id`] for root items.
    pub fn root_id(&self) -> ItemId {
        self.root
    }

    /// Id of the immediate parent, `None` for root items.
    pub fn parent_id(&self) -> Option<ItemId> {
        self.parent
    }

    /// Depth from the root; the root itself is level 0.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Identifier name; set on root items (the registry key).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display label.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn target(&self) -> &NavTarget {
        &self.target
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Direct children, in declaration order.
    pub fn children(&self) -> &[MenuItem] {
        &self.children
    }

    /// Resolve this item's URL.
    ///
    /// A route target resolves through the router (resolution failures are
    /// propagated); a URL target resolves through the URL resolver; with no
    /// target the non-navigating [`PLACEHOLDER_URL`] is returned.
    pub fn url(&self, ctx: &NavContext<'_>) -> MenuResult<String> {
        match &self.target {
            NavTarget::Route { name, params } => ctx
                .router
                .resolve_route_url(name, params)
                .map_err(|source| MenuError::RouteResolution {
                    route: name.clone(),
                    source,
                }),
            NavTarget::Url(path) => Ok(ctx.urls.resolve_url(path)),
            NavTarget::None => Ok(PLACEHOLDER_URL.to_string()),
        }
    }

    /// Resolved URL with the base URL prefix and leading slash stripped,
    /// comparable against the current request path.
    pub fn request_path(&self, ctx: &NavContext<'_>) -> MenuResult<String> {
        let url = self.url(ctx)?;
        let base = ctx.urls.base_url();
        let path = url.strip_prefix(base.as_str()).unwrap_or(url.as_str());
        Ok(path.trim_start_matches('/').to_string())
    }

    /// Icon markup for this item.
    ///
    /// Wraps the `icon` attribute in an `<i>` fragment; without one, returns
    /// `default` as supplied.
    pub fn icon(&self, default: Option<&str>) -> Option<String> {
        match self.attributes.icon_class() {
            Some(class) => Some(format!("<i class=\"{class}\"></i>")),
            None => default.map(str::to_string),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether any direct child is active. Only one level deep: each child is
    /// evaluated without including its own children.
    pub fn has_active_child(&self, ctx: &NavContext<'_>) -> bool {
        self.children.iter().any(|child| child.is_active(ctx, false))
    }

    /// Disabled state: the `disabled` attribute as-is for a boolean, the
    /// predicate's result for a predicate, false when unset.
    pub fn is_disabled(&self) -> bool {
        self.attributes.disabled_flag().resolve().unwrap_or(false)
    }

    /// Active state for this item, in order:
    ///
    /// 1. Disabled always wins: a disabled item is never active.
    /// 2. With `include_children`, an active direct child makes this active.
    /// 3. An explicit or computed `active` attribute is authoritative.
    /// 4. A route target is active when the router's current route name
    ///    equals the target's name.
    /// 5. A URL target is active when the current request path matches it
    ///    (pattern semantics, including wildcards, are the request
    ///    collaborator's).
    /// 6. A targetless item is inactive.
    pub fn is_active(&self, ctx: &NavContext<'_>, include_children: bool) -> bool {
        if self.is_disabled() {
            return false;
        }

        if include_children && self.has_active_child(ctx) {
            return true;
        }

        if let Some(active) = self.attributes.active_flag().resolve() {
            return active;
        }

        match &self.target {
            NavTarget::Route { name, .. } => {
                ctx.router.current_route_name().as_deref() == Some(name.as_str())
            }
            NavTarget::Url(url) => ctx.request.path_matches(url),
            NavTarget::None => false,
        }
    }

    /// Remove every child the predicate rejects, then filter the survivors.
    ///
    /// Pruning is depth-first and parent-first: a rejected child's subtree is
    /// dropped whole and never descended into.
    pub fn filter<F>(&mut self, predicate: &F)
    where
        F: Fn(&MenuItem) -> bool,
    {
        self.children.retain(predicate);
        for child in &mut self.children {
            child.filter(predicate);
        }
    }

    /// Stable-sort direct children by their attribute weight (lower first),
    /// recursively. Equal weights keep declaration order.
    pub fn sort_children(&mut self) {
        self.children.sort_by_key(|child| child.attributes.sort_weight());
        for child in &mut self.children {
            child.sort_children();
        }
    }

    /// Action metadata for this item's route target.
    ///
    /// `None` when the target is not a route or the router does not know the
    /// route; never an error.
    pub fn action(&self, ctx: &NavContext<'_>) -> Option<Value> {
        let NavTarget::Route { name, .. } = &self.target else {
            return None;
        };
        if !ctx.router.has_named_route(name) {
            return None;
        }
        ctx.router.route_action(name)
    }

    /// The originally supplied construction properties: a shallow snapshot,
    /// not the resolved tree. Predicates are omitted.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// The property snapshot as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.properties.clone())
    }

    /// Look up a construction property by key. Unknown keys read as `None`,
    /// never an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Total nodes in this subtree, including this item.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MenuItem::node_count)
            .sum::<usize>()
    }

    /// Key under which a level-0 item is stored in the registry.
    pub(crate) fn registry_key(&self) -> Option<&str> {
        self.name.as_deref().or(self.title.as_deref())
    }
}
