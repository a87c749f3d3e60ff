//! Menu registry and fluent construction protocol.
//!
//! A registry stores named menu trees. Construction goes through a
//! [`MenuBuilder`], which mutably borrows the registry and carries the stack
//! of open submenu frames, so transient build state cannot leak between
//! invocations and nested construction of the same registry is rejected by
//! the borrow checker instead of corrupting state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::attributes::Attributes;
use crate::item::{ItemId, ItemKind, MenuItem, NavTarget};

/// Named route reference with bound parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRef {
    pub name: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

/// Flat, serde-friendly description of one menu item.
///
/// Useful for hosts that source menu data from plugins or storage; consumed
/// by [`MenuBuilder::add_raw`]. When both `route` and `url` are supplied the
/// route wins, matching URL resolution order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Identifier name; keys the registry entry for top-level items.
    #[serde(default)]
    pub name: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// URL target.
    #[serde(default)]
    pub url: Option<String>,
    /// Named-route target; takes precedence over `url`.
    #[serde(default)]
    pub route: Option<RouteRef>,
    /// Icon class.
    #[serde(default)]
    pub icon: Option<String>,
    /// Fixed active state.
    #[serde(default)]
    pub active: Option<bool>,
    /// Fixed disabled state.
    #[serde(default)]
    pub disabled: Option<bool>,
    /// Sort weight (lower = higher priority).
    #[serde(default)]
    pub weight: i32,
    /// Any further attribute values.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Registry of named menu trees.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    /// Menu trees indexed by name.
    menus: HashMap<String, MenuItem>,
    /// Registration order, for stable enumeration.
    order: Vec<String>,
    /// Next item id to assign.
    next_id: u32,
}

impl MenuRegistry {
    /// Create an empty menu registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a named root menu.
    ///
    /// Creates the root item, runs `build` with the root as the open frame,
    /// and stores the finished tree under `name`, replacing any previous menu
    /// with that name. Returns the stored root.
    pub fn make_root_menu(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut MenuBuilder<'_>),
    ) -> &MenuItem {
        let mut builder = MenuBuilder {
            registry: &mut *self,
            stack: Vec::new(),
        };
        let root = builder.make_item(
            ItemKind::Root,
            Some(name.to_string()),
            None,
            NavTarget::None,
            Attributes::new(),
        );
        builder.stack.push(root);
        build(&mut builder);

        let popped = builder.stack.pop();
        let root = match popped {
            Some(item) => item,
            // The builder's public methods keep the frame stack balanced, so
            // the root frame is still on top here; recreate it if not.
            None => builder.make_item(
                ItemKind::Root,
                Some(name.to_string()),
                None,
                NavTarget::None,
                Attributes::new(),
            ),
        };

        let items = root.node_count();
        debug!(menu = name, items, "built menu tree");
        self.attach_root(root)
    }

    /// Run a builder with no open frame.
    ///
    /// Every item created at the top level of `build` computes level 0 and
    /// registers as an addressable named menu, which is how independent
    /// root-level trees are declared without [`Self::make_root_menu`].
    pub fn define(&mut self, build: impl FnOnce(&mut MenuBuilder<'_>)) {
        let mut builder = MenuBuilder {
            registry: &mut *self,
            stack: Vec::new(),
        };
        build(&mut builder);
    }

    /// Check if a menu with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.menus.contains_key(name)
    }

    /// Get a menu's root item by name.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.menus.get(name)
    }

    /// Get a menu's root item mutably, e.g. to [`MenuItem::filter`] or
    /// [`MenuItem::sort_children`] it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut MenuItem> {
        self.menus.get_mut(name)
    }

    /// All menu roots, in registration order.
    pub fn all(&self) -> impl Iterator<Item = &MenuItem> {
        self.order.iter().filter_map(|name| self.menus.get(name))
    }

    /// Number of registered menus.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    fn next_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Store a level-0 item under its registry key, keeping registration
    /// order for enumeration.
    fn attach_root(&mut self, item: MenuItem) -> &MenuItem {
        let key = match item.registry_key() {
            Some(key) => key.to_string(),
            None => {
                warn!(
                    id = item.id().0,
                    "registering top-level menu item with no name or title"
                );
                String::new()
            }
        };

        if !self.menus.contains_key(&key) {
            self.order.push(key.clone());
        }
        match self.menus.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(item);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(item),
        }
    }
}

/// Construction context for one build invocation.
///
/// Holds the stack of open submenu frames; item depth, parent, and root are
/// wired from the stack at creation time. Obtained through
/// [`MenuRegistry::make_root_menu`] or [`MenuRegistry::define`].
pub struct MenuBuilder<'r> {
    registry: &'r mut MenuRegistry,
    stack: Vec<MenuItem>,
}

impl MenuBuilder<'_> {
    /// Create a submenu at the current depth and populate it via `build`.
    ///
    /// The submenu is an open frame while `build` runs, so items created
    /// inside attach to it; afterwards it attaches at its own depth.
    pub fn submenu(
        &mut self,
        title: impl Into<String>,
        attributes: Attributes,
        build: impl FnOnce(&mut Self),
    ) -> ItemId {
        let item = self.make_item(
            ItemKind::Submenu,
            None,
            Some(title.into()),
            NavTarget::None,
            attributes,
        );
        let id = item.id();
        self.stack.push(item);
        build(self);
        if let Some(item) = self.stack.pop() {
            self.attach(item);
        }
        id
    }

    /// Add a leaf pointing at a named route.
    pub fn add_route(
        &mut self,
        route: impl Into<String>,
        title: impl Into<String>,
        params: Map<String, Value>,
        attributes: Attributes,
    ) -> ItemId {
        let item = self.make_item(
            ItemKind::Item,
            None,
            Some(title.into()),
            NavTarget::Route {
                name: route.into(),
                params,
            },
            attributes,
        );
        self.attach(item)
    }

    /// Add a leaf pointing at a URL.
    pub fn add_url(
        &mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        attributes: Attributes,
    ) -> ItemId {
        let item = self.make_item(
            ItemKind::Item,
            None,
            Some(title.into()),
            NavTarget::Url(url.into()),
            attributes,
        );
        self.attach(item)
    }

    /// Add a leaf from a flat [`ItemDefinition`].
    pub fn add_raw(&mut self, definition: ItemDefinition) -> ItemId {
        let ItemDefinition {
            name,
            title,
            url,
            route,
            icon,
            active,
            disabled,
            weight,
            attributes,
        } = definition;

        let target = match (route, url) {
            (Some(route), _) => NavTarget::Route {
                name: route.name,
                params: route.params,
            },
            (None, Some(url)) => NavTarget::Url(url),
            (None, None) => NavTarget::None,
        };

        let mut attrs = Attributes::new().weight(weight);
        if let Some(icon) = icon {
            attrs = attrs.icon(icon);
        }
        if let Some(active) = active {
            attrs = attrs.active(active);
        }
        if let Some(disabled) = disabled {
            attrs = attrs.disabled(disabled);
        }
        for (key, value) in attributes {
            attrs = attrs.set(key, value);
        }

        let item = self.make_item(ItemKind::Item, name, title, target, attrs);
        self.attach(item)
    }

    /// Create an item wired to the current construction context: depth is
    /// the number of open frames, parent is the innermost frame, root is the
    /// outermost frame (or the item itself at depth 0).
    fn make_item(
        &mut self,
        kind: ItemKind,
        name: Option<String>,
        title: Option<String>,
        target: NavTarget,
        attributes: Attributes,
    ) -> MenuItem {
        let id = self.registry.next_item_id();
        let level = self.stack.len() as u32;
        let parent = self.stack.last().map(MenuItem::id);
        let root = self.stack.first().map(MenuItem::root_id).unwrap_or(id);
        let properties = snapshot(&name, &title, kind, &target, &attributes);

        MenuItem {
            id,
            root,
            parent,
            level,
            name,
            title,
            kind,
            target,
            attributes,
            properties,
            children: Vec::new(),
        }
    }

    /// Attach an item per its computed level: level 0 registers a named
    /// menu, anything deeper appends to the innermost open frame. The
    /// decision is by level, not kind, so a submenu opened with no frame
    /// registers as a menu of its own.
    fn attach(&mut self, item: MenuItem) -> ItemId {
        let id = item.id();
        if item.level() == 0 {
            self.registry.attach_root(item);
        } else if let Some(parent) = self.stack.last_mut() {
            parent.children.push(item);
        } else {
            warn!(
                id = id.0,
                level = item.level(),
                "dropping menu item attached outside any open frame"
            );
        }
        id
    }
}

/// Shallow snapshot of the supplied construction properties, mirroring what
/// [`MenuItem::properties`] exposes. Predicate attributes are omitted.
fn snapshot(
    name: &Option<String>,
    title: &Option<String>,
    kind: ItemKind,
    target: &NavTarget,
    attributes: &Attributes,
) -> Map<String, Value> {
    let mut properties = Map::new();
    if let Some(name) = name {
        properties.insert("name".to_string(), Value::from(name.clone()));
    }
    properties.insert("type".to_string(), Value::from(kind.as_str()));
    if let Some(title) = title {
        properties.insert("title".to_string(), Value::from(title.clone()));
    }
    match target {
        NavTarget::Url(url) => {
            properties.insert("url".to_string(), Value::from(url.clone()));
        }
        NavTarget::Route { name, params } => {
            properties.insert("route".to_string(), json!([name, params]));
        }
        NavTarget::None => {}
    }
    let attrs = attributes.to_value_map();
    if !attrs.is_empty() {
        properties.insert("attributes".to_string(), Value::Object(attrs));
    }
    properties
}
