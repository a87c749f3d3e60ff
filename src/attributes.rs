//! Open attribute bag carried by every menu item.
//!
//! Well-known attributes (`icon`, `active`, `disabled`, `weight`) get typed
//! fields; everything else lands in an extra value map with default-absent
//! lookup: reading a key that was never set yields `None`, never an error.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::flag::Flag;

/// Attributes attached to one menu item.
///
/// Built fluently:
///
/// ```
/// use navmenu::Attributes;
///
/// let attrs = Attributes::new()
///     .icon("fa fa-dashboard")
///     .active_if(|| true)
///     .set("badge", 3);
/// assert_eq!(attrs.icon_class(), Some("fa fa-dashboard"));
/// assert!(attrs.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    icon: Option<String>,
    active: Flag,
    disabled: Flag,
    weight: i32,
    extra: Map<String, Value>,
}

impl Attributes {
    /// Empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon class rendered by [`crate::MenuItem::icon`].
    pub fn icon(mut self, class: impl Into<String>) -> Self {
        self.icon = Some(class.into());
        self
    }

    /// Fixed active state, overriding route and URL matching.
    pub fn active(mut self, value: bool) -> Self {
        self.active = Flag::Fixed(value);
        self
    }

    /// Active state computed at render time.
    pub fn active_if(mut self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.active = Flag::Dynamic(Arc::new(predicate));
        self
    }

    /// Fixed disabled state. Disabled items are never active.
    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = Flag::Fixed(value);
        self
    }

    /// Disabled state computed at render time.
    pub fn disabled_if(mut self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Flag::Dynamic(Arc::new(predicate));
        self
    }

    /// Sort weight (lower = higher priority); honored only by
    /// [`crate::MenuItem::sort_children`], declaration order otherwise.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Attach an arbitrary value under `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Icon class, if one was set.
    pub fn icon_class(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// The active flag.
    pub fn active_flag(&self) -> &Flag {
        &self.active
    }

    /// The disabled flag.
    pub fn disabled_flag(&self) -> &Flag {
        &self.disabled
    }

    /// Sort weight, 0 unless set.
    pub fn sort_weight(&self) -> i32 {
        self.weight
    }

    /// Look up an extra attribute. Unknown keys read as `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Serializable view of the bag: icon, fixed flags, non-zero weight, and
    /// extra values. Predicates have no data representation and are omitted.
    pub(crate) fn to_value_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(icon) = &self.icon {
            map.insert("icon".to_string(), Value::from(icon.clone()));
        }
        if let Flag::Fixed(active) = self.active {
            map.insert("active".to_string(), Value::from(active));
        }
        if let Flag::Fixed(disabled) = self.disabled {
            map.insert("disabled".to_string(), Value::from(disabled));
        }
        if self.weight != 0 {
            map.insert("weight".to_string(), Value::from(self.weight));
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn fluent_setters_round_trip() {
        let attrs = Attributes::new()
            .icon("fa fa-user")
            .active(true)
            .disabled(false)
            .weight(-5)
            .set("badge", 7);

        assert_eq!(attrs.icon_class(), Some("fa fa-user"));
        assert_eq!(attrs.active_flag().resolve(), Some(true));
        assert_eq!(attrs.disabled_flag().resolve(), Some(false));
        assert_eq!(attrs.sort_weight(), -5);
        assert_eq!(attrs.get("badge"), Some(&Value::from(7)));
    }

    #[test]
    fn unknown_key_reads_absent() {
        let attrs = Attributes::new();
        assert!(attrs.get("anything").is_none());
    }

    #[test]
    fn value_map_includes_fixed_flags_and_extras() {
        let attrs = Attributes::new()
            .icon("fa fa-cog")
            .active(true)
            .weight(2)
            .set("badge", "new");
        let map = attrs.to_value_map();

        assert_eq!(map.get("icon"), Some(&Value::from("fa fa-cog")));
        assert_eq!(map.get("active"), Some(&Value::from(true)));
        assert_eq!(map.get("weight"), Some(&Value::from(2)));
        assert_eq!(map.get("badge"), Some(&Value::from("new")));
    }

    #[test]
    fn value_map_omits_predicates() {
        let attrs = Attributes::new().active_if(|| true).disabled_if(|| false);
        let map = attrs.to_value_map();

        assert!(map.get("active").is_none());
        assert!(map.get("disabled").is_none());
    }
}
