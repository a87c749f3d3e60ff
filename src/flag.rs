//! Boolean-or-predicate attribute flags.
//!
//! The `active` and `disabled` attributes accept either a fixed boolean or a
//! zero-argument predicate. Predicates are invoked on every evaluation, never
//! cached, so they can read live request or session state; they are expected
//! to be cheap, side-effect-free, and idempotent within one render pass.

use std::fmt;
use std::sync::Arc;

/// Zero-argument predicate evaluated at render time.
pub type Predicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// A tri-state attribute flag: absent, a fixed boolean, or a predicate.
#[derive(Clone, Default)]
pub enum Flag {
    /// Not supplied; resolution falls through to the caller's default.
    #[default]
    Unset,
    /// Fixed boolean supplied at construction.
    Fixed(bool),
    /// Predicate invoked on every evaluation.
    Dynamic(Predicate),
}

impl Flag {
    /// Evaluate the flag, returning `None` when unset.
    pub fn resolve(&self) -> Option<bool> {
        match self {
            Flag::Unset => None,
            Flag::Fixed(value) => Some(*value),
            Flag::Dynamic(predicate) => Some(predicate()),
        }
    }

    /// True when a boolean or predicate was supplied.
    pub fn is_set(&self) -> bool {
        !matches!(self, Flag::Unset)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::Fixed(value)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Unset => f.write_str("Unset"),
            Flag::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Flag::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
