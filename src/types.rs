//! # Type Identities
//!
//! Process-stable identities for subscriber types and event types. Hosts
//! declare one [`TypeNode`] per concrete subscriber type and one
//! [`EventTypeNode`] per event type, usually as `static` items; the
//! [`SubscriberType`] and [`EventType`] handles wrapping them are `Copy`,
//! compare by node identity, and make cheap map keys.
//!
//! The parent link on [`TypeNode`] is the chain the resolver walks when
//! collecting inherited handler declarations.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Metadata for one subscriber type. Declared once per process, typically
/// as a `static`.
#[derive(Debug)]
pub struct TypeNode {
    name: &'static str,
    parent: Option<&'static TypeNode>,
}

impl TypeNode {
    /// Node for a type with no parent type.
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Node for a type extending `parent`.
    pub const fn child(name: &'static str, parent: &'static TypeNode) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }
}

/// Identity of a subscriber type; the key under which resolution results
/// are cached.
///
/// Equality and hashing are by node identity, not by name: two nodes that
/// happen to share a name are distinct types.
#[derive(Clone, Copy)]
pub struct SubscriberType(&'static TypeNode);

impl SubscriberType {
    pub const fn of(node: &'static TypeNode) -> Self {
        Self(node)
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }

    /// The direct parent type, if any.
    pub fn parent(self) -> Option<SubscriberType> {
        self.0.parent.map(SubscriberType)
    }

    /// True when `self` is `other` or one of `other`'s ancestors.
    pub fn is_assignable_from(self, other: SubscriberType) -> bool {
        let mut cursor = Some(other);
        while let Some(ty) = cursor {
            if ty == self {
                return true;
            }
            cursor = ty.parent();
        }
        false
    }

    fn key(self) -> usize {
        self.0 as *const TypeNode as usize
    }
}

impl PartialEq for SubscriberType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for SubscriberType {}

impl Hash for SubscriberType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for SubscriberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberType({})", self.name())
    }
}

impl fmt::Display for SubscriberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for one event type. Declared once per process, typically as a
/// `static`.
#[derive(Debug)]
pub struct EventTypeNode {
    name: &'static str,
}

impl EventTypeNode {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Identity of an event type a handler accepts.
#[derive(Clone, Copy)]
pub struct EventType(&'static EventTypeNode);

impl EventType {
    pub const fn of(node: &'static EventTypeNode) -> Self {
        Self(node)
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }

    fn key(self) -> usize {
        self.0 as *const EventTypeNode as usize
    }
}

impl PartialEq for EventType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for EventType {}

impl Hash for EventType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventType({})", self.name())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
