//! # Handler Descriptors
//!
//! The immutable resolution output: one descriptor per accepted handler
//! declaration, carrying everything the dispatcher needs to route an event.

use crate::declaration::{HandlerDeclaration, HandlerFn};
use crate::mode::ExecutionMode;
use crate::types::{EventType, SubscriberType};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One discovered handler, immutable once created.
///
/// Equality and hashing are by logical method identity (declaring type,
/// method name and event type), never by entry-point address. Mode,
/// priority and the replay flag are attributes of the handler, not part of
/// its identity.
#[derive(Debug, Clone, Copy)]
pub struct HandlerDescriptor {
    pub declaring_type: SubscriberType,
    pub method_name: &'static str,
    pub entry: HandlerFn,
    pub event_type: EventType,
    pub mode: ExecutionMode,
    pub priority: i32,
    pub replay_on_subscribe: bool,
}

impl HandlerDescriptor {
    /// Descriptor with attribute defaults ([`ExecutionMode::Direct`],
    /// priority 0, no replay); used by registry producers and tests.
    pub fn new(
        declaring_type: SubscriberType,
        method_name: &'static str,
        event_type: EventType,
        entry: HandlerFn,
    ) -> Self {
        Self {
            declaring_type,
            method_name,
            entry,
            event_type,
            mode: ExecutionMode::default(),
            priority: 0,
            replay_on_subscribe: false,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_replay(mut self, replay_on_subscribe: bool) -> Self {
        self.replay_on_subscribe = replay_on_subscribe;
        self
    }
}

impl From<HandlerDeclaration> for HandlerDescriptor {
    fn from(declaration: HandlerDeclaration) -> Self {
        Self {
            declaring_type: declaration.declared_by,
            method_name: declaration.method_name,
            entry: declaration.entry,
            event_type: declaration.event_type,
            mode: declaration.mode,
            priority: declaration.priority,
            replay_on_subscribe: declaration.replay_on_subscribe,
        }
    }
}

impl PartialEq for HandlerDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.declaring_type == other.declaring_type
            && self.method_name == other.method_name
            && self.event_type == other.event_type
    }
}

impl Eq for HandlerDescriptor {}

impl Hash for HandlerDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.declaring_type.hash(state);
        self.method_name.hash(state);
        self.event_type.hash(state);
    }
}

impl fmt::Display for HandlerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}({})",
            self.declaring_type.name(),
            self.method_name,
            self.event_type.name()
        )
    }
}
