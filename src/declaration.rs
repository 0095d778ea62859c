//! # Handler Declarations
//!
//! Raw marked-method records as the declaration surface reports them,
//! before verification and duplicate detection turn them into
//! [`HandlerDescriptor`](crate::HandlerDescriptor)s.

use crate::mode::ExecutionMode;
use crate::types::{EventType, SubscriberType};
use bitflags::bitflags;
use std::any::Any;

bitflags! {
    /// Modifier flags the declaration surface reports for a method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodFlags: u16 {
        const PUBLIC = 1 << 0;
        const STATIC = 1 << 1;
        const ABSTRACT = 1 << 2;
        /// Compiler-generated method not present in source.
        const SYNTHETIC = 1 << 3;
        /// Compiler-generated forwarding method (generics/variance shims).
        const BRIDGE = 1 << 4;

        /// Modifiers that disqualify a marked method from handling events.
        const DISQUALIFYING = Self::STATIC.bits()
            | Self::ABSTRACT.bits()
            | Self::SYNTHETIC.bits()
            | Self::BRIDGE.bits();

        /// Modifiers that mark a method as compiler-generated; such methods
        /// are skipped silently even under strict verification, since no
        /// source change can remove them.
        const COMPILER_GENERATED = Self::SYNTHETIC.bits() | Self::BRIDGE.bits();
    }
}

impl MethodFlags {
    /// Check if a method with these modifiers can handle events at all.
    pub fn qualifies(&self) -> bool {
        self.contains(MethodFlags::PUBLIC) && !self.intersects(MethodFlags::DISQUALIFYING)
    }
}

impl Default for MethodFlags {
    fn default() -> Self {
        MethodFlags::PUBLIC
    }
}

/// Erased handler entry point, invoked by the dispatcher as
/// `entry(subscriber, event)`.
///
/// Resolution records and compares entry points but never calls them.
pub type HandlerFn = fn(&dyn Any, &dyn Any);

/// One marked method as declared, prior to verification.
///
/// [`new`](HandlerDeclaration::new) applies the marker defaults (public,
/// one parameter, [`ExecutionMode::Direct`], priority 0, no replay); the
/// `with_*` builders adjust the rest.
#[derive(Debug, Clone, Copy)]
pub struct HandlerDeclaration {
    /// The type whose declaration surface produced this method.
    pub declared_by: SubscriberType,
    pub method_name: &'static str,
    pub entry: HandlerFn,
    pub flags: MethodFlags,
    pub param_count: usize,
    pub event_type: EventType,
    pub mode: ExecutionMode,
    pub priority: i32,
    /// Deliver the retained last event of `event_type` on subscribe.
    pub replay_on_subscribe: bool,
}

impl HandlerDeclaration {
    pub fn new(
        declared_by: SubscriberType,
        method_name: &'static str,
        event_type: EventType,
        entry: HandlerFn,
    ) -> Self {
        Self {
            declared_by,
            method_name,
            entry,
            flags: MethodFlags::default(),
            param_count: 1,
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

    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_param_count(mut self, param_count: usize) -> Self {
        self.param_count = param_count;
        self
    }

    /// Fully qualified name for diagnostics, `Type::method`.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.declared_by.name(), self.method_name)
    }
}
