//! Per-pass working state for one resolution walk, including the two-level
//! duplicate detection that resolves handler shadowing across a hierarchy.

use crate::descriptor::HandlerDescriptor;
use crate::registry::RegistryEntry;
use crate::types::{EventType, SubscriberType};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// What `fast_seen` knows about an event type within the current pass.
#[derive(Debug, Clone, Copy)]
enum Seen {
    /// Exactly one method handles this event type so far.
    Method {
        name: &'static str,
        declared_by: SubscriberType,
    },
    /// Two or more seen; per-signature checks decide from here on.
    Consumed,
}

/// Mutable state for one resolution pass; pooled and recycled between uses.
#[derive(Debug, Default)]
pub(crate) struct IndexBuilder {
    /// Hierarchy level the walk is currently at; `None` means done.
    pub(crate) current: Option<SubscriberType>,
    /// Set when a flattened surface already covered the ancestors.
    pub(crate) skip_remaining_hierarchy: bool,
    /// Registry entry consumed at the previous level, if any; its parent
    /// back-reference short-circuits the registry scan for the next level.
    pub(crate) registry_entry: Option<Arc<RegistryEntry>>,
    pub(crate) accumulated: Vec<HandlerDescriptor>,
    fast_seen: HashMap<EventType, Seen>,
    slow_seen: HashMap<(&'static str, EventType), SubscriberType>,
}

impl IndexBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reset for a fresh pass over `subscriber`.
    pub(crate) fn init_for(&mut self, subscriber: SubscriberType) {
        self.recycle();
        self.current = Some(subscriber);
    }

    /// Clear all per-pass state; buffers keep their capacity for reuse.
    pub(crate) fn recycle(&mut self) {
        self.current = None;
        self.skip_remaining_hierarchy = false;
        self.registry_entry = None;
        self.accumulated.clear();
        self.fast_seen.clear();
        self.slow_seen.clear();
    }

    /// Two-level duplicate check; true means the declaration is accepted.
    ///
    /// The fast level keys on event type alone and settles the usual case
    /// of one handler per event type without touching signatures. The
    /// first collision consumes the event type: the previously accepted
    /// method is re-verified at the signature level, and every later
    /// declaration for this event type goes straight to the signature
    /// level.
    pub(crate) fn check_add(
        &mut self,
        method_name: &'static str,
        event_type: EventType,
        declared_by: SubscriberType,
    ) -> bool {
        let previous = match self.fast_seen.entry(event_type) {
            Entry::Vacant(slot) => {
                slot.insert(Seen::Method {
                    name: method_name,
                    declared_by,
                });
                return true;
            }
            Entry::Occupied(mut slot) => slot.insert(Seen::Consumed),
        };
        if let Seen::Method { name, declared_by } = previous {
            if !self.check_add_with_signature(name, event_type, declared_by) {
                unreachable!("previously accepted handler failed signature re-check");
            }
        }
        self.check_add_with_signature(method_name, event_type, declared_by)
    }

    /// Signature-level check: at most one declaring type owns a
    /// (method name, event type) pair, and levels encountered later in the
    /// upward walk never displace a descendant's accepted declaration.
    fn check_add_with_signature(
        &mut self,
        method_name: &'static str,
        event_type: EventType,
        declared_by: SubscriberType,
    ) -> bool {
        let key = (method_name, event_type);
        match self.slow_seen.insert(key, declared_by) {
            None => true,
            Some(previous) => {
                if previous.is_assignable_from(declared_by) {
                    true
                } else {
                    // the subclass declaration already won; put it back
                    self.slow_seen.insert(key, previous);
                    false
                }
            }
        }
    }

    /// Advance to the parent type, honoring flattened-surface truncation
    /// and the configured system-namespace cutoff.
    pub(crate) fn advance_to_parent(&mut self, system_namespaces: &[String]) {
        if self.skip_remaining_hierarchy {
            self.current = None;
            return;
        }
        let Some(current) = self.current else {
            return;
        };
        self.current = current.parent().filter(|parent| {
            !system_namespaces
                .iter()
                .any(|namespace| parent.name().starts_with(namespace.as_str()))
        });
    }
}
