//! # Resolution Registries
//!
//! Precomputed type-to-handlers tables, typically produced by a build step.
//! When a registry carries an entry for a type, the resolver takes that
//! entry's descriptors for the level and skips method inspection entirely;
//! the [`parent_entry`](RegistryEntry::parent_entry) back-reference lets
//! consecutive hierarchy levels resolve without re-scanning the configured
//! registries.

use crate::descriptor::HandlerDescriptor;
use crate::types::SubscriberType;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One precomputed type-to-handlers table consulted during resolution.
///
/// Registries are scanned in the order they were added to the resolver;
/// the first entry found for a type wins. Returning `None` for a type
/// makes the resolver fall back to method inspection for that level only.
pub trait ResolutionRegistry: Send + Sync {
    fn entry(&self, subscriber: SubscriberType) -> Option<Arc<RegistryEntry>>;
}

/// Pre-resolved handler descriptors for one subscriber type.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub subscriber_type: SubscriberType,
    pub handlers: Vec<HandlerDescriptor>,
    /// Entry for the direct parent type, when the producer emitted one.
    pub parent_entry: Option<Arc<RegistryEntry>>,
}

impl RegistryEntry {
    pub fn new(subscriber_type: SubscriberType, handlers: Vec<HandlerDescriptor>) -> Self {
        Self {
            subscriber_type,
            handlers,
            parent_entry: None,
        }
    }

    pub fn with_parent(mut self, parent: Arc<RegistryEntry>) -> Self {
        self.parent_entry = Some(parent);
        self
    }
}

/// Map-backed registry a build step (or a test) populates with
/// [`RegistryEntry`] values.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    entries: RwLock<HashMap<SubscriberType, Arc<RegistryEntry>>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the shared handle so producers can link
    /// it as the parent of later entries.
    pub fn insert(&self, entry: RegistryEntry) -> Arc<RegistryEntry> {
        debug!(
            subscriber = entry.subscriber_type.name(),
            handlers = entry.handlers.len(),
            "registered precomputed resolution entry"
        );
        let entry = Arc::new(entry);
        self.entries
            .write()
            .insert(entry.subscriber_type, Arc::clone(&entry));
        entry
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ResolutionRegistry for StaticRegistry {
    fn entry(&self, subscriber: SubscriberType) -> Option<Arc<RegistryEntry>> {
        self.entries.read().get(&subscriber).cloned()
    }
}
