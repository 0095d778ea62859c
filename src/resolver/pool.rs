//! Fixed-capacity reuse pool for [`IndexBuilder`] instances, so
//! high-frequency subscription bursts do not reallocate working maps.

use super::index_builder::IndexBuilder;
use parking_lot::Mutex;

pub(crate) const POOL_CAPACITY: usize = 4;

/// Bounded builder pool; releases beyond capacity are simply dropped.
#[derive(Debug, Default)]
pub(crate) struct BuilderPool {
    slots: Mutex<[Option<Box<IndexBuilder>>; POOL_CAPACITY]>,
}

impl BuilderPool {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A recycled builder when one is pooled, otherwise a fresh one.
    pub(crate) fn acquire(&self) -> Box<IndexBuilder> {
        let mut slots = self.slots.lock();
        for slot in slots.iter_mut() {
            if let Some(builder) = slot.take() {
                return builder;
            }
        }
        drop(slots);
        Box::new(IndexBuilder::new())
    }

    /// Recycle `builder` and retain it if a slot is free.
    pub(crate) fn release(&self, mut builder: Box<IndexBuilder>) {
        builder.recycle();
        let mut slots = self.slots.lock();
        for slot in slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(builder);
                return;
            }
        }
    }
}
