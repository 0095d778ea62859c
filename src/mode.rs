//! # Execution Modes
//!
//! The dispatch-thread contract attached to every handler descriptor.
//! Resolution only records the mode; the bus dispatcher owns the queues and
//! workers that honor it. The table below is normative for dispatchers:
//!
//! | Mode | Delivery thread | Ordering | Publisher blocking |
//! |------|-----------------|----------|--------------------|
//! | [`Direct`] | publishing thread | publish order on that thread | always blocks |
//! | [`PrimaryImmediate`] | primary thread | inline when published on primary, else enqueued | blocks only on primary |
//! | [`PrimaryOrdered`] | primary thread | strict FIFO per publish order | never blocks |
//! | [`BackgroundSequential`] | dedicated sequential worker | FIFO when published on primary; inline otherwise | blocks only off primary |
//! | [`AsyncPool`] | unordered worker pool | none | never blocks |
//!
//! "Primary thread" is whatever the embedding application designates as its
//! serialized main loop (a UI thread, an actor shard, a game tick loop).
//! Dispatchers without a primary thread must still implement the queueing
//! semantics, substituting their serialized executor.
//!
//! [`Direct`]: ExecutionMode::Direct
//! [`PrimaryImmediate`]: ExecutionMode::PrimaryImmediate
//! [`PrimaryOrdered`]: ExecutionMode::PrimaryOrdered
//! [`BackgroundSequential`]: ExecutionMode::BackgroundSequential
//! [`AsyncPool`]: ExecutionMode::AsyncPool

use serde::{Deserialize, Serialize};

/// Dispatch semantics for one handler.
///
/// Every [`HandlerDescriptor`](crate::HandlerDescriptor) carries exactly one
/// mode, taken from the handler's declaration marker at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Invoke the handler synchronously on whichever thread published the
    /// event, before the publish call returns.
    ///
    /// This is the default mode and the only one with zero handoff
    /// overhead. Handlers must return quickly: a slow `Direct` handler
    /// stalls the publishing thread and every handler queued behind it.
    Direct,

    /// Deliver on the designated primary thread.
    ///
    /// When the event is published on the primary thread itself, the handler
    /// runs inline, blocking the publisher; otherwise it is enqueued to the
    /// primary queue and the publisher continues immediately. Because
    /// delivery can preempt the queue, `PrimaryImmediate` handlers published
    /// from the primary thread can observe events before earlier enqueued
    /// ones. Handlers must be fast enough not to starve the primary loop.
    PrimaryImmediate,

    /// Always enqueue to the primary queue, even when published on the
    /// primary thread.
    ///
    /// The publisher never blocks, and handlers observe events in strict
    /// publish order relative to every other `PrimaryOrdered` delivery.
    PrimaryOrdered,

    /// Deliver on a single dedicated background worker.
    ///
    /// Events published on the primary thread are enqueued to that worker
    /// and delivered FIFO. Events published from any other thread are
    /// delivered inline on the publishing thread, blocking it, since the
    /// publisher is already off the primary loop. Suited to short blocking
    /// work (file or network I/O) that must stay off the primary thread but
    /// does not need fan-out.
    BackgroundSequential,

    /// Always hand off to an unordered worker pool.
    ///
    /// Neither the publishing thread nor the primary thread is ever used,
    /// and no ordering holds between `AsyncPool` deliveries. Use this for
    /// long-running work, and bound the handler's own concurrency if many
    /// events can arrive faster than it completes.
    AsyncPool,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        ExecutionMode::Direct
    }
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Direct => "direct",
            ExecutionMode::PrimaryImmediate => "primary_immediate",
            ExecutionMode::PrimaryOrdered => "primary_ordered",
            ExecutionMode::BackgroundSequential => "background_sequential",
            ExecutionMode::AsyncPool => "async_pool",
        }
    }

    /// Check if delivery targets the designated primary thread.
    pub fn uses_primary_thread(&self) -> bool {
        matches!(
            self,
            ExecutionMode::PrimaryImmediate | ExecutionMode::PrimaryOrdered
        )
    }

    /// Check if delivery can run inline on the publishing thread, blocking
    /// the publish call.
    pub fn may_block_publisher(&self) -> bool {
        matches!(
            self,
            ExecutionMode::Direct
                | ExecutionMode::PrimaryImmediate
                | ExecutionMode::BackgroundSequential
        )
    }
}
