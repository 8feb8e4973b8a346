//! Keyed one-shot timers with explicit handles.
//!
//! Every deferred piece of work (entrance start and cleanup, resize debounce,
//! simulated submission latency, banner dismissal) is registered under a
//! [`TimerKey`]. Scheduling a key that is already pending supersedes the older
//! handle, which is how the resize debounce works. The host owns the real
//! timeouts and reports each expiry back with the handle it was given; a
//! superseded handle is ignored on arrival.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::HashMap;

use crate::form::FormKind;
use crate::section::SectionId;
use crate::submit::BannerId;

/// What a pending timer will do when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Start the entrance transition of a freshly revealed section.
    EntranceStart(SectionId),
    /// Strip the entrance transition's inline styles.
    EntranceEnd(SectionId),
    /// Act on the last reported viewport width.
    ResizeDebounce,
    /// Complete a simulated submission.
    SubmitLatency(FormKind),
    /// Remove a banner.
    BannerDismiss(BannerId),
}

/// Ticket for one scheduled run of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerHandle {
    pub key: TimerKey,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_generation: u64,
    pending: HashMap<TimerKey, u64>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key`, superseding any pending handle for the same key.
    pub fn schedule(&mut self, key: TimerKey) -> TimerHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        if self.pending.insert(key.clone(), generation).is_some() {
            log::trace!("timer {key:?} superseded");
        }
        TimerHandle { key, generation }
    }

    /// Consume a fired handle. Returns `true` only for the current handle of
    /// its key; stale handles leave the pending set untouched.
    pub fn take(&mut self, handle: &TimerHandle) -> bool {
        match self.pending.get(&handle.key) {
            Some(&generation) if generation == handle.generation => {
                self.pending.remove(&handle.key);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
impl Scheduler {
    /// Drop the pending handle for `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: &TimerKey) -> bool {
        self.pending.remove(key).is_some()
    }

    pub fn is_pending(&self, key: &TimerKey) -> bool {
        self.pending.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
