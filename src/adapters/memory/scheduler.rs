//! Virtual-clock scheduler
//!
//! Time only moves when [`ManualScheduler::advance`] is called. Tasks run
//! in due-time order, ties in scheduling order, and tasks scheduled by a
//! running task are picked up within the same `advance` if they fall due.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::ports::Scheduler;

struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Scheduler driven by an explicit clock. Clones share the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    #[must_use]
    pub fn now(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of tasks not yet run
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward by `ms`, running every task that falls due
    pub fn advance(&self, ms: u64) {
        let target = self.now().saturating_add(ms);
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.state.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<Box<dyn FnOnce()>> {
        let mut state = self.state.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due_ms <= target)
            .min_by_key(|(_, pending)| (pending.due_ms, pending.seq))
            .map(|(index, _)| index)?;
        let next = state.pending.swap_remove(index);
        state.now_ms = next.due_ms;
        Some(next.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms.saturating_add(u64::from(delay_ms));
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(PendingTask { due_ms, seq, task });
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now_ms", &state.now_ms)
            .field("pending", &state.pending.len())
            .finish()
    }
}
