//! Virtual-time timer scheduler.
//!
//! One-shot (`after`) and repeating (`every`) tasks keyed by a [`TaskId`].
//! Time never moves on its own: the owner pops due tasks for a given
//! instant, which keeps every transition deterministic under test. Any
//! task can be cancelled before it fires.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle to a scheduled task
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A scheduled task
#[derive(Debug)]
struct ScheduledTask<A> {
    /// When the task should run, measured from scheduler start
    run_at: Duration,
    id: TaskId,
    action: A,
    /// If Some, this is a repeating task with the given interval
    repeat_interval: Option<Duration>,
}

impl<A> PartialEq for ScheduledTask<A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<A> Eq for ScheduledTask<A> {}

impl<A> PartialOrd for ScheduledTask<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for ScheduledTask<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// The scheduler that holds timed actions
#[derive(Debug)]
pub struct Scheduler<A> {
    tasks: BinaryHeap<ScheduledTask<A>>,
    cancelled: HashSet<TaskId>,
    next_id: u64,
    now: Duration,
}

impl<A: Clone> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            tasks: BinaryHeap::new(),
            cancelled: HashSet::new(),
            next_id: 0,
            now: Duration::ZERO,
        }
    }

    /// Current scheduler time.
    pub fn now(&self) -> Duration {
        self.now
    }

    fn next_task_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a one-shot task
    pub fn schedule_after(&mut self, delay: Duration, action: A) -> TaskId {
        let id = self.next_task_id();
        self.tasks.push(ScheduledTask {
            run_at: self.now + delay,
            id,
            action,
            repeat_interval: None,
        });
        id
    }

    /// Add a repeating task. First run is one interval from now.
    pub fn schedule_every(&mut self, interval: Duration, action: A) -> TaskId {
        let id = self.next_task_id();
        self.tasks.push(ScheduledTask {
            run_at: self.now + interval,
            id,
            action,
            repeat_interval: Some(interval),
        });
        id
    }

    /// Cancel a task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if !self.is_scheduled(id) {
            return false;
        }
        self.cancelled.insert(id)
    }

    /// Whether the task is still waiting to run.
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        !self.cancelled.contains(&id) && self.tasks.iter().any(|task| task.id == id)
    }

    /// Number of live (not cancelled) tasks
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !self.cancelled.contains(&task.id))
            .count()
    }

    /// Pop the earliest task due at or before `now`.
    ///
    /// Scheduler time moves to the task's run time, so actions scheduled
    /// while handling it are measured from when it was due. Repeating
    /// tasks are re-queued one interval later under the same id.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TaskId, A)> {
        loop {
            let due = self.tasks.peek().is_some_and(|task| task.run_at <= now);
            if !due {
                return None;
            }
            let task = self.tasks.pop()?;
            if self.cancelled.remove(&task.id) {
                continue;
            }
            self.now = self.now.max(task.run_at);
            let action = task.action.clone();
            if let Some(interval) = task.repeat_interval {
                self.tasks.push(ScheduledTask {
                    run_at: task.run_at + interval,
                    ..task
                });
            }
            return Some((task.id, action));
        }
    }

    /// Move scheduler time forward without running anything.
    pub fn advance_clock(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Run time of the next live task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .filter(|task| !self.cancelled.contains(&task.id))
            .map(|task| task.run_at)
            .min()
    }

    /// Get duration until next task (for sleep)
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }
}

impl<A: Clone> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}
