use crate::foundation::core::Millis;

/// Handle to a scheduled task, used to cancel it before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskToken(u64);

#[derive(Debug)]
struct ScheduledTask<T> {
    token: TaskToken,
    due: Millis,
    task: T,
}

/// One-shot deferred tasks keyed by due time.
///
/// The scheduler never reads a clock. Callers pass `now` explicitly, which keeps every consumer
/// deterministic. Tasks that share a due time fire in scheduling order.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_token: u64,
    pending: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_token: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Millis, delay_ms: u64, task: T) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.pending.push(ScheduledTask {
            token,
            due: now.after(delay_ms),
            task,
        });
        token
    }

    /// Drop a pending task. Returns `false` when it already fired or was cancelled.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.token != token);
        self.pending.len() != before
    }

    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.pending.iter().any(|t| t.token == token)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Remove and return every task with `due <= now`, earliest first.
    pub fn take_due(&mut self, now: Millis) -> Vec<(TaskToken, T)> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = rest;
        due.sort_by_key(|t| (t.due, t.token));
        due.into_iter().map(|t| (t.token, t.task)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/scheduler.rs"]
mod tests;
