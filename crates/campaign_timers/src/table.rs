use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use dashboard_logging::{dash_debug, dash_trace};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::TimerSink;

struct PendingTimer {
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Pending timers keyed by id. At most one timer per id is live; scheduling an
/// id again cancels the earlier one.
pub struct TimerTable<K> {
    runtime: Handle,
    sink: Arc<dyn TimerSink<K>>,
    root: CancellationToken,
    pending: HashMap<K, PendingTimer>,
}

impl<K> TimerTable<K>
where
    K: Copy + Eq + Hash + Debug + Send + 'static,
{
    pub fn new(runtime: Handle, sink: Arc<dyn TimerSink<K>>) -> Self {
        Self {
            runtime,
            sink,
            root: CancellationToken::new(),
            pending: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, timer: K, delay: Duration) {
        self.pending.retain(|_, pending| !pending.task.is_finished());
        self.cancel(timer);

        let token = self.root.child_token();
        let cancelled = token.clone();
        let sink = self.sink.clone();
        let task = self.runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    dash_trace!("Timer {:?} cancelled before firing", timer);
                }
                _ = tokio::time::sleep(delay) => {
                    dash_trace!("Timer {:?} fired", timer);
                    sink.fire(timer);
                }
            }
        });
        dash_debug!("Scheduled {:?} in {:?}", timer, delay);
        self.pending.insert(timer, PendingTimer { token, task });
    }

    /// Cancels `timer` if it has not fired yet. Returns `true` if it was pending.
    pub fn cancel(&mut self, timer: K) -> bool {
        match self.pending.remove(&timer) {
            Some(pending) if !pending.task.is_finished() => {
                pending.token.cancel();
                dash_debug!("Cancelled {:?}", timer);
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.root.cancel();
        self.root = CancellationToken::new();
        let count = self.pending.drain().count();
        if count > 0 {
            dash_debug!("Cancelled all timers ({} tracked)", count);
        }
    }

    /// Number of timers that have not fired or been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending
            .values()
            .filter(|pending| !pending.task.is_finished())
            .count()
    }
}

impl<K> Drop for TimerTable<K> {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
