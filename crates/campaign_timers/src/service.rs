use std::fmt::Debug;
use std::hash::Hash;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dashboard_logging::dash_info;

use crate::{ChannelTimerSink, TimerSink, TimerTable};

enum TimerCommand<K> {
    Schedule { timer: K, delay: Duration },
    Cancel { timer: K },
    CancelAll,
}

/// Handle to a background thread that owns a tokio runtime and a
/// [`TimerTable`]. Elapsed timers are collected with [`TimerService::try_recv`].
///
/// Dropping the handle cancels every pending timer.
pub struct TimerService<K> {
    cmd_tx: mpsc::Sender<TimerCommand<K>>,
    event_rx: mpsc::Receiver<K>,
}

impl<K> TimerService<K>
where
    K: Copy + Eq + Hash + Debug + Send + 'static,
{
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("campaign-timers")
            .enable_time()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<TimerCommand<K>>();
        let (event_tx, event_rx) = mpsc::channel::<K>();

        thread::Builder::new()
            .name("campaign-timer-control".to_string())
            .spawn(move || {
                let sink: Arc<dyn TimerSink<K>> = Arc::new(ChannelTimerSink::new(event_tx));
                let mut table = TimerTable::new(runtime.handle().clone(), sink);
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        TimerCommand::Schedule { timer, delay } => table.schedule(timer, delay),
                        TimerCommand::Cancel { timer } => {
                            table.cancel(timer);
                        }
                        TimerCommand::CancelAll => table.cancel_all(),
                    }
                }
                table.cancel_all();
                dash_info!("Timer service stopped");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn schedule(&self, timer: K, delay: Duration) {
        let _ = self.cmd_tx.send(TimerCommand::Schedule { timer, delay });
    }

    pub fn cancel(&self, timer: K) {
        let _ = self.cmd_tx.send(TimerCommand::Cancel { timer });
    }

    pub fn cancel_all(&self) {
        let _ = self.cmd_tx.send(TimerCommand::CancelAll);
    }

    pub fn try_recv(&self) -> Option<K> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<K> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
