use std::sync::mpsc;

/// Receives timers as they elapse.
pub trait TimerSink<K>: Send + Sync {
    fn fire(&self, timer: K);
}

pub struct ChannelTimerSink<K> {
    tx: mpsc::Sender<K>,
}

impl<K> ChannelTimerSink<K> {
    pub fn new(tx: mpsc::Sender<K>) -> Self {
        Self { tx }
    }
}

impl<K: Send> TimerSink<K> for ChannelTimerSink<K> {
    fn fire(&self, timer: K) {
        // The receiver is gone once the UI has shut down.
        let _ = self.tx.send(timer);
    }
}
