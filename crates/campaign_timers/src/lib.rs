//! Campaign timers: one-shot, cancelable timers executed on a background
//! tokio runtime and reported back to the UI thread over a channel.
mod service;
mod sink;
mod table;

pub use service::TimerService;
pub use sink::{ChannelTimerSink, TimerSink};
pub use table::TimerTable;
