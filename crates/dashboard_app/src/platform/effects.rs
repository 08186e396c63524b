use std::io;

use campaign_core::{Effect, Msg, TimerId};
use campaign_timers::TimerService;
use dashboard_logging::{dash_debug, dash_info};

/// Executes core effects and turns elapsed timers back into messages.
pub struct EffectRunner {
    timers: TimerService<TimerId>,
    pointer_captured: bool,
}

impl EffectRunner {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            timers: TimerService::new()?,
            pointer_captured: false,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleTimer { timer, delay } => {
                    dash_debug!("ScheduleTimer {:?} delay={:?}", timer, delay);
                    self.timers.schedule(timer, delay);
                }
                Effect::CancelTimer { timer } => {
                    dash_info!("CancelTimer {:?}", timer);
                    self.timers.cancel(timer);
                }
                Effect::CapturePointer => {
                    self.pointer_captured = true;
                }
                Effect::ReleasePointer => {
                    self.pointer_captured = false;
                }
            }
        }
    }

    /// Messages for every timer that elapsed since the last call.
    pub fn drain_fired(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.timers.try_recv())
            .map(Msg::TimerFired)
            .collect()
    }

    /// Whether pointer input currently belongs to the budget gauge.
    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    pub fn shutdown(&self) {
        self.timers.cancel_all();
    }
}
