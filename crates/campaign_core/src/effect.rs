use std::time::Duration;

/// Timers the core can ask the shell to run. Each id carries enough context to
/// recognise a stale fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Fires the narrative step with this index.
    NarrativeStep(usize),
    /// Completes the activation attempt with this number.
    Activation(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::TimerFired(timer)` after `delay`. Replaces any pending
    /// timer with the same id.
    ScheduleTimer { timer: TimerId, delay: Duration },
    CancelTimer { timer: TimerId },
    /// Route all pointer input to the gauge until released.
    CapturePointer,
    ReleasePointer,
}
