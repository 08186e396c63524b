use dashboard_logging::{dash_debug, dash_info, dash_warn};

use crate::budget::{check_budget, parse_budget_text};
use crate::campaign::{toggle_keyword, toggle_publisher};
use crate::state::{ActivationState, DragSession, Lifecycle};
use crate::{AppState, Effect, Msg, Point, TimerId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_torn_down() {
        dash_debug!("Ignoring {:?} after teardown", msg);
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted => mount(&mut state),
        Msg::Teardown => teardown(&mut state),
        Msg::TimerFired(TimerId::NarrativeStep(step)) => narrative_step(&mut state, step),
        Msg::TimerFired(TimerId::Activation(attempt)) => {
            complete_activation(&mut state, attempt);
            Vec::new()
        }
        Msg::KeywordToggled(text) => {
            match toggle_keyword(&mut state.keywords, &text) {
                Some(active) => {
                    dash_info!("Keyword '{}' filter active={}", text, active);
                    state.unsaved_changes = true;
                    state.mark_dirty();
                }
                None => dash_warn!("Toggle for unknown keyword '{}'", text),
            }
            Vec::new()
        }
        Msg::PublisherToggled(name) => {
            match toggle_publisher(&mut state.publishers, &name) {
                Some(enabled) => {
                    dash_info!("Publisher '{}' enabled={}", name, enabled);
                    state.unsaved_changes = true;
                    state.mark_dirty();
                }
                None => dash_warn!("Toggle for unknown publisher '{}'", name),
            }
            Vec::new()
        }
        Msg::PreviewModeSelected(mode) => {
            if state.preview_mode != mode {
                state.preview_mode = mode;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BudgetEditOpened => {
            if !state.budget.is_editing() {
                state.budget.begin_edit();
                state.sync_budget_text();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GaugePressed(point) => press_gauge(&mut state, point),
        Msg::GaugeDragged(point) => {
            if state.drag == DragSession::Captured {
                set_pending_from_gauge(&mut state, point);
            }
            Vec::new()
        }
        Msg::GaugeReleased => release_capture(&mut state),
        Msg::BudgetTextChanged(raw) => {
            if state.budget.is_editing() {
                match parse_budget_text(&raw) {
                    Ok(value) => {
                        state.budget.set_pending(value);
                    }
                    Err(err) => dash_warn!("Rejected budget input: {}", err),
                }
                state.sync_budget_text();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BudgetTextCommitted => {
            if state.budget.is_editing() {
                let pending = state.budget.pending();
                if let Err(err) = check_budget(pending) {
                    let recovered = err.recover(pending);
                    dash_debug!("Clamping typed budget: {} -> {}", err, recovered);
                    state.budget.set_pending(recovered);
                }
                state.sync_budget_text();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BudgetApplied => {
            let effects = release_capture(&mut state);
            if let Some(committed) = state.budget.apply() {
                dash_info!("Daily budget committed: {}", committed);
                state.unsaved_changes = true;
                state.sync_budget_text();
                state.mark_dirty();
            }
            effects
        }
        Msg::BudgetEditCancelled => {
            let effects = release_capture(&mut state);
            if state.budget.discard() {
                dash_info!("Budget edit discarded");
                state.sync_budget_text();
                state.mark_dirty();
            }
            effects
        }
        Msg::ActivateClicked => activate(&mut state),
        Msg::ConfirmationDismissed => {
            if state.activation == ActivationState::Complete {
                state.activation = ActivationState::Idle;
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn mount(state: &mut AppState) -> Vec<Effect> {
    if state.lifecycle != Lifecycle::Created {
        return Vec::new();
    }
    state.lifecycle = Lifecycle::Mounted;
    state.mark_dirty();
    match state.sequencer.start() {
        Some(delay) => vec![Effect::ScheduleTimer {
            timer: TimerId::NarrativeStep(state.sequencer.current_step()),
            delay,
        }],
        None => Vec::new(),
    }
}

fn narrative_step(state: &mut AppState, step: usize) -> Vec<Effect> {
    if !state.sequencer.is_running() || step != state.sequencer.current_step() {
        dash_debug!(
            "Stale narrative timer for step {} (current {})",
            step,
            state.sequencer.current_step()
        );
        return Vec::new();
    }
    let Some(outcome) = state.sequencer.advance() else {
        return Vec::new();
    };
    if let Some(target) = outcome.reveal {
        if state.reveal.reveal(target) {
            dash_info!("Revealed {:?} panel", target);
        }
    }
    state.mark_dirty();
    match outcome.next_delay {
        Some(delay) => vec![Effect::ScheduleTimer {
            timer: TimerId::NarrativeStep(state.sequencer.current_step()),
            delay,
        }],
        None => Vec::new(),
    }
}

fn press_gauge(state: &mut AppState, point: Point) -> Vec<Effect> {
    if !state.budget.is_editing() || state.drag == DragSession::Captured {
        return Vec::new();
    }
    state.drag = DragSession::Captured;
    dash_debug!("Gauge captured pointer");
    set_pending_from_gauge(state, point);
    state.mark_dirty();
    vec![Effect::CapturePointer]
}

fn set_pending_from_gauge(state: &mut AppState, point: Point) {
    let value = state.gauge.value_for_point(point);
    if state.budget.set_pending(value) {
        state.sync_budget_text();
        state.mark_dirty();
    }
}

fn release_capture(state: &mut AppState) -> Vec<Effect> {
    if state.drag != DragSession::Captured {
        return Vec::new();
    }
    state.drag = DragSession::Released;
    dash_debug!("Gauge released pointer at {}", state.budget.pending());
    state.mark_dirty();
    vec![Effect::ReleasePointer]
}

fn activate(state: &mut AppState) -> Vec<Effect> {
    if !state.reveal.metrics || state.activation != ActivationState::Idle {
        return Vec::new();
    }
    state.activation = ActivationState::Activating;
    state.activation_attempt = state.activation_attempt.wrapping_add(1);
    dash_info!(
        "Activation attempt {} started (budget {})",
        state.activation_attempt,
        state.budget.committed()
    );
    state.mark_dirty();
    vec![Effect::ScheduleTimer {
        timer: TimerId::Activation(state.activation_attempt),
        delay: state.timings.activation,
    }]
}

fn complete_activation(state: &mut AppState, attempt: u32) {
    if state.activation != ActivationState::Activating || attempt != state.activation_attempt {
        dash_debug!("Stale activation timer for attempt {}", attempt);
        return;
    }
    state.activation = ActivationState::Complete;
    state.unsaved_changes = false;
    dash_info!("Activation attempt {} complete", attempt);
    state.mark_dirty();
}

fn teardown(state: &mut AppState) -> Vec<Effect> {
    let mut effects = Vec::new();
    if state.sequencer.is_running() {
        let step = state.sequencer.current_step();
        state.sequencer.cancel();
        effects.push(Effect::CancelTimer {
            timer: TimerId::NarrativeStep(step),
        });
    }
    if state.activation == ActivationState::Activating {
        state.activation = ActivationState::Idle;
        effects.push(Effect::CancelTimer {
            timer: TimerId::Activation(state.activation_attempt),
        });
    }
    effects.extend(release_capture(state));
    state.budget.discard();
    state.sync_budget_text();
    state.lifecycle = Lifecycle::TornDown;
    state.mark_dirty();
    dash_info!("Dashboard torn down; {} effect(s) to cancel", effects.len());
    effects
}
