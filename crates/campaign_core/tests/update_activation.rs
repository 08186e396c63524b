use std::sync::Once;
use std::time::Duration;

use campaign_core::{
    update, ActivationState, AppState, CampaignSummary, Effect, Msg, TimerId,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

/// Mounts and plays the whole narrative so the activation trigger is visible.
fn revealed_state() -> AppState {
    let (mut state, mut effects) = update(AppState::new(), Msg::Mounted);
    while let Some(Effect::ScheduleTimer { timer, .. }) = effects.first().cloned() {
        let (next, next_effects) = update(state, Msg::TimerFired(timer));
        state = next;
        effects = next_effects;
    }
    assert!(state.reveal().metrics);
    state
}

#[test]
fn trigger_hidden_until_metrics_revealed() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let view = state.view();
    assert!(!view.activation.trigger_visible);
    assert!(!view.activation.trigger_enabled);

    let (state, effects) = update(state, Msg::ActivateClicked);
    assert!(effects.is_empty());
    assert_eq!(state.activation(), ActivationState::Idle);
}

#[test]
fn activate_goes_to_activating_and_disables_trigger() {
    init_logging();
    let (state, effects) = update(revealed_state(), Msg::ActivateClicked);

    assert_eq!(
        effects,
        vec![Effect::ScheduleTimer {
            timer: TimerId::Activation(1),
            delay: Duration::from_millis(2_000),
        }]
    );
    let view = state.view();
    assert_eq!(view.activation.state, ActivationState::Activating);
    assert!(view.activation.trigger_visible);
    assert!(!view.activation.trigger_enabled);
    assert_eq!(view.activation.summary, None);

    let (state, effects) = update(state, Msg::ActivateClicked);
    assert!(effects.is_empty());
    assert_eq!(state.activation(), ActivationState::Activating);
}

#[test]
fn timer_completes_activation_exactly_once() {
    init_logging();
    let (state, _) = update(revealed_state(), Msg::KeywordToggled("DIY".to_string()));
    assert!(state.view().unsaved_changes);

    let (state, _) = update(state, Msg::ActivateClicked);
    let (mut state, effects) = update(state, Msg::TimerFired(TimerId::Activation(1)));
    assert!(effects.is_empty());

    let view = state.view();
    assert_eq!(view.activation.state, ActivationState::Complete);
    assert!(!view.unsaved_changes);
    assert_eq!(
        view.activation.summary,
        Some(CampaignSummary {
            daily_budget: 500,
            active_keywords: 4,
            enabled_publishers: 5,
        })
    );
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::TimerFired(TimerId::Activation(1)));
    assert_eq!(state.activation(), ActivationState::Complete);
    assert!(!state.consume_dirty());
}

#[test]
fn dismissing_confirmation_allows_a_fresh_attempt() {
    init_logging();
    let (state, _) = update(revealed_state(), Msg::ActivateClicked);
    let (state, _) = update(state, Msg::TimerFired(TimerId::Activation(1)));
    let (state, _) = update(state, Msg::ConfirmationDismissed);
    assert_eq!(state.activation(), ActivationState::Idle);

    let (state, effects) = update(state, Msg::ActivateClicked);
    assert_eq!(
        effects,
        vec![Effect::ScheduleTimer {
            timer: TimerId::Activation(2),
            delay: Duration::from_millis(2_000),
        }]
    );

    // A timer left over from the first attempt must not complete the second.
    let (state, _) = update(state, Msg::TimerFired(TimerId::Activation(1)));
    assert_eq!(state.activation(), ActivationState::Activating);
    let (state, _) = update(state, Msg::TimerFired(TimerId::Activation(2)));
    assert_eq!(state.activation(), ActivationState::Complete);
}

#[test]
fn teardown_while_activating_cancels_timer() {
    init_logging();
    let (state, _) = update(revealed_state(), Msg::ActivateClicked);
    let (state, effects) = update(state, Msg::Teardown);

    assert_eq!(
        effects,
        vec![Effect::CancelTimer {
            timer: TimerId::Activation(1),
        }]
    );

    let (state, _) = update(state, Msg::TimerFired(TimerId::Activation(1)));
    assert_ne!(state.activation(), ActivationState::Complete);
    assert!(!state.view().activation.trigger_enabled);
}
