use std::sync::Once;
use std::time::Duration;

use campaign_core::{
    default_script, update, AppState, Effect, Lifecycle, Msg, RevealFlags, RevealTarget,
    ScriptStep, Settings, Severity, TimerId,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn scheduled_step(effects: &[Effect]) -> Option<usize> {
    effects.iter().find_map(|effect| match effect {
        Effect::ScheduleTimer {
            timer: TimerId::NarrativeStep(step),
            ..
        } => Some(*step),
        _ => None,
    })
}

/// Fires narrative timers as they are scheduled, recording flags after each step.
fn run_to_completion(state: AppState) -> (AppState, Vec<RevealFlags>) {
    let (mut state, mut effects) = update(state, Msg::Mounted);
    let mut flag_history = Vec::new();
    while let Some(step) = scheduled_step(&effects) {
        let (next, next_effects) = update(state, Msg::TimerFired(TimerId::NarrativeStep(step)));
        flag_history.push(next.reveal());
        state = next;
        effects = next_effects;
    }
    (state, flag_history)
}

#[test]
fn mount_schedules_first_step_with_configured_delay() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Mounted);

    assert_eq!(
        effects,
        vec![Effect::ScheduleTimer {
            timer: TimerId::NarrativeStep(0),
            delay: Duration::from_millis(300),
        }]
    );
    assert_eq!(state.lifecycle(), Lifecycle::Mounted);
    assert!(state.view().processing);
    assert!(state.view().logs.is_empty());
    assert!(state.consume_dirty());

    let (_state, effects) = update(state, Msg::Mounted);
    assert!(effects.is_empty());
}

#[test]
fn not_processing_before_mount() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.lifecycle(), Lifecycle::Created);
    assert!(!state.view().processing);

    let (state, _) = update(state, Msg::Mounted);
    assert!(state.view().processing);
}

#[test]
fn narrative_emits_every_entry_in_order() {
    init_logging();
    let script = default_script();
    let (state, _) = run_to_completion(AppState::new());
    let view = state.view();

    assert_eq!(view.logs.len(), script.len());
    for (idx, (entry, step)) in view.logs.iter().zip(&script).enumerate() {
        assert_eq!(entry.id, idx);
        assert_eq!(entry.message, step.message);
        assert_eq!(entry.severity, step.severity);
    }
    assert!(!view.processing);
    assert!(!view.loading);
    assert_eq!(
        view.reveal,
        RevealFlags {
            filter: true,
            publishers: true,
            ad_preview: true,
            metrics: true,
        }
    );
}

#[test]
fn reveal_flags_never_revert() {
    init_logging();
    let (_, history) = run_to_completion(AppState::new());
    let targets = [
        RevealTarget::Filter,
        RevealTarget::Publishers,
        RevealTarget::AdPreview,
        RevealTarget::Metrics,
    ];
    for window in history.windows(2) {
        for target in targets {
            if window[0].is_revealed(target) {
                assert!(window[1].is_revealed(target), "{target:?} reverted");
            }
        }
    }
}

#[test]
fn each_flag_opens_on_its_own_step() {
    init_logging();
    let script = vec![
        ScriptStep::new("one", Severity::Info).revealing(RevealTarget::Metrics),
        ScriptStep::new("two", Severity::Warning),
        ScriptStep::new("three", Severity::Success).revealing(RevealTarget::Filter),
    ];
    let state = AppState::with_settings(Settings {
        script,
        ..Settings::default()
    });
    let (state, history) = run_to_completion(state);

    assert_eq!(history.len(), 3);
    assert!(history[0].metrics && !history[0].filter);
    assert!(history[1].metrics && !history[1].filter);
    assert!(history[2].metrics && history[2].filter);
    assert!(!state.reveal().publishers);
}

#[test]
fn stale_or_duplicate_step_timer_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(state, Msg::TimerFired(TimerId::NarrativeStep(0)));
    assert_eq!(state.view().logs.len(), 1);

    let (mut state, effects) = update(state, Msg::TimerFired(TimerId::NarrativeStep(0)));
    assert!(effects.is_empty());
    assert_eq!(state.view().logs.len(), 1);
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::TimerFired(TimerId::NarrativeStep(5)));
    assert!(effects.is_empty());
    assert_eq!(state.view().logs.len(), 1);
    assert!(!state.consume_dirty());
}

#[test]
fn empty_script_is_done_without_timers() {
    init_logging();
    let state = AppState::with_settings(Settings {
        script: Vec::new(),
        ..Settings::default()
    });
    let (state, effects) = update(state, Msg::Mounted);

    assert!(effects.is_empty());
    assert!(!state.view().processing);
}

#[test]
fn teardown_cancels_pending_step_and_ignores_late_fire() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(state, Msg::TimerFired(TimerId::NarrativeStep(0)));
    let (state, effects) = update(state, Msg::Teardown);

    assert_eq!(
        effects,
        vec![Effect::CancelTimer {
            timer: TimerId::NarrativeStep(1),
        }]
    );
    assert_eq!(state.lifecycle(), Lifecycle::TornDown);
    assert!(!state.view().processing);

    let before = state.view();
    let (state, effects) = update(state, Msg::TimerFired(TimerId::NarrativeStep(1)));
    assert!(effects.is_empty());
    assert_eq!(state.view().logs, before.logs);
    assert_eq!(state.reveal(), before.reveal);
}
