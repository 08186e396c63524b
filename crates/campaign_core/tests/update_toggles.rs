use std::sync::Once;

use campaign_core::{default_keywords, update, AppState, Msg, PreviewMode};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn toggle_all_keywords(mut state: AppState) -> AppState {
    for keyword in default_keywords() {
        state = update(state, Msg::KeywordToggled(keyword.text)).0;
    }
    state
}

#[test]
fn baseline_metrics() {
    init_logging();
    let metrics = AppState::new().view().metrics;

    assert_eq!(metrics.total_reach, 12_500_000);
    assert_eq!(metrics.reach_label, "12.5M");
    assert_eq!(metrics.waste_inventory, 2_419);
    assert_eq!(metrics.estimated_clicks, 85);
    assert_eq!(metrics.estimated_cost, 500);
    assert_eq!(metrics.recommended_budget, 500);
    assert_eq!(metrics.verified_jobs, (8, 13));
    assert_eq!(metrics.active_keywords, 5);
    assert_eq!(metrics.total_keywords, 5);
}

#[test]
fn keyword_round_trip_restores_waste_baseline() {
    init_logging();
    let state = toggle_all_keywords(AppState::new());
    let view = state.view();
    assert_eq!(view.metrics.active_keywords, 0);
    assert_eq!(view.metrics.waste_inventory, 2_419 - 5 * 380);
    assert!(view.unsaved_changes);

    let state = toggle_all_keywords(state);
    assert_eq!(state.view().metrics.waste_inventory, 2_419);
    assert_eq!(state.view().keywords, default_keywords());
}

#[test]
fn publisher_toggle_updates_reach_and_recommendation() {
    init_logging();
    let mut state = AppState::new();
    for name in ["CNN Weather (Local)", "Yahoo! Real Estate"] {
        state = update(state, Msg::PublisherToggled(name.to_string())).0;
    }
    let view = state.view();

    assert_eq!(view.metrics.enabled_publishers, 3);
    assert_eq!(view.metrics.recommended_budget, 300);
    assert_eq!(view.metrics.total_reach, 6_800_000);
    assert_eq!(view.metrics.estimated_cost, 300);
    assert_eq!(view.metrics.estimated_clicks, 51);
    assert!(!view.publishers[0].enabled);
    assert!(view.publishers[0].verified);
}

#[test]
fn unknown_names_change_nothing() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (state, effects) = update(state, Msg::KeywordToggled("Nope".to_string()));
    assert!(effects.is_empty());
    let (mut state, effects) = update(state, Msg::PublisherToggled("Nope".to_string()));
    assert!(effects.is_empty());

    assert_eq!(state.view(), before);
    assert!(!state.consume_dirty());
}

#[test]
fn preview_mode_switches() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::PreviewModeSelected(PreviewMode::Mobile));
    assert_eq!(state.view().preview_mode, PreviewMode::Mobile);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::PreviewModeSelected(PreviewMode::Mobile));
    assert!(!state.consume_dirty());
}

#[test]
fn input_after_teardown_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (mut state, _) = update(state, Msg::Teardown);
    state.consume_dirty();
    let before = state.clone();

    for msg in [
        Msg::KeywordToggled("DIY".to_string()),
        Msg::PreviewModeSelected(PreviewMode::Mobile),
        Msg::BudgetEditOpened,
        Msg::Mounted,
    ] {
        let (next, effects) = update(state, msg);
        assert!(effects.is_empty());
        state = next;
    }

    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}
