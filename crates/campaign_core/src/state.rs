use std::time::Duration;

use crate::budget::{budget_text, BudgetState, DEFAULT_BUDGET};
use crate::gauge::{self, GaugeGeometry};
use crate::metrics;
use crate::sequencer::{default_script, NarrativeSequencer, RevealFlags, ScriptStep};
use crate::view_model::{
    ActivationView, AppViewModel, BudgetEditorView, CampaignSummary, GaugeView, MetricsView,
};
use crate::{default_keywords, default_publishers, CampaignProfile, Keyword, PreviewMode, Publisher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub narrative_step: Duration,
    pub activation: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            narrative_step: Duration::from_millis(300),
            activation: Duration::from_millis(2_000),
        }
    }
}

/// Everything needed to build a fresh dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timings: Timings,
    pub initial_budget: u32,
    pub script: Vec<ScriptStep>,
    pub keywords: Vec<Keyword>,
    pub publishers: Vec<Publisher>,
    pub profile: CampaignProfile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            initial_budget: DEFAULT_BUDGET,
            script: default_script(),
            keywords: default_keywords(),
            publishers: default_publishers(),
            profile: CampaignProfile::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationState {
    #[default]
    Idle,
    Activating,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Released,
    Captured,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) timings: Timings,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) profile: CampaignProfile,
    pub(crate) sequencer: NarrativeSequencer,
    pub(crate) reveal: RevealFlags,
    pub(crate) keywords: Vec<Keyword>,
    pub(crate) publishers: Vec<Publisher>,
    pub(crate) preview_mode: PreviewMode,
    pub(crate) budget: BudgetState,
    pub(crate) budget_text: String,
    pub(crate) gauge: GaugeGeometry,
    pub(crate) drag: DragSession,
    pub(crate) activation: ActivationState,
    pub(crate) activation_attempt: u32,
    pub(crate) unsaved_changes: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let budget = BudgetState::new(settings.initial_budget);
        Self {
            timings: settings.timings,
            lifecycle: Lifecycle::Created,
            profile: settings.profile,
            sequencer: NarrativeSequencer::new(settings.script, settings.timings.narrative_step),
            reveal: RevealFlags::default(),
            keywords: settings.keywords,
            publishers: settings.publishers,
            preview_mode: PreviewMode::default(),
            budget_text: budget_text(budget.pending()),
            budget,
            gauge: GaugeGeometry::default(),
            drag: DragSession::Released,
            activation: ActivationState::Idle,
            activation_attempt: 0,
            unsaved_changes: false,
            dirty: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn activation(&self) -> ActivationState {
        self.activation
    }

    pub fn drag(&self) -> DragSession {
        self.drag
    }

    pub fn gauge(&self) -> &GaugeGeometry {
        &self.gauge
    }

    pub fn budget(&self) -> &BudgetState {
        &self.budget
    }

    pub fn reveal(&self) -> RevealFlags {
        self.reveal
    }

    pub fn view(&self) -> AppViewModel {
        let enabled_publishers = metrics::enabled_publisher_count(&self.publishers);
        let active_keywords = metrics::active_keyword_count(&self.keywords);
        let committed = self.budget.committed();
        let recommended = metrics::recommended_budget(enabled_publishers);
        let total_reach = metrics::total_reach(&self.publishers);

        let metrics_view = MetricsView {
            total_reach,
            reach_label: metrics::format_reach_millions(total_reach),
            waste_inventory: metrics::waste_inventory(&self.keywords),
            estimated_clicks: metrics::estimated_clicks(&self.publishers, committed),
            estimated_cost: metrics::estimated_cost(&self.publishers, committed),
            recommended_budget: recommended,
            enabled_publishers,
            total_publishers: self.publishers.len(),
            active_keywords,
            total_keywords: self.keywords.len(),
            verified_jobs: metrics::verified_jobs_range(committed),
            avg_cost_per_job: metrics::avg_cost_per_job(committed),
        };

        let budget_editor = self.budget.is_editing().then(|| {
            let pending = self.budget.pending();
            BudgetEditorView {
                pending,
                text: self.budget_text.clone(),
                recommended,
                dragging: self.drag == DragSession::Captured,
                projected_clicks: metrics::projected_clicks(pending),
                projected_leads: metrics::projected_leads(pending),
                gauge: GaugeView {
                    geometry: self.gauge,
                    knob_angle: gauge::angle_for_value(pending),
                    fill_fraction: gauge::fill_fraction(pending),
                    recommended_angle: gauge::angle_for_value(recommended),
                    recommended_band: gauge::recommended_band(recommended),
                    tick_angles: gauge::tick_angles().collect(),
                },
            }
        });

        let summary = (self.activation == ActivationState::Complete).then_some(CampaignSummary {
            daily_budget: committed,
            active_keywords,
            enabled_publishers,
        });

        AppViewModel {
            profile: self.profile.clone(),
            logs: self.sequencer.log().to_vec(),
            processing: self.is_processing(),
            reveal: self.reveal,
            loading: self.reveal.is_loading(),
            keywords: self.keywords.clone(),
            publishers: self.publishers.clone(),
            preview_mode: self.preview_mode,
            metrics: metrics_view,
            committed_budget: committed,
            budget_editor,
            activation: ActivationView {
                state: self.activation,
                trigger_visible: self.reveal.metrics,
                trigger_enabled: self.reveal.metrics
                    && self.activation == ActivationState::Idle
                    && self.lifecycle != Lifecycle::TornDown,
                summary,
            },
            unsaved_changes: self.unsaved_changes,
            dirty: self.dirty,
        }
    }

    /// Returns whether a repaint is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    fn is_processing(&self) -> bool {
        match self.lifecycle {
            Lifecycle::Created | Lifecycle::TornDown => false,
            Lifecycle::Mounted => !self.sequencer.is_done() && !self.sequencer.is_empty(),
        }
    }

    pub(crate) fn sync_budget_text(&mut self) {
        self.budget_text = budget_text(self.budget.pending());
    }
}
