use crate::gauge::GaugeGeometry;
use crate::{
    ActivationState, CampaignProfile, Keyword, LogEntry, PreviewMode, Publisher, RevealFlags,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub profile: CampaignProfile,
    pub logs: Vec<LogEntry>,
    /// Narrative still has steps to emit.
    pub processing: bool,
    pub reveal: RevealFlags,
    /// Neither top card is revealed yet.
    pub loading: bool,
    pub keywords: Vec<Keyword>,
    pub publishers: Vec<Publisher>,
    pub preview_mode: PreviewMode,
    pub metrics: MetricsView,
    pub committed_budget: u32,
    /// Present while the budget editor is open.
    pub budget_editor: Option<BudgetEditorView>,
    pub activation: ActivationView,
    pub unsaved_changes: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsView {
    pub total_reach: u64,
    pub reach_label: String,
    pub waste_inventory: i64,
    pub estimated_clicks: u32,
    pub estimated_cost: u32,
    pub recommended_budget: u32,
    pub enabled_publishers: usize,
    pub total_publishers: usize,
    pub active_keywords: usize,
    pub total_keywords: usize,
    pub verified_jobs: (u32, u32),
    pub avg_cost_per_job: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEditorView {
    pub pending: u32,
    pub text: String,
    pub recommended: u32,
    pub dragging: bool,
    pub projected_clicks: u32,
    pub projected_leads: u32,
    pub gauge: GaugeView,
}

/// Angles are in radians, 0 at the right end of the arc, π at the left.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub geometry: GaugeGeometry,
    pub knob_angle: f64,
    pub fill_fraction: f64,
    pub recommended_angle: f64,
    pub recommended_band: (f64, f64),
    pub tick_angles: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationView {
    pub state: ActivationState,
    pub trigger_visible: bool,
    pub trigger_enabled: bool,
    pub summary: Option<CampaignSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignSummary {
    pub daily_budget: u32,
    pub active_keywords: usize,
    pub enabled_publishers: usize,
}
