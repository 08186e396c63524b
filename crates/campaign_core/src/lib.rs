//! Campaign dashboard core: pure state machine, gauge geometry and derived
//! metrics. Nothing in here touches a clock, a thread or the screen.
pub mod budget;
mod campaign;
mod effect;
pub mod gauge;
pub mod metrics;
mod msg;
mod sequencer;
mod state;
mod update;
mod view_model;

pub use budget::{BudgetInputError, BudgetState, BUDGET_MAX, BUDGET_MIN, DEFAULT_BUDGET};
pub use campaign::{
    default_keywords, default_publishers, CampaignProfile, Keyword, PreviewMode, Publisher,
};
pub use effect::{Effect, TimerId};
pub use gauge::{GaugeGeometry, Point, GAUGE_MAX, GAUGE_MIN};
pub use msg::Msg;
pub use sequencer::{
    default_script, LogEntry, NarrativeSequencer, RevealFlags, RevealTarget, ScriptStep,
    SequencerStatus, Severity, StepOutcome,
};
pub use state::{ActivationState, AppState, DragSession, Lifecycle, Settings, Timings};
pub use update::update;
pub use view_model::{
    ActivationView, AppViewModel, BudgetEditorView, CampaignSummary, GaugeView, MetricsView,
};
