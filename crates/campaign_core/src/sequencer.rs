//! Narrative sequencer: reveals a scripted log one step at a time.
//!
//! The sequencer does not own a clock. Callers ask it for the delay before the
//! next step, wait however they like, then call [`NarrativeSequencer::advance`].

use std::time::Duration;

use dashboard_logging::{dash_debug, dash_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// Panels gated behind a narrative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Filter,
    Publishers,
    AdPreview,
    Metrics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub message: String,
    pub severity: Severity,
    pub reveal: Option<RevealTarget>,
}

impl ScriptStep {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            reveal: None,
        }
    }

    pub fn revealing(mut self, target: RevealTarget) -> Self {
        self.reveal = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    pub message: String,
    pub severity: Severity,
}

/// One-way panel gates. A flag never goes back to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealFlags {
    pub filter: bool,
    pub publishers: bool,
    pub ad_preview: bool,
    pub metrics: bool,
}

impl RevealFlags {
    /// Opens the gate for `target`. Returns `true` only the first time.
    pub fn reveal(&mut self, target: RevealTarget) -> bool {
        let slot = match target {
            RevealTarget::Filter => &mut self.filter,
            RevealTarget::Publishers => &mut self.publishers,
            RevealTarget::AdPreview => &mut self.ad_preview,
            RevealTarget::Metrics => &mut self.metrics,
        };
        let newly_opened = !*slot;
        *slot = true;
        newly_opened
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        match target {
            RevealTarget::Filter => self.filter,
            RevealTarget::Publishers => self.publishers,
            RevealTarget::AdPreview => self.ad_preview,
            RevealTarget::Metrics => self.metrics,
        }
    }

    /// Nothing above the fold is visible yet.
    pub fn is_loading(&self) -> bool {
        !self.filter && !self.publishers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerStatus {
    #[default]
    Idle,
    Running,
    Done,
    Cancelled,
}

/// What a single step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub entry: LogEntry,
    pub reveal: Option<RevealTarget>,
    /// Delay before the following step, or `None` when the script is exhausted.
    pub next_delay: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSequencer {
    script: Vec<ScriptStep>,
    step_delay: Duration,
    current_step: usize,
    log: Vec<LogEntry>,
    status: SequencerStatus,
}

impl NarrativeSequencer {
    pub fn new(script: Vec<ScriptStep>, step_delay: Duration) -> Self {
        Self {
            script,
            step_delay,
            current_step: 0,
            log: Vec::new(),
            status: SequencerStatus::Idle,
        }
    }

    /// Starts the sequence. Returns the delay before the first step, or `None`
    /// if there is nothing to schedule (empty script, or already started).
    pub fn start(&mut self) -> Option<Duration> {
        if self.status != SequencerStatus::Idle {
            return None;
        }
        if self.script.is_empty() {
            self.status = SequencerStatus::Done;
            return None;
        }
        self.status = SequencerStatus::Running;
        dash_info!("Narrative started: {} steps", self.script.len());
        Some(self.step_delay)
    }

    /// Emits the current step and moves to the next one.
    pub fn advance(&mut self) -> Option<StepOutcome> {
        if self.status != SequencerStatus::Running {
            return None;
        }
        let step = self.script.get(self.current_step)?;
        let entry = LogEntry {
            id: self.current_step,
            message: step.message.clone(),
            severity: step.severity,
        };
        let reveal = step.reveal;
        self.log.push(entry.clone());
        self.current_step += 1;
        dash_debug!("Narrative step {}: {}", entry.id, entry.message);

        let next_delay = if self.current_step < self.script.len() {
            Some(self.step_delay)
        } else {
            self.status = SequencerStatus::Done;
            dash_info!("Narrative finished after {} steps", self.current_step);
            None
        };

        Some(StepOutcome {
            entry,
            reveal,
            next_delay,
        })
    }

    /// Stops a running sequence. Returns `true` if a step was pending.
    pub fn cancel(&mut self) -> bool {
        if self.status == SequencerStatus::Running {
            self.status = SequencerStatus::Cancelled;
            dash_info!("Narrative cancelled at step {}", self.current_step);
            true
        } else {
            false
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == SequencerStatus::Done
    }

    pub fn is_running(&self) -> bool {
        self.status == SequencerStatus::Running
    }

    pub fn status(&self) -> SequencerStatus {
        self.status
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }
}

/// The stock audit narration. Step text is presentation data.
pub fn default_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new("Connecting to ad exchange...", Severity::Info),
        ScriptStep::new("Checking state license registry... [match]", Severity::Success),
        ScriptStep::new("Analyzing advertiser site intent...", Severity::Info),
        ScriptStep::new("Blocking keyword: 'DIY'...", Severity::Warning),
        ScriptStep::new("Blocking keyword: 'Salary'...", Severity::Warning),
        ScriptStep::new("Blocking keyword: 'Internship'...", Severity::Warning)
            .revealing(RevealTarget::Filter),
        ScriptStep::new("Geolocating service area...", Severity::Success)
            .revealing(RevealTarget::AdPreview),
        ScriptStep::new("Cross-referencing publisher allow-list...", Severity::Info)
            .revealing(RevealTarget::Publishers),
        ScriptStep::new("Ready for activation.", Severity::Success)
            .revealing(RevealTarget::Metrics),
    ]
}
