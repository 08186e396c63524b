use crate::{Point, PreviewMode, TimerId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The dashboard is on screen; starts the narrative.
    Mounted,
    /// The dashboard is going away; outstanding timers must not mutate state.
    Teardown,
    /// A timer requested through `Effect::ScheduleTimer` elapsed.
    TimerFired(TimerId),
    /// User clicked a filter keyword chip.
    KeywordToggled(String),
    /// User clicked a publisher row.
    PublisherToggled(String),
    /// User picked the ad preview layout.
    PreviewModeSelected(PreviewMode),
    /// User opened the budget editor.
    BudgetEditOpened,
    /// Pointer pressed on the gauge, in gauge view-box coordinates.
    GaugePressed(Point),
    /// Pointer moved while the gauge holds the capture.
    GaugeDragged(Point),
    /// Pointer released after a gauge drag.
    GaugeReleased,
    /// User edited the budget text field.
    BudgetTextChanged(String),
    /// Budget text field lost focus or the user pressed Enter.
    BudgetTextCommitted,
    /// User clicked Apply in the budget editor.
    BudgetApplied,
    /// User closed the budget editor without applying.
    BudgetEditCancelled,
    /// User clicked Activate Campaign.
    ActivateClicked,
    /// User closed the activation confirmation.
    ConfirmationDismissed,
}
