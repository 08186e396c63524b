//! Committed/pending daily budget and free-text budget entry.

use thiserror::Error;

pub const BUDGET_MIN: u32 = 100;
pub const BUDGET_MAX: u32 = 10_000;
pub const DEFAULT_BUDGET: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetInputError {
    #[error("budget input {raw:?} contains no digits")]
    NoDigits { raw: String },
    #[error("budget {value} outside [{min}, {max}]")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

impl BudgetInputError {
    /// Value to fall back to, given the value currently pending.
    pub fn recover(&self, current: u32) -> u32 {
        match self {
            BudgetInputError::NoDigits { .. } => current,
            BudgetInputError::OutOfRange { value, min, max } => (*value).clamp(*min, *max),
        }
    }
}

/// Parses typed budget text by discarding every non-digit.
///
/// Empty input is `0` so the field can be cleared while editing. Input that is
/// non-empty but has no digits is rejected. Absurdly long digit runs saturate.
pub fn parse_budget_text(raw: &str) -> Result<u32, BudgetInputError> {
    if raw.is_empty() {
        return Ok(0);
    }
    let mut digits = raw.chars().filter_map(|c| c.to_digit(10)).peekable();
    if digits.peek().is_none() {
        return Err(BudgetInputError::NoDigits {
            raw: raw.to_string(),
        });
    }
    Ok(digits.fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d)))
}

/// Checks a typed value against the committed range.
pub fn check_budget(value: u32) -> Result<u32, BudgetInputError> {
    if (BUDGET_MIN..=BUDGET_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(BudgetInputError::OutOfRange {
            value,
            min: BUDGET_MIN,
            max: BUDGET_MAX,
        })
    }
}

pub fn clamp_budget(value: u32) -> u32 {
    value.clamp(BUDGET_MIN, BUDGET_MAX)
}

/// Text shown in the entry field for a pending value. Zero shows as empty.
pub fn budget_text(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetState {
    committed: u32,
    pending: u32,
    editing: bool,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

impl BudgetState {
    pub fn new(committed: u32) -> Self {
        let committed = clamp_budget(committed);
        Self {
            committed,
            pending: committed,
            editing: false,
        }
    }

    pub fn committed(&self) -> u32 {
        self.committed
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Opens an editing session seeded with the committed value.
    pub fn begin_edit(&mut self) {
        self.pending = self.committed;
        self.editing = true;
    }

    /// Sets the in-progress value. Ignored outside an editing session.
    pub fn set_pending(&mut self, value: u32) -> bool {
        if !self.editing || self.pending == value {
            return false;
        }
        self.pending = value;
        true
    }

    /// Copies the pending value into the committed budget and ends the session.
    pub fn apply(&mut self) -> Option<u32> {
        if !self.editing {
            return None;
        }
        self.committed = clamp_budget(self.pending);
        self.pending = self.committed;
        self.editing = false;
        Some(self.committed)
    }

    /// Ends the session without touching the committed budget.
    pub fn discard(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.pending = self.committed;
        self.editing = false;
        true
    }
}
