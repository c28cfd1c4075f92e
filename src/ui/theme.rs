//! Class helpers shared by the booking components. Rules live in `assets/main.css`.

use crate::domain::StepStatus;

// ============================================
// SKIP CARDS
// ============================================

pub fn skip_card(selected: bool) -> &'static str {
    if selected {
        "skip-card skip-card--selected"
    } else {
        "skip-card"
    }
}

pub fn skip_icon(selected: bool) -> &'static str {
    if selected {
        "skip-icon skip-icon--selected"
    } else {
        "skip-icon"
    }
}

pub fn select_button(selected: bool) -> &'static str {
    if selected {
        "btn-select btn-select--selected"
    } else {
        "btn-select"
    }
}

// ============================================
// STEP INDICATOR
// ============================================

pub fn step_circle(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Done => "step-circle step-circle--done",
        StepStatus::Active => "step-circle step-circle--active",
        StepStatus::Upcoming => "step-circle",
    }
}

pub fn step_label(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Done => "step-label step-label--done",
        StepStatus::Active => "step-label step-label--active",
        StepStatus::Upcoming => "step-label",
    }
}

pub fn step_connector(reached: bool) -> &'static str {
    if reached {
        "step-connector step-connector--reached"
    } else {
        "step-connector"
    }
}

// ============================================
// NAVIGATION
// ============================================

pub fn continue_button(enabled: bool) -> &'static str {
    if enabled {
        "btn-continue"
    } else {
        "btn-continue btn-continue--disabled"
    }
}
