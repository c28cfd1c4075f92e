use serde::{Deserialize, Serialize};

/// The six stages of a booking. Only [`BookingStep::SkipSelection`] has behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStep {
    Postcode,
    WasteType,
    SkipSelection,
    Permit,
    Date,
    Payment,
}

impl BookingStep {
    pub const ALL: [BookingStep; 6] = [
        BookingStep::Postcode,
        BookingStep::WasteType,
        BookingStep::SkipSelection,
        BookingStep::Permit,
        BookingStep::Date,
        BookingStep::Payment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::Postcode => "Location",
            BookingStep::WasteType => "Waste Type",
            BookingStep::SkipSelection => "Skip Selection",
            BookingStep::Permit => "Permit Check",
            BookingStep::Date => "Date Selection",
            BookingStep::Payment => "Payment",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BookingStep::Postcode => "📍",
            BookingStep::WasteType => "🗑️",
            BookingStep::SkipSelection => "📦",
            BookingStep::Permit => "🛡️",
            BookingStep::Date => "📅",
            BookingStep::Payment => "💳",
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|step| step == self)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub step: BookingStep,
    pub label: &'static str,
    pub completed: bool,
}

/// How a step indicator should draw a step relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Upcoming,
}

/// Step list for a flow sitting on `current`: everything before it is completed.
pub fn progress_steps(current: BookingStep) -> Vec<ProgressStep> {
    let current_index = current.position();
    BookingStep::ALL
        .iter()
        .enumerate()
        .map(|(index, step)| ProgressStep {
            step: *step,
            label: step.label(),
            completed: index < current_index,
        })
        .collect()
}

pub fn step_status(steps: &[ProgressStep], index: usize, current: BookingStep) -> StepStatus {
    let current_index = steps
        .iter()
        .position(|entry| entry.step == current)
        .unwrap_or_default();
    let Some(entry) = steps.get(index) else {
        return StepStatus::Upcoming;
    };

    if entry.completed || index < current_index {
        StepStatus::Done
    } else if entry.step == current {
        StepStatus::Active
    } else {
        StepStatus::Upcoming
    }
}

/// Width of the compact progress bar, in percent.
pub fn progress_percent(steps: &[ProgressStep], current: BookingStep) -> f64 {
    if steps.is_empty() {
        return 0.0;
    }
    let current_index = steps
        .iter()
        .position(|entry| entry.step == current)
        .unwrap_or_default();
    (current_index + 1) as f64 / steps.len() as f64 * 100.0
}
