use dioxus::prelude::*;

use crate::domain::{progress_percent, step_status, BookingStep, ProgressStep, StepStatus};
use crate::ui::theme;

#[component]
pub fn ProgressIndicator(steps: Vec<ProgressStep>, current: BookingStep) -> Element {
    let current_index = steps
        .iter()
        .position(|entry| entry.step == current)
        .unwrap_or_default();
    let percent = progress_percent(&steps, current);
    let total = steps.len();
    let position = current_index + 1;
    let current_label = steps
        .get(current_index)
        .map(|entry| (entry.step.icon(), entry.label));

    rsx! {
        div { class: "progress",
            // Compact bar for narrow windows.
            div { class: "progress-compact",
                div { class: "progress-compact__meta",
                    span { "Progress" }
                    span { "{position} of {total}" }
                }
                div { class: "progress-bar",
                    div { class: "progress-bar__fill", style: "width: {percent:.0}%;" }
                }
                if let Some((icon, label)) = current_label {
                    div { class: "progress-compact__current",
                        span { "{icon}" }
                        span { "{label}" }
                    }
                }
            }

            ol { class: "progress-steps",
                for (index, entry) in steps.iter().enumerate() {
                    {
                        let status = step_status(&steps, index, current);
                        let number = index + 1;
                        let is_last = number == total;
                        rsx! {
                            li { key: "{index}", class: "progress-step",
                                div { class: "{theme::step_circle(status)}",
                                    if status == StepStatus::Done {
                                        "✓"
                                    } else {
                                        "{number}"
                                    }
                                }
                                span { class: "{theme::step_label(status)}",
                                    "{entry.step.icon()} {entry.label}"
                                }
                                if !is_last {
                                    div { class: "{theme::step_connector(index < current_index)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
