use dioxus::prelude::*;
use tracing::info;

use crate::domain::BookingState;
use crate::ui::components::{
    progress_indicator::ProgressIndicator,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let booking = use_context::<Signal<BookingState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let state = booking();
    let steps = state.steps();
    let current = state.current_step;
    let can_continue = state.can_continue();
    let step_number = current.position() + 1;
    let step_total = steps.len();
    let version = version_label();

    let on_back = move |_: MouseEvent| {
        let message = booking.with(|st| st.back_acknowledgement());
        info!("back requested");
        push_toast(toasts, ToastKind::Info, message);
    };

    let on_continue = move |_: MouseEvent| {
        // Stubbed navigation: acknowledge the choice and stay on this step.
        if let Some(message) = booking.with(|st| st.continue_acknowledgement()) {
            info!(%message, "continue requested");
            push_toast(toasts, ToastKind::Info, message);
        }
    };

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                h1 { class: "shell-title", "{APP_NAME}" }
                div { class: "shell-step", "Step {step_number} of {step_total}" }
            }

            div { class: "shell-progress",
                ProgressIndicator { steps, current }
            }

            main { class: "shell-main", {children} }

            footer { class: "shell-nav",
                button { class: "btn-back", onclick: on_back, "← Back" }
                span { class: "shell-version", "{version}" }
                button {
                    class: "{theme::continue_button(can_continue)}",
                    disabled: !can_continue,
                    onclick: on_continue,
                    "Continue →"
                }
            }
        }
    }
}
