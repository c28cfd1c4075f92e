use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::BookingState,
    infra::skips::NO_SKIPS_FOUND,
    ui::components::{
        skip_card::SkipCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

const SKELETON_CARDS: usize = 6;

#[component]
pub fn SkipSelectionPage() -> Element {
    let mut booking = use_context::<Signal<BookingState>>();
    let mut reload = use_context::<Signal<u32>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let state = booking();

    let on_select = move |skip_id: String| {
        let result = booking.with_mut(|st| st.select(&skip_id).map(|_| ()));
        if let Err(err) = result {
            warn!(skip_id = %skip_id, error = %err, "ignored selection outside the catalog");
            push_toast(toasts, ToastKind::Warning, err.to_string());
        }
    };

    let body = if let Some(error) = state.load_error() {
        rsx! {
            div { class: "load-error",
                div { class: "load-error__icon", "⚠️" }
                div { class: "load-error__title", "Unable to load skip options" }
                p { class: "load-error__detail", "{error}" }
                button {
                    class: "btn-retry",
                    onclick: move |_| *reload.write() += 1,
                    "↻ Try Again"
                }
            }
        }
    } else if state.is_loading() {
        rsx! {
            div { class: "skip-grid",
                for index in 0..SKELETON_CARDS {
                    div { key: "{index}", class: "skip-card skip-card--skeleton",
                        div { class: "skeleton skeleton--icon" }
                        div { class: "skeleton skeleton--title" }
                        div { class: "skeleton skeleton--line" }
                        div { class: "skeleton skeleton--price" }
                        div { class: "skeleton skeleton--line" }
                        div { class: "skeleton skeleton--button" }
                    }
                }
            }
        }
    } else if state.skips().is_empty() {
        rsx! {
            div { class: "empty-state",
                div { class: "empty-state__icon", "📦" }
                h3 { "No skips available" }
                p { "{NO_SKIPS_FOUND} Please try a different location or contact support." }
            }
        }
    } else {
        rsx! {
            div { class: "skip-grid",
                for skip in state.skips().iter().cloned() {
                    SkipCard {
                        key: "{skip.id}",
                        selected: state.is_selected(&skip.id),
                        skip: skip.clone(),
                        onselect: on_select,
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page-intro",
            h2 { "Choose Your Skip Size" }
            p {
                "Select the perfect skip size for your project. All prices include delivery, collection, and disposal costs."
            }
        }
        {body}
    }
}
