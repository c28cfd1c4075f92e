use dioxus::prelude::*;

use crate::domain::Skip;
use crate::ui::theme;

/// Number of suitability tags listed before collapsing into "+N more".
const VISIBLE_TAGS: usize = 3;

#[component]
pub fn SkipCard(skip: Skip, selected: bool, onselect: EventHandler<String>) -> Element {
    let hidden_tags = skip.suitable_for.len().saturating_sub(VISIBLE_TAGS);
    let visible_tags: Vec<String> = skip
        .suitable_for
        .iter()
        .take(VISIBLE_TAGS)
        .cloned()
        .collect();
    let dimensions = skip.dimensions.label();
    let aria_label = format!("Select {} skip for £{}", skip.size_label, skip.total_price);

    let card_id = skip.id.clone();
    let key_id = skip.id.clone();
    let button_id = skip.id.clone();

    rsx! {
        div {
            class: "{theme::skip_card(selected)}",
            role: "button",
            tabindex: "0",
            aria_label: "{aria_label}",
            aria_pressed: "{selected}",
            onclick: move |_| onselect.call(card_id.clone()),
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key();
                if key == Key::Enter || key == Key::Character(" ".to_string()) {
                    evt.prevent_default();
                    onselect.call(key_id.clone());
                }
            },

            if selected {
                div { class: "skip-card__badge", "✓" }
            }

            div { class: "{theme::skip_icon(selected)}", "🗑️" }
            h3 { class: "skip-card__title", "{skip.size_label}" }
            p { class: "skip-card__capacity", "{skip.capacity_label}" }

            div { class: "skip-card__price",
                div { class: "skip-card__amount", "£{skip.total_price}" }
                div { class: "skip-card__hire", "{skip.hire_period_days} day hire" }
            }

            if let Some(description) = skip.description.as_ref() {
                p { class: "skip-card__description", "{description}" }
            }

            if !visible_tags.is_empty() {
                div { class: "skip-card__section",
                    div { class: "skip-card__heading", "Suitable for:" }
                    ul { class: "skip-card__tags",
                        for tag in visible_tags {
                            li { key: "{tag}", "{tag}" }
                        }
                    }
                    if hidden_tags > 0 {
                        div { class: "skip-card__more", "+{hidden_tags} more" }
                    }
                }
            }

            div { class: "skip-card__section",
                div { class: "skip-card__heading", "Dimensions:" }
                div { class: "skip-card__dimensions", "{dimensions}" }
            }

            div { class: "skip-card__badges",
                if skip.allowed_on_road {
                    span { class: "pill pill--road", "Road Placement OK" }
                }
                if skip.allows_heavy_waste {
                    span { class: "pill pill--heavy", "Heavy Waste OK" }
                }
                span { class: "pill", "VAT {skip.vat_percent}%" }
            }

            button {
                class: "{theme::select_button(selected)}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    onselect.call(button_id.clone());
                },
                if selected { "Selected" } else { "Select This Skip" }
            }
        }
    }
}
