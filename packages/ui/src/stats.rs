use dioxus::prelude::*;

/// Summary counter reflecting a collection's size, e.g. `#total-properties`.
#[component]
pub fn StatCard(id: &'static str, label: &'static str, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-label", "{label}" }
            div { id: id, class: "stat-value", "{value}" }
        }
    }
}
