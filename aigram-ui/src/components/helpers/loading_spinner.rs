//! Ring spinner for views that are still waiting on the backend

use dioxus::prelude::*;

/// Pink ring spinner. The explore grid shows it until its feed request settles.
#[component]
pub fn LoadingSpinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-3 py-16",
            role: "status",
            "data-testid": "loading-spinner",
            div { class: "h-7 w-7 rounded-full border-2 border-gray-200 border-t-pink-500 animate-spin" }
            if let Some(label) = label {
                span { class: "text-xs text-gray-400", "{label}" }
            }
        }
    }
}
