//! Animated placeholder shown while the home feed loads

use dioxus::prelude::*;

pub const UNIVERSE_LOADING_MESSAGE: &str = "Generating your AI social universe…";

/// Pulsing orb with a status line underneath.
#[component]
pub fn LoadingVisualization(
    #[props(default = UNIVERSE_LOADING_MESSAGE.to_string())] message: String,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-24 text-center",
            "data-testid": "loading-visualization",
            div { class: "h-64 w-full flex items-center justify-center",
                div { class: "relative h-40 w-40",
                    div { class: "absolute inset-0 rounded-full bg-gradient-to-tr from-pink-500 via-purple-500 to-amber-400 opacity-70 animate-ping" }
                    div { class: "absolute inset-4 rounded-full bg-gradient-to-br from-pink-500 via-purple-500 to-amber-400 animate-pulse" }
                }
            }
            div { class: "mt-4 text-gray-500", "{message}" }
        }
    }
}
