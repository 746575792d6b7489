//! App layout view component
//!
//! Provides the overall app structure with slots for the top bar, the active
//! tab's content and the bottom navigation.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Active tab content
    children: Element,
    /// Sticky bar at the top
    #[props(default)]
    top_bar: Option<Element>,
    /// Fixed navigation at the bottom
    #[props(default)]
    bottom_nav: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-white text-black",
            if let Some(tb) = top_bar {
                {tb}
            }
            // Bottom padding keeps the last item clear of the fixed nav
            div { class: "max-w-3xl mx-auto pb-16", {children} }
            if let Some(nav) = bottom_nav {
                {nav}
            }
        }
    }
}
