//! Full-height centered status text

use dioxus::prelude::*;

#[component]
pub fn CenteredMessage(message: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-center h-[60vh] text-gray-500", "{message}" }
    }
}

/// Placeholder for tabs that have no content yet
#[component]
pub fn ComingSoon(title: String) -> Element {
    rsx! {
        CenteredMessage { message: format!("{title} coming soon") }
    }
}
