//! Top bar view component

use crate::components::icons::{CameraIcon, HeartIcon};
use dioxus::prelude::*;

/// Sticky top bar with the wordmark and shortcut icons
#[component]
pub fn TopBarView(#[props(default = "AIgram".to_string())] title: String) -> Element {
    rsx! {
        div { class: "sticky top-0 z-20 bg-white/80 backdrop-blur border-b border-gray-200",
            div { class: "max-w-3xl mx-auto flex items-center justify-between h-14 px-4",
                div { class: "text-xl font-semibold", "{title}" }
                div { class: "flex items-center gap-4",
                    CameraIcon { class: "w-[22px] h-[22px]" }
                    HeartIcon { class: "w-[22px] h-[22px]" }
                }
            }
        }
    }
}
