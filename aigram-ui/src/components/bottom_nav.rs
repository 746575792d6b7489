//! Bottom navigation view component

use crate::components::icons::{HomeIcon, PlayIcon, SearchIcon, ShoppingBagIcon, UserIcon};
use aigram_common::Tab;
use dioxus::prelude::*;

/// Bottom tab bar (pure, props-based)
///
/// Reports the tapped tab through `on_select`; the caller owns the active tab.
#[component]
pub fn BottomNavView(active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        div { class: "fixed bottom-0 inset-x-0 bg-white border-t border-gray-200 h-14 flex max-w-3xl mx-auto",
            for (tab_id, tab) in Tab::ALL.map(|tab| (tab.id(), tab)) {
                NavButton {
                    key: "{tab_id}",
                    tab,
                    is_active: tab == active,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn NavButton(tab: Tab, is_active: bool, on_select: EventHandler<Tab>) -> Element {
    let color = if is_active { "text-black" } else { "text-gray-400" };
    let tab_id = tab.id();
    let icon = match tab {
        Tab::Home => rsx! {
            HomeIcon {}
        },
        Tab::Search => rsx! {
            SearchIcon {}
        },
        Tab::Reels => rsx! {
            PlayIcon {}
        },
        Tab::Shop => rsx! {
            ShoppingBagIcon {}
        },
        Tab::Profile => rsx! {
            UserIcon {}
        },
    };

    rsx! {
        button {
            class: "flex-1 flex items-center justify-center py-2 {color}",
            "data-testid": "nav-{tab_id}",
            onclick: move |_| on_select.call(tab),
            {icon}
        }
    }
}
