use super::{ExploreGrid, HomeFeed, Profile};
use aigram_common::{MountId, Tab, TabRouter};
use aigram_ui::{AppLayoutView, BottomNavView, ComingSoon, TopBarView};
use dioxus::prelude::*;
use tracing::debug;

/// Top-level layout. Owns the tab router and mounts the active tab's view.
#[component]
pub fn Shell() -> Element {
    let mut router = use_context_provider(|| Signal::new(TabRouter::new()));
    let active = router.read().active();
    let mount = router.read().current_mount();
    let mount_key = mount.value();

    rsx! {
        AppLayoutView {
            top_bar: rsx! {
                TopBarView {}
            },
            bottom_nav: rsx! {
                BottomNavView {
                    active,
                    on_select: move |tab: Tab| {
                        if let Some(switch) = router.write().set_tab(tab) {
                            debug!(
                                "Tab {:?} -> {:?} (mount {} -> {})",
                                switch.from,
                                switch.to,
                                switch.unmounted.value(),
                                switch.mounted.value(),
                            );
                        }
                    },
                }
            },
            ActiveTab { key: "{mount_key}", tab: active, mount }
        }
    }
}

/// The view for one mount of a tab. Keyed by mount id so every switch remounts it.
#[component]
fn ActiveTab(tab: Tab, mount: MountId) -> Element {
    match tab {
        Tab::Home => rsx! {
            HomeFeed { mount }
        },
        Tab::Search => rsx! {
            ExploreGrid { mount }
        },
        Tab::Profile => rsx! {
            Profile { mount }
        },
        Tab::Reels | Tab::Shop => {
            let title = tab.placeholder_title().unwrap_or_default().to_string();
            rsx! {
                ComingSoon { title }
            }
        }
    }
}
