use crate::{controller, use_gateway};
use aigram_common::{MountId, TabRouter};
use aigram_core::load_profile;
use aigram_ui::stores::ProfileState;
use aigram_ui::ProfileView;
use dioxus::prelude::*;

#[component]
pub fn Profile(mount: MountId) -> Element {
    let gateway = use_gateway();
    let router = use_context::<Signal<TabRouter>>();
    let mut state = use_store(ProfileState::mounted);

    use_hook(|| {
        spawn(async move {
            let me = load_profile(gateway.as_ref()).await;
            controller::settle_if_mounted(&router.peek(), mount, || {
                controller::settle_profile(&mut state.write(), me)
            });
        })
    });

    rsx! {
        ProfileView { state }
    }
}
