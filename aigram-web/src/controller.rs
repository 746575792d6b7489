//! The data side of the tab pages
//!
//! Pages call these from their mount task and event handlers. Keeping them free of
//! component hooks means the per-mount rules can be checked without a renderer.

use std::future::Future;
use std::rc::Rc;

use aigram_common::{LikeOutcome, MountId, TabRouter};
use aigram_core::{DataGateway, HomeData, Me, Post};
use aigram_ui::stores::{ExploreState, FeedState, ProfileState};
use tracing::{debug, warn};

use crate::convert;

/// Run `settle` only if `mount` is still the router's live mount.
///
/// Results for a retired mount are dropped; the view they were meant for is gone.
pub fn settle_if_mounted(
    router: &TabRouter,
    mount: MountId,
    settle: impl FnOnce() -> bool,
) -> bool {
    if !router.is_mounted(mount) {
        debug!("Dropping results for retired mount {}", mount.value());
        return false;
    }
    settle()
}

pub fn settle_home(state: &mut FeedState, data: &HomeData) -> bool {
    let stories = data.stories.iter().map(convert::story_bubble).collect();
    let posts = data.posts.iter().map(convert::post_card).collect();
    state.settle(stories, posts)
}

pub fn settle_explore(state: &mut ExploreState, posts: &[Post]) -> bool {
    state.settle(posts.iter().map(convert::grid_tile).collect())
}

pub fn settle_profile(state: &mut ProfileState, me: Option<Me>) -> bool {
    state.settle(convert::profile_summary(me))
}

/// Mark the post liked right away and hand back the like request.
///
/// The request is returned for every tap, liked or not. Its result is never read.
pub fn like(
    state: &mut FeedState,
    gateway: Rc<dyn DataGateway>,
    post_id: String,
) -> impl Future<Output = ()> + 'static {
    if state.like(&post_id) == LikeOutcome::NotFound {
        warn!("Liked post {} is not in the feed", post_id);
    }
    async move {
        gateway.like_post(&post_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aigram_common::{LoadPhase, Tab};
    use aigram_core::{load_explore, load_home, load_profile, Stats, Story, User};
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingGateway {
        posts: Vec<Post>,
        me: Option<Me>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingGateway {
        fn count(&self, call: &str) -> usize {
            self.calls.borrow().iter().filter(|c| c.as_str() == call).count()
        }
    }

    #[async_trait(?Send)]
    impl DataGateway for RecordingGateway {
        async fn bootstrap(&self) {
            self.calls.borrow_mut().push("bootstrap".to_string());
        }

        async fn get_stories(&self) -> Vec<Story> {
            self.calls.borrow_mut().push("stories".to_string());
            Vec::new()
        }

        async fn get_feed(&self, limit: Option<u32>) -> Vec<Post> {
            self.calls.borrow_mut().push(format!("feed {:?}", limit));
            self.posts.clone()
        }

        async fn get_me(&self) -> Option<Me> {
            self.calls.borrow_mut().push("me".to_string());
            self.me.clone()
        }

        async fn like_post(&self, id: &str) {
            self.calls.borrow_mut().push(format!("like {}", id));
        }
    }

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            author: User {
                username: "ann".to_string(),
                ..Default::default()
            },
            media_url: Some("a.jpg".to_string()),
            caption: None,
            like_count: 3,
        }
    }

    #[test]
    fn views_are_loading_right_after_mount() {
        assert!(FeedState::mounted().is_loading());
        assert!(ExploreState::mounted().is_loading());
        assert!(ProfileState::mounted().is_loading());
    }

    #[tokio::test]
    async fn home_settles_for_live_mount() {
        let gateway = RecordingGateway {
            posts: vec![post("p1")],
            ..Default::default()
        };
        let router = TabRouter::new();
        let mount = router.current_mount();
        let mut state = FeedState::mounted();

        let data = load_home(&gateway).await;
        let applied = settle_if_mounted(&router, mount, || settle_home(&mut state, &data));

        assert!(applied);
        assert!(!state.is_loading());
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].likes_label(), "3 likes");
        assert_eq!(state.posts[0].caption, None);
    }

    #[tokio::test]
    async fn late_result_for_retired_mount_is_dropped() {
        let gateway = RecordingGateway {
            posts: vec![post("p1")],
            ..Default::default()
        };
        let mut router = TabRouter::new();
        let mount = router.current_mount();
        let mut state = FeedState::mounted();

        let data = load_home(&gateway).await;
        router.set_tab(Tab::Profile);
        let applied = settle_if_mounted(&router, mount, || settle_home(&mut state, &data));

        assert!(!applied);
        assert!(state.is_loading());
        assert!(state.posts.is_empty());
    }

    #[tokio::test]
    async fn returning_to_a_tab_loads_again() {
        let gateway = RecordingGateway {
            posts: vec![post("p1")],
            ..Default::default()
        };
        let mut router = TabRouter::new();
        let first = router.current_mount();

        let mut first_state = ExploreState::mounted();
        let first_posts = load_explore(&gateway).await;

        router.set_tab(Tab::Home);
        router.set_tab(Tab::Search);
        let second = router.current_mount();
        assert_ne!(first, second);

        // The old mount's result arrives late and must not land anywhere
        let stale = settle_if_mounted(&router, first, || {
            settle_explore(&mut first_state, &first_posts)
        });
        assert!(!stale);

        let mut second_state = ExploreState::mounted();
        assert!(second_state.is_loading());
        let posts = load_explore(&gateway).await;
        assert!(settle_if_mounted(&router, second, || {
            settle_explore(&mut second_state, &posts)
        }));

        assert_eq!(second_state.phase, LoadPhase::Ready);
        assert_eq!(second_state.tiles.len(), 1);
        assert_eq!(gateway.count("bootstrap"), 2);
        assert_eq!(gateway.count("feed Some(30)"), 2);
    }

    #[tokio::test]
    async fn every_like_tap_sends_a_request() {
        let recorder = Rc::new(RecordingGateway::default());
        let gateway: Rc<dyn DataGateway> = recorder.clone();
        let mut state = FeedState::mounted();
        state.settle(vec![], vec![convert::post_card(&post("p1"))]);

        like(&mut state, gateway.clone(), "p1".to_string()).await;
        assert!(state.posts[0].liked);
        like(&mut state, gateway.clone(), "p1".to_string()).await;

        assert!(state.posts[0].liked);
        assert_eq!(recorder.count("like p1"), 2);
    }

    #[test]
    fn like_is_applied_before_the_request_runs() {
        let recorder = Rc::new(RecordingGateway::default());
        let gateway: Rc<dyn DataGateway> = recorder.clone();
        let mut state = FeedState::mounted();
        state.settle(vec![], vec![convert::post_card(&post("p1"))]);

        let request = like(&mut state, gateway, "p1".to_string());

        assert!(state.posts[0].liked);
        assert_eq!(recorder.count("like p1"), 0);
        drop(request);
    }

    #[tokio::test]
    async fn profile_settles_ready_or_unavailable() {
        let gateway = RecordingGateway {
            me: Some(Me {
                user: Some(User {
                    username: "bob".to_string(),
                    ..Default::default()
                }),
                posts: Some(vec![]),
                stats: Some(Stats {
                    posts: 0,
                    followers: 5,
                    following: 2,
                }),
            }),
            ..Default::default()
        };
        let mut state = ProfileState::mounted();
        settle_profile(&mut state, load_profile(&gateway).await);

        assert_eq!(state.phase, LoadPhase::Ready);
        let profile = state.profile.unwrap();
        assert_eq!(profile.username, "bob");
        assert_eq!(profile.stats.followers, 5);
        assert!(profile.posts.is_empty());

        let mut missing = ProfileState::mounted();
        settle_profile(&mut missing, load_profile(&RecordingGateway::default()).await);
        assert!(missing.is_unavailable());
    }
}
