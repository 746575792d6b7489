//! Load sequences run by each view on mount
//!
//! Each sequence dispatches the bootstrap call first and waits for it, then runs
//! its data calls concurrently. It returns only once every call has settled.

use futures::join;
use tracing::debug;

use crate::gateway::DataGateway;
use crate::schema::{Me, Post, Story};

/// Number of posts requested for the explore grid
pub const EXPLORE_FEED_LIMIT: u32 = 30;

/// Everything the home tab renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeData {
    pub stories: Vec<Story>,
    pub posts: Vec<Post>,
}

pub async fn load_home<G: DataGateway + ?Sized>(gateway: &G) -> HomeData {
    gateway.bootstrap().await;
    let (stories, posts) = join!(gateway.get_stories(), gateway.get_feed(None));
    debug!("Home loaded: {} stories, {} posts", stories.len(), posts.len());
    HomeData { stories, posts }
}

pub async fn load_explore<G: DataGateway + ?Sized>(gateway: &G) -> Vec<Post> {
    gateway.bootstrap().await;
    let posts = gateway.get_feed(Some(EXPLORE_FEED_LIMIT)).await;
    debug!("Explore loaded: {} posts", posts.len());
    posts
}

pub async fn load_profile<G: DataGateway + ?Sized>(gateway: &G) -> Option<Me> {
    gateway.bootstrap().await;
    let me = gateway.get_me().await;
    debug!("Profile loaded: available={}", me.is_some());
    me
}
