//! aigram-core - backend access for the AIgram client
//!
//! Holds the remote data gateway, the response schema it normalizes into,
//! the per-view load sequences, and runtime configuration. No UI types live here.

pub mod config;
pub mod gateway;
pub mod loaders;
pub mod schema;

pub use config::Config;
pub use gateway::{DataGateway, GatewayError, HttpGateway};
pub use loaders::{load_explore, load_home, load_profile, HomeData, EXPLORE_FEED_LIMIT};
pub use schema::{Me, Post, Stats, Story, User};
