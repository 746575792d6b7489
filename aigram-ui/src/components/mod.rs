//! Shared UI components

pub mod app_layout;
pub mod bottom_nav;
pub mod explore;
pub mod feed;
pub mod helpers;
pub mod icons;
pub mod media_grid;
pub mod post_card;
pub mod profile;
pub mod stories;
pub mod top_bar;

pub use app_layout::AppLayoutView;
pub use bottom_nav::BottomNavView;
pub use explore::ExploreView;
pub use feed::FeedView;
pub use helpers::{Avatar, CenteredMessage, ComingSoon, LoadingSpinner, LoadingVisualization};
pub use icons::{
    CameraIcon, HeartIcon, HomeIcon, ImageIcon, PlayIcon, SearchIcon, ShoppingBagIcon, UserIcon,
};
pub use media_grid::MediaGridView;
pub use post_card::PostCardView;
pub use profile::ProfileView;
pub use stories::StoriesStripView;
pub use top_bar::TopBarView;
