//! aigram-ui - Display types, stores and view components for AIgram
//!
//! Views here are pure and props-based: they render store state and report user
//! actions through callbacks. Data loading lives in the app crate.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
