//! Common helper UI components

mod avatar;
mod centered_message;
mod loading_spinner;
mod loading_visualization;

pub use avatar::Avatar;
pub use centered_message::{CenteredMessage, ComingSoon};
pub use loading_spinner::LoadingSpinner;
pub use loading_visualization::LoadingVisualization;
