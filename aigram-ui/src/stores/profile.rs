//! Profile state store

use crate::display_types::ProfileSummary;
use aigram_common::{EmptyPolicy, LoadPhase};
use dioxus::prelude::*;

/// State for the profile tab
///
/// Unlike the feed, a profile that failed to load has its own `Empty` phase,
/// rendered as "Profile unavailable".
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ProfileState {
    pub phase: LoadPhase,
    pub profile: Option<ProfileSummary>,
}

impl ProfileState {
    pub fn mounted() -> Self {
        let mut phase = LoadPhase::Init;
        phase.begin();
        Self {
            phase,
            profile: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn is_unavailable(&self) -> bool {
        self.phase == LoadPhase::Empty
    }

    pub fn settle(&mut self, profile: Option<ProfileSummary>) -> bool {
        if !self
            .phase
            .settle(profile.is_some(), EmptyPolicy::DistinctEmptyState)
        {
            return false;
        }
        self.profile = profile;
        true
    }
}
