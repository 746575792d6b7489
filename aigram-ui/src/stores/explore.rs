//! Explore grid state store

use crate::display_types::GridTile;
use aigram_common::{EmptyPolicy, LoadPhase};
use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ExploreState {
    pub phase: LoadPhase,
    pub tiles: Vec<GridTile>,
}

impl ExploreState {
    pub fn mounted() -> Self {
        let mut phase = LoadPhase::Init;
        phase.begin();
        Self {
            phase,
            tiles: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn settle(&mut self, tiles: Vec<GridTile>) -> bool {
        if !self.phase.settle(true, EmptyPolicy::RenderEmptyList) {
            return false;
        }
        self.tiles = tiles;
        true
    }
}
