/// Lifecycle of one view mount: `Init -> Loading -> {Ready | Empty}`.
///
/// There is no edge back into `Loading` once settled; reloading means a new mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Init,
    Loading,
    Ready,
    Empty,
}

#[allow(clippy::derivable_impls)]
impl Default for LoadPhase {
    fn default() -> Self {
        LoadPhase::Init
    }
}

/// How a view treats a load that produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Settle to `Ready` and render an empty container (feed, explore).
    RenderEmptyList,
    /// Settle to `Empty`, which has its own rendering (profile).
    DistinctEmptyState,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Init | LoadPhase::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, LoadPhase::Ready | LoadPhase::Empty)
    }

    /// `Init -> Loading`. Returns false (and changes nothing) from any other phase.
    pub fn begin(&mut self) -> bool {
        if *self != LoadPhase::Init {
            return false;
        }
        *self = LoadPhase::Loading;
        true
    }

    /// Settle a load that is in flight.
    ///
    /// Only valid from `Loading`; a second settle for the same mount is rejected so
    /// a late duplicate can't overwrite state the user has already mutated.
    pub fn settle(&mut self, populated: bool, policy: EmptyPolicy) -> bool {
        if *self != LoadPhase::Loading {
            return false;
        }
        *self = match (populated, policy) {
            (false, EmptyPolicy::DistinctEmptyState) => LoadPhase::Empty,
            _ => LoadPhase::Ready,
        };
        true
    }
}
