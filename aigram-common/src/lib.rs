mod likes;
mod load_phase;
mod tab;
mod tab_router;

pub use likes::{apply_like, LikeOutcome, Likeable};
pub use load_phase::{EmptyPolicy, LoadPhase};
pub use tab::Tab;
pub use tab_router::{MountId, TabRouter, TabSwitch};
