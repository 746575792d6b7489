//! Store types for per-tab view state
//!
//! Each store is created when its tab mounts, settled once by the load sequence,
//! and dropped when the tab unmounts. Stores derive `Store` for fine-grained
//! reactivity via lensing.

pub mod explore;
pub mod feed;
pub mod profile;

pub use explore::*;
pub use feed::*;
pub use profile::*;
