mod explore;
mod home;
mod profile;
mod shell;

pub use explore::ExploreGrid;
pub use home::HomeFeed;
pub use profile::Profile;
pub use shell::Shell;
