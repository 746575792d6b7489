/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Search,
    Reels,
    Shop,
    Profile,
}

#[allow(clippy::derivable_impls)]
impl Default for Tab {
    fn default() -> Self {
        Tab::Home
    }
}

impl Tab {
    /// Tabs in bottom navigation order.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Search, Tab::Reels, Tab::Shop, Tab::Profile];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Search => "search",
            Tab::Reels => "reels",
            Tab::Shop => "shop",
            Tab::Profile => "profile",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Whether this tab mounts a data-loading view controller.
    /// Tabs without one render a static placeholder and never touch the network.
    pub fn has_controller(&self) -> bool {
        matches!(self, Tab::Home | Tab::Search | Tab::Profile)
    }

    /// Title used by the "coming soon" placeholder, for tabs without a controller.
    pub fn placeholder_title(&self) -> Option<&'static str> {
        match self {
            Tab::Reels => Some("Reels"),
            Tab::Shop => Some("Shop"),
            _ => None,
        }
    }
}
