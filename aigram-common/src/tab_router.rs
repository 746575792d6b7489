use crate::Tab;

/// Identifies one mount of a tab's view.
///
/// Every activation of a tab gets a fresh id, so a load sequence started by an
/// earlier mount can tell it has been superseded even when the same tab is active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Result of a tab switch: which mount went away and which one replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitch {
    pub from: Tab,
    pub to: Tab,
    pub unmounted: MountId,
    pub mounted: MountId,
}

/// Single source of truth for the active tab.
///
/// `set_tab` is the only mutator. Mount ids are never reused within a router,
/// so there is no memoization of a tab's previous data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRouter {
    active: Tab,
    mount: MountId,
    next_mount: u64,
}

impl Default for TabRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRouter {
    pub fn new() -> Self {
        Self::starting_at(Tab::default())
    }

    pub fn starting_at(tab: Tab) -> Self {
        Self {
            active: tab,
            mount: MountId(0),
            next_mount: 1,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Mount id of the currently active tab.
    pub fn current_mount(&self) -> MountId {
        self.mount
    }

    /// Whether `mount` is still the live mount. Results for any other mount are stale.
    pub fn is_mounted(&self, mount: MountId) -> bool {
        self.mount == mount
    }

    /// Activate `tab`.
    ///
    /// Selecting the already-active tab is a no-op and returns `None`; otherwise the
    /// previous mount is retired and a new one is issued.
    pub fn set_tab(&mut self, tab: Tab) -> Option<TabSwitch> {
        if tab == self.active {
            return None;
        }

        let switch = TabSwitch {
            from: self.active,
            to: tab,
            unmounted: self.mount,
            mounted: MountId(self.next_mount),
        };

        self.active = tab;
        self.mount = switch.mounted;
        self.next_mount += 1;

        Some(switch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let router = TabRouter::new();
        assert_eq!(router.active(), Tab::Home);
        assert!(router.is_mounted(router.current_mount()));
    }

    #[test]
    fn test_set_tab_switches_and_remounts() {
        let mut router = TabRouter::new();
        let home_mount = router.current_mount();

        let switch = router.set_tab(Tab::Profile).unwrap();
        assert_eq!(switch.from, Tab::Home);
        assert_eq!(switch.to, Tab::Profile);
        assert_eq!(switch.unmounted, home_mount);
        assert_eq!(router.active(), Tab::Profile);
        assert_eq!(router.current_mount(), switch.mounted);
        assert!(!router.is_mounted(home_mount));
    }

    #[test]
    fn test_same_tab_is_noop() {
        let mut router = TabRouter::new();
        let mount = router.current_mount();
        assert_eq!(router.set_tab(Tab::Home), None);
        assert_eq!(router.current_mount(), mount);
    }

    #[test]
    fn test_returning_to_tab_issues_fresh_mount() {
        let mut router = TabRouter::new();
        let first_home = router.current_mount();

        router.set_tab(Tab::Search);
        router.set_tab(Tab::Home);

        assert_eq!(router.active(), Tab::Home);
        assert_ne!(router.current_mount(), first_home);
        assert!(!router.is_mounted(first_home));
    }

    #[test]
    fn test_mount_ids_are_never_reused() {
        let mut router = TabRouter::new();
        let mut seen = vec![router.current_mount()];
        for tab in [Tab::Search, Tab::Reels, Tab::Home, Tab::Shop, Tab::Profile, Tab::Home] {
            router.set_tab(tab);
            assert!(!seen.contains(&router.current_mount()));
            seen.push(router.current_mount());
        }
    }

    #[test]
    fn test_starting_at() {
        let router = TabRouter::starting_at(Tab::Shop);
        assert_eq!(router.active(), Tab::Shop);
        assert_eq!(router.current_mount().value(), 0);
    }
}
