pub(crate) mod contact;
pub(crate) mod menu;
pub(crate) mod navigation;
pub(crate) mod profile;

use contact::ContactFeature;
use menu::MenuFeature;
use navigation::{NavigationFeature, Section};
use profile::ProfileFeature;

/// Root container owning every stateful feature.
pub(crate) struct Features {
    navigation: NavigationFeature,
    menu: MenuFeature,
    contact: ContactFeature,
    profile: ProfileFeature,
}

impl Features {
    pub(crate) fn new(start: Section) -> Self {
        Self {
            navigation: NavigationFeature::new(start),
            menu: MenuFeature::new(),
            contact: ContactFeature::new(),
            profile: ProfileFeature::new(),
        }
    }

    pub(crate) fn navigation(&self) -> &NavigationFeature {
        &self.navigation
    }

    pub(crate) fn navigation_mut(&mut self) -> &mut NavigationFeature {
        &mut self.navigation
    }

    pub(crate) fn menu(&self) -> &MenuFeature {
        &self.menu
    }

    pub(crate) fn menu_mut(&mut self) -> &mut MenuFeature {
        &mut self.menu
    }

    pub(crate) fn contact(&self) -> &ContactFeature {
        &self.contact
    }

    pub(crate) fn contact_mut(&mut self) -> &mut ContactFeature {
        &mut self.contact
    }

    pub(crate) fn profile(&self) -> &ProfileFeature {
        &self.profile
    }

    pub(crate) fn profile_mut(&mut self) -> &mut ProfileFeature {
        &mut self.profile
    }

    /// Whether any feature holds a pending timed action; gates the tick
    /// subscription.
    pub(crate) fn has_pending_timers(&self) -> bool {
        self.menu.has_pending_tooltip()
            || self.contact.has_pending_toast()
            || self.profile.has_pending_copy_reset()
    }
}
