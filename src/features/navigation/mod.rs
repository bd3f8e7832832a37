pub(crate) mod event;
pub(crate) mod feature;
pub(crate) mod model;
pub(crate) mod state;

pub(crate) use event::NavigationEvent;
pub(crate) use feature::NavigationFeature;
pub(crate) use model::{
    ABOUT_SECTION_HEIGHT, CONTACT_SECTION_HEIGHT, HERO_SECTION_HEIGHT,
    PAGE_SCROLL_ID, SECTION_SPACING, Section,
};
