pub(crate) mod about;
pub(crate) mod contact_panel;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod menu_bar;
pub(crate) mod profile_card;
