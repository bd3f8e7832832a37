use std::time::Duration;

use crate::features::navigation::Section;
use crate::icons;

/// Window widths below this use the tap tooltip instead of hover labels.
pub(crate) const NARROW_VIEWPORT_WIDTH: f32 = 640.0;

/// How long a tap tooltip stays visible before it is hidden.
pub(crate) const TOOLTIP_HIDE_DELAY: Duration = Duration::from_millis(1200);

pub(crate) fn item_icon(section: Section) -> &'static [u8] {
    match section {
        Section::Home => icons::NAV_HOME,
        Section::About => icons::NAV_ABOUT,
        Section::Contact => icons::NAV_CONTACT,
    }
}
