/// Fixed page regions addressable from the menu bar and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Home,
    About,
    Contact,
}

impl Section {
    pub(crate) const ALL: [Section; 3] =
        [Section::Home, Section::About, Section::Contact];

    /// Resolve a start anchor such as `about` or `#contact`. Unknown or
    /// empty anchors resolve to `Home`; this never fails.
    pub(crate) fn from_anchor(anchor: &str) -> Section {
        match anchor.trim().trim_start_matches('#') {
            "about" => Section::About,
            "contact" => Section::Contact,
            _ => Section::Home,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Contact => 2,
        }
    }
}

/// Vertical room reserved for the fixed header when jumping to anchors.
pub(crate) const HEADER_SCROLL_OFFSET: f32 = 96.0;

/// Scroll distance after which the header switches to its solid style.
pub(crate) const SCROLLED_THRESHOLD: f32 = 10.0;

/// Scrollable id of the page content region.
pub(crate) const PAGE_SCROLL_ID: &str = "page_scroll";

// The page column uses fixed section extents so anchor offsets can be
// derived without measuring rendered bounds.
pub(crate) const HERO_SECTION_HEIGHT: f32 = 620.0;
pub(crate) const ABOUT_SECTION_HEIGHT: f32 = 760.0;
pub(crate) const CONTACT_SECTION_HEIGHT: f32 = 560.0;
pub(crate) const SECTION_SPACING: f32 = 48.0;

/// Top edge of a section within the page column.
pub(crate) fn anchor_offset(section: Section) -> f32 {
    match section {
        Section::Home => 0.0,
        Section::About => HERO_SECTION_HEIGHT + SECTION_SPACING,
        Section::Contact => {
            HERO_SECTION_HEIGHT
                + SECTION_SPACING
                + ABOUT_SECTION_HEIGHT
                + SECTION_SPACING
        }
    }
}

/// Scroll target for a section, leaving the header clear of its anchor.
pub(crate) fn scroll_target(section: Section) -> f32 {
    (anchor_offset(section) - HEADER_SCROLL_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_anchors_when_resolved_then_sections_match() {
        assert_eq!(Section::from_anchor("about"), Section::About);
        assert_eq!(Section::from_anchor("#about"), Section::About);
        assert_eq!(Section::from_anchor("contact"), Section::Contact);
        assert_eq!(Section::from_anchor("#contact"), Section::Contact);
        assert_eq!(Section::from_anchor("home"), Section::Home);
    }

    #[test]
    fn given_unknown_or_empty_anchor_when_resolved_then_home_is_returned() {
        assert_eq!(Section::from_anchor(""), Section::Home);
        assert_eq!(Section::from_anchor("#"), Section::Home);
        assert_eq!(Section::from_anchor("projects"), Section::Home);
        assert_eq!(Section::from_anchor("  #About  "), Section::Home);
    }

    #[test]
    fn given_section_order_when_offsets_are_derived_then_they_increase() {
        assert_eq!(anchor_offset(Section::Home), 0.0);
        assert!(anchor_offset(Section::About) > anchor_offset(Section::Home));
        assert!(
            anchor_offset(Section::Contact) > anchor_offset(Section::About)
        );
    }

    #[test]
    fn given_home_when_scroll_target_is_computed_then_it_clamps_at_zero() {
        assert_eq!(scroll_target(Section::Home), 0.0);
        assert_eq!(
            scroll_target(Section::About),
            anchor_offset(Section::About) - HEADER_SCROLL_OFFSET
        );
    }
}
