use super::model::{SCROLLED_THRESHOLD, Section};

/// Which section is active and how far the page is scrolled.
#[derive(Debug)]
pub(crate) struct NavigationState {
    active: Section,
    scroll_offset: f32,
    scrolled: bool,
}

impl NavigationState {
    pub(crate) fn new(start: Section) -> Self {
        Self {
            active: start,
            scroll_offset: 0.0,
            scrolled: false,
        }
    }

    pub(crate) fn active(&self) -> Section {
        self.active
    }

    pub(crate) fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub(crate) fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub(crate) fn set_active(&mut self, section: Section) {
        self.active = section;
    }

    pub(crate) fn record_scroll(&mut self, offset: f32) {
        self.scroll_offset = offset;
        self.scrolled = offset > SCROLLED_THRESHOLD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fresh_state_when_created_then_start_section_is_active() {
        let state = NavigationState::new(Section::About);

        assert_eq!(state.active(), Section::About);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn given_offset_at_threshold_when_recorded_then_not_scrolled() {
        let mut state = NavigationState::new(Section::Home);

        state.record_scroll(SCROLLED_THRESHOLD);

        assert!(!state.is_scrolled());
        assert_eq!(state.scroll_offset(), SCROLLED_THRESHOLD);
    }

    #[test]
    fn given_offset_past_threshold_when_recorded_then_scrolled() {
        let mut state = NavigationState::new(Section::Home);

        state.record_scroll(SCROLLED_THRESHOLD + 0.5);
        assert!(state.is_scrolled());

        state.record_scroll(0.0);
        assert!(!state.is_scrolled());
    }
}
