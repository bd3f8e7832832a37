use iced::Task;
use iced::widget::operation::{scroll_to, snap_to};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};

use super::event::NavigationEvent;
use super::model::{PAGE_SCROLL_ID, Section, scroll_target};
use super::state::NavigationState;
use crate::app::Event as AppEvent;

/// Keeps the active section in sync with explicit selection and scroll
/// position, and drives the page scrollable toward selected anchors.
pub(crate) struct NavigationFeature {
    state: NavigationState,
}

impl NavigationFeature {
    pub(crate) fn new(start: Section) -> Self {
        Self {
            state: NavigationState::new(start),
        }
    }

    pub(crate) fn active(&self) -> Section {
        self.state.active()
    }

    pub(crate) fn is_scrolled(&self) -> bool {
        self.state.is_scrolled()
    }

    pub(crate) fn reduce(
        &mut self,
        event: NavigationEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            NavigationEvent::Select(section) => {
                self.state.set_active(section);
                log::debug!("navigating to section {:?}", section);
                scroll_task(section)
            }
            NavigationEvent::Scrolled { offset } => {
                self.state.record_scroll(offset);
                Task::none()
            }
        }
    }
}

/// A new selection simply issues a fresh scroll operation; iced
/// supersedes any in-flight scroll for the same target.
fn scroll_task(section: Section) -> Task<AppEvent> {
    match section {
        Section::Home => snap_to(PAGE_SCROLL_ID, RelativeOffset::START),
        Section::About | Section::Contact => scroll_to(
            PAGE_SCROLL_ID,
            AbsoluteOffset {
                x: 0.0,
                y: scroll_target(section),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_selection_when_reduced_then_exactly_that_section_is_active() {
        let mut feature = NavigationFeature::new(Section::Home);

        let _task =
            feature.reduce(NavigationEvent::Select(Section::Contact), &());

        assert_eq!(feature.active(), Section::Contact);
    }

    #[test]
    fn given_repeated_selection_when_reduced_then_active_is_unchanged() {
        let mut feature = NavigationFeature::new(Section::About);

        let _task =
            feature.reduce(NavigationEvent::Select(Section::About), &());

        assert_eq!(feature.active(), Section::About);
    }

    #[test]
    fn given_scroll_events_when_reduced_then_scrolled_flag_tracks_offset() {
        let mut feature = NavigationFeature::new(Section::Home);

        let _task =
            feature.reduce(NavigationEvent::Scrolled { offset: 240.0 }, &());
        assert!(feature.is_scrolled());

        let _task =
            feature.reduce(NavigationEvent::Scrolled { offset: 4.0 }, &());
        assert!(!feature.is_scrolled());
    }

    #[test]
    fn given_scroll_then_selection_when_reduced_then_selection_wins() {
        let mut feature = NavigationFeature::new(Section::Home);

        let _task =
            feature.reduce(NavigationEvent::Scrolled { offset: 900.0 }, &());
        let _task =
            feature.reduce(NavigationEvent::Select(Section::Home), &());

        assert_eq!(feature.active(), Section::Home);
    }
}
