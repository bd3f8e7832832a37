use std::time::Instant;

use super::model::TOOLTIP_HIDE_DELAY;
use crate::features::navigation::Section;

/// Interaction state for one menu entry.
#[derive(Debug, Default, Clone, Copy)]
struct MenuItemState {
    hovered: bool,
    tooltip_deadline: Option<Instant>,
}

/// Interaction state for every menu entry, in `Section::ALL` order.
#[derive(Debug, Default)]
pub(crate) struct MenuState {
    items: [MenuItemState; Section::ALL.len()],
}

impl MenuState {
    pub(crate) fn is_hovered(&self, section: Section) -> bool {
        self.items[section.index()].hovered
    }

    /// The tap tooltip is visible exactly while a hide deadline is
    /// pending.
    pub(crate) fn tooltip_visible(&self, section: Section) -> bool {
        self.items[section.index()].tooltip_deadline.is_some()
    }

    pub(crate) fn set_hovered(&mut self, section: Section, hovered: bool) {
        self.items[section.index()].hovered = hovered;
    }

    /// Arm the tap tooltip. A pending hide is superseded, so a second
    /// tap restarts the full interval instead of hiding early.
    pub(crate) fn show_tooltip(&mut self, section: Section, now: Instant) {
        self.items[section.index()].tooltip_deadline =
            Some(now + TOOLTIP_HIDE_DELAY);
    }

    /// Clear every pending hide without firing it.
    pub(crate) fn reset_tooltips(&mut self) {
        for item in &mut self.items {
            item.tooltip_deadline = None;
        }
    }

    /// Hide tooltips whose deadline has passed.
    pub(crate) fn expire_tooltips(&mut self, now: Instant) {
        for item in &mut self.items {
            if item.tooltip_deadline.is_some_and(|deadline| deadline <= now) {
                item.tooltip_deadline = None;
            }
        }
    }

    pub(crate) fn has_pending_tooltip(&self) -> bool {
        self.items.iter().any(|item| item.tooltip_deadline.is_some())
    }
}
