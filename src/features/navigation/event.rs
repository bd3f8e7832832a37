use super::model::Section;

/// Events emitted by the navigation chrome and the page scroll region.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// An explicit selection from the menu bar or footer links.
    Select(Section),
    /// The page scrollable reported a new absolute offset.
    Scrolled { offset: f32 },
}
