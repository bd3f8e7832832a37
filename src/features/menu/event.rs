use crate::features::navigation::Section;

/// Events emitted by the menu bar items.
#[derive(Debug, Clone)]
pub(crate) enum MenuEvent {
    Hovered { section: Section, hovered: bool },
    Pressed(Section),
    /// Drop all pending tap tooltips without showing or hiding anything.
    ResetTooltips,
    Tick,
}
