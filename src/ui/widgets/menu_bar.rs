use iced::border::Radius;
use iced::widget::text::Wrapping;
use iced::widget::{Space, button, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Border, Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const ITEM_HEIGHT: f32 = 40.0;
const ICON_SLOT_WIDTH: f32 = 44.0;
const ICON_SIZE: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 14.0;
const LABEL_CHAR_WIDTH: f32 = 9.0;
const LABEL_PADDING: f32 = 32.0;
const MIN_EXPANDED_WIDTH: f32 = 120.0;
const BAR_PADDING: f32 = 6.0;
const BAR_SPACING: f32 = 6.0;
const BAR_RADIUS: f32 = 26.0;
const ITEM_RADIUS: f32 = 20.0;
const SEPARATOR_WIDTH: f32 = 1.0;
const SEPARATOR_HEIGHT: f32 = 20.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;

/// Destinations displayed in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuBarItem {
    Home,
    About,
    Contact,
}

/// Render state for one entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuBarEntry {
    pub(crate) item: MenuBarItem,
    pub(crate) label: &'static str,
    pub(crate) icon: &'static [u8],
    pub(crate) active: bool,
    pub(crate) hovered: bool,
    pub(crate) tooltip_visible: bool,
}

/// UI events emitted by the menu bar.
#[derive(Debug, Clone)]
pub(crate) enum MenuBarEvent {
    Pressed(MenuBarItem),
    HoverChanged { item: MenuBarItem, hovered: bool },
}

/// Props for rendering the menu bar.
#[derive(Debug, Clone)]
pub(crate) struct MenuBarProps<'a> {
    pub(crate) entries: Vec<MenuBarEntry>,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: MenuBarProps<'a>) -> Element<'a, MenuBarEvent> {
    let palette = props.theme.theme.iced_palette();

    let mut bar = row![]
        .spacing(BAR_SPACING)
        .align_y(alignment::Vertical::Center);

    for (index, entry) in props.entries.iter().enumerate() {
        // The first entry is set apart from the rest of the bar.
        if index == 1 {
            bar = bar.push(separator(palette));
        }
        bar = bar.push(menu_entry(*entry, props.theme));
    }

    container(bar)
        .padding(BAR_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: Radius::new(BAR_RADIUS),
            },
            ..Default::default()
        })
        .into()
}

/// One adaptive entry: a fixed icon slot that reveals its label while
/// hovered or active, with an optional tap tooltip bubble on top.
fn menu_entry<'a>(
    entry: MenuBarEntry,
    theme_props: ThemeProps<'a>,
) -> Element<'a, MenuBarEvent> {
    let palette = theme_props.theme.iced_palette();
    let expanded = entry.hovered || entry.active;
    let width = if expanded {
        expanded_width(entry.label)
    } else {
        ICON_SLOT_WIDTH
    };

    let foreground = palette.foreground;
    let dim_foreground = palette.dim_foreground;
    let is_active = entry.active;

    let icon = svg::Svg::new(svg::Handle::from_memory(entry.icon))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, _| {
            let color = if is_active { foreground } else { dim_foreground };
            svg::Style { color: Some(color) }
        });

    let icon_slot = container(icon)
        .width(Length::Fixed(ICON_SLOT_WIDTH))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut content = row![icon_slot]
        .height(Length::Fill)
        .align_y(Alignment::Center);

    if expanded {
        content = content.push(
            text(entry.label)
                .size(LABEL_FONT_SIZE)
                .wrapping(Wrapping::None),
        );
    }

    let item_button = button(content)
        .on_press(MenuBarEvent::Pressed(entry.item))
        .padding(0.0)
        .width(Length::Fixed(width))
        .height(Length::Fixed(ITEM_HEIGHT))
        .style(move |_, status| entry_style(palette, is_active, status));

    let area = mouse_area(item_button)
        .on_enter(MenuBarEvent::HoverChanged {
            item: entry.item,
            hovered: true,
        })
        .on_exit(MenuBarEvent::HoverChanged {
            item: entry.item,
            hovered: false,
        });

    if entry.tooltip_visible {
        let bubble = container(
            text(entry.label)
                .size(TOOLTIP_FONT_SIZE)
                .wrapping(Wrapping::None)
                .style(move |_| iced::widget::text::Style {
                    color: Some(palette.foreground),
                }),
        )
        .padding([2.0, 8.0])
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: Radius::new(6.0),
            },
            ..Default::default()
        });

        let bubble_layer = container(bubble)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top);

        stack![area, bubble_layer]
            .width(Length::Fixed(width))
            .height(Length::Fixed(ITEM_HEIGHT))
            .into()
    } else {
        area.into()
    }
}

/// Expanded width grows with the label but never drops below the
/// minimum pill width; the icon slot itself never changes size.
fn expanded_width(label: &str) -> f32 {
    let label_chars = label.chars().count() as f32;
    (ICON_SLOT_WIDTH + label_chars * LABEL_CHAR_WIDTH + LABEL_PADDING)
        .max(MIN_EXPANDED_WIDTH)
}

fn entry_style(
    palette: &IcedColorPalette,
    is_active: bool,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    let mut style = iced::widget::button::Style {
        text_color: palette.dim_foreground,
        border: Border {
            color: iced::Color::TRANSPARENT,
            width: 1.0,
            radius: Radius::new(ITEM_RADIUS),
        },
        ..iced::widget::button::Style::default()
    };

    if is_active {
        style.background = Some(palette.overlay.into());
        style.text_color = palette.foreground;
        style.border.color = palette.cyan;
    } else if matches!(status, iced::widget::button::Status::Hovered) {
        style.background = Some(palette.overlay.into());
        style.text_color = palette.foreground;
    }

    style
}

fn separator<'a>(
    palette: &'a IcedColorPalette,
) -> Element<'a, MenuBarEvent> {
    container(Space::new())
        .width(Length::Fixed(SEPARATOR_WIDTH))
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.border.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::AppTheme;

    #[test]
    fn given_short_label_when_expanded_then_minimum_width_applies() {
        assert_eq!(expanded_width("Hi"), MIN_EXPANDED_WIDTH);
    }

    #[test]
    fn given_longer_labels_when_expanded_then_width_grows_monotonically() {
        let contact = expanded_width("Contact");
        let about = expanded_width("About");

        assert!(contact > about);
        assert_eq!(
            contact,
            ICON_SLOT_WIDTH + 7.0 * LABEL_CHAR_WIDTH + LABEL_PADDING
        );
    }

    #[test]
    fn given_any_label_when_expanded_then_width_is_at_least_the_slot() {
        assert!(expanded_width("") >= ICON_SLOT_WIDTH);
    }

    #[test]
    fn given_active_entry_when_styled_then_border_uses_the_accent() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = entry_style(
            palette,
            true,
            iced::widget::button::Status::Active,
        );

        assert_eq!(style.border.color, palette.cyan);
        assert_eq!(style.text_color, palette.foreground);
    }

    #[test]
    fn given_idle_entry_when_styled_then_it_stays_transparent() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = entry_style(
            palette,
            false,
            iced::widget::button::Status::Active,
        );

        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette.dim_foreground);
    }
}
