use iced::border::Radius;
use iced::widget::{self, button, container, svg};
use iced::{Element, Length, alignment};

use crate::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    /// Bare glyph that brightens on hover.
    Plain,
    /// Glyph on a circular surface pill, accent-tinted on hover.
    Pill,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// A square icon button used by the header logo and the card's social
/// row.
pub(crate) fn view<'a>(props: IconButtonProps<'a>) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_colors(
        props.variant,
        palette.dim_foreground,
        palette.foreground,
        palette.cyan,
        props.theme.overrides,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let surface = palette.surface;
    let border = palette.border;
    let variant = props.variant;
    let size = props.size;

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, _| match variant {
            IconButtonVariant::Plain => widget::button::Style::default(),
            IconButtonVariant::Pill => widget::button::Style {
                background: Some(surface.into()),
                border: iced::Border {
                    color: border,
                    width: 1.0,
                    radius: Radius::new(size / 2.0),
                },
                ..widget::button::Style::default()
            },
        })
        .into()
}

fn resolve_colors(
    variant: IconButtonVariant,
    dim: iced::Color,
    bright: iced::Color,
    accent: iced::Color,
    overrides: Option<StyleOverrides>,
) -> (iced::Color, iced::Color) {
    if let Some(overrides) = overrides {
        if let Some(color) = overrides.foreground {
            return (color, color);
        }
    }

    match variant {
        IconButtonVariant::Plain => (dim, bright),
        IconButtonVariant::Pill => (dim, accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::AppTheme;

    #[test]
    fn given_plain_variant_when_colors_resolve_then_hover_brightens() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let (base, hover) = resolve_colors(
            IconButtonVariant::Plain,
            palette.dim_foreground,
            palette.foreground,
            palette.cyan,
            None,
        );

        assert_eq!(base, palette.dim_foreground);
        assert_eq!(hover, palette.foreground);
    }

    #[test]
    fn given_override_foreground_when_colors_resolve_then_it_wins() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();
        let overrides = StyleOverrides {
            foreground: Some(palette.purple),
            ..StyleOverrides::default()
        };

        let (base, hover) = resolve_colors(
            IconButtonVariant::Pill,
            palette.dim_foreground,
            palette.foreground,
            palette.cyan,
            Some(overrides),
        );

        assert_eq!(base, palette.purple);
        assert_eq!(hover, palette.purple);
    }
}
