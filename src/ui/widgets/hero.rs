use iced::border::Radius;
use iced::widget::{column, container, svg, text};
use iced::{Border, Element, Length, alignment};

use crate::icons;
use crate::theme::ThemeProps;

const AVATAR_SIZE: f32 = 160.0;
const AVATAR_ICON_SIZE: f32 = 72.0;
const HEADLINE_FONT_SIZE: f32 = 42.0;
const TAGLINE_FONT_SIZE: f32 = 17.0;
const TAGLINE_MAX_WIDTH: f32 = 560.0;

/// Props for rendering the hero section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeroProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) tagline: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// The hero section is purely presentational.
#[derive(Debug, Clone)]
pub(crate) enum HeroEvent {}

pub(crate) fn view<'a>(props: HeroProps<'a>) -> Element<'a, HeroEvent> {
    let palette = props.theme.theme.iced_palette();

    let avatar_icon = svg::Svg::new(svg::Handle::from_memory(icons::LOGO))
        .width(Length::Fixed(AVATAR_ICON_SIZE))
        .height(Length::Fixed(AVATAR_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.cyan),
        });

    let avatar = container(avatar_icon)
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            border: Border {
                color: palette.cyan,
                width: 2.0,
                radius: Radius::new(AVATAR_SIZE / 2.0),
            },
            ..Default::default()
        });

    let headline = text(format!("Hi, I'm {}", props.name))
        .size(HEADLINE_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.foreground),
        });

    let tagline = container(
        text(props.tagline).size(TAGLINE_FONT_SIZE).style(move |_| {
            iced::widget::text::Style {
                color: Some(palette.dim_foreground),
            }
        }),
    )
    .max_width(TAGLINE_MAX_WIDTH);

    let content = column![avatar, headline, tagline]
        .spacing(24)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
