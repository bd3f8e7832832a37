use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, alignment};

use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::ui::components::icon_button;
use crate::ui::components::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonVariant,
};

const NAME_FONT_SIZE: f32 = 16.0;
const LINK_FONT_SIZE: f32 = 13.0;
const NOTE_FONT_SIZE: f32 = 12.0;
const LOGO_BUTTON_SIZE: f32 = 36.0;
const LOGO_ICON_SIZE: f32 = 20.0;

/// Navigation destinations the footer links point at.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FooterTarget {
    Home,
    About,
    Contact,
}

/// Props for rendering the footer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FooterProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) github_url: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// UI events emitted by the footer.
#[derive(Debug, Clone)]
pub(crate) enum FooterEvent {
    Navigate(FooterTarget),
}

pub(crate) fn view<'a>(props: FooterProps<'a>) -> Element<'a, FooterEvent> {
    let palette = props.theme.theme.iced_palette();

    let logo = icon_button::view(IconButtonProps {
        icon: icons::LOGO,
        theme: props.theme,
        size: LOGO_BUTTON_SIZE,
        icon_size: LOGO_ICON_SIZE,
        variant: IconButtonVariant::Pill,
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => FooterEvent::Navigate(FooterTarget::Home),
    });

    let name = text(props.name).size(NAME_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.foreground),
        }
    });

    let identity = row![logo, name].spacing(12).align_y(Alignment::Center);

    let links = row![
        footer_link("Home", FooterTarget::Home, palette),
        footer_link("About", FooterTarget::About, palette),
        footer_link("Contact", FooterTarget::Contact, palette),
    ]
    .spacing(4);

    let top_row = row![
        identity,
        Space::new().width(Length::Fill),
        links
    ]
    .align_y(Alignment::Center);

    let github = text(props.github_url).size(NOTE_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(palette.muted),
        },
    );

    let copyright = text(format!(
        "\u{00A9} 2026 {}. All rights reserved.",
        props.name
    ))
    .size(NOTE_FONT_SIZE)
    .style(move |_| iced::widget::text::Style {
        color: Some(palette.muted),
    });

    let content = column![top_row, github, copyright]
        .spacing(10)
        .width(Length::Fill);

    container(content)
        .padding([24.0, 24.0])
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

fn footer_link<'a>(
    label: &'static str,
    target: FooterTarget,
    palette: &'a IcedColorPalette,
) -> Element<'a, FooterEvent> {
    button(text(label).size(LINK_FONT_SIZE))
        .on_press(FooterEvent::Navigate(target))
        .padding([4.0, 10.0])
        .style(move |_, status| {
            let color =
                if matches!(status, iced::widget::button::Status::Hovered) {
                    palette.cyan
                } else {
                    palette.dim_foreground
                };

            iced::widget::button::Style {
                text_color: color,
                ..iced::widget::button::Style::default()
            }
        })
        .into()
}
