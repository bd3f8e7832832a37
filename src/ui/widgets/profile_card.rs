use iced::border::Radius;
use iced::widget::text::Wrapping;
use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Border, Element, Length};

use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps};

const CARD_WIDTH: f32 = 340.0;
const STATUS_DOT_SIZE: f32 = 8.0;
const NAME_FONT_SIZE: f32 = 22.0;
const ROLE_FONT_SIZE: f32 = 14.0;
const BIO_FONT_SIZE: f32 = 13.0;
const INFO_FONT_SIZE: f32 = 13.0;
const CHIP_FONT_SIZE: f32 = 12.0;
const COPY_FONT_SIZE: f32 = 13.0;
const SOCIAL_ICON_SIZE: f32 = 18.0;

/// Props for rendering the profile card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileCardProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) role: &'a str,
    pub(crate) bio: &'a str,
    pub(crate) status_text: &'a str,
    pub(crate) email: &'a str,
    pub(crate) phone: &'a str,
    pub(crate) location: &'a str,
    pub(crate) github_url: &'a str,
    pub(crate) skills: &'a [String],
    pub(crate) email_copied: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// UI events emitted by the profile card.
#[derive(Debug, Clone)]
pub(crate) enum ProfileCardEvent {
    CopyEmailPressed,
}

pub(crate) fn view<'a>(
    props: ProfileCardProps<'a>,
) -> Element<'a, ProfileCardEvent> {
    let palette = props.theme.theme.iced_palette();

    let status_dot = container(Space::new())
        .width(Length::Fixed(STATUS_DOT_SIZE))
        .height(Length::Fixed(STATUS_DOT_SIZE))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.green.into()),
            border: Border {
                color: iced::Color::TRANSPARENT,
                width: 0.0,
                radius: Radius::new(STATUS_DOT_SIZE / 2.0),
            },
            ..Default::default()
        });

    let status_row = row![
        status_dot,
        text(props.status_text).size(INFO_FONT_SIZE).style(move |_| {
            iced::widget::text::Style {
                color: Some(palette.green),
            }
        }),
        Space::new().width(Length::Fill),
        github_glyph(palette),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let name = text(props.name).size(NAME_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.foreground),
        }
    });

    let role = text(props.role).size(ROLE_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.purple),
        }
    });

    let bio = text(props.bio).size(BIO_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        }
    });

    let mut chips = row![].spacing(6);
    for skill in props.skills {
        chips = chips.push(skill_chip(skill, palette));
    }

    let info = column![
        info_line("Email", props.email, palette),
        info_line("Phone", props.phone, palette),
        info_line("Location", props.location, palette),
        info_line("GitHub", props.github_url, palette),
    ]
    .spacing(6);

    let content = column![
        status_row,
        name,
        role,
        bio,
        chips,
        copy_email_button(props.email_copied, palette),
        info,
    ]
    .spacing(14);

    container(content)
        .padding(20)
        .width(Length::Fixed(CARD_WIDTH))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: Radius::new(16.0),
            },
            ..Default::default()
        })
        .into()
}

/// The desktop card has no browser to hand the profile link to, so the
/// GitHub mark is decorative; the full URL sits in the info lines.
fn github_glyph<'a>(
    palette: &'a IcedColorPalette,
) -> Element<'a, ProfileCardEvent> {
    svg::Svg::new(svg::Handle::from_memory(icons::GITHUB))
        .width(Length::Fixed(SOCIAL_ICON_SIZE))
        .height(Length::Fixed(SOCIAL_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.dim_foreground),
        })
        .into()
}

fn copy_email_button<'a>(
    email_copied: bool,
    palette: &'a IcedColorPalette,
) -> Element<'a, ProfileCardEvent> {
    let label = if email_copied {
        "Email copied!"
    } else {
        "Copy email"
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::COPY))
        .width(Length::Fixed(16.0))
        .height(Length::Fixed(16.0))
        .style(move |_, _| svg::Style {
            color: Some(palette.background),
        });

    let content = row![
        icon,
        text(label).size(COPY_FONT_SIZE).wrapping(Wrapping::None)
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    button(content)
        .on_press(ProfileCardEvent::CopyEmailPressed)
        .padding([8.0, 14.0])
        .style(move |_, _| iced::widget::button::Style {
            background: Some(if email_copied {
                palette.green.into()
            } else {
                palette.cyan.into()
            }),
            text_color: palette.background,
            border: Border {
                color: iced::Color::TRANSPARENT,
                width: 0.0,
                radius: Radius::new(10.0),
            },
            ..iced::widget::button::Style::default()
        })
        .into()
}

fn info_line<'a>(
    label: &'a str,
    value: &'a str,
    palette: &'a IcedColorPalette,
) -> Element<'a, ProfileCardEvent> {
    row![
        text(label).size(INFO_FONT_SIZE).style(move |_| {
            iced::widget::text::Style {
                color: Some(palette.muted),
            }
        }),
        Space::new().width(Length::Fill),
        text(value).size(INFO_FONT_SIZE).style(move |_| {
            iced::widget::text::Style {
                color: Some(palette.foreground),
            }
        }),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn skill_chip<'a>(
    skill: &'a str,
    palette: &'a IcedColorPalette,
) -> Element<'a, ProfileCardEvent> {
    container(text(skill).size(CHIP_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        }
    }))
    .padding([3.0, 10.0])
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.overlay.into()),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    })
    .into()
}
