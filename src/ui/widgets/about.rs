use iced::border::Radius;
use iced::widget::{column, container, row, text};
use iced::{Border, Element, Length, alignment};

use crate::features::profile::FocusCard;
use crate::theme::{IcedColorPalette, ThemeProps};

const EYEBROW_FONT_SIZE: f32 = 12.0;
const HEADING_FONT_SIZE: f32 = 30.0;
const BODY_FONT_SIZE: f32 = 15.0;
const CARD_TITLE_FONT_SIZE: f32 = 15.0;
const CARD_BODY_FONT_SIZE: f32 = 13.0;
const CHIP_FONT_SIZE: f32 = 13.0;
const CARDS_PER_ROW: usize = 2;

/// Props for rendering the about section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AboutProps<'a> {
    pub(crate) heading: &'a str,
    pub(crate) body: &'a str,
    pub(crate) cards: &'a [FocusCard],
    pub(crate) skills: &'a [String],
    pub(crate) theme: ThemeProps<'a>,
}

/// The about section is purely presentational.
#[derive(Debug, Clone)]
pub(crate) enum AboutEvent {}

pub(crate) fn view<'a>(props: AboutProps<'a>) -> Element<'a, AboutEvent> {
    let palette = props.theme.theme.iced_palette();

    let eyebrow = text("ABOUT").size(EYEBROW_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.cyan),
        }
    });

    let heading = text(props.heading).size(HEADING_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(palette.foreground),
        },
    );

    let body = text(props.body).size(BODY_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        }
    });

    let mut card_grid = column![].spacing(16);
    for pair in props.cards.chunks(CARDS_PER_ROW) {
        let mut cards_row = row![].spacing(16);
        for card in pair {
            cards_row = cards_row.push(focus_card(card, palette));
        }
        card_grid = card_grid.push(cards_row);
    }

    let mut chips = row![].spacing(8);
    for skill in props.skills {
        chips = chips.push(skill_chip(skill, palette));
    }

    let content = column![eyebrow, heading, body, card_grid, chips]
        .spacing(20)
        .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn focus_card<'a>(
    card: &'a FocusCard,
    palette: &'a IcedColorPalette,
) -> Element<'a, AboutEvent> {
    let title = text(&card.title).size(CARD_TITLE_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(palette.foreground),
        },
    );

    let body = text(&card.body).size(CARD_BODY_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.muted),
        }
    });

    container(column![title, body].spacing(8))
        .padding(16)
        .width(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: Radius::new(12.0),
            },
            ..Default::default()
        })
        .into()
}

fn skill_chip<'a>(
    skill: &'a str,
    palette: &'a IcedColorPalette,
) -> Element<'a, AboutEvent> {
    container(text(skill).size(CHIP_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.cyan),
        }
    }))
    .padding([4.0, 12.0])
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.overlay.into()),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::new(14.0),
        },
        ..Default::default()
    })
    .into()
}
