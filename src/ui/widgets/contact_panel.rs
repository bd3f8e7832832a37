use iced::border::Radius;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, svg, text, text_input};
use iced::{Alignment, Border, Element, Length};

use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps};

const PROMPT_FONT_SIZE: f32 = 15.0;
const INPUT_FONT_SIZE: f32 = 15.0;
const ERROR_FONT_SIZE: f32 = 13.0;
const SEND_FONT_SIZE: f32 = 14.0;
const SEND_ICON_SIZE: f32 = 16.0;
const INPUT_PADDING_Y: f32 = 10.0;
const INPUT_PADDING_X: f32 = 16.0;

/// Props for rendering the contact form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContactPanelProps<'a> {
    pub(crate) prompt: &'a str,
    pub(crate) message: &'a str,
    pub(crate) error: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
}

/// UI events emitted by the contact form.
#[derive(Debug, Clone)]
pub(crate) enum ContactPanelEvent {
    MessageChanged(String),
    SubmitPressed,
}

pub(crate) fn view<'a>(
    props: ContactPanelProps<'a>,
) -> Element<'a, ContactPanelEvent> {
    let palette = props.theme.theme.iced_palette();

    let prompt = text(props.prompt).size(PROMPT_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        }
    });

    let input = text_input("Type your message...", props.message)
        .on_input(ContactPanelEvent::MessageChanged)
        .on_submit(ContactPanelEvent::SubmitPressed)
        .size(INPUT_FONT_SIZE)
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .style(input_style(palette, props.error.is_some()));

    let form = row![input, send_button(props.message, palette)]
        .spacing(10)
        .align_y(Alignment::Center);

    let mut content = column![prompt, form].spacing(14).width(Length::Fill);

    if let Some(error) = props.error {
        content = content.push(text(error).size(ERROR_FONT_SIZE).style(
            move |_| iced::widget::text::Style {
                color: Some(palette.cyan),
            },
        ));
    }

    content.into()
}

/// The send button is inert while the trimmed draft is empty; the form
/// still validates everything else on submit.
fn send_button<'a>(
    message: &str,
    palette: &'a IcedColorPalette,
) -> Element<'a, ContactPanelEvent> {
    let enabled = !message.trim().is_empty();

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::SEND))
        .width(Length::Fixed(SEND_ICON_SIZE))
        .height(Length::Fixed(SEND_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.background),
        });

    let content = row![
        text("Send").size(SEND_FONT_SIZE).wrapping(Wrapping::None),
        icon
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    button(content)
        .on_press_maybe(enabled.then_some(ContactPanelEvent::SubmitPressed))
        .padding([INPUT_PADDING_Y, 18.0])
        .style(move |_, status| {
            let background = if matches!(
                status,
                iced::widget::button::Status::Disabled
            ) {
                palette.muted
            } else {
                palette.purple
            };

            iced::widget::button::Style {
                background: Some(background.into()),
                text_color: palette.background,
                border: Border {
                    color: iced::Color::TRANSPARENT,
                    width: 0.0,
                    radius: Radius::new(12.0),
                },
                ..iced::widget::button::Style::default()
            }
        })
        .into()
}

fn input_style<'a>(
    palette: &'a IcedColorPalette,
    has_error: bool,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style + 'a {
    move |base: &iced::Theme, status| {
        let mut style = iced::widget::text_input::default(base, status);
        style.background = palette.surface.into();
        style.border = Border {
            color: if has_error { palette.cyan } else { palette.border },
            width: 1.0,
            radius: Radius::new(12.0),
        };
        style.value = palette.foreground;
        style.placeholder = palette.muted;
        style.selection = palette.purple;
        style
    }
}
