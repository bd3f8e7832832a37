use iced::border::Radius;
use iced::widget::{Space, Stack, column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Length, alignment};

use super::state::{App, Event};
use crate::features::contact::ContactEvent;
use crate::features::menu::{MenuEvent, model as menu_model};
use crate::features::navigation::{
    ABOUT_SECTION_HEIGHT, CONTACT_SECTION_HEIGHT, HERO_SECTION_HEIGHT,
    NavigationEvent, PAGE_SCROLL_ID, SECTION_SPACING, Section,
};
use crate::features::profile::ProfileEvent;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button;
use crate::ui::components::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::ui::widgets::{
    about, contact_panel, footer, hero, menu_bar, profile_card,
};

const HEADER_HEIGHT: f32 = 72.0;
const HEADER_PADDING_X: f32 = 24.0;
const PAGE_MAX_WIDTH: f32 = 980.0;
const PAGE_PADDING_X: f32 = 24.0;
const TOAST_MARGIN: f32 = 24.0;
const LOGO_BUTTON_SIZE: f32 = 40.0;
const LOGO_ICON_SIZE: f32 = 24.0;

pub(super) fn view(app: &App) -> Element<'_, Event> {
    let theme_props = ThemeProps::new(app.theme_manager.current());

    let page = column![view_header(app, theme_props), view_page(app, theme_props)]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, Event>> = vec![page.into()];
    if app.features.contact().toast_visible() {
        layers.push(view_toast(theme_props));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event> {
    let palette = theme_props.theme.iced_palette();
    let scrolled = app.features.navigation().is_scrolled();

    let logo = icon_button::view(IconButtonProps {
        icon: icons::LOGO,
        theme: theme_props,
        size: LOGO_BUTTON_SIZE,
        icon_size: LOGO_ICON_SIZE,
        variant: IconButtonVariant::Plain,
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => {
            Event::Navigation(NavigationEvent::Select(Section::Home))
        }
    });

    let name = text(&app.features.profile().data().name)
        .font(app.fonts.ui.font_type)
        .size(app.fonts.ui.size * 1.1)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.foreground),
        });

    let content = row![
        logo,
        name,
        Space::new().width(Length::Fill),
        view_menu_bar(app, theme_props),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .width(Length::Fill);

    // The header floats transparently over the hero until the page is
    // scrolled, then gains a solid surface and bottom hairline.
    container(content)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| {
            if scrolled {
                iced::widget::container::Style {
                    background: Some(palette.surface.into()),
                    border: Border {
                        color: palette.border,
                        width: 1.0,
                        radius: Radius::new(0.0),
                    },
                    ..Default::default()
                }
            } else {
                iced::widget::container::Style::default()
            }
        })
        .into()
}

fn view_menu_bar<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event> {
    let menu = app.features.menu();
    let active = app.features.navigation().active();

    let entries = Section::ALL
        .iter()
        .map(|&section| menu_bar::MenuBarEntry {
            item: bar_item_for(section),
            label: section.label(),
            icon: menu_model::item_icon(section),
            active: active == section,
            hovered: menu.is_hovered(section),
            tooltip_visible: menu.tooltip_visible(section),
        })
        .collect();

    menu_bar::view(menu_bar::MenuBarProps {
        entries,
        theme: theme_props,
    })
    .map(|event| match event {
        menu_bar::MenuBarEvent::Pressed(item) => {
            Event::Menu(MenuEvent::Pressed(section_for_bar_item(item)))
        }
        menu_bar::MenuBarEvent::HoverChanged { item, hovered } => {
            Event::Menu(MenuEvent::Hovered {
                section: section_for_bar_item(item),
                hovered,
            })
        }
    })
}

fn view_page<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event> {
    let profile = app.features.profile().data();
    let contact = app.features.contact();

    let hero_section = hero::view(hero::HeroProps {
        name: &profile.name,
        tagline: &profile.tagline,
        theme: theme_props,
    })
    .map(|event| match event {});

    let about_section = about::view(about::AboutProps {
        heading: &profile.about_heading,
        body: &profile.about_body,
        cards: &profile.focus_cards,
        skills: &profile.skills,
        theme: theme_props,
    })
    .map(|event| match event {});

    let card = profile_card::view(profile_card::ProfileCardProps {
        name: &profile.name,
        role: &profile.role,
        bio: &profile.bio,
        status_text: &profile.status_text,
        email: &profile.email,
        phone: &profile.phone,
        location: &profile.location,
        github_url: &profile.github_url,
        skills: &profile.skills,
        email_copied: app.features.profile().email_copied(),
        theme: theme_props,
    })
    .map(|event| match event {
        profile_card::ProfileCardEvent::CopyEmailPressed => {
            Event::Profile(ProfileEvent::CopyEmail)
        }
    });

    let form = contact_panel::view(contact_panel::ContactPanelProps {
        prompt: &profile.contact_prompt,
        message: contact.message(),
        error: contact.error(),
        theme: theme_props,
    })
    .map(|event| match event {
        contact_panel::ContactPanelEvent::MessageChanged(value) => {
            Event::Contact(ContactEvent::MessageChanged(value))
        }
        contact_panel::ContactPanelEvent::SubmitPressed => {
            Event::Contact(ContactEvent::Submit)
        }
    });

    let contact_section = row![form, card]
        .spacing(32)
        .align_y(Alignment::Start)
        .width(Length::Fill);

    let footer_bar = footer::view(footer::FooterProps {
        name: &profile.name,
        github_url: &profile.github_url,
        theme: theme_props,
    })
    .map(|event| match event {
        footer::FooterEvent::Navigate(target) => Event::Navigation(
            NavigationEvent::Select(section_for_footer_target(target)),
        ),
    });

    // Section extents are fixed so the navigation model can derive
    // anchor offsets without measuring the rendered tree.
    let page_column = column![
        page_section(hero_section, HERO_SECTION_HEIGHT),
        page_section(about_section, ABOUT_SECTION_HEIGHT),
        page_section(contact_section.into(), CONTACT_SECTION_HEIGHT),
        footer_bar,
    ]
    .spacing(SECTION_SPACING)
    .width(Length::Fill);

    scrollable::Scrollable::with_direction(
        page_column,
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(6)
                .margin(0),
        ),
    )
    .id(PAGE_SCROLL_ID)
    .on_scroll(|viewport| {
        Event::Navigation(NavigationEvent::Scrolled {
            offset: viewport.absolute_offset().y,
        })
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn page_section<'a>(
    content: Element<'a, Event>,
    height: f32,
) -> Element<'a, Event> {
    let constrained = container(content)
        .max_width(PAGE_MAX_WIDTH)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, PAGE_PADDING_X]);

    container(constrained)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn view_toast<'a>(theme_props: ThemeProps<'a>) -> Element<'a, Event> {
    let palette = theme_props.theme.iced_palette();

    let toast = container(text("Message sent!").size(14.0).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.background),
        }
    }))
    .padding([10.0, 18.0])
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.green.into()),
        border: Border {
            color: iced::Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    });

    container(toast)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(TOAST_MARGIN)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .into()
}

fn bar_item_for(section: Section) -> menu_bar::MenuBarItem {
    match section {
        Section::Home => menu_bar::MenuBarItem::Home,
        Section::About => menu_bar::MenuBarItem::About,
        Section::Contact => menu_bar::MenuBarItem::Contact,
    }
}

fn section_for_bar_item(item: menu_bar::MenuBarItem) -> Section {
    match item {
        menu_bar::MenuBarItem::Home => Section::Home,
        menu_bar::MenuBarItem::About => Section::About,
        menu_bar::MenuBarItem::Contact => Section::Contact,
    }
}

fn section_for_footer_target(target: footer::FooterTarget) -> Section {
    match target {
        footer::FooterTarget::Home => Section::Home,
        footer::FooterTarget::About => Section::About,
        footer::FooterTarget::Contact => Section::Contact,
    }
}
