use iced::{Task, window};

use super::state::{App, Event};
use crate::features::contact::ContactEvent;
use crate::features::menu::{MenuCtx, MenuEvent, NARROW_VIEWPORT_WIDTH};
use crate::features::navigation::{NavigationEvent, Section};
use crate::features::profile::ProfileEvent;

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    match event {
        Event::IcedReady => startup_tasks(app),
        Event::Navigation(event) => {
            app.features.navigation_mut().reduce(event, &())
        }
        Event::Menu(event) => {
            let ctx = MenuCtx {
                window_width: app.window_size.width,
            };
            app.features.menu_mut().reduce(event, &ctx)
        }
        Event::Contact(event) => app.features.contact_mut().reduce(event, &()),
        Event::Profile(event) => app.features.profile_mut().reduce(event, &()),
        Event::Window(window::Event::Resized(size)) => {
            app.window_size = size;
            // Leaving the narrow range drops any pending tap tooltips.
            if size.width >= NARROW_VIEWPORT_WIDTH {
                let ctx = MenuCtx {
                    window_width: size.width,
                };
                return app
                    .features
                    .menu_mut()
                    .reduce(MenuEvent::ResetTooltips, &ctx);
            }
            Task::none()
        }
        Event::Window(_) => Task::none(),
        Event::Tick => fan_out_tick(app),
    }
}

fn startup_tasks(app: &mut App) -> Task<Event> {
    let mut tasks = vec![Task::done(Event::Profile(ProfileEvent::Reload))];

    if app.start_section != Section::Home {
        tasks.push(Task::done(Event::Navigation(NavigationEvent::Select(
            app.start_section,
        ))));
    }

    Task::batch(tasks)
}

fn fan_out_tick(app: &mut App) -> Task<Event> {
    let ctx = MenuCtx {
        window_width: app.window_size.width,
    };

    Task::batch(vec![
        app.features.menu_mut().reduce(MenuEvent::Tick, &ctx),
        app.features.contact_mut().reduce(ContactEvent::Tick, &()),
        app.features.profile_mut().reduce(ProfileEvent::Tick, &()),
    ])
}
