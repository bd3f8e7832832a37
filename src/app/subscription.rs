use std::time::Duration;

use iced::{Subscription, window};

use super::state::{App, Event};

/// Milliseconds between deadline sweeps while any timer is pending.
const TIMER_TICK_MS: u64 = 50;

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let mut subscriptions =
        vec![window::events().map(|(_id, event)| Event::Window(event))];

    // The tick stream only runs while a tooltip, toast, or copy
    // confirmation is waiting to be hidden.
    if app.features.has_pending_timers() {
        subscriptions.push(
            iced::time::every(Duration::from_millis(TIMER_TICK_MS))
                .map(|_| Event::Tick),
        );
    }

    Subscription::batch(subscriptions)
}
