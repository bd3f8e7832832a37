pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

pub(crate) use state::{App, Event, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
