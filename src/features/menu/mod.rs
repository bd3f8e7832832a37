pub(crate) mod event;
pub(crate) mod feature;
pub(crate) mod model;
pub(crate) mod state;

pub(crate) use event::MenuEvent;
pub(crate) use feature::{MenuCtx, MenuFeature};
pub(crate) use model::NARROW_VIEWPORT_WIDTH;
