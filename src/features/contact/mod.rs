pub(crate) mod event;
pub(crate) mod feature;
pub(crate) mod model;
pub(crate) mod state;

pub(crate) use event::ContactEvent;
pub(crate) use feature::ContactFeature;
