pub(crate) mod errors;
pub(crate) mod event;
pub(crate) mod feature;
pub(crate) mod model;
pub(crate) mod state;
pub(crate) mod storage;

pub(crate) use event::ProfileEvent;
pub(crate) use feature::ProfileFeature;
pub(crate) use model::{FocusCard, ProfileData};
