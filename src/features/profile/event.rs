use super::storage::ProfileLoad;

/// Events for profile content loading and card interactions.
#[derive(Debug, Clone)]
pub(crate) enum ProfileEvent {
    Reload,
    ReloadLoaded(ProfileLoad),
    ReloadFailed(String),
    CopyEmail,
    Tick,
}
