use std::time::Instant;

use iced::Task;

use super::event::ProfileEvent;
use super::model::ProfileData;
use super::state::ProfileState;
use super::storage::{ProfileLoadStatus, load_profile};
use crate::app::Event as AppEvent;

/// Profile content loading and the card's copy-email interaction. A
/// broken or missing profile file never blocks startup; the built-in
/// copy is shown instead.
pub(crate) struct ProfileFeature {
    state: ProfileState,
}

impl ProfileFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: ProfileState::default(),
        }
    }

    pub(crate) fn data(&self) -> &ProfileData {
        self.state.data()
    }

    pub(crate) fn email_copied(&self) -> bool {
        self.state.email_copied()
    }

    pub(crate) fn has_pending_copy_reset(&self) -> bool {
        self.state.has_pending_copy_reset()
    }

    pub(crate) fn reduce(
        &mut self,
        event: ProfileEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            ProfileEvent::Reload => Task::perform(
                async { load_profile() },
                |result| match result {
                    Ok(load) => AppEvent::Profile(ProfileEvent::ReloadLoaded(
                        load,
                    )),
                    Err(err) => AppEvent::Profile(ProfileEvent::ReloadFailed(
                        format!("{err}"),
                    )),
                },
            ),
            ProfileEvent::ReloadLoaded(load) => {
                let (data, status) = load.into_parts();
                if let ProfileLoadStatus::Invalid(message) = &status {
                    log::warn!(
                        "profile file is invalid, using defaults: {message}"
                    );
                }
                self.state.replace_data(data);
                Task::none()
            }
            ProfileEvent::ReloadFailed(message) => {
                log::warn!("profile read failed, using defaults: {message}");
                Task::none()
            }
            ProfileEvent::CopyEmail => {
                let email = self.state.data().email.clone();
                self.state.mark_copied(Instant::now());
                iced::clipboard::write(email)
            }
            ProfileEvent::Tick => {
                self.state.expire_copied(Instant::now());
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::profile::storage::ProfileLoad;

    #[test]
    fn given_loaded_profile_when_reduced_then_its_data_is_served() {
        let mut feature = ProfileFeature::new();
        let mut data = ProfileData::default();
        data.email = String::from("someone@example.com");

        let _task = feature.reduce(
            ProfileEvent::ReloadLoaded(ProfileLoad::new(
                data.clone(),
                ProfileLoadStatus::Loaded,
            )),
            &(),
        );

        assert_eq!(feature.data(), &data);
    }

    #[test]
    fn given_invalid_profile_when_reduced_then_defaults_are_served() {
        let mut feature = ProfileFeature::new();

        let _task = feature.reduce(
            ProfileEvent::ReloadLoaded(ProfileLoad::new(
                ProfileData::default(),
                ProfileLoadStatus::Invalid(String::from("trailing comma")),
            )),
            &(),
        );

        assert_eq!(feature.data(), &ProfileData::default());
    }

    #[test]
    fn given_copy_email_when_reduced_then_the_confirmation_is_armed() {
        let mut feature = ProfileFeature::new();

        let _task = feature.reduce(ProfileEvent::CopyEmail, &());

        assert!(feature.email_copied());
        assert!(feature.has_pending_copy_reset());
    }
}
