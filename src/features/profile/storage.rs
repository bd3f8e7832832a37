use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ProfileError;
use super::model::ProfileData;

/// Status describing how profile content was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ProfileLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading profile content from disk.
#[derive(Debug, Clone)]
pub(crate) struct ProfileLoad {
    data: ProfileData,
    status: ProfileLoadStatus,
}

impl ProfileLoad {
    pub(crate) fn new(data: ProfileData, status: ProfileLoadStatus) -> Self {
        Self { data, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ProfileData, ProfileLoadStatus) {
        (self.data, self.status)
    }
}

pub(crate) fn load_profile() -> Result<ProfileLoad, ProfileError> {
    load_profile_from_path(&profile_path())
}

fn load_profile_from_path(path: &Path) -> Result<ProfileLoad, ProfileError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ProfileLoad::new(
                ProfileData::default(),
                ProfileLoadStatus::Missing,
            ));
        }
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<ProfileData>(&contents) {
        Ok(data) => Ok(ProfileLoad::new(data, ProfileLoadStatus::Loaded)),
        Err(err) => Ok(ProfileLoad::new(
            ProfileData::default(),
            ProfileLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

/// The page never mutates its content, so there is no save path.
fn profile_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("lumen")
            .join("profile.json");
    }

    std::env::temp_dir().join("lumen").join("profile.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{ProfileData, ProfileLoadStatus, load_profile_from_path};

    #[test]
    fn given_missing_file_when_loaded_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("profile.json");

        let loaded = load_profile_from_path(&path)
            .expect("a missing profile should not be an io error");
        let (data, status) = loaded.into_parts();

        assert!(matches!(status, ProfileLoadStatus::Missing));
        assert_eq!(data, ProfileData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_profile_when_loaded_then_other_fields_default() {
        let root = test_temp_dir("partial");
        let path = root.join("profile.json");
        fs::write(&path, r#"{ "name": "Jamie Doe", "skills": ["Go"] }"#)
            .expect("test payload should be written");

        let loaded = load_profile_from_path(&path)
            .expect("a partial profile should load");
        let (data, status) = loaded.into_parts();

        assert!(matches!(status, ProfileLoadStatus::Loaded));
        assert_eq!(data.name, "Jamie Doe");
        assert_eq!(data.skills, vec![String::from("Go")]);
        assert_eq!(data.email, ProfileData::default().email);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loaded_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid");
        let path = root.join("profile.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_profile_from_path(&path)
            .expect("invalid json should not surface as an io error");
        let (data, status) = loaded.into_parts();

        assert_eq!(data, ProfileData::default());
        match status {
            ProfileLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            }
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "lumen-profile-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
