use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexis_config::Config;
use serde::{Deserialize, Serialize};

pub const MAIN_PROFILE: &str = "main";

fn profiles_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("profiles")
}

/// Profile names become file names, so anything that could leave the
/// profiles folder is rejected
pub fn validate_profile_name(name: &str) -> anyhow::Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Profile name is empty");
    }
    if trimmed.contains(['/', '\\']) || trimmed.contains("..") || Path::new(trimmed).is_absolute() {
        anyhow::bail!("Invalid profile name '{name}': path separators and '..' are not allowed");
    }
    Ok(())
}

fn profile_path(data_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    validate_profile_name(name)?;
    Ok(profiles_dir(data_dir).join(format!("{name}.json")))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Where a loaded config came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Named,
    /// The requested profile was missing
    Main,
    Defaults,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

/// Create the profiles folder and a main profile from the current defaults.
///
/// Returns the main profile's path when it was written by this call.
pub fn init_user_config(data_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let dir = profiles_dir(data_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let main_profile = profile_path(data_dir, MAIN_PROFILE)?;
    if main_profile.exists() {
        return Ok(None);
    }
    let profile = Profile {
        name: MAIN_PROFILE.into(),
        value: Config::new(),
    };
    fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write {}", main_profile.display()))?;
    Ok(Some(main_profile))
}

/// Load a profile by name, falling back to main and then to the defaults
pub fn load_user_profile(data_dir: &Path, name: &str) -> anyhow::Result<(Config, ProfileSource)> {
    let profile_file = profile_path(data_dir, name)?;
    if profile_file.exists() {
        return Ok((read_profile(&profile_file)?, ProfileSource::Named));
    }

    let main_file = profile_path(data_dir, MAIN_PROFILE)?;
    if main_file.exists() {
        Ok((read_profile(&main_file)?, ProfileSource::Main))
    } else {
        Ok((Config::new(), ProfileSource::Defaults))
    }
}

/// Add a new profile cloned from main
pub fn add_profile_from_default(data_dir: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    let file = profile_path(data_dir, new_name)?;
    let (config, _) = load_user_profile(data_dir, MAIN_PROFILE)?;
    let profile = Profile {
        name: new_name.into(),
        value: config,
    };
    fs::create_dir_all(profiles_dir(data_dir))?;
    fs::write(&file, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use lexis_types::StudyMode;

    use super::*;

    #[test]
    fn test_init_creates_main_once() {
        let dir = tempfile::tempdir().unwrap();
        let main = init_user_config(dir.path()).unwrap().unwrap();
        assert_eq!(main, profile_path(dir.path(), MAIN_PROFILE).unwrap());
        assert!(main.exists());

        // an edited main profile survives a second init
        let (mut config, source) = load_user_profile(dir.path(), MAIN_PROFILE).unwrap();
        assert_eq!(source, ProfileSource::Named);
        config.study.mode = StudyMode::Example;
        let profile = Profile {
            name: MAIN_PROFILE.into(),
            value: config,
        };
        fs::write(&main, serde_json::to_string(&profile).unwrap()).unwrap();

        assert!(init_user_config(dir.path()).unwrap().is_none());
        let (config, _) = load_user_profile(dir.path(), MAIN_PROFILE).unwrap();
        assert_eq!(config.study.mode, StudyMode::Example);
    }

    #[test]
    fn test_unknown_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        init_user_config(dir.path()).unwrap();
        let path = add_profile_from_default(dir.path(), "evening").unwrap();
        assert!(path.ends_with("profiles/evening.json"));

        let (config, source) = load_user_profile(dir.path(), "missing").unwrap();
        assert_eq!(source, ProfileSource::Main);
        assert_eq!(config.study.history_limit, 50);

        let (_, source) = load_user_profile(dir.path(), "evening").unwrap();
        assert_eq!(source, ProfileSource::Named);
    }

    #[test]
    fn test_no_profiles_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load_user_profile(dir.path(), "anything").unwrap();
        assert_eq!(source, ProfileSource::Defaults);
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn test_broken_profile_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(profiles_dir(dir.path())).unwrap();
        fs::write(profile_path(dir.path(), "bad").unwrap(), "{").unwrap();

        let err = load_user_profile(dir.path(), "bad").unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn test_profile_names_stay_inside_profiles_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        init_user_config(&data_dir).unwrap();

        for name in ["../../x", "../x", "a/b", "a\\b", "..", "", "  "] {
            assert!(validate_profile_name(name).is_err(), "{name:?} accepted");
            assert!(add_profile_from_default(&data_dir, name).is_err(), "{name:?} created");
            assert!(load_user_profile(&data_dir, name).is_err(), "{name:?} loaded");
        }
        assert!(!dir.path().join("x.json").exists());
        assert!(!data_dir.join("x.json").exists());

        validate_profile_name("evening-2").unwrap();
    }
}
