use directories::ProjectDirs;
use encore::color::HexColor;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// One wheel option as written in the steps file.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionConfig {
    pub value: String,
    pub label: String,
    pub color: HexColor,
    pub desc: String,
}

/// One wizard step as written in the steps file. Exactly one of `options`
/// and `choices` must be present; the session enforces that at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub hint: String,
    pub options: Option<Vec<OptionConfig>>,
    #[serde(default)]
    pub multiselect: bool,
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub accents: HashMap<String, HexColor>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "portato", "portato").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("steps.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("PORTATO"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The embedded step list, used until (or instead of) a user steps file.
pub fn builtin_steps() -> Config {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_STEPS,
            config::FileFormat::Toml,
        ))
        .build()
        .expect("built-in steps are valid");
    s.try_deserialize().expect("built-in steps are valid")
}

/// Loads the user's steps file, seeding it with the built-in list on first
/// run and falling back to the built-ins on any problem.
pub fn load_or_default() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
        && let Err(e) = write_default_config()
    {
        log::debug!("could not seed steps file: {e}");
    }

    match load_config() {
        Ok(config) if !config.steps.is_empty() => config,
        Ok(_) => builtin_steps(),
        Err(e) => {
            log::warn!("invalid steps file, using built-in steps: {e}");
            builtin_steps()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_STEPS)?;
    }
    Ok(path)
}

const DEFAULT_STEPS: &str = include_str!("default_steps.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_steps_shape() {
        let config = builtin_steps();
        let ids: Vec<&str> = config.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["place", "mood", "flow", "extras", "instruments"]);

        for step in &config.steps[..4] {
            let options = step.options.as_ref().unwrap();
            assert_eq!(options.len(), 4, "step '{}'", step.id);
            assert!(step.choices.is_none());
            assert!(!step.multiselect);
        }
    }

    #[test]
    fn test_builtin_instrument_step() {
        let config = builtin_steps();
        let step = config.steps.last().unwrap();
        assert!(step.multiselect);
        assert!(step.options.is_none());

        let choices = step.choices.as_ref().unwrap();
        assert_eq!(choices.len(), 9);
        assert_eq!(choices[0], "바이올린");
        assert_eq!(step.accents.len(), choices.len());
        assert_eq!(
            step.accents.get("첼로"),
            Some(&HexColor::from_rgb(0xE6, 0xF4, 0xD9))
        );
    }

    #[test]
    fn test_builtin_colors_parse() {
        let config = builtin_steps();
        let first = &config.steps[0].options.as_ref().unwrap()[0];
        assert_eq!(first.value, "field");
        assert_eq!(first.color, HexColor::from_rgb(0xCD, 0xE2, 0xA5));
    }
}
