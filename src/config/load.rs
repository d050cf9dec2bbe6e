use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Merge the config file (when one exists) with `JUKEBOX__*` variables.
    /// Anything neither source sets keeps its `Default` value.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("JUKEBOX")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings that would make the startup report unreadable.
    pub fn validate(&self) -> Result<(), String> {
        if self.display.detail_fields.is_empty() {
            return Err("display.detail_fields must list at least one field".to_string());
        }
        if self.display.empty_library_text.trim().is_empty() {
            return Err("display.empty_library_text must not be blank".to_string());
        }
        if self.library.import_on_startup && self.library.import_path.is_none() {
            return Err("library.import_on_startup needs library.import_path".to_string());
        }
        Ok(())
    }
}

/// `JUKEBOX_CONFIG_PATH` when set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("JUKEBOX_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `jukebox/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`
/// without it. `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("jukebox").join("config.toml"))
}
