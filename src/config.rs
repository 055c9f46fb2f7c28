//! Layered configuration for the rating system.
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - `store-ratings.toml` in the working directory, if present
//! - environment variables prefixed with `STORE_RATINGS_`
//!
//! Nested keys are separated by a double underscore:
//! - `STORE_RATINGS_ACTORS__CHANNEL_BUFFER=64` sets `actors.channel_buffer`
//! - `STORE_RATINGS_RATINGS__RECENT_LIMIT=10` sets `ratings.recent_limit`

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "store-ratings.toml";
pub const ENV_PREFIX: &str = "STORE_RATINGS_";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub actors: ActorSettings,

    #[serde(default)]
    pub ratings: RatingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActorSettings {
    /// Request channel capacity of every actor, greater than 0
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatingSettings {
    /// How many ratings `rating_statistics` returns as recent
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Minimum average for a store to count as highly rated
    #[serde(default = "default_highly_rated_threshold")]
    pub highly_rated_threshold: f64,
}

fn default_channel_buffer() -> usize {
    32
}
fn default_recent_limit() -> usize {
    5
}
fn default_highly_rated_threshold() -> f64 {
    4.0
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
        }
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            highly_rated_threshold: default_highly_rated_threshold(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load with an explicit config file path. A missing file is skipped.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::extract_from(Self::figment(Toml::file(path.as_ref())))
    }

    fn extract_from(figment: Figment) -> Result<Self, Box<figment::Error>> {
        let settings: Self = figment.extract().map_err(Box::new)?;
        settings.check().map_err(Box::new)?;
        Ok(settings)
    }

    /// Values that deserialize fine but cannot run the system.
    fn check(&self) -> Result<(), figment::Error> {
        if self.actors.channel_buffer == 0 {
            return Err(figment::Error::from(
                "actors.channel_buffer must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn figment(file: impl figment::Provider) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_from_toml(content: &str) -> Result<Settings, Box<figment::Error>> {
        Settings::extract_from(
            Figment::new()
                .merge(Serialized::defaults(Settings::default()))
                .merge(Toml::string(content)),
        )
    }

    fn from_toml(content: &str) -> Settings {
        try_from_toml(content).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.actors.channel_buffer, 32);
        assert_eq!(settings.ratings.recent_limit, 5);
        assert_eq!(settings.ratings.highly_rated_threshold, 4.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = from_toml(
            r#"
[ratings]
recent_limit = 10
"#,
        );
        assert_eq!(settings.ratings.recent_limit, 10);
        assert_eq!(settings.ratings.highly_rated_threshold, 4.0);
        assert_eq!(settings.actors.channel_buffer, 32);
    }

    #[test]
    fn test_full_toml() {
        let settings = from_toml(
            r#"
[actors]
channel_buffer = 8

[ratings]
recent_limit = 3
highly_rated_threshold = 4.5
"#,
        );
        assert_eq!(settings.actors.channel_buffer, 8);
        assert_eq!(settings.ratings.recent_limit, 3);
        assert_eq!(settings.ratings.highly_rated_threshold, 4.5);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from("does-not-exist/store-ratings.toml").unwrap();
        assert_eq!(settings.ratings.recent_limit, 5);
    }

    #[test]
    fn test_zero_channel_buffer_is_rejected() {
        let err = try_from_toml(
            r#"
[actors]
channel_buffer = 0
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("channel_buffer must be greater than 0"));
    }
}
