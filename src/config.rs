// Game tuning: plain data with RON loading and fail-fast validation.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::entities::FruitKind;
use crate::error::ConfigError;

/// Shortest accepted interval or fall time, in seconds.
pub const MIN_SECONDS: f32 = 0.01;
/// Longest accepted interval or fall time, in seconds.
pub const MAX_SECONDS: f32 = 3600.0;

fn within_bounds(seconds: f32) -> bool {
    (MIN_SECONDS..=MAX_SECONDS).contains(&seconds) && Duration::try_from_secs_f32(seconds).is_ok()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Wrong selections that end the round.
    pub max_wrong_selections: u32,
    /// Seconds between fruit spawns.
    pub spawn_interval: f32,
    /// Seconds between target fruit changes.
    pub rotate_interval: f32,
    /// Fall time in seconds, drawn from `[min, max)` per fruit.
    pub fall_duration: SpawnRange<f32>,
    /// How long the "Wrong Selection!" message stays up.
    pub wrong_message_duration: f32,
    pub fruits: Vec<FruitKind>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_selections: 5,
            spawn_interval: 0.5,
            rotate_interval: 5.0,
            fall_duration: SpawnRange { min: 2.0, max: 5.0 },
            wrong_message_duration: 1.0,
            fruits: FruitKind::ALL.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&data)
    }

    pub fn from_ron(data: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(data)?)
    }

    /// `Ok(None)` only when the file does not exist.  A file that exists but
    /// can't be read or parsed is an error.
    pub fn load_if_present(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        match Self::load_from_file(path) {
            Ok(cfg) => Ok(Some(cfg)),
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fruits.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.max_wrong_selections == 0 {
            return Err(ConfigError::ZeroMaxWrong);
        }
        for (name, seconds) in [
            ("spawn", self.spawn_interval),
            ("rotate", self.rotate_interval),
            ("wrong message", self.wrong_message_duration),
        ] {
            if !within_bounds(seconds) {
                return Err(ConfigError::InvalidInterval { name, seconds });
            }
        }
        let SpawnRange { min, max } = self.fall_duration;
        if !(within_bounds(min) && within_bounds(max) && min < max) {
            return Err(ConfigError::InvalidFallRange { min, max });
        }
        Ok(())
    }

    pub fn spawn_period(&self) -> Duration {
        Duration::from_secs_f32(self.spawn_interval)
    }

    pub fn rotate_period(&self) -> Duration {
        Duration::from_secs_f32(self.rotate_interval)
    }

    pub fn wrong_message_time(&self) -> Duration {
        Duration::from_secs_f32(self.wrong_message_duration)
    }
}

/// Fixed, non-empty set of fruit the session draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct FruitCatalog {
    kinds: Vec<FruitKind>,
}

impl FruitCatalog {
    pub fn new(kinds: Vec<FruitKind>) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { kinds })
    }

    pub fn kinds(&self) -> &[FruitKind] {
        &self.kinds
    }
}
