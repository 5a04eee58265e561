//! # Configuration
//!
//! Run-time settings of the cube, read once at start-up from a JSON file.
//!
//! Every field has a default, so an empty object (or no file at all) yields the
//! shipped behaviour: Lit, Rain and CubeJump, three seconds each.
//!
//! ```json
//! {
//!     "effect_change_time": 5000,
//!     "cycle": ["text", "glow", "plane_boing"],
//!     "text": "2024",
//!     "plane_boing_looped": true
//! }
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::core::Tick;
use crate::engine_state::effects::{glow::GLOW_TARGET, EffectKind, EffectSettings};
use crate::engine_state::scheduler::{EffectCycle, EFFECT_CHANGE_TIME};
use crate::engine_state::voxels::cube::CUBE_SIZE;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_PATH_VAR: &str = "LED_CUBE_CONFIG";

/// Everything that can be wrong with a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON, or a field has the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A cycle entry names no known effect.
    #[error("unknown effect `{0}` in cycle")]
    UnknownEffect(String),
    /// The cycle has no entries.
    #[error("effect cycle is empty")]
    EmptyCycle,
    /// A zero interval would switch effects on every tick.
    #[error("effect_change_time must be greater than zero")]
    ZeroChangeTime,
    /// The glow target exceeds the number of voxels.
    #[error("glow_target {0} exceeds the {max} voxels of the cube", max = CUBE_SIZE)]
    GlowTargetTooLarge(i32),
}

/// Settings of a cube run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    /// Ticks each effect stays active before the scheduler moves on.
    pub effect_change_time: Tick,
    /// Effect names to cycle through, in order.
    pub cycle: Vec<String>,
    /// Digits scrolled by the text effect.
    pub text: String,
    /// Whether the plane sweep bounces instead of restarting.
    pub plane_boing_looped: bool,
    /// Voxels the glow lights one by one before draining.
    pub glow_target: i32,
    /// Whether the glow lights the remainder at once after its target.
    pub glow_bulk_fill: bool,
    /// Pause between two renders of the native loop, in microseconds.
    pub frame_pause_micros: u64,
    /// Fixed random seed; seeded from the system when absent.
    pub seed: Option<u64>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        let settings = EffectSettings::default();
        Self {
            effect_change_time: EFFECT_CHANGE_TIME,
            cycle: EffectCycle::default()
                .kinds()
                .iter()
                .map(|kind| kind.name().to_string())
                .collect(),
            text: settings.text,
            plane_boing_looped: settings.plane_boing_looped,
            glow_target: GLOW_TARGET,
            glow_bulk_fill: settings.glow_bulk_fill,
            frame_pause_micros: 1000,
            seed: None,
        }
    }
}

impl CubeConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any validation error.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: CubeConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`CubeConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Loads the file named by [`CONFIG_PATH_VAR`], or the defaults if it is unset.
    ///
    /// # Errors
    /// As [`CubeConfig::load`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::load(path),
            None => {
                log::info!("{} not set, using default config", CONFIG_PATH_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Checks every field that has constraints beyond its type.
    ///
    /// # Errors
    /// The first constraint violated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effect_change_time == 0 {
            return Err(ConfigError::ZeroChangeTime);
        }
        if self.glow_target > CUBE_SIZE {
            return Err(ConfigError::GlowTargetTooLarge(self.glow_target));
        }
        self.effect_cycle().map(|_| ())
    }

    /// Resolves the cycle names into an [`EffectCycle`].
    ///
    /// # Errors
    /// [`ConfigError::UnknownEffect`] for a name outside the catalogue,
    /// [`ConfigError::EmptyCycle`] for an empty list.
    pub fn effect_cycle(&self) -> Result<EffectCycle, ConfigError> {
        let kinds = self
            .cycle
            .iter()
            .map(|name| {
                EffectKind::from_name(name).ok_or_else(|| ConfigError::UnknownEffect(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        EffectCycle::new(kinds)
    }

    /// The effect tunables carried by this configuration.
    pub fn effect_settings(&self) -> EffectSettings {
        EffectSettings {
            text: self.text.clone(),
            plane_boing_looped: self.plane_boing_looped,
            glow_target: self.glow_target.max(0),
            glow_bulk_fill: self.glow_bulk_fill,
        }
    }
}
