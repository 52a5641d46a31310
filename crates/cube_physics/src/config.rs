//! # Physics Configuration
//!
//! Tuning for the spatial queries, loaded once at startup from TOML.
//! Every field is optional in the file and falls back to the defaults in
//! `cube_shared::constants`.
//!
//! ```toml
//! block_ray_step = 0.0009765625
//! reach = 6.0
//! player_width = 0.6
//! player_height = 1.8
//! eye_height = 1.6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use cube_shared::{BLOCK_RAY_STEP, DEFAULT_REACH, PLAYER_EYE_HEIGHT, PLAYER_HEIGHT, PLAYER_WIDTH};

use crate::collider::Collider;
use crate::error::{PhysicsError, PhysicsResult};

/// Tuning values for raycasts and the player body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Sub-step length of the block ray walk (blocks).
    pub block_ray_step: f32,
    /// Maximum distance for block and entity picking (blocks).
    pub reach: f32,
    /// Player hitbox width (blocks).
    pub player_width: f32,
    /// Player hitbox height (blocks).
    pub player_height: f32,
    /// Camera height above the player's feet (blocks).
    pub eye_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            block_ray_step: BLOCK_RAY_STEP,
            reach: DEFAULT_REACH,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            eye_height: PLAYER_EYE_HEIGHT,
        }
    }
}

impl PhysicsConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the text is not valid TOML for this struct or a
    /// value fails [`PhysicsConfig::validate`].
    pub fn from_toml_str(text: &str) -> PhysicsResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| PhysicsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// `ConfigRead` if the file cannot be read, otherwise as
    /// [`PhysicsConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> PhysicsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PhysicsError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded physics config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> PhysicsResult<()> {
        positive("block_ray_step", self.block_ray_step)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;

        if !self.reach.is_finite() || self.reach < 0.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "reach must be finite and >= 0, got {}",
                self.reach
            )));
        }
        if !self.eye_height.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "eye_height must be finite, got {}",
                self.eye_height
            )));
        }
        if self.block_ray_step >= 1.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "block_ray_step must be below one block, got {}",
                self.block_ray_step
            )));
        }
        Ok(())
    }

    /// Collider for a player body of the configured size.
    #[must_use]
    pub fn player_collider(&self) -> Collider {
        Collider::new(self.player_width, self.player_height)
    }
}

fn positive(name: &str, value: f32) -> PhysicsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidConfig(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_ray_step, 1.0 / 1024.0);
        assert_eq!(config.reach, 5.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PhysicsConfig::from_toml_str("reach = 8.0\nplayer_width = 0.8\n").unwrap();
        assert_eq!(config.reach, 8.0);
        assert_eq!(config.player_width, 0.8);
        assert_eq!(config.player_height, PLAYER_HEIGHT);
        assert_eq!(config.block_ray_step, BLOCK_RAY_STEP);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = PhysicsConfig::from_toml_str("block_ray_step = 0.0").unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(ref msg) if msg.contains("block_ray_step")));

        let err = PhysicsConfig::from_toml_str("block_ray_step = 2.0").unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));

        let err = PhysicsConfig::from_toml_str("reach = -1.0").unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(ref msg) if msg.contains("reach")));

        let err = PhysicsConfig::from_toml_str("player_height = -1.8").unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(ref msg) if msg.contains("player_height")));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(PhysicsConfig::from_toml_str("reach = \"far\"").is_err());
        assert!(PhysicsConfig::from_toml_str("gravity = 9.8").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PhysicsConfig::load("/nonexistent/cube/physics.toml").unwrap_err();
        assert!(matches!(err, PhysicsError::ConfigRead { ref path, .. } if path.contains("physics.toml")));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("cube_physics_{}.toml", std::process::id()));
        std::fs::write(&path, "reach = 3.5\neye_height = 1.5\n").unwrap();

        let config = PhysicsConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.reach, 3.5);
        assert_eq!(config.eye_height, 1.5);
    }

    #[test]
    fn test_player_collider() {
        let collider = PhysicsConfig::default().player_collider();
        assert_eq!(collider.width(), PLAYER_WIDTH);
        assert_eq!(collider.height(), PLAYER_HEIGHT);
    }
}
