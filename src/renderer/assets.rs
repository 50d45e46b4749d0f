//! Sprite image loading
//!
//! The three images are loaded once at startup with their alpha channel. They
//! are drawn at whatever size the simulation asks for, so linear filtering is
//! turned on for smooth down-scaling.

use macroquad::prelude::{FilterMode, Texture2D, load_texture};

use crate::error::AssetError;
use crate::settings::Settings;
use crate::sim::{ObstacleKind, SpriteAspects};

/// Loaded sprite textures
pub struct Assets {
    pub player: Texture2D,
    pub beneficial: Texture2D,
    pub hazard: Texture2D,
}

impl Assets {
    /// Load all sprites named in the settings
    pub async fn load(settings: &Settings) -> Result<Self, AssetError> {
        Ok(Self {
            player: load_sprite(&settings.player_image).await?,
            beneficial: load_sprite(&settings.beneficial_image).await?,
            hazard: load_sprite(&settings.hazard_image).await?,
        })
    }

    pub fn obstacle(&self, kind: ObstacleKind) -> &Texture2D {
        match kind {
            ObstacleKind::Beneficial => &self.beneficial,
            ObstacleKind::Hazard => &self.hazard,
        }
    }

    /// Source aspect ratios, which the simulation sizes sprites from
    pub fn aspects(&self) -> SpriteAspects {
        SpriteAspects::new(
            aspect_of(&self.player),
            aspect_of(&self.beneficial),
            aspect_of(&self.hazard),
        )
    }
}

fn aspect_of(texture: &Texture2D) -> f32 {
    texture.width() / texture.height()
}

async fn load_sprite(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path).await.map_err(|e| AssetError::Load {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    check_size(path, texture.width(), texture.height())?;

    texture.set_filter(FilterMode::Linear);
    log::info!(
        "Loaded {} ({}x{})",
        path,
        texture.width(),
        texture.height()
    );
    Ok(texture)
}

/// Reject images with no area; they have no usable aspect ratio
fn check_size(path: &str, width: f32, height: f32) -> Result<(), AssetError> {
    if width < 1.0 || height < 1.0 {
        return Err(AssetError::Empty {
            path: path.to_string(),
        });
    }
    Ok(())
}
