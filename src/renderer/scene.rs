//! Frame drawing
//!
//! Draw order: background, obstacles, player, status bar.

use macroquad::prelude::{
    Color, DrawTextureParams, Texture2D, WHITE, clear_background, draw_rectangle, draw_text,
    draw_texture_ex, measure_text, vec2,
};

use super::assets::Assets;
use crate::consts::STATUS_BAR_HEIGHT;
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

const FONT_SIZE: u16 = 28;
const TEXT_MARGIN: f32 = 12.0;
/// Tint for obstacles currently touching the player
const CONTACT_TINT: Color = Color::new(1.0, 0.85, 0.85, 1.0);

/// Draws the game from its state
pub struct SceneRenderer {
    background: Color,
    status_bar: Color,
    status_text: Color,
}

impl SceneRenderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            background: rgb(settings.background),
            status_bar: rgb(settings.status_bar),
            status_text: rgb(settings.status_text),
        }
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState, assets: &Assets, settings: &Settings, fps: u32) {
        clear_background(self.background);

        let area = state.play_area();
        for obstacle in &state.obstacles {
            let rect = obstacle.rect(&area, &state.aspects);
            let tint = if settings.highlight_contacts && state.scoreboard.is_colliding(obstacle.id) {
                CONTACT_TINT
            } else {
                WHITE
            };
            draw_sprite(assets.obstacle(obstacle.kind), &rect, tint);
        }

        draw_sprite(&assets.player, &state.player.rect, WHITE);

        let bar_top = (state.viewport.y - STATUS_BAR_HEIGHT) as f32;
        draw_rectangle(
            0.0,
            bar_top,
            state.viewport.x as f32,
            STATUS_BAR_HEIGHT as f32,
            self.status_bar,
        );

        let fps = settings.show_fps.then_some(fps);
        let text = status_line(state.score(), state.scoreboard.best, fps);
        let dims = measure_text(&text, None, FONT_SIZE, 1.0);
        let baseline = bar_top + (STATUS_BAR_HEIGHT as f32 + dims.offset_y) / 2.0;
        draw_text(&text, TEXT_MARGIN, baseline, FONT_SIZE as f32, self.status_text);
    }
}

/// Stretch a texture over a sim rect
fn draw_sprite(texture: &Texture2D, rect: &Rect, tint: Color) {
    draw_texture_ex(
        texture,
        rect.x as f32,
        rect.y as f32,
        tint,
        DrawTextureParams {
            dest_size: Some(vec2(rect.w as f32, rect.h as f32)),
            ..Default::default()
        },
    );
}

/// Status bar text
pub fn status_line(score: u64, best: u64, fps: Option<u32>) -> String {
    match fps {
        Some(fps) => format!("Score: {score}   Best: {best}   FPS: {fps}"),
        None => format!("Score: {score}   Best: {best}"),
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(120, 250, None), "Score: 120   Best: 250");
        assert_eq!(
            status_line(0, 0, Some(60)),
            "Score: 0   Best: 0   FPS: 60"
        );
    }

    #[test]
    fn test_rgb_is_opaque() {
        let color = rgb([255, 0, 0]);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.a, 1.0);
    }
}
