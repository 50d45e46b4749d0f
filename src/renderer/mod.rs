//! macroquad rendering module
//!
//! Sprites are drawn as stretched textures at the rects the simulation
//! computes; the renderer never decides sizes itself.

pub mod assets;
pub mod scene;

pub use assets::Assets;
pub use scene::SceneRenderer;
