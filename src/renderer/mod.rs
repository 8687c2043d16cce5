//! Scene-graph rendering abstraction
//!
//! The simulation never holds drawing-surface handles. A `Scene`
//! implementation owns the visual nodes and mirrors entity state into them;
//! on web that scene graph is the DOM, which repaints on its own.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::sim::GameState;

/// A retained scene the game mirrors itself into
pub trait Scene {
    /// Rebuild the visual nodes for a fresh run
    fn reset(&mut self, state: &GameState);

    /// Mirror current entity positions and colors into the scene
    fn draw(&mut self, state: &GameState);
}
