//! WebGPU rendering module
//!
//! Consumes `GameState` read-only: `scene` flattens the world into
//! vertices, `pipeline` uploads and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{RESTART_BUTTON, build_scene};
