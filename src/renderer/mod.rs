//! WebGPU rendering module
//!
//! Turns each tick's `Frame` snapshot into flat-colored triangles.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_vertices;
pub use vertex::Vertex;
