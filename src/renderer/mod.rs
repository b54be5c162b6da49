//! WebGPU rendering module
//!
//! A read-only projection of `GameState`: every element is a colored rect.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState, scene_to_ndc};
pub use vertex::{Palette, Vertex};
