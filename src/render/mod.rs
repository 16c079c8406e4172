//! Rendering module using wgpu (WebGPU backend).
//!
//! Draws the blob backdrop into a persistent trail texture and the egui
//! card overlay on top.

pub mod hud;
mod pipeline;

pub use hud::{ExportAction, HudOverlay, HudState};
pub use pipeline::{hsb_to_rgb, RenderState};
