//! Browser runtime for the circles renderer.
//!
//! This module binds the core frame pipeline to a page: a Canvas 2D surface,
//! `requestAnimationFrame` scheduling, and a simulation living in another
//! WASM module.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod foreign;
#[cfg(target_arch = "wasm32")]
pub mod frame;

// Cross-platform modules
pub mod options;

#[cfg(target_arch = "wasm32")]
pub use app::{render, stop_render, CircleRenderer};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
#[cfg(target_arch = "wasm32")]
pub use foreign::ForeignSimulation;
#[cfg(target_arch = "wasm32")]
pub use frame::{BrowserFrameHost, FrameCallback};
pub use options::{report_json, RendererOptions};
