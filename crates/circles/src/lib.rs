//! Circles: draws a simulation's packed circle buffer onto an HTML5 canvas.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { CircleRenderer } from './circles.js';
//!
//! async function main() {
//!     await init();
//!     // `Module._getCircles(width, height)` must already be loaded.
//!     const renderer = new CircleRenderer('canvas', 3000, 6);
//!     renderer.start();
//! }
//! ```
//!
//! A simulation whose `main` calls back into the page can use the
//! free-standing `render(dataLength, strideLength)` export instead.

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::use_self,
    clippy::needless_pass_by_value,
    unreachable_pub
)]

pub use circles_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{
    render, stop_render, BrowserFrameHost, Canvas2dSurface, CircleRenderer, ForeignSimulation,
};

pub use browser::{report_json, RendererOptions};
