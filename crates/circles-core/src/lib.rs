//! Core types and frame pipeline for the circles renderer.
//!
//! An external simulation lays circles out as fixed-stride `i32` records in
//! memory it owns. Each display frame, this crate:
//!
//! 1. asks the [`Simulation`] where this frame's buffer lives,
//! 2. borrows it as a [`BufferView`] (no copy, no per-field validation),
//! 3. clears the [`Surface`] and fills one circle per record, in order,
//! 4. re-arms a single next-frame callback through a [`FrameHost`].
//!
//! Steps 1-3 are [`FrameDriver::render_frame`]; step 4 is
//! [`AnimationLoop::on_frame`].
//!
//! ```
//! use circles_core::{FrameDriver, HeapSimulation, RecordLayout, RecordingSurface};
//!
//! let heap = vec![10, 10, 5, 255, 0, 0, 20, 20, 3, 0, 255, 0];
//! let sim = HeapSimulation::new(heap, |_: &mut [i32], _, _| 0);
//! let layout = RecordLayout::new(12, 6).expect("whole records");
//! let mut driver = FrameDriver::new(layout, sim, RecordingSurface::new(100, 100));
//!
//! assert_eq!(driver.render_frame().circles, 2);
//! ```

mod animation;
mod canvas;
mod color;
mod config;
pub mod draw;
mod driver;
mod error;
mod raster;
mod record;
mod simulation;
mod surface;
mod view;

pub use animation::{AnimationLoop, FrameHost};
pub use canvas::{circles_in, FilledCircle, RecordingSurface};
pub use color::Color;
pub use config::{RecordLayout, RenderConfig, DEFAULT_CIRCLES, DEFAULT_STRIDE};
pub use draw::DrawCommand;
pub use driver::{draw_record, FrameDriver, FrameReport};
pub use error::{ConfigError, LoopError};
pub use raster::PixelSurface;
pub use record::{CircleRecord, ELEMENT_SIZE, RECORD_FIELDS};
pub use simulation::{HeapSimulation, Simulation};
pub use surface::Surface;
pub use view::{BufferView, Records, Region};
