//! Testing harness for the circles frame pipeline.
//!
//! - [`fixture`]: scripted simulations and deterministic record data
//! - [`ManualHost`]: a frame host whose callbacks fire on demand
//! - [`Harness`]: an animation loop wired to both, with per-frame capture
//!   and assertions
//!
//! ```
//! use circles_core::RecordLayout;
//! use circles_test::{fixture::SimulationBuilder, Harness};
//!
//! let sim = SimulationBuilder::new()
//!     .records_at(0, &[[10, 10, 5, 255, 0, 0]])
//!     .build();
//! let mut harness = Harness::new(RecordLayout::for_circles(1), sim);
//! harness.start();
//! harness.run(3);
//! harness.assert_frames(3).assert_circle_count(1).assert_single_in_flight();
//! ```

pub mod fixture;
mod harness;
mod host;

pub use fixture::{ScriptedSimulation, SimulationBuilder, TestData};
pub use harness::Harness;
pub use host::ManualHost;
