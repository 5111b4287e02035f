//! Scripted simulations and record fixtures.
//!
//! # Example
//!
//! ```
//! use circles_test::fixture::SimulationBuilder;
//!
//! let sim = SimulationBuilder::new()
//!     .base(4096)
//!     .records_at(4096, &[[10, 10, 5, 255, 0, 0]])
//!     .frame(4096)
//!     .build();
//! assert_eq!(sim.heap().len(), 6);
//! ```

use circles_core::{Region, Simulation, ELEMENT_SIZE, RECORD_FIELDS};
use tracing::trace;

/// One scripted simulation step.
#[derive(Debug, Clone, Default)]
struct Step {
    offset: usize,
    writes: Vec<(usize, Vec<i32>)>,
}

/// A [`Simulation`] that replays a fixed script of offsets and heap writes.
///
/// Each call to `advance` applies the next step's writes, then returns its
/// offset. Once the script runs out, the last offset repeats with no writes.
/// Writes past the end of the heap grow it, as a growable linear memory would.
#[derive(Debug, Clone)]
pub struct ScriptedSimulation {
    base: usize,
    heap: Vec<i32>,
    steps: Vec<Step>,
    cursor: usize,
    calls: Vec<(u32, u32)>,
}

impl ScriptedSimulation {
    /// Heap contents.
    #[must_use]
    pub fn heap(&self) -> &[i32] {
        &self.heap
    }

    /// Address of the first heap byte.
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Surface sizes passed to `advance`, in call order.
    #[must_use]
    pub fn calls(&self) -> &[(u32, u32)] {
        &self.calls
    }

    /// Number of `advance` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    fn write(&mut self, address: usize, values: &[i32]) {
        let start = (address - self.base) / ELEMENT_SIZE;
        let end = start + values.len();
        if end > self.heap.len() {
            self.heap.resize(end, 0);
        }
        self.heap[start..end].copy_from_slice(values);
    }
}

impl Simulation for ScriptedSimulation {
    fn advance(&mut self, width: u32, height: u32) -> usize {
        self.calls.push((width, height));

        let step = match self.steps.get(self.cursor) {
            Some(step) => {
                self.cursor += 1;
                step.clone()
            }
            None => Step {
                offset: self.steps.last().map_or(self.base, |s| s.offset),
                writes: Vec::new(),
            },
        };

        for (address, values) in &step.writes {
            self.write(*address, values);
        }
        trace!(offset = step.offset, width, height, "scripted step");
        step.offset
    }

    fn region(&self) -> Region<'_> {
        Region::at(self.base, Region::from_elements(&self.heap).bytes())
    }
}

/// Builder for [`ScriptedSimulation`].
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    base: usize,
    seed: Vec<(usize, Vec<i32>)>,
    steps: Vec<Step>,
}

impl SimulationBuilder {
    /// Start an empty script at base address zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the first heap byte.
    #[must_use]
    pub const fn base(mut self, base: usize) -> Self {
        self.base = base;
        self
    }

    /// Seed records at a byte address before the first frame.
    #[must_use]
    pub fn records_at(mut self, address: usize, records: &[[i32; RECORD_FIELDS]]) -> Self {
        self.seed.push((address, flatten(records)));
        self
    }

    /// Seed raw elements at a byte address before the first frame.
    #[must_use]
    pub fn elements_at(mut self, address: usize, elements: &[i32]) -> Self {
        self.seed.push((address, elements.to_vec()));
        self
    }

    /// Add a frame that returns `offset` without touching the heap.
    #[must_use]
    pub fn frame(mut self, offset: usize) -> Self {
        self.steps.push(Step {
            offset,
            writes: Vec::new(),
        });
        self
    }

    /// Add a frame that writes `records` at `offset`, then returns it.
    #[must_use]
    pub fn frame_writing(mut self, offset: usize, records: &[[i32; RECORD_FIELDS]]) -> Self {
        self.steps.push(Step {
            offset,
            writes: vec![(offset, flatten(records))],
        });
        self
    }

    /// Build the simulation, applying seed writes.
    #[must_use]
    pub fn build(self) -> ScriptedSimulation {
        let mut sim = ScriptedSimulation {
            base: self.base,
            heap: Vec::new(),
            steps: self.steps,
            cursor: 0,
            calls: Vec::new(),
        };
        for (address, values) in &self.seed {
            sim.write(*address, values);
        }
        sim
    }
}

/// Flatten records into buffer order.
#[must_use]
pub fn flatten(records: &[[i32; RECORD_FIELDS]]) -> Vec<i32> {
    records.iter().flatten().copied().collect()
}

/// Deterministic record generators.
pub struct TestData;

impl TestData {
    /// `count` records on a diagonal, radius cycling 1..=10, color by index.
    #[must_use]
    pub fn diagonal(count: usize) -> Vec<[i32; RECORD_FIELDS]> {
        (0..count as i32)
            .map(|i| [i * 4, i * 4, 1 + i % 10, (i * 37) % 256, (i * 91) % 256, (i * 53) % 256])
            .collect()
    }

    /// `count` identical records: a red circle of radius 5 at (10, 10).
    #[must_use]
    pub fn uniform(count: usize) -> Vec<[i32; RECORD_FIELDS]> {
        vec![[10, 10, 5, 255, 0, 0]; count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_seeds_heap() {
        let sim = SimulationBuilder::new()
            .records_at(24, &[[1, 2, 3, 4, 5, 6]])
            .build();
        assert_eq!(sim.heap(), &[0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_script_replays_then_repeats_last() {
        let mut sim = SimulationBuilder::new().frame(0).frame(24).build();
        assert_eq!(sim.advance(10, 20), 0);
        assert_eq!(sim.advance(10, 20), 24);
        assert_eq!(sim.advance(30, 40), 24);
        assert_eq!(sim.calls(), &[(10, 20), (10, 20), (30, 40)]);
        assert_eq!(sim.call_count(), 3);
    }

    #[test]
    fn test_empty_script_returns_base() {
        let mut sim = SimulationBuilder::new().base(512).build();
        assert_eq!(sim.advance(1, 1), 512);
    }

    #[test]
    fn test_frame_writing_grows_heap() {
        let mut sim = SimulationBuilder::new()
            .base(64)
            .frame_writing(64 + 48, &[[9, 9, 9, 9, 9, 9]])
            .build();
        assert!(sim.heap().is_empty());
        assert_eq!(sim.advance(1, 1), 112);
        assert_eq!(sim.heap().len(), 18);
        assert_eq!(sim.heap()[12], 9);
    }

    #[test]
    fn test_region_carries_base() {
        let sim = SimulationBuilder::new()
            .base(1024)
            .elements_at(1024, &[1, 2])
            .build();
        let region = sim.region();
        assert_eq!(region.base(), 1024);
        assert_eq!(region.len(), 8);
        assert_eq!(sim.base(), 1024);
    }

    #[test]
    fn test_flatten_and_generators() {
        assert_eq!(flatten(&[[1, 2, 3, 4, 5, 6]]), vec![1, 2, 3, 4, 5, 6]);
        let diag = TestData::diagonal(3);
        assert_eq!(diag[2][0], 8);
        assert_eq!(diag[2][2], 3);
        assert_eq!(TestData::uniform(2).len(), 2);
    }
}
