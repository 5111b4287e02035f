//! The simulation seam.
//!
//! The simulation owns the shared memory and decides where the circle buffer
//! lives each frame. The renderer only asks for an offset and borrows the
//! region long enough to draw.

use crate::view::Region;

/// An external state advancer that lays circle records out in shared memory.
pub trait Simulation {
    /// Advance one step for a surface of `width` x `height` pixels and
    /// return the byte address of this frame's circle buffer.
    fn advance(&mut self, width: u32, height: u32) -> usize;

    /// The memory the returned address points into.
    fn region(&self) -> Region<'_>;
}

impl<S: Simulation + ?Sized> Simulation for &mut S {
    fn advance(&mut self, width: u32, height: u32) -> usize {
        (**self).advance(width, height)
    }

    fn region(&self) -> Region<'_> {
        (**self).region()
    }
}

impl<S: Simulation + ?Sized> Simulation for Box<S> {
    fn advance(&mut self, width: u32, height: u32) -> usize {
        (**self).advance(width, height)
    }

    fn region(&self) -> Region<'_> {
        (**self).region()
    }
}

/// A simulation over an owned `i32` heap, stepped by a closure.
///
/// The closure receives the heap and the surface size and returns the byte
/// address of the circle buffer within the heap.
pub struct HeapSimulation<F> {
    heap: Vec<i32>,
    step: F,
}

impl<F> HeapSimulation<F>
where
    F: FnMut(&mut [i32], u32, u32) -> usize,
{
    /// Create a simulation over `heap`.
    pub const fn new(heap: Vec<i32>, step: F) -> Self {
        Self { heap, step }
    }

    /// The heap contents.
    #[must_use]
    pub fn heap(&self) -> &[i32] {
        &self.heap
    }

    /// Mutable access to the heap, e.g. to seed it.
    pub fn heap_mut(&mut self) -> &mut [i32] {
        &mut self.heap
    }
}

impl<F> std::fmt::Debug for HeapSimulation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeapSimulation")
            .field("heap_len", &self.heap.len())
            .finish_non_exhaustive()
    }
}

impl<F> Simulation for HeapSimulation<F>
where
    F: FnMut(&mut [i32], u32, u32) -> usize,
{
    fn advance(&mut self, width: u32, height: u32) -> usize {
        (self.step)(&mut self.heap, width, height)
    }

    fn region(&self) -> Region<'_> {
        Region::from_elements(&self.heap)
    }
}
