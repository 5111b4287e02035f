//! Borrowed, zero-copy views over the simulation's shared memory.
//!
//! A [`Region`] is a window onto the simulation's address space: a byte slice
//! plus the address its first byte lives at. A [`BufferView`] reinterprets
//! part of a region as `i32` elements grouped in stride-sized records.
//!
//! Neither type owns anything. The view borrows the region, and the region
//! borrows the simulation, so a view cannot outlive the frame that built it.
//!
//! The view does no validation of its own. Offsets and lengths that fall
//! outside the region panic at the slice boundary, which is the region's own
//! enforcement; a stride that does not match the simulation's layout yields
//! garbage records rather than an error.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use crate::record::{CircleRecord, ELEMENT_SIZE, RECORD_FIELDS};

/// A window of shared memory starting at address `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    base: usize,
    bytes: &'a [u8],
}

impl<'a> Region<'a> {
    /// A region covering the whole address space from address zero.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { base: 0, bytes }
    }

    /// A region whose first byte lives at address `base`.
    #[must_use]
    pub const fn at(base: usize, bytes: &'a [u8]) -> Self {
        Self { base, bytes }
    }

    /// A region over `i32` storage, starting at address zero.
    #[must_use]
    pub fn from_elements(elements: &'a [i32]) -> Self {
        Self::new(bytemuck::cast_slice(elements))
    }

    /// Address of the first byte.
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Extent of the window in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the window is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes of the window.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Read-only view of `len` elements starting at a byte offset in a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferView<'a> {
    elements: &'a [i32],
    stride: usize,
}

impl<'a> BufferView<'a> {
    /// Build a view of `element_count` elements at `byte_offset`.
    ///
    /// `byte_offset` is an address in the simulation's address space, so it
    /// is taken relative to the region's base.
    ///
    /// # Panics
    ///
    /// Panics if the requested span falls outside the region or the offset
    /// is not 4-byte aligned.
    #[must_use]
    pub fn new(region: Region<'a>, byte_offset: usize, element_count: usize, stride: usize) -> Self {
        debug_assert!(stride >= RECORD_FIELDS, "stride {stride} too short");
        debug_assert!(
            element_count % stride == 0,
            "{element_count} elements is not a whole number of records"
        );

        let start = byte_offset - region.base();
        let end = start + element_count * ELEMENT_SIZE;
        let elements = bytemuck::cast_slice(&region.bytes()[start..end]);

        Self { elements, stride }
    }

    /// Build a view directly over `i32` elements.
    #[must_use]
    pub fn from_elements(elements: &'a [i32], stride: usize) -> Self {
        debug_assert!(stride >= RECORD_FIELDS, "stride {stride} too short");
        Self { elements, stride }
    }

    /// Number of elements in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the view holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements per record.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of whole records in the view.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.elements.len() / self.stride
    }

    /// The underlying elements.
    #[must_use]
    pub const fn as_elements(&self) -> &'a [i32] {
        self.elements
    }

    /// The `index`-th stride-sized chunk, or `None` past the end.
    #[must_use]
    pub fn chunk(&self, index: usize) -> Option<&'a [i32]> {
        let start = index.checked_mul(self.stride)?;
        self.elements.get(start..start + self.stride)
    }

    /// The `index`-th record, or `None` past the end.
    #[must_use]
    pub fn record(&self, index: usize) -> Option<CircleRecord> {
        self.chunk(index).map(CircleRecord::from_chunk)
    }

    /// Stride-sized chunks in buffer order.
    pub fn chunks(&self) -> ChunksExact<'a, i32> {
        self.elements.chunks_exact(self.stride)
    }

    /// Records in buffer order.
    pub fn records(&self) -> Records<'a> {
        Records {
            chunks: self.chunks(),
        }
    }

    /// The records as a typed slice, when the stride is exactly one record.
    #[must_use]
    pub fn as_records(&self) -> Option<&'a [CircleRecord]> {
        (self.stride == RECORD_FIELDS).then(|| bytemuck::cast_slice(self.elements))
    }
}

impl<'a> IntoIterator for BufferView<'a> {
    type Item = CircleRecord;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Iterator over the records of a [`BufferView`].
#[derive(Debug, Clone)]
pub struct Records<'a> {
    chunks: ChunksExact<'a, i32>,
}

impl Iterator for Records<'_> {
    type Item = CircleRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(CircleRecord::from_chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}
