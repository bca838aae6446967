#![forbid(unsafe_code)]

//! Backing storage shared by buffer cursors.
//!
//! Two flavours exist. A [`HeapArray`] is array-addressable: cursors over it
//! report `has_array() == true` and hand out the array handle plus the offset
//! of their window. A [`DirectRegion`] models off-heap memory and is opaque;
//! its bytes are only reachable through cursor operations.
//!
//! Both are cheap-to-clone handles onto the same bytes. Content written
//! through one handle is visible through all of them (no copy-on-write).

use parking_lot::RwLock;
use std::{fmt, sync::Arc};

type Shared = Arc<RwLock<Box<[u8]>>>;

/// Array-addressable backing storage.
#[derive(Clone)]
pub struct HeapArray {
    bytes: Shared,
}

impl HeapArray {
    /// Zero-filled array of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self::from_vec(vec![0u8; len])
    }

    /// Take ownership of `data` without copying it.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { bytes: Arc::new(RwLock::new(data.into_boxed_slice())) }
    }

    pub fn len(&self) -> usize {
        self.bytes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when both handles refer to the same array.
    pub fn ptr_eq(&self, other: &HeapArray) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }

    /// Run `f` over the array contents.
    pub fn read<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes.read())
    }

    /// Run `f` over the mutable array contents.
    pub fn write<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        f(&mut self.bytes.write())
    }

    /// Snapshot of the whole array.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.read().to_vec()
    }
}

impl From<Vec<u8>> for HeapArray {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

impl fmt::Debug for HeapArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapArray").field("len", &self.len()).finish()
    }
}

/// Opaque (direct / off-heap) backing storage.
#[derive(Clone)]
pub struct DirectRegion {
    bytes: Shared,
}

impl DirectRegion {
    /// Zero-filled region of `len` bytes.
    pub fn allocate(len: usize) -> Self {
        Self { bytes: Arc::new(RwLock::new(vec![0u8; len].into_boxed_slice())) }
    }

    /// Region initialised with a copy of `data`.
    pub fn copy_from(data: &[u8]) -> Self {
        Self { bytes: Arc::new(RwLock::new(data.into())) }
    }

    pub fn len(&self) -> usize {
        self.bytes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ptr_eq(&self, other: &DirectRegion) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

impl fmt::Debug for DirectRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectRegion").field("len", &self.len()).finish()
    }
}

/// Tagged storage held by every cursor.
#[derive(Clone, Debug)]
pub(crate) enum Storage {
    Heap(HeapArray),
    Direct(DirectRegion),
}

impl Storage {
    fn shared(&self) -> &Shared {
        match self {
            Storage::Heap(a) => &a.bytes,
            Storage::Direct(r) => &r.bytes,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.shared().read().len()
    }

    pub(crate) fn has_array(&self) -> bool {
        matches!(self, Storage::Heap(_))
    }

    pub(crate) fn same_region(&self, other: &Storage) -> bool {
        Arc::ptr_eq(self.shared(), other.shared())
    }

    /// Copy `dst.len()` bytes starting at absolute storage index `at`.
    /// Callers validate bounds against their window first.
    pub(crate) fn copy_out(&self, at: usize, dst: &mut [u8]) {
        let bytes = self.shared().read();
        dst.copy_from_slice(&bytes[at..at + dst.len()]);
    }

    /// Copy `src` into storage starting at absolute index `at`.
    pub(crate) fn copy_in(&self, at: usize, src: &[u8]) {
        let mut bytes = self.shared().write();
        bytes[at..at + src.len()].copy_from_slice(src);
    }

    /// Copy `len` bytes from `from` to `to` inside the same region.
    pub(crate) fn copy_within(&self, from: usize, to: usize, len: usize) {
        self.shared().write().copy_within(from..from + len, to);
    }

    pub(crate) fn byte_at(&self, at: usize) -> u8 {
        self.shared().read()[at]
    }

    pub(crate) fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.shared().read())
    }
}
