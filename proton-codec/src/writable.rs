#![forbid(unsafe_code)]

//! Write cursor used by the AMQP encoder. Mirror image of [`ReadableBuffer`].

use std::fmt;

use crate::cursor::CursorState;
use crate::storage::{DirectRegion, HeapArray, Storage};
use crate::{BufferError, BufferResult, ReadableBuffer};

/// Fixed-capacity write cursor over shared storage.
#[derive(Clone)]
pub struct WritableBuffer {
    storage: Storage,
    offset: usize,
    state: CursorState,
}

impl WritableBuffer {
    /// Zero-filled heap buffer of `capacity` bytes.
    pub fn allocate(capacity: usize) -> Self {
        Self { storage: Storage::Heap(HeapArray::new(capacity)), offset: 0, state: CursorState::new(capacity) }
    }

    /// Zero-filled direct buffer of `capacity` bytes.
    pub fn allocate_direct(capacity: usize) -> Self {
        Self { storage: Storage::Direct(DirectRegion::allocate(capacity)), offset: 0, state: CursorState::new(capacity) }
    }

    /// Write into `len` bytes of `array` starting at `offset`.
    pub fn wrap_array(array: HeapArray, offset: usize, len: usize) -> BufferResult<Self> {
        let total = array.len();
        if offset.checked_add(len).map_or(true, |end| end > total) {
            return Err(BufferError::out_of_bounds(offset, len, total));
        }
        Ok(Self { storage: Storage::Heap(array), offset, state: CursorState::new(len) })
    }

    pub fn wrap_direct(region: DirectRegion) -> Self {
        let len = region.len();
        Self { storage: Storage::Direct(region), offset: 0, state: CursorState::new(len) }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    pub(crate) fn storage_position(&self) -> usize {
        self.offset + self.state.position()
    }

    pub(crate) fn advance(&mut self, len: usize) -> BufferResult<usize> {
        self.state.advance(len)
    }

    pub fn capacity(&self) -> usize {
        self.state.capacity()
    }

    pub fn position(&self) -> usize {
        self.state.position()
    }

    pub fn set_position(&mut self, position: usize) -> BufferResult<&mut Self> {
        self.state.set_position(position)?;
        Ok(self)
    }

    pub fn limit(&self) -> usize {
        self.state.limit()
    }

    pub fn set_limit(&mut self, limit: usize) -> BufferResult<&mut Self> {
        self.state.set_limit(limit)?;
        Ok(self)
    }

    pub fn remaining(&self) -> usize {
        self.state.remaining()
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Storage is fixed; this only checks that `len` more bytes fit.
    pub fn ensure_remaining(&self, len: usize) -> BufferResult<()> {
        self.state.check_remaining(len)
    }

    pub fn put(&mut self, value: u8) -> BufferResult<&mut Self> {
        self.put_slice(&[value])
    }

    pub fn put_short(&mut self, value: i16) -> BufferResult<&mut Self> {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn put_int(&mut self, value: i32) -> BufferResult<&mut Self> {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn put_long(&mut self, value: i64) -> BufferResult<&mut Self> {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn put_float(&mut self, value: f32) -> BufferResult<&mut Self> {
        self.put_slice(&value.to_be_bytes())
    }

    pub fn put_double(&mut self, value: f64) -> BufferResult<&mut Self> {
        self.put_slice(&value.to_be_bytes())
    }

    /// Write all of `src` or nothing.
    pub fn put_slice(&mut self, src: &[u8]) -> BufferResult<&mut Self> {
        let at = self.state.advance(src.len())?;
        self.storage.copy_in(self.offset + at, src);
        Ok(self)
    }

    /// Drain the remaining bytes of `src` into this buffer.
    pub fn put_readable(&mut self, src: &mut ReadableBuffer) -> BufferResult<&mut Self> {
        src.get_into(self)?;
        Ok(self)
    }

    /// UTF-8 encode `value`.
    pub fn put_str(&mut self, value: &str) -> BufferResult<&mut Self> {
        self.put_slice(value.as_bytes())
    }

    pub fn has_array(&self) -> bool {
        self.storage.has_array()
    }

    pub fn array(&self) -> BufferResult<HeapArray> {
        match &self.storage {
            Storage::Heap(array) => Ok(array.clone()),
            Storage::Direct(_) => Err(BufferError::NoArray),
        }
    }

    pub fn array_offset(&self) -> BufferResult<usize> {
        if !self.has_array() {
            return Err(BufferError::NoArray);
        }
        Ok(self.offset)
    }

    /// Read cursor over the bytes written so far, sharing storage.
    pub fn to_readable(&self) -> ReadableBuffer {
        ReadableBuffer::from_parts(
            self.storage.clone(),
            self.offset,
            CursorState::with_limit(self.capacity(), self.position()),
        )
    }

    pub fn into_readable(self) -> ReadableBuffer {
        self.to_readable()
    }
}

impl fmt::Debug for WritableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WritableBuffer")
            .field("position", &self.position())
            .field("limit", &self.limit())
            .field("capacity", &self.capacity())
            .field("has_array", &self.has_array())
            .finish()
    }
}
