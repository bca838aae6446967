#![forbid(unsafe_code)]

//! Read cursor used by the AMQP decoder.

use bytes::Bytes;
use std::fmt;
use tracing::trace;

use crate::cursor::CursorState;
use crate::storage::{DirectRegion, HeapArray, Storage};
use crate::text::{TextDecoder, Utf8Decoder};
use crate::{BufferError, BufferResult, WritableBuffer};

/// Positionable read cursor over a window of shared storage.
///
/// All indices are relative to the cursor's own window, which starts at
/// [`array_offset`](Self::array_offset) within the backing storage.
/// Multi-byte numeric reads are big-endian.
#[derive(Clone)]
pub struct ReadableBuffer {
    storage: Storage,
    offset: usize,
    state: CursorState,
}

impl ReadableBuffer {
    /// Wrap `data` without copying; the cursor covers the whole vector.
    pub fn wrap(data: Vec<u8>) -> Self {
        let array = HeapArray::from_vec(data);
        let len = array.len();
        Self::from_parts(Storage::Heap(array), 0, CursorState::new(len))
    }

    /// Wrap `len` bytes of `array` starting at `offset`.
    pub fn wrap_array(array: HeapArray, offset: usize, len: usize) -> BufferResult<Self> {
        Self::wrap_storage(Storage::Heap(array), offset, len)
    }

    /// Wrap the whole of an opaque region.
    pub fn wrap_direct(region: DirectRegion) -> Self {
        let len = region.len();
        Self::from_parts(Storage::Direct(region), 0, CursorState::new(len))
    }

    /// New opaque region holding a copy of `data`.
    pub fn allocate_direct(data: &[u8]) -> Self {
        Self::wrap_direct(DirectRegion::copy_from(data))
    }

    fn wrap_storage(storage: Storage, offset: usize, len: usize) -> BufferResult<Self> {
        let total = storage.len();
        if offset.checked_add(len).map_or(true, |end| end > total) {
            return Err(BufferError::out_of_bounds(offset, len, total));
        }
        Ok(Self::from_parts(storage, offset, CursorState::new(len)))
    }

    pub(crate) fn from_parts(storage: Storage, offset: usize, state: CursorState) -> Self {
        Self { storage, offset, state }
    }

    /// Absolute storage index of the current position.
    pub(crate) fn storage_position(&self) -> usize {
        self.offset + self.state.position()
    }

    pub fn capacity(&self) -> usize {
        self.state.capacity()
    }

    pub fn position(&self) -> usize {
        self.state.position()
    }

    /// Move the cursor; fails outside `[0, limit]`. A mark past the new position is dropped.
    pub fn set_position(&mut self, position: usize) -> BufferResult<&mut Self> {
        self.state.set_position(position)?;
        Ok(self)
    }

    pub fn limit(&self) -> usize {
        self.state.limit()
    }

    /// Set the exclusive read bound; fails outside `[0, capacity]`.
    /// Position is clamped down to the new limit when it lies beyond it.
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

    pub fn mark(&mut self) -> &mut Self {
        self.state.mark();
        self
    }

    pub fn reset(&mut self) -> BufferResult<&mut Self> {
        self.state.reset()?;
        Ok(self)
    }

    pub fn rewind(&mut self) -> &mut Self {
        self.state.rewind();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.state.clear();
        self
    }

    pub fn flip(&mut self) -> &mut Self {
        self.state.flip();
        self
    }

    /// Revert to the live buffer. Always `self` for a wrapping cursor.
    pub fn reclaim_read(&mut self) -> &mut Self {
        self
    }

    pub fn get(&mut self) -> BufferResult<u8> {
        let at = self.state.advance(1)?;
        Ok(self.storage.byte_at(self.offset + at))
    }

    /// Byte at window index `index` without moving the cursor.
    /// `index` must lie in `[position, limit)`.
    pub fn get_at(&self, index: usize) -> BufferResult<u8> {
        self.state.check_index(index)?;
        Ok(self.storage.byte_at(self.offset + index))
    }

    fn read_array<const N: usize>(&mut self) -> BufferResult<[u8; N]> {
        let at = self.state.advance(N)?;
        let mut out = [0u8; N];
        self.storage.copy_out(self.offset + at, &mut out);
        Ok(out)
    }

    pub fn get_short(&mut self) -> BufferResult<i16> {
        self.read_array().map(i16::from_be_bytes)
    }

    pub fn get_int(&mut self) -> BufferResult<i32> {
        self.read_array().map(i32::from_be_bytes)
    }

    pub fn get_long(&mut self) -> BufferResult<i64> {
        self.read_array().map(i64::from_be_bytes)
    }

    pub fn get_float(&mut self) -> BufferResult<f32> {
        self.read_array().map(f32::from_be_bytes)
    }

    pub fn get_double(&mut self) -> BufferResult<f64> {
        self.read_array().map(f64::from_be_bytes)
    }

    /// Fill `dst` completely or fail without moving the cursor.
    pub fn get_slice(&mut self, dst: &mut [u8]) -> BufferResult<&mut Self> {
        let at = self.state.advance(dst.len())?;
        self.storage.copy_out(self.offset + at, dst);
        Ok(self)
    }

    /// Copy `length` bytes into `dst[offset..offset + length]`.
    pub fn get_slice_range(&mut self, dst: &mut [u8], offset: usize, length: usize) -> BufferResult<&mut Self> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= dst.len())
            .ok_or_else(|| BufferError::out_of_bounds(offset, length, dst.len()))?;
        self.get_slice(&mut dst[offset..end])
    }

    /// Copy everything remaining into `dst`, advancing both cursors.
    ///
    /// Fails without touching either side when `dst` has less room than
    /// `self.remaining()`. Works for every heap/direct combination; when
    /// neither side is array-backed the bytes go through a staging copy.
    pub fn get_into(&mut self, dst: &mut WritableBuffer) -> BufferResult<&mut Self> {
        let len = self.remaining();
        dst.ensure_remaining(len)?;
        let from = self.storage_position();
        let to = dst.storage_position();

        match (&self.storage, dst.storage()) {
            (src, target) if src.same_region(target) => src.copy_within(from, to, len),
            (Storage::Heap(src), target) => src.read(|bytes| target.copy_in(to, &bytes[from..from + len])),
            (src, Storage::Heap(target)) => target.write(|bytes| src.copy_out(from, &mut bytes[to..to + len])),
            (src, target) => {
                trace!(len, "direct to direct copy through staging buffer");
                let mut staging = vec![0u8; len];
                src.copy_out(from, &mut staging);
                target.copy_in(to, &staging);
            }
        }

        self.state.advance(len)?;
        dst.advance(len)?;
        Ok(self)
    }

    pub fn has_array(&self) -> bool {
        self.storage.has_array()
    }

    /// Backing array handle. Fails with [`BufferError::NoArray`] for direct storage.
    pub fn array(&self) -> BufferResult<HeapArray> {
        match &self.storage {
            Storage::Heap(array) => Ok(array.clone()),
            Storage::Direct(_) => Err(BufferError::NoArray),
        }
    }

    /// Offset of this cursor's window within [`array`](Self::array).
    pub fn array_offset(&self) -> BufferResult<usize> {
        if !self.has_array() {
            return Err(BufferError::NoArray);
        }
        Ok(self.offset)
    }

    /// Same storage and cursor state; later moves are independent.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// New cursor over exactly `[position, limit)`, re-based to position 0.
    pub fn slice(&self) -> Self {
        let len = self.remaining();
        Self::from_parts(self.storage.clone(), self.storage_position(), CursorState::new(len))
    }

    /// Snapshot of the full window `[0, capacity)` for interop with `bytes` consumers.
    pub fn byte_buffer(&self) -> Bytes {
        let mut out = vec![0u8; self.capacity()];
        self.storage.copy_out(self.offset, &mut out);
        Bytes::from(out)
    }

    /// Decode `[position, limit)` as UTF-8 and move to the limit.
    pub fn read_utf8(&mut self) -> BufferResult<String> {
        self.read_string(&Utf8Decoder)
    }

    /// Decode `[position, limit)` with `decoder`. The cursor only moves on success.
    pub fn read_string<D: TextDecoder + ?Sized>(&mut self, decoder: &D) -> BufferResult<String> {
        let from = self.storage_position();
        let len = self.remaining();
        let text = self.storage.with_bytes(|bytes| decoder.decode(&bytes[from..from + len]))?;
        self.state.advance(len)?;
        Ok(text)
    }

    fn remaining_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.remaining()];
        self.storage.copy_out(self.storage_position(), &mut out);
        out
    }
}

/// Two cursors are equal when their remaining bytes are equal.
impl PartialEq for ReadableBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining() && self.remaining_bytes() == other.remaining_bytes()
    }
}

impl Eq for ReadableBuffer {}

impl fmt::Debug for ReadableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadableBuffer")
            .field("position", &self.position())
            .field("limit", &self.limit())
            .field("capacity", &self.capacity())
            .field("has_array", &self.has_array())
            .finish()
    }
}
