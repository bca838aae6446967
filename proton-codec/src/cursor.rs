#![forbid(unsafe_code)]

//! Position/limit/mark bookkeeping shared by readable and writable cursors.
//!
//! Invariant: `mark <= position <= limit <= capacity`. Operations that would
//! break it fail; only `set_limit` and `set_position` adjust dependent state
//! (clamping position, discarding a mark) the way standard buffers do.

use crate::{BufferError, BufferResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorState {
    position: usize,
    limit: usize,
    capacity: usize,
    mark: Option<usize>,
}

impl CursorState {
    pub(crate) fn new(capacity: usize) -> Self {
        Self { position: 0, limit: capacity, capacity, mark: None }
    }

    /// Readable view of `[0, limit)` over a window of `capacity`.
    pub(crate) fn with_limit(capacity: usize, limit: usize) -> Self {
        Self { position: 0, limit, capacity, mark: None }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) -> BufferResult<()> {
        if position > self.limit {
            return Err(BufferError::out_of_bounds(position, 0, self.limit));
        }
        if self.mark.is_some_and(|m| m > position) {
            self.mark = None;
        }
        self.position = position;
        Ok(())
    }

    pub(crate) fn set_limit(&mut self, limit: usize) -> BufferResult<()> {
        if limit > self.capacity {
            return Err(BufferError::out_of_bounds(limit, 0, self.capacity));
        }
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
        if self.mark.is_some_and(|m| m > self.position) {
            self.mark = None;
        }
        Ok(())
    }

    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    pub(crate) fn reset(&mut self) -> BufferResult<()> {
        let mark = self.mark.ok_or(BufferError::InvalidMark)?;
        self.position = mark;
        Ok(())
    }

    pub(crate) fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    pub(crate) fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// `limit = position`, then back to the mark (or 0).
    pub(crate) fn flip(&mut self) {
        self.limit = self.position;
        self.position = self.mark.unwrap_or(0);
    }

    /// Reserve `len` bytes at the current position and advance past them.
    /// Returns the position the access starts at.
    pub(crate) fn advance(&mut self, len: usize) -> BufferResult<usize> {
        self.check_remaining(len)?;
        let start = self.position;
        self.position += len;
        Ok(start)
    }

    pub(crate) fn check_remaining(&self, len: usize) -> BufferResult<()> {
        if len > self.remaining() {
            return Err(BufferError::out_of_bounds(self.position, len, self.limit));
        }
        Ok(())
    }

    /// Absolute single-byte access must fall inside `[position, limit)`.
    pub(crate) fn check_index(&self, index: usize) -> BufferResult<()> {
        if index < self.position || index >= self.limit {
            return Err(BufferError::out_of_bounds(index, 1, self.limit));
        }
        Ok(())
    }
}
