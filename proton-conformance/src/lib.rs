#![forbid(unsafe_code)]

//! Shared helpers for the Proton conformance tests.

use anyhow::{ensure, Result};
use proton_codec::{ReadableBuffer, WritableBuffer};

/// Drain `buf` one byte at a time.
pub fn drain(buf: &mut ReadableBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(buf.remaining());
    while buf.has_remaining() {
        out.push(buf.get()?);
    }
    ensure!(buf.get().is_err(), "read past limit succeeded");
    Ok(out)
}

/// Build a readable cursor over `data`, heap or direct.
pub fn cursor(data: &[u8], direct: bool) -> ReadableBuffer {
    if direct {
        ReadableBuffer::allocate_direct(data)
    } else {
        ReadableBuffer::wrap(data.to_vec())
    }
}

/// Empty writable buffer of `capacity`, heap or direct.
pub fn sink(capacity: usize, direct: bool) -> WritableBuffer {
    if direct {
        WritableBuffer::allocate_direct(capacity)
    } else {
        WritableBuffer::allocate(capacity)
    }
}
