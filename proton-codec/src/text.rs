#![forbid(unsafe_code)]

//! Text decoders used by [`ReadableBuffer::read_string`](crate::ReadableBuffer::read_string).

use crate::{BufferError, BufferResult};

/// Decodes a complete byte sequence into text.
pub trait TextDecoder {
    fn decode(&self, bytes: &[u8]) -> BufferResult<String>;
}

/// Strict UTF-8 (AMQP `str8`/`str32`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

impl TextDecoder for Utf8Decoder {
    fn decode(&self, bytes: &[u8]) -> BufferResult<String> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| BufferError::Decode(e.to_string()))
    }
}

/// 7-bit ASCII (AMQP `sym8`/`sym32`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiDecoder;

impl TextDecoder for AsciiDecoder {
    fn decode(&self, bytes: &[u8]) -> BufferResult<String> {
        match bytes.iter().position(|b| !b.is_ascii()) {
            Some(at) => Err(BufferError::Decode(format!("non-ASCII byte 0x{:02x} at offset {at}", bytes[at]))),
            None => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}
