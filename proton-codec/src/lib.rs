#![forbid(unsafe_code)]

//! Proton codec buffers.
//!
//! The AMQP type codec reads and writes frames through cursors rather than
//! raw slices. A cursor is a window over shared backing storage with its own
//! `position`, `limit` and optional `mark`:
//!
//! * [`ReadableBuffer`] – decode side: big-endian numeric reads, bulk copies,
//!   text decoding, zero-copy `duplicate`/`slice`.
//! * [`WritableBuffer`] – encode side, the mirror image of the read contract.
//! * [`HeapArray`] / [`DirectRegion`] – array-addressable and opaque storage.
//!
//! Cursors sharing storage see each other's content writes immediately;
//! cursor state is never shared. None of this is a synchronization
//! primitive: sibling cursors used from different threads need external
//! coordination.

pub mod error;
pub mod storage;
pub mod text;
mod cursor;
mod readable;
mod writable;

pub use error::{BufferError, BufferResult};
pub use readable::ReadableBuffer;
pub use storage::{DirectRegion, HeapArray};
pub use text::{AsciiDecoder, TextDecoder, Utf8Decoder};
pub use writable::WritableBuffer;
