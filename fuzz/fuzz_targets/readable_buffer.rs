#![no_main]

use libfuzzer_sys::fuzz_target;
use proton_codec::{ReadableBuffer, WritableBuffer};

// Drive a cursor with an op stream taken from the input itself. Every
// operation either succeeds or returns an error; none may panic, and the
// position never passes the limit.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else { return };
    let mut buf = if selector & 1 == 0 {
        ReadableBuffer::wrap(rest.to_vec())
    } else {
        ReadableBuffer::allocate_direct(rest)
    };

    for &op in data {
        let arg = (op >> 3) as usize;
        let _ = match op & 0x07 {
            0 => buf.get().map(drop),
            1 => buf.get_long().map(drop),
            2 => buf.set_position(arg).map(drop),
            3 => buf.set_limit(arg).map(drop),
            4 => {
                buf.mark();
                buf.reset().map(drop)
            }
            5 => {
                let mut sink = WritableBuffer::allocate(arg);
                let mut dup = buf.duplicate();
                let copied = dup.get_into(&mut sink).map(drop);
                copied
            }
            6 => {
                let mut slice = buf.slice();
                let text = slice.read_utf8().map(drop);
                text
            }
            _ => {
                buf.flip();
                Ok(())
            }
        };
        assert!(buf.position() <= buf.limit());
        assert!(buf.limit() <= buf.capacity());
    }
});
