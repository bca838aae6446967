use proton_codec::{
    AsciiDecoder, BufferError, DirectRegion, HeapArray, ReadableBuffer, Utf8Decoder, WritableBuffer,
};

const DATA: [u8; 5] = [0, 1, 2, 3, 4];

fn wrapped() -> ReadableBuffer {
    ReadableBuffer::wrap(DATA.to_vec())
}

fn drain(buf: &mut ReadableBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    while buf.has_remaining() {
        out.push(buf.get().unwrap());
    }
    out
}

#[test]
fn wrap_reports_capacity_and_reclaims_itself() {
    let mut buf = ReadableBuffer::wrap(vec![0u8; 100]);
    assert_eq!(buf.capacity(), 100);
    assert_eq!(buf.limit(), 100);
    let before = buf.position();
    assert_eq!(buf.reclaim_read().position(), before);
}

#[test]
fn array_access_identifies_wrapped_storage() {
    let array = HeapArray::new(100);
    let buf = ReadableBuffer::wrap_array(array.clone(), 0, 100).unwrap();
    assert!(buf.has_array());
    assert!(buf.array().unwrap().ptr_eq(&array));
    assert_eq!(buf.array_offset().unwrap(), 0);
}

#[test]
fn array_offset_tracks_window() {
    let array = HeapArray::from_vec((0..10).collect());
    let mut buf = ReadableBuffer::wrap_array(array.clone(), 5, 5).unwrap();
    assert!(buf.array().unwrap().ptr_eq(&array));
    assert_eq!(buf.array_offset().unwrap(), 5);
    assert_eq!(buf.get().unwrap(), 5);
    assert_eq!(buf.array_offset().unwrap(), 5);
}

#[test]
fn direct_storage_has_no_array() {
    let buf = ReadableBuffer::wrap_direct(DirectRegion::allocate(16));
    assert!(!buf.has_array());
    assert!(matches!(buf.array(), Err(BufferError::NoArray)));
}

#[test]
fn byte_buffer_covers_window() {
    let buf = wrapped();
    let view = buf.byte_buffer();
    assert_eq!(view.len(), DATA.len());
    assert_eq!(&view[..], &DATA);
}

#[test]
fn get_each_byte_then_fail() {
    let mut buf = wrapped();
    assert_eq!(drain(&mut buf), DATA);
    assert!(matches!(buf.get(), Err(BufferError::OutOfBounds { .. })));
}

#[test]
fn get_at_does_not_consume() {
    let buf = wrapped();
    for (i, b) in DATA.iter().enumerate() {
        assert_eq!(buf.get_at(i).unwrap(), *b);
    }
    assert!(buf.has_remaining());
    assert!(buf.get_at(DATA.len()).is_err());
}

#[test]
fn fixed_width_reads_exhaust_and_fail() {
    let mut buf = ReadableBuffer::wrap(vec![0, 1]);
    assert_eq!(buf.get_short().unwrap(), 1);
    assert!(!buf.has_remaining());
    assert!(buf.get_short().is_err());

    let mut buf = ReadableBuffer::wrap(vec![0, 0, 0, 1]);
    assert_eq!(buf.get_int().unwrap(), 1);
    assert!(buf.get_int().is_err());

    let mut buf = ReadableBuffer::wrap(vec![0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(buf.get_long().unwrap(), 1);
    assert!(buf.get_long().is_err());

    let mut buf = ReadableBuffer::wrap(vec![0; 4]);
    assert_eq!(buf.get_float().unwrap(), 0.0);
    assert!(buf.get_float().is_err());

    let mut buf = ReadableBuffer::wrap(vec![0; 8]);
    assert_eq!(buf.get_double().unwrap(), 0.0);
    assert!(buf.get_double().is_err());
}

#[test]
fn bulk_get_into_slice() {
    let mut buf = wrapped();
    let mut target = [0u8; 5];
    buf.get_slice(&mut target).unwrap();
    assert!(!buf.has_remaining());
    assert_eq!(target, DATA);
    assert!(buf.get_slice(&mut target).is_err());

    let mut buf = wrapped();
    let mut target = [0u8; 5];
    buf.get_slice_range(&mut target, 0, 5).unwrap();
    assert_eq!(target, DATA);
    assert!(buf.get_slice_range(&mut target, 0, 5).is_err());
}

fn copy_case(mut src: ReadableBuffer, mut dst: WritableBuffer) {
    src.get_into(&mut dst).unwrap();
    assert!(!src.has_remaining());
    assert_eq!(dst.position(), DATA.len());
    let mut written = dst.to_readable();
    assert_eq!(drain(&mut written), DATA);
}

#[test]
fn get_into_heap_to_heap() {
    copy_case(wrapped(), WritableBuffer::allocate(DATA.len()));
}

#[test]
fn get_into_heap_to_direct() {
    copy_case(wrapped(), WritableBuffer::allocate_direct(DATA.len()));
}

#[test]
fn get_into_direct_to_heap() {
    let dst = WritableBuffer::allocate(DATA.len());
    let array = dst.array().unwrap();
    copy_case(ReadableBuffer::allocate_direct(&DATA), dst);
    assert_eq!(array.to_vec(), DATA);
}

#[test]
fn get_into_direct_to_direct() {
    copy_case(ReadableBuffer::allocate_direct(&DATA), WritableBuffer::allocate_direct(DATA.len()));
}

#[test]
fn get_into_same_region() {
    let array = HeapArray::from_vec(vec![0, 1, 2, 3, 4, 0, 0, 0, 0, 0]);
    let mut src = ReadableBuffer::wrap_array(array.clone(), 0, 5).unwrap();
    let mut dst = WritableBuffer::wrap_array(array.clone(), 5, 5).unwrap();
    src.get_into(&mut dst).unwrap();
    assert_eq!(array.to_vec(), vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
}

#[test]
fn get_into_without_room_changes_nothing() {
    let mut src = wrapped();
    let mut dst = WritableBuffer::allocate(3);
    assert!(src.get_into(&mut dst).is_err());
    assert_eq!(src.position(), 0);
    assert_eq!(dst.position(), 0);
    assert_eq!(dst.array().unwrap().to_vec(), vec![0, 0, 0]);
}

#[test]
fn put_readable_mirrors_get_into() {
    let mut src = wrapped();
    src.get().unwrap();
    let mut dst = WritableBuffer::allocate(8);
    dst.put(9).unwrap().put_readable(&mut src).unwrap();
    assert_eq!(drain(&mut dst.to_readable()), vec![9, 1, 2, 3, 4]);
}

#[test]
fn duplicate_reads_independently() {
    let mut buf = wrapped();
    buf.get().unwrap();
    let mut dup = buf.duplicate();
    assert_eq!(drain(&mut dup), &DATA[1..]);
    assert!(!dup.has_remaining());
    assert_eq!(buf.position(), 1);
}

#[test]
fn slice_reads_remaining_only() {
    let mut buf = wrapped();
    buf.set_position(2).unwrap();
    let mut slice = buf.slice();
    assert_eq!(slice.position(), 0);
    assert_eq!(slice.limit(), 3);
    assert_eq!(drain(&mut slice), &DATA[2..]);
    assert_eq!(buf.position(), 2);
}

#[test]
fn limit_stops_reads_early() {
    let mut buf = ReadableBuffer::wrap(vec![1, 2]);
    assert_eq!(buf.limit(), 2);
    buf.set_limit(1).unwrap();
    assert_eq!(buf.limit(), 1);
    assert_eq!(buf.get().unwrap(), 1);
    assert!(!buf.has_remaining());
    assert!(buf.get().is_err());
    assert!(buf.set_limit(3).is_err());
}

#[test]
fn clear_restores_full_window() {
    let mut buf = wrapped();
    let mut target = [0u8; 5];
    buf.get_slice(&mut target).unwrap();
    assert!(buf.get_slice(&mut target).is_err());

    buf.set_limit(2).unwrap();
    buf.clear();
    assert_eq!(buf.remaining(), DATA.len());
    buf.get_slice(&mut target).unwrap();
    assert_eq!(target, DATA);
}

#[test]
fn rewind_replays() {
    let mut buf = wrapped();
    assert_eq!(drain(&mut buf), DATA);
    buf.rewind();
    assert!(buf.has_remaining());
    assert_eq!(drain(&mut buf), DATA);
}

#[test]
fn reset_returns_to_mark() {
    let mut buf = wrapped();
    buf.get().unwrap();
    buf.mark();
    assert_eq!(drain(&mut buf), &DATA[1..]);
    buf.reset().unwrap();
    assert_eq!(drain(&mut buf), &DATA[1..]);
}

#[test]
fn reset_without_mark_fails() {
    let mut buf = wrapped();
    assert!(matches!(buf.reset(), Err(BufferError::InvalidMark)));
    buf.mark();
    buf.rewind();
    assert!(matches!(buf.reset(), Err(BufferError::InvalidMark)));
}

#[test]
fn position_get_and_set() {
    let mut buf = wrapped();
    for i in 0..DATA.len() {
        assert_eq!(buf.position(), i);
        buf.get().unwrap();
        assert_eq!(buf.position(), i + 1);
    }
    buf.set_position(0).unwrap();
    assert_eq!(drain(&mut buf), DATA);
    assert!(buf.set_position(DATA.len() + 1).is_err());
}

#[test]
fn flip_rereads_from_mark() {
    let mut buf = wrapped();
    buf.mark();
    assert_eq!(drain(&mut buf), DATA);
    buf.flip();
    assert!(buf.has_remaining());
    assert_eq!(drain(&mut buf), DATA);
}

#[test]
fn read_utf8_consumes_all() {
    let text = "test-string-1";
    let mut buf = ReadableBuffer::wrap(text.as_bytes().to_vec());
    assert_eq!(buf.read_utf8().unwrap(), text);
    assert!(!buf.has_remaining());
}

#[test]
fn read_string_with_decoders() {
    let text = "test-string-1";
    let mut buf = ReadableBuffer::allocate_direct(text.as_bytes());
    assert_eq!(buf.read_string(&Utf8Decoder).unwrap(), text);
    assert!(!buf.has_remaining());

    let mut sym = ReadableBuffer::wrap("amqp:rejected:list".as_bytes().to_vec());
    assert_eq!(sym.read_string(&AsciiDecoder).unwrap(), "amqp:rejected:list");

    let mut bad = ReadableBuffer::wrap("ünïcode".as_bytes().to_vec());
    assert!(matches!(bad.read_string(&AsciiDecoder), Err(BufferError::Decode(_))));
    assert_eq!(bad.position(), 0);
}
