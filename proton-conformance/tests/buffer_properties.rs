use proptest::prelude::*;
use proton_codec::BufferError;
use proton_conformance::{cursor, drain, sink};

fn data_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

proptest! {
    #[test]
    fn sequential_reads_reproduce_input(data in data_strategy(), direct in any::<bool>()) {
        let mut buf = cursor(&data, direct);
        prop_assert_eq!(drain(&mut buf).unwrap(), data);
        let overrun = matches!(buf.get(), Err(BufferError::OutOfBounds { .. }));
        prop_assert!(overrun);
    }

    #[test]
    fn rewind_replays(data in data_strategy(), direct in any::<bool>()) {
        let mut buf = cursor(&data, direct);
        drain(&mut buf).unwrap();
        buf.rewind();
        prop_assert_eq!(buf.has_remaining(), !data.is_empty());
        prop_assert_eq!(drain(&mut buf).unwrap(), data);
    }

    #[test]
    fn mark_reset_replays_tail(data in data_strategy(), skip in 0usize..256) {
        let skip = skip.min(data.len());
        let mut buf = cursor(&data, false);
        buf.set_position(skip).unwrap();
        buf.mark();
        drain(&mut buf).unwrap();
        buf.reset().unwrap();
        prop_assert_eq!(drain(&mut buf).unwrap(), &data[skip..]);
    }

    #[test]
    fn clear_restores_capacity(data in data_strategy(), pos in 0usize..256, lim in 0usize..256) {
        let mut buf = cursor(&data, true);
        let lim = lim.min(data.len());
        buf.set_limit(lim).unwrap();
        buf.set_position(pos.min(lim)).unwrap();
        buf.clear();
        prop_assert_eq!(buf.remaining(), buf.capacity());
        prop_assert_eq!(buf.capacity(), data.len());
    }

    #[test]
    fn duplicate_and_slice_match_source(data in data_strategy(), skip in 0usize..256) {
        let skip = skip.min(data.len());
        let mut buf = cursor(&data, skip % 2 == 0);
        buf.set_position(skip).unwrap();

        let mut dup = buf.duplicate();
        let mut slice = buf.slice();
        prop_assert_eq!(drain(&mut dup).unwrap(), &data[skip..]);
        prop_assert_eq!(drain(&mut slice).unwrap(), &data[skip..]);
        prop_assert_eq!(buf.position(), skip);
    }

    #[test]
    fn limit_exhausts_early(data in prop::collection::vec(any::<u8>(), 1..256), n in 0usize..256) {
        let n = n.min(data.len());
        let mut buf = cursor(&data, false);
        buf.set_limit(n).unwrap();
        prop_assert_eq!(drain(&mut buf).unwrap(), &data[..n]);
        prop_assert!(!buf.has_remaining());
    }

    #[test]
    fn utf8_round_trip(text in ".*") {
        let mut buf = cursor(text.as_bytes(), false);
        prop_assert_eq!(buf.read_utf8().unwrap(), text);
        prop_assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn cross_storage_copy(data in data_strategy(), src_direct in any::<bool>(), dst_direct in any::<bool>()) {
        let mut src = cursor(&data, src_direct);
        let mut dst = sink(data.len(), dst_direct);
        src.get_into(&mut dst).unwrap();
        prop_assert!(!src.has_remaining());
        prop_assert_eq!(drain(&mut dst.to_readable()).unwrap(), data);
    }

    #[test]
    fn numeric_round_trip(a in any::<i16>(), b in any::<i32>(), c in any::<i64>(), d in any::<f64>()) {
        let mut out = sink(22, false);
        out.put_short(a).unwrap().put_int(b).unwrap().put_long(c).unwrap().put_double(d).unwrap();
        prop_assert!(!out.has_remaining());
        let mut rd = out.into_readable();
        prop_assert_eq!(rd.get_short().unwrap(), a);
        prop_assert_eq!(rd.get_int().unwrap(), b);
        prop_assert_eq!(rd.get_long().unwrap(), c);
        prop_assert_eq!(rd.get_double().unwrap().to_bits(), d.to_bits());
    }
}
