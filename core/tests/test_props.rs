use proptest::prelude::*;

use dpipe_core::core::{
    compress_stream, decompress_stream, ApiConfig, CompressParams, DecompressParams,
};
use dpipe_core::io::{InputSource, OutputSink};

proptest! {
    // Round-trip law: decode(encode(B)) == B for arbitrary byte vectors,
    // including empty ones.
    #[test]
    fn roundtrip_preserves_bytes(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
        let snapshot_enc = compress_stream(
            InputSource::Memory(data.clone()),
            OutputSink::Memory,
            CompressParams::default(),
            ApiConfig::with_buf_enabled(),
        )
        .unwrap();
        let packed = snapshot_enc.output.unwrap();
        prop_assert!(!packed.is_empty());

        let snapshot_dec = decompress_stream(
            InputSource::Memory(packed),
            OutputSink::Memory,
            DecompressParams,
            ApiConfig::with_buf_enabled(),
        )
        .unwrap();
        prop_assert_eq!(snapshot_dec.output.unwrap(), data);
    }

    // Total output length always equals the sum of per-iteration writes.
    #[test]
    fn byte_accounting_is_exact(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
        let snapshot = compress_stream(
            InputSource::Memory(data),
            OutputSink::Memory,
            CompressParams::default(),
            ApiConfig::with_buf_enabled(),
        )
        .unwrap();
        prop_assert_eq!(snapshot.output.unwrap().len() as u64, snapshot.bytes_written);
    }
}
