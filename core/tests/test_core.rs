#[cfg(test)]
mod tests {
    use dpipe_core::core::{
        compress_stream, decompress_stream, ApiConfig, CompressParams, DecompressParams,
    };
    use dpipe_core::io::{InputSource, OutputSink};
    use dpipe_core::types::StreamError;
    use rand::{RngCore, SeedableRng};

    // --- Validation tests ---

    #[test]
    fn compress_params_accept_levels_in_range() {
        assert!(CompressParams { level: None }.validate().is_ok());
        assert!(CompressParams { level: Some(0) }.validate().is_ok());
        assert!(CompressParams { level: Some(9) }.validate().is_ok());
    }

    #[test]
    fn compress_params_reject_levels_out_of_range() {
        assert!(CompressParams { level: Some(12) }.validate().is_err());
        assert!(CompressParams { level: Some(-1) }.validate().is_err());
    }

    #[test]
    fn compress_stream_rejects_invalid_level() {
        let result = compress_stream(
            InputSource::Memory(vec![1, 2, 3]),
            OutputSink::Memory,
            CompressParams { level: Some(42) },
            ApiConfig::with_buf_enabled(),
        );
        assert!(matches!(result, Err(StreamError::Validation(_))));
    }

    // --- Compress/decompress pipeline tests ---

    #[test]
    fn compress_and_decompress_roundtrip_minimal() {
        let plaintext = vec![0x55u8; 1024];
        let config = ApiConfig::with_buf_enabled();

        let snapshot_enc = compress_stream(
            InputSource::Memory(plaintext.clone()),
            OutputSink::Memory,
            CompressParams::default(),
            config.clone(),
        )
        .expect("compression should succeed");

        assert_eq!(snapshot_enc.bytes_read, plaintext.len() as u64);
        let packed = snapshot_enc.output.clone().unwrap();
        assert_eq!(packed.len() as u64, snapshot_enc.bytes_written);

        let snapshot_dec = decompress_stream(
            InputSource::Memory(packed),
            OutputSink::Memory,
            DecompressParams,
            config,
        )
        .expect("decompression should succeed");

        assert_eq!(snapshot_dec.output.unwrap(), plaintext);
        assert_eq!(snapshot_enc.checksum, snapshot_dec.checksum);
    }

    #[test]
    fn incompressible_payload_roundtrips() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut plaintext = vec![0u8; 200_000];
        rng.fill_bytes(&mut plaintext);

        let snapshot_enc = compress_stream(
            InputSource::Memory(plaintext.clone()),
            OutputSink::Memory,
            CompressParams { level: Some(9) },
            ApiConfig::with_buf_enabled(),
        )
        .expect("compression should succeed");

        // Random data does not shrink, but the loop must still drain
        // every inner-loop pass without dropping or duplicating bytes.
        let packed = snapshot_enc.output.clone().unwrap();
        assert!(packed.len() > plaintext.len() / 2);

        let snapshot_dec = decompress_stream(
            InputSource::Memory(packed),
            OutputSink::Memory,
            DecompressParams,
            ApiConfig::with_buf_enabled(),
        )
        .expect("decompression should succeed");

        assert_eq!(snapshot_dec.output.unwrap(), plaintext);
    }

    #[test]
    fn missing_source_file_is_an_open_failure() {
        let result = compress_stream(
            InputSource::File("/definitely/not/there/missingfile.txt".into()),
            OutputSink::Memory,
            CompressParams::default(),
            ApiConfig::default(),
        );
        assert!(matches!(result, Err(StreamError::Io(_))));
    }

    #[test]
    fn decompress_of_corrupt_memory_fails() {
        let result = decompress_stream(
            InputSource::Memory(vec![0xAB; 512]),
            OutputSink::Memory,
            DecompressParams,
            ApiConfig::default(),
        );
        assert!(matches!(result, Err(StreamError::Compression(_))));
    }

    // --- Snapshot tests ---

    #[test]
    fn snapshot_reports_ratio_and_serializes() {
        let plaintext = vec![0u8; 100_000]; // highly compressible
        let snapshot = compress_stream(
            InputSource::Memory(plaintext),
            OutputSink::Memory,
            CompressParams::default(),
            ApiConfig::with_buf_enabled(),
        )
        .expect("compression should succeed");

        assert!(snapshot.compression_ratio > 0.0);
        assert!(snapshot.compression_ratio < 0.1);
        assert_eq!(snapshot.chunks_in, 7); // ceil(100_000 / 16384)
        assert_eq!(snapshot.output_bytes(), snapshot.bytes_written);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("bytes_read"));
        assert!(json.contains("compression_ratio"));
    }

    #[test]
    fn empty_input_snapshot_has_zero_ratio() {
        let snapshot = compress_stream(
            InputSource::Memory(Vec::new()),
            OutputSink::Memory,
            CompressParams::default(),
            ApiConfig::with_buf_enabled(),
        )
        .expect("compression should succeed");

        assert_eq!(snapshot.bytes_read, 0);
        assert_eq!(snapshot.compression_ratio, 0.0);
        assert!(snapshot.bytes_written > 0);
    }
}
