// One-shot decompression (zlib / bzip2 / lzma):
//
// * round-trips against the reference encoders
// * corrupt, truncated and mismatched payloads
// * output limits
// * codec lookup by name and id

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bytelens_core::{
        compression::{
            codec_ids, create_decompressor_by_id, decompress, decompress_named, decompress_with_config,
            decompress_with_limit, resolve, CompressionCodec, CompressionError,
        },
        config::InterpConfig,
        types::{BytelensError, ErrorCategory, ErrorKind},
    };

    const ALL: [CompressionCodec; 3] = [CompressionCodec::Zlib, CompressionCodec::Bzip2, CompressionCodec::Lzma];

    fn sample() -> Vec<u8> {
        b"The quick brown fox jumps over the lazy dog. ".repeat(200)
    }

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut enc = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    fn bz2(data: &[u8]) -> Vec<u8> {
        let mut enc = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    fn xz(data: &[u8]) -> Vec<u8> {
        let mut enc = xz2::write::XzEncoder::new(Vec::new(), 6);
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    fn lzma_alone(data: &[u8]) -> Vec<u8> {
        let opts = xz2::stream::LzmaOptions::new_preset(6).unwrap();
        let stream = xz2::stream::Stream::new_lzma_encoder(&opts).unwrap();
        let mut enc = xz2::write::XzEncoder::new_stream(Vec::new(), stream);
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    fn compress(codec: CompressionCodec, data: &[u8]) -> Vec<u8> {
        match codec {
            CompressionCodec::Zlib => zlib(data),
            CompressionCodec::Bzip2 => bz2(data),
            CompressionCodec::Lzma => xz(data),
        }
    }

    fn assert_decompress_failure(err: &CompressionError, codec: CompressionCodec) {
        assert_eq!(err.kind(), ErrorKind::DecompressFailure, "{codec}: {err}");
        let prefix = format!("Failed to decompress data with {codec}: ");
        assert!(err.to_string().starts_with(&prefix), "{err}");
    }

    // --- Success paths ---

    #[test]
    fn round_trip_every_codec() {
        let data = sample();
        for codec in ALL {
            let packed = compress(codec, &data);
            assert!(packed.len() < data.len());
            assert_eq!(decompress(&packed, codec).unwrap(), data, "{codec}");
        }
    }

    #[test]
    fn lzma_accepts_legacy_container() {
        let data = sample();
        assert_eq!(decompress(&lzma_alone(&data), CompressionCodec::Lzma).unwrap(), data);
    }

    #[test]
    fn empty_payloads_compress_and_decompress() {
        for codec in ALL {
            assert_eq!(decompress(&compress(codec, b""), codec).unwrap(), b"", "{codec}");
        }
    }

    #[test]
    fn bzip2_empty_input_is_empty_output() {
        assert_eq!(decompress(&[], CompressionCodec::Bzip2).unwrap(), b"");
    }

    #[test]
    fn concatenated_streams_decode_as_one() {
        let mut packed = bz2(b"first,");
        packed.extend(bz2(b"second"));
        assert_eq!(decompress(&packed, CompressionCodec::Bzip2).unwrap(), b"first,second");

        let mut packed = xz(b"first,");
        packed.extend(xz(b"second"));
        assert_eq!(decompress(&packed, CompressionCodec::Lzma).unwrap(), b"first,second");
    }

    #[test]
    fn zlib_ignores_trailing_bytes() {
        let mut packed = zlib(b"payload");
        packed.extend_from_slice(b"\x00\x01trailer");
        assert_eq!(decompress(&packed, CompressionCodec::Zlib).unwrap(), b"payload");
    }

    // --- Failures ---

    #[test]
    fn corrupt_input_fails_for_every_codec() {
        for codec in ALL {
            let err = decompress(b"definitely not compressed", codec).unwrap_err();
            assert_decompress_failure(&err, codec);
        }
    }

    #[test]
    fn truncated_input_fails_for_every_codec() {
        let data = sample();
        for codec in ALL {
            let packed = compress(codec, &data);
            let err = decompress(&packed[..packed.len() / 2], codec).unwrap_err();
            assert_decompress_failure(&err, codec);
        }
    }

    #[test]
    fn empty_input_is_truncated_for_zlib_and_lzma() {
        for codec in [CompressionCodec::Zlib, CompressionCodec::Lzma] {
            let err = decompress(&[], codec).unwrap_err();
            assert_decompress_failure(&err, codec);
        }
    }

    #[test]
    fn mismatched_codec_fails() {
        let data = sample();
        for packed_with in ALL {
            let packed = compress(packed_with, &data);
            for codec in ALL.into_iter().filter(|c| *c != packed_with) {
                let err = decompress(&packed, codec).unwrap_err();
                assert_decompress_failure(&err, codec);
            }
        }
    }

    #[test]
    fn trailing_junk_after_a_stream_is_ignored() {
        for (codec, mut packed) in [
            (CompressionCodec::Bzip2, bz2(b"payload")),
            (CompressionCodec::Lzma, xz(b"payload")),
            (CompressionCodec::Lzma, lzma_alone(b"payload")),
        ] {
            packed.extend_from_slice(b"junk");
            assert_eq!(decompress(&packed, codec).unwrap(), b"payload", "{codec}");
        }
    }

    #[test]
    fn legacy_lzma_streams_concatenate() {
        let mut packed = lzma_alone(b"a,");
        packed.extend(lzma_alone(b"b"));
        assert_eq!(decompress(&packed, CompressionCodec::Lzma).unwrap(), b"a,b");

        let mut mixed = xz(b"x");
        mixed.extend(lzma_alone(b"y"));
        assert_eq!(decompress(&mixed, CompressionCodec::Lzma).unwrap(), b"xy");
    }

    #[test]
    fn truncated_second_stream_still_fails() {
        let data = sample();
        for codec in [CompressionCodec::Bzip2, CompressionCodec::Lzma] {
            let mut packed = compress(codec, b"first");
            let second = compress(codec, &data);
            packed.extend_from_slice(&second[..second.len() / 2]);

            let err = decompress(&packed, codec).unwrap_err();
            assert!(matches!(err, CompressionError::Truncated { .. }), "{codec}: {err}");
            assert!(err.to_string().ends_with("compressed data ended before the end-of-stream marker was reached"));
        }
    }

    #[test]
    fn output_limit_applies_across_streams() {
        let mut packed = bz2(&[1u8; 600]);
        packed.extend(bz2(&[2u8; 600]));
        let err = decompress_with_limit(&packed, CompressionCodec::Bzip2, Some(1000)).unwrap_err();
        assert!(matches!(err, CompressionError::OutputLimitExceeded { .. }), "{err}");
    }

    #[test]
    fn decompress_failure_category() {
        let err: BytelensError = decompress(b"xx", CompressionCodec::Zlib).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::DecompressFailure);
        assert_eq!(err.category(), ErrorCategory::OperationFailure);
    }

    // --- Output limit ---

    #[test]
    fn output_limit_stops_large_payloads() {
        let bomb = vec![0u8; 1 << 20];
        for codec in ALL {
            let packed = compress(codec, &bomb);
            let err = decompress_with_limit(&packed, codec, Some(1000)).unwrap_err();
            assert!(matches!(err, CompressionError::OutputLimitExceeded { limit: 1000, .. }), "{codec}: {err}");
            assert_decompress_failure(&err, codec);
        }
    }

    #[test]
    fn output_exactly_at_limit_is_allowed() {
        let data = vec![7u8; 1000];
        for codec in ALL {
            let packed = compress(codec, &data);
            assert_eq!(decompress_with_limit(&packed, codec, Some(1000)).unwrap(), data, "{codec}");
        }
    }

    #[test]
    fn config_limit_applies() {
        let packed = zlib(&[0u8; 4096]);
        let config = InterpConfig::default().with_max_output_size(100);
        let err = decompress_with_config(&packed, CompressionCodec::Zlib, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecompressFailure);
        let unlimited = decompress_with_config(&packed, CompressionCodec::Zlib, &InterpConfig::default()).unwrap();
        assert_eq!(unlimited.len(), 4096);
    }

    // --- Codec lookup ---

    #[test]
    fn names_and_aliases() {
        let packed = bz2(b"abc");
        assert_eq!(decompress_named(&packed, "bz2").unwrap(), b"abc");
        assert_eq!(decompress_named(&xz(b"abc"), "XZ").unwrap(), b"abc");
        for codec in ALL {
            assert_eq!(codec.name().parse::<CompressionCodec>().unwrap(), codec);
        }
    }

    #[test]
    fn unknown_codec_is_invalid_parameter() {
        let err = decompress_named(b"abc", "zstd").unwrap_err();
        assert!(matches!(err, CompressionError::UnknownCodec { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn registry_ids() {
        for codec in ALL {
            let info = resolve(codec as u16).unwrap();
            assert_eq!(info.codec, codec);
            assert_eq!(info.name, codec.name());
            assert_eq!(CompressionCodec::verify(codec as u16).unwrap(), codec);
        }
        assert_eq!(resolve(codec_ids::BZIP2).unwrap().name, "bzip2");
        assert!(matches!(resolve(0x0042), Err(CompressionError::UnsupportedCodec { codec_id: 0x0042 })));

        let err = create_decompressor_by_id(0x0042, None).err().unwrap();
        assert!(matches!(err, CompressionError::UnsupportedCodec { codec_id: 0x0042 }));
        assert_eq!(err.to_string(), "unsupported compression codec: 0x42");
    }

    #[test]
    fn decompressor_by_id_round_trips() {
        let data = sample();
        let mut d = create_decompressor_by_id(codec_ids::LZMA, None).unwrap();
        let mut out = Vec::new();
        d.decompress(&xz(&data), &mut out).unwrap();
        assert_eq!(out, data);
    }
}
