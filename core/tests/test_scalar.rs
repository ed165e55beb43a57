// Fixed-width scalar decoding:
//
// * exact-length enforcement for every kind
// * endianness handling
// * known IEEE-754 values
// * round-trips against the std encoders (property tests)

#[cfg(test)]
mod tests {
    use bytelens_core::{
        constants::widths,
        scalar::{
            interpret, to_f32, to_f64, to_i16, to_i32, to_i64, to_u16, to_u32, to_u64, to_u8,
            Endianness, ScalarError, ScalarKind, ScalarValue,
        },
        types::ErrorKind,
    };
    use proptest::prelude::*;

    const BOTH: [Endianness; 2] = [Endianness::Little, Endianness::Big];

    // ## 1️⃣ Known values

    #[test]
    fn u8_extremes() {
        assert_eq!(to_u8(&[0xFF]).unwrap(), 255);
        assert_eq!(to_u8(&[0x00]).unwrap(), 0);
    }

    #[test]
    fn f32_one_little_endian() {
        assert_eq!(to_f32(&[0x00, 0x00, 0x80, 0x3f], Endianness::Little).unwrap(), 1.0);
        assert_eq!(to_f32(&[0x3f, 0x80, 0x00, 0x00], Endianness::Big).unwrap(), 1.0);
    }

    #[test]
    fn f64_known_values() {
        let pi = std::f64::consts::PI.to_be_bytes();
        assert_eq!(to_f64(&pi, Endianness::Big).unwrap(), std::f64::consts::PI);
        let nan = to_f64(&f64::NAN.to_le_bytes(), Endianness::Little).unwrap();
        assert!(nan.is_nan());
    }

    #[test]
    fn endianness_changes_integer_result() {
        let b = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(to_u64(&b, Endianness::Little).unwrap(), 0x0807060504030201);
        assert_eq!(to_u64(&b, Endianness::Big).unwrap(), 0x0102030405060708);
        assert_eq!(to_u32(&b[..4], Endianness::Big).unwrap(), 0x01020304);
        assert_eq!(to_u16(&b[..2], Endianness::Little).unwrap(), 0x0201);
    }

    #[test]
    fn signed_kinds_sign_extend() {
        assert_eq!(to_i64(&[0xFF; 8], Endianness::Little).unwrap(), -1);
        assert_eq!(to_i32(&[0xFE, 0xFF, 0xFF, 0xFF], Endianness::Little).unwrap(), -2);
        assert_eq!(to_i16(&[0x80, 0x00], Endianness::Big).unwrap(), i16::MIN);
    }

    #[test]
    fn host_flag_maps_to_endianness() {
        assert_eq!(Endianness::from_little(true), Endianness::Little);
        assert_eq!(Endianness::from_little(false), Endianness::Big);
    }

    // ## 2️⃣ Length enforcement

    #[test]
    fn every_fixed_kind_rejects_wrong_length() {
        let fixed: Vec<ScalarKind> = ScalarKind::ALL.into_iter().filter(|k| k.width().is_some()).collect();
        assert_eq!(fixed.len(), 9);

        for kind in fixed {
            let width = kind.width().unwrap();
            for bad in [0, width - 1, width + 1, 3] {
                if bad == width {
                    continue;
                }
                let data = vec![0u8; bad];
                let err = interpret(&data, kind, Endianness::Little).unwrap_err();
                match err {
                    ScalarError::SizeMismatch { kind: k, expected, got } => {
                        assert_eq!(k, kind);
                        assert_eq!(expected, width);
                        assert_eq!(got, bad);
                    }
                    other => panic!("{kind}: expected SizeMismatch, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn size_mismatch_message_and_kind() {
        let err = to_u32(&[0u8; 3], Endianness::Little).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.to_string(), "Failed to convert to u32: data size must be 4 bytes, got 3 bytes");

        let err = to_u8(&[]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to convert to u8: data size must be 1 byte, got 0 bytes");
    }

    #[test]
    fn widths_match_constants() {
        assert_eq!(ScalarKind::U64.width(), Some(widths::U64));
        assert_eq!(ScalarKind::Float32.width(), Some(widths::F32));
        assert_eq!(ScalarKind::Hex.width(), None);
        assert!(!ScalarKind::U8.uses_endianness());
        assert!(ScalarKind::I16.uses_endianness());
        assert!(!ScalarKind::String.uses_endianness());
    }

    // ## 3️⃣ Dispatch and names

    #[test]
    fn interpret_dispatches_by_kind() {
        assert_eq!(interpret(&[0x00, 0xFF, 0x10], ScalarKind::Hex, Endianness::Little).unwrap(),
                   ScalarValue::Hex("00ff10".into()));
        assert_eq!(interpret(b"hi", ScalarKind::String, Endianness::Big).unwrap(),
                   ScalarValue::Text("hi".into()));
        assert_eq!(interpret(&[0xFF, 0xFF], ScalarKind::I16, Endianness::Little).unwrap(),
                   ScalarValue::Signed(-1));
        assert_eq!(interpret(&[0x00, 0x00, 0x80, 0x3f], ScalarKind::Float32, Endianness::Little).unwrap(),
                   ScalarValue::Float(1.0));
        assert_eq!(interpret(&[7], ScalarKind::U8, Endianness::Big).unwrap(),
                   ScalarValue::Unsigned(7));
    }

    #[test]
    fn kind_names_and_aliases_parse() {
        for kind in ScalarKind::ALL {
            assert_eq!(kind.name().parse::<ScalarKind>().unwrap(), kind);
        }
        assert_eq!("unsigned_long".parse::<ScalarKind>().unwrap(), ScalarKind::U64);
        assert_eq!("Double".parse::<ScalarKind>().unwrap(), ScalarKind::Float64);
        assert_eq!("unsigned short".parse::<ScalarKind>().unwrap(), ScalarKind::U16);
        let err = "u128".parse::<ScalarKind>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    // ## 4️⃣ Round-trips

    fn endian() -> impl Strategy<Value = Endianness> {
        prop_oneof![Just(Endianness::Little), Just(Endianness::Big)]
    }

    proptest! {
        #[test]
        fn u64_round_trip(b in any::<[u8; 8]>(), e in endian()) {
            let v = to_u64(&b, e).unwrap();
            let packed = match e { Endianness::Little => v.to_le_bytes(), Endianness::Big => v.to_be_bytes() };
            prop_assert_eq!(packed, b);
        }

        #[test]
        fn i64_round_trip(b in any::<[u8; 8]>(), e in endian()) {
            let v = to_i64(&b, e).unwrap();
            let packed = match e { Endianness::Little => v.to_le_bytes(), Endianness::Big => v.to_be_bytes() };
            prop_assert_eq!(packed, b);
        }

        #[test]
        fn u32_i32_round_trip(b in any::<[u8; 4]>(), e in endian()) {
            let u = to_u32(&b, e).unwrap();
            let i = to_i32(&b, e).unwrap();
            let (pu, pi) = match e {
                Endianness::Little => (u.to_le_bytes(), i.to_le_bytes()),
                Endianness::Big => (u.to_be_bytes(), i.to_be_bytes()),
            };
            prop_assert_eq!(pu, b);
            prop_assert_eq!(pi, b);
        }

        #[test]
        fn u16_i16_round_trip(b in any::<[u8; 2]>(), e in endian()) {
            let u = to_u16(&b, e).unwrap();
            let i = to_i16(&b, e).unwrap();
            let (pu, pi) = match e {
                Endianness::Little => (u.to_le_bytes(), i.to_le_bytes()),
                Endianness::Big => (u.to_be_bytes(), i.to_be_bytes()),
            };
            prop_assert_eq!(pu, b);
            prop_assert_eq!(pi, b);
        }

        #[test]
        fn float_bits_preserved(b in any::<[u8; 8]>()) {
            for e in BOTH {
                let d = to_f64(&b, e).unwrap();
                let f = to_f32(&b[..4], e).unwrap();
                let (pd, pf) = match e {
                    Endianness::Little => (d.to_bits().to_le_bytes(), f.to_bits().to_le_bytes()),
                    Endianness::Big => (d.to_bits().to_be_bytes(), f.to_bits().to_be_bytes()),
                };
                prop_assert_eq!(pd, b);
                prop_assert_eq!(&pf[..], &b[..4]);
            }
        }
    }
}
