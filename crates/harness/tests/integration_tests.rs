//! SBFP harness integration tests

use sbfp::{decode, encode, EncodeConfig, Encoder, NonFinitePolicy, Sbfp};
use sbfp_harness::{
    check_special_tables, expected_add, expected_multiply, sample_round_trip, sweep_patterns,
    verify, HarnessError, REPRESENTATIVES,
};

mod sweep_tests {
    use super::*;

    #[test]
    fn test_sweep_covers_every_pattern() {
        let report = sweep_patterns();
        assert_eq!(report.total(), 65536);
        assert!(report.mismatches.is_empty(), "{:?}", &report.mismatches[..]);
    }

    #[test]
    fn test_sweep_counts() {
        let report = sweep_patterns();
        // 2 * 1023 NaN patterns, one per sign already canonical
        assert_eq!(report.canonical_nans, 2044);
        assert_eq!(report.normalized_zeros, 1);
        assert_eq!(report.exact, 65536 - 2044 - 1);
    }

    #[test]
    fn test_negative_nans_keep_sign_bit() {
        for bits in (0xFC01..=0xFFFF).step_by(97) {
            let back = encode(decode(Sbfp::from_bits(bits)));
            assert_eq!(back, Sbfp::NEG_NAN, "pattern {:#06x}", bits);
        }
        for bits in (0x7C01..=0x7FFF).step_by(97) {
            let back = encode(decode(Sbfp::from_bits(bits)));
            assert_eq!(back, Sbfp::NAN, "pattern {:#06x}", bits);
        }
    }
}

mod table_tests {
    use super::*;

    #[test]
    fn test_special_tables_match() {
        assert!(check_special_tables().is_empty());
    }

    #[test]
    fn test_expected_tables_skip_finite_pairs() {
        assert_eq!(expected_add(Sbfp::ONE, Sbfp::ZERO), None);
        assert_eq!(expected_multiply(Sbfp::ONE, Sbfp::ONE), None);
    }

    #[test]
    fn test_expected_tables() {
        assert_eq!(
            expected_add(Sbfp::POS_INFINITY, Sbfp::NEG_INFINITY),
            Some(Sbfp::NAN)
        );
        assert_eq!(
            expected_multiply(Sbfp::NEG_INFINITY, Sbfp::from_f64(-2.5)),
            Some(Sbfp::POS_INFINITY)
        );
        assert_eq!(
            expected_multiply(Sbfp::ZERO, Sbfp::POS_INFINITY),
            Some(Sbfp::NAN)
        );
    }

    #[test]
    fn test_representatives_cover_classes() {
        assert!(REPRESENTATIVES.iter().any(|v| v.is_nan()));
        assert!(REPRESENTATIVES.iter().any(|v| v.is_zero() && v.is_sign_negative()));
        assert_eq!(REPRESENTATIVES[6].to_f64(), -2.5);
    }
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_verify_passes() {
        let report = verify().unwrap();
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn test_sample_round_trip() {
        let pairs = sample_round_trip(&[1.0, 0.1, 1e5], &Encoder::default()).unwrap();
        assert_eq!(pairs[0], (1.0, 1.0));
        assert!((pairs[1].0 - pairs[1].1).abs() < 1e-4);
        assert_eq!(pairs[2].1, f64::INFINITY);
    }

    #[test]
    fn test_sample_round_trip_rejects_non_finite() {
        let encoder = Encoder::new(EncodeConfig::default().with_non_finite(NonFinitePolicy::Reject));
        let result = sample_round_trip(&[1.0, f64::INFINITY], &encoder);
        assert!(matches!(result, Err(HarnessError::Sbfp(_))));
    }
}
