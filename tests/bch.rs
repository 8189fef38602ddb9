//! BCH codec tests
//!
//! Pinned (15,7) and (15,5) scenarios, exhaustive sweeps up to the designed
//! capacity, beyond-capacity behaviour and the systematic layout.

use bitvec::prelude::*;
use blockcode::{BchCode, BlockCode, CodecError};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

mod common;
use common::{bits, flip, flip_all};

/// The (15, 7) double-error-correcting code from GF(2^4)
fn bch_15_7() -> BchCode {
    BchCode::with_polynomial(4, 2, 0x13).unwrap()
}

#[test]
fn scenario_15_7_clean_round_trip() {
    let code = bch_15_7();
    assert_eq!((code.code_length(), code.data_length()), (15, 7));

    let data = bits("1011010");
    let codeword = code.encode(&data).unwrap();
    let result = code.decode(&codeword).unwrap();
    assert!(result.success);
    assert_eq!(result.data, data);
    assert_eq!(result.errors_corrected, 0);
}

#[test]
fn scenario_15_7_corrects_bit_five() {
    let code = bch_15_7();
    let data = bits("1011010");
    let codeword = code.encode(&data).unwrap();

    let result = code.decode(&flip(&codeword, 5)).unwrap();
    assert!(result.success);
    assert_eq!(result.data, data);
    assert_eq!(result.errors_corrected, 1);
    assert_eq!(result.error_positions, vec![5]);
}

#[test]
fn scenario_15_5_corrects_bits_two_and_eight() {
    let code = BchCode::new(4, 3).unwrap();
    assert_eq!((code.code_length(), code.data_length()), (15, 5));

    let data = bits("10110");
    let codeword = code.encode(&data).unwrap();
    let result = code.decode(&flip_all(&codeword, &[2, 8])).unwrap();
    assert!(result.success);
    assert_eq!(result.data, data);
    assert_eq!(result.errors_corrected, 2);
    assert_eq!(result.error_positions, vec![2, 8]);
}

#[test]
fn single_error_sweep_15_11() {
    let code = BchCode::new(4, 1).unwrap();
    assert_eq!((code.code_length(), code.data_length()), (15, 11));

    let data = bits("10110100101");
    let codeword = code.encode(&data).unwrap();
    for position in 0..15 {
        let result = code.decode(&flip(&codeword, position)).unwrap();
        assert!(result.success, "position {position}");
        assert_eq!(result.data, data);
        assert_eq!(result.error_positions, vec![position]);
    }
}

#[test]
fn double_error_sweep_15_7() {
    let code = bch_15_7();
    let data = bits("1011010");
    let codeword = code.encode(&data).unwrap();

    for first in 0..15 {
        for second in first + 1..15 {
            let result = code.decode(&flip_all(&codeword, &[first, second])).unwrap();
            assert!(result.success, "positions {first},{second}");
            assert_eq!(result.data, data);
            assert_eq!(result.error_positions, vec![first, second]);
        }
    }
}

#[test]
fn triple_error_sweep_15_5() {
    let code = BchCode::new(4, 3).unwrap();
    let data = bits("10110");
    let codeword = code.encode(&data).unwrap();
    let mut rng = StdRng::seed_from_u64(0x9bc5);

    for _ in 0..200 {
        let positions = {
            let mut p = sample(&mut rng, 15, 3).into_vec();
            p.sort_unstable();
            p
        };
        let result = code.decode(&flip_all(&codeword, &positions)).unwrap();
        assert!(result.success, "positions {positions:?}");
        assert_eq!(result.data, data);
        assert_eq!(result.error_positions, positions);
    }
}

#[test]
fn beyond_capacity_never_miscorrects_silently() {
    let code = bch_15_7();
    let data = bits("1011010");
    let codeword = code.encode(&data).unwrap();
    let mut rng = StdRng::seed_from_u64(0x517e);

    for _ in 0..300 {
        let weight = rng.gen_range(3..=5);
        let positions = sample(&mut rng, 15, weight).into_vec();
        let result = code.decode(&flip_all(&codeword, &positions)).unwrap();
        if result.success {
            // Allowed to land on a different codeword, never on a lie
            assert_ne!(result.data, data, "positions {positions:?}");
        }
    }
}

#[test]
fn systematic_layout_places_data_high() {
    let code = bch_15_7();
    let data = bits("1100101");
    let codeword = code.encode(&data).unwrap();
    let parity = code.parity_length();
    for i in 0..7 {
        assert_eq!(codeword[parity + i], data[i]);
    }
}

#[test]
fn pinned_codeword_15_7() {
    let code = bch_15_7();
    let codeword = code.encode(&bits("1011010")).unwrap();
    assert_eq!(codeword, bits("011110101011010"));
}

#[test]
fn minimum_weight_matches_designed_distance() {
    // Linear code: pairwise distances are nonzero-codeword weights
    let code = bch_15_7();
    let mut min_weight = usize::MAX;
    for value in 1..(1u32 << 7) {
        let data: BitVec = (0..7).map(|i| value >> i & 1 == 1).collect();
        let weight = code.encode(&data).unwrap().count_ones();
        min_weight = min_weight.min(weight);
    }
    assert_eq!(min_weight, code.min_distance());
}

#[test]
fn classic_geometries() {
    // (31, 21) t=2 and (63, 51) t=2 from the standard BCH tables
    let code = BchCode::new(5, 2).unwrap();
    assert_eq!((code.code_length(), code.data_length()), (31, 21));
    let data: BitVec = (0..21).map(|i| i % 3 == 0).collect();
    let result = code
        .decode(&flip_all(&code.encode(&data).unwrap(), &[4, 27]))
        .unwrap();
    assert!(result.success);
    assert_eq!(result.data, data);

    let code = BchCode::new(6, 2).unwrap();
    assert_eq!((code.code_length(), code.data_length()), (63, 51));
    let data: BitVec = (0..51).map(|i| i % 2 == 1).collect();
    let result = code.decode(&code.encode(&data).unwrap()).unwrap();
    assert!(result.success);
    assert_eq!(result.data, data);
}

#[test]
fn wrong_length_rejected() {
    let code = bch_15_7();
    assert_eq!(
        code.encode(&bits("1011")),
        Err(CodecError::LengthMismatch {
            expected: 7,
            actual: 4
        })
    );
    assert_eq!(
        code.decode(&bits("1011")),
        Err(CodecError::LengthMismatch {
            expected: 15,
            actual: 4
        })
    );
}

#[test]
fn invalid_parameters_rejected() {
    assert!(matches!(
        BchCode::new(4, 0),
        Err(CodecError::InvalidParameters(_))
    ));
    assert!(matches!(
        BchCode::new(13, 1),
        Err(CodecError::InvalidParameters(_))
    ));
    assert!(matches!(
        BchCode::with_polynomial(4, 2, 0x1F),
        Err(CodecError::InvalidParameters(_))
    ));
}

#[test]
fn batch_round_trip() {
    let code = BchCode::new(4, 1).unwrap();
    let words = vec![bits("00000000000"), bits("10110100101"), bits("11111111111")];
    let codewords = code.encode_batch(&words).unwrap();
    for (result, word) in code.decode_batch(&codewords).unwrap().iter().zip(&words) {
        assert!(result.success);
        assert_eq!(&result.data, word);
    }
}
