//! # Block error-correcting codes over GF(2^m)
//!
//! This library implements three families of syndrome-decoded block codes
//! on a shared finite-field kernel:
//!
//! 1. **Hamming codes**: single-error-correcting (n, k) codes with a
//!    precomputed syndrome lookup table, plus a SECDED extension
//! 2. **Binary BCH codes**: generator built from the minimal polynomials of
//!    consecutive powers of the primitive element; Berlekamp–Massey and
//!    Chien search decoding
//! 3. **Reed–Solomon codes**: symbol-level (n, k) MDS codes with
//!    Berlekamp–Massey, Chien search and Forney magnitude recovery
//!
//! All arithmetic runs in GF(2^m) (3 ≤ m ≤ 12) through log/exp tables built
//! once at construction, so every field operation is two probes and a
//! modular addition.
//!
//! ## Usage example
//!
//! ```
//! use blockcode::{BlockCode, ReedSolomonCode};
//!
//! let rs = ReedSolomonCode::new(255, 223, 8).unwrap();
//! let data: Vec<u32> = (0..223).collect();
//! let mut received = rs.encode(&data).unwrap();
//! received[17] ^= 0x5A;
//! let result = rs.decode(&received).unwrap();
//! assert!(result.success);
//! assert_eq!(result.data, data);
//! assert_eq!(result.error_positions, vec![17]);
//! ```
//!
//! Codecs are immutable after construction; sharing one instance across
//! threads for concurrent encode/decode is safe.

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - leaves first, codecs on top
pub mod galois;       // GF(2^m) engine and polynomial algebra
pub mod codec;        // Uniform codec contract and decode results
pub mod hamming;      // Hamming and SECDED codecs
pub mod bch;          // Binary BCH codec
pub mod reed_solomon; // Reed-Solomon codec

// Re-exports for convenience
pub use bch::BchCode;
pub use codec::{BlockCode, DecodeResult};
pub use galois::{Element, GaloisField, Polynomial};
pub use hamming::{HammingCode, SecdedCode, SecdedStatus};
pub use reed_solomon::ReedSolomonCode;

use thiserror::Error;

/// Errors surfaced by codec construction and the encode/decode entry points
///
/// An uncorrectable received word is *not* an error: decoders report it
/// through [`DecodeResult::success`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Requested code geometry or field parameters are unsatisfiable
    #[error("invalid code parameters: {0}")]
    InvalidParameters(String),

    /// Division or inversion of zero in the field
    #[error("division by zero in GF(2^m)")]
    DivideByZero,

    /// Input word has the wrong number of symbols
    #[error("length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch {
        /// Length the codec requires
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}
