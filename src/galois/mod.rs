//! Algebraic kernel
//!
//! Everything the codecs share:
//! - GF(2^m) arithmetic through log/exp tables (3 ≤ m ≤ 12)
//! - Polynomials with coefficients in a field

mod field;
mod polynomial;

pub use field::{default_primitive_poly, Element, GaloisField};
pub use polynomial::Polynomial;
