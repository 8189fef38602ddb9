//! Binary BCH codec
//!
//! Narrow-sense BCH code of length n = 2^m - 1 over GF(2), designed
//! distance 2t + 1. The generator is the product of the distinct GF(2)
//! minimal polynomials of α, α², …, α^{2t}, found through the cyclotomic
//! cosets of their exponents, so its coefficients (and every remainder
//! computed against it) stay in {0, 1}. Parity length is deg g; for many
//! parameters that is less than the m·t worst case.
//!
//! Layout: codeword = [parity | data]; data bit i sits at position
//! i + (n - k), and codeword bit i is the coefficient of x^i.
//!
//! Decoding: syndromes by Horner at α^j (j = 1..2t), Berlekamp–Massey for
//! the error locator, Chien search over the inverse locators for the
//! positions, then bit flips. The corrected word is re-checked against the
//! syndromes before it is accepted.

use bitvec::prelude::*;

use crate::codec::locator::berlekamp_massey;
use crate::codec::{BlockCode, DecodeResult};
use crate::galois::{Element, GaloisField, Polynomial};
use crate::CodecError;

/// Binary BCH codec over GF(2^m)
#[derive(Debug, Clone)]
pub struct BchCode {
    field: GaloisField,
    n: usize,
    k: usize,
    t: usize,
    /// Generator coefficients, little-endian, all in {0, 1}
    generator: Vec<Element>,
}

impl BchCode {
    /// Create the narrow-sense BCH code over GF(2^m) correcting t errors
    pub fn new(m: u32, t: usize) -> Result<Self, CodecError> {
        Self::build(GaloisField::new(m)?, t)
    }

    /// Same as [`BchCode::new`] with a caller-supplied primitive polynomial
    pub fn with_polynomial(m: u32, t: usize, primitive_poly: Element) -> Result<Self, CodecError> {
        Self::build(GaloisField::with_polynomial(m, primitive_poly)?, t)
    }

    fn build(field: GaloisField, t: usize) -> Result<Self, CodecError> {
        let n = field.order();
        if t == 0 || 2 * t >= n {
            return Err(CodecError::InvalidParameters(format!(
                "error capacity t = {t} out of range for code length {n}"
            )));
        }

        // g(x) = lcm of the minimal polynomials of α^1 .. α^{2t}; each
        // cyclotomic coset {i, 2i, 4i, ...} mod n contributes one factor.
        let generator = {
            let mut covered = vec![false; n];
            let mut g = Polynomial::one(&field);
            for i in 1..=2 * t {
                if covered[i] {
                    continue;
                }
                let mut minimal = Polynomial::one(&field);
                let mut s = i;
                while !covered[s] {
                    covered[s] = true;
                    minimal = minimal.mul(&Polynomial::linear(&field, field.alpha_pow(s)));
                    s = s * 2 % n;
                }
                // Frobenius-closed root set: coefficients land in GF(2)
                debug_assert!(minimal.coefficients().iter().all(|&c| c <= 1));
                g = g.mul(&minimal);
            }
            g.coefficients().to_vec()
        };

        let parity = generator.len() - 1;
        if parity >= n {
            return Err(CodecError::InvalidParameters(format!(
                "t = {t} leaves no data bits in a length-{n} code"
            )));
        }

        Ok(Self {
            field,
            n,
            k: n - parity,
            t,
            generator,
        })
    }

    /// The field the code is built over
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Designed error capacity t
    pub fn designed_capacity(&self) -> usize {
        self.t
    }

    /// Generator polynomial g(x)
    pub fn generator(&self) -> Polynomial<'_> {
        Polynomial::new(&self.field, self.generator.clone())
    }

    fn check_len(&self, len: usize, expected: usize) -> Result<(), CodecError> {
        if len != expected {
            return Err(CodecError::LengthMismatch {
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    fn extract_data(&self, word: &BitSlice) -> BitVec {
        word[self.n - self.k..].to_bitvec()
    }

    /// S_j = R(α^j) for j = 1..2t, with codeword bit i as coefficient of x^i
    fn syndromes(&self, received: &BitSlice) -> Vec<Element> {
        let coeffs: Vec<Element> = received.iter().map(|b| *b as Element).collect();
        let poly = Polynomial::new(&self.field, coeffs);
        (1..=2 * self.t)
            .map(|j| poly.evaluate(self.field.alpha_pow(j)))
            .collect()
    }
}

impl BlockCode for BchCode {
    type DataWord = BitVec;
    type CodeWord = BitVec;

    fn code_length(&self) -> usize {
        self.n
    }

    fn data_length(&self) -> usize {
        self.k
    }

    fn min_distance(&self) -> usize {
        2 * self.t + 1
    }

    fn encode(&self, data: &BitVec) -> Result<BitVec, CodecError> {
        self.check_len(data.len(), self.k)?;
        let parity = self.n - self.k;

        // d(x) · x^{n-k} mod g(x)
        let mut shifted = vec![0; parity + self.k];
        for i in data.iter_ones() {
            shifted[parity + i] = 1;
        }
        let message = Polynomial::new(&self.field, shifted);
        let generator = Polynomial::new(&self.field, self.generator.clone());
        let (_, remainder) = message.divmod(&generator)?;

        let mut codeword = bitvec![0; self.n];
        for i in 0..parity {
            codeword.set(i, remainder.coefficient(i) != 0);
        }
        for i in data.iter_ones() {
            codeword.set(parity + i, true);
        }
        Ok(codeword)
    }

    fn decode(&self, received: &BitVec) -> Result<DecodeResult<BitVec>, CodecError> {
        self.check_len(received.len(), self.n)?;

        let syndromes = self.syndromes(received);
        if syndromes.iter().all(|&s| s == 0) {
            return Ok(DecodeResult::clean(self.extract_data(received)));
        }

        let (lambda, errors) = berlekamp_massey(&self.field, &syndromes)?;
        if errors > self.t || lambda.len() - 1 != errors {
            return Ok(DecodeResult::failed(self.extract_data(received)));
        }

        // Chien search: position p is in error iff Λ(α^{-p}) = 0
        let locator = Polynomial::new(&self.field, lambda);
        let mut positions = Vec::with_capacity(errors);
        for p in 0..self.n {
            let x = self.field.alpha_pow((self.n - p) % self.n);
            if locator.evaluate(x) == 0 {
                positions.push(p);
            }
        }
        if positions.len() != errors {
            return Ok(DecodeResult::failed(self.extract_data(received)));
        }

        let mut corrected = received.clone();
        for &p in &positions {
            let flipped = !corrected[p];
            corrected.set(p, flipped);
        }

        // A genuine correction lands back inside the code
        if self.syndromes(&corrected).iter().any(|&s| s != 0) {
            return Ok(DecodeResult::failed(self.extract_data(received)));
        }

        Ok(DecodeResult::corrected(
            self.extract_data(&corrected),
            positions,
        ))
    }
}
