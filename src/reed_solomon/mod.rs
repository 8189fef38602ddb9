//! Reed–Solomon codec
//!
//! Narrow-sense (n, k) code over GF(2^m) with n ≤ 2^m - 1 (shortened codes
//! allowed), generator g(x) = ∏_{i=1..n-k} (x - α^i), minimum distance
//! n - k + 1 (MDS). Codewords are symbol sequences: positions [0, k) hold
//! the data, positions [k, n) the parity; array index i holds the
//! coefficient of x^{n-1-i}, so the locator of position i is α^{n-1-i}.
//!
//! Decoding runs syndromes → Berlekamp–Massey → Chien → Forney. The error
//! evaluator is Ω(x) = S(x)·Λ(x) truncated mod x^{n-k}, and each magnitude
//! is Ω(X_i^{-1}) / Λ'(X_i^{-1}) with Λ' the formal derivative. Corrections
//! are accepted only if the repaired word has all-zero syndromes.

use crate::codec::locator::berlekamp_massey;
use crate::codec::{BlockCode, DecodeResult};
use crate::galois::{Element, GaloisField, Polynomial};
use crate::CodecError;

/// Reed–Solomon codec over GF(2^m)
#[derive(Debug, Clone)]
pub struct ReedSolomonCode {
    field: GaloisField,
    n: usize,
    k: usize,
    t: usize,
    /// Generator coefficients, little-endian, degree n - k
    generator: Vec<Element>,
}

impl ReedSolomonCode {
    /// Create an (n, k) code over GF(2^m) with the default primitive polynomial
    pub fn new(n: usize, k: usize, m: u32) -> Result<Self, CodecError> {
        Self::build(GaloisField::new(m)?, n, k)
    }

    /// Same as [`ReedSolomonCode::new`] with a caller-supplied primitive polynomial
    pub fn with_polynomial(
        n: usize,
        k: usize,
        m: u32,
        primitive_poly: Element,
    ) -> Result<Self, CodecError> {
        Self::build(GaloisField::with_polynomial(m, primitive_poly)?, n, k)
    }

    fn build(field: GaloisField, n: usize, k: usize) -> Result<Self, CodecError> {
        if n > field.order() {
            return Err(CodecError::InvalidParameters(format!(
                "code length {n} exceeds field bound {}",
                field.order()
            )));
        }
        if k == 0 || k >= n {
            return Err(CodecError::InvalidParameters(format!(
                "data length {k} must satisfy 0 < k < n = {n}"
            )));
        }

        // g(x) = (x - α)(x - α²) ... (x - α^{n-k})
        let generator = {
            let mut g = Polynomial::one(&field);
            for i in 1..=n - k {
                g = g.mul(&Polynomial::linear(&field, field.alpha_pow(i)));
            }
            g.coefficients().to_vec()
        };

        Ok(Self {
            field,
            n,
            k,
            t: (n - k) / 2,
            generator,
        })
    }

    /// The field the code is built over
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Generator polynomial g(x)
    pub fn generator(&self) -> Polynomial<'_> {
        Polynomial::new(&self.field, self.generator.clone())
    }

    fn check_word(&self, word: &[Element], expected: usize) -> Result<(), CodecError> {
        if word.len() != expected {
            return Err(CodecError::LengthMismatch {
                expected,
                actual: word.len(),
            });
        }
        if let Some(&bad) = word.iter().find(|&&s| s >= self.field.size() as Element) {
            return Err(CodecError::InvalidParameters(format!(
                "symbol {bad} out of range for GF(2^{})",
                self.field.extension()
            )));
        }
        Ok(())
    }

    /// Received word as a polynomial: array index i ↦ coefficient of x^{n-1-i}
    fn word_polynomial(&self, word: &[Element]) -> Polynomial<'_> {
        Polynomial::new(&self.field, word.iter().rev().copied().collect())
    }

    /// S_j = R(α^j) for j = 1..n-k; all zero iff the word is in the code
    fn syndromes(&self, received: &[Element]) -> Vec<Element> {
        let poly = self.word_polynomial(received);
        (1..=self.n - self.k)
            .map(|j| poly.evaluate(self.field.alpha_pow(j)))
            .collect()
    }

    /// Locator of codeword position i
    fn locator_of(&self, position: usize) -> Element {
        self.field.alpha_pow(self.n - 1 - position)
    }
}

impl BlockCode for ReedSolomonCode {
    type DataWord = Vec<Element>;
    type CodeWord = Vec<Element>;

    fn code_length(&self) -> usize {
        self.n
    }

    fn data_length(&self) -> usize {
        self.k
    }

    fn min_distance(&self) -> usize {
        self.n - self.k + 1
    }

    fn encode(&self, data: &Vec<Element>) -> Result<Vec<Element>, CodecError> {
        self.check_word(data, self.k)?;
        let parity = self.n - self.k;

        // Data occupies the high coefficients: d_i at x^{n-1-i}
        let mut shifted = vec![0; parity];
        shifted.extend(data.iter().rev());
        let message = Polynomial::new(&self.field, shifted);
        let generator = Polynomial::new(&self.field, self.generator.clone());
        let (_, remainder) = message.divmod(&generator)?;

        let mut codeword = data.clone();
        codeword.extend((0..parity).map(|s| remainder.coefficient(parity - 1 - s)));
        Ok(codeword)
    }

    fn decode(&self, received: &Vec<Element>) -> Result<DecodeResult<Vec<Element>>, CodecError> {
        self.check_word(received, self.n)?;
        let extract = |word: &[Element]| word[..self.k].to_vec();

        let syndromes = self.syndromes(received);
        if syndromes.iter().all(|&s| s == 0) {
            return Ok(DecodeResult::clean(extract(received)));
        }

        let (lambda, errors) = berlekamp_massey(&self.field, &syndromes)?;
        if errors > self.t || lambda.len() - 1 != errors {
            return Ok(DecodeResult::failed(extract(received)));
        }

        // Chien search over the inverse locators
        let locator = Polynomial::new(&self.field, lambda);
        let mut positions = Vec::with_capacity(errors);
        let mut inverse_locators = Vec::with_capacity(errors);
        for i in 0..self.n {
            let x_inv = self.field.inv(self.locator_of(i))?;
            if locator.evaluate(x_inv) == 0 {
                positions.push(i);
                inverse_locators.push(x_inv);
            }
        }
        if positions.len() != errors {
            return Ok(DecodeResult::failed(extract(received)));
        }

        // Forney: Ω(x) = S(x)·Λ(x) mod x^{n-k}; e_i = Ω(X_i^{-1}) / Λ'(X_i^{-1})
        let syndrome_poly = Polynomial::new(&self.field, syndromes.clone());
        let mut omega = syndrome_poly.mul(&locator).coefficients().to_vec();
        omega.truncate(self.n - self.k);
        let omega = Polynomial::new(&self.field, omega);
        let derivative = locator.formal_derivative();

        let mut corrected = received.clone();
        for (&position, &x_inv) in positions.iter().zip(&inverse_locators) {
            let denominator = derivative.evaluate(x_inv);
            if denominator == 0 {
                return Ok(DecodeResult::failed(extract(received)));
            }
            let magnitude = self.field.div(omega.evaluate(x_inv), denominator)?;
            corrected[position] ^= magnitude;
        }

        // A genuine correction lands back inside the code
        if self.syndromes(&corrected).iter().any(|&s| s != 0) {
            return Ok(DecodeResult::failed(extract(received)));
        }

        Ok(DecodeResult::corrected(extract(&corrected), positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry() {
        let rs = ReedSolomonCode::new(255, 223, 8).unwrap();
        assert_eq!(rs.code_length(), 255);
        assert_eq!(rs.data_length(), 223);
        assert_eq!(rs.parity_length(), 32);
        assert_eq!(rs.min_distance(), 33);
        assert_eq!(rs.error_capacity(), 16);
        assert!((rs.code_rate() - 223.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(ReedSolomonCode::new(256, 223, 8).is_err());
        assert!(ReedSolomonCode::new(15, 15, 4).is_err());
        assert!(ReedSolomonCode::new(15, 0, 4).is_err());
        assert!(ReedSolomonCode::new(255, 223, 2).is_err());
    }

    #[test]
    fn generator_pinned_gf16() {
        // (15, 9) over GF(2^4): g = ∏_{i=1..6} (x - α^i)
        let rs = ReedSolomonCode::new(15, 9, 4).unwrap();
        assert_eq!(rs.generator.as_slice(), &[12, 10, 12, 3, 9, 7, 1]);
    }

    #[test]
    fn encode_pinned_gf16() {
        let rs = ReedSolomonCode::new(15, 9, 4).unwrap();
        let data: Vec<Element> = (1..=9).collect();
        let codeword = rs.encode(&data).unwrap();
        assert_eq!(codeword[..9], data[..]);
        assert_eq!(&codeword[9..], &[2, 1, 3, 12, 15, 11]);
    }

    #[test]
    fn codeword_annihilated_by_generator_roots() {
        let rs = ReedSolomonCode::new(20, 12, 8).unwrap();
        let data: Vec<Element> = (40..52).collect();
        let codeword = rs.encode(&data).unwrap();
        assert!(rs.syndromes(&codeword).iter().all(|&s| s == 0));
    }

    #[test]
    fn out_of_range_symbol_rejected() {
        let rs = ReedSolomonCode::new(15, 9, 4).unwrap();
        let mut data: Vec<Element> = (1..=9).collect();
        data[4] = 16;
        assert!(matches!(
            rs.encode(&data),
            Err(CodecError::InvalidParameters(_))
        ));
    }
}
