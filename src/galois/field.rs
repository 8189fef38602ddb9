//! Finite field GF(2^m)
//!
//! Elements are integers in [0, 2^m); addition is XOR and multiplication is
//! carry-less multiplication modulo a primitive polynomial of degree m.
//! The log/exp tables make mul/div/inv/pow O(1): two probes and one modular
//! addition. Decoders evaluate polynomials through these tables millions of
//! times, so the tables are built exactly once, at construction.

use crate::CodecError;

/// A field element, stored as its bit-vector representation
pub type Element = u32;

/// Smallest supported field extension
pub const MIN_M: u32 = 3;
/// Largest supported field extension; beyond this the tables (and the
/// Hamming syndrome table built on top) grow past any sensible size
pub const MAX_M: u32 = 12;

/// Default primitive polynomial for GF(2^m), highest-degree term included
///
/// These defaults are part of the interface: two codecs built with the same
/// (n, k, m) defaults produce bit-identical codewords. The extensions m = 9
/// and m = 11 carry no default; construct those fields through
/// [`GaloisField::with_polynomial`].
pub fn default_primitive_poly(m: u32) -> Option<Element> {
    match m {
        3 => Some(0x0B),    // x^3 + x + 1
        4 => Some(0x13),    // x^4 + x + 1
        5 => Some(0x25),    // x^5 + x^2 + 1
        6 => Some(0x43),    // x^6 + x + 1
        7 => Some(0x89),    // x^7 + x^3 + 1
        8 => Some(0x11D),   // x^8 + x^4 + x^3 + x^2 + 1
        10 => Some(0x409),  // x^10 + x^3 + 1
        12 => Some(0x1053), // x^12 + x^6 + x^4 + x + 1
        _ => None,
    }
}

/// Arithmetic in GF(2^m) via log/exp tables
///
/// The multiplicative generator α is fixed to the element 2. Immutable after
/// construction; concurrent read-only use from many threads is safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    m: u32,
    primitive_poly: Element,
    /// exp[i] = α^i for i in [0, 2^m - 1)
    exp: Vec<Element>,
    /// log[exp[i]] = i; log[0] is unused and left as 0
    log: Vec<usize>,
}

impl GaloisField {
    /// Create GF(2^m) with the default primitive polynomial for m
    ///
    /// Fails for extensions without a default (m = 9, m = 11); those fields
    /// need an explicit polynomial via [`GaloisField::with_polynomial`].
    pub fn new(m: u32) -> Result<Self, CodecError> {
        let poly = default_primitive_poly(m).ok_or_else(|| {
            if (MIN_M..=MAX_M).contains(&m) {
                CodecError::InvalidParameters(format!(
                    "no default primitive polynomial for m = {m}; supply one explicitly"
                ))
            } else {
                CodecError::InvalidParameters(format!(
                    "unsupported field extension m = {m} (supported: {MIN_M}..={MAX_M})"
                ))
            }
        })?;
        Self::with_polynomial(m, poly)
    }

    /// Create GF(2^m) with a caller-supplied primitive polynomial
    ///
    /// The polynomial must have degree exactly m and must be primitive: the
    /// element 2 has to generate the full multiplicative group of order
    /// 2^m - 1. Both conditions are verified here so that decoders can rely
    /// on the tables unconditionally.
    pub fn with_polynomial(m: u32, primitive_poly: Element) -> Result<Self, CodecError> {
        if !(MIN_M..=MAX_M).contains(&m) {
            return Err(CodecError::InvalidParameters(format!(
                "unsupported field extension m = {m} (supported: {MIN_M}..={MAX_M})"
            )));
        }
        let size = 1usize << m;
        if primitive_poly & (size as Element) == 0 || primitive_poly >> m > 1 {
            return Err(CodecError::InvalidParameters(format!(
                "polynomial {primitive_poly:#x} does not have degree {m}"
            )));
        }

        // Table construction: v starts at 1; each step multiplies by x and
        // reduces modulo the primitive polynomial.
        let mut exp = vec![0; size];
        let mut log = vec![0; size];
        exp[0] = 1;
        let mut v: Element = 1;
        for i in 1..size {
            v <<= 1;
            if v & (size as Element) != 0 {
                v ^= primitive_poly;
            }
            exp[i % (size - 1)] = v;
        }

        // α is primitive iff the exp walk visits every nonzero element
        // exactly once before wrapping.
        let mut seen = vec![false; size];
        for &e in exp.iter().take(size - 1) {
            if e == 0 || seen[e as usize] {
                return Err(CodecError::InvalidParameters(format!(
                    "polynomial {primitive_poly:#x} is not primitive over GF(2)"
                )));
            }
            seen[e as usize] = true;
        }

        for (i, &e) in exp.iter().enumerate().take(size - 1) {
            log[e as usize] = i;
        }

        Ok(Self {
            m,
            primitive_poly,
            exp,
            log,
        })
    }

    /// Field extension m
    pub fn extension(&self) -> u32 {
        self.m
    }

    /// Field size 2^m
    pub fn size(&self) -> usize {
        1 << self.m
    }

    /// Order of the multiplicative group, 2^m - 1
    pub fn order(&self) -> usize {
        self.size() - 1
    }

    /// The primitive polynomial this field reduces by
    pub fn primitive_poly(&self) -> Element {
        self.primitive_poly
    }

    /// The multiplicative generator α (the element 2)
    pub fn primitive_element(&self) -> Element {
        2
    }

    /// α^i, with the exponent taken modulo 2^m - 1
    pub fn alpha_pow(&self, i: usize) -> Element {
        self.exp[i % self.order()]
    }

    /// Addition (XOR); subtraction is identical in characteristic two
    #[inline]
    pub fn add(&self, a: Element, b: Element) -> Element {
        a ^ b
    }

    /// Multiplication via the log/exp tables
    #[inline]
    pub fn mul(&self, a: Element, b: Element) -> Element {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[(self.log[a as usize] + self.log[b as usize]) % self.order()]
    }

    /// Division; `DivideByZero` when b = 0
    #[inline]
    pub fn div(&self, a: Element, b: Element) -> Result<Element, CodecError> {
        if b == 0 {
            return Err(CodecError::DivideByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let order = self.order();
        Ok(self.exp[(self.log[a as usize] + order - self.log[b as usize]) % order])
    }

    /// Multiplicative inverse; `DivideByZero` when a = 0
    #[inline]
    pub fn inv(&self, a: Element) -> Result<Element, CodecError> {
        if a == 0 {
            return Err(CodecError::DivideByZero);
        }
        let order = self.order();
        Ok(self.exp[(order - self.log[a as usize]) % order])
    }

    /// Exponentiation; pow(0, 0) = 1 and pow(0, e) = 0 for e > 0
    #[inline]
    pub fn pow(&self, base: Element, exponent: usize) -> Element {
        if base == 0 {
            return if exponent == 0 { 1 } else { 0 };
        }
        self.exp[(self.log[base as usize] * exponent) % self.order()]
    }

    /// True iff the multiplicative order of `x` is exactly 2^m - 1
    pub fn is_primitive(&self, x: Element) -> bool {
        if x <= 1 {
            return false;
        }
        let mut current = x;
        for _ in 1..self.order() {
            if current == 1 {
                return false;
            }
            current = self.mul(current, x);
        }
        current == 1
    }
}
