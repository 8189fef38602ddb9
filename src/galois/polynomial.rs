//! Polynomials with coefficients in GF(2^m)
//!
//! Coefficient index 0 is the constant term. Values are kept normalised:
//! either a single zero coefficient (the zero polynomial) or a nonempty
//! list whose last entry is nonzero. Every operation returns a new
//! normalised value; nothing here mutates in place.

use super::field::{Element, GaloisField};
use crate::CodecError;

/// A polynomial over a borrowed field
///
/// The field reference pins which arithmetic the coefficients live in;
/// combining polynomials from different fields is a programming error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<'f> {
    field: &'f GaloisField,
    coeffs: Vec<Element>,
}

impl<'f> Polynomial<'f> {
    /// Build from coefficients (index 0 = constant term), normalising
    pub fn new(field: &'f GaloisField, coeffs: Vec<Element>) -> Self {
        let mut poly = Self { field, coeffs };
        poly.normalize();
        poly
    }

    /// The zero polynomial
    pub fn zero(field: &'f GaloisField) -> Self {
        Self {
            field,
            coeffs: vec![0],
        }
    }

    /// The constant polynomial 1
    pub fn one(field: &'f GaloisField) -> Self {
        Self {
            field,
            coeffs: vec![1],
        }
    }

    /// The monic linear factor (x - root); same as (x + root) here
    pub fn linear(field: &'f GaloisField, root: Element) -> Self {
        Self {
            field,
            coeffs: vec![root, 1],
        }
    }

    /// The field the coefficients live in
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Degree; conventionally 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of x^index, 0 beyond the stored length
    pub fn coefficient(&self, index: usize) -> Element {
        self.coeffs.get(index).copied().unwrap_or(0)
    }

    /// Normalised coefficient slice
    pub fn coefficients(&self) -> &[Element] {
        &self.coeffs
    }

    /// True for the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs == [0]
    }

    /// Coefficient-wise sum
    pub fn add(&self, other: &Self) -> Self {
        debug_assert!(std::ptr::eq(self.field, other.field));
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = vec![0; len];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self
                .field
                .add(self.coefficient(i), other.coefficient(i));
        }
        Self::new(self.field, result)
    }

    /// Schoolbook product
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert!(std::ptr::eq(self.field, other.field));
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.field);
        }
        let mut result = vec![0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                result[i + j] ^= self.field.mul(a, b);
            }
        }
        Self::new(self.field, result)
    }

    /// Horner evaluation at `x`, high coefficient first
    pub fn evaluate(&self, x: Element) -> Element {
        let mut result = *self.coeffs.last().unwrap_or(&0);
        for &c in self.coeffs.iter().rev().skip(1) {
            result = self.field.mul(result, x) ^ c;
        }
        result
    }

    /// Euclidean division: (quotient, remainder) with deg(r) < deg(divisor)
    ///
    /// Fails with `DivideByZero` for a zero divisor. The invariant
    /// `q * divisor + r == self` holds for every result.
    pub fn divmod(&self, divisor: &Self) -> Result<(Self, Self), CodecError> {
        debug_assert!(std::ptr::eq(self.field, divisor.field));
        if divisor.is_zero() {
            return Err(CodecError::DivideByZero);
        }
        let db = divisor.degree();
        if self.is_zero() || self.degree() < db {
            return Ok((Self::zero(self.field), self.clone()));
        }

        let lead_inv = self.field.inv(divisor.coeffs[db])?;
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![0; self.degree() - db + 1];

        for shift in (0..quotient.len()).rev() {
            let factor = self.field.mul(remainder[shift + db], lead_inv);
            if factor == 0 {
                continue;
            }
            quotient[shift] = factor;
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] ^= self.field.mul(factor, d);
            }
        }

        Ok((
            Self::new(self.field, quotient),
            Self::new(self.field, remainder),
        ))
    }

    /// Formal derivative
    ///
    /// In characteristic two only the odd-degree terms survive:
    /// d/dx Σ c_i x^i = Σ_{i odd} c_i x^{i-1}.
    pub fn formal_derivative(&self) -> Self {
        let mut result = vec![0; self.coeffs.len().saturating_sub(1).max(1)];
        for i in (1..self.coeffs.len()).step_by(2) {
            result[i - 1] = self.coeffs[i];
        }
        Self::new(self.field, result)
    }

    /// All roots in the field, by exhaustive evaluation
    pub fn find_roots(&self) -> Vec<Element> {
        (0..self.field.size() as Element)
            .filter(|&x| self.evaluate(x) == 0)
            .collect()
    }

    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && *self.coeffs.last().unwrap() == 0 {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf16() -> GaloisField {
        GaloisField::new(4).unwrap()
    }

    #[test]
    fn normalisation() {
        let field = gf16();
        let p = Polynomial::new(&field, vec![3, 1, 0, 0]);
        assert_eq!(p.coefficients(), &[3, 1]);
        assert_eq!(p.degree(), 1);
        let z = Polynomial::new(&field, vec![0, 0, 0]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), 0);
    }

    #[test]
    fn out_of_range_coefficient_is_zero() {
        let field = gf16();
        let p = Polynomial::new(&field, vec![5, 7]);
        assert_eq!(p.coefficient(0), 5);
        assert_eq!(p.coefficient(9), 0);
    }

    #[test]
    fn evaluation_is_a_homomorphism() {
        let field = gf16();
        let a = Polynomial::new(&field, vec![3, 0, 7, 1]);
        let b = Polynomial::new(&field, vec![9, 4]);
        for x in 0..16 {
            let lhs = a.mul(&b).evaluate(x);
            let rhs = field.mul(a.evaluate(x), b.evaluate(x));
            assert_eq!(lhs, rhs, "x = {x}");
            let lhs = a.add(&b).evaluate(x);
            let rhs = field.add(a.evaluate(x), b.evaluate(x));
            assert_eq!(lhs, rhs, "x = {x}");
        }
    }

    #[test]
    fn divmod_reconstructs_dividend() {
        let field = gf16();
        let a = Polynomial::new(&field, vec![1, 8, 0, 13, 4, 2]);
        let b = Polynomial::new(&field, vec![7, 0, 3]);
        let (q, r) = a.divmod(&b).unwrap();
        assert!(r.is_zero() || r.degree() < b.degree());
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn divmod_by_zero_fails() {
        let field = gf16();
        let a = Polynomial::new(&field, vec![1, 2]);
        let z = Polynomial::zero(&field);
        assert_eq!(a.divmod(&z), Err(CodecError::DivideByZero));
    }

    #[test]
    fn derivative_keeps_odd_terms() {
        let field = gf16();
        // 1 + 3x + 5x^2 + 7x^3 -> 3 + 7x^2
        let p = Polynomial::new(&field, vec![1, 3, 5, 7]);
        assert_eq!(p.formal_derivative().coefficients(), &[3, 0, 7]);
    }

    #[test]
    fn roots_of_linear_factor_product() {
        let field = gf16();
        let p = Polynomial::linear(&field, 6).mul(&Polynomial::linear(&field, 11));
        let mut roots = p.find_roots();
        roots.sort_unstable();
        assert_eq!(roots, vec![6, 11]);
    }
}
