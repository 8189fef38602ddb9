//! Berlekamp–Massey error-locator search
//!
//! Shared by the BCH and Reed–Solomon decoders. Given syndromes
//! S_1 .. S_d, finds the minimal-length LFSR connection polynomial
//! Λ(x) = 1 + Λ_1 x + … + Λ_L x^L generating the sequence; its roots are
//! the inverses of the error locators.

use crate::galois::{Element, GaloisField};
use crate::CodecError;

/// Run Berlekamp–Massey over the syndrome sequence
///
/// Returns the connection polynomial Λ as normalised little-endian
/// coefficients together with the final LFSR length L. For a correctable
/// word L equals both the degree of Λ and the number of errors.
pub(crate) fn berlekamp_massey(
    field: &GaloisField,
    syndromes: &[Element],
) -> Result<(Vec<Element>, usize), CodecError> {
    let mut lambda: Vec<Element> = vec![1]; // Λ(x)
    let mut prev: Vec<Element> = vec![1]; // B(x)
    let mut len = 0usize; // L
    let mut pos = 1usize; // steps since B was updated
    let mut prev_disc: Element = 1; // b, nonzero by construction

    for step in 0..syndromes.len() {
        // Discrepancy: d = S_step + Σ_{i=1..L} Λ_i · S_{step-i}
        let mut disc = syndromes[step];
        for i in 1..=len.min(lambda.len() - 1) {
            disc ^= field.mul(lambda[i], syndromes[step - i]);
        }

        if disc == 0 {
            pos += 1;
            continue;
        }

        let saved = lambda.clone();
        let coef = field.div(disc, prev_disc)?;

        // Λ(x) <- Λ(x) - (d/b) · x^pos · B(x)
        if lambda.len() < prev.len() + pos {
            lambda.resize(prev.len() + pos, 0);
        }
        for (i, &b) in prev.iter().enumerate() {
            lambda[i + pos] ^= field.mul(coef, b);
        }

        if 2 * len <= step {
            len = step + 1 - len;
            prev = saved;
            prev_disc = disc;
            pos = 1;
        } else {
            pos += 1;
        }
    }

    while lambda.len() > 1 && *lambda.last().unwrap() == 0 {
        lambda.pop();
    }
    Ok((lambda, len))
}
