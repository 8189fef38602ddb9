#![allow(dead_code)] // each integration suite uses its own subset

use bitvec::prelude::*;

/// Parse "1011" into a bit word; character i becomes bit i
pub fn bits(s: &str) -> BitVec {
    s.chars().map(|c| c == '1').collect()
}

/// Copy of `word` with the bit at `position` flipped
pub fn flip(word: &BitVec, position: usize) -> BitVec {
    let mut out = word.clone();
    let value = !out[position];
    out.set(position, value);
    out
}

/// Copy of `word` with every listed bit flipped
pub fn flip_all(word: &BitVec, positions: &[usize]) -> BitVec {
    positions.iter().fold(word.clone(), |w, &p| flip(&w, p))
}
