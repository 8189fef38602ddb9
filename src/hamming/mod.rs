//! Hamming codecs
//!
//! Systematic (n, k) single-error-correcting codes with n = 2^r - 1,
//! r = n - k, decoded through a precomputed syndrome lookup table, plus the
//! SECDED extension that appends one overall parity bit.
//!
//! Layout: codeword = [data | parity], data bit i at position i, parity bit
//! j at position k + j. Column j of the generator's parity block holds bit j
//! of the column value assigned to each position: data position i carries
//! the (i+1)-th smallest r-bit value that is not a power of two, parity
//! position k + j carries 2^j. Every single-bit error therefore has a
//! distinct nonzero syndrome, which is what the lookup table indexes on.

use bitvec::prelude::*;

use crate::codec::{BlockCode, DecodeResult};
use crate::CodecError;

/// Largest supported parity width; the syndrome table is 2^r entries
const MAX_PARITY_BITS: usize = 20;

/// Systematic Hamming codec with syndrome-table decoding
///
/// Minimum distance is 3: corrects any single-bit error.
#[derive(Debug, Clone)]
pub struct HammingCode {
    n: usize,
    k: usize,
    r: usize,
    /// Column value of data position i (the P-block row i)
    parity_rows: Vec<usize>,
    /// Syndrome value -> error position; `n` marks "no single-bit pattern"
    syndrome_table: Vec<usize>,
}

impl HammingCode {
    /// Create an (n, k) Hamming codec; requires n = 2^(n-k) - 1 and r ≥ 2
    pub fn new(n: usize, k: usize) -> Result<Self, CodecError> {
        if k >= n {
            return Err(CodecError::InvalidParameters(format!(
                "data length {k} must be smaller than code length {n}"
            )));
        }
        let r = n - k;
        if r < 2 || r > MAX_PARITY_BITS || n != (1 << r) - 1 {
            return Err(CodecError::InvalidParameters(format!(
                "({n}, {k}) is not a Hamming geometry: need n = 2^r - 1 with 2 <= r <= {MAX_PARITY_BITS}"
            )));
        }

        // Data columns take the non-power-of-two values in increasing
        // order; the identity block of H owns the powers of two.
        let parity_rows: Vec<usize> = (1..(1 << r))
            .filter(|v: &usize| !v.is_power_of_two())
            .take(k)
            .collect();

        let mut syndrome_table = vec![n; 1 << r];
        for pos in 0..n {
            let syndrome = Self::column_value(&parity_rows, k, pos);
            debug_assert_eq!(syndrome_table[syndrome], n, "duplicate H column");
            syndrome_table[syndrome] = pos;
        }

        Ok(Self {
            n,
            k,
            r,
            parity_rows,
            syndrome_table,
        })
    }

    fn column_value(parity_rows: &[usize], k: usize, pos: usize) -> usize {
        if pos < k {
            parity_rows[pos]
        } else {
            1 << (pos - k)
        }
    }

    /// Syndrome of a received word, as an r-bit value
    ///
    /// Bit j of the result is row j of H dotted with the received word;
    /// equivalently the XOR of the column values of all set bit positions.
    pub fn syndrome(&self, received: &BitSlice) -> usize {
        received
            .iter_ones()
            .fold(0, |acc, pos| acc ^ Self::column_value(&self.parity_rows, self.k, pos))
    }

    fn extract_data(&self, word: &BitSlice) -> BitVec {
        word[..self.k].to_bitvec()
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
}

impl BlockCode for HammingCode {
    type DataWord = BitVec;
    type CodeWord = BitVec;

    fn code_length(&self) -> usize {
        self.n
    }

    fn data_length(&self) -> usize {
        self.k
    }

    fn min_distance(&self) -> usize {
        3
    }

    fn encode(&self, data: &BitVec) -> Result<BitVec, CodecError> {
        self.check_len(data.len(), self.k)?;
        let mut codeword = data.clone();
        codeword.resize(self.n, false);
        for j in 0..self.r {
            let parity = data
                .iter_ones()
                .fold(false, |acc, i| acc ^ (self.parity_rows[i] >> j & 1 == 1));
            codeword.set(self.k + j, parity);
        }
        Ok(codeword)
    }

    fn decode(&self, received: &BitVec) -> Result<DecodeResult<BitVec>, CodecError> {
        self.check_len(received.len(), self.n)?;
        let syndrome = self.syndrome(received);
        if syndrome == 0 {
            return Ok(DecodeResult::clean(self.extract_data(received)));
        }
        let position = self.syndrome_table[syndrome];
        if position == self.n {
            return Ok(DecodeResult::failed(self.extract_data(received)));
        }
        let mut corrected = received.clone();
        let flipped = !corrected[position];
        corrected.set(position, flipped);
        Ok(DecodeResult::corrected(
            self.extract_data(&corrected),
            vec![position],
        ))
    }
}

/// Diagnosis of a SECDED decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecdedStatus {
    /// Base syndrome zero, overall parity even
    NoError,
    /// One bit corrected at the given extended-codeword position
    /// (position n means the overall parity bit itself)
    SingleCorrected(usize),
    /// Base syndrome nonzero with even overall parity: two errors
    DoubleDetected,
}

/// SECDED extension of a Hamming code
///
/// Appends one overall parity bit to the base (n, k) codeword, producing an
/// (n + 1, k) code of minimum distance 4: still corrects any single error,
/// and additionally detects (without miscorrecting) any double error.
#[derive(Debug, Clone)]
pub struct SecdedCode {
    base: HammingCode,
}

impl SecdedCode {
    /// Extend the (n, k) Hamming code with an overall parity bit
    pub fn new(n: usize, k: usize) -> Result<Self, CodecError> {
        Ok(Self {
            base: HammingCode::new(n, k)?,
        })
    }

    /// The underlying Hamming codec
    pub fn base(&self) -> &HammingCode {
        &self.base
    }

    /// Decode and report the joint syndrome/parity diagnosis
    pub fn decode_with_status(
        &self,
        received: &BitVec,
    ) -> Result<(DecodeResult<BitVec>, SecdedStatus), CodecError> {
        let n = self.base.n;
        if received.len() != n + 1 {
            return Err(CodecError::LengthMismatch {
                expected: n + 1,
                actual: received.len(),
            });
        }

        let base_word = received[..n].to_bitvec();
        let syndrome = self.base.syndrome(&base_word);
        let parity_odd = received.count_ones() % 2 == 1;

        let outcome = match (syndrome == 0, parity_odd) {
            (true, false) => (
                DecodeResult::clean(self.base.extract_data(&base_word)),
                SecdedStatus::NoError,
            ),
            (true, true) => (
                // The flipped bit is the overall parity bit; data is intact
                DecodeResult::corrected(self.base.extract_data(&base_word), vec![n]),
                SecdedStatus::SingleCorrected(n),
            ),
            (false, true) => {
                let result = self.base.decode(&base_word)?;
                let status = match result.error_positions.first() {
                    Some(&p) => SecdedStatus::SingleCorrected(p),
                    None => SecdedStatus::DoubleDetected,
                };
                (result, status)
            }
            (false, false) => (
                DecodeResult::failed(self.base.extract_data(&base_word)),
                SecdedStatus::DoubleDetected,
            ),
        };
        Ok(outcome)
    }
}

impl BlockCode for SecdedCode {
    type DataWord = BitVec;
    type CodeWord = BitVec;

    fn code_length(&self) -> usize {
        self.base.n + 1
    }

    fn data_length(&self) -> usize {
        self.base.k
    }

    fn min_distance(&self) -> usize {
        4
    }

    fn encode(&self, data: &BitVec) -> Result<BitVec, CodecError> {
        let mut codeword = self.base.encode(data)?;
        let overall = codeword.count_ones() % 2 == 1;
        codeword.push(overall);
        Ok(codeword)
    }

    fn decode(&self, received: &BitVec) -> Result<DecodeResult<BitVec>, CodecError> {
        self.decode_with_status(received).map(|(result, _)| result)
    }
}
