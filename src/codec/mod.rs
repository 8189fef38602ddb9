//! Uniform codec contract
//!
//! Every codec in this crate exposes the same shape: systematic
//! `encode`/`decode` on fixed-length words, batch variants, and the code
//! parameters fixed at construction. Uncorrectable input is reported in the
//! [`DecodeResult`], not as an error; `Err` is reserved for precondition
//! violations such as wrong word lengths.

pub(crate) mod locator;

use crate::CodecError;

/// Outcome of decoding one received word
///
/// When `success` is false the received word carried more errors than the
/// code can correct; `data` then holds the naive systematic extraction and
/// must not be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult<W> {
    /// Recovered data word
    pub data: W,
    /// Whether the word was decoded (possibly after correction)
    pub success: bool,
    /// Number of symbol/bit errors corrected
    pub errors_corrected: usize,
    /// Positions corrected, ascending, in codeword indexing
    pub error_positions: Vec<usize>,
}

impl<W> DecodeResult<W> {
    /// A clean decode: no errors found
    pub fn clean(data: W) -> Self {
        Self {
            data,
            success: true,
            errors_corrected: 0,
            error_positions: Vec::new(),
        }
    }

    /// A successful decode after correcting errors at `positions`
    pub fn corrected(data: W, positions: Vec<usize>) -> Self {
        Self {
            data,
            success: true,
            errors_corrected: positions.len(),
            error_positions: positions,
        }
    }

    /// Too many errors; `data` is the raw systematic extraction
    pub fn failed(data: W) -> Self {
        Self {
            data,
            success: false,
            errors_corrected: 0,
            error_positions: Vec::new(),
        }
    }
}

/// Common contract of all block codecs
///
/// Implementations are immutable after construction: `encode` and `decode`
/// take `&self` and may run concurrently from many threads.
pub trait BlockCode {
    /// Fixed-length data word (bits for Hamming/BCH, symbols for RS)
    type DataWord: Clone;
    /// Fixed-length code word
    type CodeWord: Clone;

    /// Code length n in symbols
    fn code_length(&self) -> usize;

    /// Data length k in symbols
    fn data_length(&self) -> usize;

    /// Parity length n - k
    fn parity_length(&self) -> usize {
        self.code_length() - self.data_length()
    }

    /// Minimum Hamming distance between distinct codewords
    fn min_distance(&self) -> usize;

    /// Guaranteed error-correction capacity t = ⌊(d_min - 1) / 2⌋
    fn error_capacity(&self) -> usize {
        (self.min_distance() - 1) / 2
    }

    /// Guaranteed error-detection capacity d_min - 1
    fn error_detection_capacity(&self) -> usize {
        self.min_distance() - 1
    }

    /// Code rate k / n
    fn code_rate(&self) -> f64 {
        self.data_length() as f64 / self.code_length() as f64
    }

    /// Encode one data word into a codeword
    fn encode(&self, data: &Self::DataWord) -> Result<Self::CodeWord, CodecError>;

    /// Decode one received word, correcting up to `error_capacity` errors
    fn decode(&self, received: &Self::CodeWord) -> Result<DecodeResult<Self::DataWord>, CodecError>;

    /// Encode a batch of data words
    fn encode_batch(&self, data: &[Self::DataWord]) -> Result<Vec<Self::CodeWord>, CodecError> {
        data.iter().map(|word| self.encode(word)).collect()
    }

    /// Decode a batch of received words
    fn decode_batch(
        &self,
        received: &[Self::CodeWord],
    ) -> Result<Vec<DecodeResult<Self::DataWord>>, CodecError> {
        received.iter().map(|word| self.decode(word)).collect()
    }
}
