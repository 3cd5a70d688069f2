//! Byte-level record scanners for FASTA and FASTQ.
//!
//! A scanner is a small state machine fed one decoded byte at a time. It keeps
//! the counters of the record currently open and hands the record back as a
//! boundary event once it is complete. Scanners perform no I/O.
use std::str::FromStr;

use crate::errors::InfoError;

mod fasta;
mod fastq;

pub use crate::scanner::fasta::{FastaAction, FastaRecord, FastaScanner, FastaState};
pub use crate::scanner::fastq::{FastqLine, FastqRecord, FastqScanner};

/// Symbols counted as missing data unless configured otherwise
pub const DEFAULT_MISSING: &str = "Nn?Xx-";

/// FASTA or FASTQ?
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Fastq,
}

impl Format {
    pub const fn start_byte(self) -> u8 {
        match self {
            Self::Fasta => b'>',
            Self::Fastq => b'@',
        }
    }
}

/// Whitespace as understood by C's `isspace` in the "C" locale, so `\v` and
/// `\f` are skipped too.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// The set of symbols denoting missing or ambiguous sequence data.
/// Membership is byte-exact and case sensitive.
#[derive(Clone)]
pub struct MissingSet {
    table: [bool; 256],
    chars: String,
}

impl MissingSet {
    pub fn new(chars: &str) -> Result<Self, InfoError> {
        if chars.is_empty() {
            return Err(InfoError::new_empty_missing_set());
        }
        let mut table = [false; 256];
        for &b in chars.as_bytes() {
            table[b as usize] = true;
        }
        Ok(Self {
            table,
            chars: chars.to_string(),
        })
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    pub fn as_str(&self) -> &str {
        &self.chars
    }
}

impl Default for MissingSet {
    fn default() -> Self {
        let mut table = [false; 256];
        for &b in DEFAULT_MISSING.as_bytes() {
            table[b as usize] = true;
        }
        Self {
            table,
            chars: DEFAULT_MISSING.to_string(),
        }
    }
}

impl FromStr for MissingSet {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Debug for MissingSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("MissingSet").field(&self.chars).finish()
    }
}

/// The main trait, implemented by the FASTA and FASTQ scanners
pub trait RecordScanner {
    /// Counters of one complete record
    type Record;

    /// Consumes one byte. Returns the record that this byte closed, if any.
    fn step(&mut self, byte: u8) -> Option<Self::Record>;

    /// Consumes a chunk of bytes, handing every closed record to `emit`.
    /// Must behave exactly as calling `step` on each byte in turn.
    fn scan<F: FnMut(Self::Record)>(&mut self, chunk: &[u8], mut emit: F) {
        for &b in chunk {
            if let Some(record) = self.step(b) {
                emit(record);
            }
        }
    }

    /// End of stream: returns the record still open, if the format flushes one.
    fn finish(self) -> Option<Self::Record>;
}
