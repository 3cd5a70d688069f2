use memchr::memchr;

use crate::scanner::{is_space, Format, MissingSet, RecordScanner};

const HEADER_START: u8 = Format::Fasta.start_byte();

/// Where the scanner is within a FASTA stream
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FastaState {
    /// Outside a header line; bytes are residues or whitespace
    #[default]
    Sequence,
    /// Between a `>` and the end of its line
    Header,
}

/// What happens to the byte that triggered a transition
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FastaAction {
    /// Header text, newlines and other whitespace
    Skip,
    /// A `>` outside a header: closes the open record and starts another
    StartRecord,
    /// A sequence character
    Residue,
}

impl FastaState {
    /// The transition function of the FASTA scanner.
    #[inline]
    pub fn transition(self, byte: u8) -> (FastaState, FastaAction) {
        match self {
            FastaState::Header if byte == b'\n' => (FastaState::Sequence, FastaAction::Skip),
            FastaState::Header => (FastaState::Header, FastaAction::Skip),
            FastaState::Sequence if byte == HEADER_START => {
                (FastaState::Header, FastaAction::StartRecord)
            }
            FastaState::Sequence if is_space(byte) => (FastaState::Sequence, FastaAction::Skip),
            FastaState::Sequence => (FastaState::Sequence, FastaAction::Residue),
        }
    }
}

/// Counters of one FASTA record
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FastaRecord {
    /// Non-whitespace sequence characters
    pub length: u64,
    /// Sequence characters found in the missing-data set (gap mode only)
    pub gaps: u64,
}

/// Streaming FASTA scanner.
///
/// Bytes seen before the first header are counted into the first record; a
/// stream without any header yields no record at all.
#[derive(Debug, Clone, Default)]
pub struct FastaScanner {
    state: FastaState,
    current: FastaRecord,
    headers: u64,
    missing: Option<MissingSet>,
}

impl FastaScanner {
    /// Creates a scanner; gaps are only counted when a missing-data set is given.
    pub fn new(missing: Option<MissingSet>) -> Self {
        Self {
            missing,
            ..Default::default()
        }
    }
}

impl RecordScanner for FastaScanner {
    type Record = FastaRecord;

    #[inline]
    fn step(&mut self, byte: u8) -> Option<FastaRecord> {
        let (next, action) = self.state.transition(byte);
        self.state = next;
        match action {
            FastaAction::Skip => None,
            FastaAction::Residue => {
                self.current.length += 1;
                if let Some(missing) = &self.missing {
                    if missing.contains(byte) {
                        self.current.gaps += 1;
                    }
                }
                None
            }
            FastaAction::StartRecord => {
                let closed = if self.headers > 0 {
                    Some(std::mem::take(&mut self.current))
                } else {
                    None
                };
                self.headers += 1;
                closed
            }
        }
    }

    fn scan<F: FnMut(FastaRecord)>(&mut self, chunk: &[u8], mut emit: F) {
        let mut i = 0;
        while i < chunk.len() {
            if self.state == FastaState::Header {
                // jump straight to the newline ending the header
                match memchr(b'\n', &chunk[i..]) {
                    Some(pos) => i += pos,
                    None => return,
                }
            }
            if let Some(record) = self.step(chunk[i]) {
                emit(record);
            }
            i += 1;
        }
    }

    fn finish(self) -> Option<FastaRecord> {
        if self.headers > 0 {
            Some(self.current)
        } else {
            None
        }
    }
}
