use crate::scanner::{is_space, RecordScanner};

/// Phred+33 offset
const ASCII_BASE: i64 = b'!' as i64;

/// Which of the four lines of a FASTQ record the scanner is on
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default)]
pub enum FastqLine {
    #[default]
    Id,
    Sequence,
    Separator,
    Quality,
}

impl FastqLine {
    /// Position of the line within its record (0 to 3)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The line that starts after a newline, or `None` once the quality line
    /// ends and the record is complete.
    #[inline]
    pub fn next(self) -> Option<FastqLine> {
        match self {
            FastqLine::Id => Some(FastqLine::Sequence),
            FastqLine::Sequence => Some(FastqLine::Separator),
            FastqLine::Separator => Some(FastqLine::Quality),
            FastqLine::Quality => None,
        }
    }
}

/// Counters of one FASTQ record
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FastqRecord {
    /// Non-whitespace characters on the sequence line
    pub length: u64,
    /// Sum of the Phred+33 scores on the quality line (quality mode only)
    pub quality_sum: i64,
}

/// Streaming FASTQ scanner.
///
/// Records are exactly four newline-terminated lines; whatever follows the
/// last complete record is dropped.
#[derive(Debug, Clone, Default)]
pub struct FastqScanner {
    line: FastqLine,
    current: FastqRecord,
    quality: bool,
}

impl FastqScanner {
    /// Creates a scanner; quality scores are only summed when `quality` is set.
    pub fn new(quality: bool) -> Self {
        Self {
            quality,
            ..Default::default()
        }
    }

    pub fn line(&self) -> FastqLine {
        self.line
    }
}

impl RecordScanner for FastqScanner {
    type Record = FastqRecord;

    #[inline]
    fn step(&mut self, byte: u8) -> Option<FastqRecord> {
        if byte == b'\n' {
            return match self.line.next() {
                Some(line) => {
                    self.line = line;
                    None
                }
                None => {
                    self.line = FastqLine::Id;
                    Some(std::mem::take(&mut self.current))
                }
            };
        }
        if is_space(byte) {
            return None;
        }
        match self.line {
            FastqLine::Sequence => self.current.length += 1,
            FastqLine::Quality if self.quality => {
                self.current.quality_sum += i64::from(byte) - ASCII_BASE
            }
            _ => {}
        }
        None
    }

    fn finish(self) -> Option<FastqRecord> {
        if self.line != FastqLine::Id || self.current != FastqRecord::default() {
            log::debug!(
                "dropping incomplete trailing FASTQ record (stopped on line {})",
                self.line.index()
            );
        }
        None
    }
}
