//! Per-file drivers: a byte source is scanned into records and the records are
//! folded into a fresh accumulator. Nothing survives from one file to the next.
use crate::errors::InfoError;
use crate::scanner::{FastaScanner, FastqScanner, MissingSet, RecordScanner};
use crate::source::ByteSource;
use crate::stats::{Accumulator, FastaStats, FastaSummary, FastqStats, FastqSummary};

/// What to compute for FASTA input
#[derive(Debug, Clone, Default)]
pub struct FastaOptions {
    /// Count missing data with this set of symbols; `None` disables gap mode
    pub gaps: Option<MissingSet>,
}

impl FastaOptions {
    /// Gap mode with the given missing-data symbols
    pub fn with_gaps(missing: MissingSet) -> Self {
        Self {
            gaps: Some(missing),
        }
    }

    fn scanner(&self) -> FastaScanner {
        FastaScanner::new(self.gaps.clone())
    }

    fn stats(&self) -> FastaStats {
        FastaStats::new(self.gaps.is_some())
    }
}

/// What to compute for FASTQ input
#[derive(Debug, Copy, Clone, Default)]
pub struct FastqOptions {
    /// Report the average read quality (Phred+33)
    pub quality: bool,
}

impl FastqOptions {
    fn scanner(&self) -> FastqScanner {
        FastqScanner::new(self.quality)
    }

    fn stats(&self) -> FastqStats {
        FastqStats::new(self.quality)
    }
}

/// Drives `scanner` over the whole of `source`, folding every record into `stats`.
pub fn summarize<S, A>(
    source: &mut ByteSource,
    mut scanner: S,
    mut stats: A,
) -> Result<A::Summary, InfoError>
where
    S: RecordScanner,
    A: Accumulator<Record = S::Record>,
{
    let scanned = source.for_each_chunk(|chunk| scanner.scan(chunk, |record| stats.fold(record)));
    let decoded = match scanned {
        Ok(n) => n,
        Err(e) => return Err(source.read_error(e)),
    };
    if let Some(last) = scanner.finish() {
        stats.fold(last);
    }
    log::trace!("scanned {} decoded bytes", decoded);
    Ok(stats.finalize())
}

/// Same as [`summarize`] for bytes already in memory.
pub fn summarize_bytes<S, A>(bytes: &[u8], mut scanner: S, mut stats: A) -> A::Summary
where
    S: RecordScanner,
    A: Accumulator<Record = S::Record>,
{
    scanner.scan(bytes, |record| stats.fold(record));
    if let Some(last) = scanner.finish() {
        stats.fold(last);
    }
    stats.finalize()
}

pub fn fasta_summary(
    source: &mut ByteSource,
    options: &FastaOptions,
) -> Result<FastaSummary, InfoError> {
    let summary = summarize(source, options.scanner(), options.stats())?;
    log::debug!("FASTA summary: {:?}", summary);
    Ok(summary)
}

pub fn fastq_summary(
    source: &mut ByteSource,
    options: &FastqOptions,
) -> Result<FastqSummary, InfoError> {
    let summary = summarize(source, options.scanner(), options.stats())?;
    log::debug!("FASTQ summary: {:?}", summary);
    Ok(summary)
}

pub fn fasta_summary_from_bytes(bytes: &[u8], options: &FastaOptions) -> FastaSummary {
    summarize_bytes(bytes, options.scanner(), options.stats())
}

pub fn fastq_summary_from_bytes(bytes: &[u8], options: &FastqOptions) -> FastqSummary {
    summarize_bytes(bytes, options.scanner(), options.stats())
}
