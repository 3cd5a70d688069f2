//! Running per-file aggregates and their finalization.
//!
//! Every closed record is folded into an accumulator; once the stream ends the
//! accumulator is consumed into a summary with all unset values normalized to 0.
use crate::scanner::{FastaRecord, FastqRecord};

/// Folds records into per-file aggregates
pub trait Accumulator {
    type Record;
    type Summary;

    fn fold(&mut self, record: Self::Record);

    fn finalize(self) -> Self::Summary;
}

/// Rounds `num / den` to the nearest integer, halves away from zero.
/// A zero denominator gives 0.
#[inline]
pub fn rounded_ratio(num: f64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        (num / den as f64).round()
    }
}

/// Count, range and sum of record lengths.
///
/// Every record takes part in the minimum, so a record without any sequence
/// character drops it to 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LengthStats {
    count: u64,
    sum: u64,
    min: Option<u64>,
    max: Option<u64>,
}

impl LengthStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, length: u64) {
        self.count += 1;
        self.sum += length;
        self.min = Some(self.min.map_or(length, |m| m.min(length)));
        self.max = Some(self.max.map_or(length, |m| m.max(length)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn finalize(&self) -> LengthSummary {
        LengthSummary {
            count: self.count,
            min: self.min.unwrap_or(0),
            max: self.max.unwrap_or(0),
            mean: rounded_ratio(self.sum as f64, self.count) as u64,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LengthSummary {
    pub count: u64,
    pub min: u64,
    pub max: u64,
    /// Rounded to the nearest integer
    pub mean: u64,
}

/// Range and sum of per-record missing-data fractions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GapStats {
    min: Option<f64>,
    max: Option<f64>,
    sum: f64,
}

impl GapStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record without gaps forces the minimum to 0 and adds nothing else.
    pub fn add(&mut self, gaps: u64, length: u64) {
        if gaps == 0 {
            self.min = Some(0.0);
            return;
        }
        if length == 0 {
            return;
        }
        let fraction = gaps as f64 / length as f64;
        self.max = Some(self.max.map_or(fraction, |m| m.max(fraction)));
        self.min = Some(self.min.map_or(fraction, |m| m.min(fraction)));
        self.sum += fraction;
    }

    /// The mean is taken over all `records`, including those without gaps.
    pub fn finalize(&self, records: u64) -> GapSummary {
        let mean = if self.sum > 0.0 && records > 0 {
            self.sum / records as f64
        } else {
            0.0
        };
        GapSummary {
            min: self.min.unwrap_or(0.0),
            max: self.max.unwrap_or(0.0),
            mean,
        }
    }
}

/// Missing-data fractions, each in `[0, 1]`
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GapSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Sum of truncated per-record mean qualities
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualityStats {
    total: i64,
}

impl QualityStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the per-record mean, truncated toward zero. Records whose quality
    /// scores sum to 0 contribute nothing.
    pub fn add(&mut self, quality_sum: i64, length: u64) {
        if quality_sum != 0 && length > 0 {
            self.total += quality_sum / length as i64;
        }
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Mean of the per-record means over all `records`.
    pub fn finalize(&self, records: u64) -> i64 {
        rounded_ratio(self.total as f64, records) as i64
    }
}

/// Statistics of one FASTA file
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FastaSummary {
    pub lengths: LengthSummary,
    /// Only present in gap mode
    pub gaps: Option<GapSummary>,
}

/// Statistics of one FASTQ file
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FastqSummary {
    pub lengths: LengthSummary,
    /// Only present in quality mode
    pub mean_quality: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FastaStats {
    lengths: LengthStats,
    gaps: Option<GapStats>,
}

impl FastaStats {
    pub fn new(count_gaps: bool) -> Self {
        Self {
            lengths: LengthStats::new(),
            gaps: if count_gaps { Some(GapStats::new()) } else { None },
        }
    }
}

impl Accumulator for FastaStats {
    type Record = FastaRecord;
    type Summary = FastaSummary;

    fn fold(&mut self, record: FastaRecord) {
        self.lengths.add(record.length);
        if let Some(gaps) = self.gaps.as_mut() {
            gaps.add(record.gaps, record.length);
        }
    }

    fn finalize(self) -> FastaSummary {
        let records = self.lengths.count();
        FastaSummary {
            lengths: self.lengths.finalize(),
            gaps: self.gaps.map(|g| g.finalize(records)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FastqStats {
    lengths: LengthStats,
    quality: Option<QualityStats>,
}

impl FastqStats {
    pub fn new(quality: bool) -> Self {
        Self {
            lengths: LengthStats::new(),
            quality: if quality {
                Some(QualityStats::new())
            } else {
                None
            },
        }
    }
}

impl Accumulator for FastqStats {
    type Record = FastqRecord;
    type Summary = FastqSummary;

    fn fold(&mut self, record: FastqRecord) {
        self.lengths.add(record.length);
        if let Some(quality) = self.quality.as_mut() {
            quality.add(record.quality_sum, record.length);
        }
    }

    fn finalize(self) -> FastqSummary {
        let records = self.lengths.count();
        FastqSummary {
            lengths: self.lengths.finalize(),
            mean_quality: self.quality.map(|q| q.finalize(records)),
        }
    }
}
