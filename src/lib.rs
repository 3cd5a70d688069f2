#![crate_name = "seqinfo"]
//! Summary statistics for FASTA and FASTQ files, computed in a single
//! streaming pass over the (possibly compressed) input.
//!
//! ```
//! use seqinfo::summary::{fasta_summary_from_bytes, FastaOptions};
//!
//! let summary = fasta_summary_from_bytes(b">s1\nACGT\n>s2\nAC\n", &FastaOptions::default());
//! assert_eq!(summary.lengths.count, 2);
//! assert_eq!(summary.lengths.mean, 3);
//! ```
pub mod errors;
pub mod report;
pub mod scanner;
pub mod source;
pub mod stats;
pub mod summary;

pub use errors::{InfoError, InfoErrorKind};
pub use scanner::{Format, MissingSet, RecordScanner};
pub use source::{ByteSource, Compression};
pub use stats::{Accumulator, FastaSummary, FastqSummary};
pub use summary::{fasta_summary, fastq_summary, FastaOptions, FastqOptions};
