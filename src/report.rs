//! Column headers, result rows and the per-run loops of the command line tools.
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::InfoError;
use crate::scanner::Format;
use crate::source::ByteSource;
use crate::stats::{FastaSummary, FastqSummary};
use crate::summary::{fasta_summary, fastq_summary, FastaOptions, FastqOptions};

const LENGTH_COLUMNS: &str = "Nseqs\tMin.len\tMax.len\tAvg.len";

/// How results are presented
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print the column header to stderr before each row
    pub verbose: bool,
    /// Show the absolute path of each input instead of its file name
    pub full_path: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            full_path: false,
        }
    }
}

/// The column header for a format; `extended` adds the gap (FASTA) or quality
/// (FASTQ) columns.
pub fn header(format: Format, extended: bool) -> String {
    match (format, extended) {
        (Format::Fasta, true) => format!("{}\tMin.gap\tMax.gap\tAvg.gap\tFile", LENGTH_COLUMNS),
        (Format::Fastq, true) => format!("{}\tAvg.qual\tFile", LENGTH_COLUMNS),
        (_, false) => format!("{}\tFile", LENGTH_COLUMNS),
    }
}

pub fn fasta_row(summary: &FastaSummary, name: &str) -> String {
    let l = &summary.lengths;
    match &summary.gaps {
        Some(g) => format!(
            "{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{}",
            l.count, l.min, l.max, l.mean, g.min, g.max, g.mean, name
        ),
        None => format!("{}\t{}\t{}\t{}\t{}", l.count, l.min, l.max, l.mean, name),
    }
}

pub fn fastq_row(summary: &FastqSummary, name: &str) -> String {
    let l = &summary.lengths;
    match summary.mean_quality {
        Some(q) => format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            l.count, l.min, l.max, l.mean, q, name
        ),
        None => format!("{}\t{}\t{}\t{}\t{}", l.count, l.min, l.max, l.mean, name),
    }
}

/// The name printed in the last column: the file name, or the canonical
/// absolute path when `full_path` is set. Stdin (`-`) is always shown as `-`.
pub fn display_path(path: &Path, full_path: bool) -> Result<String, InfoError> {
    if path == Path::new("-") {
        return Ok(String::from("-"));
    }
    if full_path {
        let resolved =
            fs::canonicalize(path).map_err(|e| InfoError::new_path_resolution(path, &e))?;
        return Ok(resolved.display().to_string());
    }
    Ok(path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string()))
}

fn emit<O, E>(
    header: &str,
    row: &str,
    report: &ReportOptions,
    out: &mut O,
    err: &mut E,
) -> Result<(), InfoError>
where
    O: Write,
    E: Write,
{
    if report.verbose {
        writeln!(err, "{}", header).map_err(|e| InfoError::new_write(&e))?;
    }
    writeln!(out, "{}", row).map_err(|e| InfoError::new_write(&e))
}

/// Summarizes every FASTA input in order, one row each. The first error stops
/// the run; rows of earlier inputs have been written by then.
pub fn run_fasta<P, O, E>(
    inputs: &[P],
    options: &FastaOptions,
    report: &ReportOptions,
    out: &mut O,
    err: &mut E,
) -> Result<(), InfoError>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let header = header(Format::Fasta, options.gaps.is_some());
    for input in inputs {
        let input = input.as_ref();
        let mut source = ByteSource::open(input)?;
        let summary = fasta_summary(&mut source, options)?;
        let name = display_path(input, report.full_path)?;
        emit(&header, &fasta_row(&summary, &name), report, out, err)?;
    }
    Ok(())
}

/// FASTQ counterpart of [`run_fasta`].
pub fn run_fastq<P, O, E>(
    inputs: &[P],
    options: &FastqOptions,
    report: &ReportOptions,
    out: &mut O,
    err: &mut E,
) -> Result<(), InfoError>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let header = header(Format::Fastq, options.quality);
    for input in inputs {
        let input = input.as_ref();
        let mut source = ByteSource::open(input)?;
        let summary = fastq_summary(&mut source, options)?;
        let name = display_path(input, report.full_path)?;
        emit(&header, &fastq_row(&summary, &name), report, out, err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::errors::InfoErrorKind;
    use crate::scanner::MissingSet;
    use crate::stats::{GapSummary, LengthSummary};

    fn lengths(count: u64, min: u64, max: u64, mean: u64) -> LengthSummary {
        LengthSummary {
            count,
            min,
            max,
            mean,
        }
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            header(Format::Fasta, false),
            "Nseqs\tMin.len\tMax.len\tAvg.len\tFile"
        );
        assert_eq!(
            header(Format::Fasta, true),
            "Nseqs\tMin.len\tMax.len\tAvg.len\tMin.gap\tMax.gap\tAvg.gap\tFile"
        );
        assert_eq!(
            header(Format::Fastq, false),
            "Nseqs\tMin.len\tMax.len\tAvg.len\tFile"
        );
        assert_eq!(
            header(Format::Fastq, true),
            "Nseqs\tMin.len\tMax.len\tAvg.len\tAvg.qual\tFile"
        );
    }

    #[test]
    fn test_rows() {
        let fasta = FastaSummary {
            lengths: lengths(2, 2, 4, 3),
            gaps: None,
        };
        assert_eq!(fasta_row(&fasta, "x.fa"), "2\t2\t4\t3\tx.fa");

        let fasta = FastaSummary {
            lengths: lengths(3, 4, 8, 7),
            gaps: Some(GapSummary {
                min: 0.0,
                max: 1.0,
                mean: 0.5,
            }),
        };
        assert_eq!(
            fasta_row(&fasta, "x.fa"),
            "3\t4\t8\t7\t0.00\t1.00\t0.50\tx.fa"
        );

        let fastq = FastqSummary {
            lengths: lengths(2, 2, 4, 3),
            mean_quality: Some(20),
        };
        assert_eq!(fastq_row(&fastq, "r.fq"), "2\t2\t4\t3\t20\tr.fq");
        let fastq = FastqSummary {
            mean_quality: None,
            ..fastq
        };
        assert_eq!(fastq_row(&fastq, "r.fq"), "2\t2\t4\t3\tr.fq");
    }

    #[test]
    fn test_gap_fraction_has_two_decimals() {
        let fasta = FastaSummary {
            lengths: lengths(3, 1, 3, 2),
            gaps: Some(GapSummary {
                min: 1.0 / 3.0,
                max: 2.0 / 3.0,
                mean: 0.0,
            }),
        };
        assert_eq!(fasta_row(&fasta, "-"), "3\t1\t3\t2\t0.33\t0.67\t0.00\t-");
    }

    #[test]
    fn test_display_path() {
        assert_eq!(
            display_path(Path::new("some/dir/reads.fa.gz"), false).unwrap(),
            "reads.fa.gz"
        );
        assert_eq!(display_path(Path::new("reads.fa"), false).unwrap(), "reads.fa");
        assert_eq!(display_path(Path::new("-"), true).unwrap(), "-");

        let err = display_path(Path::new("does/not/exist.fa"), true).unwrap_err();
        assert_eq!(err.kind, InfoErrorKind::PathResolution);
    }

    #[test]
    fn test_full_path_is_absolute() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b">a\nAC\n").unwrap();
        let shown = display_path(file.path(), true).unwrap();
        assert!(PathBuf::from(&shown).is_absolute());
        assert_eq!(PathBuf::from(&shown), fs::canonicalize(file.path()).unwrap());
    }

    #[test]
    fn test_run_fasta_writes_header_and_row_per_file() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        a.write_all(b">s1\nACGT\n>s2\nAC\n").unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        b.write_all(b">s1\nNNNN\n").unwrap();

        let options = FastaOptions::with_gaps(MissingSet::default());
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_fasta(
            &[a.path(), b.path()],
            &options,
            &ReportOptions::default(),
            &mut out,
            &mut err,
        )
        .unwrap();

        let name_a = a.path().file_name().unwrap().to_string_lossy().into_owned();
        let name_b = b.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "2\t2\t4\t3\t0.00\t0.00\t0.00\t{}\n1\t4\t4\t4\t1.00\t1.00\t1.00\t{}\n",
                name_a, name_b
            )
        );
        let header = format!("{}\n", header(Format::Fasta, true));
        assert_eq!(String::from_utf8(err).unwrap(), header.repeat(2));
    }

    #[test]
    fn test_run_fastq_quiet() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        a.write_all(b"@r1\nACGT\n+\n!!!!\n").unwrap();

        let report = ReportOptions {
            verbose: false,
            full_path: false,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_fastq(
            &[a.path()],
            &FastqOptions { quality: true },
            &report,
            &mut out,
            &mut err,
        )
        .unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("1\t4\t4\t4\t0\t"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_stops_at_first_missing_file() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        a.write_all(b">a\nAC\n").unwrap();
        let inputs = [
            a.path().to_path_buf(),
            PathBuf::from("does/not/exist.fa"),
            a.path().to_path_buf(),
        ];
        let mut out = Vec::new();
        let mut err = Vec::new();
        let e = run_fasta(
            &inputs,
            &FastaOptions::default(),
            &ReportOptions::default(),
            &mut out,
            &mut err,
        )
        .unwrap_err();
        assert_eq!(e.kind, InfoErrorKind::Open);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
