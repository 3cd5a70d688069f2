use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::diff;

const FASTA_HEADER: &str = "Nseqs\tMin.len\tMax.len\tAvg.len\tFile\n";
const GAP_HEADER: &str = "Nseqs\tMin.len\tMax.len\tAvg.len\tMin.gap\tMax.gap\tAvg.gap\tFile\n";
const QUAL_HEADER: &str = "Nseqs\tMin.len\tMax.len\tAvg.len\tAvg.qual\tFile\n";

fn fasta_info() -> Command {
    Command::cargo_bin("get_fasta_info").unwrap()
}

fn fastq_info() -> Command {
    Command::cargo_bin("get_fastq_info").unwrap()
}

#[test]
fn fasta_lengths_with_header_on_stderr() {
    fasta_info()
        .arg("tests/data/test.fa")
        .assert()
        .success()
        .stdout(diff("2\t4\t10\t7\ttest.fa\n"))
        .stderr(diff(FASTA_HEADER));
}

#[test]
fn noverbose_suppresses_header() {
    fasta_info()
        .args(["-n", "tests/data/test.fa"])
        .assert()
        .success()
        .stdout(diff("2\t4\t10\t7\ttest.fa\n"))
        .stderr(diff(""));
}

#[test]
fn fasta_gaps_with_default_missing_set() {
    fasta_info()
        .args(["-g", "tests/data/gaps.fa"])
        .assert()
        .success()
        .stdout(diff("3\t4\t8\t7\t0.00\t1.00\t0.50\tgaps.fa\n"))
        .stderr(diff(GAP_HEADER));
}

#[test]
fn custom_missing_set_implies_gap_mode() {
    // a: 3 of 8, b: none, c: 4 of 4
    fasta_info()
        .args(["-n", "-m", "N", "tests/data/gaps.fa"])
        .assert()
        .success()
        .stdout(diff("3\t4\t8\t7\t0.00\t1.00\t0.46\tgaps.fa\n"));
}

#[test]
fn missing_set_may_start_with_hyphen() {
    fasta_info()
        .args(["-n", "-m", "-N", "tests/data/gaps.fa"])
        .assert()
        .success()
        .stdout(diff("3\t4\t8\t7\t0.00\t1.00\t0.50\tgaps.fa\n"));
}

#[test]
fn empty_missing_set_is_a_usage_error() {
    fasta_info()
        .args(["-m", "", "tests/data/gaps.fa"])
        .assert()
        .failure()
        .stdout(diff(""));
}

#[test]
fn empty_file_reports_zeros() {
    fasta_info()
        .args(["-n", "tests/data/empty.fa"])
        .assert()
        .success()
        .stdout(diff("0\t0\t0\t0\tempty.fa\n"));
    fasta_info()
        .args(["-n", "-g", "tests/data/empty.fa"])
        .assert()
        .success()
        .stdout(diff("0\t0\t0\t0\t0.00\t0.00\t0.00\tempty.fa\n"));
}

#[cfg(feature = "compression")]
#[test]
fn compressed_input_is_transparent() {
    fasta_info()
        .args(["-n", "tests/data/test.fa.gz", "tests/data/test.fa.bz2", "tests/data/test.fa.xz"])
        .assert()
        .success()
        .stdout(diff(
            "2\t4\t10\t7\ttest.fa.gz\n2\t4\t10\t7\ttest.fa.bz2\n2\t4\t10\t7\ttest.fa.xz\n",
        ));
}

#[test]
fn one_row_and_one_header_per_file() {
    fasta_info()
        .args(["tests/data/test.fa", "tests/data/gaps.fa"])
        .assert()
        .success()
        .stdout(diff("2\t4\t10\t7\ttest.fa\n3\t4\t8\t7\tgaps.fa\n"))
        .stderr(diff(FASTA_HEADER.repeat(2)));
}

#[test]
fn full_path_is_printed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b">a\nACGT\n>b\n\n").unwrap();
    file.flush().unwrap();
    let absolute = fs::canonicalize(file.path()).unwrap();

    fasta_info()
        .arg("-n")
        .arg("-p")
        .arg(file.path())
        .assert()
        .success()
        .stdout(diff(format!("2\t0\t4\t2\t{}\n", absolute.display())));
}

#[test]
fn missing_file_is_fatal() {
    fasta_info()
        .args(["tests/data/test.fa", "tests/data/does_not_exist.fa", "tests/data/gaps.fa"])
        .assert()
        .failure()
        .code(1)
        .stdout(diff("2\t4\t10\t7\ttest.fa\n"))
        .stderr(predicate::str::contains("Error: failed in opening file"));
}

#[test]
fn no_input_is_a_usage_error() {
    fasta_info().assert().failure();
    fastq_info().assert().failure();
}

#[test]
fn version_is_printed() {
    fasta_info()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fastq_lengths_and_quality() {
    fastq_info()
        .arg("tests/data/test.fq")
        .assert()
        .success()
        .stdout(diff("2\t2\t4\t3\ttest.fq\n"))
        .stderr(diff(FASTA_HEADER));
    fastq_info()
        .args(["-q", "tests/data/test.fq"])
        .assert()
        .success()
        .stdout(diff("2\t2\t4\t3\t20\ttest.fq\n"))
        .stderr(diff(QUAL_HEADER));
}

#[cfg(feature = "compression")]
#[test]
fn fastq_gz() {
    fastq_info()
        .args(["-n", "-q", "tests/data/test.fq.gz"])
        .assert()
        .success()
        .stdout(diff("2\t2\t4\t3\t20\ttest.fq.gz\n"));
}
