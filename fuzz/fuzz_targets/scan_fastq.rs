#![no_main]
use libfuzzer_sys::fuzz_target;

use seqinfo::summary::fastq_summary_from_bytes;
use seqinfo::FastqOptions;

fuzz_target!(|data: &[u8]| {
    let summary = fastq_summary_from_bytes(data, &FastqOptions { quality: true });
    let l = summary.lengths;
    assert!(l.count == 0 || (l.min <= l.mean && l.mean <= l.max));
});
