#![no_main]
use libfuzzer_sys::fuzz_target;

use seqinfo::summary::fasta_summary_from_bytes;
use seqinfo::{FastaOptions, MissingSet};

fuzz_target!(|data: &[u8]| {
    let summary = fasta_summary_from_bytes(data, &FastaOptions::with_gaps(MissingSet::default()));
    let l = summary.lengths;
    if l.count > 0 {
        assert!(l.min <= l.mean && l.mean <= l.max);
    }
    let g = summary.gaps.unwrap();
    assert!((0.0..=1.0).contains(&g.min));
    assert!((0.0..=1.0).contains(&g.max));
    assert!((0.0..=1.0).contains(&g.mean));
});
