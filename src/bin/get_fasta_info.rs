use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use seqinfo::report::{run_fasta, ReportOptions};
use seqinfo::{FastaOptions, MissingSet};

/// Get basic summary info about fasta formatted files (gzipped or not).
///
/// Prints the number of sequences and the min/max/average sequence length,
/// optionally with the min/max/average fraction of missing data.
#[derive(Parser, Debug)]
#[command(name = "get_fasta_info", version, about)]
struct Args {
    /// Do not print the column header to stderr
    #[arg(short = 'n', long = "noverbose")]
    noverbose: bool,

    /// Count missing data symbols (default Nn?Xx-)
    #[arg(short = 'g', long = "gaps")]
    gaps: bool,

    /// Symbols counted as missing data; implies -g
    #[arg(
        short = 'm',
        long = "missing",
        value_name = "CHARS",
        allow_hyphen_values = true
    )]
    missing: Option<MissingSet>,

    /// Print the full path to each file
    #[arg(short = 'p', long = "full-path")]
    full_path: bool,

    /// Input files in FASTA format; `-` reads stdin
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let gaps = match (args.missing, args.gaps) {
        (Some(missing), _) => Some(missing),
        (None, true) => Some(MissingSet::default()),
        (None, false) => None,
    };
    let options = FastaOptions { gaps };
    let report = ReportOptions {
        verbose: !args.noverbose,
        full_path: args.full_path,
    };

    let result = {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();
        run_fasta(&args.files, &options, &report, &mut out, &mut err)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
