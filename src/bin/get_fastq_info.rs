use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use seqinfo::report::{run_fastq, ReportOptions};
use seqinfo::FastqOptions;

/// Get basic summary info about fastq formatted files (gzipped or not).
///
/// Prints the number of reads and the min/max/average read length,
/// optionally with the average read quality.
#[derive(Parser, Debug)]
#[command(name = "get_fastq_info", version, about)]
struct Args {
    /// Do not print the column header to stderr
    #[arg(short = 'n', long = "noverbose")]
    noverbose: bool,

    /// Show the average read quality (ASCII_BASE=33)
    #[arg(short = 'q', long = "quality")]
    quality: bool,

    /// Print the full path to each file
    #[arg(short = 'p', long = "full-path")]
    full_path: bool,

    /// Input files in FASTQ format; `-` reads stdin
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = FastqOptions {
        quality: args.quality,
    };
    let report = ReportOptions {
        verbose: !args.noverbose,
        full_path: args.full_path,
    };

    let result = {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();
        run_fastq(&args.files, &options, &report, &mut out, &mut err)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
