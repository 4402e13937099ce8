use clap::Parser;
use log::{error, LevelFilter};

use mdheader::{Error, ReadMode, Source};

use std::{
    io::{
        self,
        Write
    },
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
#[clap(after_help = "If no input file is given, the header is read from stdin.\n\
    Use -- before paths that start with a dash, e.g. gen-info -- -rom.bin")]
struct Args {
    /// ROM images to inspect, in order.
    #[clap(parse(from_os_str))]
    files: Vec<PathBuf>,

    /// Reject inputs shorter than a full header instead of zero-filling them.
    #[clap(short, long)]
    strict: bool,

    /// Logging. Repeat for more detail.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mode = if args.strict {
        ReadMode::Strict
    } else {
        ReadMode::Lenient
    };

    let sources = if args.files.is_empty() {
        vec![Source::Stdin]
    } else {
        args.files.into_iter().map(Source::File).collect()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A bad source never stops the run, and never changes the exit status.
    for source in sources {
        let report = mdheader::inspect(source, mode);
        match report.outcome {
            Ok(fields) => if let Err(e) = mdheader::write_report(&mut out, &fields) {
                error!("couldn't write report: {}", e);
                return;
            },
            Err(e @ Error::SourceUnavailable { .. }) => {
                let _ = out.flush();
                eprintln!("{}", e);
            },
            Err(e) => {
                let _ = out.flush();
                eprintln!("{}: {}", report.source, e);
            },
        }
    }
}
