use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use redcalc::batch::{self, Mode};
use tracing_subscriber::EnvFilter;

/// redcalc evaluates calculator expressions such as `5 * ( 3 + 6 ) / 15`.
///
/// Tokens are separated by spaces. The left operand of `√` is the root
/// degree: `2 √ 25` is the square root of 25.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the contents as the path of a file to read, one expression per
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Types the contents key by key on a calculator display. `=` computes,
    /// `<` erases and `c` clears; spaces are ignored.
    #[arg(short, long, conflicts_with = "deviation")]
    keys: bool,

    /// Prints the sample standard deviation of the numbers in the contents.
    /// Reads standard input when no contents are given.
    #[arg(short, long)]
    deviation: bool,

    /// Prints the postfix form of each expression instead of its value.
    #[arg(short, long, conflicts_with_all = ["keys", "deviation"])]
    postfix: bool,

    contents: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn read_input(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(contents) => Ok(contents.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        },
    }
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read the input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mode = if args.deviation {
        Mode::Deviation
    } else if args.keys {
        Mode::Keys
    } else if args.postfix {
        Mode::Postfix
    } else {
        Mode::Evaluate
    };

    let report = batch::run(mode, &input);
    for line in &report.output {
        println!("{line}");
    }
    for error in &report.errors {
        eprintln!("{error}");
    }

    if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
