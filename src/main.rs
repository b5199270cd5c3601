use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use mathtext::{
    cli::{generate, load_palette, Format, Input},
    Result,
};
use tracing::metadata::LevelFilter;

/// Renders math-annotated lesson text.
#[derive(Debug, Clone, Parser)]
#[command(name = "mathtext", version, author)]
struct CliArguments {
    /// Path to the input file, `-` or nothing for stdin
    input: Option<PathBuf>,

    /// The output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// JSON file mapping color names to display values, merged over the
    /// default palette
    #[arg(long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Path to the output file, stdout when absent
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Sets the level of logging verbosity:
    /// -v = warning & error, -vv = info, -vvv = debug, -vvvv = trace
    #[arg(short, long, action = ArgAction::Count)]
    verbosity: u8,
}

fn main() -> ExitCode {
    let args = CliArguments::parse();

    tracing_subscriber::fmt()
        .without_time()
        .with_writer(io::stderr)
        .with_max_level(level_filter(&args))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn level_filter(args: &CliArguments) -> LevelFilter {
    match args.verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn run(args: CliArguments) -> Result<()> {
    let palette = load_palette(args.palette.as_deref())?;
    let input = Input::from_arg(args.input).read()?;
    let content = generate(&input, args.format, &palette)?;

    match &args.output {
        Some(path) => fs::write(path, content)?,
        None => io::stdout().lock().write_all(content.as_bytes())?,
    }
    Ok(())
}
