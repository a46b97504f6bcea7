use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tsx_repeat_gen::{
    backends::C::HeaderGenerator,
    count::validate_arguments,
};

/// Generate repeat.h, a header whose repeat macro invokes a macro for every index from 1 to COUNT.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repeat count, at least 2. Read as decimal first and as hex if that fails
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    counts: Vec<String>,

    /// Directory to write the header into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Log more (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let count = validate_arguments(&args.counts)?;
    let generator = HeaderGenerator::new().output_dir(args.output_dir);
    let path = generator.generate(count)?;

    let name = path.file_name().unwrap_or(path.as_os_str());
    println!("Created {} with n={}", name.to_string_lossy(), count);

    Ok(())
}
