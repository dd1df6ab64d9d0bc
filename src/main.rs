mod classify;
mod error;
mod format;
mod listing;
mod metadata;
mod reader;
mod types;

use clap::Parser;
use listing::ListingOptions;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "poorls",
    version,
    about = "Lists files in given or current directory",
    after_help = "Poor man's ls"
)]
struct Args {
    /// Name of directory to list the contents of
    #[arg(default_value = ".")]
    dirname: String,

    /// Presents more details about files in columnar format
    #[arg(long, short = 'l')]
    long_format: bool,

    /// Adds an extra character to the end of the printed filename to indicate its type
    #[arg(long, short = 'F')]
    filetype: bool,
}

impl From<Args> for ListingOptions {
    fn from(args: Args) -> Self {
        ListingOptions {
            dirname: args.dirname,
            long_format: args.long_format,
            filetype: args.filetype,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = ListingOptions::from(Args::parse());

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = listing::run(&opts, &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
