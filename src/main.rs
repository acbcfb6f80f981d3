//! Command-line front end: scan each archive named on the command line.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rpm_inspect::inspect_file;

#[derive(Parser, Debug)]
#[command(version, about = "Structural inspector for RPM package archives")]
struct Args {
    /// Archive files to inspect
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A failed file must not stop the remaining ones from being scanned.
    let mut failed = false;
    for path in &args.files {
        if let Err(e) = inspect_file(path, &mut out) {
            eprintln!("ERROR: {}", e);
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}
