use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use stl_ascii::{runner, RunConfig};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = RunConfig::from_env();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // Conversion errors are already reported on stdout; only a broken pipe lands here.
    if let Err(e) = runner::run(&args, &mut out, &config) {
        eprintln!("{}", e);
    }
    ExitCode::SUCCESS
}
