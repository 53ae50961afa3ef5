//! mb — offline CLI: load a request, run the distribution pipeline, render
//! artifacts, verify the diagnostic sums, map failures to stable exit codes.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Request shape/date problems.
    pub const VALIDATION: i32 = 2;
    /// Filesystem read/write failures.
    pub const IO: i32 = 4;
    /// Diagnostic sums disagree with the targets beyond quantization error.
    pub const SELF_CHECK: i32 = 5;
}

use std::process::ExitCode;

use clap::Parser;

use args::Args;
use mb_io::IoError;
use mb_pipeline::{distribute, DistributeOptions};

#[derive(Debug)]
enum MainError {
    Validation(String),
    Io(String),
    SelfCheck(String),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let (code, msg) = match &e {
                MainError::Validation(m) => (exitcodes::VALIDATION, m),
                MainError::Io(m) => (exitcodes::IO, m),
                MainError::SelfCheck(m) => (exitcodes::SELF_CHECK, m),
            };
            eprintln!("mb: error: {msg}");
            code
        }
    };

    ExitCode::from(rc as u8)
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let inputs = mb_io::load_request(&args.input).map_err(map_io_err)?;

    if args.validate_only {
        if !args.quiet {
            eprintln!("validate-only: request OK");
        }
        return Ok(());
    }

    let opts = DistributeOptions {
        seed: args.seed.unwrap_or(0),
        ..DistributeOptions::default()
    };
    let result = distribute(&inputs, &opts);

    if !result.verifies() {
        return Err(MainError::SelfCheck(format!(
            "diagnostic sums disagree with targets: {:?}",
            result.checks
        )));
    }

    let renders: Vec<&str> = if args.render.is_empty() {
        vec!["json"]
    } else {
        args.render.iter().map(String::as_str).collect()
    };

    for render in renders {
        let (name, bytes) = match render {
            "csv" => ("distribution.csv", mb_report::render_csv(&result).into_bytes()),
            _ => ("distribution.json", mb_report::render_json_bytes(&result)),
        };
        let path = mb_io::write_artifact(&args.out, name, &bytes).map_err(map_io_err)?;
        if !args.quiet {
            println!("wrote {}", path.display());
        }
    }

    if !args.quiet {
        println!(
            "target quantity: {}  target value: {}  months: {}",
            result.target_quantity.format(),
            result.target_value.format(),
            result.rows.len()
        );
    }

    Ok(())
}

fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Request(m) => MainError::Validation(m),
        IoError::Read(m) | IoError::Write(m) => MainError::Io(m),
    }
}
