// tscjs: TypeScript subset to JavaScript transpiler

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use crossterm::style::Stylize;
use log::LevelFilter;

use tscjs::codegen::{EmitOptions, MissingValue};
use tscjs::driver::{self, CompileRequest, DriverError};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MissingValueChoice {
    /// `let x = undefined;`
    Undefined,
    /// `let x;`
    Omit,
}

impl From<MissingValueChoice> for MissingValue {
    fn from(choice: MissingValueChoice) -> Self {
        match choice {
            MissingValueChoice::Undefined => MissingValue::Undefined,
            MissingValueChoice::Omit => MissingValue::Omit,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "tscjs",
    version,
    about = "Compile a TypeScript subset (.ts) to JavaScript (.js)"
)]
struct Cli {
    /// TypeScript source file, e.g. example.ts
    input: PathBuf,

    /// Output file. Defaults to the input path with a .js extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How to render a declaration that has no initializer
    #[arg(long, value_enum, default_value_t = MissingValueChoice::Undefined)]
    missing_value: MissingValueChoice,

    /// Do not echo the source and generated code
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    // Zero or several positionals are rejected here with a usage message.
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut request = CompileRequest::new(&cli.input).with_options(
        EmitOptions::new().with_missing_value(cli.missing_value.into()),
    );
    if let Some(output) = &cli.output {
        request = request.with_output(output);
    }

    match driver::compile_file(&request) {
        Ok(report) => {
            if !cli.quiet {
                println!(
                    "TypeScript Code from {}:\n{}",
                    report.input.display(),
                    report.source
                );
                println!("Generated JavaScript:\n{}", report.generated);
            }
            println!(
                "Successfully compiled {} to {}",
                report.input.display(),
                report.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err @ DriverError::NotFound { .. }) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{} {}", "Error during compilation:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
