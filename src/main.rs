use std::{fs, io::Write, path::PathBuf, process};

use anyhow::{bail, Context};
use clap::Parser;
use log::LevelFilter;
use tapevm::{Config, Interpreter};

#[derive(Parser, Debug)]
#[command(name = "tapevm")]
#[command(version)]
#[command(about = "Interpreter for an eight-instruction tape language")]
struct Args {
    /// Program file to run
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    program: Option<PathBuf>,

    /// Run the given program text instead of a file
    #[arg(short, long)]
    eval: Option<String>,

    /// Input text consumed by `,`
    #[arg(short, long, conflicts_with = "input_file")]
    input: Option<String>,

    /// Read the input text from a file
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Width of a cell in bits
    #[arg(long, default_value_t = 8)]
    cell_bits: u32,

    /// Stop the run after this many steps
    #[arg(long)]
    step_limit: Option<u64>,

    /// Print the output produced before a failure
    #[arg(long)]
    show_partial: bool,

    /// Log the run to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}

/// Returns whether the program itself succeeded.
fn run(args: &Args) -> anyhow::Result<bool> {
    let program = match (&args.eval, &args.program) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("cannot read program {}", path.display()))?,
        (None, None) => bail!("a program file or --eval is required"),
    };

    let input = match (&args.input, &args.input_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("cannot read input {}", path.display()))?,
        (None, None) => String::new(),
    };

    let config = Config::default()
        .with_cell_bits(args.cell_bits)
        .with_step_limit(args.step_limit);
    let interpreter = Interpreter::new(config)?;

    let mut stdout = std::io::stdout();
    match interpreter.interpret(&program, &input) {
        Ok(output) => {
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(true)
        }
        Err(failure) => {
            if args.show_partial {
                stdout.write_all(failure.partial_output.as_bytes())?;
                stdout.flush()?;
            }
            eprintln!("{}", failure);
            Ok(false)
        }
    }
}
