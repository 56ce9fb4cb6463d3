//! LS-8 virtual machine CLI.
//!
//! This binary loads a `.ls8` program image and runs it to completion. It performs:
//! 1. **Loading:** Parses the text image; a load failure means the machine never starts.
//! 2. **Execution:** Runs the dispatcher loop; PRN output goes to stdout.
//! 3. **Reporting:** Maps the outcome to an exit code (0 halt, 1 fault, 2 load failure)
//!    and optionally prints a JSON run summary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ls8_core::{Cpu, Fault, sim::loader};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit virtual machine",
    long_about = "Run an LS-8 program image.\n\nImages are text files with one 8-bit binary string per line; '#' starts a comment.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 programs/mult.ls8 --json\n  RUST_LOG=ls8_core=debug ls8 programs/call.ls8"
)]
struct Cli {
    /// Program image to execute (.ls8 text format).
    file: PathBuf,

    /// Print a JSON run summary to stdout after the program's own output.
    #[arg(long)]
    json: bool,

    /// Enable per-instruction trace logging (overrides RUST_LOG).
    #[arg(long)]
    trace: bool,
}

/// Machine-readable outcome of one run, for `--json`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum RunSummary {
    /// The program executed a HLT instruction.
    Halt {
        /// Address of the HLT opcode.
        pc: usize,
        /// Instructions retired, HLT included.
        instructions: u64,
    },
    /// The run ended on a fatal condition.
    Fault {
        /// Human-readable fault description.
        error: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let image = match loader::read_image(&cli.file) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return ExitCode::from(2);
        }
    };

    let mut cpu = Cpu::new();
    if let Err(e) = cpu.load(&image) {
        eprintln!("[!] FATAL: {e}");
        return ExitCode::from(2);
    }

    let mut stdout = io::stdout().lock();
    let result = cpu.run(&mut stdout);
    stdout.flush().ok();

    match result {
        Ok(halt) => {
            if cli.json {
                print_summary(&RunSummary::Halt {
                    pc: halt.pc,
                    instructions: halt.instructions,
                });
            }
            ExitCode::SUCCESS
        }
        Err(fault) => {
            eprintln!("[!] FATAL: {fault}");
            if matches!(fault, Fault::UnrecognizedOpcode { .. }) {
                cpu.regs.dump();
            }
            if cli.json {
                print_summary(&RunSummary::Fault {
                    error: fault.to_string(),
                });
            }
            ExitCode::FAILURE
        }
    }
}

/// Prints a run summary as one JSON line on stdout.
fn print_summary(summary: &RunSummary) {
    match serde_json::to_string(summary) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[!] could not serialize run summary: {e}"),
    }
}
