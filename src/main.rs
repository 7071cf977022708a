use bftape::Interpreter;
use clap::Parser;
use clap::error::ErrorKind;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bftape", about = "Run a Brainfuck source file")]
struct Cli {
    /// Path to the Brainfuck source file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print a step-by-step table of operations instead of executing
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let program = env::args().next().unwrap_or_else(|| String::from("bftape"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help/--version are not failures; everything else (missing
            // file, stray arguments, unknown flags) exits 1.
            let is_help = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if is_help {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        }
    };

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!(
                "{program}: source file \"{}\" could not be opened: {err}",
                cli.file.display()
            );
            return ExitCode::from(1);
        }
    };

    let mut bf = Interpreter::new(&source);
    let result = if cli.debug {
        bf.run_debug()
    } else {
        bf.run_stdio()
    };

    if let Err(err) = result {
        let _ = io::stdout().flush();
        eprintln!("{program}: {err}");
        return ExitCode::from(1);
    }

    let _ = io::stdout().flush();
    ExitCode::SUCCESS
}
