use std::process::ExitCode;

use palc::Parser;
use shoebill::cli::*;

fn main() -> ExitCode {
	shoebill::init_tracing();
	let mode = Cli::parse().mode;
	let runner = mode.shoebill();

	match mode {
		Mode::File { path, .. } => match runner.run_file(&path) {
			Ok(_) => ExitCode::SUCCESS,
			Err(e) => {
				eprintln!("Failed run file: {e}");
				ExitCode::FAILURE
			}
		},
		Mode::Repl => {
			runner.run_prompt();
			ExitCode::SUCCESS
		}
	}
}
