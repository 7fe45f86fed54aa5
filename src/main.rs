use std::process::ExitCode;

fn main() -> ExitCode {
    match ai_context_bridge::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
