use std::process::ExitCode;

fn main() -> ExitCode {
    matchmap::cli::run()
}
