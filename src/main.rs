use std::process::ExitCode;

fn main() -> ExitCode {
    proj2md::cli::run()
}
