use std::process::ExitCode;

fn main() -> ExitCode {
    pagemap::cli::run()
}
