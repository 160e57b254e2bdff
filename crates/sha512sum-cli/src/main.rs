use sha512sum_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr so the CLI doesn't crash.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match cli::run_from_args() {
        Ok(status) => std::process::exit(status.code()),
        Err(err) => {
            eprintln!("sha512sum: {:#}", err);
            std::process::exit(1);
        }
    }
}
