//! LEA-LOGINEO-Tool build driver.
//!
//! This binary freezes the LEA-LOGINEO-Tool Python application into a
//! standalone executable or application bundle in the project root.

use lea_logineo_packager::cli;
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = match cli::parse_args() {
        Ok(args) => {
            // Initialize logging
            cli::init_logging(args.verbose);

            // Run CLI and get exit code
            cli::run(args).await
        }
        Err(err) => cli::usage_error(err),
    };

    process::exit(exit_code);
}
