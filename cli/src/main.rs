//! ci-helpers - build-pipeline helpers

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use ci_helpers::cli::Cli;
use ci_helpers::domain::HelperError;
use ci_helpers::output::{OutputContext, json};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let (as_json, no_color) = (cli.json, cli.no_color);
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            let kind = HelperError::find_in(&e);
            let message = format!("{e:#}");
            let printed_json = as_json
                && json::format_error(&message, kind.map_or("error", HelperError::code))
                    .map(|obj| println!("{obj}"))
                    .is_ok();
            if !printed_json {
                OutputContext::new(no_color, false).error(&format!("Error: {message}"));
            }
            ExitCode::from(kind.map_or(1, HelperError::exit_code))
        }
    }
}
