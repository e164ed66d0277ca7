// src/main.rs

use wordlist_feeder::errors::FeederError;
use wordlist_feeder::{cli, diagnostics, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = run(args).await {
        report_fatal(&err);
        std::process::exit(err.exit_code());
    }
}

fn report_fatal(err: &FeederError) {
    match err {
        FeederError::ConfigError(msg) => diagnostics::report(msg),
        FeederError::TomlError(_) => diagnostics::report(&err.to_string()),
        other => diagnostics::report(&format!("Unknown error occurred: {other}")),
    }
}
