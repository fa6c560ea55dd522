// deno-scaffold - Deno + React project generator
// Main CLI entry point

use std::process;

use deno_scaffold::cli::Cli;
use deno_scaffold::utils::error::UserError;
use deno_scaffold::utils::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let cli = Cli::parse_normalized();

    let result = cli.execute().await;

    if let Err(err) = result {
        tracing::debug!(path = ?err.path(), error = ?err, "generation failed");
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
