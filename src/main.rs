use attrition::commands::Cli;
use attrition::libs::messages::macros::is_debug_mode;
use attrition::msg_error;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env before anything reads ATTRITION_DB or ATTRITION_DEBUG
    let _ = dotenv();
    init_tracing();

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let default_filter = if is_debug_mode() { "attrition=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // Diagnostics stay off stdout, which carries the query results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
