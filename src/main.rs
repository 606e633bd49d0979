use tasktime::commands::Cli;
use tasktime::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasktime=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = Cli::menu() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
