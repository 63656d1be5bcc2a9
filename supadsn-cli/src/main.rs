//! supadsn - resolve an IPv4-friendly Supabase connection string for CI.

use clap::Parser;
use tracing::debug;

use supadsn_cli::cli::Cli;
use supadsn_cli::output;
use supadsn_core::dns::SystemResolver;
use supadsn_core::error::ResolveResult;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> ResolveResult<()> {
    let cli = Cli::parse();
    let options = cli.into_options();
    debug!(
        template_path = %options.template_path.display(),
        api_base = %options.api_base,
        "Resolving connection string"
    );

    let url = supadsn_core::resolve(&options, &SystemResolver).await?;
    output::result(&url);
    Ok(())
}

/// Diagnostics go to stderr so stdout stays machine-readable.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
