//! CLI argument definitions using clap.
//!
//! Every flag mirrors the environment variable CI pipelines already set,
//! via clap's `env` feature, so the tool works with no arguments at all.

use std::path::PathBuf;

use clap::Parser;

use supadsn_core::pipeline::{ResolveOptions, Sources};
use supadsn_core::pooler::{DEFAULT_API_BASE, PoolerMode, TEMPLATE_CACHE_PATH};

/// Resolve an IPv4-friendly Supabase connection string for CI migrations
#[derive(Parser, Debug)]
#[command(name = "supadsn")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(
    about = "Resolve an IPv4-friendly Supabase connection string",
    long_about = None
)]
pub struct Cli {
    /// Explicit connection URL; discrete values below fill in its gaps
    #[arg(long, env = "SUPABASE_DB_URL", hide_env_values = true)]
    pub db_url: Option<String>,

    /// Database password
    #[arg(long, env = "SUPABASE_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Project ref (the slug in db.<ref>.supabase.co)
    #[arg(long, env = "SUPABASE_PROJECT_REF")]
    pub project_ref: Option<String>,

    /// Management API token, enabling the live pooler config lookup
    #[arg(long, env = "SUPABASE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Management API base URL
    #[arg(long, env = "SUPABASE_API_URL", default_value = DEFAULT_API_BASE)]
    pub api_url: String,

    /// Explicit pooler port, overriding the mode's port
    #[arg(long, env = "SUPABASE_POOLER_PORT")]
    pub pooler_port: Option<u16>,

    /// Pooler mode: session (5432) or transaction (6543)
    #[arg(long, env = "SUPABASE_POOLER_MODE", default_value_t = PoolerMode::Session)]
    pub pooler_mode: PoolerMode,

    /// Path of the Supabase CLI's cached pooler template
    #[arg(long, env = "SUPADSN_TEMPLATE_PATH", default_value = TEMPLATE_CACHE_PATH)]
    pub template_path: PathBuf,
}

impl Cli {
    /// Convert parsed arguments into resolution options.
    pub fn into_options(self) -> ResolveOptions {
        ResolveOptions {
            sources: Sources {
                db_url: self.db_url,
                password: self.password,
                project_ref: self.project_ref,
                pooler_port: self.pooler_port,
                pooler_mode: self.pooler_mode,
            },
            template_path: self.template_path,
            access_token: self.access_token,
            api_base: self.api_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::try_parse_from(["supadsn"]).unwrap();
        assert_eq!(cli.api_url, DEFAULT_API_BASE);
        assert_eq!(cli.pooler_mode, PoolerMode::Session);
        assert_eq!(cli.template_path, PathBuf::from(TEMPLATE_CACHE_PATH));
    }

    #[test]
    fn invalid_pooler_mode_is_rejected() {
        let result = Cli::try_parse_from(["supadsn", "--pooler-mode", "statement"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_map_into_options() {
        let cli = Cli::try_parse_from([
            "supadsn",
            "--password",
            "secret",
            "--project-ref",
            "abcproj",
            "--pooler-mode",
            "transaction",
            "--pooler-port",
            "7654",
        ])
        .unwrap();
        let options = cli.into_options();
        assert_eq!(options.sources.password.as_deref(), Some("secret"));
        assert_eq!(options.sources.project_ref.as_deref(), Some("abcproj"));
        assert_eq!(options.sources.pooler_mode, PoolerMode::Transaction);
        assert_eq!(options.sources.pooler_port, Some(7654));
    }
}
