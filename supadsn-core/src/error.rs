//! Error types for connection-string resolution.

use thiserror::Error;

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Fatal resolution errors.
///
/// Only conditions that make a usable connection string impossible are
/// errors. Everything else (missing pooler template, failed DNS lookup,
/// unrecognized host suffix) degrades to a less-enriched result and is
/// reported through `tracing` instead.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither a connection URL nor a password/project pair was supplied.
    #[error(
        "Supabase connection string missing. Provide SUPABASE_DB_URL or SUPABASE_DB_PASSWORD."
    )]
    MissingSource,

    /// No password in the URL and no password source.
    #[error(
        "Supabase connection password missing. Set SUPABASE_DB_PASSWORD or include it in SUPABASE_DB_URL."
    )]
    MissingPassword,
}
