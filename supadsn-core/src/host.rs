//! Hostname classification for Supabase endpoints.
//!
//! Pure suffix predicates, total over arbitrary strings. A "direct" host
//! is the per-project `db.<ref>.supabase.co` endpoint; a "pooler" host is
//! the shared Supavisor front (`*.pooler.supabase.com`).

/// Suffixes a Supabase database hostname can end with.
const SUPABASE_SUFFIXES: [&str; 3] = [".supabase.co", ".supabase.net", ".supabase.com"];

/// Suffixes identifying the shared connection pooler.
const POOLER_SUFFIXES: [&str; 2] = [".pooler.supabase.com", ".pooler.supabase.net"];

/// Prefix of a direct (non-pooler) per-project hostname.
pub const DIRECT_HOST_PREFIX: &str = "db.";

/// Whether the host is any Supabase-operated database endpoint.
pub fn is_supabase_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    SUPABASE_SUFFIXES
        .iter()
        .any(|suffix| host.ends_with(suffix))
}

/// Whether the host is a shared connection-pooler endpoint.
pub fn is_pooler_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    POOLER_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
}
