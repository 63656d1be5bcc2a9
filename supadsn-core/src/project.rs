//! Project-ref derivation and pooler username rewriting.
//!
//! The project ref is the opaque slug identifying a hosted database. It
//! can hide in three places: the direct hostname (`db.<ref>.supabase.co`),
//! a pooler-qualified username (`postgres.<ref>`), or a `reference=<ref>`
//! token inside the `options` query parameter. Extractors are tried in
//! that order; an empty result means "unknown", never a valid ref.

use crate::host::DIRECT_HOST_PREFIX;
use crate::params::ConnectionParams;

/// Derive the project ref from whichever part of the params carries it.
///
/// Returns an empty string when none of the extractors match.
pub fn project_from_params(params: &ConnectionParams) -> String {
    let extractors = [from_host, from_username, from_options];
    extractors
        .iter()
        .find_map(|extract| extract(params))
        .unwrap_or_default()
}

fn from_host(params: &ConnectionParams) -> Option<String> {
    let host = params.host.to_ascii_lowercase();
    if !host.starts_with(DIRECT_HOST_PREFIX) || !host.contains(".supabase") {
        return None;
    }
    host.strip_prefix(DIRECT_HOST_PREFIX)?
        .split('.')
        .next()
        .map(str::to_string)
}

fn from_username(params: &ConnectionParams) -> Option<String> {
    let (_, project) = params.username.split_once('.')?;
    Some(project.to_string())
}

fn from_options(params: &ConnectionParams) -> Option<String> {
    params
        .query
        .iter()
        .filter(|(key, _)| key == "options")
        .flat_map(|(_, value)| value.split(','))
        .find_map(|option| option.strip_prefix("reference="))
        .map(str::to_string)
}

/// Qualify a username with the project ref, as the pooler requires.
///
/// Takes the portion of `username` before its first dot ("postgres" when
/// empty) and appends `.<project>`. Idempotent for a fixed project.
pub fn username_with_project(username: &str, project: &str) -> String {
    let base = match username.split_once('.') {
        Some((base, _)) => base,
        None if username.is_empty() => "postgres",
        None => username,
    };
    format!("{base}.{project}")
}
