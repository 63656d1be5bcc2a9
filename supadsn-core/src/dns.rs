//! IPv4-only forward resolution.
//!
//! CI runners sometimes resolve Supabase hostnames to IPv6 only, which
//! breaks clients on IPv4-only networks. The pipeline pins direct hosts
//! to a literal IPv4 address via `hostaddr`; this module is that single
//! best-effort lookup behind a seam the tests can stub.

use std::net::{Ipv4Addr, SocketAddr};

use async_trait::async_trait;
use tracing::debug;

/// Forward resolution constrained to IPv4.
#[async_trait]
pub trait ResolveIpv4: Send + Sync {
    /// First IPv4 address for the host, or `None`. Never fails.
    async fn lookup_ipv4(&self, host: &str, port: u16) -> Option<Ipv4Addr>;
}

/// Resolver backed by the platform resolver via tokio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl ResolveIpv4 for SystemResolver {
    async fn lookup_ipv4(&self, host: &str, port: u16) -> Option<Ipv4Addr> {
        let addrs = match tokio::net::lookup_host((host, port)).await {
            Ok(addrs) => addrs,
            Err(error) => {
                debug!(host = %host, %error, "Forward lookup failed");
                return None;
            }
        };

        let first = addrs
            .filter_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(*v4.ip()),
                SocketAddr::V6(_) => None,
            })
            .next();

        if first.is_none() {
            debug!(host = %host, "No IPv4 address for host");
        }
        first
    }
}
