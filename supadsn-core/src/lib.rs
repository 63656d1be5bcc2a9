//! # supadsn-core
//!
//! Connection-parameter resolution for Supabase Postgres in CI.
//!
//! Given partial, possibly-conflicting sources of truth (an explicit
//! connection URL, discrete password/project values, a cached pooler
//! template and a live management API lookup), this crate produces one
//! canonical, normalized connection string a migration tool can use on
//! IPv4-only runners.
//!
//! ## Example
//!
//! ```rust,ignore
//! use supadsn_core::dns::SystemResolver;
//! use supadsn_core::pipeline::{ResolveOptions, Sources, resolve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ResolveOptions {
//!         sources: Sources {
//!             password: Some("secret".into()),
//!             project_ref: Some("abcproj".into()),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let url = resolve(&options, &SystemResolver).await?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```

pub mod dns;
pub mod error;
pub mod host;
pub mod params;
pub mod pipeline;
pub mod pooler;
pub mod project;

pub use dns::{ResolveIpv4, SystemResolver};
pub use error::{ResolveError, ResolveResult};
pub use params::ConnectionParams;
pub use pipeline::{ResolveOptions, Sources, resolve};
pub use pooler::PoolerMode;
