//! supadsn CLI - argument handling and process output for the
//! connection-string resolver.

pub mod cli;
pub mod output;
