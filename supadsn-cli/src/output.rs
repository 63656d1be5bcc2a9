//! Process output helpers.
//!
//! stdout carries exactly one thing: the resolved connection string.
//! Everything human-facing goes to stderr, and fatal failures use GitHub
//! Actions workflow annotations so they surface in the job summary.

/// Write the resolved connection string to stdout, no trailing decoration.
pub fn result(url: &str) {
    println!("{url}");
}

/// Write a workflow error annotation to stderr.
pub fn error(text: &str) {
    eprintln!("::error::{text}");
}
