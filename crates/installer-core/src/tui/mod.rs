//! Charm-style interactive prompts (feature `tui`)

pub mod prompts;

pub use prompts::{run, InstallArgs};
