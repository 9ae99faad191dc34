//! Sift CLI - Interactive shell over a sift database.

pub mod input;
pub mod logging;
pub mod shell;

pub use input::{spawn_reader, InterruptibleLines};
pub use shell::{Command, Flow, Shell, UsageError, PROMPT};
