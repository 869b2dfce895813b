//! Command-line front end: one-shot file commands and the interactive shell.

pub mod commands;
pub mod shell;
