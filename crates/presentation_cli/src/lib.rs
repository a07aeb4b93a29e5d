//! Weather CLI building blocks
//!
//! Argument definitions, text rendering and the interactive prompt used by
//! the `weather-cli` binary.

pub mod cli;
pub mod render;
pub mod shell;

#[cfg(test)]
mod testing;
