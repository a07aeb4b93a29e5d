//! Interactive prompt
//!
//! One location per line; `:units` toggles and persists the unit,
//! `:quit` (or end of input) leaves.

use std::io::Write;

use application::WeatherSession;
use domain::LocationQuery;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::render::{NO_DATA, render_session, render_units};

const HELP: &str = "\
Type a city (e.g. London or Paris,FR) or coordinates (52.52,13.405).
  :units   toggle between metric and imperial
  :help    show this help
  :quit    exit";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Blank line
    Empty,
    /// Weather lookup
    Lookup(LocationQuery),
    /// Flip the unit preference
    ToggleUnits,
    /// Print usage
    Help,
    /// Leave the prompt
    Quit,
    /// Unrecognized input, with the reason
    Invalid(String),
}

impl ShellCommand {
    /// Parse a line typed at the prompt
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            ":units" | ":u" => Self::ToggleUnits,
            ":help" | ":h" | "?" => Self::Help,
            ":quit" | ":q" | "exit" | "quit" => Self::Quit,
            cmd if cmd.starts_with(':') => Self::Invalid(format!("unknown command {cmd}")),
            input => match LocationQuery::parse(input) {
                Ok(query) => Self::Lookup(query),
                Err(e) => Self::Invalid(e.to_string()),
            },
        }
    }
}

/// Run the prompt until `:quit` or end of input
pub async fn run<R, W>(session: &mut WeatherSession, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render_units(session.units()))?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match ShellCommand::parse(&line) {
            ShellCommand::Empty => {},
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::ToggleUnits => {
                let units = session.toggle_units().await;
                writeln!(out, "{}", render_units(units))?;
                if session.current().is_some() {
                    write!(out, "{}", render_session(session, units))?;
                }
            },
            ShellCommand::Lookup(query) => {
                debug!(query = %query, "Shell lookup");
                if session.lookup(&query).await.has_data() {
                    write!(out, "{}", render_session(session, session.units()))?;
                } else {
                    writeln!(out, "{NO_DATA}")?;
                }
            },
            ShellCommand::Invalid(reason) => writeln!(out, "{reason}")?,
        }
    }
    Ok(())
}
