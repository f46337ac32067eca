//! REPL Module
//!
//! The interactive read-eval-print loop and its commands.

pub mod commands;
mod input;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::Result;

pub use commands::{Command, Flow, COMMANDS};
pub use input::clean_input;
pub use session::Session;

/// Prompt printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the REPL until `exit` or end of input.
///
/// Command failures are printed as `Error: ...` and the loop continues; only
/// a failure to read input or write output ends it early.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Welcome to the Pokedex!")?;
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = commands::find(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        debug!(command = command.name, ?args, "Running command");
        match command.run(session, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                debug!(command = command.name, error = %err, "Command failed");
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
