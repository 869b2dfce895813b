//! Line-oriented session driver: one command per line against one Workbench.

use std::io::{BufRead, Write};

use crate::engine::{Command, Workbench, COMMANDS};
use crate::types::{GraphError, GraphResult};

/// How the shell prints outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFormat {
    Text,
    Json,
}

/// Read commands from `input` until EOF or `quit`, writing one reply per line.
///
/// Command failures are reported and the session continues; only I/O errors
/// on `input`/`output` end the loop.
pub fn run_shell(
    workbench: &mut Workbench,
    input: &mut impl BufRead,
    output: &mut impl Write,
    format: ShellFormat,
) -> GraphResult<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match trimmed {
            "quit" | "exit" => break,
            "help" | "?" => {
                write_help(output)?;
                continue;
            }
            _ => {}
        }

        let result = trimmed
            .parse::<Command>()
            .and_then(|command| workbench.execute(command));

        match (result, format) {
            (Ok(outcome), ShellFormat::Text) => writeln!(output, "{}", outcome)?,
            (Ok(outcome), ShellFormat::Json) => {
                writeln!(output, "{}", serde_json::to_string(&outcome).unwrap_or_default())?
            }
            (Err(e), format) => write_error(output, &e, format)?,
        }
    }
    output.flush()?;
    Ok(())
}

fn write_error(output: &mut impl Write, error: &GraphError, format: ShellFormat) -> GraphResult<()> {
    match format {
        ShellFormat::Text => {
            let prefix = if error.is_warning() { "Warning" } else { "Error" };
            writeln!(output, "{}: {}", prefix, error)?;
        }
        ShellFormat::Json => {
            let value = serde_json::json!({
                "error": error.kind(),
                "message": error.to_string(),
                "warning": error.is_warning(),
            });
            writeln!(output, "{}", value)?;
        }
    }
    Ok(())
}

fn write_help(output: &mut impl Write) -> GraphResult<()> {
    writeln!(output, "Commands:")?;
    for (cmd, desc) in COMMANDS {
        writeln!(output, "  {cmd:<24} {desc}")?;
    }
    writeln!(output, "  {:<24} {}", "quit", "End the session")?;
    Ok(())
}
