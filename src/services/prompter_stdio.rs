//! Line-based prompts over standard input and output.

use std::io::{self, BufRead, Write};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompts on stdout and reads answers from stdin.
///
/// Both handles are locked for one question and released before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioPrompter;

impl Prompter for StdioPrompter {
    fn prompt_string(&mut self, message: &str, default: &str) -> Result<String, AppError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ask_line(&mut stdin.lock(), &mut stdout.lock(), message, default)
    }
}

/// Write the question, read one line, strip only the line terminator.
pub(crate) fn ask_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    default: &str,
) -> Result<String, AppError> {
    let prompt = if default.is_empty() {
        format!("{}: ", message)
    } else {
        format!("{} [{}]: ", message, default)
    };
    writer.write_all(prompt.as_bytes()).map_err(|e| prompt_error(message, e))?;
    writer.flush().map_err(|e| prompt_error(message, e))?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| prompt_error(message, e))?;

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    if answer.is_empty() { Ok(default.to_string()) } else { Ok(answer.to_string()) }
}

fn prompt_error(message: &str, err: io::Error) -> AppError {
    AppError::Prompt { what: message.to_lowercase(), details: err.to_string() }
}
