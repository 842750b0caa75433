//! Progress lines written to the terminal while scaffolding.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use console::{Term, style};

use crate::domain::CompletionSummary;
use crate::ports::ScaffoldReporter;

/// Writes `create : <path>` lines and the completion summary.
pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
    colored: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Report on stdout, colorizing only when stdout is a color-capable terminal.
    pub fn stdout() -> Self {
        let term = Term::stdout();
        let colored = term.is_term() && term.features().colors_supported();
        Self::new(io::stdout(), colored)
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out: Mutex::new(out), colored }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines<I: IntoIterator<Item = String>>(&self, lines: I) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            // Progress output is best effort; a closed stdout must not fail the scaffold.
            let _ = writeln!(out, "{}", line);
        }
        let _ = out.flush();
    }
}

impl<W: Write + Send> ScaffoldReporter for ConsoleReporter<W> {
    fn initializing(&self, template: &str) {
        self.write_lines([format!("Initializing using {} template...", template)]);
    }

    fn created(&self, path: &Path) {
        let label = style("create").cyan().force_styling(self.colored);
        self.write_lines([format!("   {} : {}", label, path.display())]);
    }

    fn finished(&self, summary: &CompletionSummary) {
        self.write_lines(summary.lines());
    }
}
