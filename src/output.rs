// src/output.rs
use console::{style, Term};

/// User-facing diagnostics on stderr. Only used while the terminal is in its
/// normal state, never while the countdown owns the screen.
pub struct Output {
    quiet: bool,
    verbose: bool,
    term: Term,
}

impl Output {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            term: Term::stderr(),
        }
    }

    pub fn verbose(&self, msg: &str) {
        if self.verbose && !self.quiet {
            let _ = self.term.write_line(&format!("  {}", style(msg).dim()));
        }
    }

    pub fn warning(&self, msg: &str) {
        if !self.quiet {
            let _ = self.term.write_line(&format!("{}: {}", style("Warning").yellow(), msg));
        }
    }

    pub fn error(&self, msg: &str) {
        let _ = self.term.write_line(&format!("{}: {}", style("Error").red(), msg));
    }
}
