//! Terminal output for command results.
//!
//! Everything a command reports goes through [`OutputManager`] on stdout.
//! Errors and logs go to stderr and are handled elsewhere.

use std::io;

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Status line flavours, each with its own marker and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}",
            Tone::Warning => "\u{26a0}",
            Tone::Info => "\u{2139}",
        }
    }

    fn style(self) -> Style {
        match self {
            Tone::Success => Style::new().green(),
            Tone::Warning => Style::new().yellow(),
            Tone::Info => Style::new().blue(),
        }
    }
}

/// Writes command results to stdout, honouring `--quiet` and `--no-color`.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Plain line; dropped in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.human(msg.to_owned())
    }

    /// Payload meant for pipes (JSON, path lists). Quiet mode keeps it.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.human(self.paint(text, Style::new().cyan().bold()))
    }

    /// Secondary detail, e.g. paths a run left alone.
    pub fn muted(&self, text: &str) -> io::Result<()> {
        self.human(self.paint(text, Style::new().dimmed()))
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        let marker = self.paint(tone.marker(), tone.style().bold());
        self.human(format!("{marker} {}", self.paint(msg, tone.style())))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.style(style).to_string()
        }
    }

    fn human(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }
}
