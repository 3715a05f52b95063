//! User interaction: choosing input files and showing notices
//!
//! The pipeline only talks to [`FileChooser`] and [`Notifier`]; the binary
//! wires in the terminal implementations below and tests use in-memory ones.

use crate::domain::FileKind;
use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Severity of a notice shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Shown right before the user is asked for a file
    Prompt,
    Info,
    Warning,
    Error,
}

/// Supplies input file paths
pub trait FileChooser {
    /// Ask for a file of the given kind. `Ok(None)` means the user cancelled.
    fn choose_input_file(&mut self, kind: FileKind) -> Result<Option<PathBuf>>;
}

/// Shows notices to the user
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}

impl<T: FileChooser + ?Sized> FileChooser for &mut T {
    fn choose_input_file(&mut self, kind: FileKind) -> Result<Option<PathBuf>> {
        (**self).choose_input_file(kind)
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        (**self).notify(kind, title, message)
    }
}

/// Asks for a path on a line-oriented terminal
///
/// An empty answer or end of input counts as cancelling.
pub struct PromptChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptChooser { input, output }
    }
}

impl<R: BufRead, W: Write> FileChooser for PromptChooser<R, W> {
    fn choose_input_file(&mut self, kind: FileKind) -> Result<Option<PathBuf>> {
        write!(self.output, "{} file: ", kind.title())?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        // Paths dragged into a terminal often arrive quoted
        let answer = answer.trim().trim_matches(|c: char| c == '"' || c == '\'');
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}

/// Uses paths given up front, asking `fallback` for any that are missing
pub struct PresetChooser<C> {
    timesheet: Option<PathBuf>,
    roster: Option<PathBuf>,
    fallback: C,
}

impl<C: FileChooser> PresetChooser<C> {
    pub fn new(timesheet: Option<PathBuf>, roster: Option<PathBuf>, fallback: C) -> Self {
        PresetChooser {
            timesheet,
            roster,
            fallback,
        }
    }

    /// True when every path was given up front
    pub fn is_complete(&self) -> bool {
        self.timesheet.is_some() && self.roster.is_some()
    }
}

impl<C: FileChooser> FileChooser for PresetChooser<C> {
    fn choose_input_file(&mut self, kind: FileKind) -> Result<Option<PathBuf>> {
        let preset = match kind {
            FileKind::Timesheet => self.timesheet.take(),
            FileKind::Roster => self.roster.take(),
        };
        match preset {
            Some(path) => Ok(Some(path)),
            None => self.fallback.choose_input_file(kind),
        }
    }
}

/// Prints notices: prompts and info to stdout, warnings and errors to stderr
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier {
    show_prompts: bool,
}

impl TerminalNotifier {
    /// `show_prompts` should be false when no file will actually be asked for
    pub fn new(show_prompts: bool) -> Self {
        TerminalNotifier { show_prompts }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        debug!(?kind, title = title, "showing notice");
        match kind {
            NoticeKind::Prompt if !self.show_prompts => {}
            NoticeKind::Prompt | NoticeKind::Info => println!("{}: {}", title, message),
            NoticeKind::Warning | NoticeKind::Error => eprintln!("{}: {}", title, message),
        }
    }
}
