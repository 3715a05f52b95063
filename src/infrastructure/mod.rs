//! Infrastructure layer - Files on disk and user interaction

pub mod config;
pub mod csv_file;
pub mod dialog;

pub use config::Config;
pub use csv_file::{create_output, parse_table, read_table};
pub use dialog::{FileChooser, NoticeKind, Notifier, PresetChooser, PromptChooser, TerminalNotifier};
