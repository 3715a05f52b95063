use clap::Parser;
use std::io;
use timesheet_formatter::application::{
    split_file, validate_file, FormatOptions, FormatTimesheetService,
};
use timesheet_formatter::cli::{format_split_summary, format_validation, Cli, Commands};
use timesheet_formatter::domain::FileKind;
use timesheet_formatter::error::{FormatterError, Result};
use timesheet_formatter::infrastructure::{
    Config, NoticeKind, Notifier, PresetChooser, PromptChooser, TerminalNotifier,
};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(FormatterError::NoFileSelected(kind)) => {
            debug!("No {} file selected, nothing to do", kind);
            std::process::exit(0)
        }
        Err(e) => {
            TerminalNotifier::default().notify(
                NoticeKind::Error,
                "Error",
                &e.display_with_suggestions(),
            );
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    trace!("{cli:?}");
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Format {
            timesheet,
            employees,
            output,
        } => {
            let stdin = io::stdin();
            let prompt = PromptChooser::new(stdin.lock(), io::stdout());
            let chooser = PresetChooser::new(timesheet, employees, prompt);
            let notifier = TerminalNotifier::new(!chooser.is_complete());

            let mut service = FormatTimesheetService::new(config, chooser, notifier);
            let outcome = service.execute(&FormatOptions { output })?;
            debug!("Report written to {}", outcome.output().display());
            Ok(())
        }
        Commands::Validate {
            timesheet,
            employees,
        } => {
            for (path, kind) in [
                (timesheet, FileKind::Timesheet),
                (employees, FileKind::Roster),
            ] {
                if let Some(path) = path {
                    let summary = validate_file(&path, kind)?;
                    println!("{}", format_validation(&path, &summary));
                }
            }
            Ok(())
        }
        Commands::Split { timesheet, output } => {
            let summary = split_file(&config, &timesheet, output.as_deref())?;
            println!("{}", format_split_summary(&summary));
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only log this crate, at the requested level.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
