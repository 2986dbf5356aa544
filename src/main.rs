// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use doc_translate::app_config::{self, Config};
use doc_translate::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the documentation (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for doc-translate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct TranslateArgs {
    /// Files or directories to translate instead of the configured targets
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Show what would be translated without writing
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Documentation root, overriding the config file
    #[arg(short, long)]
    docs_root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "doc-translate.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// doc-translate - German to English documentation rewriting
///
/// Replaces German phrases in markdown documentation with English ones from a
/// fixed dictionary, leaving code blocks, inline code, links and URLs alone.
#[derive(Parser, Debug)]
#[command(name = "doc-translate")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Dictionary-driven German to English documentation rewriting")]
#[command(long_about = "doc-translate rewrites German phrases in markdown documentation with English equivalents.

EXAMPLES:
    doc-translate                              # Translate the configured docs tree
    doc-translate --dry-run                    # Report what would change, write nothing
    doc-translate -d site/docs                 # Use a different docs root
    doc-translate docs/cli docs/intro.md       # Translate specific directories or files
    doc-translate completions bash > dt.bash   # Generate bash completions

CONFIGURATION:
    Targets are read from doc-translate.json by default. If the config file
    doesn't exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "doc-translate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args),
        None => run_translate(cli.translate),
    }
}

fn run_translate(options: TranslateArgs) -> Result<()> {
    let mut config = Config::load_or_create(&options.config_path)?;
    config.apply_overrides(options.docs_root, options.log_level.map(Into::into));
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    info!("doc-translate: German -> English");

    if options.paths.is_empty() {
        controller.run(options.dry_run)?;
    } else {
        controller.run_paths(&options.paths, options.dry_run);
    }

    Ok(())
}
