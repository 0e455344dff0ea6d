// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use ohms2mkv::app_config::{self, Config};
use ohms2mkv::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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
    /// Generate shell completions for ohms2mkv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ohms2mkv - OHMS index to Matroska chapters
///
/// Makes an MKV chapters XML file from an OHMS index XML file.
#[derive(Parser, Debug)]
#[command(name = "ohms2mkv")]
#[command(version)]
#[command(about = "Make an MKV Chapters xml file from an OHMS index xml file")]
#[command(long_about = "Make an MKV Chapters xml file from an OHMS index xml file.

Every indexed point becomes one chapter. The point title is shown in the
interview's primary language, the alternate title (if any) in the
alternate transcript language.

EXAMPLES:
    ohms2mkv -i interview.xml                     # Writes interview-MKV-Chapters.xml
    ohms2mkv -i interview.xml -o chapters.xml     # Explicit output path
    ohms2mkv -i interview.xml --lang-alt-reverse  # Swap title/title_alt languages
    ohms2mkv completions bash > ohms2mkv.bash     # Generate bash completions")]
#[command(subcommand_negates_reqs = true)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The OHMS index xml file
    #[arg(short, long, value_name = "PATH", required = true)]
    input: Option<PathBuf>,

    /// Output path for the converted MKV XML file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Reverse the language assignments between title and title_alt
    #[arg(long)]
    lang_alt_reverse: bool,

    /// Configuration file path (JSON)
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI style and tag for log level
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (style, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", style, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here; the effective level is applied via set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "ohms2mkv", &mut std::io::stdout());
        return Ok(());
    }

    run_convert(cli)
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Command line options take precedence over the config file
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if options.lang_alt_reverse {
        config.lang_alt_reverse = true;
    }

    log::set_max_level(config.log_level.into());
    debug!("Effective configuration: {:?}", config);

    let input = options
        .input
        .ok_or_else(|| anyhow::anyhow!("--input is required"))?;

    let controller = Controller::with_config(config)?;
    controller.run(&input, options.output.as_deref())?;

    Ok(())
}
