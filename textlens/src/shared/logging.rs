use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::fs::{self, File};
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::{Format, PrettyFields};
use tracing_subscriber::{Registry, filter::filter_fn, prelude::*};

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    #[arg(skip = LevelFilter::WARN)]
    default_level: LevelFilter,
}

impl Default for LoggingOpts {
    fn default() -> Self {
        Self {
            verbose: 0,
            default_level: LevelFilter::WARN,
        }
    }
}

/// Keeps the file writer alive. Dropping it flushes the log file.
pub struct ConfiguredLogger {
    _guard: WorkerGuard,
    pub log_location: String,
}

pub fn log_dir() -> PathBuf {
    std::env::temp_dir().join("textlens")
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => self.default_level,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the global subscriber.
    ///
    /// Everything is written to `<tmp>/textlens/textlens-<prefix>-<run_id>.log`.
    /// The console (stderr) only shows events targeted at `user`, filtered by
    /// verbosity, and events targeted at `always`.
    pub fn configure_logging(&self, run_id: &str, prefix: &str) -> Result<ConfiguredLogger> {
        let log_dir = log_dir();
        fs::create_dir_all(&log_dir)?;
        let file_path = log_dir.join(format!("textlens-{}-{}.log", prefix, run_id));

        let (non_blocking, guard) = tracing_appender::non_blocking(
            strip_ansi_escapes::Writer::new(File::create(&file_path)?),
        );

        let file_output = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_ansi(false)
            .with_writer(non_blocking);

        let level_filter = self.to_level_filter();
        let console_output = tracing_subscriber::fmt::layer()
            .event_format(
                Format::default()
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .with_writer(std::io::stderr)
            .fmt_fields(PrettyFields::new())
            .with_filter(filter_fn(move |metadata| match metadata.target() {
                "user" => level_filter >= *metadata.level(),
                "always" => true,
                _ => false,
            }));

        let subscriber = Registry::default().with(console_output).with(file_output);

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(ConfiguredLogger {
            _guard: guard,
            log_location: file_path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_maps_to_level() {
        let mut opts = LoggingOpts::default();
        assert_eq!(LevelFilter::WARN, opts.to_level_filter());

        opts.verbose = 1;
        assert_eq!(LevelFilter::INFO, opts.to_level_filter());
        opts.verbose = 2;
        assert_eq!(LevelFilter::DEBUG, opts.to_level_filter());
        opts.verbose = 7;
        assert_eq!(LevelFilter::TRACE, opts.to_level_filter());
    }

    #[test]
    fn test_log_dir_is_under_temp() {
        assert!(log_dir().starts_with(std::env::temp_dir()));
    }
}
