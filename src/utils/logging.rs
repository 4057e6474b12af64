//! Run logger with a console sink and a rotating file sink.
//!
//! A [`RunLog`] is created once in `main` and handed to every pipeline step
//! by reference. Each sink is its own `env_logger` logger built with
//! [`env_logger::Builder::build`], so nothing is installed globally. `RunLog`
//! implements [`log::Log`] and forwards every record to both.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Local;
use console::style;
use env_logger::fmt::Formatter;
use env_logger::{Builder, Logger, Target, WriteStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};

use super::rotate::{RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use super::styling::WARN;

/// Name printed in every log line
pub const LOGGER_NAME: &str = "tocrename";

/// Default log file, created in the current working directory
pub const DEFAULT_LOG_FILE: &str = "rename.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Where and how much to log
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub console: bool,
    pub file: Option<PathBuf>,
    pub max_bytes: u64,
    pub backups: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            console: true,
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            max_bytes: DEFAULT_MAX_BYTES,
            backups: DEFAULT_BACKUPS,
        }
    }
}

impl LogSettings {
    /// File sink only, at debug level. Used by tests and quiet callers.
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            level: LevelFilter::Debug,
            console: false,
            file: Some(path.into()),
            ..Default::default()
        }
    }
}

/// Logging context passed explicitly through the pipeline
pub struct RunLog {
    level: LevelFilter,
    console: Option<Logger>,
    file: Option<Logger>,
    file_failed: Arc<AtomicBool>,
}

impl RunLog {
    /// Open the configured sinks. Fails only if the log file cannot be opened.
    pub fn open(settings: &LogSettings) -> io::Result<Self> {
        let file: Option<Box<dyn Write + Send>> = match &settings.file {
            Some(path) => Some(Box::new(RotatingFile::open(
                path,
                settings.max_bytes,
                settings.backups,
            )?)),
            None => None,
        };

        Ok(Self::with_sinks(settings.level, settings.console, file))
    }

    /// A logger with no sinks at all
    pub fn silent() -> Self {
        Self::with_sinks(LevelFilter::Off, false, None)
    }

    fn with_sinks(level: LevelFilter, console: bool, file: Option<Box<dyn Write + Send>>) -> Self {
        let file_failed = Arc::new(AtomicBool::new(false));

        let console = console.then(|| {
            Builder::new()
                .filter_level(level)
                .target(Target::Stderr)
                .format(format_console)
                .build()
        });

        let file = file.map(|writer| {
            let sink = FileSink {
                inner: writer,
                failed: Arc::clone(&file_failed),
            };
            Builder::new()
                .filter_level(level)
                .target(Target::Pipe(Box::new(sink)))
                .write_style(WriteStyle::Never)
                .format(format_file)
                .build()
        });

        Self {
            level,
            console,
            file,
            file_failed,
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Whether a write to the log file has failed during this run
    pub fn file_sink_failed(&self) -> bool {
        self.file_failed.load(Ordering::Relaxed)
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, message);
    }

    fn emit(&self, level: Level, message: impl fmt::Display) {
        self.log(
            &Record::builder()
                .level(level)
                .target(LOGGER_NAME)
                .args(format_args!("{}", message))
                .build(),
        );
    }
}

impl Log for RunLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        for sink in self.console.iter().chain(&self.file) {
            sink.log(record);
        }
    }

    fn flush(&self) {
        for sink in self.console.iter().chain(&self.file) {
            sink.flush();
        }
    }
}

impl fmt::Debug for RunLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLog")
            .field("level", &self.level)
            .field("console", &self.console.is_some())
            .field("file", &self.file.is_some())
            .field("file_failed", &self.file_sink_failed())
            .finish()
    }
}

fn format_console(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {} - {}",
        style(Local::now().format(TIMESTAMP_FORMAT)).dim().for_stderr(),
        LOGGER_NAME,
        styled_level(record.level()),
        record.args()
    )
}

fn format_file(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {} - {}",
        Local::now().format(TIMESTAMP_FORMAT),
        LOGGER_NAME,
        record.level(),
        record.args()
    )
}

fn styled_level(level: Level) -> console::StyledObject<Level> {
    let styled = match level {
        Level::Error => style(level).red().bold(),
        Level::Warn => style(level).yellow(),
        Level::Info => style(level).green(),
        Level::Debug | Level::Trace => style(level).dim(),
    };
    styled.for_stderr()
}

/// Writer behind the file logger. The first failed write prints a single
/// notice on stderr; env_logger itself discards sink errors.
struct FileSink<W> {
    inner: W,
    failed: Arc<AtomicBool>,
}

impl<W> FileSink<W> {
    fn check<T>(&self, result: io::Result<T>) -> io::Result<T> {
        if let Err(err) = &result {
            if !self.failed.swap(true, Ordering::Relaxed) {
                eprintln!(
                    "{}Could not write to the log file ({}); log lines may be missing from it",
                    WARN, err
                );
            }
        }
        result
    }
}

impl<W: Write> Write for FileSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        self.check(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.check(result)
    }
}
