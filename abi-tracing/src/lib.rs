//! Utility items shared between the ABI tool binaries.

use ansi_term::Colour;
use std::{
    env,
    io::{self, IsTerminal, Write},
};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::MakeWriter,
};

/// Prints `error: <txt>` to stderr, red when stderr is a terminal.
///
/// Bypasses the subscriber, so neither `RUST_LOG` nor silent mode hides it.
pub fn println_error(txt: &str) {
    let stderr = io::stderr();
    let colour = stderr.is_terminal().then_some(Colour::Red);
    let _ = write_error(&mut stderr.lock(), colour, txt);
}

fn write_error<W: Write>(writer: &mut W, colour: Option<Colour>, txt: &str) -> io::Result<()> {
    match colour {
        Some(colour) => writeln!(writer, "{}: {}", colour.bold().paint("error"), txt),
        None => writeln!(writer, "error: {txt}"),
    }
}

/// Logs `warning: <txt>` at WARN level.
pub fn println_warning(txt: &str) {
    tracing::warn!("warning: {}", txt);
}

const LOG_FILTER: &str = "RUST_LOG";

// ERROR and WARN go to stderr, everything else to stdout.
// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/trait.MakeWriter.html
struct StdioTracingWriter {
    writer_mode: TracingWriterMode,
}

impl<'a> MakeWriter<'a> for StdioTracingWriter {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.writer_mode == TracingWriterMode::Stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if self.writer_mode.is_stderr_for(meta.level()) {
            return Box::new(io::stderr());
        }
        Box::new(io::stdout())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingWriterMode {
    /// Write ERROR and WARN to stderr and everything else to stdout.
    Stdio,
    /// Write everything to stdout.
    Stdout,
    /// Write everything to stderr.
    Stderr,
}

impl TracingWriterMode {
    fn is_stderr_for(self, level: &Level) -> bool {
        match self {
            TracingWriterMode::Stderr => true,
            TracingWriterMode::Stdio => level <= &Level::WARN,
            TracingWriterMode::Stdout => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct TracingSubscriberOptions {
    pub verbosity: Option<u8>,
    pub silent: Option<bool>,
    pub log_level: Option<LevelFilter>,
    pub writer_mode: Option<TracingWriterMode>,
}

impl TracingSubscriberOptions {
    /// The level that overrides `RUST_LOG`, if any. An explicit level wins over
    /// verbosity, which wins over silent mode.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .or_else(|| {
                self.verbosity.and_then(|verbosity| match verbosity {
                    0 => None,
                    1 => Some(LevelFilter::DEBUG), // matches --verbose or -v
                    _ => Some(LevelFilter::TRACE), // matches -vv
                })
            })
            .or_else(|| match self.silent {
                Some(true) => Some(LevelFilter::OFF),
                _ => None,
            })
    }
}

/// A subscriber that prints like `println!`: no level, target, time or location.
///
/// `RUST_LOG` sets the minimum level, default is `INFO`.
pub fn init_tracing_subscriber(options: TracingSubscriberOptions) {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::new("info"),
    };
    let level_filter = options.level_filter();

    let builder = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_level(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_target(false)
        .with_writer(StdioTracingWriter {
            writer_mode: options.writer_mode.unwrap_or(TracingWriterMode::Stdio),
        });

    // A level from the options overrides `RUST_LOG`.
    if let Some(level_filter) = level_filter {
        builder.with_max_level(level_filter).init();
    } else {
        builder.init();
    }
}
