//! Diagnostics for the `interactome` binary.
//!
//! Reports such as summaries, listings and matrices are printed on `stdout`
//! and may be piped into other tools, so every diagnostic goes to `stderr`.
//! Loading, building and regenerating a network run inside the `cli.*` and
//! `core.*` spans; each span logs one line with its timing when it closes.
//! `INTERACTOME_LOG_FORMAT` switches between terminal lines and JSON objects
//! carrying the span chain. `RUST_LOG` overrides the default filter.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "INTERACTOME_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset: network events at `info`, everything
/// else only when it warns.
const DEFAULT_FILTER: &str =
    "warn,interactome_cli=info,interactome_core=info,interactome_providers_text=info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Encoding of diagnostic lines on `stderr`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact lines for an interactive terminal.
    #[default]
    Human,
    /// One JSON object per event with the enclosing `cli.*`/`core.*` spans.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while setting up diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `INTERACTOME_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `INTERACTOME_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// Another subscriber already owns the global dispatcher.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Sets up diagnostics once per process.
///
/// Later calls return immediately. If a subscriber was installed by someone
/// else the existing one is kept and a note is printed on `stderr`.
///
/// # Errors
/// Returns [`LoggingError`] when `INTERACTOME_LOG_FORMAT` is not Unicode or
/// names an unknown format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    match install_subscriber(format, default_filter()) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn install_subscriber(format: LogFormat, filter: EnvFilter) -> Result<(), LoggingError> {
    let lines = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let lines = match format {
        LogFormat::Json => lines
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => lines.with_target(false).boxed(),
    };

    // Dependencies logging through `log` share the same sink.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(lines)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
