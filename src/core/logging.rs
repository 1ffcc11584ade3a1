//! Injected logging sink
//!
//! The reader never touches the global logger on its own. It writes to the
//! [`log::Log`] it was given, which defaults to [`NoopLogger`]. Pass
//! [`log::logger()`] to forward events to the application's logger.

use log::{Log, Metadata, Record};

/// Sink that drops every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Log for NoopLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _: &Record<'_>) {}

    fn flush(&self) {}
}

pub(crate) static NOOP: NoopLogger = NoopLogger;

/// Log a formatted message to an explicit sink
macro_rules! emit {
    ($sink:expr, $level:expr, $($arg:tt)+) => {{
        let sink: &dyn ::log::Log = $sink;
        let metadata = ::log::Metadata::builder()
            .level($level)
            .target(module_path!())
            .build();
        if sink.enabled(&metadata) {
            sink.log(
                &::log::Record::builder()
                    .metadata(metadata)
                    .args(format_args!($($arg)+))
                    .module_path(Some(module_path!()))
                    .file(Some(file!()))
                    .line(Some(line!()))
                    .build(),
            );
        }
    }};
}

pub(crate) use emit;
