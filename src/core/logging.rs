use std::{fmt::Result as FmtResult, io};

use eyre::{Result, WrapErr};
use huisbot_util::datetime::NAIVE_DATETIME_FORMAT;
use time::format_description::BorrowedFormatItem;
use tracing::{Event, Subscriber};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{
        format::Writer,
        time::{FormatTime, UtcTime},
        FmtContext, FormatEvent, FormatFields, Layer,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer as _,
};

use super::AppConfig;

const DEFAULT_FILE_FILTER: &str = "huisbot=trace,info";

/// Logs to stderr so that command output on stdout stays clean, and into a
/// daily rolling file.
///
/// The returned guard must be kept alive until the program ends, otherwise
/// buffered file logs might be lost.
pub fn init(config: &AppConfig) -> Result<WorkerGuard> {
    let console_filter = EnvFilter::try_new(&*config.console_filter)
        .wrap_err("invalid console log directives")?;

    let console_layer = Layer::default()
        .event_format(ConsoleEventFormat::default())
        .with_writer(io::stderr)
        .with_filter(console_filter);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("huisbot")
        .filename_suffix("log")
        .build(&config.log_path)
        .wrap_err("failed to create log file appender")?;

    let (file_writer, file_guard) = NonBlocking::new(file_appender);

    let file_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_FILE_FILTER)?,
    };

    let file_layer = Layer::default()
        .event_format(FileEventFormat::default())
        .with_writer(file_writer)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .wrap_err("failed to set global subscriber")?;

    let default_panic_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // First log the panic
        let payload = panic_info.payload();

        let payload = if let Some(s) = payload.downcast_ref::<&str>() {
            Some(&**s)
        } else {
            payload.downcast_ref::<String>().map(String::as_str)
        };

        let location = panic_info.location().map(|l| l.to_string());

        error!(payload, location, "A panic occurred");

        // Then call the default panic handler
        default_panic_hook(panic_info);
    }));

    Ok(file_guard)
}

struct ConsoleEventFormat {
    timer: UtcTime<&'static [BorrowedFormatItem<'static>]>,
}

impl Default for ConsoleEventFormat {
    fn default() -> Self {
        Self {
            timer: UtcTime::new(NAIVE_DATETIME_FORMAT),
        }
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> FmtResult {
        self.timer.format_time(&mut writer)?;
        let metadata = event.metadata();

        write!(writer, " {:>5} ", metadata.level())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

struct FileEventFormat {
    timer: UtcTime<&'static [BorrowedFormatItem<'static>]>,
}

impl Default for FileEventFormat {
    fn default() -> Self {
        Self {
            timer: UtcTime::new(NAIVE_DATETIME_FORMAT),
        }
    }
}

impl<S, N> FormatEvent<S, N> for FileEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> FmtResult {
        self.timer.format_time(&mut writer)?;
        let metadata = event.metadata();

        write!(writer, " {:>5} [{}] ", metadata.level(), metadata.target())?;

        match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => write!(writer, "[{file}:{line}] ")?,
            (Some(file), None) => write!(writer, "[{file}:?] ")?,
            (None, Some(line)) => write!(writer, "[?:{line}] ")?,
            (None, None) => {}
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
