//! Tracing setup for the terminal calculator.
//!
//! Log records go to stderr so they never interleave with the rendered
//! calculator on stdout. A log file can be attached after startup.

use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    Layer, // provides .with_filter() for the console layer
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "warn,earnings_ui=info";

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`, coloured when ANSI is on.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{colour}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type FileHandle = Arc<Mutex<Option<File>>>;

/// Writes to a log file once one is attached; discards until then.
#[derive(Clone)]
struct FileSlot(FileHandle);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A panic mid-write leaves the file usable; keep logging.
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Statics ---

type SetFilterFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

static SET_LEVEL: OnceLock<SetFilterFn> = OnceLock::new();
static SET_CONSOLE: OnceLock<SetFilterFn> = OnceLock::new();
static FILE_SLOT: OnceLock<FileHandle> = OnceLock::new();

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> SetFilterFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("{what} reload failed: {e}"))
    })
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))
}

// --- Public API ---

/// Changes the active log filter at runtime.
///
/// Accepts a bare level (`"debug"`) or a full `EnvFilter` directive
/// (`"info,earnings_core=debug"`).
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = parse_filter(directive)?;
    match SET_LEVEL.get() {
        Some(f) => f(filter),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Shows or hides console (stderr) log output without affecting file logging.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    match SET_CONSOLE.get() {
        Some(f) => f(filter),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Appends log output to `path`, replacing any file already attached.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Detaches the log file, if any.
pub fn disable_file_logging() {
    if let Some(slot) = FILE_SLOT.get() {
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Initializes logging. Call once at startup.
///
/// The level comes from `directive` if given, then `RUST_LOG`, then
/// `warn,earnings_ui=info`. Repeated calls are ignored.
pub fn init_logging(directive: Option<&str>) -> Result<()> {
    let level = match directive {
        Some(directive) => parse_filter(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    };

    let file_inner: FileHandle = Arc::new(Mutex::new(None));
    let _ = FILE_SLOT.set(file_inner.clone());

    // Console on/off gate; the level filter stays the ceiling for both layers.
    let (console_gate, console_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let (level_filter, level_handle) = reload::Layer::new(level);

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(console_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = SET_LEVEL.set(reloader(level_handle, "filter"));
        let _ = SET_CONSOLE.set(reloader(console_handle, "console"));
    }
    Ok(())
}
