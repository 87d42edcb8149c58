//! Process-wide tracing setup.
//!
//! A registry with a reloadable level filter feeds two layers: stdout
//! (coloured on a terminal, can be muted) and a file whose target can be
//! set after startup.

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, debug};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

const DEFAULT_FILTER: &str = "info,commission_ui=debug";

/// `timestamp LEVEL file:line fields`, timestamps in local time.
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
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

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

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
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

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock_file(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer that discards output until a file is installed.
#[derive(Clone)]
struct FileSlot(SharedFile);

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
        SlotWriter(lock_file(&self.0))
    }
}

type FilterReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

static LEVEL_RELOAD: OnceLock<FilterReloadFn> = OnceLock::new();
static STDOUT_RELOAD: OnceLock<FilterReloadFn> = OnceLock::new();
static FILE_SLOT: OnceLock<SharedFile> = OnceLock::new();

fn store_reload<S>(
    cell: &OnceLock<FilterReloadFn>,
    handle: reload::Handle<EnvFilter, S>,
) where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = cell.set(Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("filter reload failed: {e}"))
    }));
}

fn reload(
    cell: &OnceLock<FilterReloadFn>,
    filter: EnvFilter,
) -> Result<()> {
    match cell.get() {
        Some(f) => f(filter),
        None => bail!("logging not yet initialized"),
    }
}

/// Changes the active log filter. Accepts a bare level or any `EnvFilter` directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))?;
    reload(&LEVEL_RELOAD, filter)
}

/// Shows or hides stdout output. File logging is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    // The global level filter still applies on top of "trace".
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    reload(&STDOUT_RELOAD, filter)
}

/// Starts appending log output to `path`, replacing any open log file.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *lock_file(slot) = Some(file);
            Ok(())
        }
        None => bail!("logging not yet initialized"),
    }
}

/// Closes the current log file, if any.
pub fn disable_file_logging() {
    if let Some(slot) = FILE_SLOT.get() {
        *lock_file(slot) = None;
    }
}

/// Installs the subscriber. Call once at startup, before [`apply_config`].
///
/// Level comes from `RUST_LOG` when set, otherwise `info` with debug output
/// for this crate.
pub fn init_default_logging() {
    let file_inner: SharedFile = Arc::new(Mutex::new(None));
    let _ = FILE_SLOT.set(file_inner.clone());

    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let (level_filter, level_handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    );

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file_inner));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_reload(&LEVEL_RELOAD, level_handle);
        store_reload(&STDOUT_RELOAD, stdout_handle);
    }
}

/// Applies the `[logging]` section of the configuration.
pub fn apply_config(config: &LoggingConfig) -> Result<()> {
    if let Some(level) = &config.level {
        set_log_level(level)?;
    }
    set_stdout_enabled(config.stdout)?;

    match &config.file {
        Some(path) => enable_file_logging(path)?,
        None => disable_file_logging(),
    }

    debug!(?config, "logging configured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tracing::info;

    use super::*;

    // The subscriber and its reload handles are process-wide.
    static LOGGING_LOCK: Mutex<()> = Mutex::new(());

    fn init_for_test() -> MutexGuard<'static, ()> {
        let guard = LOGGING_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        init_default_logging();
        guard
    }

    fn temp_log_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("commission-ui-{}-{name}.log", std::process::id()))
    }

    #[test]
    fn set_log_level_rejects_malformed_directive() {
        let err = set_log_level("commission_ui=verbose").unwrap_err();

        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn file_logging_writes_until_disabled() {
        let _guard = init_for_test();
        let path = temp_log_path("enable-disable");
        let _ = fs::remove_file(&path);

        set_log_level("info").unwrap();
        enable_file_logging(&path).unwrap();
        info!("written while file logging is on");
        disable_file_logging();
        info!("written after file logging was turned off");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("written while file logging is on"));
        assert!(!contents.contains("written after file logging was turned off"));
        assert!(contents.contains(" INFO "));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn enable_file_logging_fails_for_missing_directory() {
        let _guard = init_for_test();
        let path = temp_log_path("missing-dir").join("nested").join("app.log");

        let err = enable_file_logging(&path).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }

    #[test]
    fn apply_config_sets_level_stdout_and_file() {
        let _guard = init_for_test();
        let path = temp_log_path("apply-config");
        let _ = fs::remove_file(&path);

        apply_config(&LoggingConfig {
            level: Some("debug".to_string()),
            stdout: false,
            file: Some(path.clone()),
        })
        .unwrap();
        debug!("debug event reaches the configured file");

        apply_config(&LoggingConfig::default()).unwrap();
        set_log_level("info").unwrap();
        debug!("debug event after the file was closed");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("debug event reaches the configured file"));
        assert!(!contents.contains("debug event after the file was closed"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn stdout_can_be_toggled_after_init() {
        let _guard = init_for_test();

        set_stdout_enabled(false).unwrap();
        set_stdout_enabled(true).unwrap();
    }
}
