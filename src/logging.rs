use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer flushing for the life of the process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the tracing subscriber for an engine host process.
///
/// `RUST_LOG` selects the filter (default `info`). When `HM_LOG_DIR` points at
/// a writable directory, output goes to `<HM_LOG_DIR>/<component>.log` with
/// daily rotation; otherwise everything stays on stdout. Calling this twice is
/// harmless, the second init is a no-op.
pub fn init_tracing_subscriber(component: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match file_writer(component) {
        Some(writer) => {
            let _ = builder.with_writer(writer).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }
}

fn file_writer(component: &'static str) -> Option<BoxMakeWriter> {
    let dir = log_directory()?;
    let appender = tracing_appender::rolling::daily(dir, format!("{component}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

fn log_directory() -> Option<PathBuf> {
    let dir = PathBuf::from(std::env::var_os("HM_LOG_DIR")?);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(err) => {
            tracing::warn!(error = %err, dir = %dir.display(), "log directory unavailable, logging to stdout");
            None
        }
    }
}

/// Route panics through `tracing` so a crashing scoring request still leaves
/// a structured record. Installed at most once per process; set
/// `HM_LOG_INCLUDE_BACKTRACE=1` to chain into the default hook as well.
pub fn install_tracing_panic_hook(component: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        let chain_default = env_flag("HM_LOG_INCLUDE_BACKTRACE");

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".into());
            let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "non-string panic payload".to_string()
            };
            let thread = std::thread::current();

            tracing::error!(
                component,
                thread = thread.name().unwrap_or("unnamed"),
                %location,
                panic_message = %message,
                "panic captured"
            );

            if chain_default {
                previous(info);
            }
        }));
    });
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
