use std::io::stderr;
use std::sync::{LazyLock, Mutex};

use miette::{Context, IntoDiagnostic};
use tracing::Level;
use tracing_subscriber::reload;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, reload::Handle, util::SubscriberInitExt,
};

pub trait LogHandle: Send + Sync {
    fn set_filter(&self, new_filter: EnvFilter) -> miette::Result<()>;
}

impl<S> LogHandle for Handle<EnvFilter, S>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    fn set_filter(&self, new_filter: EnvFilter) -> miette::Result<()> {
        self.modify(|current| *current = new_filter)
            .into_diagnostic()
    }
}

static CONSOLE_HANDLE: LazyLock<Mutex<Box<dyn LogHandle>>> = LazyLock::new(|| {
    // Console layer with a reloadable filter, RUST_LOG taking priority.
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let (filter, handle) = reload::Layer::new(filter);
    let layer = fmt::layer()
        .without_time()
        .with_writer(stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).init();

    Mutex::new(Box::new(handle))
});

pub fn set_log_level(level: Level) -> miette::Result<()> {
    let new_filter = EnvFilter::new(level.to_string());

    CONSOLE_HANDLE
        .lock()
        .unwrap()
        .set_filter(new_filter)
        .with_context(|| format!("Failed to modify log filter to level: {level}"))
}

/// Initialize tracing. Safe to call once at startup.
pub fn init() {
    LazyLock::force(&CONSOLE_HANDLE);
}
