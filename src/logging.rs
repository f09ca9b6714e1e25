use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Install a `tracing` fmt subscriber for the web view process.
///
/// TRACE in debug builds, INFO in release builds, `RUST_LOG` overrides either.
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    // Tracing (Debug)
    #[cfg(debug_assertions)]
    let default_level = LevelFilter::TRACE;

    // Tracing (Release)
    #[cfg(not(debug_assertions))]
    let default_level = LevelFilter::INFO;

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}
