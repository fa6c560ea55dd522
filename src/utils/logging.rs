//! Diagnostic tracing for the scaffolder.
//!
//! User-facing progress messages go to stdout via `println!`; this module only
//! configures developer diagnostics, which are written to stderr and filtered
//! by `RUST_LOG` (default `warn`).
//!
//! ```bash
//! RUST_LOG=deno_scaffold=debug deno-scaffold --name demo
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests sharing a process) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
