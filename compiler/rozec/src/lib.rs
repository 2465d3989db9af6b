//! Roze driver.
//!
//! Ties the phases together: lexing, parsing, compiling and running. The
//! [`driver`] functions take source text and return values or diagnostics
//! without touching the terminal; [`commands`] wraps them for the `roze`
//! binary, which is the only place an error ends the process.

pub mod commands;
pub mod driver;

pub use driver::{check_source, run_source, RunError, RunOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=roze_eval=debug`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
