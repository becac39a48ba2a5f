//! Subscriber installation for the `siftc` binary.

use std::sync::Once;

use crate::config::CliConfig;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// Events go to stderr so demonstration output on stdout stays clean. An
/// unparsable directive falls back to `warn` with a note on stderr.
pub fn init_tracing(config: &CliConfig) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directive = config.filter_directive();
        let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!("warning: ignoring log filter `{directive}`: {err}");
            EnvFilter::new("warn")
        });

        let registry = tracing_subscriber::registry().with(filter);
        if config.tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
