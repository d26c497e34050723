//! Tracing setup

use std::sync::Once;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Fallback directive when the configured one does not parse
pub const DEFAULT_DIRECTIVE: &str = "ledgerlens=info";

/// Install the global fmt subscriber
///
/// `RUST_LOG` is honoured; `directive` is added on top of it. Calling this
/// more than once, or after another subscriber was installed, is a no-op.
pub fn init_tracing(directive: &str) {
    TRACING_INIT.call_once(|| {
        let directive: Directive = directive
            .parse()
            .or_else(|_| DEFAULT_DIRECTIVE.parse())
            .unwrap_or_else(|_| LevelFilter::INFO.into());

        let filter = EnvFilter::from_default_env().add_directive(directive);

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
