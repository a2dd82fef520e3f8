//! Logging setup.
//!
//! The library only emits `tracing` events. Hosts and tests that want to
//! see them call [`init`], which installs a fmt subscriber filtered by
//! `RUST_LOG` (default `warn`).

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "warn";

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once. Later calls do nothing, and an
/// already-installed subscriber from elsewhere is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global subscriber already installed");
        }
    });
}
