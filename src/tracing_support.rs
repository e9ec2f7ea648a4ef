//! Tracing support for the algorithm layer.
//!
//! When the `tracing` feature is enabled, algorithms emit `debug!` events
//! and tests can install a formatting subscriber with [`init_tracing`].
//! When it is disabled, the same macro name compiles to a no-op so call
//! sites stay unconditional.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a formatting subscriber once per process. Safe to call
    /// from every test.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    pub use tracing::debug;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {}

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    pub use debug;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
