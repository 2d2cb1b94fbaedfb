//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;

    pub use puffin::{profile_function, profile_scope};

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Start a puffin HTTP server on the default port (8585).
    pub fn init_profiling() {
        puffin::set_scopes_on(true);
        match puffin_http::Server::new("0.0.0.0:8585") {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }

    /// Mark the start of a new profiling frame.
    #[inline]
    pub fn new_frame() {
        puffin::GlobalProfiler::lock().new_frame();
    }
}

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(not(feature = "profiling"))]
mod disabled {
    #[macro_export]
    macro_rules! profile_function {
        () => {};
        ($data:expr) => {};
    }

    #[macro_export]
    macro_rules! profile_scope {
        ($name:expr) => {};
        ($name:expr, $data:expr) => {};
    }

    pub use crate::{profile_function, profile_scope};

    pub fn init_profiling() {
        tracing::debug!("profiling requested but the `profiling` feature is disabled");
    }

    #[inline]
    pub fn new_frame() {}
}

#[cfg(not(feature = "profiling"))]
pub use disabled::*;
