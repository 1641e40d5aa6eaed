//! routedoc: declarative route documentation to OpenAPI.
//!
//! This facade crate re-exports the routedoc sub-crates through a single
//! dependency. Import everything you need with:
//!
//! ```ignore
//! use routedoc::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature   | Default | Crate              |
//! |-----------|---------|--------------------|
//! | `openapi` | **yes** | `routedoc-openapi` |

pub extern crate routedoc_core;

pub use routedoc_core::*;

#[cfg(feature = "openapi")]
pub use routedoc_openapi;

pub mod prelude;

/// Install a `tracing_subscriber::fmt` subscriber filtered by `RUST_LOG`
/// (default `info`).
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
    {
        tracing::debug!("tracing initialised");
    }
}
